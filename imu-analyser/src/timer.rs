use serde::Serialize;
use std::time::{Duration, Instant};

#[derive(Default)]
pub(crate) struct Timer {
    start: Option<Instant>,
    duration: Duration,
}

impl Timer {
    pub(crate) fn record(&mut self) -> Option<()> {
        if self.start.is_none() {
            self.start = Some(Instant::now());
            Some(())
        } else {
            None
        }
    }

    pub(crate) fn end(&mut self) -> Option<()> {
        self.duration = Instant::now().checked_duration_since(self.start?)?;
        self.start = None;
        Some(())
    }

    /// Times `f`. The timer must not already be running.
    pub(crate) fn time<T>(&mut self, f: impl FnOnce() -> T) -> T {
        let started = self.record();
        debug_assert!(started.is_some(), "Timer::time called on a running timer");
        let result = f();
        self.end();
        result
    }


    pub(crate) fn duration(&self) -> Duration {
        self.duration
    }
}

#[derive(Default)]
pub(crate) struct TimerSuite {
    pub(crate) full: Timer,
    pub(crate) load: Timer,
    pub(crate) compute: Timer,
}

impl TimerSuite {
    pub(crate) fn timings(&self) -> Timings {
        Timings {
            load: self.load.duration(),
            compute: self.compute.duration(),
            full: self.full.duration(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub(crate) struct Timings {
    #[serde(rename = "load_us", serialize_with = "as_micros")]
    pub(crate) load: Duration,
    #[serde(rename = "compute_us", serialize_with = "as_micros")]
    pub(crate) compute: Duration,
    #[serde(rename = "full_us", serialize_with = "as_micros")]
    pub(crate) full: Duration,
}

fn as_micros<S: serde::Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(u64::try_from(duration.as_micros()).unwrap_or(u64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_twice_is_rejected() {
        let mut timer = Timer::default();
        assert_eq!(timer.record(), Some(()));
        assert_eq!(timer.record(), None);
        assert_eq!(timer.end(), Some(()));
        assert_eq!(timer.end(), None);
    }

    #[test]
    fn time_returns_result() {
        let mut timer = Timer::default();
        let value = timer.time(|| {
            std::thread::sleep(Duration::from_millis(2));
            7
        });
        assert_eq!(value, 7);
        assert!(timer.duration() >= Duration::from_millis(2));
    }

    #[test]
    #[should_panic(expected = "running timer")]
    fn time_rejects_running_timer() {
        let mut timer = Timer::default();
        timer.record();
        assert!(timer.start.is_some());
        timer.time(|| ());
    }

    #[test]
    fn timings_serialize_in_micros() {
        let timings = Timings {
            load: Duration::from_millis(3),
            compute: Duration::from_micros(250),
            full: Duration::from_secs(1),
        };
        let json = serde_json::to_value(timings).unwrap();
        assert_eq!(json["load_us"], 3000);
        assert_eq!(json["compute_us"], 250);
        assert_eq!(json["full_us"], 1_000_000);
    }
}
