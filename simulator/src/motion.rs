use crate::noise::Noise;
use imu_common::{ChannelArray, Real};
use rand::Rng;
use serde::Serialize;
use std::f64::consts::TAU;

pub(crate) const STANDARD_GRAVITY: Real = 9.80665;
const STEP_FREQUENCY_HZ: Real = 2.0;
const SWAY_FREQUENCY_HZ: Real = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum Motion {
    /// Device lying flat, gravity along z.
    Rest,
    /// Vertical bounce at step frequency with lateral sway and yaw.
    Walking,
}

impl Motion {
    /// Noise-free channel values `time` seconds into the recording.
    pub(crate) fn channels_at(self, time: Real) -> ChannelArray {
        match self {
            Self::Rest => [0.0, 0.0, STANDARD_GRAVITY, 0.0, 0.0, 0.0],
            Self::Walking => {
                let step = TAU * STEP_FREQUENCY_HZ * time;
                let sway = TAU * SWAY_FREQUENCY_HZ * time;
                [
                    0.3 * step.cos(),
                    0.8 * sway.sin(),
                    STANDARD_GRAVITY + 2.0 * step.sin(),
                    0.2 * step.cos(),
                    0.1 * sway.cos(),
                    0.5 * sway.sin(),
                ]
            }
        }
    }
}

/// One CSV row, in the column order read by the analyser.
#[derive(Debug, Serialize)]
pub(crate) struct Row {
    pub(crate) t_ms: u64,
    pub(crate) clip_id: u32,
    pub(crate) ax: Real,
    pub(crate) ay: Real,
    pub(crate) az: Real,
    pub(crate) gx: Real,
    pub(crate) gy: Real,
    pub(crate) gz: Real,
    pub(crate) label: String,
}

pub(crate) struct Recording {
    pub(crate) motion: Motion,
    pub(crate) noise: Noise,
    pub(crate) sample_rate_hz: u32,
    pub(crate) clip_id: u32,
}

impl Recording {
    pub(crate) fn row<R: Rng + ?Sized>(&self, index: u64, rng: &mut R) -> Row {
        let time = index as Real / self.sample_rate_hz as Real;
        let [ax, ay, az, gx, gy, gz] = self
            .motion
            .channels_at(time)
            .map(|value| self.noise.noisify(value, rng));
        Row {
            t_ms: index * 1000 / u64::from(self.sample_rate_hz),
            clip_id: self.clip_id,
            ax,
            ay,
            az,
            gx,
            gy,
            gz,
            label: self.motion.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use rand::{SeedableRng, rngs::StdRng};

    fn recording(motion: Motion, std_dev: Real) -> Recording {
        Recording {
            motion,
            noise: Noise::new(std_dev).unwrap(),
            sample_rate_hz: 100,
            clip_id: 4,
        }
    }

    #[test]
    fn rest_is_gravity_only() {
        let mut rng = StdRng::seed_from_u64(0);
        let row = recording(Motion::Rest, 0.0).row(250, &mut rng);
        assert_eq!(row.t_ms, 2500);
        assert_eq!(row.clip_id, 4);
        assert_eq!([row.ax, row.ay, row.az], [0.0, 0.0, STANDARD_GRAVITY]);
        assert_eq!([row.gx, row.gy, row.gz], [0.0; 3]);
        assert_eq!(row.label, "rest");
    }

    #[test]
    fn walking_oscillates_around_gravity() {
        let mut rng = StdRng::seed_from_u64(0);
        let walking = recording(Motion::Walking, 0.0);
        // One full step period at 100 Hz and 2 Hz steps is 50 samples.
        let mean_az = (0..50).map(|i| walking.row(i, &mut rng).az).sum::<Real>() / 50.0;
        assert_approx_eq!(mean_az, STANDARD_GRAVITY, 1e-9);
        assert_approx_eq!(walking.row(0, &mut rng).ax, 0.3, 1e-12);
    }

    #[test]
    fn seeded_recordings_repeat() {
        let noisy = recording(Motion::Walking, 0.1);
        let mut first = StdRng::seed_from_u64(9);
        let mut second = StdRng::seed_from_u64(9);
        for i in 0..20 {
            let a = noisy.row(i, &mut first);
            let b = noisy.row(i, &mut second);
            assert_eq!([a.ax, a.gz], [b.ax, b.gz]);
        }
    }
}
