use crate::{PreconditionError, Sample};
use std::{num::NonZeroUsize, ops::Range};
use tracing::debug;

/// Window length and stride, both in samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSpec {
    window_length: NonZeroUsize,
    stride: NonZeroUsize,
}

impl WindowSpec {
    pub fn new(window_length: NonZeroUsize, stride: NonZeroUsize) -> Self {
        Self {
            window_length,
            stride,
        }
    }

    pub fn window_length(&self) -> usize {
        self.window_length.get()
    }

    pub fn stride(&self) -> usize {
        self.stride.get()
    }

    /// Number of samples shared by consecutive windows.
    pub fn overlap(&self) -> usize {
        self.window_length().saturating_sub(self.stride())
    }
}

/// Enumerates the windows that fit in a recording of `total_samples`.
///
/// Window `i` starts at `i * stride`. Samples after the end of the last
/// window are not covered by any window and are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowIndexer {
    total_samples: usize,
    spec: WindowSpec,
    num_windows: usize,
}

impl WindowIndexer {
    #[tracing::instrument(skip_all, level = "debug", fields(total_samples = total_samples, window_length = spec.window_length(), stride = spec.stride()))]
    pub fn new(total_samples: usize, spec: WindowSpec) -> Result<Self, PreconditionError> {
        let slack = total_samples
            .checked_sub(spec.window_length())
            .ok_or(PreconditionError {
                total_samples,
                window_length: spec.window_length(),
            })?;
        let num_windows = slack / spec.stride() + 1;

        let indexer = Self {
            total_samples,
            spec,
            num_windows,
        };
        debug!(
            num_windows,
            discarded_tail = indexer.discarded_tail(),
            "Windows enumerated"
        );
        Ok(indexer)
    }

    pub fn num_windows(&self) -> usize {
        self.num_windows
    }

    pub fn total_samples(&self) -> usize {
        self.total_samples
    }

    pub fn spec(&self) -> WindowSpec {
        self.spec
    }

    pub fn start_of(&self, ordinal: usize) -> Option<usize> {
        (ordinal < self.num_windows).then(|| ordinal * self.spec.stride())
    }

    pub fn range_of(&self, ordinal: usize) -> Option<Range<usize>> {
        let start = self.start_of(ordinal)?;
        Some(start..start + self.spec.window_length())
    }

    /// Borrows the samples of window `ordinal` without copying them.
    pub fn window_of<'a>(&self, samples: &'a [Sample], ordinal: usize) -> Option<&'a [Sample]> {
        samples.get(self.range_of(ordinal)?)
    }

    pub fn starts(&self) -> impl Iterator<Item = usize> + use<> {
        let stride = self.spec.stride();
        (0..self.num_windows).map(move |ordinal| ordinal * stride)
    }

    /// Number of samples from the start of the recording to the end of the last window.
    pub fn covered_samples(&self) -> usize {
        (self.num_windows - 1) * self.spec.stride() + self.spec.window_length()
    }

    pub fn discarded_tail(&self) -> usize {
        self.total_samples - self.covered_samples()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::spec;

    #[test]
    fn overlapping_windows() {
        let indexer = WindowIndexer::new(1000, spec(200, 100)).unwrap();
        assert_eq!(indexer.num_windows(), 9);
        assert_eq!(indexer.start_of(8), Some(800));
        assert_eq!(indexer.range_of(8), Some(800..1000));
        assert_eq!(indexer.start_of(9), None);
        assert_eq!(indexer.discarded_tail(), 0);
        assert_eq!(spec(200, 100).overlap(), 100);
    }

    #[test]
    fn exactly_one_window() {
        let indexer = WindowIndexer::new(200, spec(200, 100)).unwrap();
        assert_eq!(indexer.num_windows(), 1);
        assert_eq!(indexer.starts().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn insufficient_samples() {
        assert_eq!(
            WindowIndexer::new(199, spec(200, 100)),
            Err(PreconditionError {
                total_samples: 199,
                window_length: 200
            })
        );
        assert!(WindowIndexer::new(0, spec(1, 1)).is_err());
    }

    #[test]
    fn tail_is_discarded() {
        let indexer = WindowIndexer::new(1099, spec(200, 100)).unwrap();
        assert_eq!(indexer.num_windows(), 9);
        assert_eq!(indexer.covered_samples(), 1000);
        assert_eq!(indexer.discarded_tail(), 99);
    }

    #[test]
    fn stride_longer_than_window() {
        let indexer = WindowIndexer::new(25, spec(5, 10)).unwrap();
        assert_eq!(indexer.starts().collect::<Vec<_>>(), vec![0, 10, 20]);
        assert_eq!(indexer.discarded_tail(), 0);
        assert_eq!(spec(5, 10).overlap(), 0);
    }

    #[test]
    fn windows_never_overrun() {
        for total in 1..60 {
            for window_length in 1..=total {
                for stride in 1..12 {
                    let indexer = WindowIndexer::new(total, spec(window_length, stride)).unwrap();
                    let last = indexer.range_of(indexer.num_windows() - 1).unwrap();
                    assert!(last.end <= total);
                    // One more stride would overrun.
                    assert!(last.end + stride > total);
                }
            }
        }
    }

    #[test]
    fn window_view_borrows_samples() {
        let samples = (0..10)
            .map(|i| Sample::new([i as f64, 0., 0.], [0.; 3]))
            .collect::<Vec<_>>();
        let indexer = WindowIndexer::new(samples.len(), spec(4, 3)).unwrap();
        let window = indexer.window_of(&samples, 2).unwrap();
        assert_eq!(window.len(), 4);
        assert_eq!(window[0].accel()[0], 6.0);
        assert!(std::ptr::eq(&window[0], &samples[6]));
        assert!(indexer.window_of(&samples, 3).is_none());
    }
}
