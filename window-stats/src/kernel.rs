use crate::{InvalidWindowError, Sample, WindowMetrics};
use imu_common::{ChannelArray, Real};

/// What to do when rounding leaves `E[x²] - E[x]²` slightly below zero.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum VariancePolicy {
    /// Negative residue is treated as zero variance.
    #[default]
    Clamp,
    /// The variance term is passed to `sqrt` as is, which yields NaN for a negative residue.
    Unclamped,
}

impl VariancePolicy {
    fn standard_deviation(self, mean_of_squares: Real, mean: Real) -> Real {
        let variance = mean_of_squares - mean * mean;
        match self {
            // Only negative residue is clamped, NaN from non-finite input passes through.
            Self::Clamp if variance < 0.0 => 0.0,
            Self::Clamp => variance.sqrt(),
            Self::Unclamped => variance.sqrt(),
        }
    }
}

#[derive(Default)]
struct WindowAccumulator {
    count: usize,
    sum: ChannelArray,
    sum_of_squares: ChannelArray,
    accel_energy: Real,
}

impl WindowAccumulator {
    fn push(&mut self, sample: &Sample) {
        for ((sum, sum_of_squares), value) in self
            .sum
            .iter_mut()
            .zip(self.sum_of_squares.iter_mut())
            .zip(sample.channels())
        {
            *sum += value;
            *sum_of_squares += value * value;
        }
        self.accel_energy += sample.accel_magnitude_squared();
        self.count += 1;
    }

    fn finish(self, policy: VariancePolicy) -> WindowMetrics {
        let n = self.count as Real;
        let mean = self.sum.map(|sum| sum / n);
        let mean_of_squares = self.sum_of_squares.map(|sum_of_squares| sum_of_squares / n);

        let mut stddev = ChannelArray::default();
        for ((stddev, mean_of_squares), mean) in
            stddev.iter_mut().zip(&mean_of_squares).zip(&mean)
        {
            *stddev = policy.standard_deviation(*mean_of_squares, *mean);
        }

        WindowMetrics {
            mean,
            rms: mean_of_squares.map(Real::sqrt),
            stddev,
            accel_energy: self.accel_energy,
        }
    }
}

/// Reduces one window of samples to its [WindowMetrics] in a single pass.
/// Holds no state between calls, so one kernel may be shared by any number of workers.
#[derive(Debug, Clone, Copy)]
pub struct WindowKernel {
    window_length: usize,
    policy: VariancePolicy,
}

impl WindowKernel {
    pub fn new(window_length: usize, policy: VariancePolicy) -> Self {
        Self {
            window_length,
            policy,
        }
    }

    pub fn window_length(&self) -> usize {
        self.window_length
    }

    pub fn policy(&self) -> VariancePolicy {
        self.policy
    }

    #[tracing::instrument(skip_all, level = "trace", fields(len = window.len()))]
    pub fn compute(&self, window: &[Sample]) -> Result<WindowMetrics, InvalidWindowError> {
        if window.len() != self.window_length || window.is_empty() {
            return Err(InvalidWindowError {
                expected: self.window_length,
                actual: window.len(),
            });
        }
        let mut accumulator = WindowAccumulator::default();
        for sample in window {
            accumulator.push(sample);
        }
        Ok(accumulator.finish(self.policy))
    }
}
