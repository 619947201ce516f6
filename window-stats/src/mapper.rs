use crate::{
    InvalidWindowError, Sample, VariancePolicy, WindowIndexer, WindowKernel, WindowMetrics,
    WindowSpec, WindowStatsError, WindowStatsResult,
};
use rayon::prelude::*;
use tracing::info;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ExecutionStrategy {
    /// Windows are computed one after another on the calling thread.
    Sequential,
    /// Windows are distributed over the current rayon thread pool.
    #[default]
    Parallel,
}

/// Applies a [WindowKernel] to every window of a recording.
///
/// The output is allocated with one slot per window before any window is
/// computed, and each work unit writes only the slot of its own ordinal.
/// Results are therefore identical for every [ExecutionStrategy].
#[derive(Debug, Clone, Copy)]
pub struct WindowMapper {
    spec: WindowSpec,
    policy: VariancePolicy,
    strategy: ExecutionStrategy,
}

impl WindowMapper {
    pub fn new(spec: WindowSpec, policy: VariancePolicy, strategy: ExecutionStrategy) -> Self {
        Self {
            spec,
            policy,
            strategy,
        }
    }

    pub fn spec(&self) -> WindowSpec {
        self.spec
    }

    pub fn strategy(&self) -> ExecutionStrategy {
        self.strategy
    }

    pub fn map(&self, samples: &[Sample]) -> WindowStatsResult<Vec<WindowMetrics>> {
        let indexer = WindowIndexer::new(samples.len(), self.spec)?;
        self.map_indexed(&indexer, samples)
    }

    /// As [WindowMapper::map], reusing windows already enumerated by the caller.
    /// Windows of `indexer` that do not match this mapper's window length, or
    /// that run past `samples`, fail with [InvalidWindowError].
    #[tracing::instrument(skip_all, fields(num_samples = samples.len(), strategy = %self.strategy, num_windows = indexer.num_windows()))]
    pub fn map_indexed(
        &self,
        indexer: &WindowIndexer,
        samples: &[Sample],
    ) -> WindowStatsResult<Vec<WindowMetrics>> {
        let kernel = WindowKernel::new(self.spec.window_length(), self.policy);
        let mut output = vec![WindowMetrics::default(); indexer.num_windows()];

        let compute_slot =
            |(ordinal, slot): (usize, &mut WindowMetrics)| -> Result<(), WindowStatsError> {
                let window = indexer.window_of(samples, ordinal).ok_or(InvalidWindowError {
                    expected: kernel.window_length(),
                    actual: samples
                        .len()
                        .saturating_sub(ordinal * indexer.spec().stride()),
                })?;
                *slot = kernel.compute(window)?;
                Ok(())
            };

        match self.strategy {
            ExecutionStrategy::Sequential => {
                output.iter_mut().enumerate().try_for_each(&compute_slot)?
            }
            ExecutionStrategy::Parallel => output
                .par_iter_mut()
                .enumerate()
                .try_for_each(&compute_slot)?,
        }

        if indexer.discarded_tail() > 0 {
            info!(
                discarded_tail = indexer.discarded_tail(),
                "Trailing samples not covered by any window"
            );
        }
        Ok(output)
    }
}
