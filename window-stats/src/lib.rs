//! This crate computes summary statistics over overlapping windows of an
//! IMU recording (three accelerometer and three gyroscope channels).
//!
//! The recording is cut into windows of `window_length` samples whose
//! starts are `stride` samples apart. Each window is reduced independently
//! to a [WindowMetrics] record, so the windows may be processed in any
//! order or in parallel. Typical usage may look like:
//! ```rust
//! use std::num::NonZeroUsize;
//! use imu_window_stats::{ExecutionStrategy, Sample, VariancePolicy, WindowMapper, WindowSpec};
//!
//! let samples = vec![Sample::new([1.0, 0.0, 0.0], [0.0; 3]); 1000];
//! let spec = WindowSpec::new(
//!     NonZeroUsize::new(200).unwrap(),
//!     NonZeroUsize::new(100).unwrap(),
//! );
//! let metrics = WindowMapper::new(spec, VariancePolicy::Clamp, ExecutionStrategy::Parallel)
//!     .map(&samples)
//!     .unwrap();
//! assert_eq!(metrics.len(), 9);
//! assert_eq!(metrics[0].accel_energy, 200.0);
//! ```

mod error;
mod indexer;
mod kernel;
mod mapper;
mod sample;
mod window_metrics;

pub use error::{InvalidWindowError, PreconditionError, WindowStatsError, WindowStatsResult};
pub use indexer::{WindowIndexer, WindowSpec};
pub use kernel::{VariancePolicy, WindowKernel};
pub use mapper::{ExecutionStrategy, WindowMapper};
pub use sample::Sample;
pub use window_metrics::WindowMetrics;
