use thiserror::Error;

pub type WindowStatsResult<T> = Result<T, WindowStatsError>;

/// Raised once, before any window is computed, when the recording
/// cannot hold a single window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error(
    "Insufficient samples for one window: {total_samples} samples available, window length is {window_length}"
)]
pub struct PreconditionError {
    pub total_samples: usize,
    pub window_length: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid window: expected {expected} samples, got {actual}")]
pub struct InvalidWindowError {
    pub expected: usize,
    pub actual: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WindowStatsError {
    #[error("{0}")]
    Precondition(#[from] PreconditionError),
    #[error("{0}")]
    InvalidWindow(#[from] InvalidWindowError),
}
