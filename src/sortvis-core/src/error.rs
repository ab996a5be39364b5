//! Error types for sortvis engines and sinks.

use thiserror::Error;

/// Result type alias using the core error type.
pub type Result<T> = std::result::Result<T, SortError>;

/// Core error type for sort runs.
///
/// Cancellation is not represented here: a cancelled run is a normal
/// [`RunOutcome`](crate::RunOutcome).
#[derive(Error, Debug)]
pub enum SortError {
    /// A delay was negative, NaN or infinite.
    #[error("invalid delay: {0} (expected a finite, non-negative number of seconds)")]
    InvalidDelay(f64),

    /// A frame carried a different number of tags than values.
    #[error("frame length mismatch: {values} values but {tags} tags")]
    FrameLengthMismatch {
        /// Number of values in the sequence.
        values: usize,
        /// Number of tags supplied.
        tags: usize,
    },

    /// An I/O error occurred while rendering.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The render sink failed.
    #[error("render sink error: {0}")]
    Sink(String),
}
