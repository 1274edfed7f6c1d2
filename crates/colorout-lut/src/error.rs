//! LUT error types.

use thiserror::Error;

/// Result type for LUT operations.
pub type LutResult<T> = Result<T, LutError>;

/// Errors that can occur when building a LUT.
#[derive(Debug, Error)]
pub enum LutError {
    /// Invalid LUT size.
    #[error("invalid LUT size: {0}")]
    InvalidSize(String),

    /// A sample is NaN or infinite.
    #[error("non-finite LUT sample at index {index}: {value}")]
    NonFinite {
        /// Sample index
        index: usize,
        /// Offending value
        value: f32,
    },
}
