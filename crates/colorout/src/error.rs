//! Error types for the output color profile stage.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for stage operations.
pub type ColoroutResult<T> = Result<T, ColoroutError>;

/// Errors raised by the stage.
///
/// Profile problems during a commit are recovered from and never surface
/// here; only setup failures and host contract violations do.
#[derive(Debug, Error)]
pub enum ColoroutError {
    /// ICC engine failure outside of profile resolution.
    #[error("ICC error: {0}")]
    Icc(#[from] colorout_icc::IccError),

    /// Pixel engine failure.
    #[error("compute error: {0}")]
    Compute(#[from] colorout_compute::ComputeError),

    /// I/O error reading a config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Config file not found.
    #[error("config file not found: {path}")]
    ConfigNotFound {
        /// Path that was searched.
        path: PathBuf,
    },

    /// Config value out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
