//! ICC error types.

use thiserror::Error;

/// Result type for ICC operations.
pub type IccResult<T> = Result<T, IccError>;

/// Errors that can occur during ICC operations.
///
/// None of these are fatal to the pipeline: profile resolution turns each
/// of them into either the general transform path or an sRGB substitution.
#[derive(Debug, Error)]
pub enum IccError {
    /// Failed to load profile from file.
    #[error("failed to load profile: {0}")]
    LoadFailed(String),

    /// Profile name could not be found in any search directory.
    #[error("profile not found: {0}")]
    NotFound(String),

    /// Failed to create profile.
    #[error("failed to create profile: {0}")]
    CreateFailed(String),

    /// Failed to create transform.
    #[error("failed to create transform: {0}")]
    TransformFailed(String),

    /// Invalid profile data.
    #[error("invalid profile data: {0}")]
    InvalidProfile(String),

    /// Profile is not built on a matrix/TRC model.
    #[error("profile is not a matrix shaper: {0}")]
    NotMatrixShaper(String),

    /// Colorant matrix cannot be inverted.
    #[error("colorant matrix is singular")]
    SingularMatrix,

    /// A tone curve could not be reversed into a usable LUT.
    #[error("tone curve cannot be inverted: {0}")]
    CurveInversion(String),
}
