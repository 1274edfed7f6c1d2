//! # colorout-math
//!
//! Math primitives for converting working-space pixels to an output profile:
//!
//! - [`Mat3`] - 3x3 matrices for XYZ to device RGB transforms
//! - [`lab_to_xyz`] / [`xyz_to_lab`] - CIE Lab conversions against the D50 white
//!
//! # Convention
//!
//! Matrices are stored **row-major** and applied to **column vectors**:
//!
//! ```text
//! rgb = matrix * xyz
//! ```
//!
//! # Usage
//!
//! ```rust
//! use colorout_math::{Mat3, lab_to_xyz};
//!
//! let xyz = lab_to_xyz([50.0, 0.0, 0.0]);
//! let rgb = Mat3::IDENTITY.transform(xyz);
//! assert_eq!(rgb, xyz);
//! ```
//!
//! # Used By
//!
//! - `colorout-icc` - matrix extraction from profile colorants
//! - `colorout-compute` - the per-pixel fast path

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod lab;
mod mat3;

pub use lab::*;
pub use mat3::*;
