//! # colorout-lut
//!
//! Per-channel tone curve lookup tables for the output color profile stage.
//!
//! A [`ToneLut`] holds a fixed number of samples of a nonlinear curve over
//! the normalized domain [0, 1]. The fast output path stores one LUT per RGB
//! channel, filled with the inverse of the profile's tone response curve.
//!
//! # Usage
//!
//! ```rust
//! use colorout_lut::ToneLut;
//!
//! let lut = ToneLut::from_fn(1024, |x| x.powf(1.0 / 2.2)).unwrap();
//! let encoded = lut.lerp(0.18);
//! assert!(encoded > 0.18);
//!
//! // Out-of-domain and NaN inputs clamp to the edges.
//! assert_eq!(lut.lerp(f32::NAN), lut.samples()[0]);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod tone;

pub use error::{LutError, LutResult};
pub use tone::{lerp_lut, ToneLut, LUT_SAMPLES};
