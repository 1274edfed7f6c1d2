//! # colorout
//!
//! Output color profile stage: converts CIE Lab (D50) pixel buffers into an
//! output RGB profile.
//!
//! Every parameter change resolves the requested profile into a
//! [`TransformPlan`](colorout_compute::TransformPlan):
//!
//! - matrix/TRC profiles become a 3x3 matrix plus three tone LUTs, cheap to
//!   evaluate and eligible for an accelerator
//! - everything else gets one Little CMS transform per worker thread
//! - profiles that can't be used at all are replaced by sRGB, with a
//!   warning in the user log
//!
//! Built-in profile names are `"sRGB"`, `"linear_rgb"` and `"adobergb"`;
//! `"X profile"` selects the display profile supplied by the host. Any other
//! name is looked up under `color/out/` in the configured directories.
//!
//! # Example
//!
//! ```rust
//! use colorout::{ColoroutConfig, ColoroutParams, ColoroutStage, PipeType};
//! use colorout_compute::PixelBuffer;
//!
//! let mut stage = ColoroutStage::new(ColoroutConfig::default(), PipeType::Export).unwrap();
//! let params = ColoroutParams {
//!     icc_profile: "adobergb".into(),
//!     ..Default::default()
//! };
//! assert!(!stage.commit(&params).substituted);
//!
//! let input = PixelBuffer::from_f32(vec![75.0, 20.0, -10.0, 1.0], 1, 1, 4).unwrap();
//! let mut output = PixelBuffer::new(1, 1, 4);
//! stage.process(&input, &mut output).unwrap();
//! assert_eq!(output.data()[3], 1.0);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod log;
mod params;
mod resolve;
mod stage;

pub use config::{ColoroutConfig, ExportOverrides, EXPORT_PROFILE_FROM_IMAGE, MIN_LUT_SAMPLES};
pub use error::{ColoroutError, ColoroutResult};
pub use log::{MemoryLog, TracingLog, UserLog};
pub use params::{ColoroutParams, PipeType, ProfileRequest, SYSTEM_PROFILE_NAME};
pub use resolve::{load_profile, resolve_plan, ResolveContext, Resolved, UNSUPPORTED_PROFILE_WARNING};
pub use stage::ColoroutStage;
