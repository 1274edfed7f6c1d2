//! # colorout-icc
//!
//! ICC color profile support for the output color profile stage, built on
//! top of Little CMS 2.
//!
//! # Features
//!
//! - Load output profiles from files, memory, or a directory-backed store
//! - Built-in sRGB, linear Rec.709 and Adobe RGB (1998) profiles
//! - Derive a fast matrix + three tone LUTs from matrix/TRC profiles
//! - Precise Lab to RGB transforms for every other profile
//!
//! # Example
//!
//! ```rust
//! use colorout_icc::{ColorEngine, Intent, LcmsEngine, Profile, LUT_SAMPLES};
//!
//! let engine = LcmsEngine::new().unwrap();
//! let srgb = Profile::srgb();
//!
//! // Matrix/TRC profiles reduce to a matrix plus three LUTs.
//! let shaper = engine.derive_matrix_shaper(&srgb, LUT_SAMPLES).unwrap();
//! assert_eq!(shaper.luts[0].len(), LUT_SAMPLES);
//!
//! // Every profile can be reached through a general transform.
//! let xform = engine.lab_transform(&srgb, Intent::Perceptual).unwrap();
//! let mut rgb = [[0.0f32; 3]];
//! xform.transform_row(&[[50.0, 0.0, 0.0]], &mut rgb);
//! ```
//!
//! # Thread Safety
//!
//! Lab transforms are `Send` but not `Sync`: each worker owns its own
//! instance for the lifetime of a plan.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod engine;
mod error;
mod profile;
mod shaper;
mod standard;
mod store;
mod transform;

pub use colorout_lut::LUT_SAMPLES;
pub use engine::{ColorEngine, LcmsEngine, RowTransform};
pub use error::{IccError, IccResult};
pub use profile::Profile;
pub use shaper::MatrixShaper;
pub use standard::StandardProfile;
pub use store::{DirProfileStore, ProfileStore};
pub use transform::LabTransform;

use serde::{Deserialize, Serialize};

/// Rendering intent for color transformations.
///
/// Only the general transform path consults the intent; matrix shapers are
/// intent-agnostic. Deserializes from its name or its legacy index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "IntentRepr")]
pub enum Intent {
    /// Compresses the source gamut into the destination gamut.
    #[default]
    Perceptual,

    /// Maps source white to destination white and clips out-of-gamut colors.
    RelativeColorimetric,

    /// Maintains saturation at the expense of accuracy.
    Saturation,

    /// Preserves absolute colorimetry, including the white point.
    AbsoluteColorimetric,
}

impl Intent {
    /// All intents in legacy index order.
    pub const ALL: [Intent; 4] = [
        Intent::Perceptual,
        Intent::RelativeColorimetric,
        Intent::Saturation,
        Intent::AbsoluteColorimetric,
    ];

    /// Looks up an intent by its legacy integer index (0..=3).
    pub fn from_index(index: i64) -> Option<Self> {
        usize::try_from(index).ok().and_then(|i| Self::ALL.get(i).copied())
    }

    /// Short lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Intent::Perceptual => "perceptual",
            Intent::RelativeColorimetric => "relative_colorimetric",
            Intent::Saturation => "saturation",
            Intent::AbsoluteColorimetric => "absolute_colorimetric",
        }
    }
}

impl std::str::FromStr for Intent {
    type Err = IccError;

    /// Accepts a name (case-insensitive) or a legacy index.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(index) = s.trim().parse::<i64>() {
            return IntentRepr::Index(index).try_into();
        }
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|i| i.name() == lower)
            .ok_or_else(|| IccError::InvalidProfile(format!("unknown rendering intent `{s}`")))
    }
}

/// Serialized forms of [`Intent`].
#[derive(Deserialize)]
#[serde(untagged)]
enum IntentRepr {
    Index(i64),
    Name(String),
}

impl TryFrom<IntentRepr> for Intent {
    type Error = IccError;

    fn try_from(repr: IntentRepr) -> Result<Self, Self::Error> {
        match repr {
            IntentRepr::Index(index) => Self::from_index(index).ok_or_else(|| {
                IccError::InvalidProfile(format!("rendering intent index {index} out of range"))
            }),
            IntentRepr::Name(name) => name.parse(),
        }
    }
}

impl From<Intent> for lcms2::Intent {
    fn from(intent: Intent) -> Self {
        match intent {
            Intent::Perceptual => lcms2::Intent::Perceptual,
            Intent::RelativeColorimetric => lcms2::Intent::RelativeColorimetric,
            Intent::Saturation => lcms2::Intent::Saturation,
            Intent::AbsoluteColorimetric => lcms2::Intent::AbsoluteColorimetric,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_index() {
        assert_eq!(Intent::from_index(0), Some(Intent::Perceptual));
        assert_eq!(Intent::from_index(3), Some(Intent::AbsoluteColorimetric));
        assert_eq!(Intent::from_index(4), None);
        assert_eq!(Intent::from_index(-1), None);
    }

    #[test]
    fn test_intent_parse() {
        assert_eq!("saturation".parse::<Intent>().unwrap(), Intent::Saturation);
        assert_eq!(
            "Relative_Colorimetric".parse::<Intent>().unwrap(),
            Intent::RelativeColorimetric
        );
        assert!("vivid".parse::<Intent>().is_err());
        assert_eq!("1".parse::<Intent>().unwrap(), Intent::RelativeColorimetric);
        assert!("4".parse::<Intent>().is_err());
    }

    #[test]
    fn test_intent_deserialize_legacy_index() {
        assert_eq!(serde_yaml::from_str::<Intent>("2").unwrap(), Intent::Saturation);
        assert_eq!(
            serde_yaml::from_str::<Intent>("absolute_colorimetric").unwrap(),
            Intent::AbsoluteColorimetric
        );
        assert!(serde_yaml::from_str::<Intent>("7").is_err());
        assert!(serde_yaml::from_str::<Intent>("vivid").is_err());
        assert_eq!(serde_yaml::to_string(&Intent::Saturation).unwrap().trim(), "saturation");
    }
}
