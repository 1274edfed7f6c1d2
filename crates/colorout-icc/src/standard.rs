//! Built-in output profiles.

use crate::Profile;
use lcms2::{CIExyY, CIExyYTRIPLE, Locale, MLU, Profile as LcmsProfile, Tag, TagSignature, ToneCurve};

/// Output profiles that are constructed in memory rather than loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardProfile {
    /// IEC 61966-2-1 sRGB.
    Srgb,
    /// Rec.709 / sRGB primaries with a linear (gamma 1.0) response.
    LinearRgb,
    /// Adobe RGB (1998).
    AdobeRgb,
}

impl StandardProfile {
    /// Maps a well-known profile name to its built-in profile.
    ///
    /// Names are matched exactly: `"sRGB"`, `"linear_rgb"`, `"adobergb"`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sRGB" => Some(Self::Srgb),
            "linear_rgb" => Some(Self::LinearRgb),
            "adobergb" => Some(Self::AdobeRgb),
            _ => None,
        }
    }

    /// The well-known name of this profile.
    pub fn name(self) -> &'static str {
        match self {
            Self::Srgb => "sRGB",
            Self::LinearRgb => "linear_rgb",
            Self::AdobeRgb => "adobergb",
        }
    }

    /// Creates an ICC profile from this standard.
    pub fn to_profile(self) -> Profile {
        let inner = match self {
            Self::Srgb => LcmsProfile::new_srgb(),
            Self::LinearRgb => gamma_rgb(&rec709_primaries(), 1.0, self.description()),
            // 563/256, the exact encoding of "2.2" in the Adobe RGB specification
            Self::AdobeRgb => gamma_rgb(&adobe_primaries(), 2.19921875, self.description()),
        };
        Profile { inner }
    }

    /// Description written into the built-in profile.
    pub fn description(self) -> &'static str {
        match self {
            Self::Srgb => "sRGB built-in",
            Self::LinearRgb => "Linear Rec709 RGB",
            Self::AdobeRgb => "Adobe RGB (compatible)",
        }
    }
}

/// Builds a D65 matrix/TRC profile with the same pure gamma on all channels.
fn gamma_rgb(primaries: &CIExyYTRIPLE, gamma: f64, description: &str) -> LcmsProfile {
    let curve = ToneCurve::new(gamma);
    let curves = [&curve, &curve, &curve];
    match LcmsProfile::new_rgb(&d65_white(), primaries, &curves) {
        Ok(mut profile) => {
            let mut mlu = MLU::new(1);
            if !(mlu.set_text(description, Locale::none())
                && profile.write_tag(TagSignature::ProfileDescriptionTag, Tag::MLU(&mlu)))
            {
                tracing::debug!(description, "couldn't set built-in profile description");
            }
            profile
        }
        Err(e) => {
            tracing::warn!("built-in profile creation failed ({e}), using sRGB");
            LcmsProfile::new_srgb()
        }
    }
}

/// D65 white point.
fn d65_white() -> CIExyY {
    CIExyY { x: 0.3127, y: 0.3290, Y: 1.0 }
}

/// sRGB / Rec.709 primaries.
fn rec709_primaries() -> CIExyYTRIPLE {
    CIExyYTRIPLE {
        Red: CIExyY { x: 0.6400, y: 0.3300, Y: 1.0 },
        Green: CIExyY { x: 0.3000, y: 0.6000, Y: 1.0 },
        Blue: CIExyY { x: 0.1500, y: 0.0600, Y: 1.0 },
    }
}

/// Adobe RGB (1998) primaries.
fn adobe_primaries() -> CIExyYTRIPLE {
    CIExyYTRIPLE {
        Red: CIExyY { x: 0.6400, y: 0.3300, Y: 1.0 },
        Green: CIExyY { x: 0.2100, y: 0.7100, Y: 1.0 },
        Blue: CIExyY { x: 0.1500, y: 0.0600, Y: 1.0 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_standards() {
        for std in [StandardProfile::Srgb, StandardProfile::LinearRgb, StandardProfile::AdobeRgb] {
            let profile = std.to_profile();
            assert!(profile.is_rgb(), "{std:?} should be RGB");
            assert!(profile.is_matrix_shaper(), "{std:?} should be a matrix shaper");
            assert_eq!(StandardProfile::from_name(std.name()), Some(std));
        }
    }

    #[test]
    fn test_descriptions_tell_profiles_apart() {
        for std in [StandardProfile::LinearRgb, StandardProfile::AdobeRgb] {
            assert_eq!(std.to_profile().description(), std.description());
        }
        assert_ne!(
            StandardProfile::LinearRgb.to_profile().description(),
            StandardProfile::AdobeRgb.to_profile().description()
        );
        assert_ne!(
            StandardProfile::AdobeRgb.to_profile().description(),
            StandardProfile::Srgb.to_profile().description()
        );
    }

    #[test]
    fn test_names_are_exact() {
        assert_eq!(StandardProfile::from_name("srgb"), None);
        assert_eq!(StandardProfile::from_name("X profile"), None);
        assert_eq!(StandardProfile::from_name("custom.icc"), None);
    }
}
