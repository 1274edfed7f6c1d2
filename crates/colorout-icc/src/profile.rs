//! ICC profile wrapper.

use crate::{IccError, IccResult, StandardProfile};
use lcms2::{ColorSpaceSignature, Profile as LcmsProfile};
use std::path::Path;

/// An ICC color profile.
///
/// Output profiles come from the built-in set ([`StandardProfile`]), from a
/// file resolved by a [`ProfileStore`](crate::ProfileStore), or from raw ICC
/// bytes handed over by the host (the system display profile).
///
/// # Example
///
/// ```rust
/// use colorout_icc::Profile;
///
/// let srgb = Profile::srgb();
/// assert!(srgb.is_rgb());
/// assert!(srgb.is_matrix_shaper());
/// ```
pub struct Profile {
    /// Internal lcms2 profile handle.
    pub(crate) inner: LcmsProfile,
}

impl Profile {
    /// Loads a profile from an ICC file.
    ///
    /// # Errors
    ///
    /// Returns [`IccError::LoadFailed`] if the file cannot be read or does
    /// not contain a valid profile.
    pub fn from_file(path: &Path) -> IccResult<Self> {
        let inner = LcmsProfile::new_file(path)
            .map_err(|e| IccError::LoadFailed(format!("{}: {}", path.display(), e)))?;
        Ok(Self { inner })
    }

    /// Creates a profile from raw ICC data.
    pub fn from_icc(data: &[u8]) -> IccResult<Self> {
        let inner =
            LcmsProfile::new_icc(data).map_err(|e| IccError::InvalidProfile(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Creates the built-in sRGB profile.
    pub fn srgb() -> Self {
        Self {
            inner: LcmsProfile::new_srgb(),
        }
    }

    /// Creates a profile from a built-in specification.
    pub fn from_standard(standard: StandardProfile) -> Self {
        standard.to_profile()
    }

    /// Creates a linear RGB profile with Rec.709 primaries.
    pub fn linear_rgb() -> Self {
        Self::from_standard(StandardProfile::LinearRgb)
    }

    /// Creates an Adobe RGB (1998) profile.
    pub fn adobe_rgb() -> Self {
        Self::from_standard(StandardProfile::AdobeRgb)
    }

    /// Creates the CIE Lab (D50, v4) working-space profile.
    pub fn lab() -> IccResult<Self> {
        let inner =
            LcmsProfile::new_lab4_context(lcms2::GlobalContext::new(), &lcms2::CIExyY::d50())
                .map_err(|e| IccError::CreateFailed(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Returns the profile description.
    pub fn description(&self) -> String {
        self.inner
            .info(lcms2::InfoType::Description, lcms2::Locale::none())
            .unwrap_or_default()
    }

    /// Returns the color space signature.
    pub fn color_space(&self) -> String {
        format!("{:?}", self.inner.color_space())
    }

    /// Returns true if this is an RGB profile.
    pub fn is_rgb(&self) -> bool {
        matches!(self.inner.color_space(), ColorSpaceSignature::RgbData)
    }

    /// Returns true if the profile is built on colorants plus tone curves.
    ///
    /// This is a necessary, not sufficient, condition for
    /// [`MatrixShaper::from_profile`](crate::MatrixShaper::from_profile).
    pub fn is_matrix_shaper(&self) -> bool {
        self.inner.is_matrix_shaper()
    }

    /// Exports the profile as ICC data.
    pub fn to_icc(&self) -> IccResult<Vec<u8>> {
        self.inner
            .icc()
            .map_err(|e| IccError::CreateFailed(e.to_string()))
    }
}

impl std::fmt::Debug for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Profile")
            .field("description", &self.description())
            .field("color_space", &self.color_space())
            .finish()
    }
}
