//! Lab to output RGB transforms through Little CMS.

use crate::{IccError, IccResult, Intent, Profile};
use lcms2::{PixelFormat, Transform as LcmsTransform};

/// A single-direction transform from CIE Lab (D50) to an output RGB profile.
///
/// Input rows are `[L, a, b]` floats with L in 0..100; output rows are
/// `[r, g, b]` floats in the profile's native range. No clamping is done
/// beyond what the engine itself performs.
///
/// The underlying transform caches its last input, so it is `Send` but not
/// `Sync`: give every worker its own instance.
///
/// # Example
///
/// ```rust
/// use colorout_icc::{Intent, LabTransform, Profile};
///
/// let lab = Profile::lab().unwrap();
/// let xform = LabTransform::new(&lab, &Profile::srgb(), Intent::Perceptual).unwrap();
///
/// let mut rgb = [[0.0f32; 3]; 2];
/// xform.transform_row(&[[100.0, 0.0, 0.0], [0.0, 0.0, 0.0]], &mut rgb);
/// assert!(rgb[0][1] > 0.99 && rgb[1][1] < 0.01);
/// ```
pub struct LabTransform {
    inner: LcmsTransform<[f32; 3], [f32; 3]>,
}

impl LabTransform {
    /// Creates a transform from the `lab` working profile to `output`.
    ///
    /// # Errors
    ///
    /// Returns [`IccError::TransformFailed`] if the engine cannot build a
    /// Lab to RGB float transform for this profile and intent (for example,
    /// a non-RGB output profile).
    pub fn new(lab: &Profile, output: &Profile, intent: Intent) -> IccResult<Self> {
        let inner = LcmsTransform::new(
            &lab.inner,
            PixelFormat::Lab_FLT,
            &output.inner,
            PixelFormat::RGB_FLT,
            intent.into(),
        )
        .map_err(|e| {
            IccError::TransformFailed(format!("{} ({:?}): {}", output.description(), intent, e))
        })?;

        Ok(Self { inner })
    }

    /// Converts one row of Lab pixels into `rgb`.
    ///
    /// Only `min(lab.len(), rgb.len())` pixels are converted.
    pub fn transform_row(&self, lab: &[[f32; 3]], rgb: &mut [[f32; 3]]) {
        let n = lab.len().min(rgb.len());
        self.inner.transform_pixels(&lab[..n], &mut rgb[..n]);
    }
}

impl std::fmt::Debug for LabTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabTransform").finish_non_exhaustive()
    }
}
