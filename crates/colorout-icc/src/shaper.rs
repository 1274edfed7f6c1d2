//! Matrix + tone LUT reduction of matrix/TRC output profiles.

use crate::{IccError, IccResult, Profile};
use colorout_lut::ToneLut;
use colorout_math::{Mat3, lab_to_xyz};
use lcms2::{Profile as LcmsProfile, Tag, TagSignature};

/// XYZ (D50) to sRGB, Bradford-adapted from D65.
const SRGB_FROM_XYZ_D50: Mat3 = Mat3::from_rows([
    [3.1338561, -1.6168667, -0.4906146],
    [-0.9787684, 1.9161415, 0.0334540],
    [0.0719453, -0.2289914, 1.4052427],
]);

/// Fast representation of an output profile: a 3x3 matrix from XYZ (D50)
/// to linear device RGB, followed by one inverse tone curve per channel.
///
/// Only profiles built on colorants plus per-channel curves reduce to this
/// form; LUT-based profiles must go through a general transform.
///
/// # Example
///
/// ```rust
/// use colorout_icc::{MatrixShaper, Profile};
///
/// let shaper = MatrixShaper::from_profile(&Profile::srgb(), 4096).unwrap();
/// let rgb = shaper.apply_lab([100.0, 0.0, 0.0]);
/// assert!((rgb[1] - 1.0).abs() < 0.01);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixShaper {
    /// XYZ (D50) to linear RGB.
    pub xyz_to_rgb: Mat3,
    /// Inverse tone curves for R, G and B.
    pub luts: [ToneLut; 3],
}

impl MatrixShaper {
    /// Derives the matrix and LUTs from a matrix/TRC profile.
    ///
    /// The matrix is the inverse of the colorant matrix. Each LUT samples the
    /// reversed channel tone curve at `samples` points.
    ///
    /// # Errors
    ///
    /// - [`IccError::NotMatrixShaper`] if the profile uses any other model
    /// - [`IccError::InvalidProfile`] if a colorant or curve tag is missing
    /// - [`IccError::SingularMatrix`] if the colorants are degenerate
    /// - [`IccError::CurveInversion`] if a reversed curve is unusable
    pub fn from_profile(profile: &Profile, samples: usize) -> IccResult<Self> {
        if !profile.is_matrix_shaper() {
            return Err(IccError::NotMatrixShaper(profile.description()));
        }
        let inner = &profile.inner;

        let rgb_to_xyz = Mat3::from_cols([
            colorant(inner, TagSignature::RedColorantTag, "red")?,
            colorant(inner, TagSignature::GreenColorantTag, "green")?,
            colorant(inner, TagSignature::BlueColorantTag, "blue")?,
        ]);
        let xyz_to_rgb = rgb_to_xyz.inverse().ok_or(IccError::SingularMatrix)?;

        Ok(Self {
            xyz_to_rgb,
            luts: [
                reversed_trc(inner, TagSignature::RedTRCTag, "red", samples)?,
                reversed_trc(inner, TagSignature::GreenTRCTag, "green", samples)?,
                reversed_trc(inner, TagSignature::BlueTRCTag, "blue", samples)?,
            ],
        })
    }

    /// Analytic sRGB shaper that needs no color engine.
    ///
    /// Last resort when even the built-in sRGB profile cannot be handled.
    pub fn srgb_builtin(samples: usize) -> Self {
        let lut = ToneLut::from_fn(samples, srgb_encode).unwrap_or_else(|_| ToneLut::identity(2));
        Self {
            xyz_to_rgb: SRGB_FROM_XYZ_D50,
            luts: [lut.clone(), lut.clone(), lut],
        }
    }

    /// Converts XYZ (D50) to output RGB.
    #[inline]
    pub fn apply_xyz(&self, xyz: [f32; 3]) -> [f32; 3] {
        let rgb = self.xyz_to_rgb.transform(xyz);
        [
            self.luts[0].lerp(rgb[0]),
            self.luts[1].lerp(rgb[1]),
            self.luts[2].lerp(rgb[2]),
        ]
    }

    /// Converts Lab (D50) to output RGB.
    #[inline]
    pub fn apply_lab(&self, lab: [f32; 3]) -> [f32; 3] {
        self.apply_xyz(lab_to_xyz(lab))
    }

    /// Number of samples per LUT.
    pub fn lut_samples(&self) -> usize {
        self.luts[0].len()
    }
}

fn colorant(profile: &LcmsProfile, sig: TagSignature, channel: &str) -> IccResult<[f32; 3]> {
    match profile.read_tag(sig) {
        Tag::CIEXYZ(xyz) => Ok([xyz.X as f32, xyz.Y as f32, xyz.Z as f32]),
        _ => Err(IccError::InvalidProfile(format!("missing {channel} colorant tag"))),
    }
}

fn reversed_trc(
    profile: &LcmsProfile,
    sig: TagSignature,
    channel: &str,
    samples: usize,
) -> IccResult<ToneLut> {
    let curve = match profile.read_tag(sig) {
        Tag::ToneCurve(curve) => curve,
        _ => return Err(IccError::InvalidProfile(format!("missing {channel} tone curve tag"))),
    };
    let reversed = curve.reversed();
    ToneLut::from_fn(samples, |x| reversed.eval(x))
        .map_err(|e| IccError::CurveInversion(format!("{channel}: {e}")))
}

fn srgb_encode(x: f32) -> f32 {
    if x <= 0.0031308 {
        12.92 * x
    } else {
        1.055 * x.powf(1.0 / 2.4) - 0.055
    }
}
