//! CIE Lab <-> XYZ conversion relative to the D50 white.
//!
//! The working space of the pipeline is Lab with a D50 reference white,
//! matching the ICC profile connection space.

/// D50 reference white in XYZ, as used by the ICC profile connection space.
pub const D50_WHITE: [f32; 3] = [0.9642, 1.0, 0.8249];

const EPSILON: f32 = 6.0 / 29.0;

#[inline]
fn f_inv(t: f32) -> f32 {
    if t > EPSILON {
        t * t * t
    } else {
        3.0 * EPSILON * EPSILON * (t - 4.0 / 29.0)
    }
}

#[inline]
fn f(t: f32) -> f32 {
    if t > EPSILON * EPSILON * EPSILON {
        t.cbrt()
    } else {
        t / (3.0 * EPSILON * EPSILON) + 4.0 / 29.0
    }
}

/// Converts a Lab sample (L in 0..100) to XYZ relative to [`D50_WHITE`].
///
/// # Example
///
/// ```rust
/// use colorout_math::{lab_to_xyz, D50_WHITE};
///
/// let white = lab_to_xyz([100.0, 0.0, 0.0]);
/// assert!((white[0] - D50_WHITE[0]).abs() < 1e-5);
/// ```
#[inline]
pub fn lab_to_xyz(lab: [f32; 3]) -> [f32; 3] {
    let fy = (lab[0] + 16.0) / 116.0;
    let fx = fy + lab[1] / 500.0;
    let fz = fy - lab[2] / 200.0;
    [
        D50_WHITE[0] * f_inv(fx),
        D50_WHITE[1] * f_inv(fy),
        D50_WHITE[2] * f_inv(fz),
    ]
}

/// Converts XYZ relative to [`D50_WHITE`] back to Lab.
#[inline]
pub fn xyz_to_lab(xyz: [f32; 3]) -> [f32; 3] {
    let fx = f(xyz[0] / D50_WHITE[0]);
    let fy = f(xyz[1] / D50_WHITE[1]);
    let fz = f(xyz[2] / D50_WHITE[2]);
    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}
