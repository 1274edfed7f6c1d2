//! 1-dimensional tone curve lookup table.

use crate::{LutError, LutResult};

/// Default number of samples per tone LUT.
///
/// Accelerator kernels upload each LUT as a 256x256 float image, so this
/// matches that layout.
pub const LUT_SAMPLES: usize = 0x10000;

/// Linearly interpolates `lut` at `v`, where `v` is nominally in [0, 1].
///
/// The input is scaled by the table length, the integer index is clamped to
/// `[0, len - 2]` and the fractional part to `[0, 1]`. Both clamps are
/// written as comparisons that NaN fails, so NaN lands on the first sample
/// and infinities land on the edge samples. Never indexes out of bounds.
///
/// Tables shorter than two samples return their only sample, or `v` when
/// empty.
///
/// # Example
///
/// ```rust
/// use colorout_lut::lerp_lut;
///
/// let lut = [0.0, 1.0, 2.0, 3.0];
/// assert_eq!(lerp_lut(&lut, 0.5), 2.0);
/// assert_eq!(lerp_lut(&lut, f32::INFINITY), 3.0);
/// assert_eq!(lerp_lut(&lut, f32::NAN), 0.0);
/// ```
#[inline]
pub fn lerp_lut(lut: &[f32], v: f32) -> f32 {
    let n = lut.len();
    if n < 2 {
        return lut.first().copied().unwrap_or(v);
    }

    let last = (n - 2) as f32;
    let ft = v * n as f32;
    let t = if ft > 0.0 {
        if ft < last { ft } else { last }
    } else {
        0.0
    };
    let t = t as usize;
    let f = ft - t as f32;
    let f = if f > 0.0 {
        if f < 1.0 { f } else { 1.0 }
    } else {
        0.0
    };

    lut[t] * (1.0 - f) + lut[t + 1] * f
}

/// A sampled tone curve over the normalized domain [0, 1].
///
/// Sample `k` holds the curve evaluated at `k / (len - 1)`. The table is
/// immutable once built; a profile change replaces it wholesale.
///
/// # Example
///
/// ```rust
/// use colorout_lut::ToneLut;
///
/// let lut = ToneLut::identity(256);
/// assert!((lut.lerp(0.5) - 0.5).abs() < 0.01);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ToneLut {
    samples: Vec<f32>,
}

impl ToneLut {
    /// Creates a LUT from raw samples.
    ///
    /// # Errors
    ///
    /// Fails if fewer than two samples are given or any sample is not finite.
    pub fn from_samples(samples: Vec<f32>) -> LutResult<Self> {
        if samples.len() < 2 {
            return Err(LutError::InvalidSize(format!(
                "tone LUT needs at least 2 samples, got {}",
                samples.len()
            )));
        }
        if let Some((index, &value)) = samples.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(LutError::NonFinite { index, value });
        }
        Ok(Self { samples })
    }

    /// Samples `curve` at `size` evenly spaced points of [0, 1].
    pub fn from_fn(size: usize, curve: impl Fn(f32) -> f32) -> LutResult<Self> {
        if size < 2 {
            return Err(LutError::InvalidSize(format!(
                "tone LUT needs at least 2 samples, got {size}"
            )));
        }
        let scale = 1.0 / (size - 1) as f32;
        Self::from_samples((0..size).map(|k| curve(k as f32 * scale)).collect())
    }

    /// Creates an identity (pass-through) LUT.
    pub fn identity(size: usize) -> Self {
        let size = size.max(2);
        let scale = 1.0 / (size - 1) as f32;
        Self {
            samples: (0..size).map(|k| k as f32 * scale).collect(),
        }
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false: a tone LUT holds at least two samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Raw samples.
    #[inline]
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Interpolates the curve at `v`. See [`lerp_lut`].
    #[inline]
    pub fn lerp(&self, v: f32) -> f32 {
        lerp_lut(&self.samples, v)
    }

    /// Returns true if samples never decrease.
    pub fn is_monotonic(&self) -> bool {
        self.samples.windows(2).all(|w| w[0] <= w[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn gamma_lut() -> ToneLut {
        ToneLut::from_fn(4096, |x| x.powf(1.0 / 2.4)).unwrap()
    }

    #[test]
    fn test_identity() {
        let lut = ToneLut::identity(256);
        assert_relative_eq!(lut.lerp(0.0), 0.0);
        assert!((lut.lerp(0.5) - 0.5).abs() < 0.01);
        assert_relative_eq!(lut.lerp(1.0), 1.0);
    }

    #[test]
    fn test_between_neighbours() {
        let lut = gamma_lut();
        assert!(lut.is_monotonic());
        let n = lut.len();
        for i in 0..1000 {
            let v = i as f32 / 1000.0 * 0.999;
            let t = (v * n as f32).floor() as usize;
            let out = lut.lerp(v);
            let (lo, hi) = (lut.samples()[t], lut.samples()[t + 1]);
            assert!(out >= lo - 1e-6 && out <= hi + 1e-6, "v={v}: {out} not in [{lo}, {hi}]");
        }
    }

    #[test]
    fn test_non_finite_and_out_of_domain() {
        let lut = gamma_lut();
        let first = lut.samples()[0];
        let last = lut.samples()[lut.len() - 1];

        assert_eq!(lut.lerp(f32::NAN), first);
        assert_eq!(lut.lerp(f32::NEG_INFINITY), first);
        assert_eq!(lut.lerp(-5.0), first);
        assert_eq!(lut.lerp(f32::INFINITY), last);
        assert_eq!(lut.lerp(5.0), last);
        for v in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY, -5.0, 5.0] {
            assert!(lut.lerp(v).is_finite());
        }
    }

    #[test]
    fn test_short_tables() {
        assert_eq!(lerp_lut(&[], 0.3), 0.3);
        assert_eq!(lerp_lut(&[0.7], f32::NAN), 0.7);
        assert_eq!(lerp_lut(&[0.0, 1.0], 0.25), 0.5);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(ToneLut::from_samples(vec![1.0]).is_err());
        assert!(matches!(
            ToneLut::from_samples(vec![0.0, f32::NAN, 1.0]),
            Err(LutError::NonFinite { index: 1, .. })
        ));
        assert!(ToneLut::from_fn(1, |x| x).is_err());
    }
}
