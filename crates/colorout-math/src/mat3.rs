//! 3x3 matrix type for XYZ to output RGB transforms.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **column vectors**:
//!
//! ```text
//! | m00 m01 m02 |   | X |   | m00*X + m01*Y + m02*Z |
//! | m10 m11 m12 | * | Y | = | m10*X + m11*Y + m12*Z |
//! | m20 m21 m22 |   | Z |   | m20*X + m21*Y + m22*Z |
//! ```

use std::ops::{Index, Mul};

/// A 3x3 matrix for color transformations.
///
/// Stored in row-major order. Use [`Mat3::from_rows`] or [`Mat3::from_cols`]
/// to construct one.
///
/// # Example
///
/// ```rust
/// use colorout_math::Mat3;
///
/// let m = Mat3::diagonal(2.0, 3.0, 4.0);
/// assert_eq!(m.transform([1.0, 1.0, 1.0]), [2.0, 3.0, 4.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat3 {
    /// Matrix elements in row-major order: [row0, row1, row2]
    pub m: [[f32; 3]; 3],
}

impl Mat3 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [[0.0; 3]; 3] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ],
    };

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f32; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix from column arrays.
    ///
    /// Profile colorants (the XYZ of each primary) are columns of the
    /// RGB to XYZ matrix, so this is the natural constructor for them.
    #[inline]
    pub const fn from_cols(cols: [[f32; 3]; 3]) -> Self {
        Self {
            m: [
                [cols[0][0], cols[1][0], cols[2][0]],
                [cols[0][1], cols[1][1], cols[2][1]],
                [cols[0][2], cols[1][2], cols[2][2]],
            ],
        }
    }

    /// Creates a diagonal matrix.
    #[inline]
    pub const fn diagonal(d0: f32, d1: f32, d2: f32) -> Self {
        Self::from_rows([[d0, 0.0, 0.0], [0.0, d1, 0.0], [0.0, 0.0, d2]])
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.m)
    }

    /// Computes the determinant.
    #[inline]
    pub fn determinant(&self) -> f32 {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Computes the inverse of this matrix.
    ///
    /// Returns `None` if the matrix is singular or the result is not finite.
    ///
    /// # Example
    ///
    /// ```rust
    /// use colorout_math::Mat3;
    ///
    /// let inv = Mat3::diagonal(2.0, 4.0, 8.0).inverse().unwrap();
    /// assert_eq!(inv, Mat3::diagonal(0.5, 0.25, 0.125));
    /// ```
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < 1e-10 {
            return None;
        }

        let m = &self.m;
        let inv_det = 1.0 / det;

        // Cofactor matrix, transposed and scaled by 1/det
        let inv = Self::from_rows([
            [
                (m[1][1] * m[2][2] - m[1][2] * m[2][1]) * inv_det,
                (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv_det,
                (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
            ],
            [
                (m[1][2] * m[2][0] - m[1][0] * m[2][2]) * inv_det,
                (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
                (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv_det,
            ],
            [
                (m[1][0] * m[2][1] - m[1][1] * m[2][0]) * inv_det,
                (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv_det,
                (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv_det,
            ],
        ]);
        inv.is_finite().then_some(inv)
    }

    /// Applies the matrix to a color sample: `out[i] = sum_j m[i][j] * v[j]`.
    #[inline]
    pub fn transform(&self, v: [f32; 3]) -> [f32; 3] {
        let m = &self.m;
        [
            m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
            m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
            m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
        ]
    }

    /// Multiplies two matrices.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..3 {
            for j in 0..3 {
                result.m[i][j] = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j];
            }
        }
        result
    }

    /// Returns true if all elements are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|x| x.is_finite())
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<[f32; 3]> for Mat3 {
    type Output = [f32; 3];

    #[inline]
    fn mul(self, rhs: [f32; 3]) -> [f32; 3] {
        self.transform(rhs)
    }
}

impl Mul for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl Index<usize> for Mat3 {
    type Output = [f32; 3];

    #[inline]
    fn index(&self, i: usize) -> &[f32; 3] {
        &self.m[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> Mat3 {
        Mat3::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]])
    }

    #[test]
    fn test_identity() {
        let v = [0.25, 0.5, 0.75];
        assert_eq!(Mat3::IDENTITY * v, v);
    }

    #[test]
    fn test_row_index() {
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(m[1], [4.0, 5.0, 6.0]);
        assert_eq!(m.transpose()[1], [2.0, 5.0, 8.0]);
    }

    #[test]
    fn test_from_cols() {
        let m = Mat3::from_cols([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(m.transform([1.0, 0.0, 0.0]), [1.0, 2.0, 3.0]);
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn test_determinant() {
        assert_relative_eq!(sample().determinant(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_inverse() {
        let m = sample();
        let result = m * m.inverse().unwrap();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(result.m[i][j], expected, epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn test_singular() {
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 1.0, 1.0]]);
        assert!(m.inverse().is_none());
    }

    #[test]
    fn test_linearity() {
        let m = Mat3::from_rows([
            [3.1338561, -1.6168667, -0.4906146],
            [-0.9787684, 1.9161415, 0.0334540],
            [0.0719453, -0.2289914, 1.4052427],
        ]);
        let x = [0.3, 0.4, 0.2];
        let y = [0.9, 0.1, 0.6];
        let (a, b) = (1.5f32, -0.75f32);

        let combined = m.transform([
            a * x[0] + b * y[0],
            a * x[1] + b * y[1],
            a * x[2] + b * y[2],
        ]);
        let tx = m.transform(x);
        let ty = m.transform(y);
        for i in 0..3 {
            assert_relative_eq!(combined[i], a * tx[i] + b * ty[i], epsilon = 1e-5);
        }
    }
}
