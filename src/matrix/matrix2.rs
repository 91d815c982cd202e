use core::fmt;
use core::ops::{Index, IndexMut};

use num_traits::Float;

use crate::matrix::MatrixError;
use crate::vector::Vector2;

/// 2×2 `f32` matrix, stored row-major as `[a0, a1, a2, a3]`.
///
/// ```
/// use attitude::{Matrix2, Vector2};
///
/// let m = Matrix2::new([[4.0, 7.0], [2.0, 6.0]]);
/// assert_eq!(m.determinant(), 10.0);
/// let inv = m.inverse().unwrap();
/// let v = inv * (m * Vector2::new(1.0, 2.0));
/// assert!((v - Vector2::new(1.0, 2.0)).magnitude() < 1e-5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix2 {
    pub(crate) a: [f32; 4],
}

impl Matrix2 {
    /// Create a matrix from rows.
    #[inline]
    pub const fn new(rows: [[f32; 2]; 2]) -> Self {
        let [[a0, a1], [a2, a3]] = rows;
        Self {
            a: [a0, a1, a2, a3],
        }
    }

    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self { a }
    }

    #[inline]
    pub const fn zeros() -> Self {
        Self { a: [0.0; 4] }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::from_scaled_identity(1.0)
    }

    #[inline]
    pub const fn from_scaled_identity(d: f32) -> Self {
        Self::from_diagonal(d, d)
    }

    #[inline]
    pub const fn from_diagonal(d0: f32, d1: f32) -> Self {
        Self {
            a: [d0, 0.0, 0.0, d1],
        }
    }

    /// Create a matrix whose rows are `v0` and `v1`.
    #[inline]
    pub const fn from_rows(v0: Vector2, v1: Vector2) -> Self {
        Self {
            a: [v0.x, v0.y, v1.x, v1.y],
        }
    }

    #[inline]
    pub const fn as_array(&self) -> &[f32; 4] {
        &self.a
    }

    /// Panics if `row > 1`.
    #[inline]
    pub fn row(&self, row: usize) -> Vector2 {
        let i = 2 * row;
        Vector2::new(self.a[i], self.a[i + 1])
    }

    pub fn set_row(&mut self, row: usize, v: Vector2) {
        let i = 2 * row;
        self.a[i] = v.x;
        self.a[i + 1] = v.y;
    }

    /// Panics if `col > 1`.
    #[inline]
    pub fn column(&self, col: usize) -> Vector2 {
        Vector2::new(self.a[col], self.a[col + 2])
    }

    pub fn set_column(&mut self, col: usize, v: Vector2) {
        self.a[col] = v.x;
        self.a[col + 2] = v.y;
    }

    #[inline]
    pub fn trace(&self) -> f32 {
        self.a[0] + self.a[3]
    }

    #[inline]
    pub fn determinant(&self) -> f32 {
        self.a[0] * self.a[3] - self.a[1] * self.a[2]
    }

    /// `trace² − 4·det`; the eigenvalues are real when this is non-negative.
    #[inline]
    pub fn discriminant(&self) -> f32 {
        let t = self.trace();
        t * t - 4.0 * self.determinant()
    }

    pub fn sum(&self) -> f32 {
        self.a.iter().sum()
    }

    pub fn mean(&self) -> f32 {
        self.sum() / 4.0
    }

    pub fn prod(&self) -> f32 {
        self.a.iter().product()
    }

    pub fn transpose(&self) -> Self {
        Self::from_array([self.a[0], self.a[2], self.a[1], self.a[3]])
    }

    pub fn transpose_in_place(&mut self) {
        self.a.swap(1, 2);
    }

    /// Adjugate `[a3, −a1; −a2, a0]`.
    pub fn adjoint(&self) -> Self {
        Self::from_array([self.a[3], -self.a[1], -self.a[2], self.a[0]])
    }

    pub fn adjoint_in_place(&mut self) {
        *self = self.adjoint();
    }

    /// Returns [`MatrixError::Singular`] when `|det| ≤ f32::EPSILON`.
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        let det = self.determinant();
        if Float::abs(det) <= f32::EPSILON {
            return Err(MatrixError::Singular);
        }
        Ok(self.adjoint() / det)
    }

    /// Invert in place. On error the matrix is left unchanged.
    pub fn invert_in_place(&mut self) -> Result<(), MatrixError> {
        *self = self.inverse()?;
        Ok(())
    }
}

impl Default for Matrix2 {
    #[inline]
    fn default() -> Self {
        Self::zeros()
    }
}

impl From<[f32; 4]> for Matrix2 {
    #[inline]
    fn from(a: [f32; 4]) -> Self {
        Self { a }
    }
}

impl Index<usize> for Matrix2 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.a[i]
    }
}

impl IndexMut<usize> for Matrix2 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.a[i]
    }
}

impl Index<(usize, usize)> for Matrix2 {
    type Output = f32;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        assert!(row < 2 && col < 2, "index ({row}, {col}) out of range for Matrix2");
        &self.a[2 * row + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix2 {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        assert!(row < 2 && col < 2, "index ({row}, {col}) out of range for Matrix2");
        &mut self.a[2 * row + col]
    }
}

impl fmt::Display for Matrix2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]\n[{}, {}]", self.a[0], self.a[1], self.a[2], self.a[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_and_access() {
        let mut m = Matrix2::new([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m.as_array(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(Matrix2::from([1.0, 2.0, 3.0, 4.0]), m);
        assert_eq!(m, Matrix2::from_rows(Vector2::new(1.0, 2.0), Vector2::new(3.0, 4.0)));
        assert_eq!(m[(1, 0)], 3.0);
        assert_eq!(m[3], 4.0);
        assert_eq!(m.row(0), Vector2::new(1.0, 2.0));
        assert_eq!(m.column(1), Vector2::new(2.0, 4.0));

        m.set_row(1, Vector2::new(5.0, 6.0));
        m.set_column(0, Vector2::new(-1.0, -2.0));
        assert_eq!(m, Matrix2::new([[-1.0, 2.0], [-2.0, 6.0]]));
        m[(0, 1)] = 0.0;
        assert_eq!(m[1], 0.0);

        assert_eq!(Matrix2::default(), Matrix2::zeros());
        assert_eq!(Matrix2::from_scaled_identity(1.0), Matrix2::identity());
        assert_eq!(Matrix2::from_diagonal(2.0, 3.0), Matrix2::new([[2.0, 0.0], [0.0, 3.0]]));
    }

    #[test]
    fn scalars() {
        let m = Matrix2::new([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m.trace(), 5.0);
        assert_eq!(m.determinant(), -2.0);
        assert_eq!(m.discriminant(), 33.0);
        assert_eq!(m.sum(), 10.0);
        assert_eq!(m.mean(), 2.5);
        assert_eq!(m.prod(), 24.0);
        // Rotation by 90°: complex eigenvalues.
        assert!(Matrix2::new([[0.0, -1.0], [1.0, 0.0]]).discriminant() < 0.0);
    }

    #[test]
    fn transpose_and_adjoint() {
        let m = Matrix2::new([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m.transpose(), Matrix2::new([[1.0, 3.0], [2.0, 4.0]]));
        assert_eq!(m.adjoint(), Matrix2::new([[4.0, -2.0], [-3.0, 1.0]]));
        assert_eq!(m * m.adjoint(), Matrix2::from_scaled_identity(m.determinant()));

        let mut n = m;
        n.transpose_in_place();
        assert_eq!(n, m.transpose());
        n = m;
        n.adjoint_in_place();
        assert_eq!(n, m.adjoint());
    }

    #[test]
    fn inverse() {
        let m = Matrix2::new([[4.0, 7.0], [2.0, 6.0]]);
        let inv = m.inverse().unwrap();
        let p = m * inv;
        for (i, expected) in [1.0, 0.0, 0.0, 1.0].into_iter().enumerate() {
            assert!((p[i] - expected).abs() < 1e-6);
        }

        let mut n = m;
        n.invert_in_place().unwrap();
        assert_eq!(n, inv);
    }

    #[test]
    fn inverse_singular() {
        let m = Matrix2::new([[1.0, 2.0], [2.0, 4.0]]);
        assert_eq!(m.inverse(), Err(MatrixError::Singular));
        let mut n = m;
        assert!(n.invert_in_place().is_err());
        assert_eq!(n, m);
    }

    #[test]
    fn display() {
        let m = Matrix2::new([[1.0, -2.0], [0.5, 4.0]]);
        assert_eq!(format!("{}", m), "[1, -2]\n[0.5, 4]");
    }
}
