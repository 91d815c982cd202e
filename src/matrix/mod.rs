mod matrix2;
mod ops;
mod rotation;
mod square;

pub use matrix2::Matrix2;

use core::fmt;
use core::ops::{Index, IndexMut};

use crate::vector::Vector3;

/// Errors from matrix operations.
///
/// ```
/// use attitude::{Matrix3, MatrixError};
///
/// let singular = Matrix3::new([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 1.0]]);
/// assert_eq!(singular.inverse().unwrap_err(), MatrixError::Singular);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Determinant magnitude at or below `f32::EPSILON`.
    Singular,
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::Singular => write!(f, "matrix is singular"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatrixError {}

/// 3×3 `f32` matrix, stored row-major as nine cells `a[0..9]`:
///
/// ```text
/// a[0] a[1] a[2]
/// a[3] a[4] a[5]
/// a[6] a[7] a[8]
/// ```
///
/// Used both as a rotation matrix (see [`Matrix3::from_quaternion`] and
/// [`Matrix3::to_quaternion`]) and for general 3×3 algebra; no
/// orthonormality is enforced.
///
/// # Examples
///
/// ```
/// use attitude::{Matrix3, Vector3};
///
/// let a = Matrix3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a[5], 6.0);
/// assert_eq!(a * Vector3::new(1.0, 0.0, 0.0), Vector3::new(1.0, 4.0, 7.0));
/// assert_eq!(Matrix3::identity() * a, a);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3 {
    pub(crate) a: [f32; 9],
}

impl Matrix3 {
    /// Create a matrix from rows.
    #[inline]
    pub const fn new(rows: [[f32; 3]; 3]) -> Self {
        let [[a0, a1, a2], [a3, a4, a5], [a6, a7, a8]] = rows;
        Self {
            a: [a0, a1, a2, a3, a4, a5, a6, a7, a8],
        }
    }

    /// Create a matrix from its nine cells in row-major order.
    #[inline]
    pub const fn from_array(a: [f32; 9]) -> Self {
        Self { a }
    }

    #[inline]
    pub const fn zeros() -> Self {
        Self { a: [0.0; 9] }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::from_scaled_identity(1.0)
    }

    /// `d · I`.
    #[inline]
    pub const fn from_scaled_identity(d: f32) -> Self {
        Self::from_diagonal(d, d, d)
    }

    #[inline]
    pub const fn from_diagonal(d0: f32, d1: f32, d2: f32) -> Self {
        Self {
            a: [d0, 0.0, 0.0, 0.0, d1, 0.0, 0.0, 0.0, d2],
        }
    }

    /// Create a matrix whose rows are `v0`, `v1` and `v2`.
    #[inline]
    pub const fn from_rows(v0: Vector3, v1: Vector3, v2: Vector3) -> Self {
        Self {
            a: [v0.x, v0.y, v0.z, v1.x, v1.y, v1.z, v2.x, v2.y, v2.z],
        }
    }

    /// The nine cells in row-major order.
    #[inline]
    pub const fn as_array(&self) -> &[f32; 9] {
        &self.a
    }

    /// Panics if `row > 2`.
    #[inline]
    pub fn row(&self, row: usize) -> Vector3 {
        let i = 3 * row;
        Vector3::new(self.a[i], self.a[i + 1], self.a[i + 2])
    }

    pub fn set_row(&mut self, row: usize, v: Vector3) {
        let i = 3 * row;
        self.a[i] = v.x;
        self.a[i + 1] = v.y;
        self.a[i + 2] = v.z;
    }

    /// Panics if `col > 2`.
    #[inline]
    pub fn column(&self, col: usize) -> Vector3 {
        Vector3::new(self.a[col], self.a[col + 3], self.a[col + 6])
    }

    pub fn set_column(&mut self, col: usize, v: Vector3) {
        self.a[col] = v.x;
        self.a[col + 3] = v.y;
        self.a[col + 6] = v.z;
    }
}

impl Default for Matrix3 {
    #[inline]
    fn default() -> Self {
        Self::zeros()
    }
}

impl From<[f32; 9]> for Matrix3 {
    #[inline]
    fn from(a: [f32; 9]) -> Self {
        Self { a }
    }
}

impl From<Matrix3> for [f32; 9] {
    #[inline]
    fn from(m: Matrix3) -> Self {
        m.a
    }
}

// Flat cell index, row-major.
impl Index<usize> for Matrix3 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.a[i]
    }
}

impl IndexMut<usize> for Matrix3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.a[i]
    }
}

impl Index<(usize, usize)> for Matrix3 {
    type Output = f32;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        assert!(row < 3 && col < 3, "index ({row}, {col}) out of range for Matrix3");
        &self.a[3 * row + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix3 {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        assert!(row < 3 && col < 3, "index ({row}, {col}) out of range for Matrix3");
        &mut self.a[3 * row + col]
    }
}

impl fmt::Display for Matrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f)?;
            }
            let r = self.row(row);
            write!(f, "[{}, {}, {}]", r.x, r.y, r.z)?;
        }
        Ok(())
    }
}
