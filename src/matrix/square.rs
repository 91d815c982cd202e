use num_traits::Float;

use crate::matrix::{Matrix3, MatrixError};
use crate::vector::Vector3;

impl Matrix3 {
    /// Sum of diagonal elements.
    #[inline]
    pub fn trace(&self) -> f32 {
        self.a[0] + self.a[4] + self.a[8]
    }

    /// Sum of all nine cells.
    pub fn sum(&self) -> f32 {
        self.a.iter().sum()
    }

    pub fn mean(&self) -> f32 {
        self.sum() / 9.0
    }

    /// Product of all nine cells.
    pub fn prod(&self) -> f32 {
        self.a.iter().product()
    }

    pub fn transpose(&self) -> Self {
        let a = &self.a;
        Self::from_array([a[0], a[3], a[6], a[1], a[4], a[7], a[2], a[5], a[8]])
    }

    pub fn transpose_in_place(&mut self) {
        self.a.swap(1, 3);
        self.a.swap(2, 6);
        self.a.swap(5, 7);
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> f32 {
        let a = &self.a;
        a[0] * (a[4] * a[8] - a[5] * a[7]) - a[1] * (a[3] * a[8] - a[5] * a[6])
            + a[2] * (a[3] * a[7] - a[4] * a[6])
    }

    /// Adjugate (transposed cofactor matrix), so that
    /// `m * m.adjoint() == m.determinant() * I`.
    pub fn adjoint(&self) -> Self {
        self.adjugate_and_determinant().0
    }

    pub fn adjoint_in_place(&mut self) {
        *self = self.adjoint();
    }

    /// Inverse via the adjugate.
    ///
    /// Returns [`MatrixError::Singular`] when `|det| ≤ f32::EPSILON`.
    ///
    /// ```
    /// use attitude::Matrix3;
    ///
    /// let m = Matrix3::from_diagonal(2.0, 4.0, 0.5);
    /// assert_eq!(m.inverse().unwrap(), Matrix3::from_diagonal(0.5, 0.25, 2.0));
    /// ```
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        let (adj, det) = self.adjugate_and_determinant();
        if Float::abs(det) <= f32::EPSILON {
            return Err(MatrixError::Singular);
        }
        Ok(adj / det)
    }

    /// Invert in place. On error the matrix is left unchanged.
    pub fn invert_in_place(&mut self) -> Result<(), MatrixError> {
        *self = self.inverse()?;
        Ok(())
    }

    /// Inverse of a diagonal matrix: reciprocates the diagonal and ignores
    /// every off-diagonal cell.
    pub fn inverse_assuming_diagonal(&self) -> Self {
        Self::from_diagonal(1.0 / self.a[0], 1.0 / self.a[4], 1.0 / self.a[8])
    }

    /// In-place form of [`inverse_assuming_diagonal`](Self::inverse_assuming_diagonal);
    /// off-diagonal cells are left as they are.
    pub fn invert_in_place_assuming_diagonal(&mut self) {
        self.a[0] = 1.0 / self.a[0];
        self.a[4] = 1.0 / self.a[4];
        self.a[8] = 1.0 / self.a[8];
    }

    /// `self + diag(v)`.
    pub fn add_to_diagonal(&self, v: Vector3) -> Self {
        let mut m = *self;
        m.add_to_diagonal_in_place(v);
        m
    }

    pub fn add_to_diagonal_in_place(&mut self, v: Vector3) {
        self.a[0] += v.x;
        self.a[4] += v.y;
        self.a[8] += v.z;
    }

    /// `self - diag(v)`.
    pub fn subtract_from_diagonal(&self, v: Vector3) -> Self {
        let mut m = *self;
        m.subtract_from_diagonal_in_place(v);
        m
    }

    pub fn subtract_from_diagonal_in_place(&mut self, v: Vector3) {
        self.a[0] -= v.x;
        self.a[4] -= v.y;
        self.a[8] -= v.z;
    }

    /// Product of two diagonal matrices. Only the diagonals are read and the
    /// result is diagonal.
    pub fn multiply_assuming_diagonal(&self, m: &Self) -> Self {
        Self::from_diagonal(self.a[0] * m.a[0], self.a[4] * m.a[4], self.a[8] * m.a[8])
    }

    /// In-place form; off-diagonal cells of `self` are left as they are.
    pub fn multiply_assuming_diagonal_in_place(&mut self, m: &Self) {
        self.a[0] *= m.a[0];
        self.a[4] *= m.a[4];
        self.a[8] *= m.a[8];
    }

    fn adjugate_and_determinant(&self) -> (Self, f32) {
        // a b c
        // d e f
        // g h i
        let [a, b, c, d, e, f, g, h, i] = self.a;

        let ca = e * i - f * h;
        let cb = -(d * i - f * g);
        let cc = d * h - e * g;
        let cd = -(b * i - c * h);
        let ce = a * i - c * g;
        let cf = -(a * h - b * g);
        let cg = b * f - c * e;
        let ch = -(a * f - c * d);
        let ci = a * e - b * d;

        let det = a * ca + b * cb + c * cc;
        let adj = Self::from_array([ca, cd, cg, cb, ce, ch, cc, cf, ci]);
        (adj, det)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn mat_approx_eq(a: &Matrix3, b: &Matrix3, tol: f32) -> bool {
        (0..9).all(|i| (a[i] - b[i]).abs() < tol)
    }

    fn sample() -> Matrix3 {
        Matrix3::new([[2.0, -1.0, 0.0], [1.0, 3.0, 2.0], [0.0, 1.0, 4.0]])
    }

    #[test]
    fn trace_and_reductions() {
        let m = sample();
        assert_eq!(m.trace(), 9.0);
        assert_eq!(m.sum(), 12.0);
        assert!((m.mean() - 12.0 / 9.0).abs() < EPS);
        assert_eq!(m.prod(), 0.0);
        assert_eq!(Matrix3::from_array([2.0; 9]).prod(), 512.0);
    }

    #[test]
    fn transpose() {
        let m = Matrix3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let t = m.transpose();
        assert_eq!(t, Matrix3::new([[1.0, 4.0, 7.0], [2.0, 5.0, 8.0], [3.0, 6.0, 9.0]]));
        assert_eq!(t.transpose(), m);

        let mut n = m;
        n.transpose_in_place();
        assert_eq!(n, t);
    }

    #[test]
    fn determinant() {
        // 2(12 - 2) + 1(4 - 0) + 0 = 24
        assert_eq!(sample().determinant(), 24.0);
        assert_eq!(Matrix3::identity().determinant(), 1.0);
        assert_eq!(Matrix3::from_diagonal(2.0, 3.0, 4.0).determinant(), 24.0);
        let singular = Matrix3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(singular.determinant(), 0.0);
    }

    #[test]
    fn adjoint() {
        let m = sample();
        let adj = m.adjoint();
        let expected = Matrix3::from_scaled_identity(m.determinant());
        assert!(mat_approx_eq(&(m * adj), &expected, EPS));
        assert!(mat_approx_eq(&(adj * m), &expected, EPS));

        let mut n = m;
        n.adjoint_in_place();
        assert_eq!(n, adj);
    }

    #[test]
    fn inverse() {
        let m = sample();
        let inv = m.inverse().unwrap();
        assert!(mat_approx_eq(&(m * inv), &Matrix3::identity(), EPS));
        assert!(mat_approx_eq(&(inv * m), &Matrix3::identity(), EPS));

        let mut n = m;
        n.invert_in_place().unwrap();
        assert_eq!(n, inv);
    }

    #[test]
    fn inverse_singular() {
        let m = Matrix3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(m.inverse(), Err(MatrixError::Singular));

        let mut n = m;
        assert_eq!(n.invert_in_place(), Err(MatrixError::Singular));
        assert_eq!(n, m);
    }

    #[test]
    fn diagonal_helpers() {
        let d = Matrix3::from_diagonal(2.0, 4.0, 8.0);
        assert_eq!(d.inverse_assuming_diagonal(), Matrix3::from_diagonal(0.5, 0.25, 0.125));

        let mut e = d;
        e[1] = 7.0;
        e.invert_in_place_assuming_diagonal();
        assert_eq!(e[0], 0.5);
        assert_eq!(e[1], 7.0);

        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(d.add_to_diagonal(v), Matrix3::from_diagonal(3.0, 6.0, 11.0));
        assert_eq!(d.subtract_from_diagonal(v), Matrix3::from_diagonal(1.0, 2.0, 5.0));

        let mut f = sample();
        f.add_to_diagonal_in_place(v);
        f.subtract_from_diagonal_in_place(v);
        assert_eq!(f, sample());

        assert_eq!(
            d.multiply_assuming_diagonal(&Matrix3::from_diagonal(0.5, 0.5, 2.0)),
            Matrix3::from_diagonal(1.0, 2.0, 16.0)
        );
        let mut g = sample();
        g.multiply_assuming_diagonal_in_place(&d);
        assert_eq!(g[(0, 0)], 4.0);
        assert_eq!(g[(1, 1)], 12.0);
        assert_eq!(g[(0, 1)], -1.0);
    }
}
