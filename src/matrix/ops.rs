use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::matrix::{Matrix2, Matrix3};
use crate::vector::{Vector2, Vector3};

// ── Element-wise algebra ────────────────────────────────────────────
// Both matrix types are a flat `a: [f32; N]`, so cell-wise ops share one
// definition.

macro_rules! impl_elementwise {
    ($M:ident) => {
        impl Add for $M {
            type Output = Self;

            #[inline]
            fn add(mut self, rhs: Self) -> Self {
                self += rhs;
                self
            }
        }

        impl AddAssign for $M {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                for (a, b) in self.a.iter_mut().zip(rhs.a) {
                    *a += b;
                }
            }
        }

        impl Sub for $M {
            type Output = Self;

            #[inline]
            fn sub(mut self, rhs: Self) -> Self {
                self -= rhs;
                self
            }
        }

        impl SubAssign for $M {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                for (a, b) in self.a.iter_mut().zip(rhs.a) {
                    *a -= b;
                }
            }
        }

        impl Neg for $M {
            type Output = Self;

            #[inline]
            fn neg(mut self) -> Self {
                for a in self.a.iter_mut() {
                    *a = -*a;
                }
                self
            }
        }

        impl Mul<f32> for $M {
            type Output = Self;

            #[inline]
            fn mul(mut self, k: f32) -> Self {
                self *= k;
                self
            }
        }

        impl MulAssign<f32> for $M {
            #[inline]
            fn mul_assign(&mut self, k: f32) {
                for a in self.a.iter_mut() {
                    *a *= k;
                }
            }
        }

        impl Mul<$M> for f32 {
            type Output = $M;

            #[inline]
            fn mul(self, m: $M) -> $M {
                m * self
            }
        }

        // Division multiplies by the reciprocal.
        impl Div<f32> for $M {
            type Output = Self;

            #[inline]
            fn div(self, k: f32) -> Self {
                self * (1.0 / k)
            }
        }

        impl DivAssign<f32> for $M {
            #[inline]
            fn div_assign(&mut self, k: f32) {
                *self *= 1.0 / k;
            }
        }

        impl MulAssign for $M {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        // Reference variants. Both types are Copy, so these deref and delegate.
        impl Mul<&$M> for $M {
            type Output = $M;
            #[inline]
            fn mul(self, rhs: &$M) -> $M {
                self * *rhs
            }
        }

        impl Mul<$M> for &$M {
            type Output = $M;
            #[inline]
            fn mul(self, rhs: $M) -> $M {
                *self * rhs
            }
        }

        impl Mul<&$M> for &$M {
            type Output = $M;
            #[inline]
            fn mul(self, rhs: &$M) -> $M {
                *self * *rhs
            }
        }
    };
}

impl_elementwise!(Matrix3);
impl_elementwise!(Matrix2);

// ── Matrix products ─────────────────────────────────────────────────

impl Mul for Matrix3 {
    type Output = Self;

    fn mul(self, m: Self) -> Self {
        let a = &self.a;
        let b = &m.a;
        Self::from_array([
            a[0] * b[0] + a[1] * b[3] + a[2] * b[6],
            a[0] * b[1] + a[1] * b[4] + a[2] * b[7],
            a[0] * b[2] + a[1] * b[5] + a[2] * b[8],
            a[3] * b[0] + a[4] * b[3] + a[5] * b[6],
            a[3] * b[1] + a[4] * b[4] + a[5] * b[7],
            a[3] * b[2] + a[4] * b[5] + a[5] * b[8],
            a[6] * b[0] + a[7] * b[3] + a[8] * b[6],
            a[6] * b[1] + a[7] * b[4] + a[8] * b[7],
            a[6] * b[2] + a[7] * b[5] + a[8] * b[8],
        ])
    }
}

impl Mul<Vector3> for Matrix3 {
    type Output = Vector3;

    #[inline]
    fn mul(self, v: Vector3) -> Vector3 {
        let a = &self.a;
        Vector3::new(
            a[0] * v.x + a[1] * v.y + a[2] * v.z,
            a[3] * v.x + a[4] * v.y + a[5] * v.z,
            a[6] * v.x + a[7] * v.y + a[8] * v.z,
        )
    }
}

impl Mul for Matrix2 {
    type Output = Self;

    fn mul(self, m: Self) -> Self {
        let a = &self.a;
        let b = &m.a;
        Self::from_array([
            a[0] * b[0] + a[1] * b[2],
            a[0] * b[1] + a[1] * b[3],
            a[2] * b[0] + a[3] * b[2],
            a[2] * b[1] + a[3] * b[3],
        ])
    }
}

impl Mul<Vector2> for Matrix2 {
    type Output = Vector2;

    #[inline]
    fn mul(self, v: Vector2) -> Vector2 {
        let a = &self.a;
        Vector2::new(a[0] * v.x + a[1] * v.y, a[2] * v.x + a[3] * v.y)
    }
}
