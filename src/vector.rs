//! Two- and three-component `f32` vectors.
//!
//! [`Vector3`] is the argument and result type of quaternion rotation and
//! of `Matrix3 * v`; [`Vector2`] plays the same role for `Matrix2`. Both are
//! plain `Copy` value types with public fields.
//!
//! ```
//! use attitude::Vector3;
//!
//! let a = Vector3::new(1.0, 0.0, 0.0);
//! let b = Vector3::new(0.0, 1.0, 0.0);
//! assert_eq!(a.cross(b), Vector3::new(0.0, 0.0, 1.0));
//! assert_eq!(a.dot(b), 0.0);
//! assert_eq!((a + b) * 2.0, Vector3::new(2.0, 2.0, 0.0));
//! ```

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::Float;

use crate::fastmath;

/// A vector in 3-space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// A vector in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector3 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Cross product `self × rhs`.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }
}

impl Vector2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// ── Shared algebra ──────────────────────────────────────────────────

macro_rules! impl_vector {
    ($V:ident, $n:literal, $($f:ident => $i:literal),+) => {
        impl $V {
            /// The zero vector.
            #[inline]
            pub const fn zero() -> Self {
                Self { $($f: 0.0),+ }
            }

            /// Every component set to `k`.
            #[inline]
            pub const fn splat(k: f32) -> Self {
                Self { $($f: k),+ }
            }

            #[inline]
            pub fn dot(self, rhs: Self) -> f32 {
                0.0 $(+ self.$f * rhs.$f)+
            }

            #[inline]
            pub fn magnitude_squared(self) -> f32 {
                self.dot(self)
            }

            #[inline]
            pub fn magnitude(self) -> f32 {
                Float::sqrt(self.magnitude_squared())
            }

            /// Unit vector in the direction of `self`, scaled by the active
            /// reciprocal square root. The zero vector yields non-finite
            /// components.
            #[inline]
            pub fn normalized(self) -> Self {
                self * fastmath::reciprocal_sqrt(self.magnitude_squared())
            }

            /// Normalize in place.
            #[inline]
            pub fn normalize(&mut self) {
                *self = self.normalized();
            }

            /// Component-wise absolute value.
            #[inline]
            pub fn abs(self) -> Self {
                Self { $($f: Float::abs(self.$f)),+ }
            }

            /// Clamp every component into `[min, max]`.
            #[inline]
            pub fn clamp(self, min: f32, max: f32) -> Self {
                Self { $($f: clamp(self.$f, min, max)),+ }
            }

            #[inline]
            pub fn distance_squared(self, other: Self) -> f32 {
                (self - other).magnitude_squared()
            }

            #[inline]
            pub fn distance(self, other: Self) -> f32 {
                Float::sqrt(self.distance_squared(other))
            }

            /// Sum of the components.
            #[inline]
            pub fn sum(self) -> f32 {
                0.0 $(+ self.$f)+
            }

            #[inline]
            pub fn mean(self) -> f32 {
                self.sum() * (1.0 / $n as f32)
            }

            /// Product of the components.
            #[inline]
            pub fn prod(self) -> f32 {
                1.0 $(* self.$f)+
            }
        }

        impl From<[f32; $n]> for $V {
            #[inline]
            fn from(a: [f32; $n]) -> Self {
                Self { $($f: a[$i]),+ }
            }
        }

        impl From<$V> for [f32; $n] {
            #[inline]
            fn from(v: $V) -> Self {
                [$(v.$f),+]
            }
        }

        impl Index<usize> for $V {
            type Output = f32;

            #[inline]
            fn index(&self, i: usize) -> &f32 {
                match i {
                    $($i => &self.$f,)+
                    _ => panic!("index {} out of range for {}", i, stringify!($V)),
                }
            }
        }

        impl IndexMut<usize> for $V {
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut f32 {
                match i {
                    $($i => &mut self.$f,)+
                    _ => panic!("index {} out of range for {}", i, stringify!($V)),
                }
            }
        }

        impl Neg for $V {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self { $($f: -self.$f),+ }
            }
        }

        impl Add for $V {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($f: self.$f + rhs.$f),+ }
            }
        }

        impl Sub for $V {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($f: self.$f - rhs.$f),+ }
            }
        }

        impl Mul<f32> for $V {
            type Output = Self;

            #[inline]
            fn mul(self, k: f32) -> Self {
                Self { $($f: self.$f * k),+ }
            }
        }

        impl Mul<$V> for f32 {
            type Output = $V;

            #[inline]
            fn mul(self, v: $V) -> $V {
                v * self
            }
        }

        /// Multiplies by the reciprocal of `k`.
        impl Div<f32> for $V {
            type Output = Self;

            #[inline]
            fn div(self, k: f32) -> Self {
                self * (1.0 / k)
            }
        }

        impl AddAssign for $V {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl SubAssign for $V {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl MulAssign<f32> for $V {
            #[inline]
            fn mul_assign(&mut self, k: f32) {
                *self = *self * k;
            }
        }

        impl DivAssign<f32> for $V {
            #[inline]
            fn div_assign(&mut self, k: f32) {
                *self = *self / k;
            }
        }
    };
}

impl_vector!(Vector3, 3, x => 0, y => 1, z => 2);
impl_vector!(Vector2, 2, x => 0, y => 1);

#[inline]
fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    // Tolerance of anything that goes through the active reciprocal sqrt.
    const NORM_TOL: f32 =
        if cfg!(feature = "fast-reciprocal-sqrt") && !cfg!(feature = "fast-reciprocal-sqrt-refined") {
            1e-3
        } else {
            1e-6
        };

    #[test]
    fn construction() {
        assert_eq!(Vector3::zero(), Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(Vector3::default(), Vector3::zero());
        assert_eq!(Vector3::splat(2.5), Vector3::new(2.5, 2.5, 2.5));
        assert_eq!(Vector2::splat(-1.0), Vector2::new(-1.0, -1.0));
        assert_eq!(Vector3::from([1.0, 2.0, 3.0]), Vector3::new(1.0, 2.0, 3.0));
        let a: [f32; 2] = Vector2::new(4.0, 5.0).into();
        assert_eq!(a, [4.0, 5.0]);
    }

    #[test]
    fn indexing() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[2], 3.0);
        v[1] = 7.0;
        assert_eq!(v.y, 7.0);
    }

    #[test]
    #[should_panic]
    fn index_out_of_range() {
        let v = Vector2::new(1.0, 2.0);
        let _ = v[2];
    }

    #[test]
    fn arithmetic() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3::splat(3.0));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
        assert_eq!(a * 2.0, 2.0 * a);
        assert_eq!(b / 2.0, Vector3::new(2.0, 2.5, 3.0));

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
        c *= 2.0;
        c /= 4.0;
        assert_eq!(c, Vector3::new(2.0, 2.5, 3.0));
    }

    #[test]
    fn dot_and_cross() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 32.0);
        let c = a.cross(b);
        assert_eq!(c, Vector3::new(-3.0, 6.0, -3.0));
        assert_eq!(c.dot(a), 0.0);
        assert_eq!(c.dot(b), 0.0);
        assert_eq!(Vector2::new(3.0, 4.0).dot(Vector2::new(1.0, 2.0)), 11.0);
    }

    #[test]
    fn magnitude_and_normalize() {
        let v = Vector3::new(3.0, 4.0, 12.0);
        assert_eq!(v.magnitude_squared(), 169.0);
        assert!(approx_eq(v.magnitude(), 13.0));

        let mut n = v;
        n.normalize();
        assert_eq!(n, v.normalized());
        assert!((n.magnitude() - 1.0).abs() < NORM_TOL);
        assert!((n.x - 3.0 / 13.0).abs() < NORM_TOL);

        let u = Vector2::new(3.0, 4.0).normalized();
        assert!((u.x - 0.6).abs() < NORM_TOL);
        assert!((u.y - 0.8).abs() < NORM_TOL);
    }

    #[test]
    fn reductions() {
        let v = Vector3::new(2.0, -3.0, 4.0);
        assert_eq!(v.sum(), 3.0);
        assert!(approx_eq(v.mean(), 1.0));
        assert_eq!(v.prod(), -24.0);
        assert_eq!(v.abs(), Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(v.clamp(-1.0, 3.0), Vector3::new(2.0, -1.0, 3.0));

        let w = Vector2::new(6.0, -2.0);
        assert_eq!(w.sum(), 4.0);
        assert_eq!(w.mean(), 2.0);
        assert_eq!(w.prod(), -12.0);
    }

    #[test]
    fn distance() {
        let a = Vector3::new(1.0, 1.0, 1.0);
        let b = Vector3::new(4.0, 5.0, 1.0);
        assert_eq!(a.distance_squared(b), 25.0);
        assert!(approx_eq(a.distance(b), 5.0));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Vector3::new(1.0, -2.0, 0.5)), "(1, -2, 0.5)");
        assert_eq!(format!("{}", Vector2::new(1.5, 2.0)), "(1.5, 2)");
    }
}
