use core::f32::consts::PI;
use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::Float;

use crate::fastmath;
use crate::matrix::Matrix3;
use crate::vector::Vector3;

pub const DEGREES_TO_RADIANS: f32 = PI / 180.0;
pub const RADIANS_TO_DEGREES: f32 = 180.0 / PI;

/// Quaternion for 3D rotations.
///
/// Scalar-first convention: `(w, x, y, z)` where `w` is the scalar part
/// and `(x, y, z)` is the vector part. Multiplication is the Hamilton
/// product, so `(a * b).rotate(v) == a.rotate(b.rotate(v))`.
///
/// Only unit quaternions represent rotations; the type itself does not
/// enforce `‖q‖ = 1` so that it can carry intermediate values. Euler
/// angles follow the aerospace 3-2-1 sequence: yaw about Z, then pitch
/// about the new Y, then roll about the new X.
///
/// ```
/// use attitude::Quaternion;
///
/// let q = Quaternion::from_euler_angles_degrees(19.0, 43.0, 67.0);
/// assert!((q.magnitude_squared() - 1.0).abs() < 4e-6);
/// assert!((q.roll_degrees() - 19.0).abs() < 1e-3);
/// assert!((q.pitch_degrees() - 43.0).abs() < 1e-3);
/// assert!((q.yaw_degrees() - 67.0).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

// ── Constructors ─────────────────────────────────────────────────────

impl Quaternion {
    /// Create a quaternion from components.
    #[inline]
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    /// Identity quaternion (no rotation).
    #[inline]
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Create from an axis (must be unit length) and angle in radians.
    #[inline]
    pub fn from_axis_angle(axis: Vector3, angle: f32) -> Self {
        let (s, c) = fastmath::sin_cos(0.5 * angle);
        Self::new(c, axis.x * s, axis.y * s, axis.z * s)
    }

    /// Create from roll, pitch and yaw in radians.
    ///
    /// Any real angles are accepted; the result has unit magnitude to
    /// within float precision. Angles outside the principal ranges are not
    /// canonicalized here, only by the extraction methods.
    pub fn from_euler_angles_radians(roll: f32, pitch: f32, yaw: f32) -> Self {
        let (sr, cr) = fastmath::sin_cos(0.5 * roll);
        let (sp, cp) = fastmath::sin_cos(0.5 * pitch);
        let (sy, cy) = fastmath::sin_cos(0.5 * yaw);

        Self {
            w: cr * cp * cy + sr * sp * sy,
            x: sr * cp * cy - cr * sp * sy,
            y: cr * sp * cy + sr * cp * sy,
            z: cr * cp * sy - sr * sp * cy,
        }
    }

    pub fn from_euler_angles_degrees(roll: f32, pitch: f32, yaw: f32) -> Self {
        Self::from_euler_angles_radians(
            roll * DEGREES_TO_RADIANS,
            pitch * DEGREES_TO_RADIANS,
            yaw * DEGREES_TO_RADIANS,
        )
    }

    /// Roll and pitch with zero yaw; identical to
    /// `from_euler_angles_radians(roll, pitch, 0.0)` with two fewer
    /// `sin_cos` evaluations.
    pub fn from_roll_pitch_radians(roll: f32, pitch: f32) -> Self {
        let (sr, cr) = fastmath::sin_cos(0.5 * roll);
        let (sp, cp) = fastmath::sin_cos(0.5 * pitch);

        Self::new(cr * cp, sr * cp, cr * sp, -sr * sp)
    }

    pub fn from_roll_pitch_degrees(roll: f32, pitch: f32) -> Self {
        Self::from_roll_pitch_radians(roll * DEGREES_TO_RADIANS, pitch * DEGREES_TO_RADIANS)
    }

    /// Shortest-arc rotation taking the direction of `src` onto the
    /// direction of `dst`. Neither vector needs to be normalized.
    ///
    /// For anti-parallel input the rotation axis is undefined; a half turn
    /// about the world axis least aligned with `src` is used instead.
    ///
    /// ```
    /// use attitude::{Quaternion, Vector3};
    ///
    /// let src = Vector3::new(2.0, 0.0, 0.0);
    /// let dst = Vector3::new(0.0, 0.0, 5.0);
    /// let q = Quaternion::from_two_vectors(src, dst);
    /// let r = q.rotate(Vector3::new(1.0, 0.0, 0.0));
    /// assert!((r - Vector3::new(0.0, 0.0, 1.0)).magnitude() < 1e-3);
    /// ```
    pub fn from_two_vectors(src: Vector3, dst: Vector3) -> Self {
        const EPSILON: f32 = 1e-5;

        let mut c = src.cross(dst);
        let d = src.dot(dst);

        let w = if c.magnitude_squared() < EPSILON * EPSILON && d < 0.0 {
            let sa = src.abs();
            let axis = if sa.x < sa.y {
                if sa.x < sa.z {
                    Vector3::new(1.0, 0.0, 0.0)
                } else {
                    Vector3::new(0.0, 0.0, 1.0)
                }
            } else if sa.y < sa.z {
                Vector3::new(0.0, 1.0, 0.0)
            } else {
                Vector3::new(0.0, 0.0, 1.0)
            };
            c = src.cross(axis);
            0.0
        } else {
            d + Float::sqrt(src.magnitude_squared() * dst.magnitude_squared())
        };

        Self::new(w, c.x, c.y, c.z).normalized()
    }

    /// Create from a 3×3 rotation matrix. See [`Matrix3::to_quaternion`].
    #[inline]
    pub fn from_rotation_matrix(m: &Matrix3) -> Self {
        m.to_quaternion()
    }
}

impl Default for Quaternion {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

// ── Core operations ──────────────────────────────────────────────────

impl Quaternion {
    /// Conjugate: `(w, -x, -y, -z)`.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Inverse: `conjugate / ‖q‖²`.
    ///
    /// For unit quaternions this equals the conjugate.
    #[inline]
    pub fn inverse(self) -> Self {
        self.conjugate() * (1.0 / self.magnitude_squared())
    }

    /// Dot product of two quaternions as 4-vectors.
    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        self.w * rhs.w + self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[inline]
    pub fn magnitude_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn magnitude(self) -> f32 {
        Float::sqrt(self.magnitude_squared())
    }

    /// Scale to unit magnitude using the active reciprocal square root.
    #[inline]
    pub fn normalized(self) -> Self {
        self * fastmath::reciprocal_sqrt(self.magnitude_squared())
    }

    /// Normalize in place.
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Vector part `(x, y, z)`.
    #[inline]
    pub fn imaginary(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }
}

// ── Rotation ─────────────────────────────────────────────────────────

impl Quaternion {
    /// Rotate `v` by this (unit) quaternion, `q v q⁻¹`.
    ///
    /// Applies the direction cosine matrix directly rather than forming two
    /// Hamilton products. The identity quaternion returns `v` exactly.
    pub fn rotate(self, v: Vector3) -> Vector3 {
        let (w, x, y, z) = (self.w, self.x, self.y, self.z);
        let x2 = x * x;
        let y2 = y * y;
        let z2 = z * z;

        Vector3::new(
            2.0 * (v.x * (0.5 - y2 - z2) + v.y * (x * y - w * z) + v.z * (w * y + x * z)),
            2.0 * (v.x * (w * z + x * y) + v.y * (0.5 - x2 - z2) + v.z * (y * z - w * x)),
            2.0 * (v.x * (x * z - w * y) + v.y * (w * x + y * z) + v.z * (0.5 - x2 - y2)),
        )
    }

    /// Third column of the rotation matrix, i.e. the body Z axis expressed
    /// in the world frame, without building the full matrix.
    #[inline]
    pub fn direction_cosine_matrix_z(self) -> Vector3 {
        let (w, x, y, z) = (self.w, self.x, self.y, self.z);
        Vector3::new(
            2.0 * (w * y + x * z),
            2.0 * (y * z - w * x),
            w * w - x * x - y * y + z * z,
        )
    }

    /// Convert to a 3×3 rotation matrix.
    #[inline]
    pub fn to_rotation_matrix(self) -> Matrix3 {
        Matrix3::from_quaternion(&self)
    }

    /// Rotate by `theta` radians about the body X axis:
    /// `*self = *self * (cos θ/2, sin θ/2, 0, 0)`.
    pub fn rotate_x(&mut self, theta: f32) {
        let (s, c) = fastmath::sin_cos(0.5 * theta);
        *self = *self * Self::new(c, s, 0.0, 0.0);
    }

    /// Rotate by `theta` radians about the body Y axis.
    pub fn rotate_y(&mut self, theta: f32) {
        let (s, c) = fastmath::sin_cos(0.5 * theta);
        *self = *self * Self::new(c, 0.0, s, 0.0);
    }

    /// Rotate by `theta` radians about the body Z axis.
    pub fn rotate_z(&mut self, theta: f32) {
        let (s, c) = fastmath::sin_cos(0.5 * theta);
        *self = *self * Self::new(c, 0.0, 0.0, s);
    }

    /// Apply a yaw increment of `delta` radians about the world Z axis:
    /// `*self = (cos δ/2, 0, 0, sin δ/2) * *self`.
    pub fn apply_delta(&mut self, delta: f32) {
        let (s, c) = fastmath::sin_cos(0.5 * delta);
        *self = Self::new(c, 0.0, 0.0, s) * *self;
    }
}

// ── Euler angles ─────────────────────────────────────────────────────
//
// Roll and yaw lie in (-π, π], pitch in [-π/2, π/2]. At pitch = ±π/2 roll
// and yaw are not separately defined and become ill-conditioned nearby.

impl Quaternion {
    // (numerator, denominator) of the roll atan2, each scaled by 1/2.
    #[inline]
    fn roll_terms(self) -> (f32, f32) {
        (
            self.w * self.x + self.y * self.z,
            0.5 - self.x * self.x - self.y * self.y,
        )
    }

    #[inline]
    fn yaw_terms(self) -> (f32, f32) {
        (
            self.w * self.z + self.x * self.y,
            0.5 - self.y * self.y - self.z * self.z,
        )
    }

    pub fn roll_radians(self) -> f32 {
        let (a, b) = self.roll_terms();
        fastmath::atan2(a, b)
    }

    /// Pitch in radians. The `asin` argument is clamped to `[-1, 1]` so
    /// that rounding near gimbal lock cannot produce NaN.
    pub fn pitch_radians(self) -> f32 {
        fastmath::asin(self.clamped_sin_pitch())
    }

    pub fn yaw_radians(self) -> f32 {
        let (a, b) = self.yaw_terms();
        fastmath::atan2(a, b)
    }

    #[inline]
    pub fn roll_degrees(self) -> f32 {
        RADIANS_TO_DEGREES * self.roll_radians()
    }

    #[inline]
    pub fn pitch_degrees(self) -> f32 {
        RADIANS_TO_DEGREES * self.pitch_radians()
    }

    #[inline]
    pub fn yaw_degrees(self) -> f32 {
        RADIANS_TO_DEGREES * self.yaw_radians()
    }

    /// `(roll, pitch, yaw)` in radians.
    pub fn euler_angles_radians(self) -> (f32, f32, f32) {
        (self.roll_radians(), self.pitch_radians(), self.yaw_radians())
    }

    /// `(roll, pitch, yaw)` in degrees.
    pub fn euler_angles_degrees(self) -> (f32, f32, f32) {
        (self.roll_degrees(), self.pitch_degrees(), self.yaw_degrees())
    }
}

// ── Trig ratios of the Euler angles ──────────────────────────────────
//
// These avoid atan2/asin entirely and cost one reciprocal square root.

impl Quaternion {
    pub fn sin_roll(self) -> f32 {
        let (a, b) = self.roll_terms();
        a * fastmath::reciprocal_sqrt(a * a + b * b)
    }

    /// As [`sin_roll`](Self::sin_roll), but snaps to ±1 once |roll| has
    /// passed 90°, so the ratio never turns back towards zero.
    pub fn sin_roll_clipped(self) -> f32 {
        let (a, b) = self.roll_terms();
        if b.is_sign_negative() {
            unit_with_sign_of(a)
        } else {
            a * fastmath::reciprocal_sqrt(a * a + b * b)
        }
    }

    pub fn cos_roll(self) -> f32 {
        let (a, b) = self.roll_terms();
        b * fastmath::reciprocal_sqrt(a * a + b * b)
    }

    /// Unbounded near |roll| = 90°.
    #[inline]
    pub fn tan_roll(self) -> f32 {
        let (a, b) = self.roll_terms();
        a / b
    }

    /// `2(wy − xz)`, unclamped.
    #[inline]
    pub fn sin_pitch(self) -> f32 {
        2.0 * (self.w * self.y - self.x * self.z)
    }

    /// As [`sin_pitch`](Self::sin_pitch), but snaps to ±1 when `w² − y²`
    /// is negative, i.e. the rotation has carried pitch past ±90°.
    pub fn sin_pitch_clipped(self) -> f32 {
        let s = self.sin_pitch();
        if (self.w * self.w - self.y * self.y).is_sign_negative() {
            unit_with_sign_of(s)
        } else {
            s
        }
    }

    pub fn cos_pitch(self) -> f32 {
        let s = self.clamped_sin_pitch();
        Float::sqrt(1.0 - s * s)
    }

    /// Unbounded at gimbal lock: `∞` with the library reciprocal square
    /// root, a very large finite value with the fast ones.
    pub fn tan_pitch(self) -> f32 {
        let s = self.clamped_sin_pitch();
        s * fastmath::reciprocal_sqrt(1.0 - s * s)
    }

    pub fn sin_yaw(self) -> f32 {
        let (a, b) = self.yaw_terms();
        a * fastmath::reciprocal_sqrt(a * a + b * b)
    }

    pub fn cos_yaw(self) -> f32 {
        let (a, b) = self.yaw_terms();
        b * fastmath::reciprocal_sqrt(a * a + b * b)
    }

    #[inline]
    pub fn tan_yaw(self) -> f32 {
        let (a, b) = self.yaw_terms();
        a / b
    }

    #[inline]
    fn clamped_sin_pitch(self) -> f32 {
        self.sin_pitch().clamp(-1.0, 1.0)
    }
}

#[inline]
fn unit_with_sign_of(x: f32) -> f32 {
    if x.is_sign_negative() {
        -1.0
    } else {
        1.0
    }
}

// ── Operators ────────────────────────────────────────────────────────

// Hamilton product: q1 * q2
impl Mul for Quaternion {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        }
    }
}

impl MulAssign for Quaternion {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

// Reference variants for Hamilton product
impl Mul<Quaternion> for &Quaternion {
    type Output = Quaternion;
    #[inline]
    fn mul(self, rhs: Quaternion) -> Quaternion {
        (*self).mul(rhs)
    }
}

impl Mul<&Quaternion> for Quaternion {
    type Output = Quaternion;
    #[inline]
    fn mul(self, rhs: &Quaternion) -> Quaternion {
        self.mul(*rhs)
    }
}

impl Mul<&Quaternion> for &Quaternion {
    type Output = Quaternion;
    #[inline]
    fn mul(self, rhs: &Quaternion) -> Quaternion {
        (*self).mul(*rhs)
    }
}

// q * v is q.rotate(v)
impl Mul<Vector3> for Quaternion {
    type Output = Vector3;

    #[inline]
    fn mul(self, v: Vector3) -> Vector3 {
        self.rotate(v)
    }
}

impl Mul<Vector3> for &Quaternion {
    type Output = Vector3;
    #[inline]
    fn mul(self, v: Vector3) -> Vector3 {
        (*self).rotate(v)
    }
}

impl Mul<&Vector3> for Quaternion {
    type Output = Vector3;
    #[inline]
    fn mul(self, v: &Vector3) -> Vector3 {
        self.rotate(*v)
    }
}

impl Mul<&Vector3> for &Quaternion {
    type Output = Vector3;
    #[inline]
    fn mul(self, v: &Vector3) -> Vector3 {
        (*self).rotate(*v)
    }
}

// Component-wise algebra, treating the quaternion as a 4-vector.

impl Add for Quaternion {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.w + rhs.w, self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Quaternion {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.w - rhs.w, self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Quaternion {
    type Output = Self;

    #[inline]
    fn mul(self, k: f32) -> Self {
        Self::new(self.w * k, self.x * k, self.y * k, self.z * k)
    }
}

impl Mul<Quaternion> for f32 {
    type Output = Quaternion;

    #[inline]
    fn mul(self, q: Quaternion) -> Quaternion {
        q * self
    }
}

impl Div<f32> for Quaternion {
    type Output = Self;

    #[inline]
    fn div(self, k: f32) -> Self {
        self * (1.0 / k)
    }
}

impl AddAssign for Quaternion {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Quaternion {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Quaternion {
    #[inline]
    fn mul_assign(&mut self, k: f32) {
        *self = *self * k;
    }
}

impl DivAssign<f32> for Quaternion {
    #[inline]
    fn div_assign(&mut self, k: f32) {
        *self = *self / k;
    }
}

// Negation
impl Neg for Quaternion {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

impl Neg for &Quaternion {
    type Output = Quaternion;

    #[inline]
    fn neg(self) -> Quaternion {
        (*self).neg()
    }
}

// ── Display ──────────────────────────────────────────────────────────

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} + {}i + {}j + {}k)", self.w, self.x, self.y, self.z)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
