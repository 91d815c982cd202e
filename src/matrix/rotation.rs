//! Conversions between rotation matrices, quaternions and Euler angles.

use crate::fastmath;
use crate::matrix::Matrix3;
use crate::quaternion::{Quaternion, DEGREES_TO_RADIANS};

impl Matrix3 {
    /// Rotation matrix of a unit quaternion (Hamilton convention), so that
    /// `Matrix3::from_quaternion(&q) * v == q.rotate(v)`.
    pub fn from_quaternion(q: &Quaternion) -> Self {
        let (w, x, y, z) = (q.w, q.x, q.y, q.z);

        Self::from_array([
            1.0 - 2.0 * (y * y + z * z),
            2.0 * (x * y - w * z),
            2.0 * (w * y + x * z),
            2.0 * (w * z + x * y),
            1.0 - 2.0 * (x * x + z * z),
            2.0 * (y * z - w * x),
            2.0 * (x * z - w * y),
            2.0 * (w * x + y * z),
            1.0 - 2.0 * (x * x + y * y),
        ])
    }

    /// Rotation matrix for roll `φ`, pitch `θ` and yaw `ψ` in radians,
    /// 3-2-1 sequence: `Rz(ψ) · Ry(θ) · Rx(φ)`.
    pub fn from_euler_angles_radians(roll: f32, pitch: f32, yaw: f32) -> Self {
        let (s_phi, c_phi) = fastmath::sin_cos(roll);
        let (s_theta, c_theta) = fastmath::sin_cos(pitch);
        let (s_psi, c_psi) = fastmath::sin_cos(yaw);

        Self::from_array([
            c_theta * c_psi,
            -c_phi * s_psi + s_phi * s_theta * c_psi,
            s_phi * s_psi + c_phi * s_theta * c_psi,
            c_theta * s_psi,
            c_phi * c_psi + s_phi * s_theta * s_psi,
            -s_phi * c_psi + c_phi * s_theta * s_psi,
            -s_theta,
            s_phi * c_theta,
            c_phi * c_theta,
        ])
    }

    pub fn from_euler_angles_degrees(roll: f32, pitch: f32, yaw: f32) -> Self {
        Self::from_euler_angles_radians(
            roll * DEGREES_TO_RADIANS,
            pitch * DEGREES_TO_RADIANS,
            yaw * DEGREES_TO_RADIANS,
        )
    }

    /// Recover the unit quaternion of a rotation matrix.
    ///
    /// Four algebraically equivalent formulas exist, each dividing by the
    /// square root of `t = 4w²`, `4x²`, `4y²` or `4z²`. The diagonal picks
    /// one whose `t` is at least 1, so the division is always well
    /// conditioned:
    ///
    /// | condition                  | form | `t`                     |
    /// |----------------------------|------|-------------------------|
    /// | `a8 < 0`, `a0 > a4`        | x    | `1 + (a0 − a4) − a8`    |
    /// | `a8 < 0`, `a0 ≤ a4`        | y    | `1 − (a0 − a4) − a8`    |
    /// | `a8 ≥ 0`, `a0 < −a4`       | z    | `1 − a0 − (a4 − a8)`    |
    /// | `a8 ≥ 0`, `a0 ≥ −a4`       | w    | `1 + a0 + a4 + a8`      |
    ///
    /// Ties fall to the second row of each pair. The sign of the result is
    /// whichever makes the selected component positive, so the output may
    /// be `-q` for the `q` the matrix was built from.
    ///
    /// ```
    /// use attitude::{Matrix3, Quaternion};
    ///
    /// let q = Quaternion::from_euler_angles_degrees(10.0, 20.0, 30.0);
    /// let r = Matrix3::from_quaternion(&q).to_quaternion();
    /// assert!((r.dot(q).abs() - 1.0).abs() < 1e-3);
    /// ```
    pub fn to_quaternion(&self) -> Quaternion {
        let a = &self.a;

        let (q, t) = if a[8] < 0.0 {
            if a[0] > a[4] {
                let t = 1.0 + (a[0] - a[4]) - a[8];
                (Quaternion::new(a[7] - a[5], t, a[1] + a[3], a[6] + a[2]), t)
            } else {
                let t = 1.0 - (a[0] - a[4]) - a[8];
                (Quaternion::new(a[2] - a[6], a[1] + a[3], t, a[5] + a[7]), t)
            }
        } else if a[0] < -a[4] {
            let t = 1.0 - a[0] - (a[4] - a[8]);
            (Quaternion::new(a[3] - a[1], a[2] + a[6], a[5] + a[7], t), t)
        } else {
            let t = 1.0 + a[0] + a[4] + a[8];
            (Quaternion::new(t, a[7] - a[5], a[2] - a[6], a[3] - a[1]), t)
        };

        // One reciprocal square root and four multiplies.
        q * (0.5 * fastmath::reciprocal_sqrt(t))
    }
}
