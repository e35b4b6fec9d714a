use crate::core::config::EPSILON;
use crate::util::linalg::{Axis, Vector3};
use crate::util::real;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// A rotation represented as a unit quaternion `x i + y j + z k + w`.
///
/// Most methods assume the quaternion is normalised; only
/// [`normalized`](Quat::normalized) and the constructors guarantee it.
/// Composition of rotations uses [`compose`](Quat::compose) (the Hamilton
/// product); the `*` operator is element-wise, consistent with the vector
/// types.
///
/// # Examples
///
/// ```
/// use spindle::core::prelude::*;
///
/// let half_turn = Quat::from_axis_angle(Vector3::up(), std::f32::consts::PI);
/// assert!(half_turn.xform(Vector3::right()).almost_eq(Vector3::left()));
/// ```
#[repr(C)]
#[derive(
    Copy, Clone, Debug, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quat {
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Quat {
        Quat { x, y, z, w }
    }

    #[must_use]
    pub const fn identity() -> Quat {
        Quat::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Rotation of `angle` radians about `axis`. The axis does not need to be
    /// unit length; a zero axis yields the zero quaternion.
    #[must_use]
    pub fn from_axis_angle(axis: Vector3, angle: f32) -> Quat {
        let d = axis.length();
        if d == 0.0 {
            Quat::new(0.0, 0.0, 0.0, 0.0)
        } else {
            let (sin, cos) = (angle * 0.5).sin_cos();
            let s = sin / d;
            Quat::new(axis.x * s, axis.y * s, axis.z * s, cos)
        }
    }

    /// Rotation from Euler angles `(pitch, yaw, roll)` about `(x, y, z)`,
    /// applied in y-x-z order.
    #[must_use]
    pub fn from_euler(euler: Vector3) -> Quat {
        let half_x = euler.x * 0.5;
        let half_y = euler.y * 0.5;
        let half_z = euler.z * 0.5;
        let (s1, c1) = half_y.sin_cos();
        let (s2, c2) = half_x.sin_cos();
        let (s3, c3) = half_z.sin_cos();
        Quat::new(
            s1 * c2 * s3 + c1 * s2 * c3,
            s1 * c2 * c3 - c1 * s2 * s3,
            -s1 * s2 * c3 + c1 * c2 * s3,
            s1 * s2 * s3 + c1 * c2 * c3,
        )
    }

    /// Euler angles `(pitch, yaw, roll)` in y-x-z order; the inverse of
    /// [`from_euler`](Quat::from_euler) for normalised quaternions.
    #[must_use]
    pub fn get_euler(&self) -> Vector3 {
        Basis::from_quat(*self).get_euler()
    }

    #[must_use]
    pub fn dot(&self, b: Quat) -> f32 {
        self.x * b.x + self.y * b.y + self.z * b.z + self.w * b.w
    }

    #[must_use]
    pub fn length_squared(&self) -> f32 {
        self.dot(*self)
    }

    #[must_use]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// `self / length()`; unguarded like the vector types.
    #[must_use]
    pub fn normalized(&self) -> Quat {
        *self / self.length()
    }

    #[must_use]
    pub fn is_normalized(&self) -> bool {
        real::is_equal_approx(self.length_squared(), 1.0)
    }

    /// The algebraic inverse: the conjugate divided by the squared length.
    /// For a normalised quaternion this is just the conjugate.
    #[must_use]
    pub fn inverse(&self) -> Quat {
        Quat::new(-self.x, -self.y, -self.z, self.w) / self.length_squared()
    }

    /// Hamilton product: the rotation `rhs` followed by `self`, so that
    /// `a.compose(b).xform(v) == a.xform(b.xform(v))`.
    #[must_use]
    pub fn compose(&self, b: Quat) -> Quat {
        Quat::new(
            self.w * b.x + self.x * b.w + self.y * b.z - self.z * b.y,
            self.w * b.y + self.y * b.w + self.z * b.x - self.x * b.z,
            self.w * b.z + self.z * b.w + self.x * b.y - self.y * b.x,
            self.w * b.w - self.x * b.x - self.y * b.y - self.z * b.z,
        )
    }

    /// Rotates `v` by this quaternion. Assumes `self` is normalised.
    #[must_use]
    pub fn xform(&self, v: Vector3) -> Vector3 {
        let u = Vector3::new(self.x, self.y, self.z);
        let uv = u.cross(v);
        v + (uv * self.w + u.cross(uv)) * 2.0
    }

    /// Spherical interpolation along the shortest arc: the other endpoint is
    /// negated when the quaternions lie in opposite hemispheres. Falls back to
    /// linear weights when the endpoints are nearly identical.
    #[must_use]
    pub fn slerp(&self, b: Quat, t: f32) -> Quat {
        let mut cosom = self.dot(b);
        let to = if cosom < 0.0 {
            cosom = -cosom;
            -b
        } else {
            b
        };
        let (scale0, scale1) = if 1.0 - cosom > EPSILON {
            let omega = cosom.acos();
            let sinom = omega.sin();
            (((1.0 - t) * omega).sin() / sinom, (t * omega).sin() / sinom)
        } else {
            (1.0 - t, t)
        };
        *self * scale0 + to * scale1
    }

    /// Spherical interpolation without the shortest-arc flip, so the rotation
    /// may take the long way round. Returns `self` unchanged when the
    /// endpoints are nearly identical; near-antiparallel endpoints still
    /// interpolate along the (almost full-circle) arc.
    #[must_use]
    pub fn slerpni(&self, b: Quat, t: f32) -> Quat {
        let dot = self.dot(b);
        if dot > 0.9999 {
            return *self;
        }
        let theta = dot.acos();
        let sin_t = 1.0 / theta.sin();
        let new_factor = (t * theta).sin() * sin_t;
        let inv_factor = ((1.0 - t) * theta).sin() * sin_t;
        *self * inv_factor + b * new_factor
    }

    /// Spherical-cubic interpolation through `b` with `pre_a` and `post_b` as
    /// control rotations.
    #[must_use]
    pub fn cubic_slerp(&self, b: Quat, pre_a: Quat, post_b: Quat, t: f32) -> Quat {
        let t2 = (1.0 - t) * t * 2.0;
        let sp = self.slerp(b, t);
        let sq = pre_a.slerpni(post_b, t);
        sp.slerpni(sq, t2)
    }

    pub fn set_axis_angle(&mut self, axis: Vector3, angle: f32) {
        *self = Quat::from_axis_angle(axis, angle);
    }

    pub fn set_euler(&mut self, euler: Vector3) {
        *self = Quat::from_euler(euler);
    }

    /// Approximate equality on all four components.
    pub fn almost_eq(&self, rhs: Quat) -> bool {
        real::is_equal_approx(self.x, rhs.x)
            && real::is_equal_approx(self.y, rhs.y)
            && real::is_equal_approx(self.z, rhs.z)
            && real::is_equal_approx(self.w, rhs.w)
    }
}

impl Default for Quat {
    fn default() -> Self {
        Quat::identity()
    }
}

impl Zero for Quat {
    fn zero() -> Self {
        Quat::new(0.0, 0.0, 0.0, 0.0)
    }

    fn is_zero(&self) -> bool {
        *self == Zero::zero()
    }
}

impl fmt::Display for Quat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

impl Neg for Quat {
    type Output = Quat;
    fn neg(self) -> Self::Output {
        Quat::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Add<Quat> for Quat {
    type Output = Quat;
    fn add(self, rhs: Quat) -> Self::Output {
        Quat::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}
impl AddAssign<Quat> for Quat {
    fn add_assign(&mut self, rhs: Quat) {
        *self = *self + rhs;
    }
}
impl Sub<Quat> for Quat {
    type Output = Quat;
    fn sub(self, rhs: Quat) -> Self::Output {
        Quat::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}
impl SubAssign<Quat> for Quat {
    fn sub_assign(&mut self, rhs: Quat) {
        *self = *self - rhs;
    }
}
/// Element-wise product; use [`Quat::compose`] for rotation composition.
impl Mul<Quat> for Quat {
    type Output = Quat;
    fn mul(self, rhs: Quat) -> Self::Output {
        Quat::new(
            self.x * rhs.x,
            self.y * rhs.y,
            self.z * rhs.z,
            self.w * rhs.w,
        )
    }
}
impl Mul<f32> for Quat {
    type Output = Quat;
    fn mul(self, rhs: f32) -> Self::Output {
        Quat::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}
impl Mul<Quat> for f32 {
    type Output = Quat;
    fn mul(self, rhs: Quat) -> Self::Output {
        rhs * self
    }
}
impl MulAssign<f32> for Quat {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}
impl Div<f32> for Quat {
    type Output = Quat;
    fn div(self, rhs: f32) -> Self::Output {
        Quat::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}
impl DivAssign<f32> for Quat {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

/// A 3x3 matrix stored as its three column vectors, used for rotation, scale
/// and shear. `xform` is the matrix-vector product, so
/// `basis.xform(Vector3::right()) == basis.x`.
///
/// The `*` operator is the matrix product: `(a * b).xform(v)` equals
/// `a.xform(b.xform(v))`.
#[repr(C)]
#[derive(
    Copy, Clone, Debug, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
pub struct Basis {
    pub x: Vector3,
    pub y: Vector3,
    pub z: Vector3,
}

impl Basis {
    #[must_use]
    pub const fn new(x: Vector3, y: Vector3, z: Vector3) -> Basis {
        Basis { x, y, z }
    }

    #[must_use]
    pub const fn identity() -> Basis {
        Basis::new(Vector3::right(), Vector3::up(), Vector3::back())
    }

    /// Rodrigues rotation of `phi` radians about the unit-length `axis`.
    ///
    /// # Examples
    ///
    /// ```
    /// use spindle::core::prelude::*;
    ///
    /// let b = Basis::from_axis_angle(Vector3::up(), std::f32::consts::PI);
    /// assert!(b.xform(Vector3::right()).almost_eq(Vector3::left()));
    /// ```
    #[must_use]
    pub fn from_axis_angle(axis: Vector3, phi: f32) -> Basis {
        let (s, c) = phi.sin_cos();
        let t = 1.0 - c;
        Basis::from_rows([
            [
                axis.x * axis.x * t + c,
                axis.x * axis.y * t - axis.z * s,
                axis.x * axis.z * t + axis.y * s,
            ],
            [
                axis.y * axis.x * t + axis.z * s,
                axis.y * axis.y * t + c,
                axis.y * axis.z * t - axis.x * s,
            ],
            [
                axis.z * axis.x * t - axis.y * s,
                axis.z * axis.y * t + axis.x * s,
                axis.z * axis.z * t + c,
            ],
        ])
    }

    /// Rotation from Euler angles `(pitch, yaw, roll)`, applied in y-x-z
    /// order: yaw about y, then pitch about x, then roll about z.
    #[must_use]
    pub fn from_euler(euler: Vector3) -> Basis {
        Basis::from_axis_angle(Vector3::up(), euler.y)
            * Basis::from_axis_angle(Vector3::right(), euler.x)
            * Basis::from_axis_angle(Vector3::back(), euler.z)
    }

    /// Rotation matrix of the normalised quaternion `quat`.
    #[must_use]
    pub fn from_quat(quat: Quat) -> Basis {
        let s = 2.0 / quat.length_squared();
        let (xs, ys, zs) = (quat.x * s, quat.y * s, quat.z * s);
        let (wx, wy, wz) = (quat.w * xs, quat.w * ys, quat.w * zs);
        let (xx, xy, xz) = (quat.x * xs, quat.x * ys, quat.x * zs);
        let (yy, yz, zz) = (quat.y * ys, quat.y * zs, quat.z * zs);
        Basis::from_rows([
            [1.0 - (yy + zz), xy - wz, xz + wy],
            [xy + wz, 1.0 - (xx + zz), yz - wx],
            [xz - wy, yz + wx, 1.0 - (xx + yy)],
        ])
    }

    /// The diagonal matrix scaling each axis by the matching component of
    /// `scale`.
    #[must_use]
    pub fn from_scale(scale: Vector3) -> Basis {
        Basis::new(
            Vector3::new(scale.x, 0.0, 0.0),
            Vector3::new(0.0, scale.y, 0.0),
            Vector3::new(0.0, 0.0, scale.z),
        )
    }

    /// Rotation and scale combined: the rotation of `quat` with each basis
    /// axis scaled afterwards.
    #[must_use]
    pub fn from_quat_scale(quat: Quat, scale: Vector3) -> Basis {
        let rot = Basis::from_quat(quat);
        Basis::new(rot.x * scale.x, rot.y * scale.y, rot.z * scale.z)
    }

    // Row-major element grid; m[row][col].
    fn rows(&self) -> [[f32; 3]; 3] {
        [
            [self.x.x, self.y.x, self.z.x],
            [self.x.y, self.y.y, self.z.y],
            [self.x.z, self.y.z, self.z.z],
        ]
    }

    fn from_rows(m: [[f32; 3]; 3]) -> Basis {
        Basis::new(
            Vector3::new(m[0][0], m[1][0], m[2][0]),
            Vector3::new(m[0][1], m[1][1], m[2][1]),
            Vector3::new(m[0][2], m[1][2], m[2][2]),
        )
    }

    #[must_use]
    pub fn determinant(&self) -> f32 {
        self.x.dot(self.y.cross(self.z))
    }

    #[must_use]
    pub fn transposed(&self) -> Basis {
        Basis::new(
            Vector3::new(self.x.x, self.y.x, self.z.x),
            Vector3::new(self.x.y, self.y.y, self.z.y),
            Vector3::new(self.x.z, self.y.z, self.z.z),
        )
    }

    /// Inverse via the adjugate. Unguarded: a singular matrix divides by a
    /// zero determinant.
    #[must_use]
    pub fn inverse(&self) -> Basis {
        let m = self.rows();
        let cofac =
            |r1: usize, c1: usize, r2: usize, c2: usize| m[r1][c1] * m[r2][c2] - m[r1][c2] * m[r2][c1];
        let co = [cofac(1, 1, 2, 2), cofac(1, 2, 2, 0), cofac(1, 0, 2, 1)];
        let det = m[0][0] * co[0] + m[0][1] * co[1] + m[0][2] * co[2];
        let s = 1.0 / det;
        Basis::from_rows([
            [co[0] * s, cofac(0, 2, 2, 1) * s, cofac(0, 1, 1, 2) * s],
            [co[1] * s, cofac(0, 0, 2, 2) * s, cofac(0, 2, 1, 0) * s],
            [co[2] * s, cofac(0, 1, 2, 0) * s, cofac(0, 0, 1, 1) * s],
        ])
    }

    /// Gram-Schmidt orthonormalisation of the columns, in x, y, z order.
    /// NaN columns when any input column is zero.
    #[must_use]
    pub fn orthonormalized(&self) -> Basis {
        let x = self.x.normalized();
        let y = (self.y - x * x.dot(self.y)).normalized();
        let z = (self.z - x * x.dot(self.z) - y * y.dot(self.z)).normalized();
        Basis::new(x, y, z)
    }

    /// This basis rotated by `phi` radians about `axis` (a global rotation,
    /// applied after the existing transform).
    #[must_use]
    pub fn rotated(&self, axis: Vector3, phi: f32) -> Basis {
        Basis::from_axis_angle(axis, phi) * *self
    }

    /// This basis with a global scale applied after the existing transform.
    #[must_use]
    pub fn scaled(&self, scale: Vector3) -> Basis {
        Basis::new(self.x * scale, self.y * scale, self.z * scale)
    }

    /// The length of each column, negated when the determinant is negative.
    #[must_use]
    pub fn get_scale(&self) -> Vector3 {
        let det_sign = if self.determinant() > 0.0 { 1.0 } else { -1.0 };
        Vector3::new(self.x.length(), self.y.length(), self.z.length()) * det_sign
    }

    /// Euler angles `(pitch, yaw, roll)` in y-x-z order. Assumes the basis is
    /// a pure rotation; gimbal lock at pitch of plus or minus a quarter turn
    /// folds the roll into the yaw.
    #[must_use]
    pub fn get_euler(&self) -> Vector3 {
        let m = self.rows();
        let m12 = m[1][2];
        if m12 < 1.0 {
            if m12 > -1.0 {
                Vector3::new(
                    (-m12).asin(),
                    m[0][2].atan2(m[2][2]),
                    m[1][0].atan2(m[1][1]),
                )
            } else {
                Vector3::new(
                    std::f32::consts::FRAC_PI_2,
                    -(-m[0][1]).atan2(m[0][0]),
                    0.0,
                )
            }
        } else {
            Vector3::new(
                -std::f32::consts::FRAC_PI_2,
                -(-m[0][1]).atan2(m[0][0]),
                0.0,
            )
        }
    }

    /// The quaternion of this rotation matrix (Shepperd's method). The caller
    /// must pass an orthonormalised basis with positive determinant.
    #[must_use]
    pub fn get_rotation_quat(&self) -> Quat {
        let m = self.rows();
        let trace = m[0][0] + m[1][1] + m[2][2];
        let mut temp = [0.0f32; 4];
        if trace > 0.0 {
            let mut s = (trace + 1.0).sqrt();
            temp[3] = s * 0.5;
            s = 0.5 / s;
            temp[0] = (m[2][1] - m[1][2]) * s;
            temp[1] = (m[0][2] - m[2][0]) * s;
            temp[2] = (m[1][0] - m[0][1]) * s;
        } else {
            let i = if m[0][0] < m[1][1] {
                if m[1][1] < m[2][2] {
                    2
                } else {
                    1
                }
            } else if m[0][0] < m[2][2] {
                2
            } else {
                0
            };
            let j = (i + 1) % 3;
            let k = (i + 2) % 3;
            let mut s = (m[i][i] - m[j][j] - m[k][k] + 1.0).sqrt();
            temp[i] = s * 0.5;
            s = 0.5 / s;
            temp[3] = (m[k][j] - m[j][k]) * s;
            temp[j] = (m[j][i] + m[i][j]) * s;
            temp[k] = (m[k][i] + m[i][k]) * s;
        }
        Quat::new(temp[0], temp[1], temp[2], temp[3])
    }

    /// Rotation-only spherical interpolation of the two bases, via their
    /// quaternions; any scale or shear is discarded.
    #[must_use]
    pub fn slerp(&self, b: Basis, t: f32) -> Basis {
        Basis::from_quat(self.get_rotation_quat().slerp(b.get_rotation_quat(), t))
    }

    /// Matrix-vector product.
    #[must_use]
    pub fn xform(&self, v: Vector3) -> Vector3 {
        self.x * v.x + self.y * v.y + self.z * v.z
    }

    /// Transposed matrix-vector product; the inverse transform when the basis
    /// is orthonormal.
    #[must_use]
    pub fn xform_inv(&self, v: Vector3) -> Vector3 {
        Vector3::new(self.x.dot(v), self.y.dot(v), self.z.dot(v))
    }

    /// Dot product of `v` with the first row.
    #[must_use]
    pub fn tdotx(&self, v: Vector3) -> f32 {
        Vector3::new(self.x.x, self.y.x, self.z.x).dot(v)
    }
    /// Dot product of `v` with the second row.
    #[must_use]
    pub fn tdoty(&self, v: Vector3) -> f32 {
        Vector3::new(self.x.y, self.y.y, self.z.y).dot(v)
    }
    /// Dot product of `v` with the third row.
    #[must_use]
    pub fn tdotz(&self, v: Vector3) -> f32 {
        Vector3::new(self.x.z, self.y.z, self.z.z).dot(v)
    }

    /// The column for `axis`.
    #[must_use]
    pub fn get_axis(&self, axis: Axis) -> Vector3 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Replaces the column for `axis`.
    pub fn set_axis(&mut self, axis: Axis, value: Vector3) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
    }

    pub fn almost_eq(&self, rhs: Basis) -> bool {
        self.x.almost_eq(rhs.x) && self.y.almost_eq(rhs.y) && self.z.almost_eq(rhs.z)
    }
}

impl Default for Basis {
    fn default() -> Self {
        Basis::identity()
    }
}

impl One for Basis {
    fn one() -> Self {
        Basis::identity()
    }
}

impl Zero for Basis {
    fn zero() -> Self {
        Basis::new(Vector3::zero(), Vector3::zero(), Vector3::zero())
    }

    fn is_zero(&self) -> bool {
        *self == Zero::zero()
    }
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}

impl Add<Basis> for Basis {
    type Output = Basis;
    fn add(self, rhs: Basis) -> Self::Output {
        Basis::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}
impl Sub<Basis> for Basis {
    type Output = Basis;
    fn sub(self, rhs: Basis) -> Self::Output {
        Basis::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}
impl Mul<Basis> for Basis {
    type Output = Basis;
    fn mul(self, rhs: Basis) -> Self::Output {
        Basis::new(self.xform(rhs.x), self.xform(rhs.y), self.xform(rhs.z))
    }
}
impl MulAssign<Basis> for Basis {
    fn mul_assign(&mut self, rhs: Basis) {
        *self = *self * rhs;
    }
}
impl Mul<f32> for Basis {
    type Output = Basis;
    fn mul(self, rhs: f32) -> Self::Output {
        Basis::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f32::consts::{FRAC_PI_2, PI};
    use std::mem::{offset_of, size_of};

    fn random_rotation(rng: &mut StdRng) -> Basis {
        let axis = Vector3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        )
        .normalized();
        Basis::from_axis_angle(axis, rng.gen_range(-PI..PI))
    }

    // ==================== Quat ====================

    #[test]
    fn quat_identity_is_default() {
        assert_eq!(Quat::default(), Quat::identity());
        assert_eq!(Quat::identity().xform(Vector3::one()), Vector3::one());
        assert!(Quat::identity().is_normalized());
    }

    #[test]
    fn quat_from_axis_angle() {
        let q = Quat::from_axis_angle(Vector3::up(), PI);
        assert!(q.xform(Vector3::right()).almost_eq(Vector3::left()));
        let q = Quat::from_axis_angle(Vector3::up(), FRAC_PI_2);
        assert!(q.xform(Vector3::right()).almost_eq(Vector3::forward()));
        // Axis length is normalised away.
        let q2 = Quat::from_axis_angle(Vector3::up() * 10.0, FRAC_PI_2);
        assert!(q.almost_eq(q2));
        // A zero axis degenerates to the zero quaternion.
        assert_eq!(Quat::from_axis_angle(Vector3::zero(), 1.0), Quat::zero());
    }

    #[test]
    fn quat_compose_matches_sequential_xform() {
        let a = Quat::from_axis_angle(Vector3::up(), 0.7);
        let b = Quat::from_axis_angle(Vector3::right(), -1.2);
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert!(a.compose(b).xform(v).almost_eq(a.xform(b.xform(v))));
        // The * operator is element-wise, not the Hamilton product.
        assert_eq!(
            a * b,
            Quat::new(a.x * b.x, a.y * b.y, a.z * b.z, a.w * b.w)
        );
    }

    #[test]
    fn quat_inverse_undoes_rotation() {
        let q = Quat::from_axis_angle(Vector3::new(1.0, 2.0, -1.0).normalized(), 0.9);
        let v = Vector3::new(-3.0, 0.5, 2.0);
        assert!(q.inverse().xform(q.xform(v)).almost_eq(v));
        assert!(q.compose(q.inverse()).almost_eq(Quat::identity()));
        // The algebraic inverse also works for non-unit quaternions.
        let q2 = q * 3.0;
        assert!(q2.compose(q2.inverse()).almost_eq(Quat::identity()));
    }

    #[test]
    fn quat_euler_round_trip() {
        let euler = Vector3::new(0.3, -0.4, 0.5);
        let q = Quat::from_euler(euler);
        assert!(q.is_normalized());
        assert!(q.get_euler().almost_eq(euler));
        // Same rotation as the matrix route.
        assert!(Basis::from_quat(q).almost_eq(Basis::from_euler(euler)));
    }

    #[test]
    fn quat_slerp_endpoints_and_shortest_arc() {
        let a = Quat::from_axis_angle(Vector3::up(), 0.2);
        let b = Quat::from_axis_angle(Vector3::up(), 1.4);
        assert!(a.slerp(b, 0.0).almost_eq(a));
        assert!(a.slerp(b, 1.0).almost_eq(b));
        let mid = a.slerp(b, 0.5);
        assert!(mid.almost_eq(Quat::from_axis_angle(Vector3::up(), 0.8)));

        // -b is the same rotation; slerp takes the short way regardless.
        let mid2 = a.slerp(-b, 0.5);
        assert!(mid2.almost_eq(mid) || mid2.almost_eq(-mid));

        // slerpni agrees on the short arc when the dot is positive, but takes
        // the long way round when it is negative.
        assert!(a.slerpni(b, 0.5).almost_eq(mid));
        let long_mid = a.slerpni(-b, 0.5);
        assert!(!long_mid.almost_eq(mid) && !long_mid.almost_eq(-mid));
        let expected = Quat::from_axis_angle(Vector3::up(), 0.8 + PI);
        assert!(long_mid.almost_eq(expected) || long_mid.almost_eq(-expected));
    }

    #[test]
    fn quat_slerpni_keeps_given_hemisphere() {
        let a = Quat::from_axis_angle(Vector3::up(), 0.2);
        let b = Quat::from_axis_angle(Vector3::up(), 1.4);
        assert!(a.slerpni(b, 0.5).almost_eq(Quat::from_axis_angle(Vector3::up(), 0.8)));
        // Nearly identical endpoints return self unchanged.
        assert!(a.slerpni(a, 0.7).almost_eq(a));
    }

    #[test]
    fn quat_slerpni_near_antiparallel_takes_long_arc() {
        let a = Quat::identity();
        let b = -Quat::from_axis_angle(Vector3::up(), 0.02);
        assert!(a.dot(b) < -0.9999);
        // Still interpolates rather than echoing `a` back.
        assert!(a.slerpni(b, 0.0).almost_eq(a));
        assert!(a.slerpni(b, 1.0).almost_eq(b));
        let mid = a.slerpni(b, 0.5);
        assert!(mid.is_normalized());
        assert!(!mid.almost_eq(a));
    }

    #[test]
    fn quat_cubic_slerp_endpoints() {
        let pre = Quat::from_axis_angle(Vector3::up(), -0.3);
        let a = Quat::from_axis_angle(Vector3::up(), 0.1);
        let b = Quat::from_axis_angle(Vector3::up(), 0.9);
        let post = Quat::from_axis_angle(Vector3::up(), 1.3);
        assert!(a.cubic_slerp(b, pre, post, 0.0).almost_eq(a));
        assert!(a.cubic_slerp(b, pre, post, 1.0).almost_eq(b));
    }

    // ==================== Basis ====================

    #[test]
    fn basis_identity_and_columns() {
        let b = Basis::identity();
        assert_eq!(b, Basis::default());
        assert_eq!(b.xform(Vector3::right()), b.x);
        assert_eq!(b.determinant(), 1.0);
        assert!(real::is_equal_approx(Basis::one().determinant(), 1.0));
    }

    #[test]
    fn basis_from_axis_angle() {
        let b = Basis::from_axis_angle(Vector3::up(), PI);
        assert!(b.xform(Vector3::right()).almost_eq(Vector3::left()));
        let b = Basis::from_axis_angle(Vector3::up(), FRAC_PI_2);
        assert!(b.xform(Vector3::right()).almost_eq(Vector3::forward()));
        assert!(real::is_equal_approx(b.determinant(), 1.0));
    }

    #[test]
    fn basis_mul_matches_sequential_xform() {
        let a = Basis::from_axis_angle(Vector3::up(), 0.7);
        let b = Basis::from_scale(Vector3::new(2.0, 3.0, 4.0));
        let v = Vector3::new(1.0, -2.0, 0.5);
        assert!((a * b).xform(v).almost_eq(a.xform(b.xform(v))));
    }

    #[test]
    fn basis_inverse_and_transpose() {
        let b = Basis::from_euler(Vector3::new(0.2, 0.5, -0.8))
            * Basis::from_scale(Vector3::new(2.0, 1.0, 0.5));
        let v = Vector3::new(3.0, -1.0, 2.0);
        assert!(b.inverse().xform(b.xform(v)).almost_eq(v));
        assert!((b.inverse() * b).almost_eq(Basis::identity()));
        // For pure rotations, transpose is inverse.
        let r = Basis::from_euler(Vector3::new(0.2, 0.5, -0.8));
        assert!(r.transposed().almost_eq(r.inverse()));
        assert!(r.xform_inv(r.xform(v)).almost_eq(v));
    }

    #[test]
    fn basis_euler_round_trip() {
        let euler = Vector3::new(0.4, -1.1, 0.7);
        let b = Basis::from_euler(euler);
        assert!(b.get_euler().almost_eq(euler));
        // Order is yaw, then pitch, then roll.
        let composed = Basis::from_axis_angle(Vector3::up(), euler.y)
            * Basis::from_axis_angle(Vector3::right(), euler.x)
            * Basis::from_axis_angle(Vector3::back(), euler.z);
        assert!(b.almost_eq(composed));
    }

    #[test]
    fn basis_quat_round_trip() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let b = random_rotation(&mut rng);
            let q = b.get_rotation_quat();
            assert!(q.is_normalized());
            assert!(Basis::from_quat(q).almost_eq(b));
        }
    }

    #[test]
    fn basis_orthonormalized_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let skewed = random_rotation(&mut rng)
                * Basis::from_scale(Vector3::new(
                    rng.gen_range(0.1..4.0),
                    rng.gen_range(0.1..4.0),
                    rng.gen_range(0.1..4.0),
                ));
            let ortho = skewed.orthonormalized();
            assert!(real::is_equal_approx(ortho.x.length(), 1.0));
            assert!(real::is_equal_approx(ortho.y.length(), 1.0));
            assert!(real::is_equal_approx(ortho.z.length(), 1.0));
            assert!(real::is_zero_approx(ortho.x.dot(ortho.y)));
            assert!(real::is_zero_approx(ortho.x.dot(ortho.z)));
            assert!(real::is_zero_approx(ortho.y.dot(ortho.z)));
            assert!(ortho.orthonormalized().almost_eq(ortho));
        }
    }

    #[test]
    fn basis_scale_extraction() {
        // get_scale() assumes the rotation-then-scale decomposition R * S.
        let s = Vector3::new(2.0, 3.0, 4.0);
        let b = Basis::from_euler(Vector3::new(0.1, 0.2, 0.3)) * Basis::from_scale(s);
        assert!(b.get_scale().almost_eq(s));
        // Negative determinant flips the reported sign.
        let flipped = Basis::from_scale(Vector3::new(-1.0, 1.0, 1.0));
        assert!(flipped.get_scale().almost_eq(Vector3::new(-1.0, -1.0, -1.0)));
    }

    #[test]
    fn basis_slerp_is_rotation_only() {
        let a = Basis::from_axis_angle(Vector3::up(), 0.0);
        let b = Basis::from_axis_angle(Vector3::up(), 1.0);
        let mid = a.slerp(b, 0.5);
        assert!(mid.almost_eq(Basis::from_axis_angle(Vector3::up(), 0.5)));
        assert!(a.slerp(b, 0.0).almost_eq(a));
        assert!(a.slerp(b, 1.0).almost_eq(b));
    }

    #[test]
    fn basis_tdot_is_row_dot() {
        let b = Basis::from_euler(Vector3::new(0.3, 0.6, -0.2));
        let v = Vector3::new(1.0, 2.0, 3.0);
        let t = b.transposed();
        assert!(real::is_equal_approx(b.tdotx(v), t.x.dot(v)));
        assert!(real::is_equal_approx(b.tdoty(v), t.y.dot(v)));
        assert!(real::is_equal_approx(b.tdotz(v), t.z.dot(v)));
    }

    #[test]
    fn basis_from_quat_scale() {
        let q = Quat::from_axis_angle(Vector3::up(), 0.8);
        let s = Vector3::new(2.0, 0.5, 3.0);
        let b = Basis::from_quat_scale(q, s);
        assert!(b.get_scale().almost_eq(s));
        assert!(b.orthonormalized().almost_eq(Basis::from_quat(q)));
    }

    // ==================== Layout contract ====================

    #[test]
    fn layout_matches_marshalling_contract() {
        assert_eq!(size_of::<Quat>(), 16);
        assert_eq!(offset_of!(Quat, x), 0);
        assert_eq!(offset_of!(Quat, w), 12);

        assert_eq!(size_of::<Basis>(), 36);
        assert_eq!(offset_of!(Basis, x), 0);
        assert_eq!(offset_of!(Basis, y), 12);
        assert_eq!(offset_of!(Basis, z), 24);
    }
}
