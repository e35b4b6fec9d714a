use crate::core::config::EPSILON;
use crate::util::real;
use crate::util::rotation::Basis;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign},
};
use tracing::warn;

/// A 2D vector using 32-bit floating point coordinates.
///
/// Arithmetic operators are element-wise; the scalar variants apply the scalar
/// to every component. There are no guards anywhere: dividing by a zero
/// component or normalising a zero vector produces Inf/NaN per IEEE-754, and
/// callers are responsible for validating preconditions.
///
/// # Examples
///
/// ```
/// use spindle::core::prelude::*;
///
/// let v = Vector2::new(3.0, 4.0);
/// assert_eq!(v.length(), 5.0);
/// assert_eq!(v + Vector2::one(), Vector2::new(4.0, 5.0));
/// ```
#[repr(C)]
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Vector2 {
        Vector2 { x, y }
    }

    #[must_use]
    pub const fn zero() -> Vector2 {
        Vector2 { x: 0.0, y: 0.0 }
    }
    #[must_use]
    pub const fn one() -> Vector2 {
        Vector2 { x: 1.0, y: 1.0 }
    }
    #[must_use]
    pub const fn inf() -> Vector2 {
        Vector2 {
            x: f32::INFINITY,
            y: f32::INFINITY,
        }
    }
    /// Returns a unit vector pointing to the left (negative x-axis).
    #[must_use]
    pub const fn left() -> Vector2 {
        Vector2 { x: -1.0, y: 0.0 }
    }
    /// Returns a unit vector pointing to the right (positive x-axis).
    #[must_use]
    pub const fn right() -> Vector2 {
        Vector2 { x: 1.0, y: 0.0 }
    }
    /// Returns a unit vector pointing up (positive y-axis).
    #[must_use]
    pub const fn up() -> Vector2 {
        Vector2 { x: 0.0, y: 1.0 }
    }
    /// Returns a unit vector pointing down (negative y-axis).
    #[must_use]
    pub const fn down() -> Vector2 {
        Vector2 { x: 0.0, y: -1.0 }
    }

    /// Returns a new vector with the absolute value of each component.
    #[must_use]
    pub fn abs(&self) -> Vector2 {
        Vector2::new(self.x.abs(), self.y.abs())
    }

    /// The angle of the vector in radians, measured from the positive x-axis.
    #[must_use]
    pub fn angle(&self) -> f32 {
        self.y.atan2(self.x)
    }

    /// Signed angle to `to` in radians, in `(-pi, pi]`, computed from the
    /// atan2 of the cross and dot products.
    ///
    /// # Examples
    ///
    /// ```
    /// use spindle::core::prelude::*;
    /// let angle = Vector2::right().angle_to(Vector2::up());
    /// assert!((angle - std::f32::consts::FRAC_PI_2).abs() < EPSILON);
    /// ```
    #[must_use]
    pub fn angle_to(&self, to: Vector2) -> f32 {
        self.cross(to).atan2(self.dot(to))
    }

    /// The angle of the line from `to` towards this point.
    #[must_use]
    pub fn angle_to_point(&self, to: Vector2) -> f32 {
        (*self - to).angle()
    }

    /// Width divided by height when the components are interpreted as a size.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.x / self.y
    }

    /// Bounces off the plane with unit normal `n`. Behaviour is undefined when
    /// `n` is not unit length.
    #[must_use]
    pub fn bounce(&self, n: Vector2) -> Vector2 {
        -self.reflect(n)
    }

    #[must_use]
    pub fn ceil(&self) -> Vector2 {
        Vector2::new(self.x.ceil(), self.y.ceil())
    }

    /// Returns the vector with its length clamped to at most `length`.
    #[must_use]
    pub fn clamped(&self, length: f32) -> Vector2 {
        let l = self.length();
        let mut v = *self;
        if l > 0.0 && length < l {
            v /= l;
            v *= length;
        }
        v
    }

    /// The 2D cross product: the signed area of the parallelogram spanned by
    /// the two vectors. Positive when `with` is counter-clockwise from `self`.
    #[must_use]
    pub fn cross(&self, with: Vector2) -> f32 {
        self.x * with.y - self.y * with.x
    }

    /// Catmull-Rom cubic interpolation between this vector and `b`, with
    /// `pre_a` and `post_b` as the control tangents.
    #[must_use]
    pub fn cubic_interpolate(&self, b: Vector2, pre_a: Vector2, post_b: Vector2, t: f32) -> Vector2 {
        let (p0, p1, p2, p3) = (pre_a, *self, b, post_b);
        let t2 = t * t;
        let t3 = t2 * t;
        ((p1 * 2.0)
            + (-p0 + p2) * t
            + (p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3) * t2
            + (-p0 + p1 * 3.0 - p2 * 3.0 + p3) * t3)
            * 0.5
    }

    /// Unit vector pointing from this point towards `b`.
    #[must_use]
    pub fn direction_to(&self, b: Vector2) -> Vector2 {
        (b - *self).normalized()
    }

    #[must_use]
    pub fn distance_squared_to(&self, to: Vector2) -> f32 {
        (to - *self).length_squared()
    }

    #[must_use]
    pub fn distance_to(&self, to: Vector2) -> f32 {
        (to - *self).length()
    }

    #[must_use]
    pub fn dot(&self, with: Vector2) -> f32 {
        self.x * with.x + self.y * with.y
    }

    #[must_use]
    pub fn floor(&self) -> Vector2 {
        Vector2::new(self.x.floor(), self.y.floor())
    }

    #[must_use]
    pub fn is_normalized(&self) -> bool {
        real::is_equal_approx(self.length_squared(), 1.0)
    }

    #[must_use]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared length; cheaper than [`length`](Vector2::length) when only
    /// comparing distances.
    #[must_use]
    pub fn length_squared(&self) -> f32 {
        self.dot(*self)
    }

    /// Linear interpolation towards `b`, unclamped in `t`.
    #[must_use]
    pub fn linear_interpolate(&self, b: Vector2, t: f32) -> Vector2 {
        *self + (b - *self) * t
    }

    /// Moves towards `to` by at most `delta`, clamping at the target.
    #[must_use]
    pub fn move_toward(&self, to: Vector2, delta: f32) -> Vector2 {
        let vd = to - *self;
        let len = vd.length();
        if len <= delta || len < EPSILON {
            to
        } else {
            *self + vd / len * delta
        }
    }

    /// `self / length()`. There is deliberately no zero-length guard: a zero
    /// vector normalises to NaN components.
    #[must_use]
    pub fn normalized(&self) -> Vector2 {
        *self / self.length()
    }

    /// Projection of this vector onto `b`.
    #[must_use]
    pub fn project(&self, b: Vector2) -> Vector2 {
        b * (self.dot(b) / b.length_squared())
    }

    /// Mirror of this vector about the axis with unit normal `n`:
    /// `2 n (v . n) - v`.
    #[must_use]
    pub fn reflect(&self, n: Vector2) -> Vector2 {
        n * self.dot(n) * 2.0 - *self
    }

    /// Rotates counter-clockwise by `phi` radians.
    ///
    /// # Examples
    ///
    /// ```
    /// use spindle::core::prelude::*;
    /// let v = Vector2::right().rotated(std::f32::consts::FRAC_PI_2);
    /// assert!(v.almost_eq(Vector2::up()));
    /// ```
    #[must_use]
    pub fn rotated(&self, phi: f32) -> Vector2 {
        let (sin, cos) = phi.sin_cos();
        Vector2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    #[must_use]
    pub fn round(&self) -> Vector2 {
        Vector2::new(self.x.round(), self.y.round())
    }

    /// Spherical interpolation towards `b`. Both vectors must be normalized.
    #[must_use]
    pub fn slerp(&self, b: Vector2, t: f32) -> Vector2 {
        self.rotated(self.angle_to(b) * t)
    }

    /// Component of this vector along the plane with unit normal `n`.
    #[must_use]
    pub fn slide(&self, n: Vector2) -> Vector2 {
        *self - n * self.dot(n)
    }

    /// Snaps each component to the nearest multiple of the corresponding
    /// component of `by`.
    #[must_use]
    pub fn snapped(&self, by: Vector2) -> Vector2 {
        Vector2::new(real::stepify(self.x, by.x), real::stepify(self.y, by.y))
    }

    /// Perpendicular vector, rotated 90 degrees clockwise.
    #[must_use]
    pub fn tangent(&self) -> Vector2 {
        Vector2::new(self.y, -self.x)
    }

    /// Approximate equality: the difference has length below
    /// [`EPSILON`](crate::core::config::EPSILON).
    pub fn almost_eq(&self, rhs: Vector2) -> bool {
        (*self - rhs).length() < EPSILON
    }

    /// Deterministic ordering by squared length; falls back to
    /// [`total_cmp`](f32::total_cmp) (with a warning) when NaN components make
    /// [`partial_cmp`](f32::partial_cmp) fail.
    #[must_use]
    pub fn cmp_by_length(&self, other: &Vector2) -> Ordering {
        let self_len = self.length_squared();
        let other_len = other.length_squared();
        self_len.partial_cmp(&other_len).unwrap_or_else(|| {
            warn!(
                "cmp_by_length(): partial_cmp() failed: {} vs. {}",
                self, other
            );
            self_len.total_cmp(&other_len)
        })
    }
}

impl Zero for Vector2 {
    fn zero() -> Self {
        Vector2::zero()
    }

    fn is_zero(&self) -> bool {
        *self == Vector2::zero()
    }
}

impl From<[f32; 2]> for Vector2 {
    fn from(value: [f32; 2]) -> Self {
        Vector2::new(value[0], value[1])
    }
}
impl From<Vector2> for [f32; 2] {
    fn from(value: Vector2) -> Self {
        [value.x, value.y]
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(p) = f.precision() {
            write!(f, "({0:.2$}, {1:.2$})", self.x, self.y, p)
        } else {
            write!(f, "({}, {})", self.x, self.y)
        }
    }
}

impl Neg for Vector2 {
    type Output = Vector2;
    fn neg(self) -> Self::Output {
        Vector2::new(-self.x, -self.y)
    }
}

impl Add<Vector2> for Vector2 {
    type Output = Vector2;
    fn add(self, rhs: Vector2) -> Self::Output {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}
impl AddAssign<Vector2> for Vector2 {
    fn add_assign(&mut self, rhs: Vector2) {
        *self = *self + rhs;
    }
}
impl Sub<Vector2> for Vector2 {
    type Output = Vector2;
    fn sub(self, rhs: Vector2) -> Self::Output {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}
impl SubAssign<Vector2> for Vector2 {
    fn sub_assign(&mut self, rhs: Vector2) {
        *self = *self - rhs;
    }
}
impl Mul<Vector2> for Vector2 {
    type Output = Vector2;
    fn mul(self, rhs: Vector2) -> Self::Output {
        Vector2::new(self.x * rhs.x, self.y * rhs.y)
    }
}
impl MulAssign<Vector2> for Vector2 {
    fn mul_assign(&mut self, rhs: Vector2) {
        *self = *self * rhs;
    }
}
impl Div<Vector2> for Vector2 {
    type Output = Vector2;
    fn div(self, rhs: Vector2) -> Self::Output {
        Vector2::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl Add<f32> for Vector2 {
    type Output = Vector2;
    fn add(self, rhs: f32) -> Self::Output {
        Vector2::new(self.x + rhs, self.y + rhs)
    }
}
impl Sub<f32> for Vector2 {
    type Output = Vector2;
    fn sub(self, rhs: f32) -> Self::Output {
        Vector2::new(self.x - rhs, self.y - rhs)
    }
}
impl Mul<f32> for Vector2 {
    type Output = Vector2;
    fn mul(self, rhs: f32) -> Self::Output {
        Vector2::new(self.x * rhs, self.y * rhs)
    }
}
impl Mul<Vector2> for f32 {
    type Output = Vector2;
    fn mul(self, rhs: Vector2) -> Self::Output {
        rhs * self
    }
}
impl MulAssign<f32> for Vector2 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}
impl Div<f32> for Vector2 {
    type Output = Vector2;
    fn div(self, rhs: f32) -> Self::Output {
        Vector2::new(self.x / rhs, self.y / rhs)
    }
}
impl DivAssign<f32> for Vector2 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

/// Named axis of a [`Vector3`] or box; the tie-break order everywhere is
/// x before y before z.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    bincode::Encode,
    bincode::Decode,
)]
pub enum Axis {
    #[default]
    X,
    Y,
    Z,
}

impl Axis {
    /// The unit vector along this axis.
    #[must_use]
    pub const fn unit(self) -> Vector3 {
        match self {
            Axis::X => Vector3::right(),
            Axis::Y => Vector3::up(),
            Axis::Z => Vector3::back(),
        }
    }
}

/// A 3D vector using 32-bit floating point coordinates.
///
/// Follows the same conventions as [`Vector2`]: element-wise arithmetic,
/// no guards, NaN on zero-length normalisation. The coordinate system is
/// right-handed with `right().cross(up()) == back()` and
/// `forward() == (0, 0, -1)`.
#[repr(C)]
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Vector3 {
        Vector3 { x, y, z }
    }

    #[must_use]
    pub const fn zero() -> Vector3 {
        Vector3::new(0.0, 0.0, 0.0)
    }
    #[must_use]
    pub const fn one() -> Vector3 {
        Vector3::new(1.0, 1.0, 1.0)
    }
    #[must_use]
    pub const fn inf() -> Vector3 {
        Vector3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY)
    }
    #[must_use]
    pub const fn left() -> Vector3 {
        Vector3::new(-1.0, 0.0, 0.0)
    }
    #[must_use]
    pub const fn right() -> Vector3 {
        Vector3::new(1.0, 0.0, 0.0)
    }
    #[must_use]
    pub const fn up() -> Vector3 {
        Vector3::new(0.0, 1.0, 0.0)
    }
    #[must_use]
    pub const fn down() -> Vector3 {
        Vector3::new(0.0, -1.0, 0.0)
    }
    #[must_use]
    pub const fn forward() -> Vector3 {
        Vector3::new(0.0, 0.0, -1.0)
    }
    #[must_use]
    pub const fn back() -> Vector3 {
        Vector3::new(0.0, 0.0, 1.0)
    }

    #[must_use]
    pub fn abs(&self) -> Vector3 {
        Vector3::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Unsigned angle to `to` in radians, in `[0, pi]`.
    #[must_use]
    pub fn angle_to(&self, to: Vector3) -> f32 {
        self.cross(to).length().atan2(self.dot(to))
    }

    /// Bounces off the plane with unit normal `n`.
    #[must_use]
    pub fn bounce(&self, n: Vector3) -> Vector3 {
        -self.reflect(n)
    }

    #[must_use]
    pub fn ceil(&self) -> Vector3 {
        Vector3::new(self.x.ceil(), self.y.ceil(), self.z.ceil())
    }

    /// Right-handed cross product.
    ///
    /// # Examples
    ///
    /// ```
    /// use spindle::core::prelude::*;
    /// assert_eq!(Vector3::right().cross(Vector3::up()), Vector3::back());
    /// ```
    #[must_use]
    pub fn cross(&self, b: Vector3) -> Vector3 {
        Vector3::new(
            self.y * b.z - self.z * b.y,
            self.z * b.x - self.x * b.z,
            self.x * b.y - self.y * b.x,
        )
    }

    /// Catmull-Rom cubic interpolation; the cubic basis is identical to
    /// [`Vector2::cubic_interpolate`].
    #[must_use]
    pub fn cubic_interpolate(&self, b: Vector3, pre_a: Vector3, post_b: Vector3, t: f32) -> Vector3 {
        let (p0, p1, p2, p3) = (pre_a, *self, b, post_b);
        let t2 = t * t;
        let t3 = t2 * t;
        ((p1 * 2.0)
            + (-p0 + p2) * t
            + (p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3) * t2
            + (-p0 + p1 * 3.0 - p2 * 3.0 + p3) * t3)
            * 0.5
    }

    #[must_use]
    pub fn direction_to(&self, b: Vector3) -> Vector3 {
        (b - *self).normalized()
    }

    #[must_use]
    pub fn distance_squared_to(&self, b: Vector3) -> f32 {
        (b - *self).length_squared()
    }

    #[must_use]
    pub fn distance_to(&self, b: Vector3) -> f32 {
        (b - *self).length()
    }

    #[must_use]
    pub fn dot(&self, b: Vector3) -> f32 {
        self.x * b.x + self.y * b.y + self.z * b.z
    }

    #[must_use]
    pub fn floor(&self) -> Vector3 {
        Vector3::new(self.x.floor(), self.y.floor(), self.z.floor())
    }

    /// Component-wise reciprocal. Zero components yield Inf.
    #[must_use]
    pub fn inverse(&self) -> Vector3 {
        Vector3::new(1.0 / self.x, 1.0 / self.y, 1.0 / self.z)
    }

    #[must_use]
    pub fn is_normalized(&self) -> bool {
        real::is_equal_approx(self.length_squared(), 1.0)
    }

    #[must_use]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    #[must_use]
    pub fn length_squared(&self) -> f32 {
        self.dot(*self)
    }

    #[must_use]
    pub fn linear_interpolate(&self, b: Vector3, t: f32) -> Vector3 {
        *self + (b - *self) * t
    }

    /// The axis holding the smallest component; ties break x before y before z.
    #[must_use]
    pub fn min_axis(&self) -> Axis {
        if self.x <= self.y {
            if self.x <= self.z {
                Axis::X
            } else {
                Axis::Z
            }
        } else if self.y <= self.z {
            Axis::Y
        } else {
            Axis::Z
        }
    }

    /// The axis holding the largest component; ties break x before y before z.
    #[must_use]
    pub fn max_axis(&self) -> Axis {
        if self.x < self.y {
            if self.y < self.z {
                Axis::Z
            } else {
                Axis::Y
            }
        } else if self.x < self.z {
            Axis::Z
        } else {
            Axis::X
        }
    }

    #[must_use]
    pub fn move_toward(&self, to: Vector3, delta: f32) -> Vector3 {
        let vd = to - *self;
        let len = vd.length();
        if len <= delta || len < EPSILON {
            to
        } else {
            *self + vd / len * delta
        }
    }

    /// `self / length()`; NaN components when the vector is zero (deliberately
    /// unguarded).
    #[must_use]
    pub fn normalized(&self) -> Vector3 {
        *self / self.length()
    }

    /// Outer product with `b`, as a [`Basis`] whose entry at row `i`,
    /// column `j` is `self[i] * b[j]`.
    #[must_use]
    pub fn outer(&self, b: Vector3) -> Basis {
        Basis::new(*self * b.x, *self * b.y, *self * b.z)
    }

    #[must_use]
    pub fn project(&self, b: Vector3) -> Vector3 {
        b * (self.dot(b) / b.length_squared())
    }

    /// Mirror about the plane with unit normal `n`: `2 n (v . n) - v`.
    #[must_use]
    pub fn reflect(&self, n: Vector3) -> Vector3 {
        n * self.dot(n) * 2.0 - *self
    }

    /// Rodrigues rotation about the unit-length `axis` by `phi` radians.
    #[must_use]
    pub fn rotated(&self, axis: Vector3, phi: f32) -> Vector3 {
        Basis::from_axis_angle(axis, phi).xform(*self)
    }

    #[must_use]
    pub fn round(&self) -> Vector3 {
        Vector3::new(self.x.round(), self.y.round(), self.z.round())
    }

    /// The sign of each component, with zero treated as positive.
    #[must_use]
    pub fn sign(&self) -> Vector3 {
        Vector3::new(self.x.signum(), self.y.signum(), self.z.signum())
    }

    /// Spherical interpolation towards `b`: the direction follows the
    /// great-circle arc while the magnitude interpolates linearly. Degenerates
    /// to [`linear_interpolate`](Vector3::linear_interpolate) when the inputs
    /// are zero or (anti)parallel.
    #[must_use]
    pub fn slerp(&self, b: Vector3, t: f32) -> Vector3 {
        let start_length_sq = self.length_squared();
        let end_length_sq = b.length_squared();
        if start_length_sq == 0.0 || end_length_sq == 0.0 {
            return self.linear_interpolate(b, t);
        }
        let axis = self.cross(b);
        if axis.length_squared() == 0.0 {
            return self.linear_interpolate(b, t);
        }
        let start_length = start_length_sq.sqrt();
        let result_length = real::lerp(start_length, end_length_sq.sqrt(), t);
        let angle = self.angle_to(b);
        self.rotated(axis.normalized(), angle * t) * (result_length / start_length)
    }

    #[must_use]
    pub fn slide(&self, n: Vector3) -> Vector3 {
        *self - n * self.dot(n)
    }

    #[must_use]
    pub fn snapped(&self, by: Vector3) -> Vector3 {
        Vector3::new(
            real::stepify(self.x, by.x),
            real::stepify(self.y, by.y),
            real::stepify(self.z, by.z),
        )
    }

    /// A [`Basis`] with this vector on the diagonal and zeroes elsewhere.
    #[must_use]
    pub fn to_diagonal_matrix(&self) -> Basis {
        Basis::from_scale(*self)
    }

    pub fn almost_eq(&self, rhs: Vector3) -> bool {
        (*self - rhs).length() < EPSILON
    }

    /// Deterministic ordering by squared length, with a logged
    /// [`total_cmp`](f32::total_cmp) fallback for NaN inputs.
    #[must_use]
    pub fn cmp_by_length(&self, other: &Vector3) -> Ordering {
        let self_len = self.length_squared();
        let other_len = other.length_squared();
        self_len.partial_cmp(&other_len).unwrap_or_else(|| {
            warn!(
                "cmp_by_length(): partial_cmp() failed: {} vs. {}",
                self, other
            );
            self_len.total_cmp(&other_len)
        })
    }
}

impl Zero for Vector3 {
    fn zero() -> Self {
        Vector3::zero()
    }

    fn is_zero(&self) -> bool {
        *self == Vector3::zero()
    }
}

impl Index<Axis> for Vector3 {
    type Output = f32;

    fn index(&self, axis: Axis) -> &f32 {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from(value: [f32; 3]) -> Self {
        Vector3::new(value[0], value[1], value[2])
    }
}
impl From<Vector3> for [f32; 3] {
    fn from(value: Vector3) -> Self {
        [value.x, value.y, value.z]
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(p) = f.precision() {
            write!(f, "({0:.3$}, {1:.3$}, {2:.3$})", self.x, self.y, self.z, p)
        } else {
            write!(f, "({}, {}, {})", self.x, self.y, self.z)
        }
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Self::Output {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl Add<Vector3> for Vector3 {
    type Output = Vector3;
    fn add(self, rhs: Vector3) -> Self::Output {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}
impl AddAssign<Vector3> for Vector3 {
    fn add_assign(&mut self, rhs: Vector3) {
        *self = *self + rhs;
    }
}
impl Sub<Vector3> for Vector3 {
    type Output = Vector3;
    fn sub(self, rhs: Vector3) -> Self::Output {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}
impl SubAssign<Vector3> for Vector3 {
    fn sub_assign(&mut self, rhs: Vector3) {
        *self = *self - rhs;
    }
}
impl Mul<Vector3> for Vector3 {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Self::Output {
        Vector3::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}
impl MulAssign<Vector3> for Vector3 {
    fn mul_assign(&mut self, rhs: Vector3) {
        *self = *self * rhs;
    }
}
impl Div<Vector3> for Vector3 {
    type Output = Vector3;
    fn div(self, rhs: Vector3) -> Self::Output {
        Vector3::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl Add<f32> for Vector3 {
    type Output = Vector3;
    fn add(self, rhs: f32) -> Self::Output {
        Vector3::new(self.x + rhs, self.y + rhs, self.z + rhs)
    }
}
impl Sub<f32> for Vector3 {
    type Output = Vector3;
    fn sub(self, rhs: f32) -> Self::Output {
        Vector3::new(self.x - rhs, self.y - rhs, self.z - rhs)
    }
}
impl Mul<f32> for Vector3 {
    type Output = Vector3;
    fn mul(self, rhs: f32) -> Self::Output {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}
impl Mul<Vector3> for f32 {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Self::Output {
        rhs * self
    }
}
impl MulAssign<f32> for Vector3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}
impl Div<f32> for Vector3 {
    type Output = Vector3;
    fn div(self, rhs: f32) -> Self::Output {
        Vector3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}
impl DivAssign<f32> for Vector3 {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}
