use crate::util::bounds::{Aabb, Plane, Rect2};
use crate::util::linalg::{Vector2, Vector3};
use crate::util::rotation::Basis;
use num_traits::One;
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    fmt::Formatter,
    ops::{Mul, MulAssign},
};

/// A 2D affine transform: a 2x2 basis stored as the column vectors `x` and
/// `y`, plus a translation. `*` composes transforms so that
/// `(a * b).xform(v) == a.xform(b.xform(v))`.
#[repr(C)]
#[derive(
    Copy, Clone, Debug, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
pub struct Transform2D {
    pub x: Vector2,
    pub y: Vector2,
    pub origin: Vector2,
}

impl Transform2D {
    #[must_use]
    pub const fn new(x: Vector2, y: Vector2, origin: Vector2) -> Transform2D {
        Transform2D { x, y, origin }
    }

    #[must_use]
    pub const fn identity() -> Transform2D {
        Transform2D::new(Vector2::right(), Vector2::up(), Vector2::zero())
    }

    /// Rotation by `rot` radians about the origin, then translation to
    /// `origin`.
    #[must_use]
    pub fn from_rotation_origin(rot: f32, origin: Vector2) -> Transform2D {
        let (sin, cos) = rot.sin_cos();
        Transform2D::new(Vector2::new(cos, sin), Vector2::new(-sin, cos), origin)
    }

    #[must_use]
    pub fn basis_determinant(&self) -> f32 {
        self.x.x * self.y.y - self.x.y * self.y.x
    }

    /// The rotation angle of the basis, ignoring scale.
    #[must_use]
    pub fn get_rotation(&self) -> f32 {
        self.x.y.atan2(self.x.x)
    }

    /// Column lengths; the y component is negated when the basis is
    /// reflected.
    #[must_use]
    pub fn get_scale(&self) -> Vector2 {
        let det_sign = if self.basis_determinant() > 0.0 { 1.0 } else { -1.0 };
        Vector2::new(self.x.length(), det_sign * self.y.length())
    }

    /// Applies only the basis (rotation, scale, shear), ignoring translation.
    #[must_use]
    pub fn basis_xform(&self, v: Vector2) -> Vector2 {
        self.x * v.x + self.y * v.y
    }

    /// Transposed basis product; the inverse of
    /// [`basis_xform`](Transform2D::basis_xform) when the basis is
    /// orthonormal.
    #[must_use]
    pub fn basis_xform_inv(&self, v: Vector2) -> Vector2 {
        Vector2::new(self.x.dot(v), self.y.dot(v))
    }

    #[must_use]
    pub fn xform(&self, v: Vector2) -> Vector2 {
        self.basis_xform(v) + self.origin
    }

    #[must_use]
    pub fn xform_inv(&self, v: Vector2) -> Vector2 {
        self.basis_xform_inv(v - self.origin)
    }

    /// The bounding rectangle of the four transformed corners.
    #[must_use]
    pub fn xform_rect2(&self, rect: Rect2) -> Rect2 {
        let x = self.x * rect.size.x;
        let y = self.y * rect.size.y;
        let pos = self.xform(rect.position);
        Rect2::new(pos, Vector2::zero())
            .expand(pos + x)
            .expand(pos + y)
            .expand(pos + x + y)
    }

    /// The bounding rectangle of the four corners pulled through the inverse
    /// transform.
    #[must_use]
    pub fn xform_inv_rect2(&self, rect: Rect2) -> Rect2 {
        let ends = [
            self.xform_inv(rect.position),
            self.xform_inv(rect.position + Vector2::new(0.0, rect.size.y)),
            self.xform_inv(rect.position + rect.size),
            self.xform_inv(rect.position + Vector2::new(rect.size.x, 0.0)),
        ];
        Rect2::new(ends[0], Vector2::zero())
            .expand(ends[1])
            .expand(ends[2])
            .expand(ends[3])
    }

    /// Fast inverse for a rotation-plus-translation transform; use
    /// [`affine_inverse`](Transform2D::affine_inverse) when the basis carries
    /// scale or shear.
    #[must_use]
    pub fn inverse(&self) -> Transform2D {
        let mut inv = *self;
        std::mem::swap(&mut inv.x.y, &mut inv.y.x);
        inv.origin = inv.basis_xform(-inv.origin);
        inv
    }

    /// Full inverse via the adjugate; unguarded against a singular basis.
    #[must_use]
    pub fn affine_inverse(&self) -> Transform2D {
        let det = self.basis_determinant();
        let idet = 1.0 / det;
        let mut inv = *self;
        std::mem::swap(&mut inv.x.x, &mut inv.y.y);
        inv.x *= Vector2::new(idet, -idet);
        inv.y *= Vector2::new(-idet, idet);
        inv.origin = inv.basis_xform(-inv.origin);
        inv
    }

    /// Gram-Schmidt orthonormalisation of the two columns.
    #[must_use]
    pub fn orthonormalized(&self) -> Transform2D {
        let x = self.x.normalized();
        let y = (self.y - x * x.dot(self.y)).normalized();
        Transform2D::new(x, y, self.origin)
    }

    /// A global rotation applied after this transform.
    #[must_use]
    pub fn rotated(&self, phi: f32) -> Transform2D {
        Transform2D::from_rotation_origin(phi, Vector2::zero()) * *self
    }

    /// A global scale applied after this transform.
    #[must_use]
    pub fn scaled(&self, scale: Vector2) -> Transform2D {
        Transform2D::new(self.x * scale, self.y * scale, self.origin * scale)
    }

    fn scaled_basis(&self, scale: Vector2) -> Transform2D {
        Transform2D::new(self.x * scale, self.y * scale, self.origin)
    }

    /// A local translation: `offset` is interpreted in this transform's own
    /// coordinate system.
    #[must_use]
    pub fn translated(&self, offset: Vector2) -> Transform2D {
        Transform2D::new(self.x, self.y, self.origin + self.basis_xform(offset))
    }

    /// Interpolates rotation (along the shorter arc), scale and origin
    /// independently.
    #[must_use]
    pub fn interpolate_with(&self, transform: Transform2D, t: f32) -> Transform2D {
        let r1 = self.get_rotation();
        let r2 = transform.get_rotation();
        let s1 = self.get_scale();
        let s2 = transform.get_scale();

        let v1 = Vector2::new(r1.cos(), r1.sin());
        let v2 = Vector2::new(r2.cos(), r2.sin());
        let dot = v1.dot(v2).clamp(-1.0, 1.0);
        let v = if dot > 0.9995 {
            // Near-parallel: nlerp avoids the unstable acos.
            v1.linear_interpolate(v2, t).normalized()
        } else {
            let angle = t * dot.acos();
            let v3 = (v2 - v1 * dot).normalized();
            v1 * angle.cos() + v3 * angle.sin()
        };

        Transform2D::from_rotation_origin(v.angle(), self.origin.linear_interpolate(transform.origin, t))
            .scaled_basis(s1.linear_interpolate(s2, t))
    }

    pub fn almost_eq(&self, rhs: Transform2D) -> bool {
        self.x.almost_eq(rhs.x) && self.y.almost_eq(rhs.y) && self.origin.almost_eq(rhs.origin)
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Transform2D::identity()
    }
}

impl One for Transform2D {
    fn one() -> Self {
        Transform2D::identity()
    }
}

impl Mul<Transform2D> for Transform2D {
    type Output = Transform2D;
    fn mul(self, rhs: Transform2D) -> Self::Output {
        Transform2D::new(
            self.basis_xform(rhs.x),
            self.basis_xform(rhs.y),
            self.xform(rhs.origin),
        )
    }
}
impl MulAssign<Transform2D> for Transform2D {
    fn mul_assign(&mut self, rhs: Transform2D) {
        *self = *self * rhs;
    }
}

impl fmt::Display for Transform2D {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[x: {}, y: {}, o: {}]", self.x, self.y, self.origin)
    }
}

/// A 3D affine transform: a [`Basis`] plus a translation.
///
/// # Examples
///
/// ```
/// use spindle::core::prelude::*;
///
/// let t = Transform3D::identity().translated(Vector3::new(1.0, 2.0, 3.0));
/// assert_eq!(t.xform(Vector3::zero()), Vector3::new(1.0, 2.0, 3.0));
/// ```
#[repr(C)]
#[derive(
    Copy, Clone, Debug, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
pub struct Transform3D {
    pub basis: Basis,
    pub origin: Vector3,
}

impl Transform3D {
    #[must_use]
    pub const fn new(basis: Basis, origin: Vector3) -> Transform3D {
        Transform3D { basis, origin }
    }

    #[must_use]
    pub const fn identity() -> Transform3D {
        Transform3D::new(Basis::identity(), Vector3::zero())
    }

    #[must_use]
    pub fn xform(&self, v: Vector3) -> Vector3 {
        self.basis.xform(v) + self.origin
    }

    /// Transposed-basis inverse transform; only a true inverse when the basis
    /// is orthonormal.
    #[must_use]
    pub fn xform_inv(&self, v: Vector3) -> Vector3 {
        self.basis.xform_inv(v - self.origin)
    }

    /// Fast inverse for a rotation-plus-translation transform; use
    /// [`affine_inverse`](Transform3D::affine_inverse) when the basis carries
    /// scale.
    #[must_use]
    pub fn inverse(&self) -> Transform3D {
        let basis = self.basis.transposed();
        let origin = basis.xform(-self.origin);
        Transform3D::new(basis, origin)
    }

    /// Full inverse via the basis inverse; unguarded against a singular
    /// basis.
    #[must_use]
    pub fn affine_inverse(&self) -> Transform3D {
        let basis = self.basis.inverse();
        let origin = basis.xform(-self.origin);
        Transform3D::new(basis, origin)
    }

    #[must_use]
    pub fn orthonormalized(&self) -> Transform3D {
        Transform3D::new(self.basis.orthonormalized(), self.origin)
    }

    /// Reorients the basis so -z points from the origin towards `target`,
    /// with `up` fixing the roll. The origin is unchanged. Degenerate when
    /// `up` is parallel to the view direction.
    #[must_use]
    pub fn looking_at(&self, target: Vector3, up: Vector3) -> Transform3D {
        let v_z = (self.origin - target).normalized();
        let v_x = up.cross(v_z).normalized();
        let v_y = v_z.cross(v_x);
        Transform3D::new(Basis::new(v_x, v_y, v_z), self.origin)
    }

    /// A global rotation applied after this transform.
    #[must_use]
    pub fn rotated(&self, axis: Vector3, phi: f32) -> Transform3D {
        Transform3D::new(Basis::from_axis_angle(axis, phi), Vector3::zero()) * *self
    }

    /// A global scale applied after this transform.
    #[must_use]
    pub fn scaled(&self, scale: Vector3) -> Transform3D {
        Transform3D::new(self.basis.scaled(scale), self.origin * scale)
    }

    /// A local translation: `offset` is interpreted in this transform's own
    /// coordinate system.
    #[must_use]
    pub fn translated(&self, offset: Vector3) -> Transform3D {
        Transform3D::new(self.basis, self.origin + self.basis.xform(offset))
    }

    /// Interpolates rotation (spherically), scale and origin independently,
    /// so a half-turn sweeps through the arc rather than through the flat
    /// average.
    #[must_use]
    pub fn interpolate_with(&self, transform: Transform3D, t: f32) -> Transform3D {
        let src_scale = self.basis.get_scale();
        let src_rot = self.basis.orthonormalized().get_rotation_quat();
        let dst_scale = transform.basis.get_scale();
        let dst_rot = transform.basis.orthonormalized().get_rotation_quat();

        Transform3D::new(
            Basis::from_quat_scale(
                src_rot.slerp(dst_rot, t).normalized(),
                src_scale.linear_interpolate(dst_scale, t),
            ),
            self.origin.linear_interpolate(transform.origin, t),
        )
    }

    /// The plane through the transformed points of `plane`; the normal is
    /// carried by the inverse transpose so it stays perpendicular under
    /// non-uniform scale.
    #[must_use]
    pub fn xform_plane(&self, plane: Plane) -> Plane {
        let point = self.xform(plane.normal * plane.d);
        let normal = self
            .basis
            .inverse()
            .transposed()
            .xform(plane.normal)
            .normalized();
        Plane::new(normal, normal.dot(point))
    }

    /// [`xform_plane`](Transform3D::xform_plane) for the inverse transform.
    #[must_use]
    pub fn xform_inv_plane(&self, plane: Plane) -> Plane {
        let point = self.xform_inv(plane.normal * plane.d);
        let normal = self.basis.xform_inv(plane.normal).normalized();
        Plane::new(normal, normal.dot(point))
    }

    /// The axis-aligned bounding box of the 8 transformed corners.
    #[must_use]
    pub fn xform_aabb(&self, aabb: Aabb) -> Aabb {
        let x = self.basis.x * aabb.size.x;
        let y = self.basis.y * aabb.size.y;
        let z = self.basis.z * aabb.size.z;
        let pos = self.xform(aabb.position);
        Aabb::new(pos, Vector3::zero())
            .expand(pos + x)
            .expand(pos + y)
            .expand(pos + z)
            .expand(pos + x + y)
            .expand(pos + x + z)
            .expand(pos + y + z)
            .expand(pos + x + y + z)
    }

    /// The bounding box of the 8 corners pulled through the inverse
    /// transform.
    #[must_use]
    pub fn xform_inv_aabb(&self, aabb: Aabb) -> Aabb {
        let mut out = Aabb::new(self.xform_inv(aabb.get_endpoint(0)), Vector3::zero());
        for idx in 1..8 {
            out = out.expand(self.xform_inv(aabb.get_endpoint(idx)));
        }
        out
    }

    pub fn almost_eq(&self, rhs: Transform3D) -> bool {
        self.basis.almost_eq(rhs.basis) && self.origin.almost_eq(rhs.origin)
    }
}

impl Default for Transform3D {
    fn default() -> Self {
        Transform3D::identity()
    }
}

impl One for Transform3D {
    fn one() -> Self {
        Transform3D::identity()
    }
}

impl Mul<Transform3D> for Transform3D {
    type Output = Transform3D;
    fn mul(self, rhs: Transform3D) -> Self::Output {
        Transform3D::new(self.basis * rhs.basis, self.xform(rhs.origin))
    }
}
impl MulAssign<Transform3D> for Transform3D {
    fn mul_assign(&mut self, rhs: Transform3D) {
        *self = *self * rhs;
    }
}

impl fmt::Display for Transform3D {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[basis: {}, o: {}]", self.basis, self.origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::EPSILON;
    use crate::util::real;
    use std::f32::consts::FRAC_PI_2;
    use std::mem::{offset_of, size_of};

    // ==================== Transform2D ====================

    #[test]
    fn transform2d_identity() {
        let t = Transform2D::identity();
        assert_eq!(t, Transform2D::default());
        assert_eq!(t, Transform2D::one());
        let v = Vector2::new(3.0, -2.0);
        assert_eq!(t.xform(v), v);
        assert_eq!(t.xform_inv(v), v);
    }

    #[test]
    fn transform2d_rotation_origin() {
        let t = Transform2D::from_rotation_origin(FRAC_PI_2, Vector2::new(1.0, 1.0));
        assert!(t.xform(Vector2::right()).almost_eq(Vector2::new(1.0, 2.0)));
        assert!(real::is_equal_approx(t.get_rotation(), FRAC_PI_2));
        assert!(t.get_scale().almost_eq(Vector2::one()));
        assert!(t.xform_inv(t.xform(Vector2::new(0.3, 0.7))).almost_eq(Vector2::new(0.3, 0.7)));
    }

    #[test]
    fn transform2d_mul_matches_sequential_xform() {
        let a = Transform2D::from_rotation_origin(0.6, Vector2::new(2.0, 0.0));
        let b = Transform2D::from_rotation_origin(-1.1, Vector2::new(0.0, 3.0));
        let v = Vector2::new(1.0, 2.0);
        assert!((a * b).xform(v).almost_eq(a.xform(b.xform(v))));
        // Composition is associative.
        assert!(((a * b) * a).almost_eq(a * (b * a)));
    }

    #[test]
    fn transform2d_inverses() {
        let rigid = Transform2D::from_rotation_origin(0.8, Vector2::new(5.0, -2.0));
        let v = Vector2::new(1.5, 2.5);
        assert!(rigid.inverse().xform(rigid.xform(v)).almost_eq(v));
        assert!((rigid * rigid.inverse()).almost_eq(Transform2D::identity()));

        // With scale, only the affine inverse works.
        let scaled = rigid.scaled(Vector2::new(2.0, 0.5));
        assert!(scaled.affine_inverse().xform(scaled.xform(v)).almost_eq(v));
        assert!((scaled * scaled.affine_inverse()).almost_eq(Transform2D::identity()));
    }

    #[test]
    fn transform2d_scale_extraction() {
        // Uniform scale commutes with the rotation, so get_scale() recovers it
        // exactly; non-uniform global scale would shear the decomposition.
        let t = Transform2D::from_rotation_origin(0.4, Vector2::zero()).scaled(Vector2::one() * 3.0);
        assert!(t.get_scale().almost_eq(Vector2::new(3.0, 3.0)));
        assert!(real::is_equal_approx(t.get_rotation(), 0.4));
        // Reflection shows up as a negative y scale.
        let mirrored = Transform2D::new(Vector2::right(), Vector2::down(), Vector2::zero());
        assert!(mirrored.get_scale().almost_eq(Vector2::new(1.0, -1.0)));
    }

    #[test]
    fn transform2d_translated_is_local() {
        let t = Transform2D::from_rotation_origin(FRAC_PI_2, Vector2::zero());
        // A local +x offset moves along the rotated x axis, i.e. global +y.
        let moved = t.translated(Vector2::right());
        assert!(moved.origin.almost_eq(Vector2::up()));
    }

    #[test]
    fn transform2d_orthonormalized() {
        let skewed = Transform2D::new(
            Vector2::new(2.0, 0.1),
            Vector2::new(0.5, 3.0),
            Vector2::new(1.0, 1.0),
        );
        let ortho = skewed.orthonormalized();
        assert!(real::is_equal_approx(ortho.x.length(), 1.0));
        assert!(real::is_equal_approx(ortho.y.length(), 1.0));
        assert!(real::is_zero_approx(ortho.x.dot(ortho.y)));
        assert_eq!(ortho.origin, skewed.origin);
    }

    #[test]
    fn transform2d_interpolate_with() {
        let a = Transform2D::from_rotation_origin(0.0, Vector2::zero());
        let b = Transform2D::from_rotation_origin(FRAC_PI_2, Vector2::new(4.0, 0.0));
        assert!(a.interpolate_with(b, 0.0).almost_eq(a));
        assert!(a.interpolate_with(b, 1.0).almost_eq(b));
        let mid = a.interpolate_with(b, 0.5);
        assert!(real::is_equal_approx(mid.get_rotation(), FRAC_PI_2 / 2.0));
        assert!(mid.origin.almost_eq(Vector2::new(2.0, 0.0)));
    }

    #[test]
    fn transform2d_xform_rect2() {
        let t = Transform2D::from_rotation_origin(FRAC_PI_2, Vector2::zero());
        let r = t.xform_rect2(Rect2::from_bounds(0.0, 0.0, 2.0, 1.0));
        // A quarter turn maps the 2x1 rectangle onto [-1, 0] x [0, 2].
        assert!(r.almost_eq(Rect2::from_bounds(-1.0, 0.0, 1.0, 2.0)));
        let back = t.xform_inv_rect2(r);
        assert!(back.almost_eq(Rect2::from_bounds(0.0, 0.0, 2.0, 1.0)));
    }

    // ==================== Transform3D ====================

    #[test]
    fn transform3d_identity_and_mul() {
        let t = Transform3D::identity();
        assert_eq!(t, Transform3D::default());
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(t.xform(v), v);

        let a = Transform3D::new(
            Basis::from_axis_angle(Vector3::up(), 0.7),
            Vector3::new(1.0, 0.0, 0.0),
        );
        let b = Transform3D::new(
            Basis::from_axis_angle(Vector3::right(), -0.4),
            Vector3::new(0.0, 2.0, 0.0),
        );
        assert!((a * b).xform(v).almost_eq(a.xform(b.xform(v))));
    }

    #[test]
    fn transform3d_inverses() {
        let rigid = Transform3D::new(
            Basis::from_euler(Vector3::new(0.3, -0.5, 0.2)),
            Vector3::new(1.0, -2.0, 3.0),
        );
        let v = Vector3::new(0.5, 1.5, -2.5);
        assert!(rigid.inverse().xform(rigid.xform(v)).almost_eq(v));
        assert!(rigid.xform_inv(rigid.xform(v)).almost_eq(v));

        let scaled = rigid.scaled(Vector3::new(2.0, 3.0, 0.5));
        assert!(scaled.affine_inverse().xform(scaled.xform(v)).almost_eq(v));
        assert!((scaled * scaled.affine_inverse()).almost_eq(Transform3D::identity()));
    }

    #[test]
    fn transform3d_translated_rotated_scaled() {
        let t = Transform3D::identity()
            .rotated(Vector3::up(), FRAC_PI_2)
            .translated(Vector3::right());
        // The local +x offset lands on the rotated axis, i.e. -z.
        assert!(t.origin.almost_eq(Vector3::forward()));

        let s = Transform3D::identity()
            .translated(Vector3::one())
            .scaled(Vector3::new(2.0, 3.0, 4.0));
        assert!(s.origin.almost_eq(Vector3::new(2.0, 3.0, 4.0)));
        assert!(s.xform(Vector3::one()).almost_eq(Vector3::new(4.0, 6.0, 8.0)));
    }

    #[test]
    fn transform3d_looking_at() {
        let t = Transform3D::identity().looking_at(Vector3::forward(), Vector3::up());
        assert!(t.basis.almost_eq(Basis::identity()));

        // Looking along +x: -z of the new basis points at the target.
        let t = Transform3D::identity().looking_at(Vector3::right(), Vector3::up());
        assert!(t.basis.xform(Vector3::forward()).almost_eq(Vector3::right()));
        assert!(t.basis.xform(Vector3::up()).almost_eq(Vector3::up()));
        assert!(real::is_equal_approx(t.basis.determinant(), 1.0));
        assert_eq!(t.origin, Vector3::zero());
    }

    #[test]
    fn transform3d_interpolate_with() {
        let a = Transform3D::identity();
        let b = Transform3D::new(
            Basis::from_axis_angle(Vector3::up(), FRAC_PI_2),
            Vector3::new(10.0, 0.0, 0.0),
        );
        assert!(a.interpolate_with(b, 0.0).almost_eq(a));
        assert!(a.interpolate_with(b, 1.0).almost_eq(b));
        let mid = a.interpolate_with(b, 0.5);
        assert!(mid.origin.almost_eq(Vector3::new(5.0, 0.0, 0.0)));
        // Rotation sweeps through the arc, not through a degenerate flat
        // average of the two matrices.
        assert!(mid.basis.almost_eq(Basis::from_axis_angle(Vector3::up(), FRAC_PI_2 / 2.0)));
    }

    #[test]
    fn transform3d_xform_plane_keeps_incidence() {
        let t = Transform3D::new(
            Basis::from_euler(Vector3::new(0.2, 0.9, -0.3)).scaled(Vector3::new(2.0, 1.0, 3.0)),
            Vector3::new(1.0, 2.0, 3.0),
        );
        let plane = Plane::from_point_normal(Vector3::new(0.5, 1.0, -2.0), Vector3::up());
        let moved = t.xform_plane(plane);
        // Points on the plane stay on the transformed plane, even under
        // non-uniform scale.
        let on_plane = plane.project(Vector3::new(3.0, -1.0, 2.0));
        assert!(moved.has_point(t.xform(on_plane)));
        assert!(moved.normal.is_normalized());

        // Non-uniform scale needs the full inverse to round-trip.
        let back = t.affine_inverse().xform_plane(moved);
        assert!(back.almost_eq(plane) || back.almost_eq(-plane));

        // The transpose shortcut is exact for orthonormal bases.
        let rigid = Transform3D::new(
            Basis::from_euler(Vector3::new(0.2, 0.9, -0.3)),
            Vector3::new(1.0, 2.0, 3.0),
        );
        let back = rigid.xform_inv_plane(rigid.xform_plane(plane));
        assert!(back.almost_eq(plane) || back.almost_eq(-plane));
    }

    #[test]
    fn transform3d_xform_aabb_encloses_corners() {
        let t = Transform3D::new(
            Basis::from_euler(Vector3::new(0.4, 0.8, 0.1)),
            Vector3::new(-1.0, 2.0, 0.5),
        );
        let aabb = Aabb::new(Vector3::new(-1.0, 0.0, 2.0), Vector3::new(2.0, 1.0, 3.0));
        let moved = t.xform_aabb(aabb);
        for idx in 0..8 {
            let corner = t.xform(aabb.get_endpoint(idx));
            assert!(moved.grow(EPSILON).has_point(corner), "corner {corner} outside {moved}");
        }
        let back = t.xform_inv_aabb(moved);
        assert!(back.grow(EPSILON).encloses(aabb));
    }

    // ==================== Layout contract ====================

    #[test]
    fn layout_matches_marshalling_contract() {
        assert_eq!(size_of::<Transform2D>(), 24);
        assert_eq!(offset_of!(Transform2D, x), 0);
        assert_eq!(offset_of!(Transform2D, y), 8);
        assert_eq!(offset_of!(Transform2D, origin), 16);

        assert_eq!(size_of::<Transform3D>(), 48);
        assert_eq!(offset_of!(Transform3D, basis), 0);
        assert_eq!(offset_of!(Transform3D, origin), 36);
    }
}
