use crate::core::config::EPSILON;
use crate::util::linalg::{Axis, Vector2, Vector3};
use crate::util::real;
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    fmt::Formatter,
    ops::Neg,
};

/// A plane in Hessian normal form: the set of points `p` with
/// `normal.dot(p) == d`. The normal is expected to be unit length; call
/// [`normalized`](Plane::normalized) after constructing from raw
/// coefficients.
#[repr(C)]
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
pub struct Plane {
    pub normal: Vector3,
    pub d: f32,
}

impl Plane {
    #[must_use]
    pub const fn new(normal: Vector3, d: f32) -> Plane {
        Plane { normal, d }
    }

    /// Plane from the coefficients of `a x + b y + c z = d`.
    #[must_use]
    pub const fn from_coefficients(a: f32, b: f32, c: f32, d: f32) -> Plane {
        Plane::new(Vector3::new(a, b, c), d)
    }

    /// Plane through `point` with the given unit `normal`.
    #[must_use]
    pub fn from_point_normal(point: Vector3, normal: Vector3) -> Plane {
        Plane::new(normal, normal.dot(point))
    }

    /// Plane through three points, with the normal facing the side from which
    /// the points wind clockwise.
    #[must_use]
    pub fn from_points(v1: Vector3, v2: Vector3, v3: Vector3) -> Plane {
        let normal = (v1 - v3).cross(v1 - v2).normalized();
        Plane::new(normal, normal.dot(v1))
    }

    /// The point on the plane closest to the origin.
    #[must_use]
    pub fn center(&self) -> Vector3 {
        self.normal * self.d
    }

    /// Some arbitrary point on the plane.
    #[must_use]
    pub fn get_any_point(&self) -> Vector3 {
        self.center()
    }

    /// Signed distance: positive on the side the normal points towards.
    #[must_use]
    pub fn distance_to(&self, point: Vector3) -> f32 {
        self.normal.dot(point) - self.d
    }

    #[must_use]
    pub fn has_point(&self, point: Vector3) -> bool {
        real::is_zero_approx(self.distance_to(point))
    }

    #[must_use]
    pub fn is_point_over(&self, point: Vector3) -> bool {
        self.distance_to(point) > 0.0
    }

    /// The intersection point of three planes, or `None` when any two are
    /// (nearly) parallel.
    #[must_use]
    pub fn intersect_3(&self, b: Plane, c: Plane) -> Option<Vector3> {
        let normal0 = self.normal;
        let normal1 = b.normal;
        let normal2 = c.normal;
        let denom = normal0.cross(normal1).dot(normal2);
        if real::is_zero_approx(denom) {
            return None;
        }
        Some(
            (normal1.cross(normal2) * self.d
                + normal2.cross(normal0) * b.d
                + normal0.cross(normal1) * c.d)
                / denom,
        )
    }

    /// Intersection of the half-line `from + t * dir, t >= 0` with the plane.
    #[must_use]
    pub fn intersects_ray(&self, from: Vector3, dir: Vector3) -> Option<Vector3> {
        let den = self.normal.dot(dir);
        if real::is_zero_approx(den) {
            return None;
        }
        let dist = (self.normal.dot(from) - self.d) / den;
        if dist > EPSILON {
            // Origin is in front and the ray points away.
            return None;
        }
        Some(from + dir * -dist)
    }

    /// Intersection of the segment from `begin` to `end` with the plane.
    #[must_use]
    pub fn intersects_segment(&self, begin: Vector3, end: Vector3) -> Option<Vector3> {
        let segment = begin - end;
        let den = self.normal.dot(segment);
        if real::is_zero_approx(den) {
            return None;
        }
        let dist = (self.normal.dot(begin) - self.d) / den;
        if !(-EPSILON..=1.0 + EPSILON).contains(&dist) {
            return None;
        }
        Some(begin + segment * -dist)
    }

    /// Rescales so the normal has unit length. The degenerate plane with a
    /// zero normal maps to itself with `d` zeroed.
    #[must_use]
    pub fn normalized(&self) -> Plane {
        let l = self.normal.length();
        if l == 0.0 {
            Plane::new(Vector3::zero(), 0.0)
        } else {
            Plane::new(self.normal / l, self.d / l)
        }
    }

    /// The orthogonal projection of `point` onto the plane.
    #[must_use]
    pub fn project(&self, point: Vector3) -> Vector3 {
        point - self.normal * self.distance_to(point)
    }

    pub fn almost_eq(&self, rhs: Plane) -> bool {
        self.normal.almost_eq(rhs.normal) && real::is_equal_approx(self.d, rhs.d)
    }
}

/// The same plane with the normal (and therefore the notion of "over")
/// flipped.
impl Neg for Plane {
    type Output = Plane;
    fn neg(self) -> Self::Output {
        Plane::new(-self.normal, -self.d)
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[n: {}, d: {}]", self.normal, self.d)
    }
}

/// An axis-aligned box, stored as its minimum corner and (non-negative) size.
/// Negative sizes are representable but most predicates assume
/// [`abs`](Aabb::abs) has been applied first.
#[repr(C)]
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
pub struct Aabb {
    pub position: Vector3,
    pub size: Vector3,
}

impl Aabb {
    #[must_use]
    pub const fn new(position: Vector3, size: Vector3) -> Aabb {
        Aabb { position, size }
    }

    /// The same box with any negative size components folded into the
    /// position, so the size ends up non-negative.
    #[must_use]
    pub fn abs(&self) -> Aabb {
        Aabb::new(
            Vector3::new(
                self.position.x + self.size.x.min(0.0),
                self.position.y + self.size.y.min(0.0),
                self.position.z + self.size.z.min(0.0),
            ),
            self.size.abs(),
        )
    }

    #[must_use]
    pub fn end(&self) -> Vector3 {
        self.position + self.size
    }

    /// Whether `b` lies entirely inside this box, boundaries included. The
    /// comparison allows [`EPSILON`] of slack per component, so that
    /// `a.merge(b).encloses(a)` holds even when `position + size` rounds a
    /// little short of the merged end.
    #[must_use]
    pub fn encloses(&self, b: Aabb) -> bool {
        let src_min = self.position;
        let src_max = self.end();
        let dst_min = b.position;
        let dst_max = b.end();
        src_min.x <= dst_min.x + EPSILON
            && src_max.x >= dst_max.x - EPSILON
            && src_min.y <= dst_min.y + EPSILON
            && src_max.y >= dst_max.y - EPSILON
            && src_min.z <= dst_min.z + EPSILON
            && src_max.z >= dst_max.z - EPSILON
    }

    /// The smallest box containing both this box and `point`.
    #[must_use]
    pub fn expand(&self, point: Vector3) -> Aabb {
        let mut begin = self.position;
        let mut end = self.end();
        begin.x = begin.x.min(point.x);
        begin.y = begin.y.min(point.y);
        begin.z = begin.z.min(point.z);
        end.x = end.x.max(point.x);
        end.y = end.y.max(point.y);
        end.z = end.z.max(point.z);
        Aabb::new(begin, end - begin)
    }

    /// Volume of the box.
    #[must_use]
    pub fn get_area(&self) -> f32 {
        self.size.x * self.size.y * self.size.z
    }

    /// One of the 8 corners; bit 2 of `idx` selects the far x face, bit 1 the
    /// far y face and bit 0 the far z face.
    #[must_use]
    pub fn get_endpoint(&self, idx: usize) -> Vector3 {
        self.position
            + Vector3::new(
                if idx & 4 != 0 { self.size.x } else { 0.0 },
                if idx & 2 != 0 { self.size.y } else { 0.0 },
                if idx & 1 != 0 { self.size.z } else { 0.0 },
            )
    }

    #[must_use]
    pub fn get_longest_axis(&self) -> Axis {
        let mut axis = Axis::X;
        let mut max_size = self.size.x;
        if self.size.y > max_size {
            axis = Axis::Y;
            max_size = self.size.y;
        }
        if self.size.z > max_size {
            axis = Axis::Z;
        }
        axis
    }

    #[must_use]
    pub fn get_longest_axis_size(&self) -> f32 {
        self.size[self.get_longest_axis()]
    }

    #[must_use]
    pub fn get_shortest_axis(&self) -> Axis {
        let mut axis = Axis::X;
        let mut min_size = self.size.x;
        if self.size.y < min_size {
            axis = Axis::Y;
            min_size = self.size.y;
        }
        if self.size.z < min_size {
            axis = Axis::Z;
        }
        axis
    }

    #[must_use]
    pub fn get_shortest_axis_size(&self) -> f32 {
        self.size[self.get_shortest_axis()]
    }

    /// The corner facing away from `dir`, used as the support point when
    /// testing against a separating plane with that normal.
    #[must_use]
    pub fn get_support(&self, dir: Vector3) -> Vector3 {
        let half_extents = self.size * 0.5;
        let ofs = self.position + half_extents;
        Vector3::new(
            if dir.x > 0.0 { -half_extents.x } else { half_extents.x },
            if dir.y > 0.0 { -half_extents.y } else { half_extents.y },
            if dir.z > 0.0 { -half_extents.z } else { half_extents.z },
        ) + ofs
    }

    /// Grows by `by` on all six faces.
    #[must_use]
    pub fn grow(&self, by: f32) -> Aabb {
        Aabb::new(self.position - Vector3::one() * by, self.size + Vector3::one() * (2.0 * by))
    }

    /// Flat or inverted in at least one axis.
    #[must_use]
    pub fn has_no_area(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0 || self.size.z <= 0.0
    }

    /// Flat or inverted in every axis (not even a face or edge remains).
    #[must_use]
    pub fn has_no_surface(&self) -> bool {
        self.size.x <= 0.0 && self.size.y <= 0.0 && self.size.z <= 0.0
    }

    /// Boundary points count as inside.
    #[must_use]
    pub fn has_point(&self, point: Vector3) -> bool {
        let end = self.end();
        point.x >= self.position.x
            && point.y >= self.position.y
            && point.z >= self.position.z
            && point.x <= end.x
            && point.y <= end.y
            && point.z <= end.z
    }

    /// The overlapping region, or the default (empty) box when the two are
    /// disjoint. Boxes that merely touch produce a zero-size box at the
    /// contact.
    #[must_use]
    pub fn intersection(&self, b: Aabb) -> Aabb {
        let src_min = self.position;
        let src_max = self.end();
        let dst_min = b.position;
        let dst_max = b.end();
        if src_min.x > dst_max.x
            || src_max.x < dst_min.x
            || src_min.y > dst_max.y
            || src_max.y < dst_min.y
            || src_min.z > dst_max.z
            || src_max.z < dst_min.z
        {
            return Aabb::default();
        }
        let min = Vector3::new(
            src_min.x.max(dst_min.x),
            src_min.y.max(dst_min.y),
            src_min.z.max(dst_min.z),
        );
        let max = Vector3::new(
            src_max.x.min(dst_max.x),
            src_max.y.min(dst_max.y),
            src_max.z.min(dst_max.z),
        );
        Aabb::new(min, max - min)
    }

    /// Overlap with positive volume; boxes that only share a face, edge or
    /// corner do not intersect.
    #[must_use]
    pub fn intersects(&self, b: Aabb) -> bool {
        let end = self.end();
        let b_end = b.end();
        !(self.position.x >= b_end.x
            || end.x <= b.position.x
            || self.position.y >= b_end.y
            || end.y <= b.position.y
            || self.position.z >= b_end.z
            || end.z <= b.position.z)
    }

    /// Whether the box straddles the plane: it has corners strictly on both
    /// sides.
    #[must_use]
    pub fn intersects_plane(&self, plane: Plane) -> bool {
        let mut over = false;
        let mut under = false;
        for idx in 0..8 {
            if plane.distance_to(self.get_endpoint(idx)) > 0.0 {
                over = true;
            } else {
                under = true;
            }
        }
        over && under
    }

    /// Slab test of the segment from `from` to `to` against the box.
    #[must_use]
    pub fn intersects_segment(&self, from: Vector3, to: Vector3) -> bool {
        let mut min = 0.0f32;
        let mut max = 1.0f32;
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let seg_from = from[axis];
            let seg_to = to[axis];
            let box_begin = self.position[axis];
            let box_end = box_begin + self.size[axis];
            let length = seg_to - seg_from;
            let (cmin, cmax) = if seg_from < seg_to {
                if seg_from > box_end || seg_to < box_begin {
                    return false;
                }
                (
                    if seg_from < box_begin { (box_begin - seg_from) / length } else { 0.0 },
                    if seg_to > box_end { (box_end - seg_from) / length } else { 1.0 },
                )
            } else {
                if seg_to > box_end || seg_from < box_begin {
                    return false;
                }
                (
                    if seg_from > box_end { (box_end - seg_from) / length } else { 0.0 },
                    if seg_to < box_begin { (box_begin - seg_from) / length } else { 1.0 },
                )
            };
            min = min.max(cmin);
            max = max.min(cmax);
            if max < min {
                return false;
            }
        }
        true
    }

    /// The smallest box containing both boxes.
    #[must_use]
    pub fn merge(&self, b: Aabb) -> Aabb {
        let beg = Vector3::new(
            self.position.x.min(b.position.x),
            self.position.y.min(b.position.y),
            self.position.z.min(b.position.z),
        );
        let self_end = self.end();
        let b_end = b.end();
        let end = Vector3::new(
            self_end.x.max(b_end.x),
            self_end.y.max(b_end.y),
            self_end.z.max(b_end.z),
        );
        Aabb::new(beg, end - beg)
    }

    pub fn almost_eq(&self, rhs: Aabb) -> bool {
        self.position.almost_eq(rhs.position) && self.size.almost_eq(rhs.size)
    }
}

impl fmt::Display for Aabb {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[pos: {}, size: {}]", self.position, self.size)
    }
}

/// One side of a [`Rect2`], for the directional grow operations.
#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
pub enum Margin {
    Left,
    Top,
    Right,
    Bottom,
}

/// An axis-aligned rectangle, stored as its minimum corner and size.
///
/// Containment follows the half-open convention: [`has_point`](Rect2::has_point)
/// includes the left and top edges but excludes the right and bottom ones, so
/// adjacent tiles never both claim a shared edge.
#[repr(C)]
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
pub struct Rect2 {
    pub position: Vector2,
    pub size: Vector2,
}

impl Rect2 {
    #[must_use]
    pub const fn new(position: Vector2, size: Vector2) -> Rect2 {
        Rect2 { position, size }
    }

    /// Rectangle from scalar bounds: minimum corner `(x, y)` and size
    /// `(width, height)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use spindle::core::prelude::*;
    /// assert_eq!(Rect2::from_bounds(0.0, 0.0, 4.0, 2.0).get_area(), 8.0);
    /// ```
    #[must_use]
    pub const fn from_bounds(x: f32, y: f32, width: f32, height: f32) -> Rect2 {
        Rect2::new(Vector2::new(x, y), Vector2::new(width, height))
    }

    /// The same rectangle with any negative size components folded into the
    /// position.
    #[must_use]
    pub fn abs(&self) -> Rect2 {
        Rect2::new(
            Vector2::new(
                self.position.x + self.size.x.min(0.0),
                self.position.y + self.size.y.min(0.0),
            ),
            self.size.abs(),
        )
    }

    #[must_use]
    pub fn end(&self) -> Vector2 {
        self.position + self.size
    }

    #[must_use]
    pub fn get_area(&self) -> f32 {
        self.size.x * self.size.y
    }

    /// The overlapping region, or the default (empty) rectangle when the two
    /// do not overlap.
    #[must_use]
    pub fn clip(&self, b: Rect2) -> Rect2 {
        if !self.intersects(b, false) {
            return Rect2::default();
        }
        let min = Vector2::new(
            self.position.x.max(b.position.x),
            self.position.y.max(b.position.y),
        );
        let self_end = self.end();
        let b_end = b.end();
        let max = Vector2::new(self_end.x.min(b_end.x), self_end.y.min(b_end.y));
        Rect2::new(min, max - min)
    }

    /// Whether `b` lies entirely inside this rectangle, boundaries included.
    #[must_use]
    pub fn encloses(&self, b: Rect2) -> bool {
        let self_end = self.end();
        let b_end = b.end();
        b.position.x >= self.position.x
            && b.position.y >= self.position.y
            && b_end.x <= self_end.x
            && b_end.y <= self_end.y
    }

    /// The smallest rectangle containing both this rectangle and `point`.
    #[must_use]
    pub fn expand(&self, point: Vector2) -> Rect2 {
        let mut begin = self.position;
        let mut end = self.end();
        begin.x = begin.x.min(point.x);
        begin.y = begin.y.min(point.y);
        end.x = end.x.max(point.x);
        end.y = end.y.max(point.y);
        Rect2::new(begin, end - begin)
    }

    /// Grows by `by` on all four sides.
    #[must_use]
    pub fn grow(&self, by: f32) -> Rect2 {
        Rect2::new(self.position - Vector2::one() * by, self.size + Vector2::one() * (2.0 * by))
    }

    /// Grows each side independently; negative values shrink.
    #[must_use]
    pub fn grow_individual(&self, left: f32, top: f32, right: f32, bottom: f32) -> Rect2 {
        Rect2::new(
            self.position - Vector2::new(left, top),
            self.size + Vector2::new(left + right, top + bottom),
        )
    }

    /// Grows a single side.
    #[must_use]
    pub fn grow_margin(&self, margin: Margin, by: f32) -> Rect2 {
        self.grow_individual(
            if margin == Margin::Left { by } else { 0.0 },
            if margin == Margin::Top { by } else { 0.0 },
            if margin == Margin::Right { by } else { 0.0 },
            if margin == Margin::Bottom { by } else { 0.0 },
        )
    }

    #[must_use]
    pub fn has_no_area(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Half-open containment: the minimum edges are inside, the maximum edges
    /// are not.
    #[must_use]
    pub fn has_point(&self, point: Vector2) -> bool {
        let end = self.end();
        point.x >= self.position.x
            && point.y >= self.position.y
            && point.x < end.x
            && point.y < end.y
    }

    /// Overlap test. With `include_borders`, rectangles sharing only an edge
    /// or corner also count as intersecting.
    #[must_use]
    pub fn intersects(&self, b: Rect2, include_borders: bool) -> bool {
        let end = self.end();
        let b_end = b.end();
        if include_borders {
            !(self.position.x > b_end.x
                || end.x < b.position.x
                || self.position.y > b_end.y
                || end.y < b.position.y)
        } else {
            !(self.position.x >= b_end.x
                || end.x <= b.position.x
                || self.position.y >= b_end.y
                || end.y <= b.position.y)
        }
    }

    /// The smallest rectangle containing both rectangles.
    #[must_use]
    pub fn merge(&self, b: Rect2) -> Rect2 {
        let position = Vector2::new(
            self.position.x.min(b.position.x),
            self.position.y.min(b.position.y),
        );
        let self_end = self.end();
        let b_end = b.end();
        let end = Vector2::new(self_end.x.max(b_end.x), self_end.y.max(b_end.y));
        Rect2::new(position, end - position)
    }

    pub fn almost_eq(&self, rhs: Rect2) -> bool {
        self.position.almost_eq(rhs.position) && self.size.almost_eq(rhs.size)
    }
}

impl fmt::Display for Rect2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[pos: {}, size: {}]", self.position, self.size)
    }
}
