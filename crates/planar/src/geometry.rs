//! Integer 2D vector primitives.
//!
//! All vertex coordinates are integers. Topological decisions (orientation,
//! parallelism, crossing) are taken on exact `i64` products; `f64` only shows
//! up for interpolation parameters and is rounded back to the integer grid.

use nalgebra::Vector2;

/// Integer point / vector in the plane.
pub type Point = Vector2<i64>;

/// Floating vector used for intermediate math only.
pub type Vec2f = Vector2<f64>;

/// Signed area of the parallelogram spanned by `a` and `b`.
/// Positive for a→b counterclockwise (y-up), negative otherwise, zero when parallel.
#[inline]
pub fn cross(a: Point, b: Point) -> i64 {
    a.x * b.y - a.y * b.x
}

#[inline]
pub fn dot(a: Point, b: Point) -> i64 {
    a.x * b.x + a.y * b.y
}

/// Sign of an integer as -1, 0 or 1.
#[inline]
pub fn sgn(v: i64) -> i64 {
    v.signum()
}

#[inline]
pub fn to_f64(p: Point) -> Vec2f {
    Vec2f::new(p.x as f64, p.y as f64)
}

/// `origin + t·dir`, rounded half away from zero onto the integer grid.
#[inline]
pub fn lerp_round(origin: Point, dir: Point, t: f64) -> Point {
    let d = to_f64(dir) * t;
    origin + Point::new(d.x.round() as i64, d.y.round() as i64)
}

/// True when `p` lies in the closed interval spanned by `a` and `b` on both axes.
#[inline]
pub(crate) fn in_box(a: Point, b: Point, p: Point) -> bool {
    a.x.min(b.x) <= p.x && p.x <= a.x.max(b.x) && a.y.min(b.y) <= p.y && p.y <= a.y.max(b.y)
}
