//! Directed segments and segment/segment predicates.
//!
//! Conventions
//! - A segment `a → b` is parameterized as `a + t·(b − a)`, `t ∈ [0, 1]`.
//! - `ab_cd = −cross(b − a, d − c)`; zero means parallel (or collinear).
//! - Crossing parameters are `t1 = cross(d − c, c − a) / ab_cd` along the first
//!   segment and `t2 = cross(b − a, c − a) / ab_cd` along the second.
//! - Whether a parameter lies in `[0, 1]` (or `(0, 1)`) is decided on the integer
//!   numerator and denominator, so classification never depends on rounding.

use crate::geometry::{cross, dot, in_box, lerp_round, Point};

/// Directed segment `a → b` with a normal `n`.
///
/// `Edge::new` derives `n = (b.y − a.y, a.x − b.x)`. Polygons re-orient the normal
/// toward their interior after construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub a: Point,
    pub b: Point,
    pub n: Point,
}

impl Edge {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            a,
            b,
            n: Point::new(b.y - a.y, a.x - b.x),
        }
    }

    /// Zero-length edge at `p`; the "fully clipped" sentinel.
    #[inline]
    pub fn degenerate(p: Point) -> Self {
        Self::new(p, p)
    }

    #[inline]
    pub fn dir(&self) -> Point {
        self.b - self.a
    }

    /// Integer midpoint (truncating division).
    #[inline]
    pub fn center(&self) -> Point {
        (self.a + self.b) / 2
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }

    /// Point at parameter `t`, rounded onto the integer grid.
    #[inline]
    pub fn point_at(&self, t: f64) -> Point {
        lerp_round(self.a, self.dir(), t)
    }

    /// Closed-segment membership: collinear with the edge and between its endpoints.
    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        cross(self.dir(), p - self.a) == 0 && in_box(self.a, self.b, p)
    }

    #[inline]
    pub fn translate(&mut self, shift: Point) {
        self.a += shift;
        self.b += shift;
    }
}

/// How two segments' supporting lines relate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlaceKind {
    Parallel,
    Collinear,
    Cross,
}

/// Outcome of [`classify`]: the relation plus whether the segments actually meet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classification {
    pub overlapping: bool,
    pub kind: PlaceKind,
}

/// Parametric intersection of two segments.
///
/// - `Cross`: `t1`/`t2` locate the crossing of the supporting lines along the first
///   and second segment; values may lie outside `[0, 1]`.
/// - `Collinear`: `t1` is the projection of the second segment's start onto the first,
///   `t2` the projection of the first segment's start onto the second.
/// - `Parallel`: both parameters are zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub kind: PlaceKind,
    pub t1: f64,
    pub t2: f64,
}

#[inline]
fn intervals_meet(a: i64, b: i64, c: i64, d: i64) -> bool {
    a.min(b).max(c.min(d)) <= a.max(b).min(c.max(d))
}

/// `num / den ∈ [0, 1]` for `den != 0`.
#[inline]
fn in_unit_closed(num: i64, den: i64) -> bool {
    if den > 0 {
        0 <= num && num <= den
    } else {
        den <= num && num <= 0
    }
}

/// `num / den ∈ (0, 1)` for `den != 0`.
#[inline]
fn in_unit_open(num: i64, den: i64) -> bool {
    if den > 0 {
        0 < num && num < den
    } else {
        den < num && num < 0
    }
}

/// Classify segments `a → b` and `c → d`.
pub fn classify_points(a: Point, b: Point, c: Point, d: Point) -> Classification {
    let l = b - a;
    let e = d - c;
    let ca = c - a;
    let ab_cd = -cross(l, e);
    if ab_cd == 0 {
        if cross(e, ca) != 0 {
            return Classification {
                overlapping: false,
                kind: PlaceKind::Parallel,
            };
        }
        return Classification {
            overlapping: intervals_meet(a.x, b.x, c.x, d.x) && intervals_meet(a.y, b.y, c.y, d.y),
            kind: PlaceKind::Collinear,
        };
    }
    Classification {
        overlapping: in_unit_closed(cross(e, ca), ab_cd) && in_unit_closed(cross(l, ca), ab_cd),
        kind: PlaceKind::Cross,
    }
}

#[inline]
pub fn classify(e1: &Edge, e2: &Edge) -> Classification {
    classify_points(e1.a, e1.b, e2.a, e2.b)
}

/// Parametric intersection of `a → b` with `c → d`; see [`Intersection`].
pub fn intersection_point(a: Point, b: Point, c: Point, d: Point) -> Intersection {
    let l = b - a;
    let e = d - c;
    let ca = c - a;
    let ab_cd = -cross(l, e);
    if ab_cd == 0 {
        if cross(e, ca) != 0 {
            return Intersection {
                kind: PlaceKind::Parallel,
                t1: 0.0,
                t2: 0.0,
            };
        }
        let project = |v: Point, onto: Point| {
            let len2 = dot(onto, onto);
            if len2 == 0 {
                0.0
            } else {
                dot(v, onto) as f64 / len2 as f64
            }
        };
        return Intersection {
            kind: PlaceKind::Collinear,
            t1: project(ca, l),
            t2: project(-ca, e),
        };
    }
    Intersection {
        kind: PlaceKind::Cross,
        t1: cross(e, ca) as f64 / ab_cd as f64,
        t2: cross(l, ca) as f64 / ab_cd as f64,
    }
}

#[inline]
pub fn intersect_edges(e1: &Edge, e2: &Edge) -> Intersection {
    intersection_point(e1.a, e1.b, e2.a, e2.b)
}

/// Crossing strictly inside both segments (no shared endpoints, no touching).
///
/// This is the only kind of contact the boundary merge of polygon intersection
/// treats as a crossing.
pub fn proper_crossing(e1: &Edge, e2: &Edge) -> Option<Intersection> {
    let l = e1.dir();
    let e = e2.dir();
    let ca = e2.a - e1.a;
    let ab_cd = -cross(l, e);
    if ab_cd == 0 {
        return None;
    }
    let n1 = cross(e, ca);
    let n2 = cross(l, ca);
    if !(in_unit_open(n1, ab_cd) && in_unit_open(n2, ab_cd)) {
        return None;
    }
    Some(Intersection {
        kind: PlaceKind::Cross,
        t1: n1 as f64 / ab_cd as f64,
        t2: n2 as f64 / ab_cd as f64,
    })
}

/// True iff `p` lies on the edge's line strictly between `a` and `b`.
#[inline]
pub fn is_inside_segment(edge: &Edge, p: Point) -> bool {
    cross(edge.dir(), p - edge.a) == 0 && dot(edge.a - p, edge.b - p) < 0
}
