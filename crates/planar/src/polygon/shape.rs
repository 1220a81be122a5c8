//! The `Polygon` type: validated, orientation-normalized boundary of edges.

use std::collections::HashMap;

use crate::edge::{classify, Edge};
use crate::error::GeomError;
use crate::geometry::{cross, dot, sgn, Point};

use super::types::BBox;

/// Simple-polygon boundary stored as a cyclic list of edges.
///
/// Invariants:
/// - `edges[i].b == edges[(i + 1) % len].a`; vertex count equals edge count.
/// - Clockwise order: `signed_area2() <= 0` (y-up frame); counter-clockwise input
///   is reversed on construction.
/// - Every normal points to the centroid side of its edge:
///   `n · (centroid − midpoint) >= 0`.
/// - Fewer than 3 edges is the empty polygon ("no result"), not an error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Polygon {
    edges: Vec<Edge>,
    bbox: BBox,
}

/// Twice the signed shoelace area of a closed vertex ring.
pub fn signed_area2(points: &[Point]) -> i64 {
    let k = points.len();
    (0..k).map(|i| cross(points[i], points[(i + 1) % k])).sum()
}

fn all_collinear(points: &[Point]) -> bool {
    let a = points[0];
    let ab = points[1] - a;
    points[2..].iter().all(|p| cross(ab, p - a) == 0)
}

fn validate(points: &[Point]) -> Result<(), GeomError> {
    if points.len() < 3 {
        return Err(GeomError::TooFewPoints {
            count: points.len(),
        });
    }
    let mut seen: HashMap<(i64, i64), usize> = HashMap::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        if let Some(&first) = seen.get(&(p.x, p.y)) {
            return Err(GeomError::DuplicatePoint {
                first,
                second: i,
                x: p.x,
                y: p.y,
            });
        }
        seen.insert((p.x, p.y), i);
    }
    if all_collinear(points) {
        return Err(GeomError::Collinear);
    }
    Ok(())
}

impl Polygon {
    /// Build from an ordered vertex ring.
    ///
    /// Fails on fewer than 3 points, repeated points, or all points on one line.
    /// Input orientation is free; storage is normalized to clockwise.
    pub fn new(points: Vec<Point>) -> Result<Self, GeomError> {
        validate(&points)?;
        Ok(Self::from_ring(points))
    }

    /// The empty/degenerate polygon.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Normalize a ring that already passed validation.
    pub(crate) fn from_ring(mut points: Vec<Point>) -> Self {
        if signed_area2(&points) > 0 {
            points.reverse();
        }
        let k = points.len();
        let mut edges: Vec<Edge> = (0..k)
            .map(|i| Edge::new(points[i], points[(i + 1) % k]))
            .collect();
        let bbox = BBox::from_edges(&edges);

        // centroid − midpoint, scaled by 2k to stay on integers
        let sum = points.iter().fold(Point::zeros(), |acc, p| acc + p);
        let k = k as i64;
        for e in &mut edges {
            let to_center = sum * 2 - (e.a + e.b) * k;
            if dot(e.n, to_center) < 0 {
                e.n = -e.n;
            }
        }
        Self { edges, bbox }
    }

    /// Like [`Polygon::new`] but maps invalid rings to the empty polygon.
    /// Repeated points are dropped (first occurrence wins) before validation.
    pub(crate) fn from_ring_lossy(points: Vec<Point>) -> Self {
        let mut ring: Vec<Point> = Vec::with_capacity(points.len());
        for p in points {
            if !ring.contains(&p) {
                ring.push(p);
            }
        }
        if ring.len() < 3 || all_collinear(&ring) {
            return Self::empty();
        }
        Self::from_ring(ring)
    }

    /// True for the degenerate "no result" polygon (fewer than 3 edges).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.len() < 3
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn bbox(&self) -> BBox {
        self.bbox
    }

    /// Vertices in stored (clockwise) order.
    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.edges.iter().map(|e| e.a)
    }

    pub fn to_points(&self) -> Vec<Point> {
        self.vertices().collect()
    }

    /// Integer vertex average (truncating); origin for the empty polygon.
    pub fn center(&self) -> Point {
        if self.edges.is_empty() {
            return Point::zeros();
        }
        let sum = self.vertices().fold(Point::zeros(), |acc, p| acc + p);
        sum / self.edges.len() as i64
    }

    /// Twice the signed area; `<= 0` for every stored polygon.
    pub fn signed_area2(&self) -> i64 {
        self.edges.iter().map(|e| cross(e.a, e.b)).sum()
    }

    pub fn area(&self) -> f64 {
        self.signed_area2().abs() as f64 / 2.0
    }

    /// Shift all vertices and the bounding box.
    pub fn translate(&mut self, shift: Point) {
        for e in &mut self.edges {
            e.translate(shift);
        }
        self.bbox.translate(shift);
    }

    /// No two non-adjacent edges touch. Always false below 3 edges.
    pub fn is_simple(&self) -> bool {
        let n = self.edges.len();
        if n <= 2 {
            return false;
        }
        for i in 0..n {
            for j in (i + 2)..n {
                if i == 0 && j == n - 1 {
                    continue;
                }
                if classify(&self.edges[i], &self.edges[j]).overlapping {
                    return false;
                }
            }
        }
        true
    }

    /// Simple, and every non-zero turn has the sign of the first non-zero turn.
    pub fn is_convex(&self) -> bool {
        let n = self.edges.len();
        if n < 3 || !self.is_simple() {
            return false;
        }
        let mut sign = 0;
        for i in 0..n {
            let turn = sgn(cross(self.edges[i].dir(), self.edges[(i + 1) % n].dir()));
            if turn == 0 {
                continue;
            }
            if sign == 0 {
                sign = turn;
            } else if turn != sign {
                return false;
            }
        }
        true
    }
}
