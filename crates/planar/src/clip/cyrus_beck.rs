//! Cyrus–Beck: parametric clipping of a segment against a convex polygon.

use crate::edge::{intersection_point, Edge, PlaceKind};
use crate::error::GeomError;
use crate::geometry::dot;
use crate::polygon::Polygon;

/// Clip `line` to `convex`; the polygon must be convex (not checked here).
///
/// Keeps the surviving parameter window `[t1, t2] ⊆ [0, 1]` along `line`. Edges
/// the line enters through (`dir · n > 0`, normals point inward) raise `t1`, the
/// others lower `t2`. A line parallel to an edge and strictly on its outer side
/// lies outside the polygon. An empty window yields the zero-length edge at
/// `line.a`.
pub fn cyrus_beck(line: &Edge, convex: &Polygon) -> Edge {
    let l = line.dir();
    let mut t1 = 0.0_f64;
    let mut t2 = 1.0_f64;
    for edge in convex.edges() {
        let info = intersection_point(line.a, line.b, edge.a, edge.b);
        if info.kind != PlaceKind::Cross {
            if dot(edge.n, line.a - edge.a) < 0 {
                return Edge::degenerate(line.a);
            }
            continue;
        }
        if dot(l, edge.n) > 0 {
            t1 = t1.max(info.t1);
        } else {
            t2 = t2.min(info.t1);
        }
    }
    if t1 > t2 {
        return Edge::degenerate(line.a);
    }
    Edge::new(line.point_at(t1), line.point_at(t2))
}

/// Checked Cyrus–Beck: rejects non-convex clip polygons.
pub fn clip_segment_against_convex(segment: &Edge, polygon: &Polygon) -> Result<Edge, GeomError> {
    if !polygon.is_convex() {
        return Err(GeomError::NotConvex);
    }
    Ok(cyrus_beck(segment, polygon))
}
