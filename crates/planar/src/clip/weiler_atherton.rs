//! Weiler–Atherton: intersection of two simple polygons by boundary merging.
//!
//! Preconditions (not checked by `weiler_atherton`): both polygons are simple and
//! no vertex of one lies on an edge of the other. Violations give an undefined
//! region, not an error.
//!
//! Algorithm
//! 1. Crossing table: proper crossings keyed by `(subject edge, cutter edge)`.
//! 2. Augmented rings: each edge's start vertex followed by the crossings on that
//!    edge in parameter order, once for the subject and once for the cutter.
//! 3. Start at the first subject vertex inside the cutter (even-odd).
//! 4. Walk forward emitting points; at every crossing switch to the other ring at
//!    the same crossing. Both rings are clockwise, so continuing forward keeps the
//!    common region on the same side. Stop back at the start vertex.
//!
//! Limitations
//! - Only the component containing the start vertex is produced.
//! - No subject vertex inside the cutter means an empty result, even when the
//!   cutter lies entirely inside the subject.

use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::edge::Edge;
use crate::error::{GeomError, Role};
use crate::geometry::Point;
use crate::polygon::{FillRule, GeomCfg, Polygon};

use super::crossings::{CrossingKey, CrossingTable};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Node {
    Vertex(Point),
    Crossing(CrossingKey),
}

/// One augmented boundary plus the position of each crossing in it.
struct Ring {
    nodes: Vec<Node>,
    index_of: HashMap<CrossingKey, usize>,
}

impl Ring {
    fn build(edges: &[Edge], along: impl Fn(usize) -> Vec<CrossingKey>) -> Self {
        let mut nodes = Vec::with_capacity(edges.len());
        let mut index_of = HashMap::new();
        for (i, e) in edges.iter().enumerate() {
            nodes.push(Node::Vertex(e.a));
            for key in along(i) {
                index_of.insert(key, nodes.len());
                nodes.push(Node::Crossing(key));
            }
        }
        Self { nodes, index_of }
    }
}

#[inline]
pub fn weiler_atherton(subject: &Polygon, cutter: &Polygon) -> Polygon {
    weiler_atherton_with_cfg(subject, cutter, GeomCfg::default())
}

/// One connected component of `subject ∩ cutter`; empty when none is found.
pub fn weiler_atherton_with_cfg(subject: &Polygon, cutter: &Polygon, cfg: GeomCfg) -> Polygon {
    if subject.is_empty() || cutter.is_empty() {
        return Polygon::empty();
    }
    if !subject.bbox().overlaps(&cutter.bbox()) {
        debug!("weiler_atherton: bounding boxes are disjoint");
        return Polygon::empty();
    }
    let table = CrossingTable::build(subject.edges(), cutter.edges());
    let rings = [
        Ring::build(subject.edges(), |i| table.along_subject(i)),
        Ring::build(cutter.edges(), |j| table.along_cutter(j)),
    ];
    debug!(
        crossings = table.len(),
        subject_nodes = rings[0].nodes.len(),
        cutter_nodes = rings[1].nodes.len(),
        "weiler_atherton: merged boundaries"
    );

    let start = rings[0].nodes.iter().position(|n| match n {
        Node::Vertex(p) => cutter.contains_with_cfg(*p, FillRule::EvenOdd, cfg),
        Node::Crossing(_) => false,
    });
    let Some(start) = start else {
        debug!("weiler_atherton: no subject vertex inside cutter");
        return Polygon::empty();
    };

    let limit = rings[0].nodes.len() + rings[1].nodes.len() + cfg.walk_slack;
    let mut out: Vec<Point> = Vec::new();
    let mut side = 0usize;
    let mut pos = start;
    for _ in 0..limit {
        match rings[side].nodes[pos] {
            Node::Vertex(p) => out.push(p),
            Node::Crossing(key) => {
                let (Some(c), Some(&other)) = (table.get(key), rings[1 - side].index_of.get(&key))
                else {
                    warn!(?key, "weiler_atherton: crossing missing from a ring");
                    return Polygon::empty();
                };
                out.push(c.point);
                side = 1 - side;
                pos = other;
                trace!(?key, side, pos, "weiler_atherton: switch boundary");
            }
        }
        pos = (pos + 1) % rings[side].nodes.len();
        if side == 0 && pos == start {
            let result = Polygon::from_ring_lossy(out);
            debug!(vertices = result.len(), "weiler_atherton: walk closed");
            return result;
        }
    }
    warn!(limit, "weiler_atherton: walk did not close, inputs likely violate preconditions");
    Polygon::empty()
}

/// Same vertices in the same cyclic order. Both rings are stored clockwise, so
/// only the start vertex can differ.
fn same_boundary(a: &Polygon, b: &Polygon) -> bool {
    let (pa, pb) = (a.to_points(), b.to_points());
    if pa.len() != pb.len() {
        return false;
    }
    let Some(shift) = pb.iter().position(|p| *p == pa[0]) else {
        return false;
    };
    (0..pa.len()).all(|k| pa[k] == pb[(shift + k) % pb.len()])
}

fn vertex_on_boundary(of: &Polygon, other: &Polygon) -> Option<usize> {
    of.vertices().position(|v| other.on_boundary(v))
}

/// Checked intersection.
///
/// Both inputs must be simple and no vertex of one may lie on the boundary of
/// the other; an input compared with itself is the one exception and comes
/// back unchanged. Empty inputs give an empty result.
pub fn intersect_polygons(a: &Polygon, b: &Polygon) -> Result<Polygon, GeomError> {
    if a.is_empty() || b.is_empty() {
        return Ok(Polygon::empty());
    }
    if !a.is_simple() {
        return Err(GeomError::NotSimple {
            role: Role::Subject,
        });
    }
    if !b.is_simple() {
        return Err(GeomError::NotSimple { role: Role::Cutter });
    }
    if same_boundary(a, b) {
        return Ok(a.clone());
    }
    if let Some(index) = vertex_on_boundary(a, b) {
        return Err(GeomError::VertexOnEdge {
            role: Role::Subject,
            index,
        });
    }
    if let Some(index) = vertex_on_boundary(b, a) {
        return Err(GeomError::VertexOnEdge {
            role: Role::Cutter,
            index,
        });
    }
    Ok(weiler_atherton(a, b))
}
