//! Small value types shared by polygon queries.
//!
//! - `BBox`: integer axis-aligned bounds of a polygon's vertices.
//! - `FillRule`: parity rule for point containment.
//! - `GeomCfg`: the few tunables of containment and boundary walks.

use crate::edge::Edge;
use crate::geometry::Point;

/// Axis-aligned integer bounds `[x_min, x_max] × [y_min, y_max]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BBox {
    pub x_min: i64,
    pub x_max: i64,
    pub y_min: i64,
    pub y_max: i64,
}

impl BBox {
    /// Bounds of the edges' start vertices; the zero box for no edges.
    pub fn from_edges(edges: &[Edge]) -> Self {
        let Some(first) = edges.first() else {
            return Self::default();
        };
        let mut bb = Self {
            x_min: first.a.x,
            x_max: first.a.x,
            y_min: first.a.y,
            y_max: first.a.y,
        };
        for e in &edges[1..] {
            bb.x_min = bb.x_min.min(e.a.x);
            bb.x_max = bb.x_max.max(e.a.x);
            bb.y_min = bb.y_min.min(e.a.y);
            bb.y_max = bb.y_max.max(e.a.y);
        }
        bb
    }

    /// Closed containment.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.x_min <= p.x && p.x <= self.x_max && self.y_min <= p.y && p.y <= self.y_max
    }

    #[inline]
    pub fn overlaps(&self, other: &BBox) -> bool {
        self.x_min <= other.x_max
            && other.x_min <= self.x_max
            && self.y_min <= other.y_max
            && other.y_min <= self.y_max
    }

    #[inline]
    pub fn translate(&mut self, shift: Point) {
        self.x_min += shift.x;
        self.x_max += shift.x;
        self.y_min += shift.y;
        self.y_max += shift.y;
    }
}

/// Point-in-polygon parity rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FillRule {
    /// Inside iff a ray crosses the boundary an odd number of times.
    EvenOdd,
    /// Inside iff the signed crossing count is non-zero.
    NonZeroWinding,
}

/// Largest ray margin honoured; larger values are clamped so ray products stay
/// inside `i64` for coordinates up to about 2^30.
pub const MAX_RAY_MARGIN: i64 = 1 << 30;

/// Geometry configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeomCfg {
    /// Containment rays end this far past the bounding box (clamped to `1..=MAX_RAY_MARGIN`).
    pub ray_margin: i64,
    /// Extra steps a Weiler–Atherton walk may take beyond the merged list length.
    pub walk_slack: usize,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            ray_margin: 1,
            walk_slack: 1,
        }
    }
}
