//! Point containment by ray casting (even-odd and non-zero winding).
//!
//! Boundary points (vertices and edge interiors) are inside under both rules.
//! For other points a ray runs from the point straight to a target just past
//! the bounding box's `y_min` side. The target's x is shifted by whole units
//! until no polygon vertex lies on the closed ray, so every counted crossing is
//! a proper one and no edge can be collinear with the ray. Each vertex rules
//! out at most one shift, which bounds the search by the vertex count.

use crate::edge::{classify, Edge, PlaceKind};
use crate::geometry::{cross, Point};

use super::shape::Polygon;
use super::types::{FillRule, GeomCfg, MAX_RAY_MARGIN};

impl Polygon {
    /// Closed-boundary membership.
    pub fn on_boundary(&self, p: Point) -> bool {
        self.edges().iter().any(|e| e.contains_point(p))
    }

    pub fn is_inside_even_odd_rule(&self, p: Point) -> bool {
        self.contains(p, FillRule::EvenOdd)
    }

    pub fn is_inside_non_zero_winding(&self, p: Point) -> bool {
        self.contains(p, FillRule::NonZeroWinding)
    }

    #[inline]
    pub fn contains(&self, p: Point, rule: FillRule) -> bool {
        self.contains_with_cfg(p, rule, GeomCfg::default())
    }

    pub fn contains_with_cfg(&self, p: Point, rule: FillRule, cfg: GeomCfg) -> bool {
        if self.is_empty() || !self.bbox().contains(p) {
            return false;
        }
        if self.on_boundary(p) {
            return true;
        }
        let ray = Edge::new(p, self.ray_target(p, cfg));
        let r = ray.dir();
        let mut count = 0usize;
        let mut winding = 0i64;
        for edge in self.edges() {
            let c = classify(edge, &ray);
            if c.overlapping && c.kind == PlaceKind::Cross {
                count += 1;
                winding += if cross(edge.dir(), r) > 0 { 1 } else { -1 };
            }
        }
        match rule {
            FillRule::EvenOdd => count % 2 == 1,
            FillRule::NonZeroWinding => winding != 0,
        }
    }

    /// Ray target past `bbox.y_min` that no vertex of `self` lies on the way to.
    fn ray_target(&self, p: Point, cfg: GeomCfg) -> Point {
        let y = self.bbox().y_min - cfg.ray_margin.clamp(1, MAX_RAY_MARGIN);
        let mut target = Point::new(p.x, y);
        while self
            .vertices()
            .any(|v| Edge::new(p, target).contains_point(v))
        {
            target.x += 1;
        }
        target
    }
}
