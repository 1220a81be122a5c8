//! JSON scene files: polygons, segments, and query points.

use anyhow::{bail, Context, Result};
use planar::api::{Edge, Point, Polygon};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// `[x, y]` on the integer grid.
pub type Xy = [i64; 2];

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Scene {
    pub polygons: Vec<Vec<Xy>>,
    pub segments: Vec<[Xy; 2]>,
    pub points: Vec<Xy>,
}

#[inline]
pub fn point(xy: Xy) -> Point {
    Point::new(xy[0], xy[1])
}

#[inline]
pub fn xy(p: Point) -> Xy {
    [p.x, p.y]
}

impl Scene {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading scene {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing scene {}", path.display()))
    }

    /// Build polygon `index`; fails when the scene has too few polygons or the
    /// ring is invalid.
    pub fn polygon(&self, index: usize) -> Result<Polygon> {
        let Some(ring) = self.polygons.get(index) else {
            bail!(
                "scene needs at least {} polygon(s), found {}",
                index + 1,
                self.polygons.len()
            );
        };
        Polygon::new(ring.iter().copied().map(point).collect())
            .with_context(|| format!("polygon {index}"))
    }

    pub fn segments(&self) -> impl Iterator<Item = Edge> + '_ {
        self.segments.iter().map(|[a, b]| Edge::new(point(*a), point(*b)))
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied().map(point)
    }
}
