//! Integer planar geometry: simple polygons, containment, and clipping.
//!
//! Modules
//! - `geometry`: `Point` (integer `Vector2`) and the exact products on it.
//! - `edge`: directed segments and segment/segment predicates.
//! - `polygon`: validated clockwise polygons, classification, containment.
//! - `clip`: Cyrus–Beck segment clipping and Weiler–Atherton intersection.
//! - `raster`: pixel sinks and scan fill.
//!
//! All coordinates are `i64`. Floating point appears only for intersection
//! parameters; results are rounded back onto the grid.

pub mod api;
pub mod clip;
pub mod edge;
pub mod error;
pub mod geometry;
pub mod polygon;
pub mod raster;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{GeomError, Role};
pub use geometry::{Point, Vec2f};
pub use polygon::{FillRule, GeomCfg, Polygon};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::clip::{clip_segment_against_convex, cyrus_beck, intersect_polygons, weiler_atherton};
    pub use crate::edge::{classify, intersection_point, Edge, PlaceKind};
    pub use crate::error::GeomError;
    pub use crate::geometry::{cross, dot, Point};
    pub use crate::polygon::random::{draw_convex_polygon, draw_star_polygon, RadialCfg, ReplayToken};
    pub use crate::polygon::{BBox, FillRule, GeomCfg, Polygon};
    pub use crate::raster::{fill_polygon, PixelSink};
}
