//! Curated API surface.
//!
//! - Prefer these re-exports in binaries and benches; module paths may move.
//! - Checked entry points (`Polygon::new`, `clip_segment_against_convex`,
//!   `intersect_polygons`) return `GeomError`; the rest assume valid input.

// primitives
pub use crate::edge::{
    classify, classify_points, intersect_edges, intersection_point, is_inside_segment,
    proper_crossing, Classification, Edge, Intersection, PlaceKind,
};
pub use crate::error::{GeomError, Role};
pub use crate::geometry::{cross, dot, lerp_round, Point, Vec2f};
// polygons
pub use crate::polygon::{
    convex_hull, signed_area2, BBox, FillRule, GeomCfg, Polygon, MAX_RAY_MARGIN,
};
// random polygons
pub use crate::polygon::random::{
    draw_convex_polygon, draw_star_polygon, RadialCfg, ReplayToken as PolygonReplay, VertexCount,
};
// clipping
pub use crate::clip::{
    clip_segment_against_convex, cyrus_beck, intersect_polygons, weiler_atherton,
    weiler_atherton_with_cfg, Crossing, CrossingKey, CrossingTable,
};
// raster
pub use crate::raster::{fill_polygon, fill_polygon_with_cfg, PixelSink};
