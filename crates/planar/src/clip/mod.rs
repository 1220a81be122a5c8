//! Clipping: segments against convex polygons, polygons against polygons.
//!
//! - `cyrus_beck` / `clip_segment_against_convex`: parametric segment clip. A
//!   fully clipped segment comes back as a zero-length edge.
//! - `weiler_atherton` / `intersect_polygons`: boundary-merging intersection of
//!   two simple polygons. No intersection comes back as the empty polygon.
//! - `CrossingTable`: the shared `(subject edge, cutter edge) → crossing` cache.
//!
//! The unchecked functions assume their preconditions; the checked ones
//! validate them and return `GeomError`.

mod crossings;
mod cyrus_beck;
mod weiler_atherton;

pub use crossings::{Crossing, CrossingKey, CrossingTable};
pub use cyrus_beck::{clip_segment_against_convex, cyrus_beck};
pub use weiler_atherton::{intersect_polygons, weiler_atherton, weiler_atherton_with_cfg};

#[cfg(test)]
mod tests;
