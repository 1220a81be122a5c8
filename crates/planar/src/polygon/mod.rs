//! Integer simple polygons: construction, classification, containment.
//!
//! Purpose
//! - One `Polygon` type with a validated, clockwise-normalized ring of edges
//!   whose normals point inward, ready for Cyrus–Beck and Weiler–Atherton.
//!
//! Conventions
//! - "Clockwise" means non-positive shoelace sum in a y-up frame. Input of either
//!   orientation is accepted.
//! - A polygon with fewer than 3 edges is the empty result value. Only
//!   `Polygon::new` can fail; every query on a built polygon is total.
//! - Containment treats the boundary as inside under both rules.
//!
//! Code cross-refs: `edge::{classify, Edge}`, `clip::{cyrus_beck, weiler_atherton}`.

mod contains;
pub mod random;
mod shape;
mod types;
mod util;

pub use shape::{signed_area2, Polygon};
pub use types::{BBox, FillRule, GeomCfg, MAX_RAY_MARGIN};
pub use util::convex_hull;
