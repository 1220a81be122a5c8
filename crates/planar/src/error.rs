//! Precondition violations reported by validating constructors and checked entry points.
//!
//! Geometric degeneracies that are valid outcomes (fully clipped segment, empty
//! intersection) are values, never errors.

use thiserror::Error;

/// Which argument of a two-polygon operation violated a precondition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Subject,
    Cutter,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Subject => f.write_str("subject"),
            Role::Cutter => f.write_str("cutter"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeomError {
    /// A polygon needs at least three vertices.
    #[error("polygon needs at least 3 points, got {count}")]
    TooFewPoints { count: usize },

    /// Two input vertices coincide.
    #[error("points {first} and {second} coincide at ({x}, {y})")]
    DuplicatePoint {
        first: usize,
        second: usize,
        x: i64,
        y: i64,
    },

    /// Every input vertex lies on one line.
    #[error("all points are collinear")]
    Collinear,

    /// The operation requires a simple (non self-intersecting) polygon.
    #[error("{role} polygon is not simple")]
    NotSimple { role: Role },

    /// A vertex of one polygon touches the boundary of the other.
    #[error("{role} vertex {index} lies on the other polygon's boundary")]
    VertexOnEdge { role: Role, index: usize },

    /// The operation requires a convex polygon.
    #[error("clip polygon is not convex")]
    NotConvex,
}
