//! Geometric primitives and per-shape intersection solvers
//!
//! # Module Organization
//!
//! - [`ray`] - Directed line queries parametrized by world distance
//! - [`circle`] - Circular obstacles with closed-form root solving
//! - [`polygon`] - Vertex-ring geometry with edge-by-edge intersection
//! - [`shape`] - Shape identity, metadata, and kind dispatch
//!
//! All construction-time validation lives here: a query against valid
//! geometry never fails, it just produces no hits.

pub mod circle;
pub mod polygon;
pub mod ray;
pub mod shape;

// Re-export commonly used types
pub use circle::Circle;
pub use polygon::{Polygon, PolygonBuilder};
pub use ray::Ray;
pub use shape::{MaterialTag, Shape, ShapeId};

use thiserror::Error;

/// Errors raised while constructing geometry
///
/// All variants are construction-time rejections; they are never deferred
/// into query time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Ray direction with zero (or numerically zero) length
    #[error("ray direction must have non-zero length")]
    ZeroDirection,

    /// Circle radius that is not strictly positive
    #[error("circle radius must be positive, got {radius}")]
    InvalidRadius {
        /// The rejected radius value
        radius: f64,
    },

    /// Polygon ring with fewer than three vertices
    #[error("polygon ring needs at least 3 vertices, got {vertices}")]
    DegenerateRing {
        /// Number of vertices in the rejected ring
        vertices: usize,
    },
}
