//! Math utilities and types
//!
//! Provides the fundamental 2D math types for the simulation engine.

pub use nalgebra::{Unit, Vector2};

/// 2D vector type
pub type Vec2 = Vector2<f64>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f64>;

/// Unit-length 2D direction
pub type Dir2 = Unit<Vec2>;

/// Norm below which a vector is treated as zero and a 2x2 edge system
/// as singular
pub const SINGULAR_EPSILON: f64 = 1e-12;

/// 2D cross product (perp-dot product) of two vectors
pub fn perp_dot(a: &Vec2, b: &Vec2) -> f64 {
    a.x * b.y - a.y * b.x
}
