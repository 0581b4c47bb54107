//! Directed line queries
//!
//! A ray is created per query, handed to each shape's intersection test,
//! and discarded once the caller has read the results.

use super::GeometryError;
use crate::foundation::math::{Dir2, Point2, Unit, Vec2, SINGULAR_EPSILON};

/// A directed query line: origin plus unit direction, parametrized by
/// non-negative world distance.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    origin: Point2,
    direction: Dir2,
}

impl Ray {
    /// Creates a ray from an origin and a direction of any non-zero magnitude.
    ///
    /// The direction is normalized here so the ray parameter measures true
    /// world distance regardless of the magnitude the caller passed in.
    ///
    /// # Errors
    /// Returns [`GeometryError::ZeroDirection`] if the direction has
    /// (numerically) zero length.
    pub fn new(origin: Point2, direction: Vec2) -> Result<Self, GeometryError> {
        match Unit::try_new(direction, SINGULAR_EPSILON) {
            Some(direction) => Ok(Self { origin, direction }),
            None => Err(GeometryError::ZeroDirection),
        }
    }

    /// The origin point of the ray in world space
    pub fn origin(&self) -> Point2 {
        self.origin
    }

    /// The unit direction of the ray
    pub fn direction(&self) -> Vec2 {
        self.direction.into_inner()
    }

    /// Get a point along the ray at distance `t`
    pub fn point_at(&self, t: f64) -> Point2 {
        self.origin + self.direction.into_inner() * t
    }
}
