//! Shape identity, metadata, and kind dispatch
//!
//! Shapes form a closed variant set with the intersection logic dispatched
//! by a match per kind rather than virtual methods on a base type. Adding a
//! shape kind means adding a variant and its match arm; the query layer
//! never switches on kind.

use serde::{Deserialize, Serialize};

use super::{Circle, Polygon, Ray};

/// Opaque identity of a world shape
///
/// The geometry engine reads position and parametrization from shapes but
/// never owns them; this id is the handle that hit results carry back to
/// the entity layer. Its total order doubles as the deterministic tie-break
/// key for equal hit distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShapeId(u32);

impl ShapeId {
    /// Create a shape id from a raw entity id
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw id
    pub fn id(self) -> u32 {
        self.0
    }
}

/// Material metadata describing a shape's substance (e.g. "stone")
///
/// Irrelevant to the intersection math, carried through as payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialTag(String);

impl MaterialTag {
    /// Create a tag from a material name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The material name
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// World shape kinds (closed variant set)
#[derive(Debug, Clone)]
pub enum Shape {
    /// A circular obstacle
    Circle(Circle),
    /// A polygonal outline, possibly with holes
    Polygon(Polygon),
}

impl Shape {
    /// Distance from the ray origin to the nearest forward intersection
    /// with this shape, or `None` on a miss
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f64> {
        match self {
            Self::Circle(circle) => circle.intersect_ray(ray),
            Self::Polygon(polygon) => polygon.intersect_ray(ray),
        }
    }

    /// Material metadata, for kinds that carry it
    pub fn material(&self) -> Option<&MaterialTag> {
        match self {
            Self::Circle(_) => None,
            Self::Polygon(polygon) => Some(polygon.material()),
        }
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Self::Polygon(polygon)
    }
}
