//! Ray-cast queries over heterogeneous shape collections
//!
//! The cast is pure-functional: each shape's intersection test returns an
//! optional distance and the query folds those into an ordered hit
//! collection. Shapes never see or mutate shared query state, so the engine
//! needs no internal synchronization; the caller serializes simulation
//! mutation against queries.

use log::trace;

use crate::geometry::{Ray, Shape, ShapeId};

/// A single ray hit: the shape that was crossed and the world distance
/// from the ray origin to the nearest crossing point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Identity of the shape that was hit
    pub shape: ShapeId,
    /// World distance from the ray origin, always `>= 0`
    pub distance: f64,
}

/// Hits ordered ascending by `(distance, shape id)`
///
/// The shape-id tie-break gives a deterministic total order even when two
/// distances compare exactly equal, so enumeration is reproducible across
/// runs. Volume is small (dozens of shapes per query), so inserts keep a
/// sorted vector rather than a tree.
#[derive(Debug, Clone, Default)]
pub struct HitCollection {
    hits: Vec<RayHit>,
}

impl HitCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a hit at its sorted position
    pub fn insert(&mut self, hit: RayHit) {
        let at = self.hits.partition_point(|h| {
            h.distance < hit.distance || (h.distance == hit.distance && h.shape <= hit.shape)
        });
        self.hits.insert(at, hit);
    }

    /// The globally nearest hit, if any
    pub fn first(&self) -> Option<&RayHit> {
        self.hits.first()
    }

    /// Ordered traversal, nearest first
    pub fn iter(&self) -> std::slice::Iter<'_, RayHit> {
        self.hits.iter()
    }

    /// Number of hits
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Whether the query produced no hits
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

impl<'a> IntoIterator for &'a HitCollection {
    type Item = &'a RayHit;
    type IntoIter = std::slice::Iter<'a, RayHit>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Cast a ray against a collection of shapes and collect the ordered hits.
///
/// Each shape contributes at most one hit, its nearest forward crossing.
/// "No intersection" is a normal outcome communicated by absence from the
/// result, never a failure. Runs synchronously on the calling thread; the
/// shapes must not mutate for the duration of the call.
pub fn cast_ray<'a, I>(ray: &Ray, shapes: I) -> HitCollection
where
    I: IntoIterator<Item = (ShapeId, &'a Shape)>,
{
    let mut hits = HitCollection::new();
    for (id, shape) in shapes {
        if let Some(distance) = shape.intersect_ray(ray) {
            trace!("ray hit shape {} at distance {distance:.6}", id.id());
            hits.insert(RayHit {
                shape: id,
                distance,
            });
        }
    }
    hits
}
