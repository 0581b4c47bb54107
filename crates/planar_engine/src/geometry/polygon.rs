//! Polygonal world geometry
//!
//! Polygons are built once through [`PolygonBuilder`] and treated as
//! immutable geometry afterwards. A polygon is an outer vertex ring plus
//! optional hole rings; every ring is implicitly closed (the last vertex
//! connects back to the first).

use super::shape::MaterialTag;
use super::{GeometryError, Ray};
use crate::foundation::math::{perp_dot, Point2, SINGULAR_EPSILON};

/// Minimum vertex count for a valid ring
const MIN_RING_VERTICES: usize = 3;

/// A polygon: outer boundary ring, optional hole rings, material metadata
///
/// Concave outlines are fine. Consecutive duplicate vertices are a caller
/// error: the geometry is undefined but nothing panics.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    outer: Vec<Point2>,
    holes: Vec<Vec<Point2>>,
    material: MaterialTag,
}

impl Polygon {
    /// Start building a polygon
    pub fn builder() -> PolygonBuilder {
        PolygonBuilder::new()
    }

    /// The outer boundary ring
    pub fn outer(&self) -> &[Point2] {
        &self.outer
    }

    /// The hole rings (possibly empty)
    pub fn holes(&self) -> &[Vec<Point2>] {
        &self.holes
    }

    /// Material metadata attached at build time
    pub fn material(&self) -> &MaterialTag {
        &self.material
    }

    /// Distance from the ray origin to the nearest forward crossing of any
    /// edge of any ring, or `None` if the ray misses every edge.
    ///
    /// Hole rings are tested as closed polylines exactly like the outer
    /// ring; the nearest crossing among all rings wins. A ray may cross a
    /// concave outline several times but only the minimum distance is
    /// reported, mirroring the circle contract of "distance to the shape".
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f64> {
        let mut nearest: Option<f64> = None;
        for ring in std::iter::once(&self.outer).chain(self.holes.iter()) {
            if let Some(t) = intersect_ring(ray, ring) {
                nearest = Some(nearest.map_or(t, |n: f64| n.min(t)));
            }
        }
        nearest
    }
}

/// Nearest forward crossing of one closed ring
fn intersect_ring(ray: &Ray, ring: &[Point2]) -> Option<f64> {
    let mut nearest: Option<f64> = None;
    for i in 0..ring.len() {
        let v0 = ring[i];
        let v1 = ring[(i + 1) % ring.len()];
        if let Some(t) = intersect_edge(ray, v0, v1) {
            nearest = Some(nearest.map_or(t, |n: f64| n.min(t)));
        }
    }
    nearest
}

/// Ray-segment test: solve `O + t*D = V0 + s*(V1 - V0)` for (t, s).
///
/// A valid crossing needs `t >= 0` (in front of the origin) and
/// `s in [0, 1]` (inside the segment). A singular system means the ray is
/// parallel to the edge; that edge contributes no hit, collinear overlap
/// included.
fn intersect_edge(ray: &Ray, v0: Point2, v1: Point2) -> Option<f64> {
    let d = ray.direction();
    let e = v1 - v0;

    let denom = perp_dot(&d, &e);
    if denom.abs() < SINGULAR_EPSILON {
        return None;
    }

    let diff = v0 - ray.origin();
    let t = perp_dot(&diff, &e) / denom;
    let s = perp_dot(&diff, &d) / denom;

    if t >= 0.0 && (0.0..=1.0).contains(&s) {
        Some(t)
    } else {
        None
    }
}

/// Staged construction for [`Polygon`]
///
/// # Examples
/// ```
/// use planar_engine::geometry::{MaterialTag, Polygon};
/// use planar_engine::foundation::math::Point2;
///
/// let wall = Polygon::builder()
///     .vertex(Point2::new(0.0, 0.0))
///     .vertex(Point2::new(4.0, 0.0))
///     .vertex(Point2::new(4.0, 1.0))
///     .vertex(Point2::new(0.0, 1.0))
///     .material(MaterialTag::new("stone"))
///     .build()
///     .unwrap();
/// assert_eq!(wall.outer().len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PolygonBuilder {
    outer: Vec<Point2>,
    holes: Vec<Vec<Point2>>,
    material: MaterialTag,
}

impl PolygonBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one vertex to the outer ring
    #[must_use]
    pub fn vertex(mut self, point: Point2) -> Self {
        self.outer.push(point);
        self
    }

    /// Append several vertices to the outer ring
    #[must_use]
    pub fn vertices(mut self, points: impl IntoIterator<Item = Point2>) -> Self {
        self.outer.extend(points);
        self
    }

    /// Add a hole ring
    #[must_use]
    pub fn hole(mut self, ring: Vec<Point2>) -> Self {
        self.holes.push(ring);
        self
    }

    /// Set the material metadata
    #[must_use]
    pub fn material(mut self, material: MaterialTag) -> Self {
        self.material = material;
        self
    }

    /// Validate the rings and finalize an immutable polygon.
    ///
    /// # Errors
    /// Returns [`GeometryError::DegenerateRing`] if the outer ring or any
    /// hole ring has fewer than three vertices.
    pub fn build(self) -> Result<Polygon, GeometryError> {
        for ring in std::iter::once(&self.outer).chain(self.holes.iter()) {
            if ring.len() < MIN_RING_VERTICES {
                return Err(GeometryError::DegenerateRing {
                    vertices: ring.len(),
                });
            }
        }
        Ok(Polygon {
            outer: self.outer,
            holes: self.holes,
            material: self.material,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec2;
    use approx::assert_abs_diff_eq;

    fn ray(ox: f64, oy: f64, dx: f64, dy: f64) -> Ray {
        Ray::new(Point2::new(ox, oy), Vec2::new(dx, dy)).unwrap()
    }

    /// Octagonal outline used by the reference scenarios, concave at (2,1)
    fn octagon() -> Polygon {
        Polygon::builder()
            .vertices([
                Point2::new(1.0, 0.0),
                Point2::new(5.0, 0.0),
                Point2::new(6.0, 1.0),
                Point2::new(6.0, 3.0),
                Point2::new(5.0, 4.0),
                Point2::new(2.0, 4.0),
                Point2::new(1.0, 3.0),
                Point2::new(2.0, 1.0),
            ])
            .material(MaterialTag::new("stone"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_rejects_short_outer_ring() {
        let result = Polygon::builder()
            .vertex(Point2::new(0.0, 0.0))
            .vertex(Point2::new(1.0, 0.0))
            .build();

        assert_eq!(
            result.unwrap_err(),
            GeometryError::DegenerateRing { vertices: 2 }
        );
    }

    #[test]
    fn test_builder_rejects_short_hole_ring() {
        let result = Polygon::builder()
            .vertices([
                Point2::new(0.0, 0.0),
                Point2::new(4.0, 0.0),
                Point2::new(4.0, 4.0),
                Point2::new(0.0, 4.0),
            ])
            .hole(vec![Point2::new(1.0, 1.0), Point2::new(2.0, 2.0)])
            .build();

        assert_eq!(
            result.unwrap_err(),
            GeometryError::DegenerateRing { vertices: 2 }
        );
    }

    #[test]
    fn test_axis_ray_hits_left_boundary() {
        let polygon = octagon();
        let t = polygon.intersect_ray(&ray(0.0, 1.0, 1.0, 0.0)).unwrap();

        assert_abs_diff_eq!(t, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_diagonal_ray_hits_lower_left_edge() {
        let polygon = octagon();
        let t = polygon.intersect_ray(&ray(0.0, 2.0, 1.0, -1.0)).unwrap();

        assert_abs_diff_eq!(t, 1.5 * std::f64::consts::SQRT_2, epsilon = 1e-5);
    }

    #[test]
    fn test_ray_missing_every_edge() {
        let polygon = octagon();
        assert!(polygon.intersect_ray(&ray(0.0, 10.0, 1.0, 0.0)).is_none());
        assert!(polygon.intersect_ray(&ray(0.0, 1.0, -1.0, 0.0)).is_none());
    }

    #[test]
    fn test_multiple_crossings_report_minimum() {
        // A ray straight through the outline crosses entry and exit edges;
        // only the entry distance surfaces.
        let polygon = octagon();
        let t = polygon.intersect_ray(&ray(0.0, 2.0, 1.0, 0.0)).unwrap();

        // Left edge (1,3)-(2,1) crosses y=2 at x=1.5.
        assert_abs_diff_eq!(t, 1.5, epsilon = 1e-9);
    }

    #[test]
    fn test_parallel_edges_are_skipped() {
        // Ray collinear with the bottom edge: the horizontal edges are
        // singular and contribute nothing; the vertical edges still cross.
        let square = Polygon::builder()
            .vertices([
                Point2::new(1.0, 0.0),
                Point2::new(3.0, 0.0),
                Point2::new(3.0, 2.0),
                Point2::new(1.0, 2.0),
            ])
            .build()
            .unwrap();
        let t = square.intersect_ray(&ray(0.0, 0.0, 1.0, 0.0)).unwrap();

        // Both vertical edges cross y=0 at their endpoints; nearest is x=1.
        assert_abs_diff_eq!(t, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_hole_ring_contributes_hits() {
        let polygon = Polygon::builder()
            .vertices([
                Point2::new(0.0, 0.0),
                Point2::new(10.0, 0.0),
                Point2::new(10.0, 10.0),
                Point2::new(0.0, 10.0),
            ])
            .hole(vec![
                Point2::new(4.0, 4.0),
                Point2::new(6.0, 4.0),
                Point2::new(6.0, 6.0),
                Point2::new(4.0, 6.0),
            ])
            .build()
            .unwrap();

        // Ray starting inside the outer ring, heading for the hole: the
        // nearest crossing is the hole boundary at x=4, not the outer
        // boundary at x=10.
        let t = polygon.intersect_ray(&ray(2.0, 5.0, 1.0, 0.0)).unwrap();
        assert_abs_diff_eq!(t, 2.0, epsilon = 1e-9);
    }
}
