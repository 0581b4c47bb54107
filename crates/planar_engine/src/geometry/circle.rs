//! Circular obstacles
//!
//! The ray test substitutes the ray parametrization into the circle
//! equation and solves the resulting quadratic in closed form.

use super::{GeometryError, Ray};
use crate::foundation::math::Point2;

/// A circular obstacle: mutable center, strictly positive radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a circle with the given center and radius.
    ///
    /// # Errors
    /// Returns [`GeometryError::InvalidRadius`] unless `radius > 0`, so the
    /// radius invariant holds for the whole lifetime of the value.
    pub fn new(center: Point2, radius: f64) -> Result<Self, GeometryError> {
        if radius > 0.0 {
            Ok(Self { center, radius })
        } else {
            Err(GeometryError::InvalidRadius { radius })
        }
    }

    /// The center position in world space
    pub fn center(&self) -> Point2 {
        self.center
    }

    /// Reposition the circle (owner-level mutation between queries)
    pub fn set_center(&mut self, center: Point2) {
        self.center = center;
    }

    /// The circle radius
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Distance from the ray origin to the nearest forward intersection
    /// with the circle boundary, or `None` if the ray misses.
    ///
    /// Solves `|O + t*D - C|^2 = r^2` for t. The ray direction is unit
    /// length, so the quadratic coefficient a is 1 and t is already a world
    /// distance. Roots behind the origin are ignored; from inside the
    /// circle only the exit root is forward, and that exit is reported.
    /// A root of exactly 0 (origin on the boundary) counts as a hit.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f64> {
        let oc = ray.origin() - self.center;
        let d = ray.direction();

        let b = 2.0 * oc.dot(&d);
        let c = oc.dot(&oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * c;
        if discriminant < 0.0 {
            return None;
        }

        // Tangent rays (discriminant == 0) collapse both roots into one.
        let sqrt_discriminant = discriminant.sqrt();
        let t1 = (-b - sqrt_discriminant) / 2.0;
        let t2 = (-b + sqrt_discriminant) / 2.0;

        if t1 >= 0.0 {
            Some(t1)
        } else if t2 >= 0.0 {
            Some(t2)
        } else {
            None
        }
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

    #[test]
    fn test_radius_must_be_positive() {
        assert_eq!(
            Circle::new(Point2::origin(), 0.0).unwrap_err(),
            GeometryError::InvalidRadius { radius: 0.0 }
        );
        assert!(Circle::new(Point2::origin(), -1.5).is_err());
    }

    #[test]
    fn test_secant_hit_from_outside() {
        let circle = Circle::new(Point2::new(10.0, 0.0), 2.0).unwrap();
        let t = circle.intersect_ray(&ray(0.0, 1.0, 1.0, 0.0)).unwrap();

        assert_abs_diff_eq!(t, 8.267_949_19, epsilon = 1e-5);
    }

    #[test]
    fn test_hit_through_overlapping_circle() {
        let circle = Circle::new(Point2::new(0.0, 0.0), 2.0).unwrap();
        let t = circle.intersect_ray(&ray(0.0, 1.0, 1.0, 0.0)).unwrap();

        assert_abs_diff_eq!(t, 1.732_050_81, epsilon = 1e-5);
    }

    #[test]
    fn test_tangent_single_hit() {
        let circle = Circle::new(Point2::new(10.0, 0.0), 2.0).unwrap();
        let t = circle.intersect_ray(&ray(0.0, 2.0, 1.0, 0.0)).unwrap();

        assert_abs_diff_eq!(t, 10.0, epsilon = 1e-5);
    }

    #[test]
    fn test_line_misses_entirely() {
        let circle = Circle::new(Point2::new(0.0, 10.0), 2.0).unwrap();
        assert!(circle.intersect_ray(&ray(2.5, 0.0, 0.0, 1.0)).is_none());
    }

    #[test]
    fn test_ray_facing_away_misses() {
        let circle = Circle::new(Point2::new(10.0, 0.0), 2.0).unwrap();
        assert!(circle.intersect_ray(&ray(0.0, 0.0, -1.0, 0.0)).is_none());
    }

    #[test]
    fn test_origin_inside_reports_exit() {
        let circle = Circle::new(Point2::new(1.0, 0.0), 2.0).unwrap();
        let t = circle.intersect_ray(&ray(0.0, 0.0, 1.0, 0.0)).unwrap();

        assert_abs_diff_eq!(t, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_origin_on_boundary_facing_out() {
        // Origin exactly on the boundary, pointing away: the near root is 0
        // and is reported as a distance-0 hit.
        let circle = Circle::new(Point2::new(0.0, 0.0), 2.0).unwrap();
        let t = circle.intersect_ray(&ray(2.0, 0.0, 1.0, 0.0)).unwrap();

        assert_abs_diff_eq!(t, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_unnormalized_direction_same_world_distance() {
        let circle = Circle::new(Point2::new(10.0, 0.0), 2.0).unwrap();
        let t = circle.intersect_ray(&ray(0.0, 1.0, 250.0, 0.0)).unwrap();

        assert_abs_diff_eq!(t, 8.267_949_19, epsilon = 1e-5);
    }
}
