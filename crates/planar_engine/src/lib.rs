//! # Planar Engine
//!
//! A 2D top-down simulation engine built around ray-cast spatial queries.
//!
//! ## Features
//!
//! - **Ray Casting**: Closed-form ray/circle and ray/polygon intersection
//! - **Shape Dispatch**: Closed variant set, no inheritance hierarchies
//! - **Ordered Hits**: Deterministic nearest-first hit collections
//! - **Builder API**: Validated staged construction for polygon geometry
//!
//! ## Quick Start
//!
//! ```rust
//! use planar_engine::prelude::*;
//!
//! fn main() -> Result<(), GeometryError> {
//!     let obstacle = Shape::from(Circle::new(Point2::new(10.0, 0.0), 2.0)?);
//!     let ray = Ray::new(Point2::new(0.0, 1.0), Vec2::new(1.0, 0.0))?;
//!
//!     let hits = cast_ray(&ray, [(ShapeId::new(0), &obstacle)]);
//!     if let Some(hit) = hits.first() {
//!         println!("nearest obstacle at distance {:.3}", hit.distance);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod foundation;
pub mod geometry;
pub mod messages;
pub mod query;
pub mod scene;

pub use geometry::GeometryError;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        foundation::math::{Point2, Vec2},
        geometry::{
            Circle, GeometryError, MaterialTag, Polygon, PolygonBuilder, Ray, Shape, ShapeId,
        },
        query::{cast_ray, HitCollection, RayHit},
    };
}
