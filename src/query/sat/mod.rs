//! Application of the Separating Axis Theorem (SAT) for overlap detection.
//!
//! # What is the Separating Axis Theorem?
//!
//! Two convex shapes do **not** intersect if and only if there exists an axis onto which the
//! projections of the two shapes do not overlap.
//!
//! For convex polygons, the only candidate axes that need to be tested are the normals of the
//! edges of both polygons:
//!
//! 1. **Project both polygons onto each axis**: find the extent (min and max) of each polygon
//!    along the axis.
//! 2. **Check for overlap**: if the projections don't overlap on any axis, the polygons don't
//!    overlap.
//! 3. **Find the minimum translation**: if all axes show overlap, the axis requiring the
//!    smallest push-out gives the minimum translation vector.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "f32")] {
//! use intersector::query::sat::overlap_convex_polygons;
//!
//! let a = [0.0, 0.0, 2.0, 0.0, 1.0, 2.0];
//! let b = [1.0, 1.0, 3.0, 1.0, 2.0, 3.0];
//! let c = [5.0, 5.0, 6.0, 5.0, 6.0, 6.0];
//!
//! assert!(overlap_convex_polygons(&a, &b, None).unwrap());
//! assert!(!overlap_convex_polygons(&a, &c, None).unwrap());
//! # }
//! ```

pub use self::sat_polygon_polygon::*;

mod sat_polygon_polygon;
