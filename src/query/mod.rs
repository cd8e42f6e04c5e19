//! Non-persistent geometric queries.
//!
//! * [`query::split_triangle()`](split_triangle) to cut a triangle by a plane.
//! * [`query::overlap_convex_polygons()`](overlap_convex_polygons) to test two convex polygons
//!   for overlap and compute the translation separating them.
//!
//! Both operations have a `_with_epsilon` variant taking an explicit tolerance instead of
//! [`DEFAULT_EPSILON`](crate::math::DEFAULT_EPSILON).

pub use self::error::InvalidArgument;
pub use self::sat::{
    overlap_convex_polygons, overlap_convex_polygons_with_epsilon, MinimumTranslationVector,
};
pub use self::split::{split_triangle, split_triangle_with_epsilon, SplitTriangle};

mod error;
pub mod sat;
pub mod split;
