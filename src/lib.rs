/*!
intersector
========

**intersector** is a small geometric kernel written with the rust programming
language. It provides two primitives used by 2D/3D engines:

* splitting a triangle by a plane into its front and back fragments, see
  [`query::split_triangle`],
* testing two convex polygons for overlap and computing the minimum translation
  vector separating them, see [`query::overlap_convex_polygons`].

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![deny(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point2, Point3, UnitVector2, UnitVector3, Vector2, Vector3};

    /// The default tolerance used for geometric classifications.
    ///
    /// Points closer than this to a plane are considered to lie on it, and polygon
    /// edges shorter than this do not produce separating axes.
    pub const DEFAULT_EPSILON: Real = 1.0e-6;
}
