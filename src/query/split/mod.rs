//! Splitting of triangles by planes.

pub use self::split_triangle::{split_triangle, split_triangle_with_epsilon, SplitTriangle};

mod split_triangle;
