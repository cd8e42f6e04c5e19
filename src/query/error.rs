/// Error returned when the shape of an input buffer does not match what a query expects.
///
/// Only the cheap length checks are performed. Geometric preconditions (convexity, winding,
/// non-degenerate triangles) are the caller's responsibility and are never validated.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use intersector::math::Vector3;
/// use intersector::query::{split_triangle, InvalidArgument, SplitTriangle};
/// use intersector::shape::Plane;
///
/// let plane = Plane::new(Vector3::x_axis(), 0.0);
/// let mut split = SplitTriangle::default();
///
/// // Only two vertices.
/// let res = split_triangle(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0], &plane, &mut split);
/// assert_eq!(res, Err(InvalidArgument::TriangleLength { expected: 9, found: 6 }));
/// # }
/// ```
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum InvalidArgument {
    /// The triangle buffer does not contain exactly three vertices.
    #[error("a triangle must have exactly {expected} floats, found {found}")]
    TriangleLength {
        /// Three times the number of attributes per vertex.
        expected: usize,
        /// The length of the given triangle buffer.
        found: usize,
    },
    /// Vertices need at least three attributes to store their position.
    #[error("vertices need at least 3 attributes for their position, found {0}")]
    TooFewAttributes(usize),
    /// A flat 2D polygon has an odd number of coordinates.
    #[error("a polygon must have an even number of coordinates, found {0}")]
    OddPolygonLength(usize),
    /// A polygon has less than three vertices.
    #[error("a polygon must have at least 3 vertices, found {0}")]
    TooFewVertices(usize),
}
