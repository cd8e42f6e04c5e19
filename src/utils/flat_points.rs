//! Views over flat vertex buffers.
//!
//! Polygons are stored as `[x0, y0, x1, y1, ...]` and triangles as three consecutive
//! vertices of `stride` floats each, the first three floats being the position.

use crate::math::{Point2, Point3, Real};

/// The `i`-th point of a flat list of 2D coordinates.
#[inline]
pub fn flat_point2(coords: &[Real], i: usize) -> Point2<Real> {
    Point2::new(coords[i * 2], coords[i * 2 + 1])
}

/// Iterates through the points of a flat list of 2D coordinates.
///
/// A trailing odd coordinate is ignored.
#[inline]
pub fn flat_points2(coords: &[Real]) -> impl ExactSizeIterator<Item = Point2<Real>> + '_ {
    coords
        .chunks_exact(2)
        .map(|xy| Point2::new(xy[0], xy[1]))
}

/// The position of the `i`-th vertex of a flat vertex buffer with `stride` floats per vertex.
#[inline]
pub fn flat_point3(vertices: &[Real], i: usize, stride: usize) -> Point3<Real> {
    let start = i * stride;
    Point3::new(vertices[start], vertices[start + 1], vertices[start + 2])
}

/// Linearly interpolates every attribute of two vertices: `out = a + (b - a) * t`.
///
/// `a`, `b`, and `out` must have the same length.
#[inline]
pub fn lerp_vertex(a: &[Real], b: &[Real], t: Real, out: &mut [Real]) {
    for ((out, a), b) in out.iter_mut().zip(a).zip(b) {
        *out = a + t * (b - a);
    }
}
