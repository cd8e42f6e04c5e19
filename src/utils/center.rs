use crate::math::{Point2, Real};
use crate::utils::flat_points2;

/// Computes the geometric center (centroid) of a flat `[x0, y0, x1, y1, ...]` list of 2D points.
///
/// The center is calculated by averaging all the point coordinates. All points are weighted
/// equally, so for a convex polygon this is a point of its interior, but not necessarily its
/// center of mass.
///
/// # Panics
///
/// Panics if `coords` contains less than one point.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use intersector::utils::center2;
///
/// let square = [0.0, 0.0, 2.0, 0.0, 2.0, 2.0, 0.0, 2.0];
/// let c = center2(&square);
///
/// assert!((c.x - 1.0).abs() < 1e-6);
/// assert!((c.y - 1.0).abs() < 1e-6);
/// # }
/// ```
#[inline]
pub fn center2(coords: &[Real]) -> Point2<Real> {
    let count = coords.len() / 2;
    assert!(count != 0, "Cannot compute the center of less than 1 point.");

    let denom: Real = na::convert::<f64, Real>(1.0 / (count as f64));

    let mut points = flat_points2(coords);
    let mut res = points.next().unwrap() * denom;

    for pt in points {
        res += pt.coords * denom;
    }

    res
}
