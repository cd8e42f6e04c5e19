use crate::math::{Point3, Real};

/// The area of the triangle `a, b, c`.
#[inline]
pub fn triangle_area(a: &Point3<Real>, b: &Point3<Real>, c: &Point3<Real>) -> Real {
    (b - a).cross(&(c - a)).norm() * 0.5
}
