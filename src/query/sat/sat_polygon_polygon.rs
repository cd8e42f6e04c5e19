use crate::math::{Point2, Real, UnitVector2, Vector2, DEFAULT_EPSILON};
use crate::query::InvalidArgument;
use crate::utils;
use na::Unit;

/// The smallest translation separating two overlapping convex polygons.
///
/// Moving the first polygon given to [`overlap_convex_polygons`] by `normal * depth` leaves
/// the two polygons touching without overlapping.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MinimumTranslationVector {
    /// The unit direction the first polygon must be moved along.
    pub normal: Vector2<Real>,
    /// The distance the first polygon must be moved by. Never negative.
    pub depth: Real,
}

impl Default for MinimumTranslationVector {
    fn default() -> Self {
        Self {
            normal: Vector2::zeros(),
            depth: 0.0,
        }
    }
}

impl MinimumTranslationVector {
    /// The translation to apply to the first polygon: `normal * depth`.
    #[inline]
    pub fn translation(&self) -> Vector2<Real> {
        self.normal * self.depth
    }
}

/// Tests two convex polygons for overlap using [`DEFAULT_EPSILON`] as tolerance.
///
/// See [`overlap_convex_polygons_with_epsilon`] for details.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use intersector::query::{overlap_convex_polygons, MinimumTranslationVector};
///
/// let square = [0.0, 0.0, 16.0, 0.0, 16.0, 16.0, 0.0, 16.0];
/// let triangle = [14.0, 4.0, 14.1, 12.0, 22.0, 8.0];
/// let mut mtv = MinimumTranslationVector::default();
///
/// assert!(overlap_convex_polygons(&triangle, &square, Some(&mut mtv)).unwrap());
/// // The triangle must be pushed to the right.
/// assert!(mtv.normal.x > 0.0);
/// assert!((mtv.depth - 2.0).abs() < 1.0e-3);
/// # }
/// ```
pub fn overlap_convex_polygons(
    poly1: &[Real],
    poly2: &[Real],
    mtv: Option<&mut MinimumTranslationVector>,
) -> Result<bool, InvalidArgument> {
    overlap_convex_polygons_with_epsilon(poly1, poly2, DEFAULT_EPSILON, mtv)
}

/// Tests two convex polygons for overlap with the Separating Axis Theorem.
///
/// Both polygons are flat `[x0, y0, x1, y1, ...]` lists of at least three vertices with a
/// consistent winding. Convexity is not checked: the result is unspecified for concave or
/// degenerate polygons.
///
/// The candidate axes are the edge normals of both polygons. Edges shorter than `epsilon` are
/// skipped. Polygons whose projections only share an endpoint are considered overlapping,
/// with a zero depth.
///
/// If the polygons overlap and `mtv` is given, it is set to the smallest translation moving
/// `poly1` out of `poly2`. On each axis the push-out direction is taken from the relative
/// position of the polygon centers rather than from the projected extents, and the depth is
/// the distance needed along that direction for the projections to stop overlapping.
/// If the polygons do not overlap, `mtv` is left untouched.
pub fn overlap_convex_polygons_with_epsilon(
    poly1: &[Real],
    poly2: &[Real],
    epsilon: Real,
    mtv: Option<&mut MinimumTranslationVector>,
) -> Result<bool, InvalidArgument> {
    check_polygon(poly1)?;
    check_polygon(poly2)?;

    // Points from the center of `poly2` toward the center of `poly1`.
    let center_dir = utils::center2(poly1) - utils::center2(poly2);
    let mut best = MinimumTranslationVector {
        normal: Vector2::zeros(),
        depth: Real::MAX,
    };

    for axis in edge_normals(poly1, epsilon).chain(edge_normals(poly2, epsilon)) {
        let (min1, max1) = project_on_axis(poly1, &axis);
        let (min2, max2) = project_on_axis(poly2, &axis);

        if max1 < min2 || max2 < min1 {
            return Ok(false);
        }

        // Distance to move `poly1` along `axis` (resp. `-axis`) to stop the overlap.
        let forward = max2 - min1;
        let backward = max1 - min2;
        let along = center_dir.dot(&axis);
        let (normal, depth) = if along > epsilon || (along >= -epsilon && forward <= backward) {
            (axis.into_inner(), forward)
        } else {
            (-axis.into_inner(), backward)
        };

        if depth < best.depth {
            best.normal = normal;
            best.depth = depth;
        }
    }

    if let Some(mtv) = mtv {
        // Only degenerate polygons can skip every axis.
        if best.depth != Real::MAX {
            *mtv = best;
        }
    }

    Ok(true)
}

fn check_polygon(coords: &[Real]) -> Result<(), InvalidArgument> {
    if coords.len() % 2 != 0 {
        return Err(InvalidArgument::OddPolygonLength(coords.len()));
    }

    if coords.len() < 6 {
        return Err(InvalidArgument::TooFewVertices(coords.len() / 2));
    }

    Ok(())
}

/// The unit normals of the edges of a polygon, skipping its degenerate edges.
fn edge_normals(coords: &[Real], epsilon: Real) -> impl Iterator<Item = UnitVector2<Real>> + '_ {
    let count = coords.len() / 2;

    (0..count).filter_map(move |i| {
        let a = utils::flat_point2(coords, i);
        let b = utils::flat_point2(coords, (i + 1) % count);
        let dir = b - a;
        let normal = Unit::try_new(Vector2::new(dir.y, -dir.x), epsilon);

        if normal.is_none() {
            log::debug!(
                "Skipping the separating axis of the degenerate polygon edge {}: {:?} -> {:?}.",
                i,
                a,
                b
            );
        }

        normal
    })
}

/// The extents `(min, max)` of the projection of a polygon on `axis`.
fn project_on_axis(coords: &[Real], axis: &UnitVector2<Real>) -> (Real, Real) {
    utils::flat_points2(coords)
        .map(|pt: Point2<Real>| pt.coords.dot(axis))
        .fold((Real::MAX, -Real::MAX), |(min, max), proj| {
            (min.min(proj), max.max(proj))
        })
}
