use crate::math::{Real, DEFAULT_EPSILON};
use crate::query::InvalidArgument;
use crate::shape::{Plane, PlaneSide};
use crate::utils;
use arrayvec::ArrayVec;

/// Maximum number of triangles emitted on one side of the splitting plane.
const MAX_TRIANGLES_PER_SIDE: usize = 2;
/// Minimum number of attributes per vertex: its position.
const POSITION_ATTRIBUTES: usize = 3;

/// Reusable output of [`split_triangle`].
///
/// The front and back buffers are allocated once, when the `SplitTriangle` is created, and
/// are overwritten by every call to [`split_triangle`]. Their content is only meaningful
/// until the next split performed with the same instance. Each thread splitting triangles
/// concurrently needs its own instance.
///
/// Each emitted triangle occupies `3 * num_attributes` consecutive floats of its buffer,
/// with the same winding as the triangle it comes from.
#[derive(Clone, Debug)]
pub struct SplitTriangle {
    front: Vec<Real>,
    back: Vec<Real>,
    // Intersection vertices of the two edges crossing the plane.
    edge_splits: Vec<Real>,
    num_front: usize,
    num_back: usize,
    num_attributes: usize,
}

impl Default for SplitTriangle {
    /// A split buffer for triangles with positions only (9 floats per triangle).
    fn default() -> Self {
        Self::with_stride(POSITION_ATTRIBUTES)
    }
}

impl SplitTriangle {
    /// Creates a split buffer for triangles with `num_attributes` floats per vertex.
    ///
    /// The first three attributes of each vertex are its position. The remaining ones
    /// (texture coordinates, colors, etc.) are interpolated linearly on the vertices
    /// created where the plane crosses an edge.
    pub fn new(num_attributes: usize) -> Result<Self, InvalidArgument> {
        if num_attributes < POSITION_ATTRIBUTES {
            return Err(InvalidArgument::TooFewAttributes(num_attributes));
        }

        Ok(Self::with_stride(num_attributes))
    }

    fn with_stride(num_attributes: usize) -> Self {
        let side_len = MAX_TRIANGLES_PER_SIDE * 3 * num_attributes;
        Self {
            front: vec![0.0; side_len],
            back: vec![0.0; side_len],
            edge_splits: vec![0.0; 2 * num_attributes],
            num_front: 0,
            num_back: 0,
            num_attributes,
        }
    }

    /// The number of floats per vertex.
    #[inline]
    pub fn num_attributes(&self) -> usize {
        self.num_attributes
    }

    /// The number of floats per triangle.
    #[inline]
    pub fn triangle_len(&self) -> usize {
        3 * self.num_attributes
    }

    /// The number of triangles emitted in front of the plane.
    #[inline]
    pub fn num_front(&self) -> usize {
        self.num_front
    }

    /// The number of triangles emitted behind the plane.
    #[inline]
    pub fn num_back(&self) -> usize {
        self.num_back
    }

    /// The total number of emitted triangles.
    ///
    /// This is 1 if the triangle was not split, 2 if the plane went through one of its
    /// vertices and the opposite edge, and 3 otherwise.
    #[inline]
    pub fn total(&self) -> usize {
        self.num_front + self.num_back
    }

    /// The triangles emitted in front of the plane, as a flat vertex buffer.
    #[inline]
    pub fn front(&self) -> &[Real] {
        &self.front[..self.num_front * self.triangle_len()]
    }

    /// The triangles emitted behind the plane, as a flat vertex buffer.
    #[inline]
    pub fn back(&self) -> &[Real] {
        &self.back[..self.num_back * self.triangle_len()]
    }

    /// The `i`-th triangle emitted in front of the plane.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.num_front()`.
    #[inline]
    pub fn front_triangle(&self, i: usize) -> &[Real] {
        let len = self.triangle_len();
        &self.front()[i * len..(i + 1) * len]
    }

    /// The `i`-th triangle emitted behind the plane.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.num_back()`.
    #[inline]
    pub fn back_triangle(&self, i: usize) -> &[Real] {
        let len = self.triangle_len();
        &self.back()[i * len..(i + 1) * len]
    }

    fn reset(&mut self) {
        self.num_front = 0;
        self.num_back = 0;
    }
}

/// A vertex of one of the two polygons resulting from the plane cut.
#[derive(Copy, Clone, Debug)]
enum CutVertex {
    /// A vertex of the input triangle.
    Original(usize),
    /// The `i`-th intersection between a triangle edge and the plane.
    EdgeSplit(usize),
}

type CutPolygon = ArrayVec<CutVertex, 4>;

/// Splits a triangle by a plane, using [`DEFAULT_EPSILON`] to classify its vertices.
///
/// See [`split_triangle_with_epsilon`] for details.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use intersector::math::Vector3;
/// use intersector::query::{split_triangle, SplitTriangle};
/// use intersector::shape::Plane;
///
/// let plane = Plane::new(Vector3::x_axis(), 0.0);
/// let mut split = SplitTriangle::default();
/// let triangle = [-10.0, 0.0, 10.0, 10.0, 0.0, 0.0, -10.0, 0.0, -10.0];
///
/// split_triangle(&triangle, &plane, &mut split).unwrap();
/// assert_eq!(split.num_front(), 1);
/// assert_eq!(split.num_back(), 2);
/// assert_eq!(split.total(), 3);
/// # }
/// ```
pub fn split_triangle(
    triangle: &[Real],
    plane: &Plane,
    split: &mut SplitTriangle,
) -> Result<(), InvalidArgument> {
    split_triangle_with_epsilon(triangle, plane, DEFAULT_EPSILON, split)
}

/// Splits a triangle by a plane into the triangles lying in front of it and behind it.
///
/// The `triangle` is a flat buffer of three vertices with `split.num_attributes()` floats
/// each. Vertices closer than `epsilon` to the plane are considered to lie on it.
///
/// # Result
///
/// * If no vertex is behind the plane, the triangle is copied unchanged to the front buffer.
///   This includes triangles lying entirely on the plane.
/// * If no vertex is in front of the plane, the triangle is copied unchanged to the back buffer.
/// * Otherwise the plane cuts the triangle. The side containing a single vertex receives
///   one triangle; the other side receives the remaining quadrilateral, triangulated into
///   two triangles. If the plane passes through a vertex, that vertex is shared by the two
///   resulting pieces and each side receives one triangle.
///
/// Every emitted triangle keeps the winding of the input triangle, though its first vertex
/// may differ. The quadrilateral is always triangulated as a fan from its first vertex in
/// the input winding order; both diagonals cover the same area.
///
/// Returns an error if `triangle` does not contain exactly `3 * split.num_attributes()` floats.
/// The content of `split` is left unchanged in that case.
pub fn split_triangle_with_epsilon(
    triangle: &[Real],
    plane: &Plane,
    epsilon: Real,
    split: &mut SplitTriangle,
) -> Result<(), InvalidArgument> {
    let stride = split.num_attributes;

    if triangle.len() != 3 * stride {
        return Err(InvalidArgument::TriangleLength {
            expected: 3 * stride,
            found: triangle.len(),
        });
    }

    split.reset();

    let dists: [Real; 3] =
        core::array::from_fn(|i| plane.signed_distance(&utils::flat_point3(triangle, i, stride)));
    let sides = dists.map(|d| PlaneSide::from_signed_distance(d, epsilon));

    // Exit early if the triangle isn’t crossed by the plane.
    if !sides.contains(&PlaneSide::Back) {
        split.front[..triangle.len()].copy_from_slice(triangle);
        split.num_front = 1;
        return Ok(());
    }

    if !sides.contains(&PlaneSide::Front) {
        split.back[..triangle.len()].copy_from_slice(triangle);
        split.num_back = 1;
        return Ok(());
    }

    log::trace!("Splitting triangle with vertex sides {:?}.", sides);

    // Walk along the triangle boundary and distribute its vertices, as well as the
    // intersections of its edges with the plane, between the two sides.
    let mut front_poly = CutPolygon::new();
    let mut back_poly = CutPolygon::new();
    let mut num_edge_splits = 0;

    for ia in 0..3 {
        let ib = (ia + 1) % 3;

        match sides[ia] {
            PlaneSide::Front => front_poly.push(CutVertex::Original(ia)),
            PlaneSide::Back => back_poly.push(CutVertex::Original(ia)),
            PlaneSide::OnPlane => {
                front_poly.push(CutVertex::Original(ia));
                back_poly.push(CutVertex::Original(ia));
            }
        }

        let crossing = matches!(
            (sides[ia], sides[ib]),
            (PlaneSide::Front, PlaneSide::Back) | (PlaneSide::Back, PlaneSide::Front)
        );

        if crossing {
            // The vertices are strictly on both sides so the denominator is at least 2 * epsilon.
            let t = dists[ia] / (dists[ia] - dists[ib]);
            let out = &mut split.edge_splits[num_edge_splits * stride..][..stride];
            utils::lerp_vertex(
                &triangle[ia * stride..][..stride],
                &triangle[ib * stride..][..stride],
                t,
                out,
            );
            front_poly.push(CutVertex::EdgeSplit(num_edge_splits));
            back_poly.push(CutVertex::EdgeSplit(num_edge_splits));
            num_edge_splits += 1;
        }
    }

    let SplitTriangle {
        front,
        back,
        edge_splits,
        num_front,
        num_back,
        ..
    } = split;
    *num_front = triangulate_fan(&front_poly, triangle, edge_splits, stride, front);
    *num_back = triangulate_fan(&back_poly, triangle, edge_splits, stride, back);

    Ok(())
}

/// Writes the triangle fan of `poly` rooted at its first vertex into `out`.
///
/// Returns the number of triangles written.
fn triangulate_fan(
    poly: &CutPolygon,
    triangle: &[Real],
    edge_splits: &[Real],
    stride: usize,
    out: &mut [Real],
) -> usize {
    let vertex = |v: CutVertex| match v {
        CutVertex::Original(i) => &triangle[i * stride..][..stride],
        CutVertex::EdgeSplit(i) => &edge_splits[i * stride..][..stride],
    };

    let num_triangles = poly.len().saturating_sub(2);
    let mut out_vertices = out.chunks_exact_mut(stride);

    for k in 1..=num_triangles {
        for v in [poly[0], poly[k], poly[k + 1]] {
            if let Some(dest) = out_vertices.next() {
                dest.copy_from_slice(vertex(v));
            }
        }
    }

    num_triangles
}
