use approx::{abs_diff_eq, assert_relative_eq};
use intersector::math::{Point3, Real, Vector3};
use intersector::na::Unit;
use intersector::query::{split_triangle, InvalidArgument, SplitTriangle};
use intersector::shape::Plane;
use intersector::utils;

/// Checks that the triangle starting at `base[offset]` is `comp`, up to a cyclic rotation of
/// its vertices. Only positions are compared.
fn triangle_equals(base: &[Real], offset: usize, stride: usize, comp: &[Real; 9]) -> bool {
    assert!(stride >= 3);
    assert!(base.len() >= offset + 3 * stride);

    let vertex_eq = |b: usize, c: usize| {
        (0..3).all(|k| abs_diff_eq!(base[b + k], comp[c + k], epsilon = 1.0e-6))
    };

    let Some(first) = (0..3).find(|i| vertex_eq(offset + i * stride, 0)) else {
        return false;
    };

    (0..3).all(|i| vertex_eq(offset + ((first + i) % 3) * stride, i * 3))
}

/// Checks that the two triangles of `base` are `a` and `b`, in any order.
fn triangle_pair_equals(base: &[Real], a: &[Real; 9], b: &[Real; 9]) -> bool {
    (triangle_equals(base, 0, 3, a) && triangle_equals(base, 9, 3, b))
        || (triangle_equals(base, 0, 3, b) && triangle_equals(base, 9, 3, a))
}

fn x_plane() -> Plane {
    Plane::new(Vector3::x_axis(), 0.0)
}

#[test]
fn triangle_comparison_ignores_first_vertex() {
    let tri = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let rotated = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0];
    let reversed = [0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0];

    assert!(triangle_equals(&tri, 0, 3, &rotated));
    assert!(!triangle_equals(&tri, 0, 3, &reversed));
}

#[test]
fn split_triangle_all_back() {
    let mut split = SplitTriangle::default();
    let mut triangle = [-10.0, 0.0, 10.0, -1.0, 0.0, 0.0, -12.0, 0.0, 10.0];

    split_triangle(&triangle, &x_plane(), &mut split).unwrap();
    assert_eq!(split.num_back(), 1);
    assert_eq!(split.num_front(), 0);
    assert_eq!(split.total(), 1);
    assert!(triangle_equals(split.back(), 0, 3, &triangle));

    triangle[4] = 5.0;
    assert!(
        !triangle_equals(split.back(), 0, 3, &triangle),
        "Triangle comparison is broken"
    );
}

#[test]
fn split_triangle_all_front() {
    let mut split = SplitTriangle::default();
    let triangle = [10.0, 0.0, 10.0, 1.0, 0.0, 0.0, 12.0, 0.0, 10.0];

    split_triangle(&triangle, &x_plane(), &mut split).unwrap();
    assert_eq!(split.num_back(), 0);
    assert_eq!(split.num_front(), 1);
    assert_eq!(split.total(), 1);
    assert!(triangle_equals(split.front(), 0, 3, &triangle));
}

#[test]
fn split_triangle_two_back_one_front() {
    let mut split = SplitTriangle::default();
    // ABC, split points D = (0, 0, 5) and E = (0, 0, -5).
    let triangle = [-10.0, 0.0, 10.0, 10.0, 0.0, 0.0, -10.0, 0.0, -10.0];

    split_triangle(&triangle, &x_plane(), &mut split).unwrap();
    assert_eq!(split.num_back(), 2);
    assert_eq!(split.num_front(), 1);
    assert_eq!(split.total(), 3);
    assert!(triangle_equals(
        split.front(),
        0,
        3,
        &[0.0, 0.0, 5.0, 10.0, 0.0, 0.0, 0.0, 0.0, -5.0]
    ));

    // ADE, AEC
    let first = triangle_pair_equals(
        split.back(),
        &[-10.0, 0.0, 10.0, 0.0, 0.0, 5.0, 0.0, 0.0, -5.0],
        &[-10.0, 0.0, 10.0, 0.0, 0.0, -5.0, -10.0, 0.0, -10.0],
    );
    // ADC, DEC
    let second = triangle_pair_equals(
        split.back(),
        &[-10.0, 0.0, 10.0, 0.0, 0.0, 5.0, -10.0, 0.0, -10.0],
        &[0.0, 0.0, 5.0, 0.0, 0.0, -5.0, -10.0, 0.0, -10.0],
    );
    assert!(
        first ^ second,
        "Exactly one triangulation must match (first: {}, second: {})",
        first,
        second
    );
}

#[test]
fn split_triangle_two_front_one_back() {
    let mut split = SplitTriangle::default();
    let triangle = [10.0, 0.0, 10.0, -10.0, 0.0, 0.0, 10.0, 0.0, -10.0];

    split_triangle(&triangle, &x_plane(), &mut split).unwrap();
    assert_eq!(split.num_back(), 1);
    assert_eq!(split.num_front(), 2);
    assert_eq!(split.total(), 3);
    assert!(triangle_equals(
        split.back(),
        0,
        3,
        &[0.0, 0.0, 5.0, -10.0, 0.0, 0.0, 0.0, 0.0, -5.0]
    ));

    let first = triangle_pair_equals(
        split.front(),
        &[10.0, 0.0, 10.0, 0.0, 0.0, 5.0, 0.0, 0.0, -5.0],
        &[10.0, 0.0, 10.0, 0.0, 0.0, -5.0, 10.0, 0.0, -10.0],
    );
    let second = triangle_pair_equals(
        split.front(),
        &[10.0, 0.0, 10.0, 0.0, 0.0, 5.0, 10.0, 0.0, -10.0],
        &[0.0, 0.0, 5.0, 0.0, 0.0, -5.0, 10.0, 0.0, -10.0],
    );
    assert!(
        first ^ second,
        "Exactly one triangulation must match (first: {}, second: {})",
        first,
        second
    );
}

#[test]
fn split_triangle_through_vertex() {
    let mut split = SplitTriangle::default();
    // The plane contains the first vertex and crosses the opposite edge at the origin.
    let triangle = [0.0, 0.0, 10.0, 10.0, 0.0, 0.0, -10.0, 0.0, 0.0];

    split_triangle(&triangle, &x_plane(), &mut split).unwrap();
    assert_eq!(split.num_front(), 1);
    assert_eq!(split.num_back(), 1);
    assert_eq!(split.total(), 2);
    assert!(triangle_equals(
        split.front(),
        0,
        3,
        &[0.0, 0.0, 10.0, 10.0, 0.0, 0.0, 0.0, 0.0, 0.0]
    ));
    assert!(triangle_equals(
        split.back(),
        0,
        3,
        &[0.0, 0.0, 10.0, 0.0, 0.0, 0.0, -10.0, 0.0, 0.0]
    ));
}

#[test]
fn split_triangle_touching_plane() {
    let mut split = SplitTriangle::default();

    // One vertex on the plane, the others behind it.
    let touching = [0.0, 0.0, 0.0, -5.0, 0.0, 5.0, -5.0, 0.0, -5.0];
    split_triangle(&touching, &x_plane(), &mut split).unwrap();
    assert_eq!((split.num_front(), split.num_back()), (0, 1));
    assert_eq!(split.back(), &touching);

    // Coplanar triangles are kept in front.
    let coplanar = [0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
    split_triangle(&coplanar, &x_plane(), &mut split).unwrap();
    assert_eq!((split.num_front(), split.num_back()), (1, 0));
    assert_eq!(split.front(), &coplanar);
}

#[test]
fn split_triangle_interpolates_attributes() {
    let mut split = SplitTriangle::new(5).unwrap();
    // Positions followed by two texture coordinates.
    #[rustfmt::skip]
    let triangle = [
        -10.0, 0.0, 10.0, 0.0, 0.0,
        10.0, 0.0, 0.0, 1.0, 2.0,
        -10.0, 0.0, -10.0, 0.0, 4.0,
    ];
    #[rustfmt::skip]
    let expected_front = [
        0.0, 0.0, 5.0, 0.5, 1.0,
        10.0, 0.0, 0.0, 1.0, 2.0,
        0.0, 0.0, -5.0, 0.5, 3.0,
    ];

    split_triangle(&triangle, &x_plane(), &mut split).unwrap();
    assert_eq!(split.num_front(), 1);
    assert_eq!(split.num_back(), 2);
    assert_eq!(split.back().len(), 30);

    for (found, expected) in split.front_triangle(0).iter().zip(expected_front.iter()) {
        assert_relative_eq!(*found, *expected, epsilon = 1.0e-6);
    }

    // Positions only are not enough for this buffer.
    assert_eq!(
        split_triangle(&triangle[..9], &x_plane(), &mut split),
        Err(InvalidArgument::TriangleLength {
            expected: 15,
            found: 9
        })
    );
}

fn random_point(rng: &mut oorandom::Rand32, extent: Real) -> Point3<Real> {
    let mut coord = || (rng.rand_float() as Real * 2.0 - 1.0) * extent;
    Point3::new(coord(), coord(), coord())
}

fn triangles(buffer: &[Real]) -> impl Iterator<Item = [Point3<Real>; 3]> + '_ {
    buffer
        .chunks_exact(9)
        .map(|tri| core::array::from_fn(|i| utils::flat_point3(tri, i, 3)))
}

#[test]
fn split_triangle_preserves_area_and_winding() {
    let mut rng = oorandom::Rand32::new(42);
    let mut split = SplitTriangle::default();
    let mut num_cut = 0;

    for _ in 0..1000 {
        let [a, b, c] = [(); 3].map(|_| random_point(&mut rng, 10.0));
        let Some(normal) = Unit::try_new(random_point(&mut rng, 1.0).coords, 1.0e-3) else {
            continue;
        };
        let plane = Plane::from_point_normal(&random_point(&mut rng, 5.0), normal);

        let area = utils::triangle_area(&a, &b, &c);
        if area < 1.0 {
            continue;
        }

        let triangle = [a.x, a.y, a.z, b.x, b.y, b.z, c.x, c.y, c.z];
        split_triangle(&triangle, &plane, &mut split).unwrap();

        if split.total() > 1 {
            num_cut += 1;
        }

        let tri_normal: Vector3<Real> = (b - a).cross(&(c - a));
        let mut split_area = 0.0;

        for [pa, pb, pc] in triangles(split.front()).chain(triangles(split.back())) {
            split_area += utils::triangle_area(&pa, &pb, &pc);

            let piece_normal = (pb - pa).cross(&(pc - pa));
            assert!(piece_normal.dot(&tri_normal) >= -1.0e-2 * tri_normal.norm());
        }

        for [pa, pb, pc] in triangles(split.front()) {
            for pt in [pa, pb, pc] {
                assert!(plane.signed_distance(&pt) >= -1.0e-3);
            }
        }

        for [pa, pb, pc] in triangles(split.back()) {
            for pt in [pa, pb, pc] {
                assert!(plane.signed_distance(&pt) <= 1.0e-3);
            }
        }

        assert_relative_eq!(split_area, area, max_relative = 1.0e-3);
    }

    assert!(num_cut > 0);
}
