use intersector::math::{Point3, Vector3};
use intersector::query::{self, SplitTriangle};
use intersector::shape::Plane;

fn main() {
    let plane = Plane::from_point_normal(&Point3::new(1.0, 0.0, 0.0), Vector3::x_axis());
    let mut split = SplitTriangle::default();

    let crossing = [-9.0, 0.0, 10.0, 11.0, 0.0, 0.0, -9.0, 0.0, -10.0];
    let behind = [-9.0, 0.0, 10.0, 0.0, 0.0, 0.0, -11.0, 0.0, 10.0];

    query::split_triangle(&crossing, &plane, &mut split).unwrap();
    assert_eq!(split.num_front(), 1);
    assert_eq!(split.num_back(), 2);

    for i in 0..split.num_back() {
        println!("Back triangle {}: {:?}", i, split.back_triangle(i));
    }

    // The same buffer is reused by the next split.
    query::split_triangle(&behind, &plane, &mut split).unwrap();
    assert_eq!(split.total(), 1);
    assert_eq!(split.back(), &behind);
}
