use intersector::query::{self, MinimumTranslationVector};

fn main() {
    let rectangle = [0.0, 0.0, 16.0, 0.0, 16.0, 16.0, 0.0, 16.0];
    let mut triangle = [14.0, 4.0, 14.1, 12.0, 22.0, 8.0];
    let mut mtv = MinimumTranslationVector::default();

    if query::overlap_convex_polygons(&triangle, &rectangle, Some(&mut mtv)).unwrap() {
        println!("Overlap: normal {:?}, depth {}", mtv.normal, mtv.depth);

        // Push the triangle out of the rectangle.
        let translation = mtv.translation();
        for xy in triangle.chunks_exact_mut(2) {
            xy[0] += translation.x;
            xy[1] += translation.y;
        }
    }

    // The shapes are now touching.
    assert!(query::overlap_convex_polygons(&triangle, &rectangle, Some(&mut mtv)).unwrap());
    assert!(mtv.depth < 1.0e-3);
}
