//! Various unsorted geometrical and logical operators.

pub use self::center::center2;
pub use self::flat_points::{flat_point2, flat_point3, flat_points2, lerp_vertex};
pub use self::triangle_area::triangle_area;

mod center;
mod flat_points;
mod triangle_area;
