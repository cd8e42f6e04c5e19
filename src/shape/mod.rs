//! Shapes supported by intersector.

pub use self::plane::{Plane, PlaneSide};

mod plane;
