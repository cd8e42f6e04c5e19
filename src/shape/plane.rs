//! Infinite plane described by its unit normal and its signed distance to the origin.
use crate::math::{Point3, Real, UnitVector3};
use na::Unit;

/// The side of a plane a point lies on.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlaneSide {
    /// The point lies on the half-space the plane normal points toward.
    Front,
    /// The point lies on the half-space opposite to the plane normal.
    Back,
    /// The point is within the classification tolerance of the plane.
    OnPlane,
}

impl PlaneSide {
    /// Classifies a signed distance to a plane.
    ///
    /// Distances in `[-epsilon, epsilon]` are classified as [`PlaneSide::OnPlane`].
    #[inline]
    pub fn from_signed_distance(distance: Real, epsilon: Real) -> Self {
        if distance > epsilon {
            PlaneSide::Front
        } else if distance < -epsilon {
            PlaneSide::Back
        } else {
            PlaneSide::OnPlane
        }
    }

    /// The side obtained when the plane orientation is reversed.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            PlaneSide::Front => PlaneSide::Back,
            PlaneSide::Back => PlaneSide::Front,
            PlaneSide::OnPlane => PlaneSide::OnPlane,
        }
    }
}

/// An infinite plane.
///
/// A point `p` lies on the plane if `normal.dot(p) == distance`. Points with a positive
/// [`signed_distance`](Plane::signed_distance) are in front of the plane.
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Plane {
    /// The plane unit normal.
    pub normal: UnitVector3<Real>,
    /// The signed distance from the origin to the plane, along `normal`.
    pub distance: Real,
}

impl Plane {
    /// Builds a new plane from its unit normal and its signed distance to the origin.
    #[inline]
    pub fn new(normal: UnitVector3<Real>, distance: Real) -> Plane {
        Plane { normal, distance }
    }

    /// Builds the plane with the given normal that passes through `point`.
    #[inline]
    pub fn from_point_normal(point: &Point3<Real>, normal: UnitVector3<Real>) -> Plane {
        Plane {
            distance: normal.dot(&point.coords),
            normal,
        }
    }

    /// Builds the plane passing through three points.
    ///
    /// The normal is `(b - a).cross(c - a)` normalized, so the points appear counter-clockwise
    /// when seen from the front side. Returns `None` if the points are collinear.
    pub fn from_points(a: &Point3<Real>, b: &Point3<Real>, c: &Point3<Real>) -> Option<Plane> {
        let normal = Unit::try_new((b - a).cross(&(c - a)), Real::EPSILON)?;
        Some(Self::from_point_normal(a, normal))
    }

    /// The signed distance between `point` and this plane.
    ///
    /// Positive in front of the plane, negative behind it.
    #[inline]
    pub fn signed_distance(&self, point: &Point3<Real>) -> Real {
        self.normal.dot(&point.coords) - self.distance
    }

    /// Classifies `point` with respect to this plane.
    #[inline]
    pub fn side(&self, point: &Point3<Real>, epsilon: Real) -> PlaneSide {
        PlaneSide::from_signed_distance(self.signed_distance(point), epsilon)
    }

    /// The same plane with its front and back sides swapped.
    #[inline]
    pub fn flipped(&self) -> Plane {
        Plane {
            normal: -self.normal,
            distance: -self.distance,
        }
    }

    /// Intersects the segment `a -> b` with this plane.
    ///
    /// Returns the intersection point and its parameter `t` such that the point equals
    /// `a + (b - a) * t`. Returns `None` if the segment is parallel to the plane or if it
    /// does not reach it.
    pub fn intersect_segment(
        &self,
        a: &Point3<Real>,
        b: &Point3<Real>,
        epsilon: Real,
    ) -> Option<(Point3<Real>, Real)> {
        let dir = b - a;
        let denom = self.normal.dot(&dir);

        if relative_eq!(denom, 0.0, epsilon = epsilon) {
            return None;
        }

        let t = -self.signed_distance(a) / denom;

        if t >= 0.0 && t <= 1.0 {
            Some((a + dir * t, t))
        } else {
            None
        }
    }
}
