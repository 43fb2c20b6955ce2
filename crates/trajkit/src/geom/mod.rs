//! Planar geometry kernel for the trajectory algorithms.
//!
//! - `Tolerances`: the single epsilon knob used by all approximate
//!   comparisons (wedge degeneracy, interval emptiness, tangency).
//! - `Segment2`, `Sphere2`: value types over `nalgebra` vectors.
//! - Squared point/segment/line distances, sphere intersections.
//! - `Wedge`: the Chan–Chin tangent-cone primitive.
//! - `disk_lens_mbr`: bounding rectangle of a two-disk intersection.
//! - `min_enclosing_ball`: Welzl's algorithm, used by the spatial
//!   segmentation criterion.

pub mod intersect;
pub mod mbr;
pub mod minsphere;
mod types;
pub mod wedge;

pub use intersect::{
    sphere_segment_intersection, sphere_sphere_intersection, Crossing, SphereSegmentIntersection,
};
pub use mbr::disk_lens_mbr;
pub use minsphere::min_enclosing_ball;
pub use types::{
    sq_distance, sq_distance_line, sq_distance_segment, PointD, Segment2, Sphere2, Tolerances,
    Vec2,
};
pub use wedge::Wedge;

#[cfg(test)]
mod tests;
