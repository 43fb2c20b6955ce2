//! Bounding rectangle of the lens of two disks.

use super::intersect::sphere_sphere_intersection;
use super::types::{Sphere2, Tolerances, Vec2};

/// Minimum bounding rectangle of the intersection of two disks, returned
/// as a diagonally opposite point pair.
///
/// The rectangle is axis-aligned with the line of centres: one corner
/// sits on disk `u` past the lens, the opposite corner on disk `v`, both
/// offset by the half-chord of the intersection circle. When the lens is
/// a single point or empty, both corners collapse onto the intersection
/// centre (the origin for disjoint disks).
pub fn disk_lens_mbr(
    p_u: Vec2,
    p_v: Vec2,
    radius_u: f64,
    radius_v: f64,
    tol: Tolerances,
) -> (Vec2, Vec2) {
    let lens = sphere_sphere_intersection(
        &Sphere2::new(p_u, radius_u),
        &Sphere2::new(p_v, radius_v),
        tol,
    );
    if lens.squared_radius == 0.0 {
        return (lens.center, lens.center);
    }
    let half_chord = lens.squared_radius.sqrt();
    let axis = p_v - p_u;
    let len = axis.norm();
    if len < tol.eps {
        return (lens.center, lens.center);
    }
    let dir = axis / len;
    // counterclockwise rotation by pi/2
    let perp = Vec2::new(-dir.y, dir.x);
    let p1 = p_u + dir * radius_u + perp * half_chord;
    let p2 = p_v - dir * radius_v - perp * half_chord;
    (p1, p2)
}
