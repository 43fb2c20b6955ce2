//! Sphere-segment and sphere-sphere intersections.
//!
//! These feed the freespace cell construction and the reachability-disk
//! bounding rectangle. Results are sum types; "no intersection" is an
//! explicit variant, never an in-band sentinel.

use super::types::{Segment2, Sphere2, Tolerances, Vec2};

/// A single boundary crossing of a sphere with a segment.
///
/// `sign` is the sign of the quadratic discriminant restricted to the
/// segment: `+1` for a proper interior crossing, `0` for a tangency, `-1`
/// when the root falls outside [0, 1] and the crossing is clamped onto
/// the segment endpoint that lies inside the ball. `ratio_sq` is the
/// squared segment parameter of the (possibly clamped) crossing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crossing {
    pub sign: i8,
    pub ratio_sq: f64,
    pub point: Vec2,
}

/// Intersection of a sphere boundary with a segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SphereSegmentIntersection {
    /// The segment does not meet the closed ball.
    Empty,
    /// The segment touches the sphere in a single point.
    Tangent(Crossing),
    /// Two crossings, the one with the larger segment parameter first.
    Crossings(Crossing, Crossing),
}

impl SphereSegmentIntersection {
    /// The crossings as a slice-like iterator, preserving emission order.
    pub fn crossings(&self) -> impl Iterator<Item = Crossing> {
        let pair: [Option<Crossing>; 2] = match *self {
            SphereSegmentIntersection::Empty => [None, None],
            SphereSegmentIntersection::Tangent(c) => [Some(c), None],
            SphereSegmentIntersection::Crossings(hi, lo) => [Some(hi), Some(lo)],
        };
        pair.into_iter().flatten()
    }
}

/// Intersect the boundary of `sphere` with `segment`.
///
/// Solves the quadratic `|s + t v - c|^2 = r^2` restricted to `t` in
/// [0, 1]. Roots outside the segment whose adjacent endpoint lies inside
/// the ball are clamped to that endpoint and tagged with sign `-1`; if
/// both crossings carry `-1` the full segment is inside the ball.
pub fn sphere_segment_intersection(
    sphere: &Sphere2,
    segment: &Segment2,
    tol: Tolerances,
) -> SphereSegmentIntersection {
    let v = segment.end - segment.start;
    let u = segment.start - sphere.center;
    let a = v.norm_squared();
    if a < tol.eps * tol.eps {
        return SphereSegmentIntersection::Empty;
    }
    let b = 2.0 * u.dot(&v);
    let c = u.norm_squared() - sphere.squared_radius;
    let disc = b * b - 4.0 * a * c;
    if disc < -tol.eps {
        return SphereSegmentIntersection::Empty;
    }
    if disc.abs() <= tol.eps {
        let t = -b / (2.0 * a);
        if t < -tol.eps || t > 1.0 + tol.eps {
            return SphereSegmentIntersection::Empty;
        }
        let t = t.clamp(0.0, 1.0);
        return SphereSegmentIntersection::Tangent(Crossing {
            sign: 0,
            ratio_sq: t * t,
            point: segment.at(t),
        });
    }
    let root = disc.sqrt();
    let t_hi = (-b + root) / (2.0 * a);
    let t_lo = (-b - root) / (2.0 * a);
    if t_hi < 0.0 || t_lo > 1.0 {
        return SphereSegmentIntersection::Empty;
    }
    let clamp = |t: f64| -> Crossing {
        if t < 0.0 {
            Crossing {
                sign: -1,
                ratio_sq: 0.0,
                point: segment.start,
            }
        } else if t > 1.0 {
            Crossing {
                sign: -1,
                ratio_sq: 1.0,
                point: segment.end,
            }
        } else {
            Crossing {
                sign: 1,
                ratio_sq: t * t,
                point: segment.at(t),
            }
        }
    };
    SphereSegmentIntersection::Crossings(clamp(t_hi), clamp(t_lo))
}

/// Intersection circle of two sphere boundaries.
///
/// Returns the circle through the two crossing points of the boundaries
/// (centre on the line of centres, squared radius of the half chord).
/// Tangent spheres yield the tangent point with radius zero; disjoint or
/// nested spheres yield [`Sphere2::empty`].
pub fn sphere_sphere_intersection(a: &Sphere2, b: &Sphere2, tol: Tolerances) -> Sphere2 {
    let d = b.center - a.center;
    let d_sq = d.norm_squared();
    if d_sq < tol.eps * tol.eps {
        return Sphere2::empty();
    }
    let s = (a.squared_radius - b.squared_radius + d_sq) / (2.0 * d_sq);
    let center = a.center + d * s;
    let r_sq = a.squared_radius - s * s * d_sq;
    if r_sq < -tol.eps {
        return Sphere2::empty();
    }
    Sphere2::from_squared(center, r_sq.max(0.0))
}
