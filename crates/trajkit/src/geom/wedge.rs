//! Infinite cone from an apex tangent to a disk.
//!
//! The wedge is the region between the two tangent lines from an apex to
//! a disk; Chan–Chin shortcut feasibility reduces to running wedge
//! intersections and containment tests. Lines are stored as slope and
//! intercept with respect to the global x-axis, so the primitive is
//! strictly planar.

use std::f64::consts::PI;

use super::types::{Tolerances, Vec2};

/// Tangent cone from an apex to a disk, stored as two lines
/// `y = m_i x + c_i`. The empty wedge has all-zero slopes and intercepts.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Wedge {
    slopes: Vec2,
    intercepts: Vec2,
}

impl Wedge {
    /// Construct the wedge with apex `p` tangent to the disk around
    /// `center` with `radius`.
    ///
    /// Degenerate inputs (apex inside or on the disk, apex coinciding
    /// with the centre, tangent length below tolerance) produce the
    /// empty wedge.
    pub fn new(p: Vec2, center: Vec2, radius: f64, tol: Tolerances) -> Self {
        let ray = center - p;
        let seg_sq = ray.norm_squared();
        let r_sq = radius * radius;
        let tangent_sq = seg_sq - r_sq;
        if seg_sq < r_sq || seg_sq.sqrt() < tol.eps || tangent_sq.abs() < tol.eps {
            return Self::default();
        }
        let horizontal = ray.y.abs() < tol.eps;
        let vertical = ray.x.abs() < tol.eps;
        let mut tan_b = radius / tangent_sq.sqrt();
        let (m1, m2) = if horizontal {
            if ray.x < 0.0 {
                tan_b = -tan_b;
            }
            (tan_b, -tan_b)
        } else if vertical {
            // Stand-in slope for the vertical centre ray.
            let tan_a = (PI / 2.0 - tol.eps * 0.001).tan();
            let m = if tan_a * tan_b == 1.0 {
                (tan_a + tan_b) / tol.eps
            } else {
                (tan_a + tan_b) / (1.0 - tan_a * tan_b)
            };
            (m, -m)
        } else {
            let ray_slope = ray.y / ray.x;
            // tan(a±b) identities, guarded against the poles.
            let (m1, m2) = if ray_slope * tan_b == 1.0 {
                (
                    (ray_slope + tan_b) / tol.eps,
                    (ray_slope - tan_b) / (1.0 + ray_slope * tan_b),
                )
            } else if ray_slope * tan_b == -1.0 {
                (
                    (ray_slope + tan_b) / (1.0 - ray_slope * tan_b),
                    (ray_slope - tan_b) / -tol.eps,
                )
            } else {
                (
                    (ray_slope + tan_b) / (1.0 - ray_slope * tan_b),
                    (ray_slope - tan_b) / (1.0 + ray_slope * tan_b),
                )
            };
            if ray.x < 0.0 {
                (m2, m1)
            } else {
                (m1, m2)
            }
        };
        Self {
            slopes: Vec2::new(m1, m2),
            intercepts: Vec2::new(p.y - m1 * p.x, p.y - m2 * p.x),
        }
    }

    /// Build a wedge directly from line slopes and intercepts.
    #[inline]
    pub fn from_lines(slopes: Vec2, intercepts: Vec2) -> Self {
        Self { slopes, intercepts }
    }

    #[inline]
    pub fn slopes(&self) -> Vec2 {
        self.slopes
    }

    #[inline]
    pub fn intercepts(&self) -> Vec2 {
        self.intercepts
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slopes == Vec2::zeros() && self.intercepts == Vec2::zeros()
    }

    /// Whether `p` lies between the two wedge lines (boundaries included).
    pub fn contains(&self, p: Vec2) -> bool {
        let r1 = self.slopes.x * p.x - p.y + self.intercepts.x;
        let r2 = self.slopes.y * p.x - p.y + self.intercepts.y;
        (r1 >= 0.0 && r2 <= 0.0) || (r1 <= 0.0 && r2 >= 0.0)
    }

    /// Intersect two wedges by sorting the four lines by slope and
    /// keeping the inner pair; returns the empty wedge when the cones
    /// cannot overlap.
    pub fn intersect(&self, other: &Wedge) -> Wedge {
        let slopes = [self.slopes.x, self.slopes.y, other.slopes.x, other.slopes.y];
        let intercepts = [
            self.intercepts.x,
            self.intercepts.y,
            other.intercepts.x,
            other.intercepts.y,
        ];
        let mut order = [0usize, 1, 2, 3];
        order.sort_by(|&i, &j| slopes[i].total_cmp(&slopes[j]));

        let diff_this = (slopes[0] - slopes[1]) / (1.0 + slopes[0] * slopes[1]);
        let diff_that = (slopes[2] - slopes[3]) / (1.0 + slopes[2] * slopes[3]);
        let angle_this = 2.0 * diff_this.to_degrees();
        let angle_that = 2.0 * diff_that.to_degrees();

        // One wedge's pair sorting entirely below or above the other's
        // means the cones can only overlap if one opens wide enough.
        if order[0] + order[1] == 5 || order[2] + order[3] == 5 {
            if angle_this.abs() < 90.0 || angle_that.abs() < 90.0 {
                return Wedge::default();
            }
        }

        let (a, b) = if slopes[0] > slopes[1] {
            (order[2], order[1])
        } else {
            (order[1], order[2])
        };
        Wedge::from_lines(
            Vec2::new(slopes[a], slopes[b]),
            Vec2::new(intercepts[a], intercepts[b]),
        )
    }
}
