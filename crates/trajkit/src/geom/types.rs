//! Basic kernel types and squared-distance primitives.

use nalgebra::SVector;

/// Planar point/vector, the workhorse type of the 2D algorithms.
pub type Vec2 = nalgebra::Vector2<f64>;

/// Fixed-dimension point for the dimension-generic algorithms (d = 2 or 3).
pub type PointD<const D: usize> = SVector<f64, D>;

/// Numeric tolerance knob used by all approximate comparisons.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub eps: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self { eps: 1e-5 }
    }
}

/// Directed segment, canonically parameterised by `t` in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment2 {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment2 {
    #[inline]
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }
    /// Point at parameter `t` along the segment.
    #[inline]
    pub fn at(&self, t: f64) -> Vec2 {
        self.start + (self.end - self.start) * t
    }
    #[inline]
    pub fn sq_length(&self) -> f64 {
        (self.end - self.start).norm_squared()
    }
}

/// Circle stored as centre plus squared radius; the squared radius is
/// clamped to zero on construction so it can never go negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere2 {
    pub center: Vec2,
    pub squared_radius: f64,
}

impl Sphere2 {
    #[inline]
    pub fn new(center: Vec2, radius: f64) -> Self {
        Self {
            center,
            squared_radius: (radius * radius).max(0.0),
        }
    }
    #[inline]
    pub fn from_squared(center: Vec2, squared_radius: f64) -> Self {
        Self {
            center,
            squared_radius: squared_radius.max(0.0),
        }
    }
    /// The empty sphere used as the "no intersection" sentinel.
    #[inline]
    pub fn empty() -> Self {
        Self {
            center: Vec2::zeros(),
            squared_radius: 0.0,
        }
    }
}

/// Squared Euclidean distance between two points.
#[inline]
pub fn sq_distance<const D: usize>(p: &PointD<D>, q: &PointD<D>) -> f64 {
    (p - q).norm_squared()
}

/// Squared distance from a point to a segment, via the perpendicular-foot
/// rule with endpoint clamps.
pub fn sq_distance_segment<const D: usize>(p: &PointD<D>, a: &PointD<D>, b: &PointD<D>) -> f64 {
    let v = b - a;
    let u = p - a;
    let uv = u.dot(&v);
    if uv <= 0.0 {
        return u.norm_squared();
    }
    let vv = v.norm_squared();
    if vv <= uv {
        return (p - b).norm_squared();
    }
    u.norm_squared() - uv * uv / vv
}

/// Squared distance from a point to the infinite line through `a` and `b`.
/// A zero-length carrier degenerates to the point distance.
pub fn sq_distance_line<const D: usize>(p: &PointD<D>, a: &PointD<D>, b: &PointD<D>) -> f64 {
    let v = b - a;
    let u = p - a;
    let vv = v.norm_squared();
    if vv == 0.0 {
        return u.norm_squared();
    }
    let uv = u.dot(&v);
    u.norm_squared() - uv * uv / vv
}
