//! Minimum enclosing ball of a planar point set (Welzl).

use super::types::Vec2;

/// Smallest circle enclosing all points; `None` for an empty input.
///
/// Incremental Welzl construction with at most three support points;
/// quadratic in practice on the short windows the segmentation criterion
/// feeds it.
pub fn min_enclosing_ball(points: &[Vec2]) -> Option<(Vec2, f64)> {
    const GROW: f64 = 1e-10;
    let contains = |center: Vec2, r_sq: f64, p: Vec2| (p - center).norm_squared() <= r_sq + GROW;

    let first = *points.first()?;
    let (mut center, mut r_sq) = (first, 0.0);
    for i in 1..points.len() {
        if contains(center, r_sq, points[i]) {
            continue;
        }
        center = points[i];
        r_sq = 0.0;
        for j in 0..i {
            if contains(center, r_sq, points[j]) {
                continue;
            }
            let (c2, r2) = ball_from_two(points[i], points[j]);
            center = c2;
            r_sq = r2;
            for k in 0..j {
                if contains(center, r_sq, points[k]) {
                    continue;
                }
                let (c3, r3) = ball_from_three(points[i], points[j], points[k]);
                center = c3;
                r_sq = r3;
            }
        }
    }
    Some((center, r_sq.max(0.0).sqrt()))
}

#[inline]
fn ball_from_two(a: Vec2, b: Vec2) -> (Vec2, f64) {
    let center = (a + b) * 0.5;
    (center, (a - center).norm_squared())
}

/// Circumcircle of three points, falling back to the widest two-point
/// ball when they are (near) collinear.
fn ball_from_three(a: Vec2, b: Vec2, c: Vec2) -> (Vec2, f64) {
    let ab = b - a;
    let ac = c - a;
    let d = 2.0 * (ab.x * ac.y - ab.y * ac.x);
    if d.abs() < 1e-12 {
        let candidates = [ball_from_two(a, b), ball_from_two(a, c), ball_from_two(b, c)];
        return candidates
            .into_iter()
            .max_by(|x, y| x.1.total_cmp(&y.1))
            .unwrap_or((a, 0.0));
    }
    let ab_sq = ab.norm_squared();
    let ac_sq = ac.norm_squared();
    let ux = (ac.y * ab_sq - ab.y * ac_sq) / d;
    let uy = (ab.x * ac_sq - ac.x * ab_sq) / d;
    let center = a + Vec2::new(ux, uy);
    (center, (a - center).norm_squared())
}
