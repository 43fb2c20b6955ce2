//! Douglas-Peucker simplification by recursive farthest-point splits.

use crate::error::{Error, Result};
use crate::geom::{sq_distance, sq_distance_segment, PointD};

/// Simplify `points` such that every dropped vertex lies within
/// perpendicular distance `epsilon` of the chord replacing it.
///
/// The epsilon is squared internally; the output is the kept indices in
/// input order, always including both endpoints.
pub fn douglas_peucker<const D: usize>(points: &[PointD<D>], epsilon: f64) -> Result<Vec<usize>> {
    if epsilon <= 0.0 {
        return Err(Error::InvalidInput("Douglas-Peucker epsilon must be positive"));
    }
    let mut kept = Vec::new();
    match points.len() {
        0 => {}
        1 => kept.push(0),
        _ => {
            simplify(points, 0, points.len(), epsilon * epsilon, &mut kept);
            kept.push(points.len() - 1);
        }
    }
    Ok(kept)
}

/// Farthest interior vertex from the chord over `[lo, hi)`, with its
/// squared distance. Ranges without interior vertices report zero.
fn find_farthest<const D: usize>(points: &[PointD<D>], lo: usize, hi: usize) -> (usize, f64) {
    if hi - lo <= 2 {
        return (lo + 1, 0.0);
    }
    // A loop back onto the chord end keeps the whole range flat.
    if sq_distance(&points[lo + 1], &points[hi - 1]) < 1e-5 {
        return (lo + 1, 0.0);
    }
    let chord = (&points[lo], &points[hi - 1]);
    let mut farthest = lo + 1;
    let mut max_dist = sq_distance_segment(&points[lo + 1], chord.0, chord.1);
    for idx in lo + 2..hi - 1 {
        let dist = sq_distance_segment(&points[idx], chord.0, chord.1);
        if dist > max_dist {
            farthest = idx;
            max_dist = dist;
        }
    }
    (farthest, max_dist)
}

fn simplify<const D: usize>(
    points: &[PointD<D>],
    lo: usize,
    hi: usize,
    eps_sq: f64,
    kept: &mut Vec<usize>,
) {
    let (farthest, dist) = find_farthest(points, lo, hi);
    if dist > eps_sq {
        simplify(points, lo, farthest + 1, eps_sq, kept);
        simplify(points, farthest, hi, eps_sq, kept);
    } else {
        kept.push(lo);
    }
}
