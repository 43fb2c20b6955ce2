//! Discrete Hausdorff, discrete Fréchet and dynamic time warping.

use crate::error::{Error, Result};
use crate::geom::{sq_distance, PointD};

/// Directed discrete Hausdorff: max over `a` of the min distance to `b`.
fn directed_hausdorff_sq<const D: usize>(a: &[PointD<D>], b: &[PointD<D>]) -> f64 {
    let mut max_min = 0.0f64;
    for p in a {
        let mut min_dist = f64::MAX;
        for q in b {
            let d = sq_distance(p, q);
            if d < min_dist {
                min_dist = d;
            }
        }
        if min_dist > max_min {
            max_min = min_dist;
        }
    }
    max_min
}

/// Discrete Hausdorff distance between two vertex sequences.
pub fn discrete_hausdorff<const D: usize>(a: &[PointD<D>], b: &[PointD<D>]) -> Result<f64> {
    if a.is_empty() || b.is_empty() {
        return Err(Error::InvalidInput("discrete Hausdorff needs non-empty polylines"));
    }
    let forward = directed_hausdorff_sq(a, b);
    let backward = directed_hausdorff_sq(b, a);
    Ok(forward.max(backward).sqrt())
}

/// Discrete Fréchet distance (Eiter-Mannila) with rolling O(m) storage.
pub fn discrete_frechet<const D: usize>(a: &[PointD<D>], b: &[PointD<D>]) -> Result<f64> {
    if a.is_empty() || b.is_empty() {
        return Err(Error::InvalidInput("discrete Frechet needs non-empty polylines"));
    }
    let m = b.len();
    let mut row = vec![0.0f64; m];
    row[0] = sq_distance(&a[0], &b[0]);
    for j in 1..m {
        row[j] = row[j - 1].max(sq_distance(&a[0], &b[j]));
    }
    for p in a.iter().skip(1) {
        // `diag` tracks the previous row's value one column to the left.
        let mut diag = row[0];
        row[0] = row[0].max(sq_distance(p, &b[0]));
        for j in 1..m {
            let above = row[j];
            let reach = above.min(row[j - 1]).min(diag);
            row[j] = reach.max(sq_distance(p, &b[j]));
            diag = above;
        }
    }
    Ok(row[m - 1].sqrt())
}

/// Pairwise discrete Fréchet distances over a collection.
///
/// Row `i` of the result holds the distances from polyline `i` to
/// polylines `i+1`, ..., `n-1`, so the matrix is upper-triangular and
/// produced in ascending row order.
pub fn discrete_frechet_matrix<const D: usize>(polylines: &[Vec<PointD<D>>]) -> Result<Vec<Vec<f64>>> {
    let n = polylines.len();
    let mut rows = Vec::with_capacity(n);
    for i in 0..n {
        let mut row = Vec::with_capacity(n - i - 1);
        for j in i + 1..n {
            row.push(discrete_frechet(&polylines[i], &polylines[j])?);
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Dynamic time warping with Euclidean per-step cost.
pub fn dynamic_time_warping<const D: usize>(a: &[PointD<D>], b: &[PointD<D>]) -> Result<f64> {
    dtw_impl(a, b, None)
}

/// Dynamic time warping constrained to a Sakoe-Chiba band of width
/// `window`; the band widens automatically to at least the length
/// difference of the inputs.
pub fn dynamic_time_warping_banded<const D: usize>(
    a: &[PointD<D>],
    b: &[PointD<D>],
    window: usize,
) -> Result<f64> {
    dtw_impl(a, b, Some(window))
}

fn dtw_impl<const D: usize>(a: &[PointD<D>], b: &[PointD<D>], window: Option<usize>) -> Result<f64> {
    if a.is_empty() || b.is_empty() {
        return Err(Error::InvalidInput("dynamic time warping needs non-empty polylines"));
    }
    let (n, m) = (a.len(), b.len());
    let w = window.map(|w| w.max(n.abs_diff(m)));
    let mut table = vec![vec![f64::MAX; m + 1]; n + 1];
    table[0][0] = 0.0;
    for i in 1..=n {
        let (j_lo, j_hi) = match w {
            Some(w) => (1usize.max(i.saturating_sub(w)), m.min(i + w)),
            None => (1, m),
        };
        for j in j_lo..=j_hi {
            let cost = sq_distance(&a[i - 1], &b[j - 1]).sqrt();
            let reach = table[i - 1][j].min(table[i][j - 1]).min(table[i - 1][j - 1]);
            if reach < f64::MAX {
                table[i][j] = cost + reach;
            }
        }
    }
    if table[n][m] == f64::MAX {
        return Err(Error::InvalidInput("warping band admits no path"));
    }
    Ok(table[n][m])
}
