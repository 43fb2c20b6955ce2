//! Agarwal simplification: exponential plus binary search shortcutting
//! under the strong Fréchet predicate.

use crate::error::Result;
use crate::geom::PointD;
use crate::similarity::{SearchMode, StrongFrechet};

/// Near-linear simplification with a strong Fréchet guarantee: the
/// output polyline is within `epsilon + tolerance` of the input.
#[derive(Clone, Copy, Debug)]
pub struct Agarwal {
    pub epsilon: f64,
    pub tolerance: f64,
}

impl Agarwal {
    pub fn new(epsilon: f64) -> Self {
        Self {
            epsilon,
            tolerance: 1e-3,
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Kept vertex indices in along-trajectory order.
    pub fn simplify<const D: usize>(&self, points: &[PointD<D>]) -> Result<Vec<usize>> {
        let n = points.len();
        let mut kept = Vec::new();
        if n == 0 {
            return Ok(kept);
        }
        kept.push(0);
        if n == 1 {
            return Ok(kept);
        }

        let predicate = StrongFrechet::new(SearchMode::DoubleAndSearch)
            .with_tolerance(self.tolerance);
        // Chord from `start` to the last vertex of `points[start..upto]`,
        // decided against the spanned subpolyline.
        let within = |start: usize, upto: usize| {
            let chord = [points[start], points[upto - 1]];
            predicate.decide(&chord, &points[start..upto], self.epsilon)
        };

        let mut start = 0usize;
        let mut offset = 2usize;
        loop {
            let search_lower = offset / 2;
            let mut search_upper = offset;

            if start + offset >= n {
                // Overshot the end: either the chord to the last vertex
                // closes the simplification, or the violating vertex
                // hides inside the remaining range.
                if offset == 2 || within(start, n) {
                    kept.push(n - 1);
                    break;
                }
                search_upper = n - 1 - start;
            }

            if within(start, start + search_upper + 1) {
                offset *= 2;
                continue;
            }

            // `search_lower` is feasible, `search_upper` is not; find the
            // last feasible chord endpoint.
            let mut lower = search_lower;
            let mut upper = search_upper;
            while upper > lower + 1 {
                let mid = (lower + upper) / 2;
                if within(start, start + mid + 1) {
                    lower = mid;
                } else {
                    upper = mid;
                }
            }
            kept.push(start + upper - 1);
            start += upper - 1;
            offset = 2;
        }
        Ok(kept)
    }
}
