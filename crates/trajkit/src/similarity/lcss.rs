//! Longest common subsequence under a distance and index-offset bound.

use crate::geom::{sq_distance, PointD};

/// Epsilon-delta LCSS measure.
///
/// Vertices `a_i` and `b_j` match when their distance is below `epsilon`
/// and `|i - j|` is below `delta`. The similarity is the length of the
/// longest chain of matches that is monotone in both polylines.
#[derive(Clone, Copy, Debug)]
pub struct Lcss {
    pub epsilon: f64,
    pub delta: usize,
}

impl Lcss {
    pub fn new(epsilon: f64, delta: usize) -> Self {
        Self { epsilon, delta }
    }

    /// LCSS length only.
    pub fn similarity<const D: usize>(&self, a: &[PointD<D>], b: &[PointD<D>]) -> usize {
        self.run(a, b, None)
    }

    /// LCSS length and one witnessing set of matched index pairs.
    ///
    /// When several matches yield the same chain length within a row, the
    /// pair with the smaller `b` index wins, replacing the previous
    /// emission.
    pub fn similarity_with_matching<const D: usize>(
        &self,
        a: &[PointD<D>],
        b: &[PointD<D>],
    ) -> (usize, Vec<(usize, usize)>) {
        let mut matching = Vec::new();
        let length = self.run(a, b, Some(&mut matching));
        (length, matching)
    }

    fn run<const D: usize>(
        &self,
        a: &[PointD<D>],
        b: &[PointD<D>],
        mut matching: Option<&mut Vec<(usize, usize)>>,
    ) -> usize {
        let m = b.len();
        let mut dp_row = vec![0usize; m + 1];
        let eps_sq = self.epsilon * self.epsilon;
        let mut prev_value = 0usize;
        let mut prev_cell = 0usize;
        for (i, pa) in a.iter().enumerate() {
            let mut previous = 0usize;
            for (j, pb) in b.iter().enumerate() {
                // One-based row/column indices bound the index offset.
                let (row, col) = (i + 1, j + 1);
                let current;
                if sq_distance(pa, pb) < eps_sq && row.abs_diff(col) < self.delta {
                    current = dp_row[col - 1] + 1;
                    if current != prev_value {
                        prev_value = current;
                        prev_cell = col;
                        if let Some(out) = matching.as_mut() {
                            out.push((i, j));
                        }
                    } else if col < prev_cell {
                        prev_cell = col;
                        if let Some(out) = matching.as_mut() {
                            out.pop();
                            out.push((i, j));
                        }
                    }
                } else {
                    current = dp_row[col].max(previous);
                }
                dp_row[col - 1] = previous;
                previous = current;
            }
            dp_row[m] = previous;
        }
        dp_row[m]
    }
}
