//! Model-based segmentation by dynamic programming over an information
//! criterion.

use crate::error::{Error, Result};

/// Penalised segmentation of a parameter sequence against a set of
/// candidate model coefficients.
///
/// Cell `(i, j)` of the table holds the best penalised cost of the first
/// `i + 1` rows when row `i`'s segment uses coefficient `j`; a segment
/// either extends (same column cost carried down) or a new one opens at
/// the previous row's best column plus the penalty.
#[derive(Clone, Copy, Debug)]
pub struct ModelBasedSegmentation {
    pub penalty: f64,
}

impl ModelBasedSegmentation {
    pub fn new(penalty: f64) -> Self {
        Self { penalty }
    }

    /// Segment `rows` against `coefficients` under the log-likelihood
    /// `ll(row, coefficient)`.
    ///
    /// Returns segment markers in back-trace order: the last row first,
    /// then every row whose best coefficient differs from its
    /// successor's. Reverse the result for along-trajectory order.
    pub fn segment<R, C, F>(&self, rows: &[R], coefficients: &[C], ll: F) -> Result<Vec<usize>>
    where
        F: Fn(&R, &C) -> f64,
    {
        if rows.is_empty() {
            return Err(Error::InvalidInput("segmentation needs at least one row"));
        }
        if coefficients.is_empty() {
            return Err(Error::InvalidInput("segmentation needs at least one coefficient"));
        }
        let n = rows.len();
        let k = coefficients.len();
        let ic = |log_likelihood: f64| -2.0 * log_likelihood + self.penalty;

        let mut table: Vec<Vec<f64>> = Vec::with_capacity(n);
        let mut row: Vec<f64> = coefficients.iter().map(|c| ic(ll(&rows[0], c))).collect();
        let mut min_ic = row.iter().copied().fold(f64::MAX, f64::min);
        table.push(row);

        for item in rows.iter().skip(1) {
            row = Vec::with_capacity(k);
            for (j, coefficient) in coefficients.iter().enumerate() {
                let extend = table[table.len() - 1][j];
                let append = min_ic + self.penalty;
                row.push(extend.min(append) - 2.0 * ll(item, coefficient));
            }
            min_ic = row.iter().copied().fold(f64::MAX, f64::min);
            table.push(row);
        }

        // Back-trace: a change of the per-row argmin column marks the
        // first row of a segment.
        let argmin = |row: &[f64]| -> usize {
            let mut best = 0usize;
            for (j, value) in row.iter().enumerate() {
                if *value < row[best] {
                    best = j;
                }
            }
            best
        };
        let mut boundaries = vec![n - 1];
        if n == 1 {
            return Ok(boundaries);
        }
        let mut last_position = argmin(&table[n - 1]);
        for i in (0..=n - 2).rev() {
            let position = argmin(&table[i]);
            if position != last_position {
                boundaries.push(i);
            }
            last_position = position;
        }
        Ok(boundaries)
    }
}
