//! Range predicates for monotone segmentation.

use crate::geom::{min_enclosing_ball, Vec2};
use crate::stats::min_non_zero_element;

/// Spatial criterion: the minimum enclosing ball of the window stays
/// below a radius threshold.
#[derive(Clone, Copy, Debug)]
pub struct MinSphereCriterion {
    pub threshold: f64,
}

impl MinSphereCriterion {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn ok(&self, window: &[Vec2]) -> bool {
        match min_enclosing_ball(window) {
            Some((_, radius)) => radius < self.threshold,
            None => true,
        }
    }
}

/// Attribute criterion: max minus min stays below a threshold.
#[derive(Clone, Copy, Debug)]
pub struct DifferenceCriterion {
    pub threshold: f64,
}

impl DifferenceCriterion {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn ok(&self, window: &[f64]) -> bool {
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for &value in window {
            min = min.min(value);
            max = max.max(value);
        }
        window.is_empty() || max - min < self.threshold
    }
}

/// One-sided range criterion for headings: every non-zero value lies in
/// `[min_nonzero, min_nonzero + threshold]`; zeros are ignored.
#[derive(Clone, Copy, Debug)]
pub struct RangeCriterion {
    pub threshold: f64,
}

impl RangeCriterion {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn ok(&self, window: &[f64]) -> bool {
        let Some(lb_idx) = min_non_zero_element(window) else {
            return true;
        };
        let lb = window[lb_idx];
        let ub = lb + self.threshold;
        window
            .iter()
            .filter(|v| **v != 0.0)
            .all(|v| *v >= lb && *v <= ub)
    }
}

/// Speed criterion: max over min non-zero stays below a threshold; an
/// all-zero window passes.
#[derive(Clone, Copy, Debug)]
pub struct RatioCriterion {
    pub threshold: f64,
}

impl RatioCriterion {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn ok(&self, window: &[f64]) -> bool {
        if window.iter().all(|v| *v == 0.0) {
            return true;
        }
        let Some(min_idx) = min_non_zero_element(window) else {
            return true;
        };
        let min = window[min_idx];
        let max = window.iter().copied().fold(f64::MIN, f64::max);
        max / min < self.threshold
    }
}
