//! Brownian-bridge movement model: bridge extraction, maximum-likelihood
//! variance estimation and coefficient selection.
//!
//! A probe triple `(p_{2i}, p_{2i+1}, p_{2i+2})` becomes one bridge: the
//! interior probe is the observed anchor, the time-weighted interpolation
//! of the outer probes is its expected position, and the scatter of the
//! anchors around their expectations drives the variance estimate. A
//! trailing pair without a third probe forms a degenerate bridge with
//! zero deviation.

use tracing::debug;

use crate::error::{Error, Result};
use crate::geo::LocalReference;
use crate::geom::Vec2;
use crate::probe::Probe;

/// ln(2 pi), the constant term of the bridge log-likelihood.
pub const LOG_2PI: f64 = 1.837_877_066_409_345_3;

/// Parameters of one Brownian bridge over the probe range
/// `[first, last]` (indices into the caller's probe buffer).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bridge {
    /// Observed interior position, projected.
    pub anchor: Vec2,
    /// Expected position under the bridge.
    pub mu: Vec2,
    /// Estimated diffusion parameter, filled by the MLE.
    pub sigma_squared: f64,
    pub first: usize,
    pub last: usize,
}

impl Bridge {
    /// Squared deviation of the observed anchor from its expectation.
    #[inline]
    pub fn squared_deviation(&self) -> f64 {
        (self.anchor - self.mu).norm_squared()
    }
}

/// Per-bridge log-likelihood of a diffusion parameter.
#[inline]
pub fn log_likelihood(bridge: &Bridge, sigma_squared: f64) -> f64 {
    -LOG_2PI - sigma_squared.ln() - bridge.squared_deviation() / (2.0 * sigma_squared)
}

/// Decompose a probe sequence into bridges, two probes at a stride.
///
/// Timestamps must be strictly increasing; at least two probes are
/// required. Probes are projected through `reference` before the
/// deviation geometry is computed.
pub fn build_bridges(probes: &[Probe], reference: &LocalReference) -> Result<Vec<Bridge>> {
    if probes.len() < 2 {
        return Err(Error::InvalidInput("bridge extraction needs at least two probes"));
    }
    for w in probes.windows(2) {
        if w[1].time <= w[0].time {
            return Err(Error::InvalidInput("timestamps must be strictly increasing"));
        }
    }
    let project = |p: &Probe| reference.project(p.lat, p.lon);
    let mut bridges = Vec::with_capacity(probes.len() / 2 + 1);
    let mut i = 0usize;
    while i + 1 < probes.len() {
        let bridge = if i + 2 < probes.len() {
            let (a, b, c) = (&probes[i], &probes[i + 1], &probes[i + 2]);
            let alpha = (b.time - a.time) / (c.time - a.time);
            let mu = project(a) * (1.0 - alpha) + project(c) * alpha;
            Bridge {
                anchor: project(b),
                mu,
                sigma_squared: 0.0,
                first: i,
                last: i + 2,
            }
        } else {
            // Trailing pair: the anchor is its own expectation.
            let anchor = project(&probes[i + 1]);
            Bridge {
                anchor,
                mu: anchor,
                sigma_squared: 0.0,
                first: i,
                last: i + 1,
            }
        };
        bridges.push(bridge);
        i += 2;
    }
    Ok(bridges)
}

/// Golden-section maximum-likelihood estimator for the shared diffusion
/// parameter of a bridge collection.
#[derive(Clone, Copy, Debug)]
pub struct Mle {
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl Default for Mle {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tolerance: 1e-5,
        }
    }
}

impl Mle {
    /// Estimate over the default bracket: from the tolerance up to the
    /// largest per-bridge squared deviation.
    pub fn estimate(&self, bridges: &[Bridge]) -> Result<f64> {
        if bridges.is_empty() {
            return Err(Error::InvalidInput("MLE needs at least one bridge"));
        }
        let upper = bridges
            .iter()
            .map(Bridge::squared_deviation)
            .fold(0.0f64, f64::max)
            .max(self.tolerance);
        self.estimate_in(bridges, self.tolerance, upper)
    }

    /// Estimate within an explicit `[lower, upper]` bracket.
    ///
    /// The joint log-likelihood is unimodal in the diffusion parameter,
    /// so golden-section search converges; exhausting the iteration
    /// budget reports [`Error::NotConverged`].
    pub fn estimate_in(&self, bridges: &[Bridge], lower: f64, upper: f64) -> Result<f64> {
        if bridges.is_empty() {
            return Err(Error::InvalidInput("MLE needs at least one bridge"));
        }
        if lower <= 0.0 || upper < lower {
            return Err(Error::InvalidInput("MLE bracket must be positive and ordered"));
        }
        let joint = |sigma_squared: f64| -> f64 {
            bridges
                .iter()
                .map(|b| log_likelihood(b, sigma_squared))
                .sum()
        };
        const INV_PHI: f64 = 0.618_033_988_749_894_9;
        let mut a = lower;
        let mut b = upper;
        let mut c = b - INV_PHI * (b - a);
        let mut d = a + INV_PHI * (b - a);
        let mut f_c = joint(c);
        let mut f_d = joint(d);
        for iteration in 0..self.max_iterations {
            if (b - a).abs() < self.tolerance {
                debug!(iteration, estimate = (a + b) / 2.0, "MLE converged");
                return Ok((a + b) / 2.0);
            }
            if f_c > f_d {
                b = d;
                d = c;
                f_d = f_c;
                c = b - INV_PHI * (b - a);
                f_c = joint(c);
            } else {
                a = c;
                c = d;
                f_c = f_d;
                d = a + INV_PHI * (b - a);
                f_d = joint(d);
            }
        }
        Err(Error::NotConverged(self.max_iterations))
    }
}

/// Quantile-bucket selector for representative diffusion coefficients.
///
/// The estimated parameters are sorted, split into `k` contiguous
/// buckets and each bucket contributes its median, in bucket order.
#[derive(Clone, Copy, Debug)]
pub struct ParameterSelector {
    pub num_coefficients: usize,
}

impl ParameterSelector {
    pub fn new(num_coefficients: usize) -> Self {
        Self { num_coefficients }
    }

    pub fn select(&self, bridges: &[Bridge]) -> Result<Vec<f64>> {
        if self.num_coefficients == 0 {
            return Err(Error::InvalidInput("selector needs at least one coefficient"));
        }
        if bridges.is_empty() {
            return Err(Error::InvalidInput("selector needs at least one bridge"));
        }
        let mut values: Vec<f64> = bridges.iter().map(|b| b.sigma_squared).collect();
        values.sort_by(f64::total_cmp);
        let k = self.num_coefficients.min(values.len());
        let bucket_size = values.len().div_ceil(k);
        let mut selected = Vec::with_capacity(k);
        for bucket in values.chunks(bucket_size) {
            selected.push(bucket[bucket.len() / 2]);
        }
        Ok(selected)
    }
}

#[cfg(test)]
mod tests;
