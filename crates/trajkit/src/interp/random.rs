//! Random interpolation by rejection sampling in reachability lenses.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::geo::LocalReference;
use crate::geom::{disk_lens_mbr, Tolerances, Vec2};
use crate::probe::Probe;

use super::{check_timestamps, fill_motion_columns};

/// Random trajectory interpolator.
///
/// Interior timestamps are visited in a random permutation; each sample
/// is drawn uniformly from the bounding rectangle of the two
/// reachability disks spanned by the tightest already-fixed neighbours,
/// and accepted once it lies inside both disks. The generator is owned
/// by the interpolator and seeded by the caller.
#[derive(Clone, Debug)]
pub struct RandomInterpolator {
    pub reference: LocalReference,
    pub max_speed: f64,
    rng: StdRng,
    acceptance_slack: f64,
    tolerances: Tolerances,
}

impl RandomInterpolator {
    pub fn new(reference_lat: f64, reference_lon: f64, max_speed: f64, seed: u64) -> Self {
        Self {
            reference: LocalReference::new(reference_lat, reference_lon),
            max_speed,
            rng: StdRng::seed_from_u64(seed),
            acceptance_slack: 0.9999,
            tolerances: Tolerances::default(),
        }
    }

    /// Interpolate between `u` and `v` at the interior entries of
    /// `timestamps`. Timestamps whose reachability lens degenerates are
    /// skipped; surviving probes keep their time order.
    pub fn interpolate(&mut self, u: &Probe, v: &Probe, timestamps: &[f64]) -> Result<Vec<Probe>> {
        check_timestamps(u, v, timestamps)?;
        if self.max_speed <= 0.0 {
            return Err(Error::InvalidInput("maximum speed must be positive"));
        }
        let n = timestamps.len();
        if n == 2 {
            return Ok(vec![*u, *v]);
        }

        let p_u = self.reference.project(u.lat, u.lon);
        let p_v = self.reference.project(v.lat, v.lon);

        let mut positions: Vec<Option<Vec2>> = vec![None; n];
        positions[0] = Some(p_u);
        positions[n - 1] = Some(p_v);

        let mut order: Vec<usize> = (1..n - 1).collect();
        order.shuffle(&mut self.rng);

        const MAX_REJECTIONS: usize = 100_000;
        for idx in order {
            // Tightest already-fixed bracket around this timestamp.
            let source = (0..idx).rev().find_map(|i| positions[i].map(|p| (i, p)));
            let destination = (idx + 1..n).find_map(|i| positions[i].map(|p| (i, p)));
            let (Some((src_idx, src)), Some((dst_idx, dst))) = (source, destination) else {
                continue;
            };
            let radius_src = (timestamps[idx] - timestamps[src_idx]) * self.max_speed;
            let radius_dst = (timestamps[dst_idx] - timestamps[idx]) * self.max_speed;
            if (src - dst).norm_squared() < self.tolerances.eps {
                continue;
            }
            let (c1, c2) = disk_lens_mbr(src, dst, radius_src, radius_dst, self.tolerances);
            let (x_min, x_max) = (c1.x.min(c2.x), c1.x.max(c2.x));
            let (y_min, y_max) = (c1.y.min(c2.y), c1.y.max(c2.y));
            if x_min == x_max && y_min == y_max {
                continue;
            }
            let sq_radius_src = radius_src * radius_src;
            let sq_radius_dst = radius_dst * radius_dst;
            let mut accepted = None;
            for _ in 0..MAX_REJECTIONS {
                let candidate = Vec2::new(
                    self.rng.gen_range(x_min..=x_max),
                    self.rng.gen_range(y_min..=y_max),
                );
                let in_src = (candidate - src).norm_squared()
                    <= sq_radius_src + self.acceptance_slack;
                let in_dst = (candidate - dst).norm_squared()
                    <= sq_radius_dst + self.acceptance_slack;
                if in_src && in_dst {
                    accepted = Some(candidate);
                    break;
                }
            }
            let Some(position) = accepted else {
                return Err(Error::NotConverged(MAX_REJECTIONS));
            };
            positions[idx] = Some(position);
        }

        let mut out = Vec::with_capacity(n);
        out.push(*u);
        for idx in 1..n - 1 {
            if let Some(position) = positions[idx] {
                let (lat, lon) = self.reference.inverse(position.y, position.x);
                out.push(Probe::new(timestamps[idx], lat, lon));
            }
        }
        out.push(*v);

        let fill_speed = u.speed.is_some() && v.speed.is_some();
        let fill_heading = u.heading.is_some() && v.heading.is_some();
        fill_motion_columns(&mut out, fill_speed, fill_heading);
        Ok(out)
    }
}
