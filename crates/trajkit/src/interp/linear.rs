//! Constant-velocity interpolation between two probes.

use crate::error::Result;
use crate::geo::LocalReference;
use crate::probe::Probe;

use super::{check_timestamps, fill_motion_columns};

/// Linear interpolator over the local Cartesian frame.
#[derive(Clone, Copy, Debug)]
pub struct LinearInterpolator {
    pub reference: LocalReference,
}

impl LinearInterpolator {
    pub fn new(reference_lat: f64, reference_lon: f64) -> Self {
        Self {
            reference: LocalReference::new(reference_lat, reference_lon),
        }
    }

    /// Interpolate between `u` and `v` at the interior entries of
    /// `timestamps` (whose first and last entries are the probe
    /// timestamps). Output is `[u, interior..., v]`; speed and heading
    /// columns are recomputed when both endpoints carry them.
    pub fn interpolate(&self, u: &Probe, v: &Probe, timestamps: &[f64]) -> Result<Vec<Probe>> {
        check_timestamps(u, v, timestamps)?;
        let p_u = self.reference.project(u.lat, u.lon);
        let p_v = self.reference.project(v.lat, v.lon);
        let interval = v.time - u.time;

        let mut out = Vec::with_capacity(timestamps.len());
        out.push(*u);
        for t in &timestamps[1..timestamps.len() - 1] {
            let fraction = (t - u.time) / interval;
            let position = p_u + (p_v - p_u) * fraction;
            let (lat, lon) = self.reference.inverse(position.y, position.x);
            out.push(Probe::new(*t, lat, lon));
        }
        out.push(*v);

        let fill_speed = u.speed.is_some() && v.speed.is_some();
        let fill_heading = u.heading.is_some() && v.heading.is_some();
        fill_motion_columns(&mut out, fill_speed, fill_heading);
        Ok(out)
    }
}
