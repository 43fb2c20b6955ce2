//! Interpolation between probe pairs.
//!
//! Every interpolator owns a [`LocalReference`]; probes are projected
//! into the local frame, interpolated, and mapped back to geographic
//! coordinates. Timestamp ranges include both endpoint timestamps and
//! the endpoint probes are echoed through the output.

mod kinematic;
mod linear;
mod random;

pub use kinematic::KinematicInterpolator;
pub use linear::LinearInterpolator;
pub use random::RandomInterpolator;

use crate::error::{Error, Result};
use crate::geo;
use crate::probe::Probe;

/// Validate a timestamp range against the probe pair: ordered endpoints,
/// interior timestamps inside the open interval.
fn check_timestamps(u: &Probe, v: &Probe, timestamps: &[f64]) -> Result<()> {
    if v.time == u.time {
        return Err(Error::NumericDegeneracy("zero time difference between probes"));
    }
    if v.time < u.time {
        return Err(Error::InvalidInput("probe timestamps must be increasing"));
    }
    if timestamps.len() < 2 {
        return Err(Error::InvalidInput("timestamp range must include both endpoints"));
    }
    for t in &timestamps[1..timestamps.len() - 1] {
        if *t < u.time || *t > v.time {
            return Err(Error::InvalidInput("interior timestamps must lie between the probes"));
        }
    }
    Ok(())
}

/// Recompute interior speeds from consecutive geodesic displacement and
/// interior headings from the bearing out of the range start, mirroring
/// the endpoint probes' columns. Applied when both endpoints carry the
/// respective column.
fn fill_motion_columns(probes: &mut [Probe], fill_speed: bool, fill_heading: bool) {
    let n = probes.len();
    if n < 2 {
        return;
    }
    if fill_heading {
        for i in 1..n - 1 {
            let azimuth = geo::geodesic_azimuth(
                probes[0].lat,
                probes[0].lon,
                probes[i].lat,
                probes[i].lon,
            );
            probes[i].heading = Some((azimuth + 360.0).rem_euclid(360.0));
        }
    }
    if fill_speed {
        for i in 1..n - 1 {
            let distance = geo::geodesic_distance(
                probes[i - 1].lat,
                probes[i - 1].lon,
                probes[i].lat,
                probes[i].lon,
            );
            let dt = probes[i].time - probes[i - 1].time;
            probes[i].speed = (dt > 0.0).then(|| distance / dt);
        }
    }
}

#[cfg(test)]
mod tests;
