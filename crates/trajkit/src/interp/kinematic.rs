//! Cubic interpolation from endpoint positions and velocities.

use crate::error::{Error, Result};
use crate::geo::LocalReference;
use crate::geom::Vec2;
use crate::probe::{velocity, Probe};

use super::{check_timestamps, fill_motion_columns};

/// Kinematic interpolator: fits the cubic
/// `p(tau) = p_u + v_u tau + b tau^2 / 2 + m tau^3 / 6`
/// through the endpoint positions and velocities, then reconstructs each
/// intermediate position and its velocity.
#[derive(Clone, Copy, Debug)]
pub struct KinematicInterpolator {
    pub reference: LocalReference,
    tolerance: f64,
}

impl KinematicInterpolator {
    pub fn new(reference_lat: f64, reference_lon: f64) -> Self {
        Self {
            reference: LocalReference::new(reference_lat, reference_lon),
            tolerance: 1e-5,
        }
    }

    /// Interpolate between `u` and `v` at the interior entries of
    /// `timestamps`. Both probes must carry speed and heading.
    pub fn interpolate(&self, u: &Probe, v: &Probe, timestamps: &[f64]) -> Result<Vec<Probe>> {
        check_timestamps(u, v, timestamps)?;
        let (Some(speed_u), Some(heading_u)) = (u.speed, u.heading) else {
            return Err(Error::InvalidInput("kinematic interpolation needs speed and heading"));
        };
        let (Some(speed_v), Some(heading_v)) = (v.speed, v.heading) else {
            return Err(Error::InvalidInput("kinematic interpolation needs speed and heading"));
        };

        let p_u = self.reference.project(u.lat, u.lon);
        let p_v = self.reference.project(v.lat, v.lon);
        let velocity_u = velocity(speed_u, heading_u);
        let mut velocity_v = velocity(speed_v, heading_v);

        let delta_position = p_v - p_u;
        let mut delta_velocity = velocity_v - velocity_u;
        let delta_t = v.time - u.time;
        let delta_t_squared = delta_t * delta_t;
        let delta_t_cubed = delta_t_squared * delta_t;

        // A still endpoint on a moving pair would pin the cubic; derive a
        // replacement speed from the displacement instead.
        let mut echo_v = *v;
        if delta_position.norm_squared() > self.tolerance
            && delta_velocity.norm_squared() < self.tolerance
        {
            let speed = delta_position.norm() / delta_t;
            velocity_v = velocity(speed, heading_v);
            delta_velocity = velocity_v - velocity_u;
            echo_v.speed = Some(speed);
        }

        let denominator = delta_t_cubed / 6.0 - delta_t_squared / 4.0;
        if denominator == 0.0 {
            return Err(Error::NumericDegeneracy("kinematic system is singular"));
        }
        let scaled_velocity = velocity_u * delta_t;
        let m = Vec2::new(
            (delta_position.x - scaled_velocity.x - delta_velocity.x / 2.0) / denominator,
            (delta_position.y - scaled_velocity.y - delta_velocity.y / 2.0) / denominator,
        );
        let b = Vec2::new(
            delta_velocity.x / delta_t_squared - m.x / 2.0,
            delta_velocity.y / delta_t_squared - m.y / 2.0,
        );

        let mut out = Vec::with_capacity(timestamps.len());
        let mut interior_velocities = Vec::with_capacity(timestamps.len().saturating_sub(2));
        out.push(*u);
        for t in &timestamps[1..timestamps.len() - 1] {
            let tau = t - u.time;
            let tau_squared = tau * tau;
            let tau_cubed = tau_squared * tau;
            let fraction = tau / delta_t;

            let position = p_u
                + velocity_u * tau
                + b * (tau_squared / 2.0)
                + m * (tau_cubed / 6.0);
            let (lat, lon) = self.reference.inverse(position.y, position.x);
            out.push(Probe::new(*t, lat, lon));

            // Blend the forward- and backward-propagated velocities by
            // the position inside the interval.
            let forward = (velocity_u + b * tau + m * (tau_squared / 2.0)) * (1.0 - fraction);
            let remaining = v.time - t;
            let backward = (velocity_v
                - b * remaining
                - m * (remaining * remaining / 2.0))
                * fraction;
            interior_velocities.push(forward + backward);
        }
        out.push(echo_v);

        fill_motion_columns(&mut out, false, true);
        let count = out.len();
        for (probe, vel) in out[1..count - 1].iter_mut().zip(&interior_velocities) {
            probe.speed = Some(vel.norm());
        }
        Ok(out)
    }
}
