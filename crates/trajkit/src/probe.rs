//! Probe tuple types consumed by the trajectory algorithms.
//!
//! Probes are owned by the caller; algorithms only borrow them and emit
//! indices back into the caller's buffer.

use crate::geom::Vec2;

/// A geolocated, time-stamped sample. Speed (m/s) and heading (degrees,
/// [0, 360)) are optional columns carried through interpolation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Probe {
    pub time: f64,
    pub lat: f64,
    pub lon: f64,
    pub speed: Option<f64>,
    pub heading: Option<f64>,
}

impl Probe {
    #[inline]
    pub fn new(time: f64, lat: f64, lon: f64) -> Self {
        Self {
            time,
            lat,
            lon,
            speed: None,
            heading: None,
        }
    }

    #[inline]
    pub fn with_motion(time: f64, lat: f64, lon: f64, speed: f64, heading: f64) -> Self {
        Self {
            time,
            lat,
            lon,
            speed: Some(speed),
            heading: Some(heading),
        }
    }
}

/// A sample already projected into a local Cartesian frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CartesianProbe {
    pub position: Vec2,
    pub time: f64,
}

impl CartesianProbe {
    #[inline]
    pub fn new(position: Vec2, time: f64) -> Self {
        Self { position, time }
    }
}

/// Velocity vector from a speed magnitude and a heading in degrees.
#[inline]
pub fn velocity(speed: f64, heading: f64) -> Vec2 {
    let h = heading.to_radians();
    Vec2::new(speed * h.cos(), speed * h.sin())
}
