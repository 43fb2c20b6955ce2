//! WGS-84 geodesy and the local Cartesian reference frame.
//!
//! Geographic probes are projected into a local east/north metre frame
//! before any planar algorithm touches them. Distances and azimuths come
//! from the Vincenty inverse solution on the WGS-84 ellipsoid; headings
//! for statistics use the spherical great-circle formula.

use crate::geom::Vec2;

pub const WGS84_SEMI_MAJOR: f64 = 6_378_137.0;
pub const WGS84_FLATTENING: f64 = 1.0 / 298.257_223_563;

/// Vincenty inverse solution: geodesic length and forward azimuth.
///
/// Converges in a handful of iterations for the short baselines seen in
/// trajectory data; the nearly-antipodal non-convergent case falls back
/// to the last iterate.
fn vincenty_inverse(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> (f64, f64) {
    let a = WGS84_SEMI_MAJOR;
    let f = WGS84_FLATTENING;
    let b = (1.0 - f) * a;

    let l = (lon2 - lon1).to_radians();
    let u1 = ((1.0 - f) * lat1.to_radians().tan()).atan();
    let u2 = ((1.0 - f) * lat2.to_radians().tan()).atan();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = l;
    let mut iterations = 0;
    let (mut sin_sigma, mut cos_sigma, mut sigma);
    let (mut sin_alpha, mut cos_sq_alpha, mut cos_2sigma_m);
    loop {
        let (sin_lambda, cos_lambda) = lambda.sin_cos();
        sin_sigma = ((cos_u2 * sin_lambda).powi(2)
            + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
        .sqrt();
        if sin_sigma == 0.0 {
            // Coincident points.
            return (0.0, 0.0);
        }
        cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        sigma = sin_sigma.atan2(cos_sigma);
        sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
        cos_2sigma_m = if cos_sq_alpha != 0.0 {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
        } else {
            0.0
        };
        let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
        let lambda_prev = lambda;
        lambda = l
            + (1.0 - c)
                * f
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m
                            + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));
        iterations += 1;
        if (lambda - lambda_prev).abs() < 1e-12 || iterations >= 200 {
            break;
        }
    }

    let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
    let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
    let delta_sigma = big_b
        * sin_sigma
        * (cos_2sigma_m
            + big_b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                    - big_b / 6.0
                        * cos_2sigma_m
                        * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                        * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));
    let distance = b * big_a * (sigma - delta_sigma);
    let (sin_lambda, cos_lambda) = lambda.sin_cos();
    let azimuth = (cos_u2 * sin_lambda).atan2(cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda);
    (distance, azimuth.to_degrees())
}

/// Geodesic distance in metres between two geographic positions.
#[inline]
pub fn geodesic_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    vincenty_inverse(lat1, lon1, lat2, lon2).0
}

/// Forward geodesic azimuth in degrees, in (-180, 180].
#[inline]
pub fn geodesic_azimuth(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    vincenty_inverse(lat1, lon1, lat2, lon2).1
}

/// Initial great-circle bearing in degrees on the sphere.
pub fn bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_lambda = (lon2 - lon1).to_radians();
    let y = d_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * d_lambda.cos();
    y.atan2(x).to_degrees()
}

/// Great-circle bearing normalised to [0, 360).
#[inline]
pub fn heading(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    (bearing(lat1, lon1, lat2, lon2) + 360.0).rem_euclid(360.0)
}

/// Local Cartesian frame anchored at a geographic reference point.
///
/// `project` maps (lat, lon) to signed geodesic offsets (x east, y north)
/// in metres measured along the parallel and the meridian through the
/// reference; `inverse` maps back via an ellipsoid-curvature
/// linearisation refined against `project`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocalReference {
    pub lat0: f64,
    pub lon0: f64,
}

impl LocalReference {
    #[inline]
    pub fn new(lat0: f64, lon0: f64) -> Self {
        Self { lat0, lon0 }
    }

    pub fn project(&self, lat: f64, lon: f64) -> Vec2 {
        let x = geodesic_distance(self.lat0, self.lon0, self.lat0, lon)
            * (lon - self.lon0).signum_or_zero();
        let y = geodesic_distance(self.lat0, self.lon0, lat, self.lon0)
            * (lat - self.lat0).signum_or_zero();
        Vec2::new(x, y)
    }

    pub fn inverse(&self, y: f64, x: f64) -> (f64, f64) {
        let e_sq = WGS84_FLATTENING * (2.0 - WGS84_FLATTENING);
        let phi = self.lat0.to_radians();
        let w = (1.0 - e_sq * phi.sin() * phi.sin()).sqrt();
        // Meridian and prime-vertical radii of curvature at the reference.
        let m = WGS84_SEMI_MAJOR * (1.0 - e_sq) / (w * w * w);
        let n = WGS84_SEMI_MAJOR / w;
        let mut lat = self.lat0 + (y / m).to_degrees();
        let mut lon = self.lon0 + (x / (n * phi.cos())).to_degrees();
        for _ in 0..2 {
            let p = self.project(lat, lon);
            lat -= ((p.y - y) / m).to_degrees();
            lon -= ((p.x - x) / (n * phi.cos())).to_degrees();
        }
        (lat, lon)
    }
}

trait SignumOrZero {
    fn signum_or_zero(self) -> f64;
}

impl SignumOrZero for f64 {
    #[inline]
    fn signum_or_zero(self) -> f64 {
        if self == 0.0 {
            0.0
        } else {
            self.signum()
        }
    }
}
