use super::*;
use crate::geo::geodesic_distance;
use crate::probe::Probe;

const LAT0: f64 = 40.84812546;
const LON0: f64 = -73.84451294;

#[test]
fn linear_interpolation_fills_interior_points() {
    let u = Probe::new(0.0, 40.84812546, -73.84451294);
    let v = Probe::new(4.0, 40.84841919, -73.84434509);
    let interpolator = LinearInterpolator::new(LAT0, LON0);
    let ts = [0.0, 1.0, 2.0, 3.0, 4.0];
    let out = interpolator.interpolate(&u, &v, &ts).unwrap();
    assert_eq!(out.len(), 5);
    assert_eq!(out[0], u);
    assert_eq!(out[4], v);
    // Interior timestamps carried through.
    for (probe, t) in out.iter().zip(ts) {
        assert_eq!(probe.time, t);
    }
    // Consecutive spacing is uniform for a constant-velocity motion.
    let d01 = geodesic_distance(out[0].lat, out[0].lon, out[1].lat, out[1].lon);
    let d12 = geodesic_distance(out[1].lat, out[1].lon, out[2].lat, out[2].lon);
    assert!((d01 - d12).abs() < 0.01, "{d01} vs {d12}");
    // Midpoint sits halfway.
    let total = geodesic_distance(u.lat, u.lon, v.lat, v.lon);
    let to_mid = geodesic_distance(u.lat, u.lon, out[2].lat, out[2].lon);
    assert!((to_mid - total / 2.0).abs() < 0.01);
}

#[test]
fn linear_interpolation_recomputes_motion_columns() {
    let u = Probe::with_motion(0.0, 40.84812546, -73.84451294, 2.0, 20.0);
    let v = Probe::with_motion(4.0, 40.84841919, -73.84434509, 2.0, 20.0);
    let interpolator = LinearInterpolator::new(LAT0, LON0);
    let out = interpolator
        .interpolate(&u, &v, &[0.0, 1.0, 2.0, 3.0, 4.0])
        .unwrap();
    for probe in &out[1..out.len() - 1] {
        assert!(probe.speed.is_some());
        let heading = probe.heading.unwrap();
        assert!((0.0..360.0).contains(&heading));
    }
    // Endpoint columns are preserved.
    assert_eq!(out[0].speed, Some(2.0));
    assert_eq!(out[out.len() - 1].heading, Some(20.0));
}

#[test]
fn linear_interpolation_validates_timestamps() {
    let u = Probe::new(5.0, LAT0, LON0);
    let v = Probe::new(1.0, LAT0, LON0);
    let interpolator = LinearInterpolator::new(LAT0, LON0);
    assert!(interpolator.interpolate(&u, &v, &[5.0, 1.0]).is_err());
    let w = Probe::new(9.0, LAT0, LON0);
    assert!(interpolator.interpolate(&u, &w, &[5.0, 20.0, 9.0]).is_err());
}

#[test]
fn kinematic_interpolation_honours_endpoints() {
    let u = Probe::with_motion(1461862301.0, 40.84830093, -73.8443985, 20.0, 5.2778);
    let v = Probe::with_motion(1461862305.0, 40.84841919, -73.84434509, 20.0, 3.05556);
    let interpolator = KinematicInterpolator::new(LAT0, LON0);
    let ts = [
        1461862301.0,
        1461862302.0,
        1461862303.0,
        1461862304.0,
        1461862305.0,
    ];
    let out = interpolator.interpolate(&u, &v, &ts).unwrap();
    assert_eq!(out.len(), 5);
    assert_eq!(out[0], u);
    assert_eq!(out[4].lat, v.lat);
    assert_eq!(out[4].lon, v.lon);
    // Interior probes carry reconstructed speeds and headings.
    for probe in &out[1..4] {
        assert!(probe.speed.is_some());
        assert!(probe.heading.is_some());
    }
    // The cubic stays in the broad vicinity of the endpoints.
    for probe in &out[1..4] {
        let d = geodesic_distance(u.lat, u.lon, probe.lat, probe.lon);
        assert!(d < 200.0, "interior point {d} metres away");
    }
}

#[test]
fn kinematic_interpolation_requires_motion_columns() {
    let u = Probe::new(0.0, LAT0, LON0);
    let v = Probe::with_motion(1.0, 40.8485, -73.8443, 1.0, 0.0);
    let interpolator = KinematicInterpolator::new(LAT0, LON0);
    assert!(interpolator.interpolate(&u, &v, &[0.0, 0.5, 1.0]).is_err());
}

#[test]
fn kinematic_interpolation_rescues_null_velocity_difference() {
    // Equal velocities but a real displacement: the end speed is rederived
    // from the displacement instead of collapsing the cubic.
    let u = Probe::with_motion(0.0, 40.84812546, -73.84451294, 0.0, 45.0);
    let v = Probe::with_motion(10.0, 40.84841919, -73.84434509, 0.0, 45.0);
    let interpolator = KinematicInterpolator::new(LAT0, LON0);
    let out = interpolator
        .interpolate(&u, &v, &[0.0, 5.0, 10.0])
        .unwrap();
    let rescued = out[out.len() - 1].speed.unwrap();
    assert!(rescued > 0.0, "speed was not rederived");
}

#[test]
fn random_interpolation_respects_reachability() {
    let u = Probe::new(0.0, 40.84812546, -73.84451294);
    let v = Probe::new(8.0, 40.84841919, -73.84434509);
    let max_speed = 10.0;
    let mut interpolator = RandomInterpolator::new(LAT0, LON0, max_speed, 42);
    let ts = [0.0, 2.0, 4.0, 6.0, 8.0];
    let out = interpolator.interpolate(&u, &v, &ts).unwrap();
    assert_eq!(out[0], u);
    assert_eq!(*out.last().unwrap(), v);
    // Every interior sample is reachable from both endpoints in time.
    for probe in &out[1..out.len() - 1] {
        let from_u = geodesic_distance(u.lat, u.lon, probe.lat, probe.lon);
        let to_v = geodesic_distance(probe.lat, probe.lon, v.lat, v.lon);
        assert!(from_u <= max_speed * (probe.time - u.time) + 1.5);
        assert!(to_v <= max_speed * (v.time - probe.time) + 1.5);
    }
    // Output is ordered by time.
    for w in out.windows(2) {
        assert!(w[0].time < w[1].time);
    }
}

#[test]
fn random_interpolation_is_reproducible_per_seed() {
    let u = Probe::new(0.0, 40.84812546, -73.84451294);
    let v = Probe::new(8.0, 40.84841919, -73.84434509);
    let ts = [0.0, 2.0, 4.0, 6.0, 8.0];
    let run = |seed: u64| {
        let mut interp = RandomInterpolator::new(LAT0, LON0, 10.0, seed);
        interp.interpolate(&u, &v, &ts).unwrap()
    };
    let a = run(7);
    let b = run(7);
    assert_eq!(a, b);
}

#[test]
fn random_interpolation_two_timestamps_echo_endpoints() {
    let u = Probe::new(0.0, LAT0, LON0);
    let v = Probe::new(1.0, 40.8485, -73.8443);
    let mut interpolator = RandomInterpolator::new(LAT0, LON0, 100.0, 1);
    let out = interpolator.interpolate(&u, &v, &[0.0, 1.0]).unwrap();
    assert_eq!(out, vec![u, v]);
}
