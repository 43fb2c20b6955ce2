use super::*;

fn manual_bridge(anchor: (f64, f64), mu: (f64, f64)) -> Bridge {
    Bridge {
        anchor: Vec2::new(anchor.0, anchor.1),
        mu: Vec2::new(mu.0, mu.1),
        sigma_squared: 0.0,
        first: 0,
        last: 0,
    }
}

#[test]
fn mle_single_bridge_unit_deviation() {
    // Canonical regression scenario: unit deviation, estimate 1/2.
    let bridges = vec![manual_bridge((0.0, 1.0), (0.0, 0.0))];
    let mle = Mle::default();
    let estimate = mle.estimate(&bridges).unwrap();
    assert!((estimate - 0.5).abs() < 1e-5, "got {estimate}");
}

#[test]
fn mle_single_bridge_large_deviation() {
    let bridges = vec![manual_bridge((10.0, 20.0), (20.0, 10.0))];
    let estimate = Mle::default().estimate(&bridges).unwrap();
    assert!((estimate - 100.0).abs() < 1e-4, "got {estimate}");
}

#[test]
fn mle_two_bridges_pools_deviations() {
    let bridges = vec![
        manual_bridge((0.0, 1.0), (0.0, 0.0)),
        manual_bridge((10.0, 20.0), (20.0, 10.0)),
    ];
    // Pooled estimate: (1 + 200) / (2 * 2).
    let estimate = Mle::default().estimate(&bridges).unwrap();
    assert!((estimate - 50.25).abs() < 1e-4, "got {estimate}");
}

#[test]
fn mle_rejects_empty_and_bad_brackets() {
    let mle = Mle::default();
    assert!(mle.estimate(&[]).is_err());
    let bridges = vec![manual_bridge((0.0, 1.0), (0.0, 0.0))];
    assert!(mle.estimate_in(&bridges, 0.0, 1.0).is_err());
    assert!(mle.estimate_in(&bridges, 2.0, 1.0).is_err());
}

#[test]
fn bridges_from_three_probes() {
    let probes = vec![
        Probe::new(1001.0, 51.443780998, 5.47970146),
        Probe::new(1002.0, 51.44394316, 5.479985774),
        Probe::new(1003.0, 51.444081916, 5.480219126),
    ];
    let reference = LocalReference::new(probes[0].lat, probes[0].lon);
    let bridges = build_bridges(&probes, &reference).unwrap();
    assert_eq!(bridges.len(), 1);
    assert_eq!((bridges[0].first, bridges[0].last), (0, 2));
    let estimate = Mle::default().estimate(&bridges).unwrap();
    assert!((estimate - 2.416917).abs() < 2e-5, "got {estimate}");
}

#[test]
fn bridges_from_six_probes_match_reference_mle() {
    let probes = vec![
        Probe::new(1001.0, 51.443780998, 5.47970146),
        Probe::new(1002.0, 51.44394316, 5.479985774),
        Probe::new(1003.0, 51.444081916, 5.480219126),
        Probe::new(1004.0, 51.444402058, 5.480742157),
        Probe::new(1005.0, 51.444943702, 5.481090844),
        Probe::new(1006.0, 51.445498713, 5.481675566),
    ];
    let reference = LocalReference::new(probes[0].lat, probes[0].lon);
    let bridges = build_bridges(&probes, &reference).unwrap();
    // Two full bridges plus the trailing pair.
    assert_eq!(bridges.len(), 3);
    assert_eq!((bridges[2].first, bridges[2].last), (4, 5));
    assert_eq!(bridges[2].squared_deviation(), 0.0);
    let estimate = Mle::default().estimate(&bridges).unwrap();
    assert!((estimate - 32.2321283).abs() < 1e-4, "got {estimate}");
}

#[test]
fn build_bridges_validates_input() {
    let reference = LocalReference::new(51.0, 5.0);
    let one = vec![Probe::new(0.0, 51.0, 5.0)];
    assert!(build_bridges(&one, &reference).is_err());
    let unordered = vec![Probe::new(1.0, 51.0, 5.0), Probe::new(1.0, 51.001, 5.0)];
    assert!(build_bridges(&unordered, &reference).is_err());
}

#[test]
fn parameter_selector_quantile_buckets() {
    let mut bridges: Vec<Bridge> = (0..8)
        .map(|_| manual_bridge((0.0, 0.0), (0.0, 0.0)))
        .collect();
    for (i, bridge) in bridges.iter_mut().enumerate() {
        bridge.sigma_squared = (i + 1) as f64;
    }
    let selected = ParameterSelector::new(4).select(&bridges).unwrap();
    assert_eq!(selected.len(), 4);
    // Representatives come from successive quantile buckets, ascending.
    for w in selected.windows(2) {
        assert!(w[0] < w[1]);
    }
    // More coefficients than bridges degrades gracefully.
    let few = vec![bridges[0], bridges[3]];
    let selected = ParameterSelector::new(5).select(&few).unwrap();
    assert_eq!(selected.len(), 2);
}

#[test]
fn log_likelihood_peaks_at_pooled_estimate() {
    let bridge = manual_bridge((3.0, 0.0), (0.0, 0.0));
    // d^2 = 9, so the per-bridge optimum is 4.5.
    let at_optimum = log_likelihood(&bridge, 4.5);
    for sigma in [1.0, 2.0, 4.0, 5.0, 9.0, 20.0] {
        assert!(log_likelihood(&bridge, sigma) <= at_optimum + 1e-12);
    }
}
