use super::*;
use crate::geom::{PointD, Vec2};
use crate::similarity::StrongFrechet;

type P2 = PointD<2>;

fn p(x: f64, y: f64) -> P2 {
    P2::new(x, y)
}

fn v(x: f64, y: f64) -> Vec2 {
    Vec2::new(x, y)
}

#[test]
fn douglas_peucker_reference_polyline() {
    let points = vec![
        p(-6.19, -3.46),
        p(-4.99, 1.16),
        p(-2.79, -2.22),
        p(-1.87, 0.58),
        p(0.77, 0.22),
        p(-1.15, 3.06),
        p(5.33, -1.12),
    ];
    let coarse = douglas_peucker(&points, 30f64.sqrt()).unwrap();
    assert_eq!(coarse, vec![0, 6]);
    let fine = douglas_peucker(&points, 10f64.sqrt()).unwrap();
    assert_eq!(fine, vec![0, 1, 4, 5, 6]);
}

#[test]
fn douglas_peucker_degenerate_inputs() {
    let empty: Vec<P2> = Vec::new();
    assert!(douglas_peucker(&empty, 1.0).unwrap().is_empty());
    assert_eq!(douglas_peucker(&[p(1.0, 2.0)], 1.0).unwrap(), vec![0]);
    assert_eq!(
        douglas_peucker(&[p(0.0, 0.0), p(1.0, 1.0)], 1.0).unwrap(),
        vec![0, 1]
    );
}

#[test]
fn douglas_peucker_error_bound_holds() {
    let points: Vec<P2> = (0..40)
        .map(|i| p(i as f64 * 0.5, ((i as f64) * 0.7).sin()))
        .collect();
    let epsilon = 0.25;
    let kept = douglas_peucker(&points, epsilon).unwrap();
    assert_eq!(*kept.first().unwrap(), 0);
    assert_eq!(*kept.last().unwrap(), points.len() - 1);
    // Every dropped vertex is within epsilon of its covering chord.
    for w in kept.windows(2) {
        for idx in w[0]..=w[1] {
            let d = crate::geom::sq_distance_segment(&points[idx], &points[w[0]], &points[w[1]])
                .sqrt();
            assert!(d <= epsilon + 1e-9, "vertex {idx} at distance {d}");
        }
    }
}

#[test]
fn chan_chin_always_contains_consecutive_edges() {
    let points = vec![v(1.0, -6.0), v(4.0, -4.0), v(5.0, -2.0), v(6.0, -5.0)];
    let edges = ChanChin::new(2.0).shortcut_edges(&points);
    for i in 0..points.len() - 1 {
        assert!(edges.contains(&(i, i + 1)), "missing edge ({i}, {})", i + 1);
    }
}

#[test]
fn imai_iri_reference_polyline() {
    let points = vec![
        v(1.0, -6.0),
        v(4.0, -4.0),
        v(5.0, -2.0),
        v(6.0, -5.0),
        v(7.0, -2.0),
        v(8.0, -5.0),
        v(9.0, -2.0),
        v(10.0, -5.0),
        v(11.0, -2.0),
        v(13.0, -4.0),
    ];
    let kept = ImaiIri::new(2.0).simplify(&points).unwrap();
    assert_eq!(kept, vec![0, 1, 9]);
}

#[test]
fn imai_iri_degenerate_inputs() {
    let empty: Vec<Vec2> = Vec::new();
    assert!(ImaiIri::new(1.0).simplify(&empty).unwrap().is_empty());
    assert_eq!(ImaiIri::new(1.0).simplify(&[v(3.0, 4.0)]).unwrap(), vec![0]);
}

#[test]
fn agarwal_straight_line_collapses() {
    let points: Vec<P2> = (0..20).map(|i| p(i as f64, 0.0)).collect();
    let kept = Agarwal::new(0.5).simplify(&points).unwrap();
    assert_eq!(kept, vec![0, 19]);
}

#[test]
fn agarwal_keeps_endpoints_and_respects_epsilon() {
    let points: Vec<P2> = (0..30)
        .map(|i| p(i as f64 * 0.4, ((i as f64) * 0.9).sin() * 1.2))
        .collect();
    let epsilon = 0.6;
    let simplifier = Agarwal::new(epsilon);
    let kept = simplifier.simplify(&points).unwrap();
    assert_eq!(*kept.first().unwrap(), 0);
    assert_eq!(*kept.last().unwrap(), points.len() - 1);
    // Subsequence law.
    for w in kept.windows(2) {
        assert!(w[0] < w[1]);
    }
    // Error bound: the simplification is within epsilon + tolerance.
    let simplified: Vec<P2> = kept.iter().map(|&i| points[i]).collect();
    let sf = StrongFrechet::default().with_upper_bound(10.0);
    let d = sf.distance(&simplified, &points).unwrap();
    // The reported distance itself carries the search tolerance.
    assert!(
        d <= epsilon + simplifier.tolerance + sf.tolerance,
        "distance {d} exceeds bound"
    );
}

#[test]
fn agarwal_degenerate_inputs() {
    let empty: Vec<P2> = Vec::new();
    assert!(Agarwal::new(1.0).simplify(&empty).unwrap().is_empty());
    assert_eq!(Agarwal::new(1.0).simplify(&[p(1.0, 1.0)]).unwrap(), vec![0]);
    assert_eq!(
        Agarwal::new(1.0).simplify(&[p(0.0, 0.0), p(5.0, 5.0)]).unwrap(),
        vec![0, 1]
    );
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn polyline() -> impl Strategy<Value = Vec<P2>> {
        proptest::collection::vec((-20.0f64..20.0, -20.0f64..20.0), 2..25)
            .prop_map(|coords| coords.into_iter().map(|(x, y)| p(x, y)).collect())
    }

    proptest! {
        #[test]
        fn simplifications_are_subsequences_with_endpoints(points in polyline(), eps in 0.1f64..5.0) {
            let dp = douglas_peucker(&points, eps).unwrap();
            prop_assert_eq!(*dp.first().unwrap(), 0);
            prop_assert_eq!(*dp.last().unwrap(), points.len() - 1);
            prop_assert!(dp.windows(2).all(|w| w[0] < w[1]));

            let ag = Agarwal::new(eps).simplify(&points).unwrap();
            prop_assert_eq!(*ag.first().unwrap(), 0);
            prop_assert_eq!(*ag.last().unwrap(), points.len() - 1);
            prop_assert!(ag.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
