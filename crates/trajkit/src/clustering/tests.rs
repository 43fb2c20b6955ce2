use super::*;

fn v(x: f64, y: f64) -> Vec2 {
    Vec2::new(x, y)
}

#[test]
fn clusters_repeated_subtrajectory() {
    // A tour that retraces the vertex range [2, 6) three times within
    // the radius.
    let polyline = vec![
        v(69.5, 10.5),
        v(70.0, 11.0),
        v(70.1511, 11.5301),
        v(69.9253, 11.89154),
        v(70.1511, 11.5301),
        v(69.9253, 11.89154),
        v(70.5, 12.5),
        v(71.2556, 12.5740),
        v(71.85568, 13.574),
        v(71.0, 14.5),
        v(71.2714, 14.6743),
        v(69.9343, 14.855),
        v(68.624, 13.4003),
        v(68.3802, 12.1896),
        v(68.56099, 12.0632),
        v(69.9975, 12.26197),
        v(70.5, 13.0),
        v(71.7277, 13.0),
        v(71.669, 13.6624),
        v(72.2472, 14.3942),
        v(72.40986, 15.0899),
        v(73.0152, 13.6443),
        v(72.7622, 13.0028),
        v(73.0, 11.0),
        v(71.0, 11.0),
        v(70.44929, 11.8825),
        v(70.241488, 13.0570),
        v(71.1359, 13.4365),
        v(71.58768, 13.9243),
        v(71.74128, 14.45745),
        v(71.62321, 15.1260),
        v(71.0094, 15.60489),
    ];
    let clustering = SubTrajectoryClustering::new(3, 0.5);
    let result = clustering.cluster(&polyline).unwrap();
    assert_eq!(result.length, 4);
    assert_eq!((result.start, result.end), (2, 6));
    assert!(result.size >= 3);
}

#[test]
fn straight_line_has_no_multi_path_cluster() {
    let polyline: Vec<Vec2> = (0..8).map(|i| v(i as f64 * 5.0, 0.0)).collect();
    // A polyline that never revisits itself cannot support three
    // simultaneous monotone paths.
    let clustering = SubTrajectoryClustering::new(3, 0.5);
    let result = clustering.cluster(&polyline).unwrap();
    assert!(result.length <= 1, "unexpected cluster {result:?}");
}

#[test]
fn cluster_rejects_degenerate_input() {
    let clustering = SubTrajectoryClustering::new(2, 0.5);
    assert!(clustering.cluster(&[v(0.0, 0.0)]).is_err());
    assert!(SubTrajectoryClustering::new(2, 0.0)
        .cluster(&[v(0.0, 0.0), v(1.0, 0.0)])
        .is_err());
}
