use super::*;

const EPS: f64 = 1e-5;

fn v(x: f64, y: f64) -> Vec2 {
    Vec2::new(x, y)
}

#[test]
fn squared_distance_point_segment_clamps_endpoints() {
    let a = v(0.0, 0.0);
    let b = v(4.0, 0.0);
    // Perpendicular foot inside the segment.
    assert!((sq_distance_segment(&v(2.0, 3.0), &a, &b) - 9.0).abs() < 1e-12);
    // Before the start.
    assert!((sq_distance_segment(&v(-3.0, 4.0), &a, &b) - 25.0).abs() < 1e-12);
    // Past the end.
    assert!((sq_distance_segment(&v(7.0, 4.0), &a, &b) - 25.0).abs() < 1e-12);
    // The infinite line ignores the clamps.
    assert!((sq_distance_line(&v(7.0, 4.0), &a, &b) - 16.0).abs() < 1e-12);
}

#[test]
fn sphere_segment_misses_touches_and_crosses() {
    let seg = Segment2::new(v(2.0, 2.0), v(4.0, 6.0));
    let tol = Tolerances::default();

    // Distance from (5,3) to the segment is sqrt(5); a smaller radius misses.
    let miss = sphere_segment_intersection(&Sphere2::new(v(5.0, 3.0), 1.371), &seg, tol);
    assert_eq!(miss, SphereSegmentIntersection::Empty);

    // Radius exactly the distance: tangent, a single crossing at (3,4).
    let touch = sphere_segment_intersection(&Sphere2::new(v(5.0, 3.0), 5f64.sqrt()), &seg, tol);
    assert!(matches!(touch, SphereSegmentIntersection::Tangent(_)));
    let touch_points: Vec<_> = touch.crossings().collect();
    assert_eq!(touch_points.len(), 1);
    assert_eq!(touch_points[0].sign, 0);
    assert!((touch_points[0].point - v(3.0, 4.0)).norm_squared() < 1e-4);

    // Clearly larger radius: two proper crossings, larger parameter first.
    let cross = sphere_segment_intersection(&Sphere2::new(v(5.0, 3.0), 2.509885), &seg, tol);
    let pts: Vec<_> = cross.crossings().collect();
    assert_eq!(pts.len(), 2);
    assert_eq!(pts[0].sign, 1);
    assert_eq!(pts[1].sign, 1);
    assert!((pts[0].point - v(3.509808, 5.019617)).norm_squared() < EPS);
    assert!((pts[1].point - v(2.490192, 2.980383)).norm_squared() < EPS);
}

#[test]
fn sphere_segment_clamps_contained_endpoints() {
    let tol = Tolerances::default();
    // Segment entirely inside the ball: both crossings clamp with sign -1.
    let seg = Segment2::new(v(-0.5, 0.0), v(0.5, 0.0));
    let inside = sphere_segment_intersection(&Sphere2::new(v(0.0, 0.0), 2.0), &seg, tol);
    let pts: Vec<_> = inside.crossings().collect();
    assert_eq!(pts.len(), 2);
    assert!(pts.iter().all(|c| c.sign == -1));
    assert_eq!(pts[0].point, seg.end);
    assert_eq!(pts[1].point, seg.start);

    // Only the start inside: one clamped, one proper crossing.
    let seg = Segment2::new(v(0.0, 0.0), v(5.0, 0.0));
    let half = sphere_segment_intersection(&Sphere2::new(v(0.0, 0.0), 2.0), &seg, tol);
    let pts: Vec<_> = half.crossings().collect();
    assert_eq!(pts.len(), 2);
    assert_eq!(pts[0].sign, 1);
    assert_eq!(pts[1].sign, -1);
    assert_eq!(pts[1].point, seg.start);
}

#[test]
fn sphere_sphere_lens_circle() {
    let tol = Tolerances::default();
    let lens = sphere_sphere_intersection(
        &Sphere2::new(v(6.0, 6.0), 5.0),
        &Sphere2::new(v(14.0, 10.0), 5.0),
        tol,
    );
    assert!((lens.center - v(10.0, 8.0)).norm_squared() < EPS);
    assert!((lens.squared_radius - 5.0).abs() < EPS);

    let disjoint = sphere_sphere_intersection(
        &Sphere2::new(v(6.0, 6.0), 2.5),
        &Sphere2::new(v(14.0, 10.0), 5.0),
        tol,
    );
    assert_eq!(disjoint, Sphere2::empty());
}

#[test]
fn disk_lens_mbr_brackets_the_lens() {
    let tol = Tolerances::default();
    let (p1, p2) = disk_lens_mbr(v(6.0, 6.0), v(14.0, 10.0), 5.0, 5.0, tol);
    // Corners must be distinct and the lens centre must lie inside the box.
    assert!((p1 - p2).norm_squared() > 1.0);
    let (x_min, x_max) = (p1.x.min(p2.x), p1.x.max(p2.x));
    let (y_min, y_max) = (p1.y.min(p2.y), p1.y.max(p2.y));
    assert!(x_min <= 10.0 && 10.0 <= x_max);
    assert!(y_min <= 8.0 && 8.0 <= y_max);

    // Disjoint disks collapse to a degenerate pair.
    let (q1, q2) = disk_lens_mbr(v(0.0, 0.0), v(10.0, 0.0), 1.0, 1.0, tol);
    assert_eq!(q1, q2);
}

#[test]
fn wedge_construction_matches_reference_slopes() {
    let tol = Tolerances::default();
    let radius = 1.41421356;
    let cases: [(Vec2, [f64; 4]); 7] = [
        (v(-4.0, 3.0), [0.206284249, 3.825136997, -0.206284249, 2.17486300]),
        (v(1.0, 2.0), [2.2247448, -0.2247448, -0.2247448, 2.2247448]),
        (v(-1.0, -2.0), [2.059411490, 0.059411490, 0.797731366, -1.202268633]),
        (v(3.0, -2.0), [-3.39116499, 8.173494, 3.39116499, -12.173494]),
        (v(5.0, 3.0), [-1.0, 8.0, 1.0, -2.0]),
        (
            v(-2.0, 7.0),
            [-0.4855756145, 6.0288487709, -1.2535548202, 4.4928903594],
        ),
        (v(6.0, -2.0), [-3.28571428, 17.71428571, -1.0, 4.0]),
    ];
    let center = v(3.0, 3.0);
    for (apex, expected) in cases {
        let wedge = Wedge::new(apex, center, radius, tol);
        assert!(!wedge.is_empty());
        assert!((wedge.slopes().x - expected[0]).abs() < EPS, "apex {apex:?}");
        assert!((wedge.intercepts().x - expected[1]).abs() < EPS, "apex {apex:?}");
        assert!((wedge.slopes().y - expected[2]).abs() < EPS, "apex {apex:?}");
        assert!((wedge.intercepts().y - expected[3]).abs() < EPS, "apex {apex:?}");
    }
}

#[test]
fn wedge_boundary_points_are_contained() {
    let tol = Tolerances::default();
    let apex = v(-4.0, 3.0);
    let wedge = Wedge::new(apex, v(3.0, 3.0), 1.41421356, tol);
    // Points on either tangent line satisfy the containment test.
    for x in [-4.0, -2.0, 0.0, 2.0, 5.0] {
        let on_1 = v(x, wedge.slopes().x * x + wedge.intercepts().x);
        let on_2 = v(x, wedge.slopes().y * x + wedge.intercepts().y);
        assert!(wedge.contains(on_1));
        assert!(wedge.contains(on_2));
    }
    // The disk centre is inside, the mirror of the centre is not.
    assert!(wedge.contains(v(3.0, 3.0)));
    assert!(!wedge.contains(v(-11.0, 3.0)));
}

#[test]
fn wedge_degenerate_inputs_are_empty() {
    let tol = Tolerances::default();
    // Apex inside the disk.
    assert!(Wedge::new(v(3.0, 3.0), v(3.0, 3.5), 2.0, tol).is_empty());
    // Apex on the boundary.
    assert!(Wedge::new(v(1.0, 3.0), v(3.0, 3.0), 2.0, tol).is_empty());
}

#[test]
fn wedge_intersection_narrows_or_empties() {
    let tol = Tolerances::default();
    let center = v(10.0, 0.0);
    let wide = Wedge::new(v(0.0, 0.0), center, 3.0, tol);
    let narrow = Wedge::new(v(0.0, 0.0), center, 1.0, tol);
    let meet = wide.intersect(&narrow);
    assert!(!meet.is_empty());
    // The intersection still contains the shared disk centre.
    assert!(meet.contains(center));
    assert_eq!(meet.slopes(), narrow.slopes());

    // Narrow cones towards separated disks cannot overlap.
    let up = Wedge::new(v(0.0, 0.0), v(10.0, 10.0), 1.0, tol);
    let down = Wedge::new(v(0.0, 0.0), v(10.0, -10.0), 1.0, tol);
    assert!(up.intersect(&down).is_empty());
}

#[test]
fn min_enclosing_ball_small_cases() {
    assert!(min_enclosing_ball(&[]).is_none());
    let (c, r) = min_enclosing_ball(&[v(2.0, 1.0)]).unwrap();
    assert_eq!(c, v(2.0, 1.0));
    assert_eq!(r, 0.0);

    let (c, r) = min_enclosing_ball(&[v(-1.0, 0.0), v(1.0, 0.0)]).unwrap();
    assert!((c - v(0.0, 0.0)).norm_squared() < 1e-12);
    assert!((r - 1.0).abs() < 1e-9);

    // Square: the circumcircle of the corners.
    let square = [v(0.0, 0.0), v(2.0, 0.0), v(2.0, 2.0), v(0.0, 2.0)];
    let (c, r) = min_enclosing_ball(&square).unwrap();
    assert!((c - v(1.0, 1.0)).norm_squared() < 1e-9);
    assert!((r - 2f64.sqrt()).abs() < 1e-6);

    // Interior points never grow the ball.
    let with_interior = [v(0.0, 0.0), v(2.0, 0.0), v(2.0, 2.0), v(0.0, 2.0), v(1.0, 1.0)];
    let (_, r2) = min_enclosing_ball(&with_interior).unwrap();
    assert!((r2 - r).abs() < 1e-9);
}
