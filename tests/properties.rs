// Copyright 2026 the Kruco Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Randomized checks of the intersection engine.

use kruco::{classify_and_merge, intersect, BezierCurve, IntersectOptions, Point};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn point() -> impl Strategy<Value = Point> {
    (-10.0..10.0f64, -10.0..10.0f64).prop_map(|(x, y)| Point::new(x, y))
}

fn curve() -> impl Strategy<Value = BezierCurve> {
    prop::collection::vec(point(), 2..=5).prop_map(|pts| BezierCurve::new(pts).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn resolved_points_meet(a in curve(), b in curve()) {
        let options = IntersectOptions::default();
        let result = intersect(&a, &b).unwrap();
        for p in result.points().filter(|p| p.kind.is_resolved()) {
            prop_assert!(p.residual <= options.tolerance_for(&a, &b));
            prop_assert!((0.0..=1.0).contains(&p.s) && (0.0..=1.0).contains(&p.t));
        }
    }

    #[test]
    fn result_is_a_fixed_point(a in curve(), b in curve()) {
        let options = IntersectOptions::default();
        let result = intersect(&a, &b).unwrap();
        let again = classify_and_merge(result.intersections().iter().copied(), &options);
        prop_assert_eq!(result.intersections(), again.intersections());
    }

    #[test]
    fn self_intersection_is_coincident(a in curve()) {
        let result = intersect(&a, &a).unwrap();
        prop_assert_eq!(result.len(), 1);
        let o = result.overlaps().next().unwrap();
        prop_assert_eq!(o.s_range(), 0.0..1.0);
        prop_assert_eq!(o.t_range(), 0.0..1.0);
    }
}

/// A line through a chosen point of a random cubic must be found crossing it
/// there, from either side of the call.
#[test]
fn planted_crossings_are_found() {
    let mut rng = StdRng::seed_from_u64(0x6b72_7563_6f);
    let options = IntersectOptions::default();
    let mut checked = 0;
    while checked < 50 {
        let pts: Vec<Point> = (0..4)
            .map(|_| Point::new(rng.random_range(-5.0..5.0), rng.random_range(-5.0..5.0)))
            .collect();
        let a = BezierCurve::new(pts).unwrap();
        let s0 = rng.random_range(0.05..0.95);
        let tangent = a.deriv(s0);
        if tangent.hypot() < 0.5 {
            continue;
        }
        let angle: f64 = rng.random_range(0.0..core::f64::consts::PI);
        let dir = kruco::Vec2::new(angle.cos(), angle.sin());
        if tangent.sin_angle(dir) < 0.2 {
            continue;
        }
        let p = a.eval(s0);
        let b = BezierCurve::line(p - dir, p + dir).unwrap();

        let ab = intersect(&a, &b).unwrap();
        assert!(
            ab.points()
                .any(|q| (q.s - s0).abs() < 1e-6 && (q.t - 0.5).abs() < 1e-6 && q.kind.is_resolved()),
            "s0 = {s0}, a = {a:?}, b = {b:?}: {ab:?}"
        );
        let ba = intersect(&b, &a).unwrap().swapped(&options);
        assert!(
            ba.points()
                .any(|q| (q.s - s0).abs() < 1e-6 && (q.t - 0.5).abs() < 1e-6),
            "swapped, s0 = {s0}: {ba:?}"
        );
        checked += 1;
    }
}
