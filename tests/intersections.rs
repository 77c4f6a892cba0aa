// Copyright 2026 the Kruco Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use assert_matches::assert_matches;
use kruco::{
    classify_and_merge, intersect, intersect_with, BezierCurve, Classification, DeCasteljau,
    Error, Intersection, IntersectOptions, InvalidInput, Overlap, Point, UnresolvedReason, Vec2,
};

fn cubic() -> BezierCurve {
    BezierCurve::new([(0.0, 0.0), (1.0, 2.0), (3.0, -1.0), (4.0, 1.0)]).unwrap()
}

#[test]
fn crossing_lines() {
    let a = BezierCurve::line((0.0, 0.0), (2.0, 2.0)).unwrap();
    let b = BezierCurve::line((0.0, 2.0), (2.0, 0.0)).unwrap();
    let result = intersect(&a, &b).unwrap();
    assert_eq!(result.len(), 1);
    assert_matches!(
        result.intersections()[0],
        Intersection::Point(p) if p.kind == Classification::Simple
            && (p.s - 0.5).abs() < 1e-12
            && (p.t - 0.5).abs() < 1e-12
    );
}

#[test]
fn disjoint_boxes_stop_immediately() {
    let a = BezierCurve::new([(0.0, 0.0), (0.5, 1.0), (1.0, 0.0)]).unwrap();
    let b = BezierCurve::new([(5.0, 0.0), (5.5, 1.0), (6.0, 0.0)]).unwrap();
    let result = intersect(&a, &b).unwrap();
    assert!(result.is_empty());
    assert_eq!(result.stats().candidates, 1);
    assert_eq!(result.stats().max_depth_reached, 0);
}

#[test]
fn shifted_copy_is_empty() {
    let a = cubic();
    let b = a.translated(Vec2::new(0.0, a.bounding_box().diameter() + 0.5));
    assert!(intersect(&a, &b).unwrap().is_empty());
}

#[test]
fn tangent_parabola_and_line() {
    let a = BezierCurve::new([(-1.0, 1.0), (0.0, -1.0), (1.0, 1.0)]).unwrap();
    let b = BezierCurve::line((-1.0, 0.0), (1.0, 0.0)).unwrap();
    let result = intersect(&a, &b).unwrap();
    assert_eq!(result.len(), 1, "{result:?}");
    let p = result.points().next().unwrap();
    assert_eq!(p.kind, Classification::Tangent);
    assert!((p.s - 0.5).abs() < 1e-6);
    assert!((p.t - 0.5).abs() < 1e-6);
    assert!(p.residual < 1e-9);
}

#[test]
fn tangent_circle_like_curves() {
    // Two arcs bulging towards each other, touching at (0, 0).
    let a = BezierCurve::new([(-1.0, 1.0), (0.0, -1.0), (1.0, 1.0)]).unwrap();
    let b = BezierCurve::new([(-1.0, -1.0), (0.0, 1.0), (1.0, -1.0)]).unwrap();
    let result = intersect(&a, &b).unwrap();
    assert_eq!(result.len(), 1, "{result:?}");
    let p = result.points().next().unwrap();
    assert_eq!(p.kind, Classification::Tangent);
    assert!((p.s - 0.5).abs() < 1e-6 && (p.t - 0.5).abs() < 1e-6);
}

#[test]
fn shared_endpoint_is_corner() {
    let a = BezierCurve::line((0.0, 0.0), (1.0, 1.0)).unwrap();
    let b = BezierCurve::new([(1.0, 1.0), (2.0, 0.0), (3.0, 1.0)]).unwrap();
    let result = intersect(&a, &b).unwrap();
    assert_eq!(result.len(), 1, "{result:?}");
    let p = result.points().next().unwrap();
    assert_eq!((p.s, p.t), (1.0, 0.0));
    assert_eq!(p.kind, Classification::Corner);
}

#[test]
fn self_intersection_is_full_overlap() {
    let a = cubic();
    let result = intersect(&a, &a).unwrap();
    assert_eq!(
        result.intersections(),
        &[Intersection::Coincident(Overlap {
            s_start: 0.0,
            s_end: 1.0,
            t_start: 0.0,
            t_end: 1.0,
        })]
    );
}

#[test]
fn reversed_copy_overlaps_backwards() {
    let a = cubic();
    let result = intersect(&a, &a.reversed()).unwrap();
    let overlaps: Vec<_> = result.overlaps().collect();
    assert_eq!(overlaps.len(), 1);
    assert!(overlaps[0].is_reversed());
    assert_eq!(overlaps[0].s_range(), 0.0..1.0);
    assert_eq!(overlaps[0].t_range(), 0.0..1.0);
}

#[test]
fn partial_overlap_of_subsegments() {
    let c = cubic();
    let a = c.subsegment(0.0..0.75);
    let b = c.subsegment(0.25..1.0);
    let result = intersect(&a, &b).unwrap();
    assert_eq!(result.len(), 1, "{result:?}");
    let o = result.overlaps().next().unwrap();
    assert!((o.s_start - 1.0 / 3.0).abs() < 1e-7);
    assert_eq!(o.s_end, 1.0);
    assert_eq!(o.t_start, 0.0);
    assert!((o.t_end - 2.0 / 3.0).abs() < 1e-7);
}

#[test]
fn symmetric_under_swap() {
    let a = cubic();
    let b = BezierCurve::new([(0.0, 1.0), (1.5, -2.0), (2.5, 2.0), (4.0, -0.5)]).unwrap();
    let options = IntersectOptions::default();
    let ab = intersect(&a, &b).unwrap();
    let ba = intersect(&b, &a).unwrap().swapped(&options);
    assert!(!ab.is_empty());
    assert_eq!(ab.len(), ba.len());
    for (p, q) in ab.points().zip(ba.points()) {
        assert!((p.s - q.s).abs() < 1e-8, "{p:?} vs {q:?}");
        assert!((p.t - q.t).abs() < 1e-8, "{p:?} vs {q:?}");
        assert_eq!(p.kind, q.kind);
    }
}

#[test]
fn merge_is_idempotent() {
    let a = cubic();
    let b = BezierCurve::new([(0.0, 1.0), (1.5, -2.0), (2.5, 2.0), (4.0, -0.5)]).unwrap();
    let options = IntersectOptions::default();
    let result = intersect(&a, &b).unwrap();
    let again = classify_and_merge(result.intersections().iter().copied(), &options);
    assert_eq!(result.intersections(), again.intersections());
}

#[test]
fn residuals_are_bounded() {
    let a = cubic();
    let b = BezierCurve::new([(0.0, 1.0), (1.5, -2.0), (2.5, 2.0), (4.0, -0.5)]).unwrap();
    let options = IntersectOptions::default();
    let result = intersect(&a, &b).unwrap();
    for p in result.points() {
        assert!(p.kind.is_resolved());
        assert!(p.residual <= options.tolerance_for(&a, &b));
        assert!(a.eval(p.s).distance(b.eval(p.t)) < 1e-8);
    }
}

#[test]
fn candidate_ceiling_is_reported() {
    let a = cubic();
    let b = BezierCurve::new([(0.0, 1.0), (1.5, -2.0), (2.5, 2.0), (4.0, -0.5)]).unwrap();
    let options = IntersectOptions::default().with_max_candidates(Some(4));
    let result = intersect_with(&a, &b, &options, &DeCasteljau).unwrap();
    assert!(result.stats().ceiling_hit);
    // Coarse leaves either refine to real intersections or are kept as
    // unresolved; none are silently dropped.
    assert!(!result.is_empty());
    for p in result.points() {
        if let Classification::Unresolved(reason) = p.kind {
            assert_eq!(reason, UnresolvedReason::CandidateCeiling);
        }
    }
}

#[test]
fn invalid_input_fails_fast() {
    assert_matches!(
        BezierCurve::new([(0.0, 0.0), (f64::NAN, 1.0)]),
        Err(InvalidInput::NonFinite { index: 1, .. })
    );
    assert_matches!(
        BezierCurve::new([Point::new(1.0, 2.0)]),
        Err(InvalidInput::DegreeZero)
    );
    assert_matches!(
        BezierCurve::line((0.5, 0.5), (0.5, 0.5)),
        Err(InvalidInput::ZeroLength(_))
    );
    let a = cubic();
    let options = IntersectOptions::default().with_max_depth(99);
    assert_matches!(
        intersect_with(&a, &a, &options, &DeCasteljau),
        Err(Error::InvalidOptions {
            field: "max_depth",
            ..
        })
    );
}
