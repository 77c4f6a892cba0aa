// Copyright 2026 the Kruco Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The curve-curve intersection entry points.

use alloc::vec::Vec;
use core::ops::Range;

use crate::classify::{classify_and_merge, coincident_runs, merge_coincident_points};
use crate::locate::check_for_overlap;
use crate::newton::{refine, RefineStatus};
use crate::search::{find_leaves, find_leaves_in, Leaf, LeafOrigin};
use crate::{
    BezierCurve, Classification, DeCasteljau, Error, Evaluator, Intersection, IntersectOptions,
    IntersectionPoint, Overlap, ResultSet, Segment, UnresolvedReason,
};

/// Compute the intersections of two curves with default options.
///
/// # Errors
///
/// Only invalid options are rejected, and the defaults are valid, so this
/// does not fail in practice; the `Result` matches [`intersect_with`].
///
/// # Examples
///
/// ```
/// use kruco::{intersect, BezierCurve, Classification};
///
/// let a = BezierCurve::line((0.0, 0.0), (2.0, 2.0)).unwrap();
/// let b = BezierCurve::line((0.0, 2.0), (2.0, 0.0)).unwrap();
/// let result = intersect(&a, &b).unwrap();
/// let p = result.points().next().unwrap();
/// assert!((p.s - 0.5).abs() < 1e-12 && (p.t - 0.5).abs() < 1e-12);
/// assert_eq!(p.kind, Classification::Simple);
/// ```
pub fn intersect(a: &BezierCurve, b: &BezierCurve) -> Result<ResultSet, Error> {
    intersect_with(a, b, &IntersectOptions::default(), &DeCasteljau)
}

/// Compute the intersections of two curves.
///
/// Every entry of the result is either a point `(s, t)` with `A(s) ≈ B(t)`,
/// or an interval over which the curves coincide. Points whose residual could
/// not be brought below the tolerance are kept, classified as
/// [`Classification::Unresolved`].
///
/// When the curves are found to coincide over an interval, the overlap is
/// reported and the search continues over the parameters outside it.
///
/// # Errors
///
/// Returns [`Error::InvalidOptions`] if `options` fails
/// [`IntersectOptions::validate`].
pub fn intersect_with<E: Evaluator>(
    a: &BezierCurve,
    b: &BezierCurve,
    options: &IntersectOptions,
    evaluator: &E,
) -> Result<ResultSet, Error> {
    options.validate()?;
    let tolerance = options.tolerance_for(a, b);

    let overlap = if options.coincidence_precheck {
        check_for_overlap(a, b, options, tolerance, evaluator)
    } else {
        None
    };
    let (leaves, stats) = match overlap {
        Some(o) => find_leaves_in(outside_overlap(a, b, &o), options, tolerance, evaluator),
        None => find_leaves(a, b, options, tolerance, evaluator),
    };
    // Leaves on the edge of the overlap are its ends, seen from outside.
    let leaves = leaves
        .into_iter()
        .filter(|leaf| {
            let slack = leaf.s_width.max(leaf.t_width) + options.merge_tolerance;
            !overlap.is_some_and(|o| o.contains(leaf.s, leaf.t, slack))
        })
        .collect();
    let (overlaps, leaves) = coincident_runs(a, b, leaves, options, tolerance, evaluator);
    let points = leaves
        .iter()
        .map(|leaf| refine_leaf(a, b, leaf, options, tolerance, evaluator))
        .collect();
    let points = merge_coincident_points(a, b, points, tolerance, evaluator);
    let items: Vec<Intersection> = overlap
        .into_iter()
        .chain(overlaps)
        .map(Intersection::Coincident)
        .chain(points.into_iter().map(Intersection::Point))
        .collect();
    Ok(classify_and_merge(items, options).with_stats(stats))
}

/// Root pairs covering every `(s, t)` outside the parameter box of `overlap`.
fn outside_overlap(
    a: &BezierCurve,
    b: &BezierCurve,
    overlap: &Overlap,
) -> Vec<(Segment, Segment)> {
    let (s_in, t_in) = (overlap.s_range(), overlap.t_range());
    let outside = |inside: Range<f64>| {
        [0.0..inside.start, inside.end..1.0]
            .into_iter()
            .filter(|d| d.end > d.start)
    };
    let mut roots: Vec<_> = outside(s_in.clone())
        .map(|d| (Segment::over(a, d), Segment::new(b)))
        .collect();
    if s_in.end > s_in.start {
        let middle = Segment::over(a, s_in);
        roots.extend(outside(t_in).map(|d| (middle.clone(), Segment::over(b, d))));
    }
    roots
}

/// Intersect many pairs of curves with the default evaluator.
///
/// With the `rayon` feature the pairs are processed in parallel; the results
/// are in the order of the input either way.
pub fn intersect_many(
    pairs: &[(BezierCurve, BezierCurve)],
    options: &IntersectOptions,
) -> Vec<Result<ResultSet, Error>> {
    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;
        pairs
            .par_iter()
            .map(|(a, b)| intersect_with(a, b, options, &DeCasteljau))
            .collect()
    }
    #[cfg(not(feature = "rayon"))]
    {
        pairs
            .iter()
            .map(|(a, b)| intersect_with(a, b, options, &DeCasteljau))
            .collect()
    }
}

/// Polish a leaf into an intersection point.
fn refine_leaf<E: Evaluator>(
    a: &BezierCurve,
    b: &BezierCurve,
    leaf: &Leaf,
    options: &IntersectOptions,
    tolerance: f64,
    evaluator: &E,
) -> IntersectionPoint {
    let refined = refine(a, b, leaf.s, leaf.t, options, tolerance, evaluator);
    let kind = match refined.status {
        RefineStatus::Converged => Classification::Simple,
        RefineStatus::Tangent => Classification::Tangent,
        RefineStatus::TangentUnresolved | RefineStatus::Diverged => {
            Classification::Unresolved(match leaf.origin {
                LeafOrigin::Small => UnresolvedReason::RefinementDivergence,
                LeafOrigin::DepthLimit => UnresolvedReason::SubdivisionBudgetExceeded,
                LeafOrigin::CandidateCeiling => UnresolvedReason::CandidateCeiling,
            })
        }
    };
    if !kind.is_resolved() {
        // Keep whichever of the coarse and refined estimates is closer.
        let coarse = evaluator
            .evaluate(a.points(), leaf.s)
            .distance(evaluator.evaluate(b.points(), leaf.t));
        if coarse < refined.residual {
            return IntersectionPoint {
                s: leaf.s,
                t: leaf.t,
                residual: coarse,
                kind,
            };
        }
    }
    IntersectionPoint {
        s: refined.s,
        t: refined.t,
        residual: refined.residual,
        kind,
    }
}
