// Copyright 2026 the Kruco Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Intersection results, and turning raw estimates into a clean result set.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::ops::Range;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;
use crate::common::{clamp_unit, snap_unit};
use crate::locate::endpoint_hits;
use crate::newton::project;
use crate::search::{Leaf, SearchStats};
use crate::{BezierCurve, Evaluator, IntersectOptions, Point};

/// Samples taken across a leaf run to confirm that the curves coincide.
const RUN_SAMPLES: [f64; 5] = [0.1, 0.3, 0.5, 0.7, 0.9];

/// Why an intersection could not be pinned down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum UnresolvedReason {
    /// Subdivision hit the maximum depth and refinement then failed; the
    /// parameters are the best estimate.
    SubdivisionBudgetExceeded,
    /// Refinement of a small candidate failed to meet the tolerance.
    RefinementDivergence,
    /// The candidate ceiling stopped the search before this pair was
    /// examined.
    CandidateCeiling,
}

/// The kind of an intersection point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Classification {
    /// A transversal crossing.
    Simple,
    /// The curves touch with parallel tangents.
    Tangent,
    /// The intersection is at an endpoint of either curve.
    Corner,
    /// The residual could not be brought below the tolerance.
    Unresolved(UnresolvedReason),
}

impl Classification {
    /// Whether the point met the tolerance.
    pub fn is_resolved(self) -> bool {
        !matches!(self, Self::Unresolved(_))
    }
}

/// A point where the curves meet.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntersectionPoint {
    /// Parameter on the first curve.
    pub s: f64,
    /// Parameter on the second curve.
    pub t: f64,
    /// `‖A(s) − B(t)‖`.
    pub residual: f64,
    /// The kind of intersection.
    pub kind: Classification,
}

impl IntersectionPoint {
    /// The same point with the roles of the curves exchanged.
    #[must_use]
    pub fn swapped(&self) -> Self {
        Self {
            s: self.t,
            t: self.s,
            ..*self
        }
    }
}

/// An interval over which the curves coincide.
///
/// `s_start < s_end` always holds; the interval on the second curve runs
/// from `t_start` to `t_end` and is decreasing when the curves run in
/// opposite directions.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Overlap {
    /// Start of the interval on the first curve.
    pub s_start: f64,
    /// End of the interval on the first curve.
    pub s_end: f64,
    /// Parameter on the second curve matching `s_start`.
    pub t_start: f64,
    /// Parameter on the second curve matching `s_end`.
    pub t_end: f64,
}

impl Overlap {
    /// The interval on the first curve.
    pub fn s_range(&self) -> Range<f64> {
        self.s_start..self.s_end
    }

    /// The interval on the second curve, in increasing order.
    pub fn t_range(&self) -> Range<f64> {
        self.t_start.min(self.t_end)..self.t_start.max(self.t_end)
    }

    /// Whether the curves run in opposite directions along the overlap.
    pub fn is_reversed(&self) -> bool {
        self.t_end < self.t_start
    }

    /// Whether a parameter pair lies in the overlap, widened by `slack`.
    pub fn contains(&self, s: f64, t: f64, slack: f64) -> bool {
        let tr = self.t_range();
        s >= self.s_start - slack
            && s <= self.s_end + slack
            && t >= tr.start - slack
            && t <= tr.end + slack
    }

    /// The same overlap with the roles of the curves exchanged.
    #[must_use]
    pub fn swapped(&self) -> Self {
        if self.is_reversed() {
            Self {
                s_start: self.t_end,
                s_end: self.t_start,
                t_start: self.s_end,
                t_end: self.s_start,
            }
        } else {
            Self {
                s_start: self.t_start,
                s_end: self.t_end,
                t_start: self.s_start,
                t_end: self.s_end,
            }
        }
    }
}

/// One entry of a result set.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Intersection {
    /// The curves meet at a point.
    Point(IntersectionPoint),
    /// The curves coincide over an interval.
    Coincident(Overlap),
}

impl Intersection {
    /// The entry with the roles of the curves exchanged.
    #[must_use]
    pub fn swapped(&self) -> Self {
        match self {
            Self::Point(p) => Self::Point(p.swapped()),
            Self::Coincident(o) => Self::Coincident(o.swapped()),
        }
    }

    fn sort_key(&self) -> (f64, f64) {
        match self {
            Self::Point(p) => (p.s, p.t),
            Self::Coincident(o) => (o.s_start, o.t_range().start),
        }
    }
}

/// The deduplicated intersections of two curves, sorted by parameter on the
/// first curve.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultSet {
    items: Vec<Intersection>,
    stats: SearchStats,
}

impl ResultSet {
    /// All entries.
    pub fn intersections(&self) -> &[Intersection] {
        &self.items
    }

    /// The point entries.
    pub fn points(&self) -> impl Iterator<Item = &IntersectionPoint> + '_ {
        self.items.iter().filter_map(|i| match i {
            Intersection::Point(p) => Some(p),
            Intersection::Coincident(_) => None,
        })
    }

    /// The coincident entries.
    pub fn overlaps(&self) -> impl Iterator<Item = &Overlap> + '_ {
        self.items.iter().filter_map(|i| match i {
            Intersection::Coincident(o) => Some(o),
            Intersection::Point(_) => None,
        })
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the curves do not meet.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Counters from the search that produced this result.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The result for the curves in the other order.
    #[must_use]
    pub fn swapped(&self, options: &IntersectOptions) -> Self {
        let mut swapped = classify_and_merge(self.items.iter().map(Intersection::swapped), options);
        swapped.stats = self.stats;
        swapped
    }

    pub(crate) fn with_stats(mut self, stats: SearchStats) -> Self {
        self.stats = stats;
        self
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Intersection;
    type IntoIter = core::slice::Iter<'a, Intersection>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for ResultSet {
    type Item = Intersection;
    type IntoIter = alloc::vec::IntoIter<Intersection>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Split coincident runs of leaves off into overlaps.
///
/// Where the curves coincide, subdivision cannot separate them and leaves pile
/// up along a diagonal of parameter space. Leaves are grouped into runs of
/// touching neighbours; runs of at least `coincident_min_leaves` are checked by
/// sampling, and confirmed runs become overlaps. All other leaves are returned.
pub fn coincident_runs<E: Evaluator>(
    a: &BezierCurve,
    b: &BezierCurve,
    mut leaves: Vec<Leaf>,
    options: &IntersectOptions,
    tolerance: f64,
    evaluator: &E,
) -> (Vec<Overlap>, Vec<Leaf>) {
    if leaves.len() < options.coincident_min_leaves {
        return (Vec::new(), leaves);
    }
    leaves.sort_by(|p, q| p.s.total_cmp(&q.s).then(p.t.total_cmp(&q.t)));

    let mut runs: Vec<Range<usize>> = Vec::new();
    let mut start = 0;
    for i in 1..=leaves.len() {
        let breaks = i == leaves.len() || {
            let (prev, cur) = (&leaves[i - 1], &leaves[i]);
            cur.s - prev.s > 2.0 * (prev.s_width + cur.s_width)
                || (cur.t - prev.t).abs() > 2.0 * (prev.t_width + cur.t_width)
        };
        if breaks {
            if i - start >= options.coincident_min_leaves {
                runs.push(start..i);
            }
            start = i;
        }
    }
    if runs.is_empty() {
        return (Vec::new(), leaves);
    }

    let mut overlaps = Vec::new();
    let mut consumed = Vec::new();
    for run in runs {
        if let Some(overlap) = confirm_run(a, b, &leaves[run.clone()], options, tolerance, evaluator)
        {
            log::debug!(
                "{} leaves coincide over s in [{}, {}]",
                run.len(),
                overlap.s_start,
                overlap.s_end
            );
            overlaps.push(overlap);
            consumed.push(run);
        }
    }
    let remaining = leaves
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !consumed.iter().any(|r| r.contains(i)))
        .map(|(_, leaf)| leaf)
        .collect();
    (overlaps, remaining)
}

/// Check that the curves coincide across a run of leaves.
fn confirm_run<E: Evaluator>(
    a: &BezierCurve,
    b: &BezierCurve,
    run: &[Leaf],
    options: &IntersectOptions,
    tolerance: f64,
    evaluator: &E,
) -> Option<Overlap> {
    let first = &run[0];
    let last = &run[run.len() - 1];
    let mean_t = |s: f64| {
        let (sum, n) = run
            .iter()
            .filter(|leaf| leaf.s == s)
            .fold((0.0, 0.0), |(sum, n), leaf| (sum + leaf.t, n + 1.0));
        sum / n
    };
    let (t_first, t_last) = (mean_t(first.s), mean_t(last.s));
    let dir = if t_last < t_first { -1.0 } else { 1.0 };

    let mut s_start = clamp_unit(first.s - 0.5 * first.s_width);
    let mut s_end = clamp_unit(last.s + 0.5 * last.s_width);
    let mut t_start = clamp_unit(t_first - dir * 0.5 * first.t_width);
    let mut t_end = clamp_unit(t_last + dir * 0.5 * last.t_width);

    for &u in &RUN_SAMPLES {
        let s = s_start + u * (s_end - s_start);
        let guess = t_start + u * (t_end - t_start);
        let pa = evaluator.evaluate(a.points(), s);
        let t = project(b.points(), pa, guess, evaluator);
        if evaluator.evaluate(b.points(), t).distance(pa) > tolerance {
            return None;
        }
    }

    // The true ends of an overlap are endpoints of one of the curves.
    let s_slack = 2.0 * first.s_width.max(last.s_width);
    let t_slack = 2.0 * first.t_width.max(last.t_width);
    let hits = endpoint_hits(a, b, tolerance, options.max_depth, evaluator);
    let closest = |s: f64, t: f64| {
        hits.iter()
            .flatten()
            .filter(|h| (h.0 - s).abs() <= s_slack && (h.1 - t).abs() <= t_slack)
            .min_by(|p, q| {
                let dp = (p.0 - s).abs() + (p.1 - t).abs();
                let dq = (q.0 - s).abs() + (q.1 - t).abs();
                dp.total_cmp(&dq)
            })
            .copied()
    };
    if let Some((s, t)) = closest(s_start, t_start) {
        (s_start, t_start) = (s, t);
    }
    if let Some((s, t)) = closest(s_end, t_end) {
        (s_end, t_end) = (s, t);
    }
    (s_end - s_start > options.merge_tolerance).then_some(Overlap {
        s_start,
        s_end,
        t_start,
        t_end,
    })
}

/// Snap, classify, sort and deduplicate raw intersections.
///
/// Parameters within `endpoint_tolerance` of 0 or 1 snap to the endpoint,
/// and a point at an endpoint of either curve is a [`Corner`] unless it is
/// tangent or unresolved. Points inside an overlap are dropped. Points closer
/// than `merge_tolerance` in both parameters are merged, keeping the smaller
/// residual; a group containing a tangent stays tangent, and an unresolved
/// point never displaces a resolved one. Merging repeats until nothing
/// changes, so the function is idempotent.
///
/// [`Corner`]: Classification::Corner
pub fn classify_and_merge(
    items: impl IntoIterator<Item = Intersection>,
    options: &IntersectOptions,
) -> ResultSet {
    let snap = |x: f64| snap_unit(clamp_unit(x), options.endpoint_tolerance);
    let mut points = Vec::new();
    let mut overlaps = Vec::new();
    for item in items {
        match item {
            Intersection::Point(p) => points.push(IntersectionPoint {
                s: snap(p.s),
                t: snap(p.t),
                ..p
            }),
            Intersection::Coincident(o) => overlaps.push(Overlap {
                s_start: snap(o.s_start),
                s_end: snap(o.s_end),
                t_start: snap(o.t_start),
                t_end: snap(o.t_end),
            }),
        }
    }

    let overlaps = merge_overlaps(overlaps, options.merge_tolerance);
    points.retain(|p| {
        !overlaps
            .iter()
            .any(|o| o.contains(p.s, p.t, options.merge_tolerance))
    });
    let mut points = merge_points(points, options.merge_tolerance);
    for p in &mut points {
        let at_end = p.s == 0.0 || p.s == 1.0 || p.t == 0.0 || p.t == 1.0;
        if at_end && p.kind == Classification::Simple {
            p.kind = Classification::Corner;
        }
    }

    let mut items: Vec<Intersection> = overlaps
        .into_iter()
        .map(Intersection::Coincident)
        .chain(points.into_iter().map(Intersection::Point))
        .collect();
    items.sort_by(|p, q| cmp_key(p.sort_key(), q.sort_key()));
    ResultSet {
        items,
        stats: SearchStats::default(),
    }
}

fn cmp_key(p: (f64, f64), q: (f64, f64)) -> Ordering {
    p.0.total_cmp(&q.0).then(p.1.total_cmp(&q.1))
}

fn merge_points(mut points: Vec<IntersectionPoint>, tol: f64) -> Vec<IntersectionPoint> {
    loop {
        points.sort_by(|p, q| cmp_key((p.s, p.t), (q.s, q.t)));
        let mut merged: Vec<IntersectionPoint> = Vec::with_capacity(points.len());
        let mut changed = false;
        for p in points {
            let near = merged
                .iter_mut()
                .rev()
                .take_while(|q| p.s - q.s < tol)
                .find(|q| (p.t - q.t).abs() < tol);
            if let Some(q) = near {
                *q = combine(*q, p);
                changed = true;
            } else {
                merged.push(p);
            }
        }
        points = merged;
        if !changed {
            return points;
        }
    }
}

/// Merge points that land on the same place of both curves.
///
/// Two points are the same intersection when their images on `a`, their
/// images on `b`, and the images of their parameter midpoints are all within
/// `tolerance`. The midpoint check keeps apart distinct intersections at a
/// self-crossing of either curve.
pub(crate) fn merge_coincident_points<E: Evaluator>(
    a: &BezierCurve,
    b: &BezierCurve,
    points: Vec<IntersectionPoint>,
    tolerance: f64,
    evaluator: &E,
) -> Vec<IntersectionPoint> {
    let at_a = |s: f64| evaluator.evaluate(a.points(), s);
    let at_b = |t: f64| evaluator.evaluate(b.points(), t);
    let same_place = |p: &IntersectionPoint, pa: Point, pb: Point, q: &IntersectionPoint| {
        let (qa, qb) = (at_a(q.s), at_b(q.t));
        pa.distance(qa) <= tolerance
            && pb.distance(qb) <= tolerance
            && pa.distance(at_a(0.5 * (p.s + q.s))) <= tolerance
            && pb.distance(at_b(0.5 * (p.t + q.t))) <= tolerance
    };

    let mut merged: Vec<(IntersectionPoint, Point, Point)> = Vec::with_capacity(points.len());
    for p in points {
        let (pa, pb) = (at_a(p.s), at_b(p.t));
        match merged
            .iter_mut()
            .find(|(q, qa, qb)| same_place(q, *qa, *qb, &p))
        {
            Some(entry) => {
                let kept = combine(entry.0, p);
                if (kept.s, kept.t) == (p.s, p.t) {
                    (entry.1, entry.2) = (pa, pb);
                }
                entry.0 = kept;
            }
            None => merged.push((p, pa, pb)),
        }
    }
    merged.into_iter().map(|(p, ..)| p).collect()
}

/// The representative of two points found to be the same intersection.
fn combine(p: IntersectionPoint, q: IntersectionPoint) -> IntersectionPoint {
    let (keep, other) = match (p.kind.is_resolved(), q.kind.is_resolved()) {
        (true, false) => (p, q),
        (false, true) => (q, p),
        _ if q.residual < p.residual => (q, p),
        _ => (p, q),
    };
    let kind = if other.kind == Classification::Tangent && keep.kind.is_resolved() {
        Classification::Tangent
    } else {
        keep.kind
    };
    IntersectionPoint { kind, ..keep }
}

fn merge_overlaps(mut overlaps: Vec<Overlap>, tol: f64) -> Vec<Overlap> {
    overlaps.sort_by(|p, q| p.s_start.total_cmp(&q.s_start));
    let mut merged: Vec<Overlap> = Vec::with_capacity(overlaps.len());
    for o in overlaps {
        if let Some(last) = merged.last_mut() {
            let (lt, ot) = (last.t_range(), o.t_range());
            if last.is_reversed() == o.is_reversed()
                && o.s_start <= last.s_end + tol
                && ot.start <= lt.end + tol
                && lt.start <= ot.end + tol
            {
                if o.s_end > last.s_end {
                    last.s_end = o.s_end;
                    last.t_end = o.t_end;
                }
                continue;
            }
        }
        merged.push(o);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::LeafOrigin;
    use crate::DeCasteljau;

    fn point(s: f64, t: f64, residual: f64, kind: Classification) -> Intersection {
        Intersection::Point(IntersectionPoint {
            s,
            t,
            residual,
            kind,
        })
    }

    #[test]
    fn merges_and_prefers_low_residual() {
        let opts = IntersectOptions::default();
        let result = classify_and_merge(
            [
                point(0.5, 0.5, 1e-12, Classification::Simple),
                point(0.5 + 1e-7, 0.5 - 1e-7, 1e-14, Classification::Simple),
                point(0.25, 0.75, 1e-13, Classification::Simple),
            ],
            &opts,
        );
        let points: Vec<_> = result.points().collect();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].s, 0.25);
        assert_eq!(points[1].residual, 1e-14);
    }

    #[test]
    fn coincident_images_merge() {
        let o = 1e6;
        let a = BezierCurve::line((o, o), (o + 2.0, o + 2.0)).unwrap();
        let b = BezierCurve::line((o, o + 2.0), (o + 2.0, o)).unwrap();
        let simple = |s, t, residual| IntersectionPoint {
            s,
            t,
            residual,
            kind: Classification::Simple,
        };
        let points = [
            simple(0.5 - 1.5e-5, 0.5 - 1.5e-5, 6e-5),
            simple(0.5 + 1.5e-5, 0.5 - 1.5e-5, 4e-5),
            simple(0.5, 0.5, 1e-10),
            simple(0.5 + 1.5e-5, 0.5 + 1.5e-5, 6e-5),
        ];
        let merged = merge_coincident_points(&a, &b, points.to_vec(), 1e-4, &DeCasteljau);
        assert_eq!(merged.len(), 1);
        assert_eq!((merged[0].s, merged[0].t), (0.5, 0.5));
    }

    #[test]
    fn self_crossing_images_stay_apart() {
        // The loop crosses itself at (0.5, 0.5625), at s = u and s = 1 - u.
        let a = BezierCurve::new([(0.0, 0.0), (3.0, 3.0), (-2.0, 3.0), (1.0, 0.0)]).unwrap();
        let b = BezierCurve::line((0.5, 0.0), (0.5, 1.0)).unwrap();
        let u = (2.0 - 3.0_f64.sqrt()) / 4.0;
        let points = [u, 1.0 - u].map(|s| IntersectionPoint {
            s,
            t: 0.5625,
            residual: 0.0,
            kind: Classification::Simple,
        });
        let merged = merge_coincident_points(&a, &b, points.to_vec(), 1e-4, &DeCasteljau);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn chained_merge_reaches_fixed_point() {
        // Each neighbour is within the tolerance of the next.
        let opts = IntersectOptions::default();
        let items: Vec<_> = (0..5)
            .map(|i| point(0.3 + f64::from(i) * 8e-7, 0.3, 1e-12, Classification::Simple))
            .collect();
        let once = classify_and_merge(items, &opts);
        let twice = classify_and_merge(once.intersections().iter().copied(), &opts);
        assert_eq!(once, twice);
    }

    #[test]
    fn tangent_is_sticky_and_unresolved_loses() {
        let opts = IntersectOptions::default();
        let result = classify_and_merge(
            [
                point(0.4, 0.4, 1e-14, Classification::Simple),
                point(0.4, 0.4 + 1e-8, 1e-10, Classification::Tangent),
                point(
                    0.4 + 1e-8,
                    0.4,
                    0.0,
                    Classification::Unresolved(UnresolvedReason::RefinementDivergence),
                ),
            ],
            &opts,
        );
        let points: Vec<_> = result.points().collect();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].kind, Classification::Tangent);
        assert_eq!(points[0].residual, 1e-14);
    }

    #[test]
    fn snapping_makes_corners() {
        let opts = IntersectOptions::default();
        let result = classify_and_merge(
            [
                point(1.0 - 1e-12, 1e-13, 1e-12, Classification::Simple),
                point(0.5, 0.5, 1e-12, Classification::Tangent),
            ],
            &opts,
        );
        let points: Vec<_> = result.points().collect();
        assert_eq!((points[1].s, points[1].t), (1.0, 0.0));
        assert_eq!(points[1].kind, Classification::Corner);
        assert_eq!(points[0].kind, Classification::Tangent);
    }

    #[test]
    fn points_inside_overlaps_are_dropped() {
        let opts = IntersectOptions::default();
        let overlap = Overlap {
            s_start: 0.2,
            s_end: 0.6,
            t_start: 0.9,
            t_end: 0.5,
        };
        let result = classify_and_merge(
            [
                Intersection::Coincident(overlap),
                point(0.4, 0.7, 0.0, Classification::Simple),
                point(0.8, 0.1, 0.0, Classification::Simple),
            ],
            &opts,
        );
        assert_eq!(result.len(), 2);
        assert_eq!(result.overlaps().count(), 1);
        assert_eq!(result.points().next().map(|p| p.s), Some(0.8));
    }

    #[test]
    fn swapped_overlap() {
        let o = Overlap {
            s_start: 0.2,
            s_end: 0.6,
            t_start: 0.9,
            t_end: 0.5,
        };
        let s = o.swapped();
        assert_eq!(
            s,
            Overlap {
                s_start: 0.5,
                s_end: 0.9,
                t_start: 0.6,
                t_end: 0.2
            }
        );
        assert_eq!(s.swapped(), o);
    }

    fn diagonal_leaves(depth: i32, t_of_s: impl Fn(f64) -> f64) -> Vec<Leaf> {
        let w = 0.5_f64.powi(depth);
        let n = 1 << depth;
        let mut leaves = Vec::new();
        for i in 0..n {
            let s = (f64::from(i) + 0.5) * w;
            for k in [-1.0, 0.0, 1.0] {
                let t = t_of_s(s) + k * w;
                if (0.0..=1.0).contains(&t) {
                    leaves.push(Leaf {
                        s,
                        t,
                        s_width: w,
                        t_width: w,
                        origin: LeafOrigin::DepthLimit,
                    });
                }
            }
        }
        leaves
    }

    #[test]
    fn coincident_run_of_identical_curves() {
        let c = BezierCurve::new([(0.0, 0.0), (1.0, 2.0), (3.0, -1.0), (4.0, 1.0)]).unwrap();
        let opts = IntersectOptions::default();
        let leaves = diagonal_leaves(6, |s| s);
        let (overlaps, rest) = coincident_runs(&c, &c, leaves, &opts, 1e-9, &DeCasteljau);
        assert!(rest.is_empty());
        assert_eq!(
            overlaps,
            [Overlap {
                s_start: 0.0,
                s_end: 1.0,
                t_start: 0.0,
                t_end: 1.0
            }]
        );

        let leaves = diagonal_leaves(6, |s| 1.0 - s);
        let (overlaps, _) = coincident_runs(&c, &c.reversed(), leaves, &opts, 1e-9, &DeCasteljau);
        assert_eq!(overlaps.len(), 1);
        assert_eq!((overlaps[0].t_start, overlaps[0].t_end), (1.0, 0.0));
    }

    #[test]
    fn unconfirmed_run_stays() {
        // A run along the diagonal of two curves that only cross.
        let a = BezierCurve::line((0.0, 0.0), (1.0, 0.0)).unwrap();
        let b = BezierCurve::line((0.0, 0.0), (1.0, 1.0)).unwrap();
        let opts = IntersectOptions::default();
        let leaves = diagonal_leaves(5, |s| s);
        let n = leaves.len();
        let (overlaps, rest) = coincident_runs(&a, &b, leaves, &opts, 1e-9, &DeCasteljau);
        assert!(overlaps.is_empty());
        assert_eq!(rest.len(), n);
    }
}
