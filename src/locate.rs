// Copyright 2026 the Kruco Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Locating points on curves, and detecting curves that run along each other.

use alloc::vec::Vec;

use arrayvec::ArrayVec;

use crate::newton::project;
use crate::{
    BezierCurve, DeCasteljau, Evaluator, IntersectOptions, Overlap, Point, RegionPolicy, Segment,
};

/// How many parameter candidates point location refines at most.
const MAX_LOCATE_CANDIDATES: usize = 16;

impl BezierCurve {
    /// Find the parameter at which the curve passes through `point`.
    ///
    /// Returns `None` if the curve stays farther than the tolerance from the
    /// point. When the curve passes through the point more than once, the
    /// closest match is returned.
    pub fn locate(&self, point: Point, options: &IntersectOptions) -> Option<f64> {
        let tolerance = Point::epsilon(point, options.tolerance);
        locate_with(self, point, tolerance, options.max_depth, &DeCasteljau)
    }
}

/// Locate `point` on `curve` to within `tolerance`.
pub(crate) fn locate_with<E: Evaluator>(
    curve: &BezierCurve,
    point: Point,
    tolerance: f64,
    max_depth: u32,
    evaluator: &E,
) -> Option<f64> {
    // Quick exits for the endpoints, which is where overlaps are located.
    if curve.start().distance(point) <= tolerance {
        return Some(0.0);
    }
    if curve.end().distance(point) <= tolerance {
        return Some(1.0);
    }

    let mut candidates: Vec<f64> = Vec::new();
    let mut stack = Vec::new();
    stack.push((Segment::new(curve), 0));
    while let Some((segment, depth)) = stack.pop() {
        let bbox = evaluator
            .bounding_region(segment.points(), RegionPolicy::BoundingBox)
            .bounding_box();
        if !bbox.inflate(tolerance).contains(point) {
            continue;
        }
        if depth >= max_depth || bbox.diameter() < tolerance {
            if candidates.len() < MAX_LOCATE_CANDIDATES {
                candidates.push(segment.midpoint_param());
            }
            continue;
        }
        let (left, right) = segment.split();
        stack.push((right, depth + 1));
        stack.push((left, depth + 1));
    }

    candidates
        .into_iter()
        .map(|t0| {
            let t = project(curve.points(), point, t0, evaluator);
            (t, evaluator.evaluate(curve.points(), t).distance(point))
        })
        .filter(|&(_, d)| d <= tolerance)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(t, _)| t)
}

/// Where each endpoint of one curve lies on the other, as `(s, t)` pairs.
///
/// In order: the start and end of `a` located on `b`, then the start and end
/// of `b` located on `a`. Endpoints off the other curve are skipped.
pub(crate) fn endpoint_hits<E: Evaluator>(
    a: &BezierCurve,
    b: &BezierCurve,
    tolerance: f64,
    max_depth: u32,
    evaluator: &E,
) -> [Option<(f64, f64)>; 4] {
    [
        locate_with(b, a.start(), tolerance, max_depth, evaluator).map(|t| (0.0, t)),
        locate_with(b, a.end(), tolerance, max_depth, evaluator).map(|t| (1.0, t)),
        locate_with(a, b.start(), tolerance, max_depth, evaluator).map(|s| (s, 0.0)),
        locate_with(a, b.end(), tolerance, max_depth, evaluator).map(|s| (s, 1.0)),
    ]
}

/// Test whether one curve runs along the other over some interval.
///
/// Overlapping curves have at least two endpoints lying on the other curve:
/// either both ends of one curve lie on the other, or one end of each does.
/// The span between the hits is then sampled to rule out curves that merely
/// meet at those points.
pub(crate) fn check_for_overlap<E: Evaluator>(
    a: &BezierCurve,
    b: &BezierCurve,
    options: &IntersectOptions,
    tolerance: f64,
    evaluator: &E,
) -> Option<Overlap> {
    let hits = endpoint_hits(a, b, tolerance, options.max_depth, evaluator);
    let mut found: ArrayVec<(f64, f64), 4> = hits.iter().flatten().copied().collect();
    if found.len() < 2 {
        return None;
    }
    found.sort_by(|p, q| p.0.total_cmp(&q.0).then(p.1.total_cmp(&q.1)));
    let (s_start, t_start) = found[0];
    let (s_end, t_end) = found[found.len() - 1];
    if s_end - s_start <= options.merge_tolerance
        || (t_end - t_start).abs() <= options.merge_tolerance
    {
        return None;
    }

    // Interior samples, located on `b` starting from the linear guess.
    for i in 1..=3 {
        let u = f64::from(i) / 4.0;
        let s = s_start + u * (s_end - s_start);
        let guess = t_start + u * (t_end - t_start);
        let pa = evaluator.evaluate(a.points(), s);
        let t = project(b.points(), pa, guess, evaluator);
        if evaluator.evaluate(b.points(), t).distance(pa) > tolerance
            && locate_with(b, pa, tolerance, options.max_depth, evaluator).is_none()
        {
            return None;
        }
    }

    log::debug!("curves overlap over s in [{s_start}, {s_end}], t in [{t_start}, {t_end}]");
    Some(Overlap {
        s_start,
        s_end,
        t_start,
        t_end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cubic() -> BezierCurve {
        BezierCurve::new([(0.0, 0.0), (1.0, 2.0), (3.0, -1.0), (4.0, 1.0)]).unwrap()
    }

    #[test]
    fn locate_on_curve() {
        let c = cubic();
        let opts = IntersectOptions::default();
        for i in 0..=10 {
            let t = f64::from(i) / 10.0;
            let found = c.locate(c.eval(t), &opts).unwrap();
            assert!((found - t).abs() < 1e-7, "{found} vs {t}");
        }
        assert_eq!(c.locate(Point::new(2.0, 3.0), &opts), None);
    }

    #[test]
    fn self_overlap() {
        let c = cubic();
        let opts = IntersectOptions::default();
        let overlap = check_for_overlap(&c, &c, &opts, 1e-9, &DeCasteljau).unwrap();
        assert_eq!(
            overlap,
            Overlap {
                s_start: 0.0,
                s_end: 1.0,
                t_start: 0.0,
                t_end: 1.0
            }
        );
        let overlap = check_for_overlap(&c, &c.reversed(), &opts, 1e-9, &DeCasteljau).unwrap();
        assert_eq!((overlap.s_start, overlap.s_end), (0.0, 1.0));
        assert_eq!((overlap.t_start, overlap.t_end), (1.0, 0.0));
    }

    #[test]
    fn partial_overlap() {
        let c = cubic();
        let opts = IntersectOptions::default();
        let first = c.subsegment(0.0..0.6);
        let second = c.subsegment(0.4..1.0);
        let overlap = check_for_overlap(&first, &second, &opts, 1e-9, &DeCasteljau).unwrap();
        // On `first`, 0.4 of the original is 2/3; on `second`, 0.6 is 1/3.
        assert!((overlap.s_start - 2.0 / 3.0).abs() < 1e-7);
        assert_eq!(overlap.s_end, 1.0);
        assert_eq!(overlap.t_start, 0.0);
        assert!((overlap.t_end - 1.0 / 3.0).abs() < 1e-7);
    }

    #[test]
    fn shared_endpoint_is_not_overlap() {
        let a = BezierCurve::line((0.0, 0.0), (1.0, 1.0)).unwrap();
        let b = BezierCurve::line((1.0, 1.0), (2.0, 0.0)).unwrap();
        let opts = IntersectOptions::default();
        assert_eq!(check_for_overlap(&a, &b, &opts, 1e-9, &DeCasteljau), None);
    }

    #[test]
    fn same_endpoints_different_paths() {
        let a = BezierCurve::new([(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]).unwrap();
        let b = BezierCurve::new([(0.0, 0.0), (1.0, -1.0), (2.0, 0.0)]).unwrap();
        let opts = IntersectOptions::default();
        assert_eq!(check_for_overlap(&a, &b, &opts, 1e-9, &DeCasteljau), None);
    }
}
