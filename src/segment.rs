// Copyright 2026 the Kruco Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sub-segments of a curve, tracked against the original parametrization.

use core::ops::Range;

use crate::bezier::ControlPoints;
use crate::common::domain_value_at_t;
use crate::{BezierCurve, BoundingRegion, Evaluator, Point, RegionPolicy};

/// A piece of a curve produced by subdivision.
///
/// The control points describe the piece on its own `[0, 1]`; `domain` is the
/// interval of the original curve's parameter that the piece covers.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    points: ControlPoints,
    domain: Range<f64>,
}

impl Segment {
    /// The segment covering a whole curve.
    pub fn new(curve: &BezierCurve) -> Self {
        Self {
            points: curve.points().into(),
            domain: 0.0..1.0,
        }
    }

    /// The piece of `curve` over `domain`.
    pub fn over(curve: &BezierCurve, domain: Range<f64>) -> Self {
        Self {
            points: curve.subsegment(domain.clone()).points().into(),
            domain,
        }
    }

    /// The control points of the piece.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The interval of the original parameter covered by the piece.
    #[inline]
    pub fn domain(&self) -> Range<f64> {
        self.domain.clone()
    }

    /// The width of the domain.
    #[inline]
    pub fn width(&self) -> f64 {
        self.domain.end - self.domain.start
    }

    /// The original parameter at the middle of the piece.
    #[inline]
    pub fn midpoint_param(&self) -> f64 {
        domain_value_at_t(&self.domain, 0.5)
    }

    /// Split in half at the local parameter 0.5.
    ///
    /// The children reproduce the parent over the two halves of its domain,
    /// and their control points lie in the parent's control hull.
    pub fn split(&self) -> (Self, Self) {
        let mid = self.midpoint_param();
        let (left, right) = split_control_points(&self.points, 0.5);
        (
            Self {
                points: left,
                domain: self.domain.start..mid,
            },
            Self {
                points: right,
                domain: mid..self.domain.end,
            },
        )
    }

    /// A region enclosing the piece.
    pub fn region(&self, evaluator: &impl Evaluator, policy: RegionPolicy) -> BoundingRegion {
        evaluator.bounding_region(&self.points, policy)
    }
}

/// Split control points at local parameter `t` with de Casteljau.
///
/// Returns the control points of the `[0, t]` and `[t, 1]` pieces.
pub(crate) fn split_control_points(points: &[Point], t: f64) -> (ControlPoints, ControlPoints) {
    let n = points.len();
    let mut work = ControlPoints::from_slice(points);
    let mut left = ControlPoints::with_capacity(n);
    let mut right = ControlPoints::with_capacity(n);
    left.push(work[0]);
    right.push(work[n - 1]);
    for level in 1..n {
        for i in 0..n - level {
            work[i] = work[i].lerp(work[i + 1], t);
        }
        left.push(work[0]);
        right.push(work[n - 1 - level]);
    }
    right.reverse();
    (left, right)
}
