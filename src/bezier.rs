// Copyright 2026 the Kruco Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bézier curves of arbitrary degree.

use alloc::vec::Vec;
use core::ops::Range;

use smallvec::SmallVec;

use crate::segment::split_control_points;
use crate::{DeCasteljau, Evaluator, InvalidInput, Point, Rect, Vec2};

/// Control points of a curve; cubics and below are stored inline.
pub type ControlPoints = SmallVec<[Point; 4]>;

/// A planar Bézier curve, parametrized over `[0, 1]`.
///
/// The control points are validated on construction: there are at least two
/// of them and all are finite. The curve is immutable; operations such as
/// [`subdivide`](Self::subdivide) return new curves.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Point>", into = "Vec<Point>")
)]
pub struct BezierCurve {
    points: ControlPoints,
}

impl BezierCurve {
    /// Create a curve from its control points.
    ///
    /// The degree of the curve is one less than the number of points.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] if there are fewer than two control points,
    /// if any coordinate is NaN or infinite, or if all control points are the
    /// same point.
    pub fn new<P: Into<Point>>(points: impl IntoIterator<Item = P>) -> Result<Self, InvalidInput> {
        let points: ControlPoints = points.into_iter().map(Into::into).collect();
        match points.len() {
            0 => return Err(InvalidInput::Empty),
            1 => return Err(InvalidInput::DegreeZero),
            _ => {}
        }
        if let Some((index, &point)) = points.iter().enumerate().find(|(_, p)| !p.is_finite()) {
            return Err(InvalidInput::NonFinite { index, point });
        }
        if points.iter().all(|&p| p == points[0]) {
            return Err(InvalidInput::ZeroLength(points[0]));
        }
        Ok(Self { points })
    }

    /// A straight line segment, as a degree 1 curve.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::NonFinite`] if either point is not finite and
    /// [`InvalidInput::ZeroLength`] if the points are equal.
    pub fn line(p0: impl Into<Point>, p1: impl Into<Point>) -> Result<Self, InvalidInput> {
        Self::new([p0.into(), p1.into()])
    }

    /// Build a curve from points already known to be valid.
    pub(crate) fn from_valid(points: ControlPoints) -> Self {
        debug_assert!(points.len() >= 2, "curves have degree at least 1");
        Self { points }
    }

    /// The control points.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The polynomial degree.
    #[inline]
    pub fn degree(&self) -> usize {
        self.points.len() - 1
    }

    /// The start point.
    #[inline]
    pub fn start(&self) -> Point {
        self.points[0]
    }

    /// The end point.
    #[inline]
    pub fn end(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Evaluate the curve at parameter `t`.
    #[inline]
    pub fn eval(&self, t: f64) -> Point {
        DeCasteljau.evaluate(&self.points, t)
    }

    /// The derivative (tangent vector) at parameter `t`.
    #[inline]
    pub fn deriv(&self, t: f64) -> Vec2 {
        DeCasteljau.derivative(&self.points, t)
    }

    /// The bounding box of the control polygon, which contains the curve.
    pub fn bounding_box(&self) -> Rect {
        Rect::bounding(&self.points).unwrap_or_default()
    }

    /// Subdivide into halves, using de Casteljau.
    pub fn subdivide(&self) -> (Self, Self) {
        let (left, right) = split_control_points(&self.points, 0.5);
        (Self::from_valid(left), Self::from_valid(right))
    }

    /// Get the subsegment of the curve for the given parameter range.
    ///
    /// A decreasing range yields the reversed subsegment.
    #[must_use]
    pub fn subsegment(&self, range: Range<f64>) -> Self {
        let (t0, t1) = (range.start, range.end);
        if t1 < t0 {
            return self.subsegment(t1..t0).reversed();
        }
        let right = if t0 > 0.0 {
            split_control_points(&self.points, t0).1
        } else {
            self.points.clone()
        };
        let points = if t0 < 1.0 && t1 < 1.0 {
            let local = (t1 - t0) / (1.0 - t0);
            split_control_points(&right, local).0
        } else {
            right
        };
        Self::from_valid(points)
    }

    /// The same curve traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::from_valid(self.points.iter().rev().copied().collect())
    }

    /// The curve translated by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Vec2) -> Self {
        Self::from_valid(self.points.iter().map(|&p| p + offset).collect())
    }
}

impl TryFrom<Vec<Point>> for BezierCurve {
    type Error = InvalidInput;

    fn try_from(points: Vec<Point>) -> Result<Self, InvalidInput> {
        Self::new(points)
    }
}

impl From<BezierCurve> for Vec<Point> {
    fn from(curve: BezierCurve) -> Self {
        curve.points.into_vec()
    }
}
