// Copyright 2026 the Kruco Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Evaluation of control-point arrays.
//!
//! The intersection engine never evaluates curves directly; it goes through an
//! [`Evaluator`], so that an alternative evaluation strategy can be plugged in
//! without touching the search. Two implementations are provided and agree to
//! within rounding.

use smallvec::SmallVec;

use crate::common::binomial;
#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;
use crate::{BoundingRegion, Point, RegionPolicy, Vec2};

/// Evaluates Bézier curves given as control-point slices.
///
/// Callers guarantee that `points` has at least two entries and that `t` lies
/// in `[0, 1]`.
pub trait Evaluator {
    /// The point on the curve at parameter `t`.
    fn evaluate(&self, points: &[Point], t: f64) -> Point;

    /// The first derivative with respect to `t`.
    fn derivative(&self, points: &[Point], t: f64) -> Vec2;

    /// A region enclosing the curve.
    ///
    /// The default encloses the control polygon, which contains the curve.
    fn bounding_region(&self, points: &[Point], policy: RegionPolicy) -> BoundingRegion {
        BoundingRegion::from_control_points(points, policy)
    }
}

impl<E: Evaluator + ?Sized> Evaluator for &E {
    fn evaluate(&self, points: &[Point], t: f64) -> Point {
        (**self).evaluate(points, t)
    }

    fn derivative(&self, points: &[Point], t: f64) -> Vec2 {
        (**self).derivative(points, t)
    }

    fn bounding_region(&self, points: &[Point], policy: RegionPolicy) -> BoundingRegion {
        (**self).bounding_region(points, policy)
    }
}

/// Evaluation by repeated linear interpolation.
///
/// Only affine combinations are formed, which is the numerically stable
/// choice and the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeCasteljau;

/// Evaluation by summing the Bernstein basis polynomials directly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bernstein;

impl Evaluator for DeCasteljau {
    fn evaluate(&self, points: &[Point], t: f64) -> Point {
        let mut work: SmallVec<[Point; 8]> = SmallVec::from_slice(points);
        for level in 1..work.len() {
            for i in 0..work.len() - level {
                work[i] = work[i].lerp(work[i + 1], t);
            }
        }
        work[0]
    }

    fn derivative(&self, points: &[Point], t: f64) -> Vec2 {
        let n = points.len() - 1;
        // Run de Casteljau on the hodograph's control vectors.
        let mut work: SmallVec<[Vec2; 8]> = points.windows(2).map(|w| w[1] - w[0]).collect();
        let mt = 1.0 - t;
        for level in 1..work.len() {
            for i in 0..work.len() - level {
                work[i] = mt * work[i] + t * work[i + 1];
            }
        }
        n as f64 * work[0]
    }
}

impl Evaluator for Bernstein {
    fn evaluate(&self, points: &[Point], t: f64) -> Point {
        let n = points.len() - 1;
        let mt = 1.0 - t;
        let mut sum = Vec2::ZERO;
        for (i, p) in points.iter().enumerate() {
            sum = sum + basis(n, i, t, mt) * p.to_vec2();
        }
        sum.to_point()
    }

    fn derivative(&self, points: &[Point], t: f64) -> Vec2 {
        let n = points.len() - 1;
        let mt = 1.0 - t;
        let mut sum = Vec2::ZERO;
        for (i, w) in points.windows(2).enumerate() {
            sum = sum + basis(n - 1, i, t, mt) * (w[1] - w[0]);
        }
        n as f64 * sum
    }
}

/// The Bernstein basis polynomial `b_{i,n}(t)`.
fn basis(n: usize, i: usize, t: f64, mt: f64) -> f64 {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "curve degrees are tiny"
    )]
    let (i_exp, rest_exp) = (i as i32, (n - i) as i32);
    binomial(n, i) * t.powi(i_exp) * mt.powi(rest_exp)
}
