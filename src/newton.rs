// Copyright 2026 the Kruco Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Refinement of coarse intersection estimates.
//!
//! Newton's method on `F(s, t) = A(s) − B(t)` converges quadratically at
//! transversal crossings, but its Jacobian `[A'(s), −B'(t)]` is singular where
//! the curves are tangent. There the problem is recast as one-dimensional:
//! the squared distance from `A(s)` to `B` has a double root at a touching
//! point, so its derivative in `s` changes sign there, and that sign change is
//! found with a bracketing solver.

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;
use crate::common::{clamp_unit, solve_2x2, solve_itp};
use crate::{BezierCurve, Evaluator, IntersectOptions, Point};

/// Maximum step halvings per Newton iteration.
const MAX_HALVINGS: usize = 4;

/// Iterations of the Gauss-Newton projection onto a curve.
const PROJECTION_ITERATIONS: usize = 16;

/// How far the tangent fallback bracket may grow, in doublings.
const MAX_BRACKET_DOUBLINGS: usize = 60;

/// Parameter resolution of Newton steps and of the bracketing solver.
const PARAM_EPSILON: f64 = 1e-15;

/// Outcome of refining one estimate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefineStatus {
    /// Newton converged at a transversal crossing.
    Converged,
    /// The curves are tangent at the result; the fallback converged.
    Tangent,
    /// The Jacobian was singular and the fallback did not converge.
    TangentUnresolved,
    /// Newton did not converge.
    Diverged,
}

/// A refined parameter pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Refined {
    /// Parameter on the first curve.
    pub s: f64,
    /// Parameter on the second curve.
    pub t: f64,
    /// `‖A(s) − B(t)‖`.
    pub residual: f64,
    /// How refinement ended.
    pub status: RefineStatus,
}

impl Refined {
    /// Whether the residual meets the tolerance.
    pub fn is_converged(&self) -> bool {
        matches!(self.status, RefineStatus::Converged | RefineStatus::Tangent)
    }
}

/// Refine the estimate `(s0, t0)` of an intersection of `a` and `b`.
///
/// `tolerance` is the spatial tolerance for this pair. Parameters stay in
/// `[0, 1]`. Never panics; failure is reported through the status, together
/// with the best point found.
pub fn refine<E: Evaluator>(
    a: &BezierCurve,
    b: &BezierCurve,
    s0: f64,
    t0: f64,
    options: &IntersectOptions,
    tolerance: f64,
    evaluator: &E,
) -> Refined {
    let residual_at = |s: f64, t: f64| {
        evaluator
            .evaluate(a.points(), s)
            .distance(evaluator.evaluate(b.points(), t))
    };
    let tangent_at = |s: f64, t: f64| {
        evaluator
            .derivative(a.points(), s)
            .sin_angle(evaluator.derivative(b.points(), t))
            <= options.singular_threshold
    };

    let (mut s, mut t) = (clamp_unit(s0), clamp_unit(t0));
    let mut f = evaluator.evaluate(a.points(), s) - evaluator.evaluate(b.points(), t);
    let mut residual = f.hypot();
    let mut best = (s, t, residual);
    let mut singular = false;

    for _ in 0..options.newton_iterations {
        if residual == 0.0 {
            break;
        }
        let da = evaluator.derivative(a.points(), s);
        let db = evaluator.derivative(b.points(), t);
        if da.sin_angle(db) <= options.singular_threshold {
            singular = true;
            break;
        }
        // [da, -db] (ds, dt) = -f
        let Some((ds, dt)) = solve_2x2(da.x, -db.x, da.y, -db.y, -f.x, -f.y) else {
            singular = true;
            break;
        };
        let mut lambda = 1.0;
        let mut halvings = 0;
        let (new_s, new_t, new_f) = loop {
            let new_s = clamp_unit(s + lambda * ds);
            let new_t = clamp_unit(t + lambda * dt);
            let new_f = evaluator.evaluate(a.points(), new_s) - evaluator.evaluate(b.points(), new_t);
            if new_f.hypot() < residual || halvings == MAX_HALVINGS {
                break (new_s, new_t, new_f);
            }
            lambda *= 0.5;
            halvings += 1;
        };
        let step = (new_s - s).abs().max((new_t - t).abs());
        let improved = new_f.hypot() < residual;
        (s, t, f) = (new_s, new_t, new_f);
        residual = f.hypot();
        if residual < best.2 {
            best = (s, t, residual);
        }
        // Polish to parameter resolution: far from the origin the tolerance
        // is coarser than the float spacing of the coordinates.
        if step <= PARAM_EPSILON || (!improved && best.2 < tolerance) {
            break;
        }
    }

    let (s, t, residual) = best;
    let converged = residual < tolerance;
    if converged && !tangent_at(s, t) {
        return Refined {
            s,
            t,
            residual,
            status: RefineStatus::Converged,
        };
    }

    if converged || singular {
        log::debug!(
            "near-singular Jacobian at ({s}, {t}), residual {residual:e}; trying tangent fallback"
        );
        if let Some((fs, ft)) = tangent_fallback(a, b, s, t, evaluator) {
            let fallback_residual = residual_at(fs, ft);
            if fallback_residual < tolerance && fallback_residual <= residual.max(tolerance) {
                let status = if tangent_at(fs, ft) {
                    RefineStatus::Tangent
                } else {
                    RefineStatus::Converged
                };
                return Refined {
                    s: fs,
                    t: ft,
                    residual: fallback_residual,
                    status,
                };
            }
        }
        if converged {
            return Refined {
                s,
                t,
                residual,
                status: RefineStatus::Tangent,
            };
        }
        return Refined {
            s,
            t,
            residual,
            status: RefineStatus::TangentUnresolved,
        };
    }

    Refined {
        s,
        t,
        residual,
        status: RefineStatus::Diverged,
    }
}

/// The parameter of the point of `curve` closest to `point`, near `t0`.
///
/// Gauss-Newton on `B'(t) · (B(t) − p) = 0`, clamped to `[0, 1]`.
pub(crate) fn project<E: Evaluator>(curve: &[Point], point: Point, t0: f64, evaluator: &E) -> f64 {
    let mut t = clamp_unit(t0);
    for _ in 0..PROJECTION_ITERATIONS {
        let d = evaluator.derivative(curve, t);
        let denom = d.hypot2();
        if denom == 0.0 {
            break;
        }
        let delta = (evaluator.evaluate(curve, t) - point).dot(d) / denom;
        let next = clamp_unit(t - delta);
        if (next - t).abs() <= PARAM_EPSILON {
            t = next;
            break;
        }
        t = next;
    }
    t
}

/// Find a tangent touch near `(s0, t0)` as a minimum of the distance from
/// `A(s)` to `B`.
///
/// Returns `None` if no sign change of the distance derivative is found.
fn tangent_fallback<E: Evaluator>(
    a: &BezierCurve,
    b: &BezierCurve,
    s0: f64,
    t0: f64,
    evaluator: &E,
) -> Option<(f64, f64)> {
    let mut t_guess = t0;
    // Half the derivative of the squared distance from A(s) to B.
    let mut g = |s: f64| {
        let pa = evaluator.evaluate(a.points(), s);
        let t = project(b.points(), pa, t_guess, evaluator);
        t_guess = t;
        (pa - evaluator.evaluate(b.points(), t)).dot(evaluator.derivative(a.points(), s))
    };

    let g0 = g(s0);
    if g0 == 0.0 {
        let t = project(b.points(), evaluator.evaluate(a.points(), s0), t0, evaluator);
        return Some((s0, t));
    }

    let mut width = PARAM_EPSILON.max(1e-9);
    let mut bracket = None;
    for _ in 0..MAX_BRACKET_DOUBLINGS {
        let lo = clamp_unit(s0 - width);
        let hi = clamp_unit(s0 + width);
        let g_lo = g(lo);
        let g_hi = g(hi);
        if g_lo <= 0.0 && g_hi >= 0.0 {
            bracket = Some((lo, hi, g_lo, g_hi));
            break;
        }
        if lo == 0.0 && hi == 1.0 {
            break;
        }
        width *= 2.0;
    }
    let (lo, hi, g_lo, g_hi) = bracket?;

    let s = if g_lo == 0.0 {
        lo
    } else if g_hi == 0.0 {
        hi
    } else {
        solve_itp(&mut g, lo, hi, PARAM_EPSILON, 1, 0.2 / (hi - lo), g_lo, g_hi)
    };
    let t = project(b.points(), evaluator.evaluate(a.points(), s), t0, evaluator);
    Some((s, t))
}
