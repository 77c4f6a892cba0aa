// Copyright 2026 the Kruco Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations

use core::ops::Range;

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("kruco requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs;
    fn ceil(self) -> Self => ceil;
    fn copysign(self, sign: Self) -> Self => copysign;
    fn hypot(self, other: Self) -> Self => hypot;
    fn log2(self) -> Self => log2;
    fn powi(self, n: i32) -> Self => pow;
    fn sqrt(self) -> Self => sqrt;
}

/// Return the point of `domain` corresponding to the local parameter `t`,
/// `0 <= t <= 1`.
#[inline]
pub fn domain_value_at_t(domain: &Range<f64>, t: f64) -> f64 {
    domain.start + (domain.end - domain.start) * t
}

/// Solve the 2x2 linear system `[a b; c d] x = [e; f]` by Cramer's rule.
///
/// Returns `None` when the determinant is zero or the solution is not finite.
pub fn solve_2x2(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Option<(f64, f64)> {
    let det = a * d - b * c;
    if det == 0.0 {
        return None;
    }
    let det_recip = det.recip();
    let x0 = (e * d - b * f) * det_recip;
    let x1 = (a * f - e * c) * det_recip;
    (x0.is_finite() && x1.is_finite()).then_some((x0, x1))
}

/// Clamp a parameter into the unit interval.
#[inline]
pub fn clamp_unit(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}

/// Snap a parameter to 0 or 1 if it lies within `wiggle` of the endpoint.
///
/// Values slightly outside the unit interval produced by rounding are snapped
/// as well.
#[inline]
pub fn snap_unit(t: f64, wiggle: f64) -> f64 {
    if t.abs() <= wiggle {
        0.0
    } else if (t - 1.0).abs() <= wiggle {
        1.0
    } else {
        t
    }
}

/// Find a root of a function using the [ITP method].
///
/// The function `f` must be continuous and `f(a)` must be negative, `f(b)`
/// positive; `ya` and `yb` are those two values, passed in to avoid
/// re-evaluation. `k1` is a tuning parameter; `0.2 / (b - a)` works well in
/// practice. `n0` is the slack in iterations over plain bisection.
///
/// When the function is monotonic, the returned result is guaranteed to
/// be within `epsilon` of the zero crossing.
///
/// [ITP method]: https://en.wikipedia.org/wiki/ITP_Method
#[expect(clippy::too_many_arguments, reason = "mirrors the published algorithm")]
pub fn solve_itp(
    mut f: impl FnMut(f64) -> f64,
    mut a: f64,
    mut b: f64,
    epsilon: f64,
    n0: usize,
    k1: f64,
    mut ya: f64,
    mut yb: f64,
) -> f64 {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "the iteration count is a small positive integer"
    )]
    let n1_2 = (((b - a) / epsilon).log2().ceil() - 1.0).max(0.0) as usize;
    let nmax = n0 + n1_2;
    let mut scaled_epsilon = epsilon * (1u64 << nmax.min(62)) as f64;
    while b - a > 2.0 * epsilon {
        let x1_2 = 0.5 * (a + b);
        let r = scaled_epsilon - 0.5 * (b - a);
        let xf = (yb * a - ya * b) / (yb - ya);
        let sigma = x1_2 - xf;
        // This has k2 = 2 hardwired for efficiency.
        let delta = k1 * (b - a).powi(2);
        let xt = if delta <= (x1_2 - xf).abs() {
            xf + delta.copysign(sigma)
        } else {
            x1_2
        };
        let xitp = if (xt - x1_2).abs() <= r {
            xt
        } else {
            x1_2 - r.copysign(sigma)
        };
        let yitp = f(xitp);
        if yitp > 0.0 {
            b = xitp;
            yb = yitp;
        } else if yitp < 0.0 {
            a = xitp;
            ya = yitp;
        } else {
            return xitp;
        }
        scaled_epsilon *= 0.5;
    }
    0.5 * (a + b)
}

/// Binomial coefficient `n choose k` as a float.
pub fn binomial(n: usize, k: usize) -> f64 {
    let k = k.min(n - k);
    let mut result = 1.0;
    for i in 0..k {
        result = result * (n - i) as f64 / (i + 1) as f64;
    }
    result
}

#[cfg(test)]
mod tests {
    use crate::common::*;

    #[test]
    fn test_solve_2x2() {
        let (x, y) = solve_2x2(2.0, 1.0, 1.0, 3.0, 3.0, 5.0).unwrap();
        assert!((x - 0.8).abs() < 1e-15);
        assert!((y - 1.4).abs() < 1e-15);
        assert!(solve_2x2(1.0, 2.0, 2.0, 4.0, 1.0, 1.0).is_none());
    }

    #[test]
    fn test_solve_itp() {
        let f = |x: f64| x.powi(3) - x - 2.0;
        let x = solve_itp(f, 1., 2., 1e-12, 0, 0.2, f(1.), f(2.));
        assert!(f(x).abs() < 6e-12);
    }

    #[test]
    fn test_snap_unit() {
        assert_eq!(snap_unit(1e-14, 1e-12), 0.0);
        assert_eq!(snap_unit(-1e-14, 1e-12), 0.0);
        assert_eq!(snap_unit(1.0 - 1e-14, 1e-12), 1.0);
        assert_eq!(snap_unit(0.5, 1e-12), 0.5);
    }

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(3, 0), 1.0);
        assert_eq!(binomial(3, 1), 3.0);
        assert_eq!(binomial(4, 2), 6.0);
        assert_eq!(binomial(5, 5), 1.0);
    }

    #[test]
    fn test_domain_value_at_t() {
        assert_eq!(domain_value_at_t(&(0.25..0.75), 0.5), 0.5);
        assert_eq!(domain_value_at_t(&(0.25..0.75), 0.0), 0.25);
    }
}
