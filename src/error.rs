// Copyright 2026 the Kruco Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported at the API boundary.
//!
//! Only malformed input is an error. Degenerate geometry (tangency,
//! coincidence) and numerical trouble (budgets running out) are reported as
//! classifications on the result; see [`UnresolvedReason`].
//!
//! [`UnresolvedReason`]: crate::UnresolvedReason

use crate::Point;

/// Problems with a curve's control points.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum InvalidInput {
    /// The curve has no control points.
    #[error("a curve needs at least one control point")]
    Empty,
    /// The curve has a single control point, so it is a point, not a curve.
    #[error("a curve of degree 0 has no extent; at least two control points are required")]
    DegreeZero,
    /// A control point has a NaN or infinite coordinate.
    #[error("control point {index} is not finite: {point}")]
    NonFinite {
        /// Index of the offending control point.
        index: usize,
        /// The offending control point.
        point: Point,
    },
    /// Every control point is the same, so the curve is a single point.
    #[error("all control points coincide at {0}; the curve has zero length")]
    ZeroLength(Point),
}

/// Errors returned by the intersection entry points.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A curve failed validation.
    #[error("invalid curve: {0}")]
    InvalidInput(#[from] InvalidInput),
    /// An option is out of its valid range.
    #[error("invalid option `{field}`: {reason}")]
    InvalidOptions {
        /// Name of the offending field of [`IntersectOptions`](crate::IntersectOptions).
        field: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
}
