// Copyright 2026 the Kruco Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Robust intersections of planar Bézier curves.
//!
//! Given two curves of any degree, kruco finds every parameter pair `(s, t)`
//! at which they meet. Transversal crossings, tangential touches, shared
//! endpoints and curves lying along each other over an interval are all
//! reported, each with its own [`Classification`] or as a coincident
//! [`Overlap`].
//!
//! The engine subdivides both curves together, prunes pairs of pieces whose
//! bounding regions are apart, polishes the survivors with Newton's method
//! (falling back to a one-dimensional solve where the curves are tangent),
//! and finally snaps, merges and sorts the results so that the output does
//! not depend on how many pieces found the same intersection.
//!
//! # Examples
//!
//! A parabola touching a line:
//! ```
//! use kruco::{intersect, BezierCurve, Classification};
//!
//! let parabola = BezierCurve::new([(-1.0, 1.0), (0.0, -1.0), (1.0, 1.0)]).unwrap();
//! let line = BezierCurve::line((-1.0, 0.0), (1.0, 0.0)).unwrap();
//! let result = intersect(&parabola, &line).unwrap();
//! assert_eq!(result.len(), 1);
//! let touch = result.points().next().unwrap();
//! assert_eq!(touch.kind, Classification::Tangent);
//! assert!((touch.s - 0.5).abs() < 1e-6);
//! ```
//!
//! Tuning the search:
//! ```
//! use kruco::{intersect_with, BezierCurve, DeCasteljau, IntersectOptions, RegionPolicy};
//!
//! let a = BezierCurve::new([(0.0, 0.0), (1.0, 3.0), (2.0, -3.0), (3.0, 0.0)]).unwrap();
//! let b = BezierCurve::line((-1.0, 0.0), (4.0, 0.0)).unwrap();
//! let options = IntersectOptions::default()
//!     .with_tolerance(1e-10)
//!     .with_region(RegionPolicy::ConvexHull);
//! let result = intersect_with(&a, &b, &options, &DeCasteljau).unwrap();
//! assert_eq!(result.points().count(), 3);
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. The `alloc` crate is
//! used regardless.
//!
//! - `serde`: `Serialize` and `Deserialize` for curves, options and results.
//! - `rayon`: [`intersect_many`] runs on the rayon thread pool.
//!
//! The crate logs through the [`log`] facade and never installs a logger.
//!
//! [`libm`]: https://docs.rs/libm
//! [`log`]: https://docs.rs/log

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![allow(
    clippy::unreadable_literal,
    clippy::many_single_char_names,
    clippy::excessive_precision,
    reason = "numeric code reads better with short names and literal constants"
)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("kruco requires either the `std` or `libm` feature");

extern crate alloc;

mod bezier;
mod classify;
pub mod common;
mod error;
mod evaluator;
mod hull;
mod intersect;
mod locate;
mod newton;
mod options;
mod point;
mod rect;
mod region;
mod search;
mod segment;
mod vec2;

pub use crate::bezier::*;
pub use crate::classify::*;
pub use crate::error::*;
pub use crate::evaluator::*;
pub use crate::hull::*;
pub use crate::intersect::*;
pub use crate::newton::{refine, RefineStatus, Refined};
pub use crate::options::*;
pub use crate::point::*;
pub use crate::rect::*;
pub use crate::region::*;
pub use crate::search::{find_leaves, Leaf, LeafOrigin, SearchStats};
pub use crate::segment::Segment;
pub use crate::vec2::*;
