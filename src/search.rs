// Copyright 2026 the Kruco Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Subdivision search for pairs of curve pieces that may intersect.
//!
//! Both curves are split in half together, and a pair of pieces survives only
//! while their bounding regions overlap. The work list is an explicit stack,
//! so the depth of the search never touches the call stack.

use alloc::vec::Vec;

use arrayvec::ArrayVec;

use crate::{BezierCurve, Evaluator, IntersectOptions, Segment};

/// Why a leaf stopped being subdivided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeafOrigin {
    /// Both regions became smaller than the tolerance.
    Small,
    /// The maximum depth was reached.
    DepthLimit,
    /// The candidate ceiling was hit before this pair was examined.
    CandidateCeiling,
}

/// A coarse intersection estimate: a surviving pair of pieces.
#[derive(Clone, Debug, PartialEq)]
pub struct Leaf {
    /// Middle of the piece of the first curve.
    pub s: f64,
    /// Middle of the piece of the second curve.
    pub t: f64,
    /// Parameter width of the piece of the first curve.
    pub s_width: f64,
    /// Parameter width of the piece of the second curve.
    pub t_width: f64,
    /// Why subdivision stopped.
    pub origin: LeafOrigin,
}

/// Counters describing one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidate pairs popped from the work stack.
    pub candidates: usize,
    /// Deepest level at which a pair was examined.
    pub max_depth_reached: u32,
    /// Leaves emitted.
    pub leaves: usize,
    /// Whether the candidate ceiling stopped the search.
    pub ceiling_hit: bool,
}

/// A pair of pieces awaiting examination.
#[derive(Clone, Debug)]
struct Candidate {
    a: Segment,
    b: Segment,
    depth: u32,
}

impl Candidate {
    fn leaf(&self, origin: LeafOrigin) -> Leaf {
        Leaf {
            s: self.a.midpoint_param(),
            t: self.b.midpoint_param(),
            s_width: self.a.width(),
            t_width: self.b.width(),
            origin,
        }
    }

    fn children(&self) -> ArrayVec<Self, 4> {
        let (a0, a1) = self.a.split();
        let (b0, b1) = self.b.split();
        let depth = self.depth + 1;
        // Pushed in reverse so the low-parameter pair is examined first.
        ArrayVec::from([
            Self { a: a1.clone(), b: b1.clone(), depth },
            Self { a: a1, b: b0.clone(), depth },
            Self { a: a0.clone(), b: b1, depth },
            Self { a: a0, b: b0, depth },
        ])
    }
}

/// Find every pair of small pieces of `a` and `b` whose regions overlap.
///
/// `tolerance` is the spatial tolerance for this pair of curves.
pub fn find_leaves<E: Evaluator>(
    a: &BezierCurve,
    b: &BezierCurve,
    options: &IntersectOptions,
    tolerance: f64,
    evaluator: &E,
) -> (Vec<Leaf>, SearchStats) {
    find_leaves_in(
        [(Segment::new(a), Segment::new(b))],
        options,
        tolerance,
        evaluator,
    )
}

/// Search starting from several pairs of pieces at once.
///
/// Each root pair starts at depth 0; the candidate ceiling is shared.
pub(crate) fn find_leaves_in<E: Evaluator>(
    roots: impl IntoIterator<Item = (Segment, Segment)>,
    options: &IntersectOptions,
    tolerance: f64,
    evaluator: &E,
) -> (Vec<Leaf>, SearchStats) {
    let mut stats = SearchStats::default();
    let mut leaves = Vec::new();
    let mut stack: Vec<Candidate> = roots
        .into_iter()
        .map(|(a, b)| Candidate { a, b, depth: 0 })
        .collect();
    // Examine the first root first.
    stack.reverse();

    while let Some(candidate) = stack.pop() {
        stats.candidates += 1;
        if options.max_candidates.is_some_and(|max| stats.candidates > max) {
            log::warn!(
                "candidate ceiling of {} reached; {} pairs left unexamined",
                stats.candidates - 1,
                stack.len() + 1
            );
            stats.ceiling_hit = true;
            stats.candidates -= 1;
            leaves.push(candidate.leaf(LeafOrigin::CandidateCeiling));
            leaves.extend(
                stack
                    .drain(..)
                    .map(|c| c.leaf(LeafOrigin::CandidateCeiling)),
            );
            break;
        }
        stats.max_depth_reached = stats.max_depth_reached.max(candidate.depth);

        let region_a = candidate.a.region(evaluator, options.region);
        let region_b = candidate.b.region(evaluator, options.region);
        if !region_a.overlaps(&region_b) {
            continue;
        }
        if candidate.depth == 0 {
            log::trace!(
                "top level boxes: {:?}",
                region_a
                    .bounding_box()
                    .classify_overlap(&region_b.bounding_box())
            );
        }

        if region_a.diameter() < tolerance && region_b.diameter() < tolerance {
            leaves.push(candidate.leaf(LeafOrigin::Small));
        } else if candidate.depth >= options.max_depth {
            leaves.push(candidate.leaf(LeafOrigin::DepthLimit));
        } else {
            stack.extend(candidate.children());
        }
    }

    stats.leaves = leaves.len();
    log::trace!(
        "search examined {} pairs to depth {}, {} leaves",
        stats.candidates,
        stats.max_depth_reached,
        stats.leaves
    );
    (leaves, stats)
}
