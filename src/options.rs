// Copyright 2026 the Kruco Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;
use crate::{BezierCurve, Error, Point, RegionPolicy};

/// The deepest subdivision that still halves a parameter interval of `[0, 1]`
/// in `f64`.
const MAX_USEFUL_DEPTH: u32 = 52;

/// Tuning knobs for the intersection engine.
///
/// The defaults suit curves with coordinates of order 1 to 1000. All
/// tolerances are absolute; [`tolerance`](Self::tolerance) is widened for
/// curves far from the origin, where floats are sparser.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct IntersectOptions {
    /// Spatial accuracy: the largest residual `‖A(s) − B(t)‖` accepted as an
    /// intersection, and the region size at which subdivision stops.
    pub tolerance: f64,
    /// Parameter distance below which two results are the same intersection.
    pub merge_tolerance: f64,
    /// Parameter distance to 0 or 1 below which a parameter snaps to the
    /// endpoint.
    pub endpoint_tolerance: f64,
    /// Sine of the angle between tangents below which the curves are treated
    /// as tangent and the Newton step as singular.
    pub singular_threshold: f64,
    /// Maximum subdivision depth.
    pub max_depth: u32,
    /// Maximum Newton iterations per leaf.
    pub newton_iterations: usize,
    /// Maximum number of candidate pairs examined; `None` for no limit.
    pub max_candidates: Option<usize>,
    /// Minimum number of touching leaves before a cluster is checked for
    /// coincidence.
    pub coincident_min_leaves: usize,
    /// Whether to test for overlapping curves before subdividing.
    pub coincidence_precheck: bool,
    /// The kind of region used to prune candidate pairs.
    pub region: RegionPolicy,
}

impl Default for IntersectOptions {
    fn default() -> Self {
        Self {
            tolerance: 1e-9,
            merge_tolerance: 1e-6,
            endpoint_tolerance: 1e-10,
            singular_threshold: 1e-3,
            max_depth: 20,
            newton_iterations: 50,
            max_candidates: Some(1 << 20),
            coincident_min_leaves: 16,
            coincidence_precheck: true,
            region: RegionPolicy::BoundingBox,
        }
    }
}

impl IntersectOptions {
    /// Builder method for setting the spatial tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Builder method for setting the merge tolerance.
    #[must_use]
    pub fn with_merge_tolerance(mut self, merge_tolerance: f64) -> Self {
        self.merge_tolerance = merge_tolerance;
        self
    }

    /// Builder method for setting the endpoint snapping tolerance.
    #[must_use]
    pub fn with_endpoint_tolerance(mut self, endpoint_tolerance: f64) -> Self {
        self.endpoint_tolerance = endpoint_tolerance;
        self
    }

    /// Builder method for setting the tangency threshold.
    #[must_use]
    pub fn with_singular_threshold(mut self, singular_threshold: f64) -> Self {
        self.singular_threshold = singular_threshold;
        self
    }

    /// Builder method for setting the maximum subdivision depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Builder method for setting the Newton iteration limit.
    #[must_use]
    pub fn with_newton_iterations(mut self, newton_iterations: usize) -> Self {
        self.newton_iterations = newton_iterations;
        self
    }

    /// Builder method for setting the candidate ceiling.
    #[must_use]
    pub fn with_max_candidates(mut self, max_candidates: Option<usize>) -> Self {
        self.max_candidates = max_candidates;
        self
    }

    /// Builder method for setting the coincident cluster size.
    #[must_use]
    pub fn with_coincident_min_leaves(mut self, coincident_min_leaves: usize) -> Self {
        self.coincident_min_leaves = coincident_min_leaves;
        self
    }

    /// Builder method for enabling or disabling the coincidence pre-check.
    #[must_use]
    pub fn with_coincidence_precheck(mut self, yes: bool) -> Self {
        self.coincidence_precheck = yes;
        self
    }

    /// Builder method for setting the region policy.
    #[must_use]
    pub fn with_region(mut self, region: RegionPolicy) -> Self {
        self.region = region;
        self
    }

    /// Check that every option is in range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOptions`] naming the first offending field.
    pub fn validate(&self) -> Result<(), Error> {
        fn positive(field: &'static str, value: f64) -> Result<(), Error> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(Error::InvalidOptions {
                    field,
                    reason: "must be positive and finite",
                })
            }
        }
        positive("tolerance", self.tolerance)?;
        positive("merge_tolerance", self.merge_tolerance)?;
        positive("endpoint_tolerance", self.endpoint_tolerance)?;
        if !(self.singular_threshold.is_finite()
            && self.singular_threshold >= 0.0
            && self.singular_threshold < 1.0)
        {
            return Err(Error::InvalidOptions {
                field: "singular_threshold",
                reason: "must lie in [0, 1)",
            });
        }
        if self.max_depth > MAX_USEFUL_DEPTH {
            return Err(Error::InvalidOptions {
                field: "max_depth",
                reason: "must be at most 52",
            });
        }
        if self.max_candidates == Some(0) {
            return Err(Error::InvalidOptions {
                field: "max_candidates",
                reason: "must allow at least one candidate",
            });
        }
        if self.coincident_min_leaves < 2 {
            return Err(Error::InvalidOptions {
                field: "coincident_min_leaves",
                reason: "must be at least 2",
            });
        }
        Ok(())
    }

    /// The spatial tolerance for a pair of curves, widened with their
    /// magnitude.
    pub fn tolerance_for(&self, a: &BezierCurve, b: &BezierCurve) -> f64 {
        let bbox = a.bounding_box().union(b.bounding_box());
        let extent = Point::new(
            bbox.x0.abs().max(bbox.x1.abs()),
            bbox.y0.abs().max(bbox.y1.abs()),
        );
        Point::epsilon(extent, self.tolerance)
    }
}
