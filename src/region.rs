// Copyright 2026 the Kruco Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounding regions used to prune candidate pairs.

use crate::{ConvexHull, Point, Rect};

/// Which kind of region encloses a curve during the search.
///
/// Boxes are cheap to build and test; hulls are tighter, so fewer pairs
/// survive each level, at the price of a separating-axis test.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RegionPolicy {
    /// Axis-aligned bounding box of the control points.
    #[default]
    BoundingBox,
    /// Convex hull of the control points.
    ConvexHull,
}

/// A region of the plane containing a curve.
#[derive(Clone, Debug, PartialEq)]
pub enum BoundingRegion {
    /// An axis-aligned box.
    Box(Rect),
    /// A convex polygon.
    Hull(ConvexHull),
}

impl BoundingRegion {
    /// The region of the given kind around a set of control points.
    pub fn from_control_points(points: &[Point], policy: RegionPolicy) -> Self {
        match policy {
            RegionPolicy::BoundingBox => Self::Box(Rect::bounding(points).unwrap_or_default()),
            RegionPolicy::ConvexHull => Self::Hull(ConvexHull::new(points)),
        }
    }

    /// Whether two regions may share a point.
    ///
    /// Contact counts as overlap. False positives are possible, false
    /// negatives are not.
    pub fn overlaps(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Box(a), Self::Box(b)) => a.overlaps(b),
            (Self::Hull(a), Self::Hull(b)) => a.overlaps(b),
            (Self::Box(r), Self::Hull(h)) | (Self::Hull(h), Self::Box(r)) => {
                r.overlaps(&h.bounding_box()) && ConvexHull::from_rect(r).overlaps(h)
            }
        }
    }

    /// The axis-aligned bounding box of the region.
    pub fn bounding_box(&self) -> Rect {
        match self {
            Self::Box(r) => *r,
            Self::Hull(h) => h.bounding_box(),
        }
    }

    /// An upper bound on the distance between two points of the region.
    pub fn diameter(&self) -> f64 {
        match self {
            Self::Box(r) => r.diameter(),
            Self::Hull(h) => h.diameter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hull_prunes_what_box_keeps() {
        let a = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)];
        let b = [Point::new(1.0, 1.0), Point::new(0.7, 1.0), Point::new(1.0, 0.7)];
        let boxes = (
            BoundingRegion::from_control_points(&a, RegionPolicy::BoundingBox),
            BoundingRegion::from_control_points(&b, RegionPolicy::BoundingBox),
        );
        let hulls = (
            BoundingRegion::from_control_points(&a, RegionPolicy::ConvexHull),
            BoundingRegion::from_control_points(&b, RegionPolicy::ConvexHull),
        );
        assert!(boxes.0.overlaps(&boxes.1));
        assert!(!hulls.0.overlaps(&hulls.1));
        // The box of `a` contains the corner of `b`.
        assert!(boxes.0.overlaps(&hulls.1));
        assert!(hulls.1.overlaps(&boxes.0));
    }

    #[test]
    fn mixed_contact() {
        let r = BoundingRegion::Box(Rect::new(0.0, 0.0, 1.0, 1.0));
        let touching = BoundingRegion::from_control_points(
            &[Point::new(1.0, 1.0), Point::new(2.0, 1.5), Point::new(1.5, 2.0)],
            RegionPolicy::ConvexHull,
        );
        assert!(r.overlaps(&touching));
        assert!(touching.overlaps(&r));
    }

    #[test]
    fn diameter() {
        let line = BoundingRegion::from_control_points(
            &[Point::new(0.0, 0.0), Point::new(3.0, 4.0)],
            RegionPolicy::ConvexHull,
        );
        assert_eq!(line.diameter(), 5.0);
    }
}
