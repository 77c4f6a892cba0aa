// Copyright 2026 the Kruco Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned bounding boxes.

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;
use crate::Point;

/// An axis-aligned rectangle, used as a bounding box.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// The minimum x coordinate.
    pub x0: f64,
    /// The minimum y coordinate.
    pub y0: f64,
    /// The maximum x coordinate.
    pub x1: f64,
    /// The maximum y coordinate.
    pub y1: f64,
}

/// How two boxes relate to each other.
///
/// Boxes that only share boundary points are `Tangent`; for the purposes of
/// pruning they still count as overlapping, since the curves they bound may
/// touch there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoxIntersection {
    /// The boxes share interior points.
    Intersection,
    /// The boxes touch along an edge or at a corner.
    Tangent,
    /// The boxes are apart.
    Disjoint,
}

impl Rect {
    /// A new rectangle from minimum and maximum coordinates.
    #[inline]
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// A new rectangle from two points.
    ///
    /// The result will have non-negative width and height.
    #[inline]
    pub fn from_points(p0: impl Into<Point>, p1: impl Into<Point>) -> Self {
        let p0 = p0.into();
        let p1 = p1.into();
        Self::new(
            p0.x.min(p1.x),
            p0.y.min(p1.y),
            p0.x.max(p1.x),
            p0.y.max(p1.y),
        )
    }

    /// The smallest rectangle containing all the given points.
    ///
    /// Returns `None` for an empty slice.
    pub fn bounding(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        Some(
            rest.iter()
                .fold(Self::from_points(*first, *first), |r, p| r.union_pt(*p)),
        )
    }

    /// The width of the rectangle.
    #[inline]
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// The height of the rectangle.
    #[inline]
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// The length of the diagonal, which is the diameter of the box.
    #[inline]
    pub fn diameter(&self) -> f64 {
        self.width().hypot(self.height())
    }

    /// The center point of the rectangle.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(0.5 * (self.x0 + self.x1), 0.5 * (self.y0 + self.y1))
    }

    /// The four corners, anti-clockwise in a y-up space.
    #[inline]
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x0, self.y0),
            Point::new(self.x1, self.y0),
            Point::new(self.x1, self.y1),
            Point::new(self.x0, self.y1),
        ]
    }

    /// The smallest rectangle enclosing two rectangles.
    #[inline]
    #[must_use]
    pub fn union(&self, other: Self) -> Self {
        Self {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    /// Compute the union with one point.
    #[inline]
    #[must_use]
    pub fn union_pt(&self, pt: Point) -> Self {
        Self::new(
            self.x0.min(pt.x),
            self.y0.min(pt.y),
            self.x1.max(pt.x),
            self.y1.max(pt.y),
        )
    }

    /// Expand a rectangle by a constant amount in every direction.
    #[inline]
    #[must_use]
    pub fn inflate(&self, amount: f64) -> Self {
        Self {
            x0: self.x0 - amount,
            y0: self.y0 - amount,
            x1: self.x1 + amount,
            y1: self.y1 + amount,
        }
    }

    /// Whether the point lies in the rectangle, boundary included.
    #[inline]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x0 && pt.x <= self.x1 && pt.y >= self.y0 && pt.y <= self.y1
    }

    /// Whether two rectangles overlap.
    ///
    /// Unlike a strict interior test, edge and corner contact count as
    /// overlap: two curves can meet exactly on the shared boundary.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.x0.max(other.x0) <= self.x1.min(other.x1)
            && self.y0.max(other.y0) <= self.y1.min(other.y1)
    }

    /// Classify how two rectangles relate.
    pub fn classify_overlap(&self, other: &Self) -> BoxIntersection {
        let dx = self.x1.min(other.x1) - self.x0.max(other.x0);
        let dy = self.y1.min(other.y1) - self.y0.max(other.y0);
        if dx < 0.0 || dy < 0.0 {
            BoxIntersection::Disjoint
        } else if dx == 0.0 || dy == 0.0 {
            // A zero-width box (a horizontal or vertical segment) overlapping
            // the interior of another still shares "interior" points.
            if (dx == 0.0 && self.width() > 0.0 && other.width() > 0.0)
                || (dy == 0.0 && self.height() > 0.0 && other.height() > 0.0)
            {
                BoxIntersection::Tangent
            } else {
                BoxIntersection::Intersection
            }
        } else {
            BoxIntersection::Intersection
        }
    }
}

impl From<(Point, Point)> for Rect {
    fn from(points: (Point, Point)) -> Self {
        Self::from_points(points.0, points.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_points() {
        let pts = [
            Point::new(1.0, 2.0),
            Point::new(-1.0, 5.0),
            Point::new(3.0, 0.0),
        ];
        assert_eq!(Rect::bounding(&pts), Some(Rect::new(-1.0, 0.0, 3.0, 5.0)));
        assert_eq!(Rect::bounding(&[]), None);
    }

    #[test]
    fn overlap_is_inclusive() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        let touching = Rect::new(1.0, 0.5, 2.0, 2.0);
        let corner = Rect::new(1.0, 1.0, 2.0, 2.0);
        let apart = Rect::new(1.5, 0.0, 2.0, 1.0);
        assert!(a.overlaps(&touching));
        assert!(a.overlaps(&corner));
        assert!(!a.overlaps(&apart));
        assert_eq!(a.classify_overlap(&touching), BoxIntersection::Tangent);
        assert_eq!(a.classify_overlap(&corner), BoxIntersection::Tangent);
        assert_eq!(a.classify_overlap(&apart), BoxIntersection::Disjoint);
        assert_eq!(
            a.classify_overlap(&Rect::new(0.5, 0.5, 3.0, 3.0)),
            BoxIntersection::Intersection
        );
    }

    #[test]
    fn degenerate_boxes_overlap() {
        // A horizontal segment crossing a box.
        let flat = Rect::new(-1.0, 0.5, 2.0, 0.5);
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        assert!(flat.overlaps(&a));
        assert_eq!(flat.classify_overlap(&a), BoxIntersection::Intersection);
    }

    #[test]
    fn diameter() {
        assert_eq!(Rect::new(0.0, 0.0, 3.0, 4.0).diameter(), 5.0);
    }
}
