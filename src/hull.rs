// Copyright 2026 the Kruco Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Convex hulls of control polygons.

use smallvec::SmallVec;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;
use crate::{Point, Rect, Vec2};

/// The convex hull of a set of points, as a polygon.
///
/// Vertices are stored anti-clockwise (in a y-up space) without repeating the
/// first vertex. Collinear input collapses to a two-vertex hull and coincident
/// input to a single vertex; both still take part in overlap tests.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexHull {
    vertices: SmallVec<[Point; 8]>,
}

impl ConvexHull {
    /// Compute the hull of `points` with Andrew's monotone chain.
    pub fn new(points: &[Point]) -> Self {
        let mut sorted: SmallVec<[Point; 8]> = points.iter().copied().collect();
        sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
        sorted.dedup();
        if sorted.len() < 3 {
            return Self { vertices: sorted };
        }

        // Each chain pops while the turn is not strictly anti-clockwise. The
        // last point of each chain starts the other one, so it is dropped.
        fn chain(points: impl Iterator<Item = Point>, hull: &mut SmallVec<[Point; 8]>) {
            let start = hull.len();
            for p in points {
                while hull.len() >= start + 2 {
                    let a = hull[hull.len() - 2];
                    let b = hull[hull.len() - 1];
                    if (b - a).cross(p - a) > 0.0 {
                        break;
                    }
                    hull.pop();
                }
                hull.push(p);
            }
            hull.pop();
        }

        let mut hull: SmallVec<[Point; 8]> = SmallVec::new();
        chain(sorted.iter().copied(), &mut hull);
        chain(sorted.iter().rev().copied(), &mut hull);
        if hull.len() < 2 {
            // Everything was collinear; keep the extreme points.
            hull = SmallVec::from_slice(&[sorted[0], sorted[sorted.len() - 1]]);
        }
        Self { vertices: hull }
    }

    /// The hull of a rectangle.
    pub fn from_rect(rect: &Rect) -> Self {
        Self::new(&rect.corners())
    }

    /// The hull's vertices.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// The axis-aligned bounding box of the hull.
    pub fn bounding_box(&self) -> Rect {
        Rect::bounding(&self.vertices).unwrap_or_default()
    }

    /// The diameter of the hull, bounded by its box diagonal.
    pub fn diameter(&self) -> f64 {
        self.bounding_box().diameter()
    }

    fn axes(&self) -> SmallVec<[Vec2; 8]> {
        let n = self.vertices.len();
        let mut axes = SmallVec::new();
        match n {
            0 | 1 => {}
            2 => {
                let d = self.vertices[1] - self.vertices[0];
                axes.push(d.turn_90());
                axes.push(d);
            }
            _ => {
                for i in 0..n {
                    let d = self.vertices[(i + 1) % n] - self.vertices[i];
                    axes.push(d.turn_90());
                }
            }
        }
        axes
    }

    fn project(&self, axis: Vec2) -> (f64, f64) {
        self.vertices
            .iter()
            .map(|p| p.to_vec2().dot(axis))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), d| {
                (lo.min(d), hi.max(d))
            })
    }

    /// Separating-axis overlap test.
    ///
    /// Touching hulls overlap. A small slack relative to the projected
    /// magnitudes absorbs rounding in the projections, so the test errs on the
    /// side of reporting overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        if self.vertices.is_empty() || other.vertices.is_empty() {
            return false;
        }
        if !self.bounding_box().overlaps(&other.bounding_box()) {
            return false;
        }
        for axis in self.axes().into_iter().chain(other.axes()) {
            if axis.x == 0.0 && axis.y == 0.0 {
                continue;
            }
            let (lo_a, hi_a) = self.project(axis);
            let (lo_b, hi_b) = other.project(axis);
            let scale = lo_a.abs().max(hi_a.abs()).max(lo_b.abs()).max(hi_b.abs());
            let slack = 8.0 * f64::EPSILON * scale;
            if lo_b > hi_a + slack || lo_a > hi_b + slack {
                return false;
            }
        }
        true
    }
}
