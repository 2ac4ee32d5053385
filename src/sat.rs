// src/sat.rs

use crate::geometry::{ConvexPolygon, Point2};

/// Separating Axis Theorem overlap test for convex polygons.
pub struct SatCollision;

impl SatCollision {
    /// Edge normals of `polygon`, one per edge, in edge order. Zero-length edges (repeated
    /// consecutive vertices) give no axis; any other edge does, however short.
    pub fn candidate_axes(polygon: &ConvexPolygon) -> impl Iterator<Item = Point2> + '_ {
        polygon.edges().filter_map(|(start, end)| {
            let edge = end - start;
            if edge == Point2::ZERO {
                None
            } else {
                Some(edge.perpendicular())
            }
        })
    }

    #[inline(always)]
    fn separates(axis: &Point2, a: &ConvexPolygon, b: &ConvexPolygon) -> bool {
        let interval_a = a.project(axis);
        let interval_b = b.project(axis);
        !interval_a.overlaps(&interval_b)
    }

    /// Returns the first edge normal of `a`, then of `b`, on which the two projections do not
    /// overlap. Touching projections count as separated.
    pub fn find_separating_axis(a: &ConvexPolygon, b: &ConvexPolygon) -> Option<Point2> {
        let axis = Self::candidate_axes(a)
            .chain(Self::candidate_axes(b))
            .find(|axis| Self::separates(axis, a, b));
        if let Some(axis) = axis {
            log::trace!("separating axis ({}, {})", axis.x, axis.y);
        }
        axis
    }

    /// True when no edge normal of either polygon separates them.
    pub fn overlaps(a: &ConvexPolygon, b: &ConvexPolygon) -> bool {
        Self::find_separating_axis(a, b).is_none()
    }
}
