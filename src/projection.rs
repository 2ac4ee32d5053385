// src/projection.rs

use crate::geometry::Point2;

/// The range of scalar projections of a vertex set onto an axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Contains nothing: every real value is below `min` and above `max`.
    pub const EMPTY: Interval = Interval { min: f32::INFINITY, max: f32::NEG_INFINITY };

    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn include(&mut self, value: f32) {
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// Strict overlap. Intervals that only share an endpoint do not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        !(self.min >= other.max || other.min >= self.max)
    }
}

pub fn project(vertices: &[Point2], axis: &Point2) -> Interval {
    let mut interval = Interval::EMPTY;
    for vertex in vertices {
        interval.include(vertex.dot(axis));
    }
    interval
}
