// src/transform.rs

use crate::geometry::Point2;

/// A rotation by a signed angle, with sine and cosine computed once.
/// Positive angles turn +x toward +y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    sin: f32,
    cos: f32,
}

impl Rotation {
    pub fn from_degrees(degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self { sin, cos }
    }

    pub fn inverse(&self) -> Self {
        Self { sin: -self.sin, cos: self.cos }
    }

    /// Rotates `point` about `pivot`:
    ///
    /// `x' = cos·(x − px) − sin·(y − py) + px`
    /// `y' = sin·(x − px) + cos·(y − py) + py`
    #[inline(always)]
    pub fn apply_about(&self, point: Point2, pivot: Point2) -> Point2 {
        let dx = point.x - pivot.x;
        let dy = point.y - pivot.y;
        Point2::new(
            self.cos * dx - self.sin * dy + pivot.x,
            self.sin * dx + self.cos * dy + pivot.y,
        )
    }
}

pub fn rotate_about(point: Point2, pivot: Point2, degrees: f32) -> Point2 {
    Rotation::from_degrees(degrees).apply_about(point, pivot)
}

pub fn translate_by(point: Point2, delta: Point2) -> Point2 {
    point + delta
}

/// Adds the same `amount` to both components.
pub fn shift_uniform(point: Point2, amount: f32) -> Point2 {
    translate_by(point, Point2::splat(amount))
}
