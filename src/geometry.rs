// src/geometry.rs

use std::ops::{Add, AddAssign, Sub};

use bytemuck::{Pod, Zeroable};

use crate::error::GeometryError;
use crate::projection::{project, Interval};
use crate::transform::Rotation;

pub const MIN_VERTICES: usize = 3;

/// A 2D position or direction. Directions are made by subtracting two positions.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable, PartialEq)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub const ZERO: Point2 = Point2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Both components set to `value`.
    pub fn splat(value: f32) -> Self {
        Self { x: value, y: value }
    }

    pub fn dot(&self, other: &Point2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// The vector turned a quarter turn clockwise (in y-up coordinates): `(y, -x)`.
    /// Not normalized.
    pub fn perpendicular(&self) -> Point2 {
        Point2::new(self.y, -self.x)
    }

    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    pub fn distance(&self, other: &Point2) -> f32 {
        (*self - *other).length()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point2 {
    type Output = Point2;

    fn add(self, rhs: Point2) -> Point2 {
        Point2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point2 {
    fn add_assign(&mut self, rhs: Point2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point2 {
    type Output = Point2;

    fn sub(self, rhs: Point2) -> Point2 {
        Point2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<Point2> for glam::Vec2 {
    fn from(p: Point2) -> Self {
        glam::Vec2::new(p.x, p.y)
    }
}

impl From<glam::Vec2> for Point2 {
    fn from(v: glam::Vec2) -> Self {
        Point2::new(v.x, v.y)
    }
}

/// A convex shape in its current pose: a closed loop of vertices (the last vertex connects back
/// to the first) and the pivot it rotates about. The pivot is not a vertex.
///
/// The vertex count is fixed once constructed. Convexity and consistent winding are assumed,
/// not enforced; see [`ConvexPolygon::is_convex`].
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexPolygon {
    vertices: Vec<Point2>, // Kept private so the count cannot change
    pivot: Point2,
}

impl ConvexPolygon {
    pub fn new(vertices: Vec<Point2>, pivot: Point2) -> Result<Self, GeometryError> {
        if vertices.len() < MIN_VERTICES {
            return Err(GeometryError::TooFewVertices { count: vertices.len() });
        }
        if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(GeometryError::NonFiniteVertex { index });
        }
        if !pivot.is_finite() {
            return Err(GeometryError::NonFinitePivot);
        }
        let first = vertices[0];
        if vertices.iter().all(|v| *v == first) {
            return Err(GeometryError::Degenerate);
        }
        Ok(Self { vertices, pivot })
    }

    /// Builds a polygon pivoting about the mean of its vertices.
    pub fn from_points(points: &[Point2]) -> Result<Self, GeometryError> {
        let pivot = vertex_mean(points);
        Self::new(points.to_vec(), pivot)
    }

    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    pub fn count(&self) -> usize {
        self.vertices.len()
    }

    pub fn pivot(&self) -> Point2 {
        self.pivot
    }

    /// Edges as `(start, end)` pairs, including the closing edge from the last vertex to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    pub fn area(&self) -> f32 {
        let mut area = 0.0f32;
        for (a, b) in self.edges() {
            area += a.x * b.y;
            area -= b.x * a.y;
        }
        area.abs() / 2.0
    }

    /// True when every turn along the loop bends the same way. Collinear runs are tolerated.
    pub fn is_convex(&self) -> bool {
        let n = self.vertices.len();
        let mut sign = 0.0f32;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            let c = self.vertices[(i + 2) % n];
            let e1 = b - a;
            let e2 = c - b;
            let cross = e1.x * e2.y - e1.y * e2.x;
            if cross == 0.0 {
                continue;
            }
            if sign == 0.0 {
                sign = cross.signum();
            } else if cross.signum() != sign {
                return false;
            }
        }
        true
    }

    /// Rotates every vertex about the pivot. The pivot itself stays put.
    pub fn rotate(&mut self, rotation: &Rotation) {
        let pivot = self.pivot;
        for vertex in &mut self.vertices {
            *vertex = rotation.apply_about(*vertex, pivot);
        }
    }

    pub fn rotate_degrees(&mut self, degrees: f32) {
        self.rotate(&Rotation::from_degrees(degrees));
    }

    /// Shifts the vertices and the pivot together, keeping their relationship intact.
    pub fn translate(&mut self, delta: Point2) {
        for vertex in &mut self.vertices {
            *vertex += delta;
        }
        self.pivot += delta;
    }

    pub fn project(&self, axis: &Point2) -> Interval {
        project(&self.vertices, axis)
    }
}

fn vertex_mean(points: &[Point2]) -> Point2 {
    if points.is_empty() {
        return Point2::ZERO;
    }
    let mut sum = Point2::ZERO;
    for p in points {
        sum += *p;
    }
    let n = points.len() as f32;
    Point2::new(sum.x / n, sum.y / n)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn square(x: f32, y: f32, size: f32) -> ConvexPolygon {
        ConvexPolygon::from_points(&[
            Point2::new(x, y),
            Point2::new(x + size, y),
            Point2::new(x + size, y + size),
            Point2::new(x, y + size),
        ])
        .unwrap()
    }

    #[test]
    fn dot_and_perpendicular() {
        let a = Point2::new(1.0, 2.0);
        let b = Point2::new(3.0, 4.0);
        assert_eq!(a.dot(&b), 11.0);

        let edge = Point2::new(3.0, 4.0);
        let normal = edge.perpendicular();
        assert_eq!(normal, Point2::new(4.0, -3.0));
        assert_eq!(edge.dot(&normal), 0.0);
    }

    #[test]
    fn subtraction_gives_direction() {
        let d = Point2::new(10.0, 5.0) - Point2::new(4.0, 7.0);
        assert_eq!(d, Point2::new(6.0, -2.0));
        assert_eq!(Point2::new(3.0, 4.0).length(), 5.0);
    }

    #[test]
    fn rejects_too_few_vertices() {
        let result = ConvexPolygon::new(
            vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)],
            Point2::ZERO,
        );
        assert_eq!(result, Err(GeometryError::TooFewVertices { count: 2 }));
    }

    #[test]
    fn rejects_non_finite_input() {
        let result = ConvexPolygon::new(
            vec![Point2::new(0.0, 0.0), Point2::new(f32::NAN, 0.0), Point2::new(0.0, 1.0)],
            Point2::ZERO,
        );
        assert_eq!(result, Err(GeometryError::NonFiniteVertex { index: 1 }));

        let result = ConvexPolygon::new(
            vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(0.0, 1.0)],
            Point2::new(f32::INFINITY, 0.0),
        );
        assert_eq!(result, Err(GeometryError::NonFinitePivot));
    }

    #[test]
    fn rejects_collapsed_polygon() {
        let p = Point2::new(2.0, 2.0);
        assert_eq!(ConvexPolygon::new(vec![p, p, p], p), Err(GeometryError::Degenerate));
    }

    #[test]
    fn edges_wrap_around() {
        let poly = square(0.0, 0.0, 10.0);
        let edges: Vec<_> = poly.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3], (Point2::new(0.0, 10.0), Point2::new(0.0, 0.0)));
    }

    #[test]
    fn from_points_pivots_on_mean() {
        let poly = square(0.0, 0.0, 10.0);
        assert_eq!(poly.pivot(), Point2::new(5.0, 5.0));
        assert!((poly.area() - 100.0).abs() < EPSILON);
    }

    #[test]
    fn translate_moves_pivot_with_vertices() {
        let mut poly = square(0.0, 0.0, 10.0);
        poly.translate(Point2::splat(-25.0));
        assert_eq!(poly.pivot(), Point2::new(-20.0, -20.0));
        assert_eq!(poly.vertices()[0], Point2::new(-25.0, -25.0));
    }

    #[test]
    fn rotate_keeps_distance_to_pivot() {
        let mut poly = square(350.0, 200.0, 100.0);
        let pivot = poly.pivot();
        let before: Vec<f32> = poly.vertices().iter().map(|v| v.distance(&pivot)).collect();
        for _ in 0..360 {
            poly.rotate_degrees(1.0);
        }
        assert_eq!(poly.pivot(), pivot);
        for (v, d) in poly.vertices().iter().zip(before) {
            assert!((v.distance(&pivot) - d).abs() < 1e-2);
        }
    }

    #[test]
    fn convexity_check() {
        assert!(square(0.0, 0.0, 1.0).is_convex());
        let dart = ConvexPolygon::from_points(&[
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 5.0),
            Point2::new(0.0, 10.0),
            Point2::new(3.0, 5.0),
        ])
        .unwrap();
        assert!(!dart.is_convex());
    }

    #[test]
    fn converts_to_glam() {
        let v: glam::Vec2 = Point2::new(1.5, -2.0).into();
        assert_eq!(v, glam::Vec2::new(1.5, -2.0));
        assert_eq!(Point2::from(v), Point2::new(1.5, -2.0));
    }
}
