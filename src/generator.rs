// src/generator.rs

use rand::Rng;

use crate::error::GeometryError;
use crate::geometry::{ConvexPolygon, Point2};

pub struct PolygonGenerator;

impl PolygonGenerator {
    /// Random convex polygon with `num_vertices` corners around `center`, pivoting about `center`.
    ///
    /// Corners sit on a circle of radius `radius` at evenly spaced angles, each angle jittered
    /// by up to a fifth of the spacing. No gap between corners reaches half a turn, so `center`
    /// is always strictly inside.
    pub fn generate_convex_polygon<R: Rng + ?Sized>(
        rng: &mut R,
        center: Point2,
        radius: f32,
        num_vertices: usize,
    ) -> Result<ConvexPolygon, GeometryError> {
        if num_vertices < 3 {
            return Err(GeometryError::TooFewVertices { count: num_vertices });
        }

        let spacing = 2.0 * std::f32::consts::PI / (num_vertices as f32);
        let max_perturbation = spacing * 0.2;

        let mut angles = Vec::with_capacity(num_vertices);
        for i in 0..num_vertices {
            let base_angle = (i as f32) * spacing;
            angles.push(base_angle + rng.gen_range(-max_perturbation..max_perturbation));
        }

        let points: Vec<Point2> = angles
            .into_iter()
            .map(|angle_rad| {
                Point2::new(
                    center.x + radius * angle_rad.cos(),
                    center.y + radius * angle_rad.sin(),
                )
            })
            .collect();

        ConvexPolygon::new(points, center)
    }

    /// Like [`Self::generate_convex_polygon`], with the vertex count and radius drawn at random.
    pub fn generate_random<R: Rng + ?Sized>(
        rng: &mut R,
        center: Point2,
        radius_range: std::ops::Range<f32>,
        vertex_range: std::ops::RangeInclusive<usize>,
    ) -> Result<ConvexPolygon, GeometryError> {
        let num_vertices = rng.gen_range(vertex_range);
        let radius = rng.gen_range(radius_range);
        Self::generate_convex_polygon(rng, center, radius, num_vertices)
    }
}
