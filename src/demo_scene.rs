// src/demo_scene.rs

use crate::config::SimulationConfig;
use crate::error::GeometryError;
use crate::geometry::{ConvexPolygon, Point2};
use crate::transform::shift_uniform;
use crate::world::World;

const SQUARE_A_VERTICES: [Point2; 4] = [
    Point2 { x: 350.0, y: 200.0 },
    Point2 { x: 450.0, y: 200.0 },
    Point2 { x: 450.0, y: 300.0 },
    Point2 { x: 350.0, y: 300.0 },
];
const SQUARE_A_PIVOT: Point2 = Point2 { x: 400.0, y: 250.0 };

const SQUARE_B_VERTICES: [Point2; 4] = [
    Point2 { x: 500.0, y: 250.0 },
    Point2 { x: 600.0, y: 250.0 },
    Point2 { x: 600.0, y: 350.0 },
    Point2 { x: 500.0, y: 350.0 },
];
const SQUARE_B_PIVOT: Point2 = Point2 { x: 550.0, y: 300.0 };

pub fn create_demo_polygons(config: &SimulationConfig) -> Result<(ConvexPolygon, ConvexPolygon), GeometryError> {
    let polygon_a = ConvexPolygon::new(SQUARE_A_VERTICES.to_vec(), SQUARE_A_PIVOT)?;
    let offset = config.setup_offset_b;
    let polygon_b = ConvexPolygon::new(
        SQUARE_B_VERTICES.iter().map(|v| shift_uniform(*v, offset)).collect(),
        shift_uniform(SQUARE_B_PIVOT, offset),
    )?;
    Ok((polygon_a, polygon_b))
}

/// Two 100x100 squares side by side, B nudged up-left toward A, both spinning in place.
pub fn create_demo_world(config: &SimulationConfig) -> Result<World, GeometryError> {
    let (polygon_a, polygon_b) = create_demo_polygons(config)?;
    Ok(World::new(polygon_a, polygon_b, config.rotation_step_a, config.rotation_step_b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_square_is_shifted_with_its_pivot() {
        let (a, b) = create_demo_polygons(&SimulationConfig::default()).unwrap();
        assert_eq!(a.pivot(), Point2::new(400.0, 250.0));
        assert_eq!(b.pivot(), Point2::new(525.0, 275.0));
        assert_eq!(b.vertices()[0], Point2::new(475.0, 225.0));
        assert_eq!(b.vertices()[2], Point2::new(575.0, 325.0));
    }

    #[test]
    fn squares_start_apart_and_meet_while_spinning() {
        let mut world = create_demo_world(&SimulationConfig::default()).unwrap();
        assert!(!world.collided());
        assert!(!world.tick());

        // Around 56 degrees the corners swing into each other.
        let mut hits = 0;
        for _ in 1..90 {
            if world.tick() {
                hits += 1;
            }
        }
        assert!(hits > 0);
        assert!(hits < 89);
    }

    #[test]
    fn without_offset_the_squares_never_touch() {
        let config = SimulationConfig { setup_offset_b: 0.0, ..SimulationConfig::default() };
        let mut world = create_demo_world(&config).unwrap();
        // Centers are 158 apart; the squares' circumradius is only 70.7.
        for _ in 0..360 {
            assert!(!world.tick());
        }
    }
}
