// src/world.rs

use crate::geometry::ConvexPolygon;
use crate::sat::SatCollision;
use crate::transform::Rotation;

/// Two polygons spinning about their own pivots, plus the collision state of their latest pose.
///
/// Each [`World::tick`] rotates, tests and publishes in one step. Readers only ever see the
/// polygons and the flag from the same tick.
#[derive(Clone, Debug)]
pub struct World {
    polygon_a: ConvexPolygon,
    polygon_b: ConvexPolygon,
    step_a: Rotation,
    step_b: Rotation,
    collided: bool,
    ticks: u64,
}

impl World {
    pub fn new(
        polygon_a: ConvexPolygon,
        polygon_b: ConvexPolygon,
        step_a_degrees: f32,
        step_b_degrees: f32,
    ) -> Self {
        let collided = SatCollision::overlaps(&polygon_a, &polygon_b);
        Self {
            polygon_a,
            polygon_b,
            step_a: Rotation::from_degrees(step_a_degrees),
            step_b: Rotation::from_degrees(step_b_degrees),
            collided,
            ticks: 0,
        }
    }

    pub fn tick(&mut self) -> bool {
        self.polygon_a.rotate(&self.step_a);
        self.polygon_b.rotate(&self.step_b);
        self.ticks += 1;

        let collided = SatCollision::overlaps(&self.polygon_a, &self.polygon_b);
        if collided != self.collided {
            log::debug!("tick {}: collision {}", self.ticks, if collided { "started" } else { "ended" });
        }
        log::trace!("tick {} collided={}", self.ticks, collided);
        self.collided = collided;
        collided
    }

    /// Swaps in a new pair of polygons and re-evaluates the collision state. The tick count and
    /// rotation steps carry over.
    pub fn replace_polygons(&mut self, polygon_a: ConvexPolygon, polygon_b: ConvexPolygon) {
        self.polygon_a = polygon_a;
        self.polygon_b = polygon_b;
        self.collided = SatCollision::overlaps(&self.polygon_a, &self.polygon_b);
        log::info!(
            "replaced polygons ({} and {} vertices), collided={}",
            self.polygon_a.count(),
            self.polygon_b.count(),
            self.collided
        );
    }

    pub fn polygon_a(&self) -> &ConvexPolygon {
        &self.polygon_a
    }

    pub fn polygon_b(&self) -> &ConvexPolygon {
        &self.polygon_b
    }

    pub fn collided(&self) -> bool {
        self.collided
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point2;

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
    fn new_world_evaluates_initial_pose() {
        let world = World::new(square(0.0, 0.0, 10.0), square(5.0, 5.0, 10.0), 1.0, 1.0);
        assert!(world.collided());
        assert_eq!(world.ticks(), 0);
    }

    #[test]
    fn tick_rotates_each_polygon_about_its_pivot() {
        let mut world = World::new(square(0.0, 0.0, 10.0), square(100.0, 0.0, 10.0), 90.0, -90.0);
        let pivot_a = world.polygon_a().pivot();
        let pivot_b = world.polygon_b().pivot();

        assert!(!world.tick());
        assert_eq!(world.ticks(), 1);
        assert_eq!(world.polygon_a().pivot(), pivot_a);
        assert_eq!(world.polygon_b().pivot(), pivot_b);

        // (0,0) turned a quarter about (5,5) lands on (10,0).
        let first = world.polygon_a().vertices()[0];
        assert!((first.x - 10.0).abs() < 1e-4 && first.y.abs() < 1e-4);
        // (100,0) turned back a quarter about (105,5) lands on (100,10).
        let first = world.polygon_b().vertices()[0];
        assert!((first.x - 100.0).abs() < 1e-4 && (first.y - 10.0).abs() < 1e-4);
    }

    #[test]
    fn spinning_in_place_keeps_concentric_overlap() {
        let mut world = World::new(square(0.0, 0.0, 10.0), square(2.0, 2.0, 6.0), 3.0, -7.0);
        for _ in 0..120 {
            assert!(world.tick());
        }
        assert_eq!(world.ticks(), 120);
    }

    #[test]
    fn replace_polygons_re_evaluates() {
        let mut world = World::new(square(0.0, 0.0, 10.0), square(5.0, 5.0, 10.0), 1.0, 1.0);
        world.tick();
        world.replace_polygons(square(0.0, 0.0, 10.0), square(50.0, 50.0, 10.0));
        assert!(!world.collided());
        assert_eq!(world.ticks(), 1);
        assert_eq!(world.polygon_b().vertices()[0], Point2::new(50.0, 50.0));
    }
}
