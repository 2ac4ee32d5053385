// src/lib.rs

pub mod config;
pub mod demo_scene;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod projection;
pub mod sat;
pub mod transform;
pub mod world;

pub use config::{DisplayConfig, SimulationConfig};
pub use error::GeometryError;
pub use generator::PolygonGenerator;
pub use geometry::{ConvexPolygon, Point2};
pub use projection::{project, Interval};
pub use sat::SatCollision;
pub use transform::{rotate_about, shift_uniform, translate_by, Rotation};
pub use world::World;
