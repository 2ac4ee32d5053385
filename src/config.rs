// src/config.rs

/// Motion and pacing for the two polygons.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Degrees added to polygon A's rotation every tick.
    pub rotation_step_a: f32,
    pub rotation_step_b: f32,
    /// Added to both coordinates of polygon B (vertices and pivot) once at setup.
    pub setup_offset_b: f32,
    pub ticks_per_second: u32,
    /// Upper bound on ticks run for one rendered frame, so a stalled frame cannot snowball.
    pub max_ticks_per_frame: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rotation_step_a: 1.0,
            rotation_step_b: 1.0,
            setup_offset_b: -25.0,
            ticks_per_second: 60,
            max_ticks_per_frame: 5,
        }
    }
}

impl SimulationConfig {
    pub fn tick_seconds(&self) -> f32 {
        1.0 / self.ticks_per_second.max(1) as f32
    }

    /// `max_ticks_per_frame`, but never less than one so the simulation cannot stall.
    pub fn tick_budget(&self) -> u32 {
        self.max_ticks_per_frame.max(1)
    }
}

/// RGBA with components in `0.0..=1.0`.
pub type Rgba = [f32; 4];

pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Rgba {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0]
}

/// Window and drawing settings for the demo.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub msaa_samples: u32,
    pub grid_spacing: f32,
    pub grid_lines: u32,
    pub background: Rgba,
    pub grid_color: Rgba,
    pub collided_color: Rgba,
    pub idle_color_a: Rgba,
    pub idle_color_b: Rgba,
    pub text_color: Rgba,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Sat-Collision".to_string(),
            width: 800,
            height: 600,
            msaa_samples: 4,
            grid_spacing: 50.0,
            grid_lines: 16,
            background: rgba8(32, 32, 32, 255),
            grid_color: rgba8(52, 52, 52, 200),
            collided_color: rgba8(230, 41, 55, 255),
            idle_color_a: rgba8(0, 121, 241, 255),
            idle_color_b: rgba8(255, 161, 0, 255),
            text_color: rgba8(0, 158, 47, 255),
        }
    }
}

impl DisplayConfig {
    /// Outline colors for polygons A and B given the latest collision state.
    pub fn polygon_colors(&self, collided: bool) -> (Rgba, Rgba) {
        if collided {
            (self.collided_color, self.collided_color)
        } else {
            (self.idle_color_a, self.idle_color_b)
        }
    }
}
