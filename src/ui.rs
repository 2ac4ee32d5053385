// src/ui.rs
use egui;

use sat_collision::config::Rgba;
use sat_collision::Point2;

/// What the overlay shows for one frame.
pub struct HudInfo {
    pub mouse: Point2,
    pub collided: bool,
    pub fps: f32,
    pub ticks: u64,
    pub text_color: Rgba,
    pub highlight_color: Rgba,
}

fn to_color32(color: Rgba) -> egui::Color32 {
    let [r, g, b, a] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

pub fn build_ui(ctx: &egui::Context, info: &HudInfo) {
    egui::Window::new("SAT Collision")
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(10.0, 10.0))
        .resizable(false)
        .show(ctx, |ui| {
            ui.vertical(|ui| {
                let text = to_color32(info.text_color);
                ui.label(egui::RichText::new(format!("Mouse x: {}", info.mouse.x as i32)).color(text));
                ui.label(egui::RichText::new(format!("Mouse y: {}", info.mouse.y as i32)).color(text));
                ui.separator();

                if info.collided {
                    ui.label(egui::RichText::new("Collision").strong().color(to_color32(info.highlight_color)));
                } else {
                    ui.label("No collision");
                }
                ui.label(format!("FPS: {:.0}", info.fps));
                ui.label(format!("Ticks: {}", info.ticks));
                ui.separator();

                ui.label("R: New random polygons");
                ui.label("Escape: Quit");
            });
        });
}
