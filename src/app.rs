// src/app.rs

use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::{
    event::{ElementState, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
    window::Window,
};

use sat_collision::config::{DisplayConfig, SimulationConfig};
use sat_collision::demo_scene::create_demo_world;
use sat_collision::{GeometryError, Point2, PolygonGenerator, World};

use crate::rendering_lib::{Renderer, WGSL_SHADER_SOURCE};
use crate::ui::{build_ui, HudInfo};

#[derive(thiserror::Error, Debug)]
pub enum SetupError {
    #[error("could not create a surface for the window: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible graphics adapter found")]
    NoAdapter,
    #[error("could not open the graphics device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("could not build the demo scene: {0}")]
    Scene(#[from] GeometryError),
}

/// Frames per second averaged over roughly half a second.
struct FpsCounter {
    elapsed: f32,
    frames: u32,
    fps: f32,
}

impl FpsCounter {
    const WINDOW_SECONDS: f32 = 0.5;

    fn new() -> Self {
        Self { elapsed: 0.0, frames: 0, fps: 0.0 }
    }

    fn record(&mut self, dt: f32) {
        self.elapsed += dt;
        self.frames += 1;
        if self.elapsed >= Self::WINDOW_SECONDS {
            self.fps = self.frames as f32 / self.elapsed;
            self.elapsed = 0.0;
            self.frames = 0;
        }
    }
}

pub struct SatApp {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: winit::dpi::PhysicalSize<u32>,
    scale_factor: f64,
    renderer: Renderer,
    world: World,
    simulation: SimulationConfig,
    display: DisplayConfig,
    tick_accumulator: f32,
    fps: FpsCounter,
    cursor: Point2,
    rng: StdRng,
    exit_requested: bool,
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

impl SatApp {
    pub async fn new(
        window: std::sync::Arc<Window>,
        simulation: SimulationConfig,
        display: DisplayConfig,
    ) -> Result<Self, SetupError> {
        let world = create_demo_world(&simulation)?;

        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window.clone())?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(SetupError::NoAdapter)?;
        log::info!("using adapter {:?}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps.formats.iter().copied()
            .find(|f| f.is_srgb()).unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let format_features = adapter.get_texture_format_features(surface_format);
        let sample_count = if format_features.flags.sample_count_supported(display.msaa_samples) {
            display.msaa_samples
        } else {
            log::warn!("{}x MSAA unsupported for {:?}, drawing without it", display.msaa_samples, surface_format);
            1
        };

        let renderer = Renderer::new(
            &device, config.format, WGSL_SHADER_SOURCE,
            (config.width, config.height),
            logical_size(size, scale_factor),
            sample_count,
        );

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(), egui::ViewportId::ROOT, &window,
            Some(scale_factor as f32),
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            &device, config.format, None, 1,
        );

        let seed = rand::random::<u64>();
        log::debug!("random polygon seed {}", seed);

        Ok(Self {
            surface, device, queue, config, size, scale_factor,
            renderer, world, simulation, display,
            tick_accumulator: 0.0,
            fps: FpsCounter::new(),
            cursor: Point2::ZERO,
            rng: StdRng::seed_from_u64(seed),
            exit_requested: false,
            egui_ctx, egui_state, egui_renderer,
        })
    }

    pub fn get_size(&self) -> winit::dpi::PhysicalSize<u32> { self.size }

    pub fn exit_requested(&self) -> bool { self.exit_requested }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>, scale_factor: f64) {
        if new_size.width > 0 && new_size.height > 0 {
            log::info!("resizing surface to {}x{} (scale {})", new_size.width, new_size.height, scale_factor);
            self.size = new_size;
            self.scale_factor = scale_factor;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
            self.renderer.resize(
                &self.device, self.config.format,
                (self.config.width, self.config.height),
                logical_size(new_size, scale_factor),
            );
        }
    }

    /// Runs as many fixed-length ticks as `dt` covers, capped per frame.
    pub fn update(&mut self, dt: f32) {
        self.fps.record(dt);

        let step = self.simulation.tick_seconds();
        let budget = self.simulation.tick_budget();
        self.tick_accumulator += dt;
        let mut ran = 0;
        while self.tick_accumulator >= step && ran < budget {
            self.world.tick();
            self.tick_accumulator -= step;
            ran += 1;
        }
        if ran == budget && self.tick_accumulator >= step {
            log::debug!("dropping {:.3}s of backlog", self.tick_accumulator);
            self.tick_accumulator = 0.0;
        }
    }

    fn randomize_polygons(&mut self) {
        let pivot_a = self.world.polygon_a().pivot();
        let pivot_b = self.world.polygon_b().pivot();
        let generated = PolygonGenerator::generate_random(&mut self.rng, pivot_a, 40.0..70.0, 3..=8)
            .and_then(|a| {
                PolygonGenerator::generate_random(&mut self.rng, pivot_b, 40.0..70.0, 3..=8).map(|b| (a, b))
            });
        match generated {
            Ok((a, b)) => self.world.replace_polygons(a, b),
            Err(e) => log::warn!("could not generate polygons: {}", e),
        }
    }

    pub fn render(&mut self, window: &Window) -> Result<(), wgpu::SurfaceError> {
        let output_texture = self.surface.get_current_texture()?;
        let view = output_texture.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Main Command Encoder"),
        });

        let (width, height) = logical_size(self.size, self.scale_factor);
        let (color_a, color_b) = self.display.polygon_colors(self.world.collided());
        self.renderer.begin_frame();
        self.renderer.push_grid(&self.display, width, height);
        self.renderer.push_polygon_outline(self.world.polygon_a(), color_a);
        self.renderer.push_polygon_outline(self.world.polygon_b(), color_b);
        self.renderer.render(&self.device, &self.queue, &mut encoder, &view, self.display.background);

        let hud = HudInfo {
            mouse: self.cursor,
            collided: self.world.collided(),
            fps: self.fps.fps,
            ticks: self.world.ticks(),
            text_color: self.display.text_color,
            highlight_color: self.display.collided_color,
        };
        let raw_input = self.egui_state.take_egui_input(window);
        let full_output = self.egui_ctx.run(raw_input, |ctx| { build_ui(ctx, &hud); });
        self.egui_state.handle_platform_output(window, full_output.platform_output);
        let tris = self.egui_ctx.tessellate(full_output.shapes, self.egui_ctx.pixels_per_point());
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer.update_texture(&self.device, &self.queue, *id, image_delta);
        }
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point: window.scale_factor() as f32,
        };
        self.egui_renderer.update_buffers(&self.device, &self.queue, &mut encoder, &tris, &screen_descriptor);
        {
            let mut gui_render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("GUI Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view, resolve_target: None,
                    ops: wgpu::Operations { load: wgpu::LoadOp::Load, store: wgpu::StoreOp::Store },
                })],
                depth_stencil_attachment: None, occlusion_query_set: None, timestamp_writes: None,
            });
            self.egui_renderer.render(&mut gui_render_pass, &tris, &screen_descriptor);
        }
        for tex_id in &full_output.textures_delta.free { self.egui_renderer.free_texture(tex_id); }

        self.queue.submit(std::iter::once(encoder.finish()));
        output_texture.present();
        Ok(())
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent, window: &Window) -> bool {
        if let WindowEvent::CursorMoved { position, .. } = event {
            let logical = position.to_logical::<f32>(self.scale_factor);
            self.cursor = Point2::new(logical.x, logical.y);
        }
        if self.egui_state.on_window_event(window, event).consumed { return true; }
        match event {
            WindowEvent::KeyboardInput { event: key_event, .. }
                if key_event.state == ElementState::Pressed && !key_event.repeat =>
            {
                match key_event.physical_key {
                    PhysicalKey::Code(KeyCode::KeyR) => { self.randomize_polygons(); true }
                    PhysicalKey::Code(KeyCode::Escape) => { self.exit_requested = true; true }
                    _ => false,
                }
            }
            _ => false,
        }
    }
}

fn logical_size(size: winit::dpi::PhysicalSize<u32>, scale_factor: f64) -> (f32, f32) {
    let logical = size.to_logical::<f32>(scale_factor);
    (logical.width.max(1.0), logical.height.max(1.0))
}
