// src/rendering_lib/renderer.rs

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use wgpu::util::DeviceExt;

use sat_collision::config::{DisplayConfig, Rgba};
use sat_collision::{ConvexPolygon, Point2};

use super::vertex::Vertex;

const INITIAL_VERTEX_CAPACITY: usize = 256;

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ScreenUniform {
    projection: [[f32; 4]; 4],
}

impl ScreenUniform {
    /// Maps logical pixels with y pointing down onto clip space.
    fn for_size(width: f32, height: f32) -> Self {
        let projection = Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0);
        Self { projection: projection.to_cols_array_2d() }
    }
}

/// Draws colored line segments in screen space. Geometry is rebuilt every frame: call
/// [`Renderer::begin_frame`], push lines, then [`Renderer::render`].
pub struct Renderer {
    render_pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    vertex_capacity: usize,

    frame_vertices: Vec<Vertex>,

    screen_uniform: ScreenUniform,
    screen_uniform_buffer: wgpu::Buffer,
    screen_bind_group: wgpu::BindGroup,

    sample_count: u32,
    msaa_view: Option<wgpu::TextureView>,
}

fn create_vertex_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Line Vertex Buffer"),
        size: (capacity * std::mem::size_of::<Vertex>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn create_msaa_view(
    device: &wgpu::Device,
    format: wgpu::TextureFormat,
    width: u32,
    height: u32,
    sample_count: u32,
) -> Option<wgpu::TextureView> {
    if sample_count <= 1 {
        return None;
    }
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("MSAA Color Target"),
        size: wgpu::Extent3d { width, height, depth_or_array_layers: 1 },
        mip_level_count: 1,
        sample_count,
        dimension: wgpu::TextureDimension::D2,
        format,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    Some(texture.create_view(&wgpu::TextureViewDescriptor::default()))
}

impl Renderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        shader_source: &str,
        surface_size: (u32, u32),
        logical_size: (f32, f32),
        sample_count: u32,
    ) -> Self {
        let shader_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Renderer Shader Module"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        let screen_uniform = ScreenUniform::for_size(logical_size.0, logical_size.1);
        let screen_uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Screen Projection Uniform Buffer"),
            contents: bytemuck::bytes_of(&screen_uniform),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let screen_bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
            label: Some("screen_projection_bind_group_layout"),
        });

        let screen_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &screen_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: screen_uniform_buffer.as_entire_binding(),
            }],
            label: Some("screen_projection_bind_group"),
        });

        let render_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Renderer Pipeline Layout"),
                bind_group_layouts: &[&screen_bind_group_layout],
                push_constant_ranges: &[],
            });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Line Pipeline"),
            layout: Some(&render_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader_module,
                entry_point: "vs_main",
                buffers: &[Vertex::desc()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader_module,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: sample_count,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
        });

        let msaa_view = create_msaa_view(device, surface_format, surface_size.0, surface_size.1, sample_count);

        Self {
            render_pipeline,
            vertex_buffer: create_vertex_buffer(device, INITIAL_VERTEX_CAPACITY),
            vertex_capacity: INITIAL_VERTEX_CAPACITY,
            frame_vertices: Vec::with_capacity(INITIAL_VERTEX_CAPACITY),
            screen_uniform,
            screen_uniform_buffer,
            screen_bind_group,
            sample_count,
            msaa_view,
        }
    }

    pub fn resize(
        &mut self,
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        surface_size: (u32, u32),
        logical_size: (f32, f32),
    ) {
        self.screen_uniform = ScreenUniform::for_size(logical_size.0, logical_size.1);
        self.msaa_view =
            create_msaa_view(device, surface_format, surface_size.0, surface_size.1, self.sample_count);
    }

    pub fn begin_frame(&mut self) {
        self.frame_vertices.clear();
    }

    pub fn push_line(&mut self, from: Point2, to: Point2, color: Rgba) {
        self.frame_vertices.push(Vertex::new(from, color));
        self.frame_vertices.push(Vertex::new(to, color));
    }

    /// Evenly spaced vertical and horizontal lines starting at the top-left corner.
    pub fn push_grid(&mut self, display: &DisplayConfig, width: f32, height: f32) {
        for i in 0..display.grid_lines {
            let offset = i as f32 * display.grid_spacing;
            self.push_line(Point2::new(offset, 0.0), Point2::new(offset, height), display.grid_color);
            self.push_line(Point2::new(0.0, offset), Point2::new(width, offset), display.grid_color);
        }
    }

    /// The closed outline of `polygon`, last vertex joined back to the first.
    pub fn push_polygon_outline(&mut self, polygon: &ConvexPolygon, color: Rgba) {
        for (start, end) in polygon.edges() {
            self.push_line(start, end, color);
        }
    }

    fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue) {
        if self.frame_vertices.len() > self.vertex_capacity {
            self.vertex_capacity = self.frame_vertices.len().next_power_of_two();
            log::debug!("growing line vertex buffer to {} vertices", self.vertex_capacity);
            self.vertex_buffer = create_vertex_buffer(device, self.vertex_capacity);
        }
        queue.write_buffer(&self.screen_uniform_buffer, 0, bytemuck::bytes_of(&self.screen_uniform));
        if !self.frame_vertices.is_empty() {
            queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&self.frame_vertices));
        }
    }

    pub fn render(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        output_view: &wgpu::TextureView,
        clear_color: Rgba,
    ) {
        self.upload(device, queue);

        let (view, resolve_target) = match &self.msaa_view {
            Some(msaa_view) => (msaa_view, Some(output_view)),
            None => (output_view, None),
        };
        let clear = wgpu::Color {
            r: clear_color[0] as f64,
            g: clear_color[1] as f64,
            b: clear_color[2] as f64,
            a: clear_color[3] as f64,
        };

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Line Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target,
                ops: wgpu::Operations { load: wgpu::LoadOp::Clear(clear), store: wgpu::StoreOp::Store },
            })],
            depth_stencil_attachment: None, occlusion_query_set: None, timestamp_writes: None,
        });

        if !self.frame_vertices.is_empty() {
            let vertex_bytes = (self.frame_vertices.len() * std::mem::size_of::<Vertex>()) as u64;
            render_pass.set_pipeline(&self.render_pipeline);
            render_pass.set_bind_group(0, &self.screen_bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..vertex_bytes));
            render_pass.draw(0..self.frame_vertices.len() as u32, 0..1);
        }
    }
}
