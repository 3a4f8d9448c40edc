use std::sync::Arc;
use wgpu::util::DeviceExt;
use wgpu::{BindGroup, Buffer, Device, RenderPipeline, Surface, SurfaceConfiguration};
use winit::window::Window;

use super::display_context::DisplayContext;
use super::frame::PixelBuffer;
use super::gpu_context::GpuContext;
use super::quad::{Vertex, QUAD_VERTICES};
use super::sink::FrameSink;
use super::texture::{texture_format_for, FrameTexture};
use crate::error::{Error, Result};

/// Shows uploaded frames in a window
///
/// Owns the surface, the GPU context, the display pipeline, the quad and the
/// single frame texture. Each draw clears the surface, draws the textured
/// quad and presents.
pub struct Presenter {
    gpu: GpuContext,
    surface: Surface<'static>,
    surface_config: SurfaceConfiguration,
    render_pipeline: RenderPipeline,
    vertex_buffer: Buffer,
    bind_group: BindGroup,
    texture: FrameTexture,
}

impl Presenter {
    /// Create a presenter for a window with a fixed frame size
    pub fn new(window: Arc<Window>, context: DisplayContext) -> Result<Self> {
        let size = window.inner_size();

        let instance = GpuContext::instance();
        let surface = instance.create_surface(window)?;
        let gpu = pollster::block_on(GpuContext::new_with_surface(&instance, &surface))?;
        context.ensure_within(gpu.device().limits().max_texture_dimension_2d)?;

        gpu.device().push_error_scope(wgpu::ErrorFilter::Validation);

        let surface_config = Self::create_surface_config(&surface, &gpu, size.width, size.height);
        surface.configure(gpu.device(), &surface_config);

        let texture = FrameTexture::new(
            gpu.device(),
            context,
            texture_format_for(surface_config.format),
        );

        if let Some(err) = pollster::block_on(gpu.device().pop_error_scope()) {
            return Err(Error::Gpu(err.to_string()));
        }

        let (render_pipeline, bind_group) =
            Self::create_render_pipeline(gpu.device(), &texture, surface_config.format)?;

        let vertex_buffer = gpu
            .device()
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Quad Vertex Buffer"),
                contents: bytemuck::cast_slice(&QUAD_VERTICES),
                usage: wgpu::BufferUsages::VERTEX,
            });

        log::info!(
            "Presenter ready: {}x{} frame, {:?} surface",
            context.width,
            context.height,
            surface_config.format
        );

        Ok(Self {
            gpu,
            surface,
            surface_config,
            render_pipeline,
            vertex_buffer,
            bind_group,
            texture,
        })
    }

    /// Reconfigure the surface after the window changed size
    ///
    /// The frame texture keeps its size; the quad stretches it over the surface.
    pub fn resize_surface(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        log::debug!("Surface resized to {}x{}", width, height);
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface
            .configure(self.gpu.device(), &self.surface_config);
    }

    /// Current surface dimensions
    pub fn surface_dimensions(&self) -> (u32, u32) {
        (self.surface_config.width, self.surface_config.height)
    }

    fn create_surface_config(
        surface: &Surface,
        gpu: &GpuContext,
        width: u32,
        height: u32,
    ) -> SurfaceConfiguration {
        let surface_caps = surface.get_capabilities(gpu.adapter());
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        }
    }

    /// Compile the display shader and build the pipeline
    ///
    /// Validation errors are caught in an error scope and returned instead of
    /// reaching the device's uncaptured error handler.
    fn create_render_pipeline(
        device: &Device,
        texture: &FrameTexture,
        surface_format: wgpu::TextureFormat,
    ) -> Result<(RenderPipeline, BindGroup)> {
        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Display Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("display.wgsl").into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Frame Texture Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Frame Texture Bind Group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(texture.view()),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(texture.sampler()),
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Display Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Display Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        if let Some(err) = pollster::block_on(device.pop_error_scope()) {
            return Err(Error::Shader(err.to_string()));
        }

        Ok((pipeline, bind_group))
    }

    /// Returns `false` when the frame was skipped instead of presented
    fn render(&mut self) -> Result<bool> {
        let surface_texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost or outdated, reconfiguring and skipping frame");
                self.surface
                    .configure(self.gpu.device(), &self.surface_config);
                return Ok(false);
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("Timed out acquiring surface texture, skipping frame");
                return Ok(false);
            }
            Err(err) => return Err(err.into()),
        };
        let surface_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Display Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Display Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_pipeline(&self.render_pipeline);
            render_pass.set_bind_group(0, &self.bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            render_pass.draw(0..QUAD_VERTICES.len() as u32, 0..1);
        }

        self.gpu.queue().submit(Some(encoder.finish()));
        surface_texture.present();

        Ok(true)
    }
}

impl FrameSink for Presenter {
    fn dimensions(&self) -> DisplayContext {
        self.texture.dimensions()
    }

    fn upload(&mut self, frame: &PixelBuffer) -> Result<()> {
        self.texture.upload(self.gpu.queue(), frame)
    }

    fn draw(&mut self) -> Result<bool> {
        self.render()
    }
}
