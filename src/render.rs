use crate::constants::CLEAR_COLOR;
use crate::core::{FrameView, SceneRenderer, Viewport, CORE_STYLE, GLOW_STYLE};
use web_sys as web;
use wgpu::util::DeviceExt;

mod helpers;
mod points;
mod targets;
use points::{PointUniforms, SurfaceResources};
use targets::DepthTarget;

/// WebGPU state for the swarm: one position buffer and one color buffer
/// shared by two pipelines (core and glow).
pub struct PointRenderer {
    canvas: web::HtmlCanvasElement,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,

    position_buffer: wgpu::Buffer,
    color_buffer: wgpu::Buffer,
    point_count: u32,

    core: SurfaceResources,
    glow: SurfaceResources,
}

impl PointRenderer {
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        positions: &[[f32; 3]],
        colors: &[[f32; 3]],
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = helpers::pick_surface_format(&caps.formats)
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: helpers::pick_alpha_mode(&caps.alpha_modes),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {:?} {}x{}", format, width, height);

        let depth = DepthTarget::new(&device, width, height);

        let position_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("point_positions"),
            contents: bytemuck::cast_slice(positions),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let color_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("point_colors"),
            contents: bytemuck::cast_slice(colors),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("points_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::POINTS_WGSL.into()),
        });
        let bgl = points::create_points_bgl(&device);
        let core =
            points::create_surface_resources(&device, &shader, &bgl, format, CORE_STYLE, "core_points");
        let glow =
            points::create_surface_resources(&device, &shader, &bgl, format, GLOW_STYLE, "glow_points");

        Ok(Self {
            canvas: canvas.clone(),
            surface,
            device,
            queue,
            config,
            depth,
            position_buffer,
            color_buffer,
            point_count: positions.len() as u32,
            core,
            glow,
        })
    }

    fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
        self.depth
            .recreate(&self.device, self.config.width, self.config.height);
    }

    #[inline]
    fn aspect(&self) -> f32 {
        self.config.width as f32 / self.config.height.max(1) as f32
    }
}

impl SceneRenderer for PointRenderer {
    fn configure(&mut self, viewport: Viewport) {
        self.canvas.set_width(viewport.width);
        self.canvas.set_height(viewport.height);
        self.config.width = viewport.width.max(1);
        self.config.height = viewport.height.max(1);
        self.reconfigure();
    }

    fn update_colors(&mut self, colors: &[[f32; 3]]) {
        let n = colors.len().min(self.point_count as usize);
        self.queue
            .write_buffer(&self.color_buffer, 0, bytemuck::cast_slice(&colors[..n]));
    }

    fn draw(&mut self, frame: &FrameView) -> anyhow::Result<()> {
        let output = match self.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[gpu] surface lost; reconfiguring");
                self.reconfigure();
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let aspect = self.aspect();
        for s in [&self.core, &self.glow] {
            let u = PointUniforms::new(frame, &s.style, aspect);
            self.queue
                .write_buffer(&s.uniform_buffer, 0, bytemuck::bytes_of(&u));
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("points_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_vertex_buffer(0, self.position_buffer.slice(..));
            rpass.set_vertex_buffer(1, self.color_buffer.slice(..));
            // Core first so the glow depth-tests against it without occluding it.
            for s in [&self.core, &self.glow] {
                rpass.set_pipeline(&s.pipeline);
                rpass.set_bind_group(0, &s.bind_group, &[]);
                rpass.draw(0..6, 0..self.point_count);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        output.present();
        Ok(())
    }
}
