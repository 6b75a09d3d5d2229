pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use std::sync::Arc;

use wgpu::*;
use winit::window::Window;

use crate::camera::Camera;
use crate::game::Game;
use crate::mesh::{create_circle, create_rectangle, Mesh};
use resources::{GameBuffers, InstanceData};

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub size: (u32, u32),
    pub camera: Camera,

    pub main_pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,

    pub buffers: GameBuffers,
    pub meshes: (Mesh, Mesh), // rect, circle

    pub last_instance_data: Option<(InstanceData, InstanceData, InstanceData)>,
}

impl Renderer {
    pub fn new(window: Arc<Window>, arena_width: f32, arena_height: f32) -> Result<Self, String> {
        let ctx = init::init_wgpu(window)?;
        let camera = Camera::orthographic(arena_width, arena_height);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipes = pipeline::create_pipeline(&ctx.device, ctx.config.format);

        // Meshes
        let rect_mesh = create_rectangle(&ctx.device);
        let circle_mesh = create_circle(&ctx.device, 32);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            size: ctx.size,
            camera,
            main_pipeline: pipes.main_pipeline,
            camera_bind_group,
            buffers,
            meshes: (rect_mesh, circle_mesh),
            last_instance_data: None,
        })
    }

    /// Reconfigure the surface after a size change (scale-factor driven; the
    /// window itself is fixed-size). The camera is untouched since the arena
    /// never changes.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.size = (width, height);
            self.surface_config.width = width;
            self.surface_config.height = height;
            self.surface.configure(&self.device, &self.surface_config);
        }
    }

    pub fn draw(&mut self, game: &Game) -> Result<(), String> {
        draw::draw_frame(self, game)
    }
}
