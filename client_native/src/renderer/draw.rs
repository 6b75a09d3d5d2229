use wgpu::*;

use super::resources::InstanceData;
use super::Renderer;
use crate::game::Game;

pub fn draw_frame(renderer: &mut Renderer, game: &Game) -> Result<(), String> {
    let output = renderer
        .surface
        .get_current_texture()
        .map_err(|e| format!("Failed to get current texture: {:?}", e))?;
    let view = output
        .texture
        .create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    update_buffers(renderer, game);

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color::BLACK),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_objects(renderer, &mut pass);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn update_buffers(renderer: &mut Renderer, game: &Game) {
    let config = game.config();
    let ball_pos = game.ball_pos();

    let left_instance = InstanceData {
        transform: [
            config.paddle_x(0),
            game.paddle_y(0),
            config.paddle_width,
            config.paddle_height,
        ],
        tint: [0.0, 1.0, 0.0, 1.0],
    };
    let right_instance = InstanceData {
        transform: [
            config.paddle_x(1),
            game.paddle_y(1),
            config.paddle_width,
            config.paddle_height,
        ],
        tint: [0.0, 1.0, 0.0, 1.0],
    };
    let ball_instance = InstanceData {
        transform: [
            ball_pos.x,
            ball_pos.y,
            config.ball_radius * 2.0,
            config.ball_radius * 2.0,
        ],
        tint: [1.0, 1.0, 1.0, 1.0],
    };

    // Skip the uploads on frames where nothing moved
    let current = (left_instance, right_instance, ball_instance);
    let needs_update = renderer
        .last_instance_data
        .map(|last| last != current)
        .unwrap_or(true);

    if needs_update {
        renderer.queue.write_buffer(
            &renderer.buffers.left_paddle,
            0,
            bytemuck::cast_slice(&[left_instance]),
        );
        renderer.queue.write_buffer(
            &renderer.buffers.right_paddle,
            0,
            bytemuck::cast_slice(&[right_instance]),
        );
        renderer
            .queue
            .write_buffer(&renderer.buffers.ball, 0, bytemuck::cast_slice(&[ball_instance]));
        renderer.last_instance_data = Some(current);
    }
}

fn draw_objects<'a>(renderer: &'a Renderer, pass: &mut RenderPass<'a>) {
    pass.set_pipeline(&renderer.main_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);

    // Rects (paddles)
    pass.set_vertex_buffer(0, renderer.meshes.0.vertex_buffer.slice(..));
    pass.set_index_buffer(renderer.meshes.0.index_buffer.slice(..), IndexFormat::Uint16);

    pass.set_vertex_buffer(1, renderer.buffers.left_paddle.slice(..));
    pass.draw_indexed(0..renderer.meshes.0.index_count, 0, 0..1);

    pass.set_vertex_buffer(1, renderer.buffers.right_paddle.slice(..));
    pass.draw_indexed(0..renderer.meshes.0.index_count, 0, 0..1);

    // Circle (ball)
    pass.set_vertex_buffer(0, renderer.meshes.1.vertex_buffer.slice(..));
    pass.set_index_buffer(renderer.meshes.1.index_buffer.slice(..), IndexFormat::Uint16);
    pass.set_vertex_buffer(1, renderer.buffers.ball.slice(..));
    pass.draw_indexed(0..renderer.meshes.1.index_count, 0, 0..1);
}
