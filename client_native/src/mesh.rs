//! Mesh generation for the Pong client
//!
//! Simple meshes: unit rectangle (paddles), unit circle (ball)

use wgpu::util::DeviceExt;
use wgpu::*;

/// Vertex data for meshes
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

/// Mesh data with GPU buffers
pub struct Mesh {
    pub vertex_buffer: Buffer,
    pub index_buffer: Buffer,
    pub index_count: u32,
}

impl Mesh {
    pub fn new(device: &Device, vertices: &[Vertex], indices: &[u16]) -> Self {
        let vertex_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
            label: Some("Vertex Buffer"),
            contents: bytemuck::cast_slice(vertices),
            usage: BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
            label: Some("Index Buffer"),
            contents: bytemuck::cast_slice(indices),
            usage: BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        }
    }
}

/// Unit rectangle centered at the origin, scaled per instance
pub fn create_rectangle(device: &Device) -> Mesh {
    let vertices = [
        Vertex {
            position: [-0.5, -0.5, 0.0],
        },
        Vertex {
            position: [0.5, -0.5, 0.0],
        },
        Vertex {
            position: [0.5, 0.5, 0.0],
        },
        Vertex {
            position: [-0.5, 0.5, 0.0],
        },
    ];
    let indices = [0u16, 1, 2, 2, 3, 0];

    Mesh::new(device, &vertices, &indices)
}

/// Unit-diameter circle as a triangle fan around a center vertex
pub fn create_circle(device: &Device, segments: u32) -> Mesh {
    let mut vertices = vec![Vertex {
        position: [0.0, 0.0, 0.0],
    }];
    for i in 0..=segments {
        let angle = std::f32::consts::TAU * i as f32 / segments as f32;
        vertices.push(Vertex {
            position: [angle.cos() * 0.5, angle.sin() * 0.5, 0.0],
        });
    }

    let mut indices = Vec::with_capacity(segments as usize * 3);
    for i in 1..=segments as u16 {
        indices.extend_from_slice(&[0, i, i + 1]);
    }

    Mesh::new(device, &vertices, &indices)
}
