//! Camera for the Pong client
//!
//! Simple 2D orthographic camera over the arena

use glam::Mat4;

/// Camera struct
pub struct Camera {
    pub view_proj: Mat4,
}

impl Camera {
    /// Create an orthographic camera covering the arena.
    /// Arena is `width` x `height` units; y increases downward to match the
    /// simulation's coordinates.
    pub fn orthographic(width: f32, height: f32) -> Self {
        let view_proj = Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0);
        Self { view_proj }
    }
}

/// Camera uniform data (matches WGSL struct, 256-byte aligned)
#[repr(C, align(256))]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4], // 64 bytes (mat4x4)
    _padding: [f32; 48],      // 192 bytes padding (48 * 4) to reach 256 bytes
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj.to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}
