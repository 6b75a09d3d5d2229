use glam::Vec2;

use crate::params::Params;

/// Playing field bounds
#[derive(Debug, Clone, Copy)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new() -> Self {
        Self {
            width: Params::ARENA_WIDTH,
            height: Params::ARENA_HEIGHT,
        }
    }

    /// Center of the field, where the ball spawns
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Vertical center line, where paddles spawn
    pub fn paddle_spawn_y(&self) -> f32 {
        self.height / 2.0
    }

    /// Clamp a y coordinate so an object with the given half-extent stays inside
    pub fn clamp_y(&self, y: f32, half_extent: f32) -> f32 {
        y.clamp(half_extent, self.height - half_extent)
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}
