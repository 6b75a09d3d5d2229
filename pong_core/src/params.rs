/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 25.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 400.0; // units per second
    pub const PADDLE_OFFSET_WALL: f32 = 10.0;

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const SERVE_SPEED_X: f32 = 100.0;
    pub const SERVE_SPEED_Y: f32 = 60.0;
    pub const BOUNCE_MULTIPLIER: f32 = 1.1; // Amplify speed on every bounce
    pub const BOUNCE_NUDGE: f32 = 10.0; // De-penetration offset after a bounce

    // Physics
    pub const FIXED_DT: f32 = 0.0166; // ~60 Hz
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
