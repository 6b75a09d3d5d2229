pub mod arena;
pub mod components;
pub mod config;
pub mod params;
pub mod resources;
pub mod systems;

pub use arena::*;
pub use components::*;
pub use config::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run the deterministic Pong game simulation for one frame
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    arena: &Arena,
    config: &Config,
    score: &mut Score,
    serve: &mut Serve,
    events: &mut Events,
    queue: &mut InputQueue,
) {
    // Clamp dt to prevent large jumps
    let clamped_dt = time.dt.min(Params::MAX_DT);

    // Clear events at start of frame so a bounce or score anywhere in the
    // frame survives until the client reads it
    events.clear();

    // Fixed micro-steps for stable physics
    let mut remaining_dt = clamped_dt;
    while remaining_dt > 0.0 {
        let step_dt = remaining_dt.min(Params::FIXED_DT);
        remaining_dt -= step_dt;

        let step_time = Time {
            dt: step_dt,
            now: time.now + (clamped_dt - remaining_dt),
        };

        // 1. Ingest inputs (apply to human paddle intents)
        ingest_inputs(world, queue);

        // 2. Steer AI paddles toward the ball
        drive_ai(world);

        // 3. Move paddles based on intents, clamped to the arena
        move_paddles(world, &step_time, arena, config);

        // 4. Move ball
        move_ball(world, &step_time);

        // 5. Check collisions (ball vs walls, paddles)
        check_collisions(world, arena, config, events);

        // 6. Check scoring (ball exited arena)
        check_scoring(world, arena, config, score, serve, events);
    }

    // Update time
    time.now += clamped_dt;
}

/// Helper to create a paddle entity
pub fn create_paddle(
    world: &mut World,
    player_id: u8,
    y: f32,
    source: ControlSource,
) -> hecs::Entity {
    world.spawn((Paddle::new(player_id, y), PaddleIntent::new(), source))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
