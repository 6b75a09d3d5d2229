//! Game wrapper owning the simulation world and its resources

use glam::Vec2;
use hecs::World;
use pong_core::{
    create_ball, create_paddle, Arena, Ball, Config, ControlSource, Events, InputQueue, Paddle,
    Score, Serve, Time,
};

/// Owns the simulation and drives it once per frame.
/// Control sources are fixed at construction; the update path is identical
/// for human and AI paddles.
pub struct Game {
    world: World,
    time: Time,
    arena: Arena,
    config: Config,
    score: Score,
    serve: Serve,
    events: Events,
    queue: InputQueue,
    sources: [ControlSource; 2],
}

impl Game {
    pub fn new(left: ControlSource, right: ControlSource) -> Self {
        let mut world = World::new();
        let arena = Arena::new();
        let config = Config::new();
        let serve = Serve::new();

        create_paddle(&mut world, 0, arena.paddle_spawn_y(), left);
        create_paddle(&mut world, 1, arena.paddle_spawn_y(), right);
        create_ball(&mut world, arena.ball_spawn(), serve.velocity(&config));

        Self {
            world,
            time: Time::new(0.0, 0.0),
            arena,
            config,
            score: Score::new(),
            serve,
            events: Events::new(),
            queue: InputQueue::new(),
            sources: [left, right],
        }
    }

    pub fn is_human(&self, player_id: u8) -> bool {
        self.sources[player_id as usize] == ControlSource::Human
    }

    /// Queue a direction for a paddle; drained by the next step
    pub fn queue_direction(&mut self, player_id: u8, dir: i8) {
        self.queue.push_input(player_id, dir);
    }

    /// Advance the simulation by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        self.time.dt = dt;
        pong_core::step(
            &mut self.world,
            &mut self.time,
            &self.arena,
            &self.config,
            &mut self.score,
            &mut self.serve,
            &mut self.events,
            &mut self.queue,
        );
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Events from the most recent step
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn paddle_y(&self, player_id: u8) -> f32 {
        let mut query = self.world.query::<&Paddle>();
        query
            .iter()
            .find(|(_e, p)| p.player_id == player_id)
            .map(|(_e, p)| p.y)
            .unwrap_or_else(|| self.arena.paddle_spawn_y())
    }

    pub fn ball_pos(&self) -> Vec2 {
        let mut query = self.world.query::<&Ball>();
        query
            .iter()
            .next()
            .map(|(_e, b)| b.pos)
            .unwrap_or_else(|| self.arena.ball_spawn())
    }
}
