use crate::{Arena, Ball, Config, Events, Paddle, Score, Serve};
use hecs::World;

/// Check if the ball left the arena and award the point.
/// A ball out on the left scores for the right player and vice versa;
/// either way the round resets.
pub fn check_scoring(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    score: &mut Score,
    serve: &mut Serve,
    events: &mut Events,
) {
    let ball_x = {
        let mut ball_query = world.query::<&Ball>();
        ball_query.iter().next().map(|(_e, ball)| ball.pos.x)
    };

    let Some(ball_x) = ball_x else {
        return; // No ball in world
    };

    if ball_x < 0.0 {
        score.increment_right();
        events.right_scored = true;
        reset_round(world, arena, config, serve);
    } else if ball_x > arena.width {
        score.increment_left();
        events.left_scored = true;
        reset_round(world, arena, config, serve);
    }
}

/// Re-center both paddles and the ball, flip the serve direction, and
/// reinitialize the ball velocity for the new serve
pub fn reset_round(world: &mut World, arena: &Arena, config: &Config, serve: &mut Serve) {
    serve.toggle();

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.y = arena.paddle_spawn_y();
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos = arena.ball_spawn();
        ball.vel = serve.velocity(config);
    }
}
