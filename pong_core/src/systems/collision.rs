use crate::{Arena, Ball, Config, Events, Paddle};
use hecs::World;

/// Check ball collisions with walls and paddles.
///
/// Bounces invert the velocity component and amplify it by the bounce
/// multiplier, then nudge the ball a fixed offset out of the surface. The
/// nudge does not scale with frame time, so de-penetration can land short at
/// very high ball speeds.
pub fn check_collisions(world: &mut World, arena: &Arena, config: &Config, events: &mut Events) {
    let paddles: Vec<(u8, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.player_id, p.y))
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Top and bottom walls
        if ball.pos.y > arena.height {
            ball.vel.y *= -config.bounce_multiplier;
            ball.pos.y -= config.bounce_nudge;
            events.ball_hit_wall = true;
        } else if ball.pos.y < 0.0 {
            ball.vel.y *= -config.bounce_multiplier;
            ball.pos.y += config.bounce_nudge;
            events.ball_hit_wall = true;
        }

        // Paddles: the ball bounces when it enters a paddle's collision band
        // and its y falls within the paddle's vertical extent
        let half_height = config.paddle_height / 2.0;
        for &(player_id, paddle_y) in &paddles {
            let in_band = if player_id == 0 {
                ball.pos.x < config.paddle_width + config.paddle_offset_wall
            } else {
                ball.pos.x > arena.width - config.paddle_width - config.paddle_offset_wall
            };

            if in_band
                && ball.pos.y > paddle_y - half_height
                && ball.pos.y < paddle_y + half_height
            {
                ball.vel.x *= -config.bounce_multiplier;
                ball.pos.x += if player_id == 0 {
                    config.bounce_nudge
                } else {
                    -config.bounce_nudge
                };
                events.ball_hit_paddle = true;
                break;
            }
        }
    }
}
