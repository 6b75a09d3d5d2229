use crate::{Ball, ControlSource, Paddle, PaddleIntent};
use hecs::World;

/// Steer AI paddles toward the ball's current y position.
/// No smoothing, no prediction, no dead zone: the paddle overshoots and
/// corrects on the next step.
pub fn drive_ai(world: &mut World) {
    let ball_y = {
        let mut ball_query = world.query::<&Ball>();
        ball_query.iter().next().map(|(_e, ball)| ball.pos.y)
    };

    let Some(ball_y) = ball_y else {
        return; // No ball in world
    };

    for (_entity, (paddle, intent, source)) in
        world.query_mut::<(&Paddle, &mut PaddleIntent, &ControlSource)>()
    {
        if *source != ControlSource::RuleBasedAi {
            continue;
        }
        intent.dir = if ball_y < paddle.y {
            -1
        } else if ball_y > paddle.y {
            1
        } else {
            0
        };
    }
}
