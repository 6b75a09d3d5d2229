use crate::{ControlSource, InputQueue, Paddle, PaddleIntent};
use hecs::World;

/// Apply queued directions to the intents of human-controlled paddles
pub fn ingest_inputs(world: &mut World, queue: &mut InputQueue) {
    for &(player_id, dir) in &queue.inputs {
        for (_entity, (paddle, intent, source)) in
            world.query_mut::<(&Paddle, &mut PaddleIntent, &ControlSource)>()
        {
            if *source == ControlSource::Human && paddle.player_id == player_id {
                intent.dir = dir.clamp(-1, 1);
            }
        }
    }

    // Clear processed inputs
    queue.inputs.clear();
}
