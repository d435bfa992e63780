use hecs::World;

use crate::components::*;
use crate::resources::FrameInput;

/// Turn this frame's held keys into paddle intents
pub fn ingest_inputs(world: &mut World, input: &FrameInput) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        intent.dir = input.control(paddle.side).direction();
    }
}
