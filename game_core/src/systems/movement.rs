use crate::{Ball, Config, Paddle, PaddleIntent};
use hecs::World;

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, dt: f32, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        let delta = intent.dir as f32 * paddle.speed * dt;
        paddle.move_by(delta, config.field_height);
    }
}

/// Move visible balls based on velocity
pub fn move_balls(world: &mut World, dt: f32) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.visible {
            ball.advance(dt);
        }
    }
}
