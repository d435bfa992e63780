use crate::{Ball, Config, DeflectionPolicy, Events, MatchEvent, Paddle, RandomSource, Side};
use hecs::World;

/// Bounce `ball` off `paddle` if they overlap and the ball is heading towards it.
///
/// Returns true when the ball was sent back. Only the ball is mutated.
pub fn resolve_paddle_hit(
    ball: &mut Ball,
    paddle: &Paddle,
    config: &Config,
    rng: &mut dyn RandomSource,
) -> bool {
    if !paddle.bounding_rect().intersects_circle(ball.pos, ball.radius) {
        return false;
    }

    // A ball already moving away must not be turned around again
    let approaching = match paddle.side {
        Side::Left => ball.vel.x < 0.0,
        Side::Right => ball.vel.x > 0.0,
    };
    if !approaching {
        return false;
    }

    ball.vel.x = -ball.vel.x;

    if config
        .speed_cap
        .allows(ball.vel, config.ball_velocity_cap)
    {
        ball.vel.x *= config.ball_speed_up;
    }

    let speed_x = ball.vel.x.abs();
    ball.vel.y = match config.deflection {
        DeflectionPolicy::ImpactOffset => {
            let half_height = paddle.half_height();
            if half_height > 0.0 {
                speed_x * (ball.pos.y - paddle.pos.y) / half_height
            } else {
                0.0
            }
        }
        DeflectionPolicy::Random => speed_x * rng.deflection_step() as f32,
    };

    true
}

/// Check ball collisions with walls and paddles
pub fn check_collisions(
    world: &mut World,
    config: &Config,
    events: &mut Events,
    rng: &mut dyn RandomSource,
) {
    // Collect paddle data without holding borrows
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if !ball.visible {
            continue;
        }

        if ball.reflect_vertical(config.field_height) {
            events.push(MatchEvent::WallBounce);
        }

        for paddle in &paddles {
            if resolve_paddle_hit(ball, paddle, config, rng) {
                log::debug!(
                    "{:?} paddle returned ball, velocity now ({:.1}, {:.1})",
                    paddle.side,
                    ball.vel.x,
                    ball.vel.y
                );
                events.push(MatchEvent::PaddleHit { side: paddle.side });
            }
        }
    }
}
