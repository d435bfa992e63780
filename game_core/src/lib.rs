pub mod components;
pub mod config;
pub mod geometry;
pub mod match_state;
pub mod params;
pub mod resources;
pub mod screen;
pub mod session;
pub mod snapshot;
pub mod systems;

pub use components::*;
pub use config::*;
pub use geometry::*;
pub use match_state::*;
pub use params::*;
pub use resources::*;
pub use screen::*;
pub use session::*;
pub use snapshot::*;

use hecs::World;
use systems::*;

/// Advance a match by one frame.
///
/// Events are appended to `events`; the caller decides when to clear them.
pub fn step(
    state: &mut MatchState,
    input: &FrameInput,
    time: &mut Time,
    config: &Config,
    events: &mut Events,
    rng: &mut dyn RandomSource,
) {
    let dt = time.sanitized_dt(config.max_frame_time);
    if !(time.dt.is_finite() && time.dt >= 0.0) {
        log::warn!("Ignoring malformed frame time {}", time.dt);
    }

    time.now += dt;
    state.frame += 1;

    // A won match is frozen until the players ask for another one
    if state.is_won() {
        if input.confirm {
            restart_match(state, config, events);
        }
        return;
    }

    // 1. Ingest inputs (apply to paddle intents)
    ingest_inputs(&mut state.world, input);

    // 2. Move paddles based on intents
    move_paddles(&mut state.world, dt, config);

    // 3. Move balls
    move_balls(&mut state.world, dt);

    // 4. Check collisions (ball vs walls, paddles)
    check_collisions(&mut state.world, config, events, rng);

    // 5. Check scoring (ball exited arena)
    check_scoring(&mut state.world, config, &mut state.score, events);

    // 6. Stagger in the second ball
    tick_second_ball(
        &mut state.world,
        config,
        &state.score,
        &mut state.second_ball_timer,
        events,
    );

    // 7. End the match on the win score
    check_win(state, config, events);
}

/// Helper to create a paddle entity at its spawn point
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    let paddle = Paddle::new(
        side,
        config.paddle_spawn(side),
        config.paddle_size(),
        config.paddle_speed,
    );
    world.spawn((paddle, PaddleIntent::new()))
}

/// Helper to create a ball entity with the launch velocity
pub fn create_ball(world: &mut World, pos: glam::Vec2, config: &Config) -> hecs::Entity {
    let vel = glam::Vec2::splat(config.ball_speed_initial);
    world.spawn((Ball::new(pos, vel, config.ball_radius),))
}
