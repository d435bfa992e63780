use crate::{Ball, Config, Events, MatchEvent, Score, SecondBall, Side};
use hecs::World;

/// Score every visible ball that left the field and serve it again from the center
pub fn check_scoring(world: &mut World, config: &Config, score: &mut Score, events: &mut Events) {
    let center = config.center();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if !ball.visible {
            continue;
        }

        // The side whose edge the ball crossed concedes
        let conceded = if ball.pos.x < 0.0 {
            Side::Left
        } else if ball.pos.x > config.field_width {
            Side::Right
        } else {
            continue;
        };
        let scorer = conceded.opponent();

        score.increment(scorer);
        log::info!(
            "{:?} scores ({} to {})",
            scorer,
            score.get(scorer),
            score.get(conceded)
        );
        events.push(MatchEvent::Scored { side: scorer });

        ball.reset_to_center(center, config.ball_speed_initial);
        events.push(MatchEvent::BallRespawned);
    }
}

/// Count frames once a score reaches the second-ball threshold and release the ball on time
pub fn tick_second_ball(
    world: &mut World,
    config: &Config,
    score: &Score,
    timer: &mut u32,
    events: &mut Events,
) {
    let Some(threshold) = config.second_ball_score else {
        return;
    };
    if score.leader() < threshold {
        return;
    }

    // A zero delay releases on the first frame the threshold is met
    if *timer < config.second_ball_delay_frames {
        *timer += 1;
    }
    if *timer < config.second_ball_delay_frames {
        return;
    }

    for (_entity, (ball, _second)) in world.query_mut::<(&mut Ball, &SecondBall)>() {
        if !ball.visible {
            ball.visible = true;
            log::info!("Second ball released after {} frames", *timer);
            events.push(MatchEvent::SecondBallReleased);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    fn setup_world() -> (World, Config, Score, Events) {
        (World::new(), Config::new(), Score::new(), Events::new())
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut world, config, mut score, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(-0.1, 300.0), &config);

        check_scoring(&mut world, &config, &mut score, &mut events);

        assert_eq!(score.right, 1, "Right player should score");
        assert_eq!(score.left, 0, "Left player should not score");
        assert!(events.contains(&MatchEvent::Scored { side: Side::Right }));
        assert!(events.contains(&MatchEvent::BallRespawned));
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let (mut world, config, mut score, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(config.field_width + 0.1, 300.0), &config);

        check_scoring(&mut world, &config, &mut score, &mut events);

        assert_eq!(score.left, 1, "Left player should score");
        assert_eq!(score.right, 0, "Right player should not score");
        assert!(events.contains(&MatchEvent::Scored { side: Side::Left }));
    }

    #[test]
    fn test_ball_resets_after_scoring() {
        let config = Config {
            field_height: 800.0,
            ..Config::new()
        };
        let mut world = World::new();
        let mut score = Score::new();
        let mut events = Events::new();
        let entity = create_ball(&mut world, Vec2::new(1000.5, 640.0), &config);
        world.get::<&mut Ball>(entity).unwrap().vel = Vec2::new(484.0, -200.0);

        check_scoring(&mut world, &config, &mut score, &mut events);

        let ball = *world.get::<&Ball>(entity).unwrap();
        assert_eq!(score.left, 1);
        assert_eq!(ball.pos, Vec2::new(500.0, 400.0), "Ball should reset to center");
        assert_eq!(ball.vel, Vec2::new(400.0, 400.0), "Ball should relaunch diagonally");
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, mut score, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(0.0, 300.0), &config);
        create_ball(&mut world, Vec2::new(config.field_width, 300.0), &config);

        check_scoring(&mut world, &config, &mut score, &mut events);

        assert_eq!(score, Score::new(), "Edges themselves are still in play");
        assert!(events.is_empty(), "No scoring events");
    }

    #[test]
    fn test_hidden_ball_cannot_score() {
        let (mut world, config, mut score, mut events) = setup_world();
        let parked = Ball::new(Vec2::new(-50.0, 300.0), Vec2::ZERO, 10.0).hidden();
        world.spawn((parked, SecondBall));

        check_scoring(&mut world, &config, &mut score, &mut events);

        assert_eq!(score, Score::new());
    }

    #[test]
    fn test_two_balls_scoring_in_same_frame_count_once_each() {
        let (mut world, config, mut score, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(-5.0, 300.0), &config);
        let second = Ball::new(Vec2::new(1005.0, 100.0), Vec2::new(400.0, 0.0), 10.0);
        world.spawn((second, SecondBall));

        check_scoring(&mut world, &config, &mut score, &mut events);

        assert_eq!(score.left, 1);
        assert_eq!(score.right, 1);
        assert_eq!(events.count(&MatchEvent::BallRespawned), 2);

        // Both are back in the middle, so a second pass adds nothing
        check_scoring(&mut world, &config, &mut score, &mut events);
        assert_eq!(score, Score { left: 1, right: 1 });
    }

    #[test]
    fn test_second_ball_waits_for_threshold() {
        let (mut world, config, _score, mut events) = setup_world();
        let parked = Ball::new(config.center(), Vec2::new(400.0, 400.0), 10.0).hidden();
        let entity = world.spawn((parked, SecondBall));
        let score = Score { left: 2, right: 2 };
        let mut timer = 0;

        for _ in 0..200 {
            tick_second_ball(&mut world, &config, &score, &mut timer, &mut events);
        }

        assert_eq!(timer, 0, "Timer should not run below the threshold");
        assert!(!world.get::<&Ball>(entity).unwrap().visible);
    }

    #[test]
    fn test_second_ball_released_at_exactly_delay() {
        let (mut world, config, _score, mut events) = setup_world();
        let parked = Ball::new(config.center(), Vec2::new(400.0, 400.0), 10.0).hidden();
        let entity = world.spawn((parked, SecondBall));
        let score = Score { left: 0, right: 3 };
        let mut timer = 0;

        for frame in 1..60 {
            tick_second_ball(&mut world, &config, &score, &mut timer, &mut events);
            assert_eq!(timer, frame);
            assert!(
                !world.get::<&Ball>(entity).unwrap().visible,
                "Released too early at frame {frame}"
            );
        }

        tick_second_ball(&mut world, &config, &score, &mut timer, &mut events);
        assert_eq!(timer, 60);
        assert!(world.get::<&Ball>(entity).unwrap().visible);
        assert_eq!(events.count(&MatchEvent::SecondBallReleased), 1);

        // Timer stops counting and the release is not repeated
        for _ in 0..10 {
            tick_second_ball(&mut world, &config, &score, &mut timer, &mut events);
        }
        assert_eq!(timer, 60);
        assert_eq!(events.count(&MatchEvent::SecondBallReleased), 1);
    }

    #[test]
    fn test_zero_delay_releases_on_first_threshold_frame() {
        let (mut world, _config, _score, mut events) = setup_world();
        let config = Config {
            second_ball_delay_frames: 0,
            ..Config::new()
        };
        let parked = Ball::new(config.center(), Vec2::new(400.0, 400.0), 10.0).hidden();
        let entity = world.spawn((parked, SecondBall));
        let mut timer = 0;

        let below = Score { left: 2, right: 0 };
        tick_second_ball(&mut world, &config, &below, &mut timer, &mut events);
        assert!(!world.get::<&Ball>(entity).unwrap().visible);

        let reached = Score { left: 3, right: 0 };
        tick_second_ball(&mut world, &config, &reached, &mut timer, &mut events);
        assert!(world.get::<&Ball>(entity).unwrap().visible);
        assert_eq!(timer, 0);
        assert_eq!(events.count(&MatchEvent::SecondBallReleased), 1);
    }

    #[test]
    fn test_single_ball_config_never_counts() {
        let (mut world, _config, _score, mut events) = setup_world();
        let config = Config::classic();
        let score = Score { left: 4, right: 4 };
        let mut timer = 0;

        tick_second_ball(&mut world, &config, &score, &mut timer, &mut events);

        assert_eq!(timer, 0);
    }
}
