use crate::{
    Ball, Config, Events, MatchEvent, MatchPhase, MatchState, Paddle, PaddleIntent, SecondBall,
};

/// Freeze the match once a player reaches the win score
pub fn check_win(state: &mut MatchState, config: &Config, events: &mut Events) {
    if state.is_won() {
        return;
    }
    let Some(winner) = state.score.has_winner(config.win_score) else {
        return;
    };

    state.phase = MatchPhase::Won { winner };
    for (_entity, ball) in state.world.query_mut::<&mut Ball>() {
        ball.visible = false;
    }

    log::info!(
        "{:?} wins {} - {}",
        winner,
        state.score.left,
        state.score.right
    );
    events.push(MatchEvent::MatchWon { winner });
}

/// Put every score, paddle and ball back to how a fresh match starts
pub fn restart_match(state: &mut MatchState, config: &Config, events: &mut Events) {
    let center = config.center();

    for (_entity, (paddle, intent)) in state.world.query_mut::<(&mut Paddle, &mut PaddleIntent)>()
    {
        paddle.pos = config.paddle_spawn(paddle.side);
        *intent = PaddleIntent::new();
    }

    for (_entity, (ball, second)) in state
        .world
        .query_mut::<(&mut Ball, Option<&SecondBall>)>()
    {
        ball.reset_to_center(center, config.ball_speed_initial);
        ball.visible = second.is_none();
    }

    state.score.reset();
    state.second_ball_timer = 0;
    state.phase = MatchPhase::Playing;

    log::info!("Match restarted");
    events.push(MatchEvent::MatchRestarted);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Score, Side};
    use glam::Vec2;

    #[test]
    fn test_no_win_below_threshold() {
        let config = Config::new();
        let mut state = MatchState::new(&config);
        let mut events = Events::new();
        state.score = Score { left: 9, right: 9 };

        check_win(&mut state, &config, &mut events);

        assert_eq!(state.phase, MatchPhase::Playing);
        assert!(events.is_empty());
    }

    #[test]
    fn test_win_hides_balls() {
        let config = Config::new();
        let mut state = MatchState::new(&config);
        let mut events = Events::new();
        state.score = Score { left: 10, right: 4 };

        check_win(&mut state, &config, &mut events);

        assert_eq!(
            state.phase,
            MatchPhase::Won {
                winner: Side::Left
            }
        );
        assert!(state.balls().iter().all(|(ball, _)| !ball.visible));
        assert!(events.contains(&MatchEvent::MatchWon {
            winner: Side::Left
        }));

        // Already won: nothing new is reported
        events.clear();
        check_win(&mut state, &config, &mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn test_simultaneous_win_goes_to_left() {
        let config = Config::new();
        let mut state = MatchState::new(&config);
        let mut events = Events::new();
        state.score = Score { left: 10, right: 10 };

        check_win(&mut state, &config, &mut events);

        assert_eq!(state.winner(), Some(Side::Left));
    }

    #[test]
    fn test_restart_restores_fresh_match() {
        let config = Config::new();
        let mut state = MatchState::new(&config);
        let mut events = Events::new();

        state.score = Score { left: 3, right: 10 };
        state.second_ball_timer = 60;
        state.phase = MatchPhase::Won {
            winner: Side::Right,
        };
        for (_e, paddle) in state.world.query_mut::<&mut Paddle>() {
            paddle.pos.y = 90.0;
        }
        for (_e, ball) in state.world.query_mut::<&mut Ball>() {
            ball.pos = Vec2::new(123.0, 45.0);
            ball.vel = Vec2::new(-900.0, 12.0);
            ball.visible = false;
        }

        restart_match(&mut state, &config, &mut events);

        assert_eq!(state.score, Score::new());
        assert_eq!(state.second_ball_timer, 0);
        assert_eq!(state.phase, MatchPhase::Playing);
        assert_eq!(state.paddle(Side::Left).unwrap().pos, Vec2::new(25.0, 300.0));
        assert_eq!(state.paddle(Side::Right).unwrap().pos, Vec2::new(975.0, 300.0));

        let primary = state.primary_ball().unwrap();
        assert_eq!(primary.pos, Vec2::new(500.0, 300.0));
        assert_eq!(primary.vel, Vec2::new(400.0, 400.0));
        assert!(primary.visible);
        assert!(!state.second_ball().unwrap().visible);
        assert!(events.contains(&MatchEvent::MatchRestarted));
    }
}
