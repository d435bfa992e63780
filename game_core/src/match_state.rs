use hecs::World;

use crate::components::*;
use crate::config::Config;
use crate::resources::{MatchPhase, Score};
use crate::{create_ball, create_paddle};

/// Everything that belongs to one match. Owned by the caller and passed to [`crate::step`].
pub struct MatchState {
    pub world: World,
    pub score: Score,
    pub phase: MatchPhase,
    /// Frames since a score reached the second-ball threshold
    pub second_ball_timer: u32,
    /// Frames stepped since the match was created
    pub frame: u64,
}

impl MatchState {
    /// Lay out the paddles and balls described by `config`
    pub fn new(config: &Config) -> Self {
        let mut world = World::new();

        for side in [Side::Left, Side::Right] {
            create_paddle(&mut world, side, config);
        }

        let center = config.center();
        create_ball(&mut world, center, config);
        if config.second_ball_score.is_some() {
            let vel = glam::Vec2::splat(config.ball_speed_initial);
            let ball = Ball::new(center, vel, config.ball_radius).hidden();
            world.spawn((ball, SecondBall));
        }

        Self {
            world,
            score: Score::new(),
            phase: MatchPhase::Playing,
            second_ball_timer: 0,
            frame: 0,
        }
    }

    pub fn is_won(&self) -> bool {
        matches!(self.phase, MatchPhase::Won { .. })
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            MatchPhase::Won { winner } => Some(winner),
            MatchPhase::Playing => None,
        }
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .map(|(_e, paddle)| *paddle)
            .find(|paddle| paddle.side == side)
    }

    /// All balls, primary first
    pub fn balls(&self) -> Vec<(Ball, bool)> {
        let mut balls: Vec<(Ball, bool)> = self
            .world
            .query::<(&Ball, Option<&SecondBall>)>()
            .iter()
            .map(|(_e, (ball, second))| (*ball, second.is_some()))
            .collect();
        balls.sort_by_key(|(_ball, second)| *second);
        balls
    }

    pub fn primary_ball(&self) -> Option<Ball> {
        self.balls()
            .into_iter()
            .find(|(_ball, second)| !second)
            .map(|(ball, _)| ball)
    }

    pub fn second_ball(&self) -> Option<Ball> {
        self.balls()
            .into_iter()
            .find(|(_ball, second)| *second)
            .map(|(ball, _)| ball)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_new_match_layout() {
        let config = Config::new();
        let state = MatchState::new(&config);

        let left = state.paddle(Side::Left).expect("left paddle");
        let right = state.paddle(Side::Right).expect("right paddle");
        assert_eq!(left.pos, Vec2::new(25.0, 300.0));
        assert_eq!(right.pos, Vec2::new(975.0, 300.0));
        assert_eq!(left.size, Vec2::new(15.0, 150.0));

        let primary = state.primary_ball().expect("primary ball");
        assert_eq!(primary.pos, Vec2::new(500.0, 300.0));
        assert_eq!(primary.vel, Vec2::new(400.0, 400.0));
        assert!(primary.visible);

        let second = state.second_ball().expect("second ball");
        assert!(!second.visible, "Second ball should start parked");
        assert_eq!(second.pos, primary.pos);
        assert_eq!(second.vel, primary.vel, "Second ball launches like the first");

        assert_eq!(state.score, Score::new());
        assert_eq!(state.phase, MatchPhase::Playing);
        assert_eq!(state.second_ball_timer, 0);
    }

    #[test]
    fn test_single_ball_match_has_no_second_ball() {
        let state = MatchState::new(&Config::classic());
        assert_eq!(state.balls().len(), 1);
        assert!(state.second_ball().is_none());
    }

    #[test]
    fn test_balls_lists_primary_first() {
        let state = MatchState::new(&Config::new());
        let balls = state.balls();
        assert_eq!(balls.len(), 2);
        assert!(!balls[0].1);
        assert!(balls[1].1);
    }
}
