use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{MatchPhase, MatchState, Score, Screen, Side};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleView {
    pub side: Side,
    pub pos: Vec2,
    pub size: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallView {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub visible: bool,
    /// The ball that joins mid-match (drawn in its own colour)
    pub second: bool,
}

/// Read-only copy of what a frame should draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub frame: u64,
    pub screen: Screen,
    pub phase: MatchPhase,
    pub score: Score,
    /// Left paddle first
    pub paddles: Vec<PaddleView>,
    /// Primary ball first
    pub balls: Vec<BallView>,
}

impl Snapshot {
    pub fn capture(screen: Screen, state: &MatchState) -> Self {
        let paddles = [Side::Left, Side::Right]
            .into_iter()
            .filter_map(|side| state.paddle(side))
            .map(|paddle| PaddleView {
                side: paddle.side,
                pos: paddle.pos,
                size: paddle.size,
            })
            .collect();

        let balls = state
            .balls()
            .into_iter()
            .map(|(ball, second)| BallView {
                pos: ball.pos,
                vel: ball.vel,
                radius: ball.radius,
                visible: ball.visible,
                second,
            })
            .collect();

        Self {
            frame: state.frame,
            screen,
            phase: state.phase,
            score: state.score,
            paddles,
            balls,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            MatchPhase::Won { winner } => Some(winner),
            MatchPhase::Playing => None,
        }
    }
}
