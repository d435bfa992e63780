use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::components::Side;
use crate::screen::Screen;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total simulated time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }

    /// Elapsed time usable by the simulation: never negative, never NaN, never above `max_dt`
    pub fn sanitized_dt(&self, max_dt: f32) -> f32 {
        if self.dt.is_finite() && self.dt > 0.0 {
            self.dt.min(max_dt)
        } else {
            0.0
        }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 1.0 / 60.0,
            now: 0.0,
        }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,  // Left player score
    pub right: u32, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Highest of the two scores
    pub fn leader(&self) -> u32 {
        self.left.max(self.right)
    }

    pub fn has_winner(&self, win_score: u32) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Match lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    Playing,
    /// Frozen until the players confirm a restart
    Won { winner: Side },
}

/// Source of the random deflection steps
pub trait RandomSource {
    /// One of -1, 0 or 1
    fn deflection_step(&mut self) -> i8;
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for GameRng {
    fn deflection_step(&mut self) -> i8 {
        self.0.gen_range(-1..=1)
    }
}

/// Replays a fixed sequence of deflection steps, wrapping around at the end
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    steps: Vec<i8>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(steps: Vec<i8>) -> Self {
        Self { steps, cursor: 0 }
    }
}

impl RandomSource for ScriptedSource {
    fn deflection_step(&mut self) -> i8 {
        if self.steps.is_empty() {
            return 0;
        }
        let step = self.steps[self.cursor % self.steps.len()].clamp(-1, 1);
        self.cursor += 1;
        step
    }
}

/// Something the presentation layer may want to react to (sounds, effects)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    PaddleHit { side: Side },
    WallBounce,
    /// `side` is the player who gained the point
    Scored { side: Side },
    BallRespawned,
    SecondBallReleased,
    MatchWon { winner: Side },
    MatchRestarted,
    ScreenChanged { from: Screen, to: Screen },
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub list: Vec<MatchEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    pub fn push(&mut self, event: MatchEvent) {
        self.list.push(event);
    }

    pub fn iter(&self) -> impl Iterator<Item = &MatchEvent> {
        self.list.iter()
    }

    pub fn contains(&self, event: &MatchEvent) -> bool {
        self.list.contains(event)
    }

    pub fn count(&self, event: &MatchEvent) -> usize {
        self.list.iter().filter(|e| *e == event).count()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

/// Held keys for one paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleControl {
    pub up: bool,
    pub down: bool,
}

impl PaddleControl {
    pub fn up() -> Self {
        Self {
            up: true,
            down: false,
        }
    }

    pub fn down() -> Self {
        Self {
            up: false,
            down: true,
        }
    }

    /// -1 = up, 0 = stop, 1 = down; both keys cancel out
    pub fn direction(&self) -> i8 {
        match (self.up, self.down) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        }
    }
}

/// Input for one frame, already read from the devices by the caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub left: PaddleControl,
    pub right: PaddleControl,
    /// Confirm key pressed this frame (edge, not level)
    pub confirm: bool,
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn confirm() -> Self {
        Self {
            confirm: true,
            ..Self::default()
        }
    }

    pub fn control(&self, side: Side) -> PaddleControl {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}
