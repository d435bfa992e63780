use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::Side;
use crate::params::Params;

/// How a paddle hit aims the ball vertically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeflectionPolicy {
    /// Vertical speed follows where the ball struck the paddle (-1 top, 1 bottom)
    #[default]
    ImpactOffset,
    /// Vertical speed is |vx| times a random step in {-1, 0, 1}
    Random,
}

/// Which velocity components must be under the cap for a paddle hit to speed the ball up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedCapRule {
    /// Speed up if either |vx| or |vy| is under the cap (almost always true)
    #[default]
    Either,
    /// Speed up only while both |vx| and |vy| are under the cap
    Both,
}

impl SpeedCapRule {
    pub fn allows(&self, vel: Vec2, cap: f32) -> bool {
        let x_ok = vel.x.abs() <= cap;
        let y_ok = vel.y.abs() <= cap;
        match self {
            SpeedCapRule::Either => x_ok || y_ok,
            SpeedCapRule::Both => x_ok && y_ok,
        }
    }
}

/// Game configuration, fixed for the lifetime of a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_inset: f32,
    pub ball_radius: f32,
    pub ball_speed_initial: f32,
    pub ball_velocity_cap: f32,
    pub ball_speed_up: f32,
    pub win_score: u32,
    /// Score at which the second ball is queued; `None` plays with one ball
    pub second_ball_score: Option<u32>,
    pub second_ball_delay_frames: u32,
    pub title_frames: u32,
    pub max_frame_time: f32,
    pub deflection: DeflectionPolicy,
    pub speed_cap: SpeedCapRule,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_inset: Params::PADDLE_INSET,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_velocity_cap: Params::BALL_VELOCITY_CAP,
            ball_speed_up: Params::BALL_SPEED_UP,
            win_score: Params::WIN_SCORE,
            second_ball_score: Some(Params::SECOND_BALL_SCORE),
            second_ball_delay_frames: Params::SECOND_BALL_DELAY_FRAMES,
            title_frames: Params::TITLE_FRAMES,
            max_frame_time: Params::MAX_FRAME_TIME,
            deflection: DeflectionPolicy::ImpactOffset,
            speed_cap: SpeedCapRule::Either,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// First to 10, second ball joins once someone reaches 3
    pub fn pongdemonium() -> Self {
        Self::default()
    }

    /// Single ball, first to 5
    pub fn classic() -> Self {
        Self {
            win_score: 5,
            second_ball_score: None,
            ..Self::default()
        }
    }

    /// Short match with random deflection, second ball at 2
    pub fn arcade() -> Self {
        Self {
            win_score: 3,
            second_ball_score: Some(2),
            deflection: DeflectionPolicy::Random,
            ..Self::default()
        }
    }

    /// Look up a preset by name
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "pongdemonium" => Some(Self::pongdemonium()),
            "classic" => Some(Self::classic()),
            "arcade" => Some(Self::arcade()),
            _ => None,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }

    /// Get X position for paddle based on side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_inset,
            Side::Right => self.field_width - self.paddle_inset,
        }
    }

    pub fn paddle_spawn(&self, side: Side) -> Vec2 {
        Vec2::new(self.paddle_x(side), self.field_height / 2.0)
    }

    pub fn paddle_size(&self) -> Vec2 {
        Vec2::new(self.paddle_width, self.paddle_height)
    }

    /// Check the configuration before a match is built from it
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_speed_initial", self.ball_speed_initial),
            ("ball_velocity_cap", self.ball_velocity_cap),
            ("ball_speed_up", self.ball_speed_up),
            ("max_frame_time", self.max_frame_time),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        if self.paddle_height > self.field_height {
            return Err(ConfigError::PaddleTooTall {
                paddle_height: self.paddle_height,
                field_height: self.field_height,
            });
        }
        if self.ball_radius * 2.0 > self.field_height {
            return Err(ConfigError::BallTooLarge {
                radius: self.ball_radius,
                field_height: self.field_height,
            });
        }
        if !(self.paddle_inset > 0.0 && self.paddle_inset < self.field_width / 2.0) {
            return Err(ConfigError::PaddleOutsideField {
                inset: self.paddle_inset,
                field_width: self.field_width,
            });
        }
        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }
        if let Some(second) = self.second_ball_score {
            if second >= self.win_score {
                return Err(ConfigError::SecondBallAfterWin {
                    second_ball_score: second,
                    win_score: self.win_score,
                });
            }
        }
        Ok(())
    }
}

/// Rejected configuration values
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NotPositive { name: &'static str, value: f32 },
    PaddleTooTall { paddle_height: f32, field_height: f32 },
    BallTooLarge { radius: f32, field_height: f32 },
    PaddleOutsideField { inset: f32, field_width: f32 },
    ZeroWinScore,
    SecondBallAfterWin { second_ball_score: u32, win_score: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotPositive { name, value } => {
                write!(f, "{name} must be a positive number, got {value}")
            }
            ConfigError::PaddleTooTall {
                paddle_height,
                field_height,
            } => write!(
                f,
                "paddle height {paddle_height} does not fit a field {field_height} high"
            ),
            ConfigError::BallTooLarge {
                radius,
                field_height,
            } => write!(
                f,
                "ball radius {radius} does not fit a field {field_height} high"
            ),
            ConfigError::PaddleOutsideField { inset, field_width } => write!(
                f,
                "paddle inset {inset} must be inside half of the field width {field_width}"
            ),
            ConfigError::ZeroWinScore => write!(f, "win score must be at least 1"),
            ConfigError::SecondBallAfterWin {
                second_ball_score,
                win_score,
            } => write!(
                f,
                "second ball score {second_ball_score} must be below the win score {win_score}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
