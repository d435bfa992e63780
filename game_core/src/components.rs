use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::geometry::Aabb;

/// Which end of the playfield a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,  // center of the rectangle
    pub size: Vec2, // width, height
    pub speed: f32, // pixels per second
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            side,
            pos,
            size,
            speed,
        }
    }

    pub fn half_height(&self) -> f32 {
        self.size.y / 2.0
    }

    /// Move vertically by `dy` and keep the paddle inside the field
    pub fn move_by(&mut self, dy: f32, field_height: f32) {
        if dy.is_finite() {
            self.pos.y += dy;
        }
        let half_height = self.half_height();
        self.pos.y = self.pos.y.clamp(half_height, field_height - half_height);
    }

    pub fn bounding_rect(&self) -> Aabb {
        Aabb::from_center_size(self.pos, self.size)
    }
}

/// Ball component - a pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Invisible balls are parked: they do not move, collide or score
    pub visible: bool,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            visible: true,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Move by velocity over `dt` seconds; bad timing input moves nothing
    pub fn advance(&mut self, dt: f32) {
        if dt.is_finite() && dt > 0.0 {
            self.pos += self.vel * dt;
        }
    }

    /// Bounce off the top or bottom edge. Returns true if it bounced.
    pub fn reflect_vertical(&mut self, field_height: f32) -> bool {
        if self.pos.y > field_height - self.radius {
            self.pos.y = field_height - self.radius;
            self.vel.y = -self.vel.y;
            true
        } else if self.pos.y < self.radius {
            self.pos.y = self.radius;
            self.vel.y = -self.vel.y;
            true
        } else {
            false
        }
    }

    /// Put the ball back in the middle with the fixed diagonal launch
    pub fn reset_to_center(&mut self, center: Vec2, speed: f32) {
        self.pos = center;
        self.vel = Vec2::new(speed, speed);
    }
}

/// Marks the ball that joins mid-match
#[derive(Debug, Clone, Copy, Default)]
pub struct SecondBall;

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}
