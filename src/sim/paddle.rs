//! Player paddles
//!
//! A paddle is a vertical rectangle pinned to one side of the field. Input
//! sets its commanded velocity; `update` integrates and clamps.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which end of the field a paddle (or player) defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Held direction for a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Up,
    #[default]
    Stop,
    Down,
}

impl Direction {
    /// Screen-space sign (y grows downward)
    pub fn sign(self) -> f32 {
        match self {
            Direction::Up => -1.0,
            Direction::Stop => 0.0,
            Direction::Down => 1.0,
        }
    }
}

/// A player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Top-left corner; `x` never changes after construction
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Commanded vertical velocity (units per tick)
    pub velocity: f32,
    /// Magnitude used by `move_in`
    pub speed: f32,
}

impl Paddle {
    pub fn new(side: Side, speed: f32) -> Self {
        let x = match side {
            Side::Left => PADDLE_INSET,
            Side::Right => FIELD_WIDTH - PADDLE_INSET - PADDLE_WIDTH,
        };
        let mut paddle = Self {
            side,
            pos: Vec2::new(x, 0.0),
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            velocity: 0.0,
            speed,
        };
        paddle.reset();
        paddle
    }

    /// Center vertically and stop
    pub fn reset(&mut self) {
        self.pos.y = FIELD_HEIGHT / 2.0 - self.height / 2.0;
        self.velocity = 0.0;
    }

    /// Lowest legal `pos.y`
    #[inline]
    pub fn max_y(&self) -> f32 {
        FIELD_HEIGHT - self.height
    }

    /// Vertical center of the paddle
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.height / 2.0
    }

    /// Start moving (or stop). Replaces any previous command exactly.
    pub fn move_in(&mut self, direction: Direction) {
        self.velocity = direction.sign() * self.speed;
    }

    /// Key-up: stop only if still moving the released way.
    ///
    /// Releasing "up" while "down" is the active command leaves it alone.
    pub fn release(&mut self, direction: Direction) {
        let sign = direction.sign();
        if sign != 0.0 && self.velocity * sign > 0.0 {
            self.velocity = 0.0;
        }
    }

    /// Integrate commanded velocity and clamp to the field
    pub fn update(&mut self) {
        self.pos.y = (self.pos.y + self.velocity).clamp(0.0, self.max_y());
    }
}
