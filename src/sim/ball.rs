//! The ball
//!
//! Moves in straight lines at a fixed velocity per tick, bounces off the top
//! and bottom walls, and is returned by paddles. Leaving through the left or
//! right edge is reported as a point instead of bouncing.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{Rect, WallHit, ball_paddle_contact, clamp_to_vertical_walls};
use super::paddle::{Paddle, Side};
use crate::consts::*;
use crate::settings::Settings;

/// What happened to the ball during one update
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BallStep {
    /// Wall bounced off this tick
    pub wall: Option<WallHit>,
    /// Side that scored (ball left the field on the other side)
    pub scored: Option<Side>,
    /// Paddle that returned the ball this tick
    pub returned_by: Option<Side>,
}

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner of the ball's square
    pub pos: Vec2,
    /// Units per tick
    pub vel: Vec2,
    pub size: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

impl Ball {
    pub fn new() -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: BALL_SIZE,
        };
        ball.reset();
        ball
    }

    /// Recenter and stop
    pub fn reset(&mut self) {
        self.pos = Vec2::new(FIELD_WIDTH, FIELD_HEIGHT) / 2.0 - Vec2::splat(self.size / 2.0);
        self.vel = Vec2::ZERO;
    }

    /// Bounding box used for all collision tests
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, Vec2::splat(self.size))
    }

    pub fn center(&self) -> Vec2 {
        self.rect().center()
    }

    pub fn is_at_rest(&self) -> bool {
        self.vel == Vec2::ZERO
    }

    /// Launch toward a random side with a random vertical component
    pub fn serve<R: Rng>(&mut self, rng: &mut R, speed: f32, vy_range: f32) {
        let vx = if rng.random_bool(0.5) { speed } else { -speed };
        let vy = if vy_range > 0.0 {
            rng.random_range(-vy_range..=vy_range)
        } else {
            0.0
        };
        self.vel = Vec2::new(vx, vy);
    }

    /// Advance one tick: move, bounce off walls, detect scoring, then paddles.
    ///
    /// A scoring tick skips the paddle tests; the ball is about to be reset.
    pub fn update(&mut self, left: &Paddle, right: &Paddle, settings: &Settings) -> BallStep {
        let mut step = BallStep::default();

        self.pos += self.vel;

        if let Some(wall) = clamp_to_vertical_walls(&mut self.pos, self.size, FIELD_HEIGHT) {
            self.vel.y = -self.vel.y;
            step.wall = Some(wall);
        }

        if self.pos.x < 0.0 {
            step.scored = Some(Side::Right);
            return step;
        }
        if self.pos.x + self.size > FIELD_WIDTH {
            step.scored = Some(Side::Left);
            return step;
        }

        for paddle in [left, right] {
            if self.try_return(paddle, settings) {
                step.returned_by = Some(paddle.side);
            }
        }

        step
    }

    /// Bounce off `paddle` if overlapping and approaching it
    fn try_return(&mut self, paddle: &Paddle, settings: &Settings) -> bool {
        let approaching = match paddle.side {
            Side::Left => self.vel.x < 0.0,
            Side::Right => self.vel.x > 0.0,
        };
        if !approaching {
            return false;
        }
        let Some(contact) = ball_paddle_contact(&self.rect(), paddle) else {
            return false;
        };

        let mut speed = self.vel.x.abs() * settings.paddle_boost;
        if let Some(cap) = settings.max_ball_speed {
            speed = speed.min(cap);
        }
        self.vel.x = -self.vel.x.signum() * speed;
        self.vel.y = contact.bounce_vy(settings.bounce_max_vy);
        log::trace!(
            "{} paddle return at offset {:.1}, vel now {:?}",
            paddle.side.as_str(),
            contact.offset,
            self.vel
        );
        true
    }
}
