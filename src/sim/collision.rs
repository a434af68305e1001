//! Collision detection and response for axis-aligned boxes
//!
//! Everything on the field is a rectangle: the ball is a square, paddles are
//! tall bars, and the walls are the field edges. Overlap tests are strict, so
//! boxes that merely touch do not collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::paddle::Paddle;
use crate::map_range;

/// Axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    /// Strict overlap test (shared edges do not count)
    pub fn overlaps(&self, other: &Rect) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        a_max.x > other.min.x
            && self.min.x < b_max.x
            && a_max.y > other.min.y
            && self.min.y < b_max.y
    }
}

impl From<&Paddle> for Rect {
    fn from(paddle: &Paddle) -> Self {
        Rect::new(paddle.pos, Vec2::new(paddle.width, paddle.height))
    }
}

/// Result of a ball/paddle check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleContact {
    /// Ball center y minus paddle center y (negative = above center)
    pub offset: f32,
    /// Half the paddle height, the offset at either extreme edge
    pub half_height: f32,
}

impl PaddleContact {
    /// Outgoing vertical speed for this contact point
    pub fn bounce_vy(&self, max_vy: f32) -> f32 {
        bounce_vy(self.offset, self.half_height, max_vy)
    }
}

/// Check whether a ball box overlaps a paddle
pub fn ball_paddle_contact(ball: &Rect, paddle: &Paddle) -> Option<PaddleContact> {
    if !ball.overlaps(&Rect::from(paddle)) {
        return None;
    }
    Some(PaddleContact {
        offset: ball.center().y - paddle.center_y(),
        half_height: paddle.height / 2.0,
    })
}

/// Bounce-angle mapping: linear from `[-half_height, half_height]` onto
/// `[-max_vy, max_vy]`.
///
/// Contacts past the paddle's edge (the ball clipping a corner) saturate at
/// the extreme.
pub fn bounce_vy(offset: f32, half_height: f32, max_vy: f32) -> f32 {
    map_range(offset, -half_height, half_height, -max_vy, max_vy).clamp(-max_vy, max_vy)
}

/// Result of a horizontal wall test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallHit {
    Top,
    Bottom,
}

/// Clamp a box's vertical position into `[0, field_height - height]`.
///
/// Returns which wall was crossed, if any. Only one wall can be reported per
/// call, so the caller inverts velocity at most once.
pub fn clamp_to_vertical_walls(pos: &mut Vec2, height: f32, field_height: f32) -> Option<WallHit> {
    if pos.y < 0.0 {
        pos.y = 0.0;
        Some(WallHit::Top)
    } else if pos.y + height > field_height {
        pos.y = field_height - height;
        Some(WallHit::Bottom)
    } else {
        None
    }
}
