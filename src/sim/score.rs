//! Per-side score keeping

use serde::{Deserialize, Serialize};

use super::paddle::Side;

/// Points for both players plus the match-winning threshold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTracker {
    pub left: u32,
    pub right: u32,
    pub winning_score: u32,
}

impl ScoreTracker {
    pub fn new(winning_score: u32) -> Self {
        debug_assert!(winning_score > 0, "winning score must be positive");
        Self {
            left: 0,
            right: 0,
            winning_score,
        }
    }

    pub fn reset(&mut self) {
        self.left = 0;
        self.right = 0;
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Add one point for `side`. Returns true if that ended the match.
    pub fn award(&mut self, side: Side) -> bool {
        debug_assert!(!self.is_over(), "point awarded after match ended");
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
        self.is_over()
    }

    pub fn is_over(&self) -> bool {
        self.left >= self.winning_score || self.right >= self.winning_score
    }

    /// Side that reached the threshold, if any
    pub fn winner(&self) -> Option<Side> {
        if self.left >= self.winning_score {
            Some(Side::Left)
        } else if self.right >= self.winning_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}
