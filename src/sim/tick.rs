//! Fixed timestep simulation tick
//!
//! Applies one tick's worth of input, then advances the simulation if the
//! match is running.

use super::paddle::{Direction, Side};
use super::state::{MatchEvent, MatchMode, MatchState};
use crate::consts::FIELD_HEIGHT;

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// New held direction for the left paddle (None = unchanged)
    pub left: Option<Direction>,
    /// New held direction for the right paddle (None = unchanged)
    pub right: Option<Direction>,
    /// Start or replay a match
    pub start: bool,
    /// Pause toggle
    pub pause: bool,
    /// Return to title
    pub home: bool,
}

impl TickInput {
    /// Clear one-shot commands after they have been delivered
    pub fn clear_one_shots(&mut self) {
        self.start = false;
        self.pause = false;
        self.home = false;
    }
}

/// Advance the match by one fixed timestep
pub fn tick(state: &mut MatchState, input: &TickInput) {
    state.time_ticks += 1;

    if input.home {
        state.home();
    }
    if input.start {
        state.start();
    }
    if input.pause {
        state.toggle_pause();
    }
    if let Some(direction) = input.left {
        state.move_paddle(Side::Left, direction);
    }
    if let Some(direction) = input.right {
        state.move_paddle(Side::Right, direction);
    }

    if state.mode() == MatchMode::Running {
        step_simulation(state);
    }
}

/// Ball first (against current paddle positions), then paddles, then scoring
fn step_simulation(state: &mut MatchState) {
    debug_assert_eq!(state.mode(), MatchMode::Running);

    let step = state.ball.update(&state.left, &state.right, &state.settings);
    state.left.update();
    state.right.update();

    if let Some(wall) = step.wall {
        state.push_event(MatchEvent::WallBounce { wall });
    }
    if let Some(side) = step.returned_by {
        state.push_event(MatchEvent::PaddleReturn { side });
    }
    if let Some(side) = step.scored {
        state.point_scored(side);
    }

    debug_assert!(state.left.pos.y >= 0.0 && state.left.pos.y <= state.left.max_y());
    debug_assert!(state.right.pos.y >= 0.0 && state.right.pos.y <= state.right.max_y());
    debug_assert!(state.ball.pos.y >= 0.0 && state.ball.pos.y + state.ball.size <= FIELD_HEIGHT);
    debug_assert!(state.score.left.max(state.score.right) <= state.score.winning_score);
}
