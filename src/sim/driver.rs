//! Frame driver
//!
//! Turns variable wall-clock frame times into fixed simulation ticks and
//! once-per-second countdown firings. The countdown phase restarts whenever
//! the match arms a new countdown, so a firing never leaks across arms.

use super::state::MatchState;
use super::tick::{TickInput, tick};
use crate::consts::*;

/// Work done by one call to [`FrameDriver::advance`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub ticks: u32,
    pub countdown_firings: u32,
}

#[derive(Debug, Clone)]
pub struct FrameDriver {
    accumulator: f32,
    /// Simulation ticks since the current countdown was armed (or last fired)
    countdown_ticks: u32,
    countdown_interval_ticks: u32,
    countdown_generation: u64,
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameDriver {
    pub fn new() -> Self {
        Self {
            accumulator: 0.0,
            countdown_ticks: 0,
            countdown_interval_ticks: (COUNTDOWN_INTERVAL / SIM_DT).round() as u32,
            countdown_generation: 0,
        }
    }

    /// Run as many fixed ticks as `elapsed` seconds allow.
    ///
    /// One-shot commands in `input` are cleared once delivered; held paddle
    /// directions are left in place.
    pub fn advance(&mut self, state: &mut MatchState, input: &mut TickInput, elapsed: f32) -> FrameReport {
        let mut report = FrameReport::default();
        // NaN would poison the accumulator for good
        let elapsed = if elapsed.is_finite() { elapsed } else { 0.0 };
        self.accumulator += elapsed.clamp(0.0, MAX_FRAME_DT);

        while self.accumulator >= SIM_DT && report.ticks < MAX_SUBSTEPS {
            tick(state, input);
            input.clear_one_shots();
            self.accumulator -= SIM_DT;
            report.ticks += 1;

            if self.step_countdown(state) {
                report.countdown_firings += 1;
            }
        }

        if report.ticks == MAX_SUBSTEPS && self.accumulator >= SIM_DT {
            log::debug!("Frame driver behind by {:.3}s, dropping", self.accumulator);
            self.accumulator = 0.0;
        }

        report
    }

    /// Count one tick toward the next countdown firing; fire when due
    fn step_countdown(&mut self, state: &mut MatchState) -> bool {
        if !state.countdown_armed() {
            self.countdown_ticks = 0;
            return false;
        }
        if state.countdown_generation() != self.countdown_generation {
            self.countdown_generation = state.countdown_generation();
            self.countdown_ticks = 0;
        }

        self.countdown_ticks += 1;
        if self.countdown_ticks < self.countdown_interval_ticks {
            return false;
        }
        self.countdown_ticks = 0;
        state.fire_countdown();
        true
    }
}
