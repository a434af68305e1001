//! Pre-serve countdown
//!
//! Not a timer: something outside the simulation calls [`Countdown::fire`]
//! once per interval. Arming bumps a generation number so whoever schedules
//! the firings can tell a fresh countdown from the one it was timing.

use serde::{Deserialize, Serialize};

/// Outcome of one scheduled firing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStep {
    /// Count decremented, this many seconds left
    Tick(u32),
    /// Count reached zero; the countdown disarmed itself
    Expired,
    /// Nothing was armed (stale or cancelled schedule)
    Idle,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    remaining: u32,
    armed: bool,
    generation: u64,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh countdown, replacing any pending one
    pub fn arm(&mut self, seconds: u32) {
        debug_assert!(seconds > 0, "countdown must start above zero");
        self.remaining = seconds;
        self.armed = true;
        self.generation += 1;
    }

    /// One scheduled firing
    pub fn fire(&mut self) -> CountdownStep {
        if !self.armed {
            return CountdownStep::Idle;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.armed = false;
            CountdownStep::Expired
        } else {
            CountdownStep::Tick(self.remaining)
        }
    }

    /// Drop the pending schedule. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        let was_armed = self.armed;
        self.armed = false;
        self.remaining = 0;
        was_armed
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Seconds left (0 when idle)
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
