//! Retro Pong - a two-paddle arcade match engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, scoring, countdown, match state machine)
//! - `settings`: Data-driven match tuning

pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, velocities are expressed per tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the driver will account for (seconds)
    pub const MAX_FRAME_DT: f32 = 0.25;
    /// Interval between countdown firings (seconds)
    pub const COUNTDOWN_INTERVAL: f32 = 1.0;

    /// Playfield dimensions (logical units, independent of window size)
    pub const FIELD_WIDTH: f32 = 960.0;
    pub const FIELD_HEIGHT: f32 = 540.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Gap between a paddle and its side wall
    pub const PADDLE_INSET: f32 = 30.0;
    /// Units per tick while a direction is held
    pub const PADDLE_SPEED: f32 = 8.0;

    /// Ball defaults (square, same size for drawing and collision)
    pub const BALL_SIZE: f32 = 15.0;
    /// Horizontal serve speed (units per tick)
    pub const BALL_SERVE_SPEED: f32 = 6.0;
    /// Serve vertical speed is drawn from [-range, range]
    pub const BALL_SERVE_VY_RANGE: f32 = 3.0;
    /// Vertical speed when the ball strikes a paddle's extreme edge
    pub const BOUNCE_MAX_VY: f32 = 5.0;
    /// Speed boost when ball hits paddle (multiplicative)
    pub const PADDLE_BOOST: f32 = 1.05;

    /// Points needed to win a match
    pub const WINNING_SCORE: u32 = 5;
    /// Countdown length before each match (seconds)
    pub const COUNTDOWN_SECONDS: u32 = 3;
}

/// Linearly re-map `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// Not clamped; values outside the input range extrapolate.
#[inline]
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    let span = in_max - in_min;
    if span == 0.0 {
        return out_min;
    }
    out_min + (value - in_min) / span * (out_max - out_min)
}
