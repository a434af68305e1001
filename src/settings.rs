//! Match tuning and preferences
//!
//! Loaded from an optional JSON file. Missing fields fall back to the defaults
//! in [`crate::consts`]; playfield geometry is fixed and not configurable.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Match settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Rules ===
    /// Points needed to win
    pub winning_score: u32,
    /// Countdown length before serving (seconds)
    pub countdown_seconds: u32,

    // === Paddles ===
    /// Units per tick while a direction is held
    pub paddle_speed: f32,

    // === Ball ===
    /// Horizontal serve speed (units per tick)
    pub serve_speed: f32,
    /// Serve vertical speed is drawn from [-range, range]
    pub serve_vy_range: f32,
    /// Vertical speed at a paddle's extreme edge
    pub bounce_max_vy: f32,
    /// Multiplier applied to horizontal speed on every paddle return
    pub paddle_boost: f32,
    /// Optional cap on horizontal ball speed (None = unbounded rallies)
    pub max_ball_speed: Option<f32>,

    // === Determinism ===
    /// Seed for serve randomness (None = fresh seed per match controller)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            winning_score: WINNING_SCORE,
            countdown_seconds: COUNTDOWN_SECONDS,

            paddle_speed: PADDLE_SPEED,

            serve_speed: BALL_SERVE_SPEED,
            serve_vy_range: BALL_SERVE_VY_RANGE,
            bounce_max_vy: BOUNCE_MAX_VY,
            paddle_boost: PADDLE_BOOST,
            max_ball_speed: None,

            seed: None,
        }
    }
}

impl Settings {
    /// Environment variable naming a settings file
    pub const ENV_VAR: &'static str = "RETRO_PONG_SETTINGS";

    /// Settings with a fixed RNG seed (handy for replays and tests)
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Self = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    /// Serialize settings to pretty JSON
    pub fn to_json(&self) -> String {
        // Plain data with string keys; serialization cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Load settings from a JSON file, falling back to defaults on any error
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Invalid settings in {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("Could not read settings {}: {err}", path.display());
                Self::default()
            }
        }
    }

    /// Load from the file named by [`Self::ENV_VAR`], if any
    pub fn from_env() -> Self {
        match std::env::var_os(Self::ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Replace nonsensical values with defaults
    pub(crate) fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.winning_score == 0 {
            log::warn!("winning_score must be positive, using {}", defaults.winning_score);
            self.winning_score = defaults.winning_score;
        }
        if self.countdown_seconds == 0 {
            log::warn!(
                "countdown_seconds must be positive, using {}",
                defaults.countdown_seconds
            );
            self.countdown_seconds = defaults.countdown_seconds;
        }
        if !(self.paddle_boost.is_finite() && self.paddle_boost >= 1.0) {
            log::warn!("paddle_boost must be >= 1.0, using {}", defaults.paddle_boost);
            self.paddle_boost = defaults.paddle_boost;
        }
        if !(self.paddle_speed.is_finite() && self.paddle_speed > 0.0) {
            log::warn!("paddle_speed must be positive, using {}", defaults.paddle_speed);
            self.paddle_speed = defaults.paddle_speed;
        }
        if !(self.serve_speed.is_finite() && self.serve_speed > 0.0) {
            log::warn!("serve_speed must be positive, using {}", defaults.serve_speed);
            self.serve_speed = defaults.serve_speed;
        }
        // Upper bound keeps the sampled range width finite
        if !(self.serve_vy_range >= 0.0 && self.serve_vy_range <= FIELD_HEIGHT) {
            log::warn!(
                "serve_vy_range must be within [0, {FIELD_HEIGHT}], using {}",
                defaults.serve_vy_range
            );
            self.serve_vy_range = defaults.serve_vy_range;
        }
        if !(self.bounce_max_vy.is_finite() && self.bounce_max_vy > 0.0) {
            log::warn!("bounce_max_vy must be positive, using {}", defaults.bounce_max_vy);
            self.bounce_max_vy = defaults.bounce_max_vy;
        }
        if let Some(cap) = self.max_ball_speed {
            if !(cap.is_finite() && cap >= self.serve_speed) {
                log::warn!("max_ball_speed {cap} is below serve speed, ignoring cap");
                self.max_ball_speed = None;
            }
        }
        self
    }
}
