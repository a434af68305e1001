//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (velocities are units per tick)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod ball;
pub mod collision;
pub mod countdown;
pub mod driver;
pub mod paddle;
pub mod score;
pub mod state;
pub mod tick;

pub use ball::{Ball, BallStep};
pub use collision::{PaddleContact, Rect, WallHit, ball_paddle_contact, bounce_vy};
pub use countdown::{Countdown, CountdownStep};
pub use driver::{FrameDriver, FrameReport};
pub use paddle::{Direction, Paddle, Side};
pub use score::ScoreTracker;
pub use state::{MatchEvent, MatchMode, MatchSnapshot, MatchState};
pub use tick::{TickInput, tick};
