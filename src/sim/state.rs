//! Match state and mode transitions
//!
//! [`MatchState`] owns every entity in a match. Presentation code reads it
//! through [`MatchState::snapshot`] and [`MatchState::drain_events`] and
//! changes it only through the command methods here and [`super::tick`].

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::collision::WallHit;
use super::countdown::{Countdown, CountdownStep};
use super::paddle::{Direction, Paddle, Side};
use super::score::ScoreTracker;
use crate::settings::Settings;

/// Current mode of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchMode {
    /// Title screen, nothing on the field
    Title,
    /// Counting down before the first serve
    Countdown,
    /// Active gameplay
    Running,
    /// Game is paused
    Paused,
    /// A side reached the winning score
    GameOver,
}

impl MatchMode {
    /// Whether paddles and ball should be drawn
    pub fn shows_entities(self) -> bool {
        self != MatchMode::Title
    }

    /// Whether paddle commands are accepted
    pub fn accepts_paddle_input(self) -> bool {
        !matches!(self, MatchMode::Title | MatchMode::GameOver)
    }
}

/// Something presentation may want to react to (sounds, HUD flashes)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MatchEvent {
    CountdownStarted { seconds: u32 },
    CountdownTick { remaining: u32 },
    CountdownCancelled,
    Served { vx: f32, vy: f32 },
    WallBounce { wall: WallHit },
    PaddleReturn { side: Side },
    PointScored { side: Side, left: u32, right: u32 },
    GameOver { winner: Side },
    Paused,
    Resumed,
    ReturnedHome,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub mode: MatchMode,
    /// Seconds left, only during the countdown
    pub countdown: Option<u32>,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub ball: Ball,
    pub left_score: u32,
    pub right_score: u32,
    pub winner: Option<Side>,
    pub show_entities: bool,
}

/// Complete match state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct MatchState {
    pub(crate) settings: Settings,
    /// Seed the serve RNG was created from
    pub(crate) seed: u64,
    pub(crate) rng: Pcg32,
    pub(crate) mode: MatchMode,
    pub(crate) ball: Ball,
    pub(crate) left: Paddle,
    pub(crate) right: Paddle,
    pub(crate) score: ScoreTracker,
    pub(crate) countdown: Countdown,
    pub(crate) winner: Option<Side>,
    /// Ticks delivered by the driver, in any mode
    pub(crate) time_ticks: u64,
    pub(crate) events: Vec<MatchEvent>,
}

impl MatchState {
    pub fn new(settings: Settings) -> Self {
        let settings = settings.sanitized();
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("New match controller (seed {seed})");
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            mode: MatchMode::Title,
            ball: Ball::new(),
            left: Paddle::new(Side::Left, settings.paddle_speed),
            right: Paddle::new(Side::Right, settings.paddle_speed),
            score: ScoreTracker::new(settings.winning_score),
            countdown: Countdown::new(),
            winner: None,
            time_ticks: 0,
            events: Vec::new(),
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn score(&self) -> &ScoreTracker {
        &self.score
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Seconds left on the countdown (only meaningful in `Countdown`)
    pub fn countdown_remaining(&self) -> Option<u32> {
        (self.mode == MatchMode::Countdown).then(|| self.countdown.remaining())
    }

    /// Identifies the current countdown arming (for external schedulers)
    pub fn countdown_generation(&self) -> u64 {
        self.countdown.generation()
    }

    pub fn countdown_armed(&self) -> bool {
        self.countdown.is_armed()
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            mode: self.mode,
            countdown: self.countdown_remaining(),
            left_paddle: self.left.clone(),
            right_paddle: self.right.clone(),
            ball: self.ball.clone(),
            left_score: self.score.left,
            right_score: self.score.right,
            winner: self.winner,
            show_entities: self.mode.shows_entities(),
        }
    }

    /// Take all events queued since the last call
    pub fn drain_events(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn push_event(&mut self, event: MatchEvent) {
        self.events.push(event);
    }

    /// Zero the score and put ball and paddles back at rest
    fn reset_entities(&mut self) {
        self.score.reset();
        self.ball.reset();
        self.left.reset();
        self.right.reset();
        self.winner = None;
    }

    /// Back to the title screen from anywhere, cancelling any countdown
    pub fn reset(&mut self) {
        if self.countdown.cancel() {
            log::debug!("Pending countdown cancelled");
            self.push_event(MatchEvent::CountdownCancelled);
        }
        self.reset_entities();
        self.mode = MatchMode::Title;
    }

    /// Start (or replay) a match. Valid from `Title` and `GameOver`.
    pub fn start(&mut self) -> bool {
        if !matches!(self.mode, MatchMode::Title | MatchMode::GameOver) {
            log::debug!("Start ignored in {:?}", self.mode);
            return false;
        }
        self.reset_entities();
        let seconds = self.settings.countdown_seconds;
        self.countdown.arm(seconds);
        self.mode = MatchMode::Countdown;
        self.push_event(MatchEvent::CountdownStarted { seconds });
        log::info!("Match starting, countdown {seconds}s");
        true
    }

    pub fn pause(&mut self) -> bool {
        if self.mode != MatchMode::Running {
            log::debug!("Pause ignored in {:?}", self.mode);
            return false;
        }
        self.mode = MatchMode::Paused;
        self.push_event(MatchEvent::Paused);
        log::info!("Paused");
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.mode != MatchMode::Paused {
            log::debug!("Resume ignored in {:?}", self.mode);
            return false;
        }
        self.mode = MatchMode::Running;
        self.push_event(MatchEvent::Resumed);
        log::info!("Resumed");
        true
    }

    /// Pause if running, resume if paused, otherwise nothing
    pub fn toggle_pause(&mut self) -> bool {
        match self.mode {
            MatchMode::Running => self.pause(),
            MatchMode::Paused => self.resume(),
            _ => {
                log::debug!("Pause toggle ignored in {:?}", self.mode);
                false
            }
        }
    }

    /// Return to the title screen. No-op when already there.
    pub fn home(&mut self) -> bool {
        if self.mode == MatchMode::Title {
            log::debug!("Home ignored on title screen");
            return false;
        }
        self.reset();
        self.push_event(MatchEvent::ReturnedHome);
        log::info!("Returned to title");
        true
    }

    /// Hold a direction (or `Stop`) on one paddle
    pub fn move_paddle(&mut self, side: Side, direction: Direction) -> bool {
        if !self.mode.accepts_paddle_input() {
            return false;
        }
        self.paddle_mut(side).move_in(direction);
        true
    }

    /// Let go of a direction on one paddle
    pub fn release_paddle(&mut self, side: Side, direction: Direction) -> bool {
        if !self.mode.accepts_paddle_input() {
            return false;
        }
        self.paddle_mut(side).release(direction);
        true
    }

    /// One scheduled countdown firing (once per second while counting down).
    ///
    /// Firings that arrive after the match left `Countdown` are ignored.
    pub fn fire_countdown(&mut self) -> CountdownStep {
        if self.mode != MatchMode::Countdown {
            debug_assert!(!self.countdown.is_armed(), "countdown armed outside Countdown");
            log::debug!("Stale countdown firing ignored in {:?}", self.mode);
            return CountdownStep::Idle;
        }

        let step = self.countdown.fire();
        match step {
            CountdownStep::Tick(remaining) => {
                self.push_event(MatchEvent::CountdownTick { remaining });
            }
            CountdownStep::Expired => {
                self.push_event(MatchEvent::CountdownTick { remaining: 0 });
                self.mode = MatchMode::Running;
                log::info!("Countdown finished, serving");
                self.serve();
            }
            CountdownStep::Idle => {}
        }
        step
    }

    /// Give the ball a fresh random velocity
    pub(crate) fn serve(&mut self) {
        self.ball
            .serve(&mut self.rng, self.settings.serve_speed, self.settings.serve_vy_range);
        self.push_event(MatchEvent::Served {
            vx: self.ball.vel.x,
            vy: self.ball.vel.y,
        });
    }

    /// Credit a point and either re-serve or end the match
    pub(crate) fn point_scored(&mut self, side: Side) {
        let over = self.score.award(side);
        self.push_event(MatchEvent::PointScored {
            side,
            left: self.score.left,
            right: self.score.right,
        });
        log::info!(
            "Point to {} ({} - {})",
            side.as_str(),
            self.score.left,
            self.score.right
        );

        self.ball.reset();
        if over {
            self.mode = MatchMode::GameOver;
            self.winner = Some(side);
            self.push_event(MatchEvent::GameOver { winner: side });
            log::info!("{} player wins", side.as_str());
        } else {
            self.serve();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_match() -> MatchState {
        MatchState::new(Settings::seeded(12345))
    }

    fn run_countdown(state: &mut MatchState) {
        while state.mode() == MatchMode::Countdown {
            state.fire_countdown();
        }
    }

    #[test]
    fn test_starts_on_title() {
        let state = new_match();
        assert_eq!(state.mode(), MatchMode::Title);
        assert!(!state.snapshot().show_entities);
        assert_eq!(state.countdown_remaining(), None);
    }

    #[test]
    fn test_start_arms_countdown() {
        let mut state = new_match();
        assert!(state.start());
        assert_eq!(state.mode(), MatchMode::Countdown);
        assert_eq!(state.countdown_remaining(), Some(3));
        assert!(state.ball.is_at_rest());
        assert_eq!(
            state.drain_events(),
            vec![MatchEvent::CountdownStarted { seconds: 3 }]
        );
        // Start again mid-countdown is a no-op
        assert!(!state.start());
        assert_eq!(state.countdown_generation(), 1);
    }

    #[test]
    fn test_countdown_fires_three_times_then_serves() {
        let mut state = new_match();
        state.start();
        assert_eq!(state.fire_countdown(), CountdownStep::Tick(2));
        assert_eq!(state.countdown_remaining(), Some(2));
        assert_eq!(state.fire_countdown(), CountdownStep::Tick(1));
        assert_eq!(state.mode(), MatchMode::Countdown);
        assert_eq!(state.fire_countdown(), CountdownStep::Expired);
        assert_eq!(state.mode(), MatchMode::Running);
        assert_eq!(state.ball.vel.x.abs(), 6.0);
        assert!(state.ball.vel.y.abs() <= 3.0);
        assert_eq!(state.fire_countdown(), CountdownStep::Idle);
    }

    #[test]
    fn test_home_mid_countdown_cancels() {
        let mut state = new_match();
        state.start();
        state.fire_countdown();
        assert!(state.home());
        assert_eq!(state.mode(), MatchMode::Title);
        assert!(!state.countdown_armed());
        let events = state.drain_events();
        assert!(events.contains(&MatchEvent::CountdownCancelled));
        assert!(events.contains(&MatchEvent::ReturnedHome));

        // Late firings from the old schedule change nothing
        for _ in 0..5 {
            assert_eq!(state.fire_countdown(), CountdownStep::Idle);
        }
        assert_eq!(state.mode(), MatchMode::Title);
        assert!(state.ball.is_at_rest());
    }

    #[test]
    fn test_cancel_happens_exactly_once() {
        let mut state = new_match();
        state.start();
        state.home();
        state.home();
        let cancels = state
            .drain_events()
            .iter()
            .filter(|e| **e == MatchEvent::CountdownCancelled)
            .count();
        assert_eq!(cancels, 1);
    }

    #[test]
    fn test_pause_and_resume_only_from_valid_modes() {
        let mut state = new_match();
        assert!(!state.pause());
        assert!(!state.resume());
        assert!(!state.toggle_pause());
        state.start();
        assert!(!state.pause());
        run_countdown(&mut state);
        assert!(!state.resume());
        assert!(state.pause());
        assert_eq!(state.mode(), MatchMode::Paused);
        assert!(!state.pause());
        assert!(state.toggle_pause());
        assert_eq!(state.mode(), MatchMode::Running);
    }

    #[test]
    fn test_paddle_input_gated_by_mode() {
        let mut state = new_match();
        assert!(!state.move_paddle(Side::Left, Direction::Down));
        assert_eq!(state.left.velocity, 0.0);
        state.start();
        assert!(state.move_paddle(Side::Left, Direction::Down));
        assert_eq!(state.left.velocity, 8.0);
        assert!(state.release_paddle(Side::Left, Direction::Down));
        assert_eq!(state.left.velocity, 0.0);
    }

    #[test]
    fn test_point_scored_reserves_until_game_over() {
        let mut state = new_match();
        state.start();
        run_countdown(&mut state);
        state.drain_events();

        for n in 1..5 {
            state.point_scored(Side::Left);
            assert_eq!(state.score.left, n);
            assert_eq!(state.mode(), MatchMode::Running);
            assert!(!state.ball.is_at_rest());
        }
        state.point_scored(Side::Left);
        assert_eq!(state.mode(), MatchMode::GameOver);
        assert_eq!(state.winner(), Some(Side::Left));
        assert!(state.ball.is_at_rest());
        assert!(
            state
                .drain_events()
                .contains(&MatchEvent::GameOver { winner: Side::Left })
        );
    }

    #[test]
    fn test_replay_from_game_over_resets_everything() {
        let mut state = new_match();
        state.start();
        run_countdown(&mut state);
        for _ in 0..5 {
            state.point_scored(Side::Right);
        }
        assert_eq!(state.mode(), MatchMode::GameOver);
        assert!(!state.move_paddle(Side::Right, Direction::Up));

        assert!(state.start());
        assert_eq!(state.mode(), MatchMode::Countdown);
        assert_eq!((state.score.left, state.score.right), (0, 0));
        assert_eq!(state.winner(), None);
        assert!(state.ball.is_at_rest());
        assert_eq!(state.countdown_remaining(), Some(3));
    }

    #[test]
    fn test_home_from_every_mode() {
        for target in [
            MatchMode::Countdown,
            MatchMode::Running,
            MatchMode::Paused,
            MatchMode::GameOver,
        ] {
            let mut state = new_match();
            state.start();
            if target != MatchMode::Countdown {
                run_countdown(&mut state);
            }
            if target == MatchMode::Paused {
                state.pause();
            }
            if target == MatchMode::GameOver {
                for _ in 0..5 {
                    state.point_scored(Side::Left);
                }
            }
            state.move_paddle(Side::Right, Direction::Down);
            assert_eq!(state.mode(), target);

            assert!(state.home());
            assert_eq!(state.mode(), MatchMode::Title);
            assert_eq!((state.score.left, state.score.right), (0, 0));
            assert!(state.ball.is_at_rest());
            assert_eq!(state.right.velocity, 0.0);
        }
    }

    #[test]
    fn test_read_accessors_match_snapshot() {
        let mut state = new_match();
        state.start();
        run_countdown(&mut state);
        state.point_scored(Side::Left);
        let snapshot = state.snapshot();
        assert_eq!(state.ball(), &snapshot.ball);
        assert_eq!(state.paddle(Side::Left), &snapshot.left_paddle);
        assert_eq!(state.paddle(Side::Right), &snapshot.right_paddle);
        assert_eq!(state.score().left, snapshot.left_score);
        assert_eq!(state.seed(), 12345);
        assert_eq!(state.settings().winning_score, state.score().winning_score);
    }

    #[test]
    fn test_unsanitized_settings_are_cleaned_on_construction() {
        let settings = Settings {
            serve_speed: 0.0,
            bounce_max_vy: -5.0,
            serve_vy_range: f32::INFINITY,
            paddle_speed: f32::NAN,
            winning_score: 0,
            ..Settings::seeded(1)
        };
        let state = MatchState::new(settings);
        assert_eq!(state.settings(), &Settings::seeded(1));
        assert_eq!(state.score().winning_score, 5);
        assert_eq!(state.paddle(Side::Left).speed, 8.0);
    }

    #[test]
    fn test_same_seed_same_serves() {
        let mut a = new_match();
        let mut b = new_match();
        for state in [&mut a, &mut b] {
            state.start();
            run_countdown(state);
        }
        assert_eq!(a.ball.vel, b.ball.vel);
    }
}
