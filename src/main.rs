//! Retro Pong entry point
//!
//! Headless native demo: runs one scripted match through the frame driver and
//! prints the final state. Paddles sweep on a fixed schedule; nothing tracks
//! the ball.

use std::path::Path;

use retro_pong::Settings;
use retro_pong::consts::SIM_DT;
use retro_pong::sim::{Direction, FrameDriver, MatchEvent, MatchMode, MatchState, TickInput};

/// Give up after ten simulated minutes
const MAX_FRAMES: u32 = 60 * 60 * 10;
/// Frames between paddle direction changes
const SWEEP_FRAMES: u32 = 40;

fn main() {
    env_logger::init();
    log::info!("Retro Pong (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::from_env(),
    };

    let mut state = MatchState::new(settings);
    let mut driver = FrameDriver::new();
    let mut input = TickInput {
        start: true,
        ..Default::default()
    };

    let mut frame = 0;
    while frame < MAX_FRAMES {
        if frame % SWEEP_FRAMES == 0 {
            let up = (frame / SWEEP_FRAMES) % 2 == 0;
            input.left = Some(if up { Direction::Up } else { Direction::Down });
            // Right paddle sweeps at a different rhythm so rallies vary
            let right_up = (frame / (SWEEP_FRAMES + 13)) % 2 == 0;
            input.right = Some(if right_up { Direction::Down } else { Direction::Up });
        }

        driver.advance(&mut state, &mut input, SIM_DT);
        for event in state.drain_events() {
            report(&event);
        }

        frame += 1;
        if state.mode() == MatchMode::GameOver {
            break;
        }
    }

    if state.mode() != MatchMode::GameOver {
        log::warn!("No winner after {frame} frames");
    }

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("Could not serialize final snapshot: {err}"),
    }
}

fn report(event: &MatchEvent) {
    match event {
        MatchEvent::CountdownTick { remaining } => println!("  {remaining}..."),
        MatchEvent::PointScored { side, left, right } => {
            println!("Point {}: {left} - {right}", side.as_str());
        }
        MatchEvent::GameOver { winner } => println!("{} player wins!", winner.as_str()),
        other => log::debug!("{other:?}"),
    }
}
