//! Snake Logic entry point
//!
//! Headless driver: generates boards and clears them the way a frontend
//! would - one tick per frame, selections resolved through the hint query,
//! events fed to the audio-cue boundary.

use snake_logic::audio::CuePlayer;
use snake_logic::consts::SIM_DT;
use snake_logic::progress::Progress;
use snake_logic::sim::{GamePhase, GameState, TickInput, tick};

/// Frame budget per level - far beyond any real clear
const MAX_FRAMES: u64 = 100_000;

fn main() {
    env_logger::init();

    // Usage: snake-logic [start_level] [level_count] [seed]
    let mut args = std::env::args().skip(1);
    let start_level: u32 = args.next().and_then(|a| a.parse().ok()).unwrap_or(1);
    let count: u32 = args.next().and_then(|a| a.parse().ok()).unwrap_or(1);
    let seed: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(42);

    let cues = CuePlayer::new(false);
    let mut progress = Progress::new();

    for level in start_level..start_level.saturating_add(count) {
        match play_level(level, seed, &cues) {
            Some(GamePhase::Won) => progress.complete(level),
            Some(phase) => log::warn!("level {level} ended in {phase:?}"),
            None => log::error!("level {level}: generation failed"),
        }
    }

    match serde_json::to_string_pretty(&progress) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("progress not serializable: {err}"),
    }
}

/// Play one level to its end. None if no board could be generated.
fn play_level(level: u32, seed: u64, cues: &CuePlayer) -> Option<GamePhase> {
    let mut state = GameState::new(level, seed.wrapping_add(level as u64))?;
    log::info!("level {level}: {} snakes on the board", state.snakes.len());

    let mut frames = 0u64;
    while state.phase == GamePhase::Playing && frames < MAX_FRAMES {
        let input = if state.is_processing() {
            TickInput::default()
        } else if let Some(id) = state.hinted {
            // Tap whatever the hint highlights - a player that never guesses
            TickInput {
                select: Some(id),
                ..Default::default()
            }
        } else {
            TickInput {
                hint: true,
                ..Default::default()
            }
        };

        tick(&mut state, &input, SIM_DT);
        for event in state.drain_events() {
            cues.handle(&event);
        }
        frames += 1;
    }

    log::info!("level {level}: {:?} after {frames} frames", state.phase);
    Some(state.phase)
}
