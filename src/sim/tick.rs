//! Frame-driven update
//!
//! The single mutator of game state. One external driver calls `tick` once
//! per rendering frame; there is no other write path into a level. The move
//! state machine lives here: Idle -> Selected -> Rejected (flash, back to
//! Idle) or Exiting (animation) -> Removed.

use super::animation::ExitAnimation;
use super::collision::collides;
use super::solver::find_hintable;
use super::state::{ActiveExit, GameEvent, GamePhase, GameState};
use crate::consts::{HINT_TICKS, REJECT_FLASH_TICKS};

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Snake tapped this frame
    pub select: Option<u32>,
    /// Hint requested
    pub hint: bool,
}

/// Advance the level by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase != GamePhase::Playing {
        return;
    }

    // Rejection flash countdown; the lock releases when it reaches zero
    if state.reject_ticks > 0 {
        state.reject_ticks -= 1;
    }

    // Hint highlight decay
    if state.hint_ticks > 0 {
        state.hint_ticks -= 1;
        if state.hint_ticks == 0 {
            state.hinted = None;
        }
    }

    // Advance the in-flight exit
    let mut finished = None;
    if let Some(exit) = &state.exiting {
        match state.snakes.iter_mut().find(|s| s.id == exit.id) {
            Some(snake) => {
                if exit.animation.step(snake, dt) {
                    finished = Some(exit.id);
                }
            }
            None => finished = Some(exit.id),
        }
    }
    if let Some(id) = finished {
        state.exiting = None;
        state.snakes.retain(|s| s.id != id);
        state.push_event(GameEvent::SnakeExited { id });
        log::debug!("snake {id} exited, {} remaining", state.snakes.len());
        if state.snakes.is_empty() {
            state.phase = GamePhase::Won;
            state.push_event(GameEvent::BoardCleared);
            log::info!("level {} cleared", state.level);
        }
    }

    // Selection, ignored while the processing lock is held
    if let Some(id) = input.select {
        if !state.is_processing() {
            select(state, id);
        }
    }

    // Hint: one at a time, never while a move resolves
    if input.hint && state.hinted.is_none() && !state.is_processing() {
        if let Some(id) = find_hintable(&state.snakes) {
            state.hinted = Some(id);
            state.hint_ticks = HINT_TICKS;
            state.push_event(GameEvent::HintShown { id });
        }
    }
}

/// Resolve a tap on a snake: legal moves start the exit animation, illegal
/// ones cost a life and flash
fn select(state: &mut GameState, id: u32) {
    let Some(snake) = state.snakes.iter().find(|s| s.id == id) else {
        return;
    };

    state.hinted = None;
    state.hint_ticks = 0;

    if collides(snake, state.snakes.iter().filter(|o| o.id != id)) {
        state.lives = state.lives.saturating_sub(1);
        state.reject_ticks = REJECT_FLASH_TICKS;
        state.push_event(GameEvent::MoveRejected { id });
        if state.lives == 0 {
            state.phase = GamePhase::Lost;
            log::info!("level {}: out of lives", state.level);
        }
    } else {
        let animation = ExitAnimation::begin(snake);
        state.exiting = Some(ActiveExit { id, animation });
        state.push_event(GameEvent::MoveAccepted { id });
    }
}
