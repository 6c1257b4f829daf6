//! Game state and move flow types
//!
//! All state for one level lives here. A level's snake set is created
//! wholesale by the generator and only ever mutated by the tick loop: one
//! exit animation in flight at most, removals the instant a snake is fully
//! off the board.

use serde::{Deserialize, Serialize};

use super::animation::ExitAnimation;
use super::generator::LevelGenerator;
use super::snake::Snake;
use crate::consts::INITIAL_LIVES;

/// Current phase of a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Player may select snakes
    Playing,
    /// Board cleared
    Won,
    /// Lives exhausted
    Lost,
}

/// Discrete feedback events, drained once per frame by the outer layers
/// (audio cues, UI). Purely reactive - the core never depends on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    MoveAccepted { id: u32 },
    MoveRejected { id: u32 },
    SnakeExited { id: u32 },
    BoardCleared,
    HintShown { id: u32 },
}

/// The single snake currently sliding off the board
#[derive(Debug, Clone)]
pub struct ActiveExit {
    pub id: u32,
    pub animation: ExitAnimation,
}

/// Complete state of one level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub level: u32,
    /// Generation seed, kept for reproducibility
    pub seed: u64,
    pub lives: u8,
    pub phase: GamePhase,
    /// Remaining snakes, in generation order
    pub snakes: Vec<Snake>,
    /// In-flight exit animation, at most one
    #[serde(skip)]
    pub(crate) exiting: Option<ActiveExit>,
    /// Rejection flash countdown; selection is locked while nonzero
    #[serde(skip)]
    pub(crate) reject_ticks: u32,
    /// Hint highlight countdown
    #[serde(skip)]
    pub(crate) hint_ticks: u32,
    /// Currently highlighted hint
    pub hinted: Option<u32>,
    /// Events since the last drain
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// Generate a board and enter the level. None when generation exhausts
    /// its budget - the caller must retry with another seed or surface the
    /// failure instead of entering play with an empty board.
    pub fn new(level: u32, seed: u64) -> Option<Self> {
        let snakes = LevelGenerator::new(seed).generate(level);
        if snakes.is_empty() {
            return None;
        }
        Some(Self::from_snakes(level, seed, snakes))
    }

    /// Enter a level with a pre-built snake set (tests, custom generators)
    pub fn from_snakes(level: u32, seed: u64, snakes: Vec<Snake>) -> Self {
        Self {
            level,
            seed,
            lives: INITIAL_LIVES,
            phase: GamePhase::Playing,
            snakes,
            exiting: None,
            reject_ticks: 0,
            hint_ticks: 0,
            hinted: None,
            events: Vec::new(),
        }
    }

    /// Whether interaction is locked: a rejection flash is running or a
    /// snake is in flight. At most one move resolves at a time.
    pub fn is_processing(&self) -> bool {
        self.exiting.is_some() || self.reject_ticks > 0
    }

    /// Look up a snake by id
    pub fn snake(&self, id: u32) -> Option<&Snake> {
        self.snakes.iter().find(|s| s.id == id)
    }

    /// Id of the snake currently exiting, if any
    pub fn exiting_id(&self) -> Option<u32> {
        self.exiting.as_ref().map(|e| e.id)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take the events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::snake::Heading;
    use glam::Vec2;

    fn snake(id: u32) -> Snake {
        Snake::new(
            id,
            vec![Vec2::new(100.0, 100.0), Vec2::new(100.0, 200.0)],
            Heading::Down,
            0,
        )
    }

    #[test]
    fn test_new_level_is_playable() {
        let state = GameState::new(1, 7).expect("normal tier should generate");
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.lives, INITIAL_LIVES);
        assert!(!state.is_processing());
        assert!(!state.snakes.is_empty());
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let mut state = GameState::from_snakes(1, 0, vec![snake(1)]);
        state.push_event(GameEvent::HintShown { id: 1 });
        assert_eq!(state.drain_events(), vec![GameEvent::HintShown { id: 1 }]);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_snake_lookup() {
        let state = GameState::from_snakes(1, 0, vec![snake(3)]);
        assert!(state.snake(3).is_some());
        assert!(state.snake(4).is_none());
    }
}
