//! Level progression tracking
//!
//! Which levels are completed and how far the player has unlocked.
//! Serializable so an outer layer can persist it however it likes.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Highest selectable level
pub const MAX_SELECTABLE_LEVEL: u32 = 30;

/// Unlock/completion ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Progress {
    /// Highest level the player may enter
    pub unlocked: u32,
    /// Levels cleared at least once
    pub completed: BTreeSet<u32>,
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress {
    /// Fresh progress: only level 1 playable
    pub fn new() -> Self {
        Self {
            unlocked: 1,
            completed: BTreeSet::new(),
        }
    }

    pub fn is_unlocked(&self, level: u32) -> bool {
        (1..=self.unlocked).contains(&level)
    }

    pub fn is_completed(&self, level: u32) -> bool {
        self.completed.contains(&level)
    }

    /// Record a cleared level, unlocking the next one up to the cap
    pub fn complete(&mut self, level: u32) {
        self.completed.insert(level);
        if level >= self.unlocked && level < MAX_SELECTABLE_LEVEL {
            self.unlocked = level + 1;
        }
    }

    /// The level after this one, if any remain
    pub fn next_level(&self, level: u32) -> Option<u32> {
        (level < MAX_SELECTABLE_LEVEL).then_some(level + 1)
    }
}
