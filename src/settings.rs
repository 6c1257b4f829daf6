//! Difficulty tiers and generation tunables
//!
//! Every numeric budget the generator uses lives here as a named value, so
//! generation stays tunable and testable instead of hiding constants in the
//! build loop.

use serde::{Deserialize, Serialize};

/// Difficulty bracket derived from the level id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DifficultyTier {
    #[default]
    Normal,
    Medium,
    Hard,
    Extreme,
    Titan,
}

impl DifficultyTier {
    pub fn from_level(level_id: u32) -> Self {
        match level_id {
            0..=5 => DifficultyTier::Normal,
            6..=10 => DifficultyTier::Medium,
            11..=15 => DifficultyTier::Hard,
            16..=20 => DifficultyTier::Extreme,
            _ => DifficultyTier::Titan,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyTier::Normal => "Normal",
            DifficultyTier::Medium => "Medium",
            DifficultyTier::Hard => "Hard",
            DifficultyTier::Extreme => "Extreme",
            DifficultyTier::Titan => "Titan",
        }
    }

    /// Snakes the generator aims to place. Bodies never overlap their own
    /// cells, so these are sized to what a 9x9 walkable grid actually fits.
    pub fn target_count(&self) -> usize {
        match self {
            DifficultyTier::Normal => 5,
            DifficultyTier::Medium => 10,
            DifficultyTier::Hard => 14,
            DifficultyTier::Extreme => 18,
            DifficultyTier::Titan => 8,
        }
    }

    /// Exclusive upper bound on ordinary snake segment count
    pub fn max_segments(&self) -> usize {
        match self {
            DifficultyTier::Normal | DifficultyTier::Medium => 6,
            DifficultyTier::Hard => 14,
            DifficultyTier::Extreme | DifficultyTier::Titan => 22,
        }
    }

    /// How many leading snakes are built oversized (titan tier only)
    pub fn oversized_count(&self) -> usize {
        match self {
            DifficultyTier::Titan => 2,
            _ => 0,
        }
    }

    /// Segment count for an oversized snake - grows linearly with level id
    pub fn titan_segments(level_id: u32) -> usize {
        25 + (level_id as f32 * 0.8).floor() as usize
    }
}

/// Board generation tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenConfig {
    /// Side length of the square play area
    pub board_size: f32,
    /// Distance between adjacent grid cells
    pub grid_step: f32,
    /// Start cells keep this distance from the board edge
    pub spawn_margin: f32,
    /// Walk steps must stay this far inside the board edge
    pub walk_margin: f32,
    /// Full-board retry budget
    pub build_attempts: u32,
    /// Per-board snake build budget
    pub piece_attempts: u32,
    /// Minimum segments for an ordinary snake
    pub min_segments: usize,
    /// Chance per step that an oversized snake reshuffles its turn order,
    /// producing looser wrap-around shapes
    pub loose_shuffle_chance: f64,
    /// Extreme tier accepts a board at this fraction of the target count.
    /// Tier-specific policy: full density rarely fits at 25 snakes.
    pub extreme_fill: f32,
    /// Titan tier accepts a board with this many snakes. Tier-specific
    /// policy: two oversized snakes crowd out most of the target count.
    pub titan_min_count: usize,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            board_size: crate::consts::BOARD_SIZE,
            grid_step: crate::consts::GRID_STEP,
            spawn_margin: crate::consts::SPAWN_MARGIN,
            walk_margin: crate::consts::WALK_MARGIN,
            build_attempts: 1000,
            piece_attempts: 400,
            min_segments: 4,
            loose_shuffle_chance: 0.3,
            extreme_fill: 0.7,
            titan_min_count: 4,
        }
    }
}

impl GenConfig {
    /// Minimum accepted snake count for a tier
    pub fn min_count(&self, tier: DifficultyTier) -> usize {
        let target = tier.target_count();
        match tier {
            DifficultyTier::Extreme => (target as f32 * self.extreme_fill).ceil() as usize,
            DifficultyTier::Titan => self.titan_min_count,
            _ => target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_from_level() {
        assert_eq!(DifficultyTier::from_level(1), DifficultyTier::Normal);
        assert_eq!(DifficultyTier::from_level(5), DifficultyTier::Normal);
        assert_eq!(DifficultyTier::from_level(6), DifficultyTier::Medium);
        assert_eq!(DifficultyTier::from_level(11), DifficultyTier::Hard);
        assert_eq!(DifficultyTier::from_level(16), DifficultyTier::Extreme);
        assert_eq!(DifficultyTier::from_level(21), DifficultyTier::Titan);
        assert_eq!(DifficultyTier::from_level(30), DifficultyTier::Titan);
    }

    #[test]
    fn test_min_count_policy() {
        let config = GenConfig::default();
        assert_eq!(config.min_count(DifficultyTier::Normal), 5);
        assert_eq!(config.min_count(DifficultyTier::Hard), 14);
        // 18 * 0.7 = 12.6, rounded up
        assert_eq!(config.min_count(DifficultyTier::Extreme), 13);
        assert_eq!(config.min_count(DifficultyTier::Titan), 4);
    }

    #[test]
    fn test_titan_segments_scale_with_level() {
        assert_eq!(DifficultyTier::titan_segments(21), 41);
        assert_eq!(DifficultyTier::titan_segments(30), 49);
        assert!(DifficultyTier::titan_segments(25) > DifficultyTier::titan_segments(21));
    }
}
