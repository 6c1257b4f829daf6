//! Board generation
//!
//! Builds a difficulty-scaled, provably solvable board: snakes are grown one
//! at a time as coil-biased random walks over free grid cells, screened for
//! head-to-head deadlocks, and the finished set is accepted only once the
//! solvability check clears it. Budgets bound both the per-board snake loop
//! and the outer full-board retry loop; an exhausted budget yields an empty
//! board rather than an invalid one.

use glam::Vec2;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::occupancy::OccupancyGrid;
use super::snake::{Heading, Snake};
use super::solver::is_solvable;
use crate::consts::COLORS;
use crate::settings::{DifficultyTier, GenConfig};

/// Difficulty-scaled board generator with an injected random source
#[derive(Debug)]
pub struct LevelGenerator {
    config: GenConfig,
    rng: Pcg32,
    next_id: u32,
}

impl LevelGenerator {
    pub fn new(seed: u64) -> Self {
        Self::with_config(GenConfig::default(), seed)
    }

    pub fn with_config(config: GenConfig, seed: u64) -> Self {
        Self {
            config,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Generate the board for a level. Empty on a hard failure (budget
    /// exhausted); the caller must not enter play with an empty board.
    pub fn generate(&mut self, level_id: u32) -> Vec<Snake> {
        let tier = DifficultyTier::from_level(level_id);
        let target = tier.target_count();
        let min_count = self.config.min_count(tier);

        for attempt in 1..=self.config.build_attempts {
            let snakes = self.build_board(level_id, tier, target);
            if snakes.len() >= min_count && is_solvable(&snakes) {
                log::info!(
                    "level {level_id} ({}): {} snakes after {attempt} attempt(s)",
                    tier.as_str(),
                    snakes.len(),
                );
                return snakes;
            }
        }

        log::warn!(
            "level {level_id} ({}): generation budget exhausted",
            tier.as_str()
        );
        Vec::new()
    }

    /// One full board attempt: place snakes until the target count or the
    /// per-board budget runs out.
    fn build_board(&mut self, level_id: u32, tier: DifficultyTier, target: usize) -> Vec<Snake> {
        let mut snakes: Vec<Snake> = Vec::with_capacity(target);
        let mut occupancy = OccupancyGrid::new(self.config.grid_step);

        let mut piece_attempts = 0;
        while snakes.len() < target && piece_attempts < self.config.piece_attempts {
            piece_attempts += 1;

            let oversized = snakes.len() < tier.oversized_count();
            let target_segments = if oversized {
                DifficultyTier::titan_segments(level_id)
            } else {
                self.rng
                    .random_range(self.config.min_segments..tier.max_segments())
            };

            let Some((points, heading)) = self.build_path(&occupancy, target_segments, oversized)
            else {
                continue;
            };

            let color = self.rng.random_range(0..COLORS.len()) as u32;
            let candidate = Snake::new(self.next_id, points, heading, color);
            if head_to_head_conflict(&candidate, &snakes) {
                continue;
            }

            // Commit occupancy only for an accepted snake
            for (p1, p2) in candidate.segments() {
                occupancy.mark(p1, p2);
            }
            self.next_id += 1;
            snakes.push(candidate);
        }

        snakes
    }

    /// Grow one path as a biased random walk. Returns the points (tail to
    /// head) and the final heading, or None if no walkable path of at least
    /// two points exists from the chosen start.
    fn build_path(
        &mut self,
        occupancy: &OccupancyGrid,
        target_segments: usize,
        loose: bool,
    ) -> Option<(Vec<Vec2>, Heading)> {
        let start = self.random_start_cell();
        if !occupancy.is_free(start) {
            return None;
        }

        // Coil orientation fixed for the whole piece - gives the spiral bias
        let clockwise = self.rng.random_bool(0.5);

        let mut points = vec![start];
        // Cells of this piece, so the walk cannot cross itself; the global
        // grid is only marked once the piece is accepted.
        let mut own = OccupancyGrid::new(self.config.grid_step);
        own.mark(start, start);
        let mut last_heading: Option<Heading> = None;

        for _ in 0..target_segments {
            let order: Vec<Heading> = match last_heading {
                None => {
                    let mut all = Heading::ALL;
                    all.shuffle(&mut self.rng);
                    all.to_vec()
                }
                Some(heading) => {
                    let mut turns = heading.turn_order(clockwise);
                    if loose && self.rng.random_bool(self.config.loose_shuffle_chance) {
                        turns.shuffle(&mut self.rng);
                    }
                    turns.to_vec()
                }
            };

            let current = points[points.len() - 1];
            let mut advanced = false;
            for heading in order {
                let next = current + heading.delta() * self.config.grid_step;
                if !self.in_walk_bounds(next) {
                    continue;
                }
                if !occupancy.is_clear(current, next) || !own.is_free(next) {
                    continue;
                }
                own.mark(next, next);
                points.push(next);
                last_heading = Some(heading);
                advanced = true;
                break;
            }
            if !advanced {
                // Dead end: the piece stops early (may end shorter than its
                // target, but is only kept with at least two points)
                break;
            }
        }

        let heading = last_heading?;
        Some((points, heading))
    }

    /// Random grid cell inside the spawn margin
    fn random_start_cell(&mut self) -> Vec2 {
        let lanes =
            ((self.config.board_size - 2.0 * self.config.spawn_margin) / self.config.grid_step)
                as i32;
        let x = self.config.spawn_margin
            + self.rng.random_range(0..lanes) as f32 * self.config.grid_step;
        let y = self.config.spawn_margin
            + self.rng.random_range(0..lanes) as f32 * self.config.grid_step;
        Vec2::new(x, y)
    }

    #[inline]
    fn in_walk_bounds(&self, p: Vec2) -> bool {
        let lo = self.config.walk_margin;
        let hi = self.config.board_size - self.config.walk_margin;
        p.x >= lo && p.x <= hi && p.y >= lo && p.y <= hi
    }
}

/// Reject a pair of heads facing each other on one row or column: neither
/// snake can ever exit first, so the pair would deadlock the board.
pub fn head_to_head_conflict(candidate: &Snake, accepted: &[Snake]) -> bool {
    let new_head = candidate.head();
    let new_dir = candidate.heading;

    for other in accepted {
        let head = other.head();
        let dir = other.heading;
        if new_head.y == head.y {
            if new_dir == Heading::Right && dir == Heading::Left && new_head.x < head.x {
                return true;
            }
            if new_dir == Heading::Left && dir == Heading::Right && new_head.x > head.x {
                return true;
            }
        }
        if new_head.x == head.x {
            if new_dir == Heading::Down && dir == Heading::Up && new_head.y < head.y {
                return true;
            }
            if new_dir == Heading::Up && dir == Heading::Down && new_head.y > head.y {
                return true;
            }
        }
    }
    false
}
