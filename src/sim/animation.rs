//! Chain-follow exit animation
//!
//! Slides a snake off the board while preserving its segment lengths: the
//! head advances along the heading at a fixed speed, and each trailing point
//! is pulled toward its already-updated leader by exactly the distance the
//! segment exceeds its rest length. The tail straightens naturally instead
//! of translating rigidly, and no segment ever stretches past the length it
//! had when the move was accepted.

use glam::Vec2;

use super::snake::Snake;
use crate::consts::{BOARD_SIZE, EXIT_MARGIN, EXIT_SPEED};

/// Per-move animation state: the rest-length table captured the instant the
/// snake was selected. Discarded when the snake finishes exiting.
#[derive(Debug, Clone)]
pub struct ExitAnimation {
    rest_lengths: Vec<f32>,
}

impl ExitAnimation {
    /// Capture the rest lengths of a snake about to exit
    pub fn begin(snake: &Snake) -> Self {
        Self {
            rest_lengths: snake.rest_lengths(),
        }
    }

    /// Advance the snake by one frame. Returns true once every point lies
    /// outside the play area plus the exit margin.
    pub fn step(&self, snake: &mut Snake, dt: f32) -> bool {
        let head_index = snake.points.len() - 1;

        // Head moves a fixed distance along the heading
        snake.points[head_index] += snake.heading.delta() * EXIT_SPEED * dt;

        // Each follower chases its (already updated) leader, moving only by
        // the excess over the segment's rest length
        for i in (0..head_index).rev() {
            let leader = snake.points[i + 1];
            let follower = snake.points[i];
            let offset = leader - follower;
            let dist = offset.length();
            let rest = self.rest_lengths[i];
            if dist > rest {
                snake.points[i] = follower + offset * ((dist - rest) / dist);
            }
        }

        fully_off_board(&snake.points)
    }
}

/// Whether every point is outside the board plus the exit margin
pub fn fully_off_board(points: &[Vec2]) -> bool {
    points.iter().all(|p| {
        p.x < -EXIT_MARGIN
            || p.x > BOARD_SIZE + EXIT_MARGIN
            || p.y < -EXIT_MARGIN
            || p.y > BOARD_SIZE + EXIT_MARGIN
    })
}
