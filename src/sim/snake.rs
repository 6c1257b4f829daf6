//! Snake data model
//!
//! A snake is an ordered chain of grid-aligned points from tail to head.
//! Every consecutive pair shares one axis (a pure horizontal or vertical
//! run); the head is the last point and exits along `heading`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned heading of a snake's head
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// All headings, in a fixed order (shuffled by the path builder)
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Down, Heading::Left, Heading::Right];

    /// Unit step in screen coordinates (y grows downward)
    #[inline]
    pub fn delta(self) -> Vec2 {
        match self {
            Heading::Up => Vec2::new(0.0, -1.0),
            Heading::Down => Vec2::new(0.0, 1.0),
            Heading::Left => Vec2::new(-1.0, 0.0),
            Heading::Right => Vec2::new(1.0, 0.0),
        }
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Heading::Left | Heading::Right)
    }

    /// Quarter turn clockwise (screen coordinates)
    #[inline]
    pub fn turned_cw(self) -> Heading {
        match self {
            Heading::Up => Heading::Right,
            Heading::Right => Heading::Down,
            Heading::Down => Heading::Left,
            Heading::Left => Heading::Up,
        }
    }

    /// Quarter turn counterclockwise
    #[inline]
    pub fn turned_ccw(self) -> Heading {
        match self {
            Heading::Up => Heading::Left,
            Heading::Left => Heading::Down,
            Heading::Down => Heading::Right,
            Heading::Right => Heading::Up,
        }
    }

    /// Candidate order for the next walk step: turn with the coil first,
    /// then straight, then against the coil. Never reverses.
    pub fn turn_order(self, clockwise: bool) -> [Heading; 3] {
        if clockwise {
            [self.turned_cw(), self, self.turned_ccw()]
        } else {
            [self.turned_ccw(), self, self.turned_cw()]
        }
    }
}

/// One removable path piece on the board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snake {
    pub id: u32,
    /// Body points from tail to head, length >= 2
    pub points: Vec<Vec2>,
    /// Direction the head last moved and will exit along
    pub heading: Heading,
    /// Palette index (cosmetic, no logic role)
    pub color: u32,
}

impl Snake {
    pub fn new(id: u32, points: Vec<Vec2>, heading: Heading, color: u32) -> Self {
        Self {
            id,
            points,
            heading,
            color,
        }
    }

    /// The head point (last in the chain)
    #[inline]
    pub fn head(&self) -> Vec2 {
        self.points[self.points.len() - 1]
    }

    /// The tail point (first in the chain)
    #[inline]
    pub fn tail(&self) -> Vec2 {
        self.points[0]
    }

    /// Consecutive-point body segments, tail to head
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Euclidean length of each segment, captured for the exit animation
    pub fn rest_lengths(&self) -> Vec<f32> {
        self.points.windows(2).map(|w| (w[1] - w[0]).length()).collect()
    }
}
