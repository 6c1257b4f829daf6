//! Deterministic puzzle core
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by snake ID)
//! - No rendering or platform dependencies

pub mod animation;
pub mod collision;
pub mod generator;
pub mod occupancy;
pub mod snake;
pub mod solver;
pub mod state;
pub mod tick;

pub use animation::ExitAnimation;
pub use collision::collides;
pub use generator::LevelGenerator;
pub use occupancy::OccupancyGrid;
pub use snake::{Heading, Snake};
pub use solver::{find_hintable, is_solvable};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
