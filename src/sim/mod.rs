//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per rendered frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (obstacles oldest first)
//! - No rendering or platform dependencies

pub mod collision;
pub mod obstacle;
pub mod player;
pub mod state;
pub mod tick;

pub use collision::{Aabb, check, first_collision};
pub use obstacle::{Obstacle, ObstacleSet};
pub use player::Player;
pub use state::{Field, GameEvent, GamePhase, GameState};
pub use tick::{TickInput, TickOutcome, spawn_if_due, tick};
