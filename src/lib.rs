//! Neon Runner - A browser endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, obstacles, collisions, scoring)
//! - `tuning`: Data-driven game balance
//! - `platform`: Browser/native platform abstraction (input latching)
//! - `session`: Lifecycle orchestration around the simulation (start, offline, frames)
//! - `renderer`: Read-only scene building and Canvas 2D painting

pub mod platform;
pub mod renderer;
pub mod session;
pub mod sim;
pub mod tuning;

pub use session::{Session, SessionError};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Maximum playfield width (canvas is narrower on small screens)
    pub const FIELD_MAX_WIDTH: f32 = 800.0;
    /// Horizontal margin subtracted from the viewport on narrow screens
    pub const FIELD_MARGIN: f32 = 20.0;
    /// Playfield height; the floor sits at the bottom edge
    pub const FIELD_HEIGHT: f32 = 400.0;

    /// Player defaults
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_SIZE: f32 = 30.0;
    pub const JUMP_FORCE: f32 = 12.0;
    pub const GRAVITY: f32 = 0.6;

    /// Speed ramp (pixels per frame)
    pub const INITIAL_SPEED: f32 = 5.0;
    pub const SPEED_INCREMENT: f32 = 0.05;

    /// Obstacle spawning
    pub const SPAWN_INTERVAL_FRAMES: u64 = 100;
    pub const OBSTACLE_MIN_WIDTH: f32 = 30.0;
    pub const OBSTACLE_MAX_WIDTH: f32 = 50.0;
    pub const OBSTACLE_MIN_HEIGHT: f32 = 30.0;
    pub const OBSTACLE_MAX_HEIGHT: f32 = 60.0;

    /// How long a jump press stays latched (ms)
    pub const JUMP_WINDOW_MS: f64 = 100.0;

    /// Autopilot jumps once the gap to the next obstacle is at most this (pixels)
    pub const AUTOPILOT_TRIGGER_GAP: f32 = 60.0;
}

/// Playfield width for a given viewport width
#[inline]
pub fn field_width_for_viewport(viewport_width: f32) -> f32 {
    if viewport_width > consts::FIELD_MAX_WIDTH {
        consts::FIELD_MAX_WIDTH
    } else {
        (viewport_width - consts::FIELD_MARGIN).max(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_width_for_viewport() {
        assert_eq!(field_width_for_viewport(1920.0), 800.0);
        assert_eq!(field_width_for_viewport(800.0), 780.0);
        assert_eq!(field_width_for_viewport(375.0), 355.0);
        assert_eq!(field_width_for_viewport(5.0), 1.0);
    }
}
