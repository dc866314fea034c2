//! Game balance parameters
//!
//! Every physics and spawning constant lives here so balance can be adjusted
//! without touching the simulation. Defaults reproduce the classic feel.
//! Browser builds can override them from LocalStorage.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Why a tuning was rejected
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("invalid tuning JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },
    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: f64 },
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} range is empty or inverted ({min}..{max})")]
    InvalidRange {
        field: &'static str,
        min: f32,
        max: f32,
    },
    #[error("spawn_interval must be at least one frame")]
    ZeroSpawnInterval,
}

/// Uniform size range `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeRange {
    pub min: f32,
    pub max: f32,
}

impl SizeRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Draw a value from the range; only valid (non-empty) ranges may be sampled
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        rng.random_range(self.min..self.max)
    }

    fn validate(&self, field: &'static str) -> Result<(), TuningError> {
        check_positive(field, self.min)?;
        check_finite(field, self.max)?;
        if self.min >= self.max {
            return Err(TuningError::InvalidRange {
                field,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Balance parameters for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tuning {
    // === Player ===
    /// Fixed horizontal position of the player's left edge
    pub player_x: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Upward velocity applied on jump (pixels/frame)
    pub jump_force: f32,
    /// Downward acceleration while airborne (pixels/frame²)
    pub gravity: f32,

    // === Speed ramp ===
    pub initial_speed: f32,
    /// Added to the speed every time an obstacle spawns
    pub speed_increment: f32,
    /// Optional ceiling for the ramp (uncapped when absent)
    pub max_speed: Option<f32>,

    // === Obstacles ===
    /// Frames between spawns
    pub spawn_interval: u64,
    pub obstacle_width: SizeRange,
    pub obstacle_height: SizeRange,

    // === Input ===
    /// How long a jump press stays latched (ms)
    pub jump_window_ms: f64,
    /// Autopilot jumps once the gap to the next obstacle is at most this
    pub autopilot_trigger_gap: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_x: PLAYER_X,
            player_width: PLAYER_SIZE,
            player_height: PLAYER_SIZE,
            jump_force: JUMP_FORCE,
            gravity: GRAVITY,

            initial_speed: INITIAL_SPEED,
            speed_increment: SPEED_INCREMENT,
            max_speed: None,

            spawn_interval: SPAWN_INTERVAL_FRAMES,
            obstacle_width: SizeRange::new(OBSTACLE_MIN_WIDTH, OBSTACLE_MAX_WIDTH),
            obstacle_height: SizeRange::new(OBSTACLE_MIN_HEIGHT, OBSTACLE_MAX_HEIGHT),

            jump_window_ms: JUMP_WINDOW_MS,
            autopilot_trigger_gap: AUTOPILOT_TRIGGER_GAP,
        }
    }
}

fn check_finite(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(TuningError::NonFinite { field })
    }
}

fn check_positive(field: &'static str, value: f32) -> Result<(), TuningError> {
    check_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(TuningError::NonPositive {
            field,
            value: value as f64,
        })
    }
}

fn check_non_negative(field: &'static str, value: f32) -> Result<(), TuningError> {
    check_finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(TuningError::Negative {
            field,
            value: value as f64,
        })
    }
}

impl Tuning {
    /// Check every parameter; sizes must be positive and the speed ramp must
    /// never be able to decrease
    pub fn validate(&self) -> Result<(), TuningError> {
        check_non_negative("player_x", self.player_x)?;
        check_positive("player_width", self.player_width)?;
        check_positive("player_height", self.player_height)?;
        check_positive("jump_force", self.jump_force)?;
        check_positive("gravity", self.gravity)?;

        check_non_negative("initial_speed", self.initial_speed)?;
        check_non_negative("speed_increment", self.speed_increment)?;
        if let Some(max_speed) = self.max_speed {
            check_finite("max_speed", max_speed)?;
            if max_speed < self.initial_speed {
                return Err(TuningError::InvalidRange {
                    field: "speed",
                    min: self.initial_speed,
                    max: max_speed,
                });
            }
        }

        if self.spawn_interval == 0 {
            return Err(TuningError::ZeroSpawnInterval);
        }
        self.obstacle_width.validate("obstacle_width")?;
        self.obstacle_height.validate("obstacle_height")?;

        if !self.jump_window_ms.is_finite() {
            return Err(TuningError::NonFinite {
                field: "jump_window_ms",
            });
        }
        if self.jump_window_ms <= 0.0 {
            return Err(TuningError::NonPositive {
                field: "jump_window_ms",
                value: self.jump_window_ms,
            });
        }
        check_non_negative("autopilot_trigger_gap", self.autopilot_trigger_gap)?;
        Ok(())
    }

    /// Parse and validate a JSON tuning (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Apply the optional speed ceiling
    #[inline]
    pub fn clamp_speed(&self, speed: f32) -> f32 {
        match self.max_speed {
            Some(max) => speed.min(max),
            None => speed,
        }
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "neon_runner_tuning";

    /// Load tuning overrides from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning overrides from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring stored tuning: {}", e),
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_default_is_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_from_json_partial_override() {
        let tuning = Tuning::from_json(r#"{ "spawn_interval": 80, "max_speed": 12.0 }"#).unwrap();
        assert_eq!(tuning.spawn_interval, 80);
        assert_eq!(tuning.max_speed, Some(12.0));
        assert_eq!(tuning.gravity, GRAVITY);
    }

    #[test]
    fn test_from_json_rejects_unknown_field() {
        let err = Tuning::from_json(r#"{ "lives": 3 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Json(_)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let tuning = Tuning {
            spawn_interval: 0,
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(TuningError::ZeroSpawnInterval)));

        let tuning = Tuning {
            player_width: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::NonPositive { field: "player_width", .. })
        ));

        let tuning = Tuning {
            obstacle_height: SizeRange::new(60.0, 30.0),
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::InvalidRange { field: "obstacle_height", .. })
        ));

        let tuning = Tuning {
            speed_increment: -0.1,
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(TuningError::Negative { .. })));

        let tuning = Tuning {
            max_speed: Some(4.0),
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(TuningError::InvalidRange { .. })));

        let tuning = Tuning {
            gravity: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(TuningError::NonFinite { .. })));
    }

    #[test]
    fn test_clamp_speed() {
        let uncapped = Tuning::default();
        assert_eq!(uncapped.clamp_speed(1000.0), 1000.0);

        let capped = Tuning {
            max_speed: Some(8.0),
            ..Default::default()
        };
        assert_eq!(capped.clamp_speed(7.5), 7.5);
        assert_eq!(capped.clamp_speed(9.0), 8.0);
    }

    #[test]
    fn test_size_range_sample() {
        let mut rng = Pcg32::seed_from_u64(7);
        let range = SizeRange::new(30.0, 50.0);
        for _ in 0..1000 {
            let v = range.sample(&mut rng);
            assert!((30.0..50.0).contains(&v));
        }
    }

    #[test]
    fn test_empty_size_range_rejected() {
        let err = Tuning::from_json(r#"{ "obstacle_width": { "min": 40.0, "max": 40.0 } }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            TuningError::InvalidRange { field: "obstacle_width", .. }
        ));
    }
}
