//! Game state and lifecycle transitions
//!
//! Everything the loop mutates lives in `GameState`; there are no globals.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::obstacle::{Obstacle, ObstacleSet};
use super::player::Player;
use crate::consts::{FIELD_HEIGHT, FIELD_MAX_WIDTH};
use crate::tuning::{Tuning, TuningError};

/// Undrained events kept before the oldest are dropped
pub const MAX_PENDING_EVENTS: usize = 256;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the first start request
    Idle,
    /// Active gameplay
    Running,
    /// Player hit an obstacle
    GameOver,
    /// Connectivity was lost mid-run; not scored, needs a fresh start
    Suspended,
}

/// Notifications for the UI layer, drained once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Started,
    ScoreChanged(u64),
    GameOver { final_score: u64 },
    Suspended,
}

/// Playfield dimensions; the floor is the bottom edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: FIELD_MAX_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

impl Field {
    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.height
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub(crate) tuning: Tuning,
    pub field: Field,
    pub phase: GamePhase,
    /// Frames simulated since the last start
    pub frames: u64,
    pub score: u64,
    /// Current scroll speed (pixels/frame)
    pub speed: f32,
    pub player: Player,
    pub obstacles: ObstacleSet,
    /// Score captured on the last game over
    pub final_score: Option<u64>,
    /// Bounded; callers that never drain only lose the oldest entries
    events: VecDeque<GameEvent>,
}

impl GameState {
    /// Create an idle game with the given seed; the tuning is validated first
    pub fn new(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        let field = Field::default();
        Ok(Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: Player::new(&tuning, field.floor_y()),
            speed: tuning.initial_speed,
            tuning,
            field,
            phase: GamePhase::Idle,
            frames: 0,
            score: 0,
            obstacles: ObstacleSet::new(),
            final_score: None,
            events: VecDeque::new(),
        })
    }

    /// Balance parameters of this game (validated on construction)
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Begin a fresh run from any non-running phase
    ///
    /// Returns false (and changes nothing) if a run is already in progress.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            log::info!("Start ignored: run already in progress");
            return false;
        }

        self.score = 0;
        self.frames = 0;
        self.speed = self.tuning.initial_speed;
        self.obstacles.clear();
        self.player.reset(self.field.floor_y());
        self.final_score = None;
        self.phase = GamePhase::Running;

        self.push_event(GameEvent::Started);
        self.push_event(GameEvent::ScoreChanged(0));
        log::info!("Run started (seed {})", self.seed);
        true
    }

    /// End the run after a collision
    pub fn game_over(&mut self) {
        if !self.is_running() {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.final_score = Some(self.score);
        self.push_event(GameEvent::GameOver {
            final_score: self.score,
        });
        log::info!(
            "Game over: score {} after {} frames (speed {:.2})",
            self.score,
            self.frames,
            self.speed
        );
    }

    /// Halt a run because connectivity dropped; no score is recorded
    pub fn connectivity_lost(&mut self) {
        if !self.is_running() {
            return;
        }
        self.phase = GamePhase::Suspended;
        self.push_event(GameEvent::Suspended);
        log::info!("Run suspended (offline) at score {}", self.score);
    }

    /// Follow a canvas resize; obstacles already on the field stay where they are
    pub fn set_field_width(&mut self, width: f32) {
        if width > 0.0 && width.is_finite() {
            self.field.width = width;
        }
    }

    /// Take all events emitted since the last drain, oldest first
    ///
    /// At most `MAX_PENDING_EVENTS` are kept between drains.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        if self.events.len() == MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Spawn an obstacle at the right edge using the run's rng
    pub(crate) fn spawn_obstacle(&mut self) -> &Obstacle {
        let floor_y = self.field.floor_y();
        self.obstacles
            .spawn(&self.tuning, self.field.width, floor_y, &mut self.rng)
    }
}
