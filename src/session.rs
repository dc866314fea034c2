//! Session orchestration around the simulation
//!
//! The browser layer talks to a `Session` only: it forwards start requests,
//! jump presses, connectivity changes and animation frames, and drains the
//! resulting events into the DOM. Nothing here touches web APIs, so the whole
//! lifecycle can be exercised natively.

use thiserror::Error;

use crate::platform::JumpLatch;
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use crate::tuning::{Tuning, TuningError};

/// Why a session request was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("you must be online to play")]
    Offline,
}

/// Game state plus the host-facing input and connectivity state
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    jump: JumpLatch,
    online: bool,
    autopilot: bool,
}

impl Session {
    /// Fails if the tuning does not validate
    pub fn new(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        let jump = JumpLatch::new(tuning.jump_window_ms);
        Ok(Self {
            state: GameState::new(seed, tuning)?,
            jump,
            online: true,
            autopilot: false,
        })
    }

    /// Read access for renderers and the HUD
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn is_online(&self) -> bool {
        self.online
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }

    /// Start (or restart) a run; refused while offline
    ///
    /// Returns true when a new run began, false when one was already running.
    pub fn request_start(&mut self) -> Result<bool, SessionError> {
        if !self.online {
            log::warn!("Start rejected: offline");
            return Err(SessionError::Offline);
        }
        self.jump.consume();
        Ok(self.state.start())
    }

    /// Latch a jump press; ignored unless a run is in progress
    pub fn request_jump(&mut self, now_ms: f64) {
        if self.state.is_running() {
            self.jump.press(now_ms);
        }
    }

    /// Follow the host's online/offline signal
    ///
    /// Going offline suspends a running game. Coming back never resumes it.
    pub fn set_online(&mut self, online: bool) {
        if self.online == online {
            return;
        }
        self.online = online;
        if online {
            log::info!("Back online");
        } else {
            log::warn!("Connection lost");
            self.state.connectivity_lost();
        }
    }

    pub fn toggle_autopilot(&mut self) -> bool {
        self.autopilot = !self.autopilot;
        log::info!("Autopilot: {}", self.autopilot);
        self.autopilot
    }

    /// Canvas was resized
    pub fn set_field_width(&mut self, width: f32) {
        self.state.set_field_width(width);
    }

    /// Simulate one animation frame
    ///
    /// Returns whether the host should request another frame.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        if !self.state.is_running() {
            return false;
        }

        let input = TickInput {
            jump: self.jump.is_held(now_ms),
            autopilot: self.autopilot,
        };
        let outcome = tick(&mut self.state, &input);
        if outcome.jumped {
            self.jump.consume();
        }

        self.state.is_running()
    }

    /// Events for the score display and screen toggling
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }
}
