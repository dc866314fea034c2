//! Per-frame simulation step
//!
//! Order within a frame is fixed: player physics, obstacle spawn/scroll/reap,
//! then the collision check.

use super::collision;
use super::state::{GameEvent, GameState};

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// A jump press is latched
    pub jump: bool,
    /// Demo mode - jump automatically ahead of obstacles
    pub autopilot: bool,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// A jump impulse was applied (the input latch can be consumed)
    pub jumped: bool,
    /// Obstacle spawned this frame
    pub spawned: bool,
    /// Obstacles that left the field (one point each)
    pub scored: u32,
    /// Player hit an obstacle; the run is over
    pub collided: bool,
}

/// Advance the game by one frame. Does nothing unless the game is running.
pub fn tick(state: &mut GameState, input: &TickInput) -> TickOutcome {
    let mut outcome = TickOutcome::default();
    if !state.is_running() {
        return outcome;
    }

    let floor_y = state.field.floor_y();
    let jump = input.jump || (input.autopilot && autopilot_wants_jump(state));
    outcome.jumped = state.player.update(jump, floor_y);

    outcome.spawned = spawn_if_due(state);
    state.obstacles.advance_all(state.speed);
    outcome.scored = reap(state);

    if let Some(hit) = collision::first_collision(&state.player, state.obstacles.as_slice()) {
        log::debug!(
            "Player hit obstacle {} at x={:.1} (frame {})",
            hit.id,
            hit.pos.x,
            state.frames
        );
        outcome.collided = true;
        state.game_over();
    }

    state.frames += 1;
    outcome
}

/// Spawn an obstacle on every spawn-interval frame and ramp the speed up
pub fn spawn_if_due(state: &mut GameState) -> bool {
    if state.frames % state.tuning.spawn_interval != 0 {
        return false;
    }

    let (id, size) = {
        let spawned = state.spawn_obstacle();
        (spawned.id, spawned.size)
    };

    state.speed = state
        .tuning
        .clamp_speed(state.speed + state.tuning.speed_increment);
    log::trace!(
        "Spawned obstacle {} ({:.0}x{:.0}), speed now {:.2}",
        id,
        size.x,
        size.y,
        state.speed
    );
    true
}

/// Remove obstacles that left the field, one point each
fn reap(state: &mut GameState) -> u32 {
    let removed = state.obstacles.reap();
    for _ in 0..removed {
        state.score += 1;
        state.push_event(GameEvent::ScoreChanged(state.score));
    }
    removed
}

/// Jump when grounded and the next obstacle ahead is within the trigger gap
fn autopilot_wants_jump(state: &GameState) -> bool {
    let player = &state.player;
    if !player.grounded {
        return false;
    }
    let front = player.pos.x + player.size.x;
    state
        .obstacles
        .active()
        .filter(|o| o.pos.x >= front)
        .map(|o| o.pos.x - front)
        .fold(None, |nearest: Option<f32>, gap| {
            Some(nearest.map_or(gap, |n| n.min(gap)))
        })
        .is_some_and(|gap| gap <= state.tuning.autopilot_trigger_gap)
}
