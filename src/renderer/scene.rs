//! Scene building: simulation state to a flat list of glowing rectangles
//!
//! Pure and read-only, so drawing can never disturb the simulation.

use glam::Vec2;

use crate::sim::GameState;

/// Player fill (neon cyan)
pub const PLAYER_COLOR: &str = "#00f3ff";
pub const PLAYER_GLOW: f32 = 15.0;
/// Obstacle fill (neon magenta)
pub const OBSTACLE_COLOR: &str = "#ff00ff";
pub const OBSTACLE_GLOW: f32 = 10.0;

/// One filled rectangle with a neon glow
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRect {
    pub pos: Vec2,
    pub size: Vec2,
    /// CSS color string
    pub color: &'static str,
    /// Shadow blur radius in pixels
    pub glow: f32,
}

/// Everything to draw this frame, back to front
pub fn scene(state: &GameState) -> Vec<DrawRect> {
    let mut rects = Vec::with_capacity(state.obstacles.len() + 1);

    rects.push(DrawRect {
        pos: state.player.pos,
        size: state.player.size,
        color: PLAYER_COLOR,
        glow: PLAYER_GLOW,
    });

    rects.extend(state.obstacles.active().map(|o| DrawRect {
        pos: o.pos,
        size: o.size,
        color: OBSTACLE_COLOR,
        glow: OBSTACLE_GLOW,
    }));

    rects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Obstacle;
    use crate::tuning::Tuning;

    #[test]
    fn test_scene_player_first_then_live_obstacles() {
        let mut state = GameState::new(3, Tuning::default()).unwrap();
        let floor_y = state.field.floor_y();
        state
            .obstacles
            .push(Obstacle::new(0, 300.0, floor_y, Vec2::new(40.0, 50.0)));
        let mut gone = Obstacle::new(0, -100.0, floor_y, Vec2::new(40.0, 50.0));
        gone.marked_for_deletion = true;
        state.obstacles.push(gone);

        let rects = scene(&state);
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0].color, PLAYER_COLOR);
        assert_eq!(rects[0].pos, state.player.pos);
        assert_eq!(rects[1].color, OBSTACLE_COLOR);
        assert_eq!(rects[1].pos.x, 300.0);
    }
}
