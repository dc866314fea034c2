//! The player square and its jump/gravity physics

use glam::Vec2;

use super::collision::Aabb;
use crate::tuning::Tuning;

/// The player-controlled square
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Top-left corner (y grows downward)
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (negative = upward)
    pub dy: f32,
    pub jump_force: f32,
    pub gravity: f32,
    pub grounded: bool,
}

impl Player {
    /// Create a player standing on the floor
    pub fn new(tuning: &Tuning, floor_y: f32) -> Self {
        let size = Vec2::new(tuning.player_width, tuning.player_height);
        Self {
            pos: Vec2::new(tuning.player_x, floor_y - size.y),
            size,
            dy: 0.0,
            jump_force: tuning.jump_force,
            gravity: tuning.gravity,
            grounded: true,
        }
    }

    /// Put the player back on the floor at rest
    pub fn reset(&mut self, floor_y: f32) {
        self.pos.y = floor_y - self.size.y;
        self.dy = 0.0;
        self.grounded = true;
    }

    /// Apply the jump impulse if requested and standing on the floor
    pub fn try_jump(&mut self, jump_requested: bool) -> bool {
        if jump_requested && self.grounded {
            self.dy = -self.jump_force;
            self.grounded = false;
            true
        } else {
            false
        }
    }

    /// Move by the current velocity, then apply gravity or land on the floor
    pub fn integrate(&mut self, floor_y: f32) {
        self.pos.y += self.dy;

        if self.pos.y + self.size.y < floor_y {
            self.dy += self.gravity;
            self.grounded = false;
        } else {
            self.pos.y = floor_y - self.size.y;
            self.dy = 0.0;
            self.grounded = true;
        }
    }

    /// One physics step. Returns true if a jump started this step.
    pub fn update(&mut self, jump_requested: bool, floor_y: f32) -> bool {
        let jumped = self.try_jump(jump_requested);
        self.integrate(floor_y);
        jumped
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    /// Height of the player's bottom edge above the floor
    #[inline]
    pub fn altitude(&self, floor_y: f32) -> f32 {
        floor_y - (self.pos.y + self.size.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const FLOOR: f32 = 400.0;

    fn player() -> Player {
        Player::new(&Tuning::default(), FLOOR)
    }

    #[test]
    fn test_grounded_without_jump_stays_put() {
        let mut p = player();
        for _ in 0..10 {
            assert!(!p.update(false, FLOOR));
            assert_eq!(p.dy, 0.0);
            assert_eq!(p.pos.y, FLOOR - p.size.y);
            assert!(p.grounded);
        }
    }

    #[test]
    fn test_jump_impulse() {
        let mut p = player();
        assert!(p.try_jump(true));
        assert_eq!(p.dy, -p.jump_force);
        assert!(!p.grounded);
    }

    #[test]
    fn test_jump_step_applies_gravity_after_moving() {
        let mut p = player();
        assert!(p.update(true, FLOOR));
        assert_eq!(p.pos.y, FLOOR - p.size.y - p.jump_force);
        assert!((p.dy - (-p.jump_force + p.gravity)).abs() < 1e-6);
        assert!(!p.grounded);
    }

    #[test]
    fn test_no_double_jump_in_air() {
        let mut p = player();
        p.update(true, FLOOR);
        let dy = p.dy;
        assert!(!p.update(true, FLOOR));
        assert!((p.dy - (dy + p.gravity)).abs() < 1e-6);
    }

    #[test]
    fn test_jump_arc_lands() {
        let mut p = player();
        p.update(true, FLOOR);
        let mut ticks = 1;
        while !p.grounded {
            p.update(false, FLOOR);
            ticks += 1;
            assert!(ticks < 100, "player never landed");
        }
        assert_eq!(p.pos.y, FLOOR - p.size.y);
        assert_eq!(p.dy, 0.0);
        // 12 up, 0.6 gravity: roughly 41 frames of air time
        assert!((38..=44).contains(&ticks));
    }

    #[test]
    fn test_reset_puts_player_on_floor() {
        let mut p = player();
        p.update(true, FLOOR);
        p.update(false, FLOOR);
        p.reset(FLOOR);
        assert!(p.grounded);
        assert_eq!(p.dy, 0.0);
        assert_eq!(p.altitude(FLOOR), 0.0);
    }

    proptest! {
        #[test]
        fn prop_never_below_floor(jumps in proptest::collection::vec(any::<bool>(), 1..300)) {
            let mut p = player();
            for jump in jumps {
                p.update(jump, FLOOR);
                prop_assert!(p.pos.y + p.size.y <= FLOOR);
                if p.grounded {
                    prop_assert_eq!(p.dy, 0.0);
                }
            }
        }
    }
}
