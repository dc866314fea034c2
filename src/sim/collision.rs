//! Collision detection between the player and obstacles
//!
//! Everything in the runner is an axis-aligned box, so collision reduces to a
//! strict AABB overlap test. Touching edges do not count as a hit.

use glam::Vec2;

use super::obstacle::Obstacle;
use super::player::Player;

/// Axis-aligned bounding box (screen space, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict overlap: boxes sharing only an edge are apart
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }
}

/// First live obstacle overlapping the player, if any
pub fn first_collision<'a>(player: &Player, obstacles: &'a [Obstacle]) -> Option<&'a Obstacle> {
    let bounds = player.bounds();
    obstacles
        .iter()
        .filter(|o| !o.marked_for_deletion)
        .find(|o| bounds.overlaps(&o.bounds()))
}

/// True when the player touches any live obstacle (any hit is fatal)
pub fn check(player: &Player, obstacles: &[Obstacle]) -> bool {
    first_collision(player, obstacles).is_some()
}
