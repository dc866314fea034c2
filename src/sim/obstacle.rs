//! Obstacles and their spawn/scroll/removal lifecycle

use glam::Vec2;
use rand::Rng;

use super::collision::Aabb;
use crate::tuning::Tuning;

/// A block standing on the floor, scrolling left
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Fully off-screen; skipped by drawing and collision, removed on reap
    pub marked_for_deletion: bool,
}

impl Obstacle {
    /// Create an obstacle at `x` resting on the floor
    pub fn new(id: u32, x: f32, floor_y: f32, size: Vec2) -> Self {
        Self {
            id,
            pos: Vec2::new(x, floor_y - size.y),
            size,
            marked_for_deletion: false,
        }
    }

    /// Scroll left by `speed` and mark once the right edge leaves the field
    pub fn advance(&mut self, speed: f32) {
        self.pos.x -= speed;
        if self.pos.x + self.size.x < 0.0 {
            self.marked_for_deletion = true;
        }
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// Active obstacles, oldest first
#[derive(Debug, Clone)]
pub struct ObstacleSet {
    obstacles: Vec<Obstacle>,
    next_id: u32,
}

impl Default for ObstacleSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ObstacleSet {
    pub fn new() -> Self {
        Self {
            obstacles: Vec::new(),
            next_id: 1,
        }
    }

    /// Push a new obstacle at the right edge with a randomized size
    pub fn spawn<R: Rng + ?Sized>(
        &mut self,
        tuning: &Tuning,
        field_width: f32,
        floor_y: f32,
        rng: &mut R,
    ) -> &Obstacle {
        let width = tuning.obstacle_width.sample(rng);
        let height = tuning.obstacle_height.sample(rng);

        let id = self.next_id;
        self.next_id += 1;

        self.obstacles
            .push(Obstacle::new(id, field_width, floor_y, Vec2::new(width, height)));
        &self.obstacles[self.obstacles.len() - 1]
    }

    /// Scroll every obstacle left by `speed`
    pub fn advance_all(&mut self, speed: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.advance(speed);
        }
    }

    /// Drop every marked obstacle, returning how many were removed
    pub fn reap(&mut self) -> u32 {
        let before = self.obstacles.len();
        self.obstacles.retain(|o| !o.marked_for_deletion);
        (before - self.obstacles.len()) as u32
    }

    /// Obstacles that are still on the field
    pub fn active(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter().filter(|o| !o.marked_for_deletion)
    }

    pub fn as_slice(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Remove everything (ids keep counting up)
    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    /// Insert a prepared obstacle (for scripted scenarios and tests)
    pub fn push(&mut self, mut obstacle: Obstacle) {
        obstacle.id = self.next_id;
        self.next_id += 1;
        self.obstacles.push(obstacle);
    }
}
