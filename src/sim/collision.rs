//! Collision detection between the player and obstacles
//!
//! Both sides use axis-aligned boxes shrunk from the sprite so near misses
//! stay near misses. Overlap is strict: boxes that only share an edge do
//! not collide.

use glam::Vec2;

use super::state::{Obstacle, Player};
use crate::consts::{OBSTACLE_HITBOX_INSET, PLAYER_HITBOX_INSET, PLAYER_WIDTH};

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    /// Shrink by `margin` on every side
    pub fn inset(&self, margin: f32) -> Self {
        Self {
            min: self.min + Vec2::splat(margin),
            size: self.size - Vec2::splat(2.0 * margin),
        }
    }

    /// Strict overlap test; touching edges is not an overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// Player hitbox for the current pose. Ducking shortens the box from the
/// bottom; the top stays at the sprite top.
pub fn player_hitbox(player: &Player) -> Rect {
    Rect::new(player.pos.x, player.pos.y, PLAYER_WIDTH, player.height()).inset(PLAYER_HITBOX_INSET)
}

pub fn obstacle_hitbox(obstacle: &Obstacle) -> Rect {
    Rect::new(
        obstacle.pos.x,
        obstacle.pos.y,
        obstacle.size.x,
        obstacle.size.y,
    )
    .inset(OBSTACLE_HITBOX_INSET)
}

/// Index of the first obstacle touching the player, if any
pub fn first_hit(player: &Player, obstacles: &[Obstacle]) -> Option<usize> {
    let hitbox = player_hitbox(player);
    obstacles
        .iter()
        .position(|obstacle| hitbox.overlaps(&obstacle_hitbox(obstacle)))
}
