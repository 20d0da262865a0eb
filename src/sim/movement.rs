//! Player movement from held arrow keys
//!
//! Speed is per tick, not time-scaled, and diagonals are not normalized:
//! holding two perpendicular keys moves `speed` along each axis.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;

/// Arrow-key direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step in screen space (+y is down)
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// Which arrow keys are currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    pub fn set(&mut self, dir: Direction, held: bool) {
        match dir {
            Direction::Up => self.up = held,
            Direction::Down => self.down = held,
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
        }
    }

    pub fn press(&mut self, dir: Direction) {
        self.set(dir, true);
    }

    pub fn release(&mut self, dir: Direction) {
        self.set(dir, false);
    }

    pub fn is_held(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Advance the player one movement tick.
///
/// Each held direction adds `±speed` on its axis (opposing keys cancel), then
/// the result is clamped to `bounds` shrunk by the player's half-extent.
pub fn step(input: &InputState, pos: Vec2, bounds: &Aabb, half: Vec2, speed: f32) -> Vec2 {
    let mut next = pos;
    for dir in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
        if input.is_held(dir) {
            next += dir.unit() * speed;
        }
    }
    bounds.shrink(half).clamp_point(next)
}
