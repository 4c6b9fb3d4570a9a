use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position component - arena coordinates (grid-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position one step along `delta`
    pub fn offset(&self, delta: IVec2) -> Self {
        let moved = IVec2::new(self.x, self.y) + delta;
        Self::new(moved.x, moved.y)
    }

    /// Euclidean distance between tile centers
    pub fn distance(&self, other: &Position) -> f32 {
        self.as_vec2().distance(other.as_vec2())
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }

    /// Whether this position lies inside a `size` x `size` square anchored at the origin
    pub fn in_bounds(&self, size: i32) -> bool {
        self.x >= 0 && self.x < size && self.y >= 0 && self.y < size
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Life component
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Life {
    pub current: i32,
    pub max: i32,
}

impl Life {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    /// Remove `amount` life, never going below zero
    pub fn take(&mut self, amount: i32) {
        self.current = (self.current - amount).max(0);
    }
}

/// Stats component - combat attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub strength: i32,
    pub dexterity: i32,
}

impl Stats {
    pub fn new(strength: i32, dexterity: i32) -> Self {
        Self {
            strength,
            dexterity,
        }
    }
}

/// Experience component
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub current: u32,
}

impl Experience {
    pub fn new(current: u32) -> Self {
        Self { current }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        let pos = Position::new(3, 3);
        assert_eq!(pos.offset(IVec2::new(0, -1)), Position::new(3, 2));
        assert_eq!(pos.offset(IVec2::new(-1, 0)), Position::new(2, 3));
    }

    #[test]
    fn test_distance() {
        let a = Position::new(0, 0);
        assert_eq!(a.distance(&Position::new(3, 4)), 5.0);
        assert!((a.distance(&Position::new(1, 1)) - 2f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_in_bounds() {
        assert!(Position::new(0, 9).in_bounds(10));
        assert!(!Position::new(10, 0).in_bounds(10));
        assert!(!Position::new(0, -1).in_bounds(10));
    }

    #[test]
    fn test_life_floors_at_zero() {
        let mut life = Life::new(100);
        life.take(30);
        assert_eq!(life.current, 70);
        life.take(500);
        assert_eq!(life.current, 0);
        assert!(!life.is_alive());
    }
}
