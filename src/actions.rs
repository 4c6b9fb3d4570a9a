//! Turn actions.
//!
//! A caller (UI, script, AI) expresses what the hero should do as an [`Action`];
//! `execute` runs it against the arena with all validation happening at that
//! moment.

use crate::arena::{Arena, BattleOutcome};
use crate::components::Position;
use crate::error::{ArenaError, Result};
use crate::fighter::MonsterId;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cardinal direction of a single step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "W")]
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Unit vector; y grows southwards
    pub fn delta(&self) -> IVec2 {
        match self {
            Direction::North => IVec2::new(0, -1),
            Direction::South => IVec2::new(0, 1),
            Direction::East => IVec2::new(1, 0),
            Direction::West => IVec2::new(-1, 0),
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Direction::North => 'N',
            Direction::South => 'S',
            Direction::East => 'E',
            Direction::West => 'W',
        }
    }

    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Direction::North),
            'S' => Some(Direction::South),
            'E' => Some(Direction::East),
            'W' => Some(Direction::West),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Direction {
    type Err = ArenaError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.trim().chars();
        let direction = match (chars.next(), chars.next()) {
            (Some(c), None) => Direction::from_letter(c),
            _ => None,
        };
        direction.ok_or_else(|| ArenaError::UnknownDirection(s.to_string()))
    }
}

/// An action the hero intends to perform this turn
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Step, then let every monster wander
    Move(Direction),
    /// Exchange blows with a monster
    Battle(MonsterId),
    /// Dig the tile under the hero
    Dig,
    /// Do nothing
    Wait,
}

/// What an executed action did
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult {
    Moved(Position),
    Fought(BattleOutcome),
    Dug(Position),
    Waited,
}

impl Action {
    pub fn execute(&self, arena: &mut Arena) -> Result<ActionResult> {
        match self {
            Action::Move(direction) => arena.arena_move(*direction).map(ActionResult::Moved),
            Action::Battle(id) => arena.battle(*id).map(ActionResult::Fought),
            Action::Dig => arena.dig().map(ActionResult::Dug),
            Action::Wait => Ok(ActionResult::Waited),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ArenaConfig;
    use crate::tile::TileType;
    use crate::fighter::Fighter;

    #[test]
    fn test_direction_parse() {
        assert_eq!("N".parse::<Direction>(), Ok(Direction::North));
        assert_eq!("w".parse::<Direction>(), Ok(Direction::West));
        assert_eq!(" E ".parse::<Direction>(), Ok(Direction::East));
        assert!("NE".parse::<Direction>().is_err());
        assert!("".parse::<Direction>().is_err());
        assert!("X".parse::<Direction>().is_err());
    }

    #[test]
    fn test_direction_vectors() {
        assert_eq!(Direction::North.delta(), IVec2::new(0, -1));
        assert_eq!(Direction::South.delta(), IVec2::new(0, 1));
        assert_eq!(Direction::East.delta(), IVec2::new(1, 0));
        assert_eq!(Direction::West.delta(), IVec2::new(-1, 0));
        for dir in Direction::ALL {
            assert_eq!(Direction::from_letter(dir.letter()), Some(dir));
        }
    }

    #[test]
    fn test_wait_changes_nothing() {
        let mut arena = Arena::from_config(&ArenaConfig::empty(10)).unwrap();
        let before = arena.hero_position();
        assert_eq!(Action::Wait.execute(&mut arena), Ok(ActionResult::Waited));
        assert_eq!(arena.hero_position(), before);
        assert_eq!(arena.turn(), 0);
    }

    #[test]
    fn test_move_action() {
        let mut arena = Arena::from_config(&ArenaConfig::empty(10)).unwrap();
        let result = Action::Move(Direction::East).execute(&mut arena).unwrap();
        assert_eq!(result, ActionResult::Moved(Position::new(1, 0)));
        assert_eq!(arena.turn(), 1);
    }

    #[test]
    fn test_dig_twice_then_walk_away() {
        let mut config = ArenaConfig::empty(10);
        config.hero.second_hand = Some(crate::equipment::Equipable::Shovel);
        let mut arena = Arena::from_config(&config).unwrap();

        let origin = Position::new(0, 0);
        assert_eq!(Action::Dig.execute(&mut arena), Ok(ActionResult::Dug(origin)));
        assert_eq!(Action::Dig.execute(&mut arena), Ok(ActionResult::Dug(origin)));
        assert!(arena.tile(0, 0).unwrap().is_digged());

        Action::Move(Direction::East).execute(&mut arena).unwrap();
        assert_eq!(arena.tile(0, 0).unwrap().tile_type, TileType::Water);
        assert!(arena.hero().is_alive());
    }
}
