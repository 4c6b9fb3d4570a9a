//! Game modes and their victory conditions.

use crate::arena::Arena;
use crate::components::Position;
use crate::fighter::{Fighter, Movable};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum GameMode {
    /// Slay every monster
    #[default]
    Extermination,
    /// Stay alive for a number of turns
    Survival { turns: u32 },
    /// Reach a given tile
    Treasure { x: i32, y: i32 },
}

impl GameMode {
    pub fn is_victory(&self, arena: &Arena) -> bool {
        let hero = arena.hero();
        if !hero.is_alive() {
            return false;
        }
        match *self {
            GameMode::Extermination => arena.monsters().is_empty(),
            GameMode::Survival { turns } => arena.turn() >= turns,
            GameMode::Treasure { x, y } => hero.position() == Position::new(x, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Direction;
    use crate::config::ArenaConfig;

    #[test]
    fn test_extermination_without_monsters() {
        let arena = Arena::from_config(&ArenaConfig::empty(5)).unwrap();
        assert!(GameMode::Extermination.is_victory(&arena));
    }

    #[test]
    fn test_survival_counts_turns() {
        let mut config = ArenaConfig::empty(5);
        config.mode = GameMode::Survival { turns: 2 };
        let mut arena = Arena::from_config(&config).unwrap();
        assert!(!arena.is_victory());

        arena.arena_move(Direction::East).unwrap();
        assert!(!arena.is_victory());
        arena.arena_move(Direction::South).unwrap();
        assert!(arena.is_victory());
    }

    #[test]
    fn test_treasure_reached() {
        let mut config = ArenaConfig::empty(5);
        config.mode = GameMode::Treasure { x: 1, y: 0 };
        let mut arena = Arena::from_config(&config).unwrap();
        assert!(!arena.is_victory());
        arena.arena_move(Direction::East).unwrap();
        assert!(arena.is_victory());
    }

    #[test]
    fn test_mode_json() {
        let mode: GameMode = serde_json::from_str(r#"{"mode":"survival","turns":30}"#).unwrap();
        assert_eq!(mode, GameMode::Survival { turns: 30 });
        let mode: GameMode = serde_json::from_str(r#"{"mode":"extermination"}"#).unwrap();
        assert_eq!(mode, GameMode::Extermination);
    }
}
