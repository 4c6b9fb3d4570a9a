//! Turn driver: picks the hero's action for a turn and reports the outcome.

use crate::actions::{Action, ActionResult, Direction};
use crate::arena::Arena;
use crate::error::Result;
use crate::fighter::{MonsterId, Movable};
use crate::systems::touchable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Victory,
    Defeat,
}

/// What happened during one turn
#[derive(Debug, Clone, PartialEq)]
pub struct TurnReport {
    pub action: Action,
    pub result: Result<ActionResult>,
    pub status: GameStatus,
}

/// Closest monster the hero can strike, lowest id first on ties
pub fn nearest_target(arena: &Arena) -> Option<MonsterId> {
    let hero = arena.hero();
    arena
        .monsters()
        .iter()
        .filter(|(_, monster)| touchable(hero, *monster))
        .min_by(|(_, a), (_, b)| {
            let da = hero.position().distance(&a.position());
            let db = hero.position().distance(&b.position());
            da.total_cmp(&db)
        })
        .map(|(id, _)| *id)
}

/// Fight whatever is in reach, otherwise walk towards `direction`
pub fn choose_action(arena: &Arena, direction: Direction) -> Action {
    match nearest_target(arena) {
        Some(id) => Action::Battle(id),
        None => Action::Move(direction),
    }
}

pub fn status(arena: &Arena) -> GameStatus {
    if arena.is_defeat() {
        GameStatus::Defeat
    } else if arena.is_victory() {
        GameStatus::Victory
    } else {
        GameStatus::Ongoing
    }
}

/// Play one turn for the hero
pub fn play_turn(arena: &mut Arena, direction: Direction) -> TurnReport {
    let action = choose_action(arena, direction);
    let result = action.execute(arena);
    TurnReport {
        action,
        result,
        status: status(arena),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ArenaConfig, MonsterConfig};
    use crate::error::ArenaError;
    use crate::fighter::MonsterKind;

    #[test]
    fn test_walks_when_nothing_in_reach() {
        let mut config = ArenaConfig::empty(10);
        config.monsters = vec![MonsterConfig::new(MonsterKind::Hydra, 9, 9)];
        let arena = Arena::from_config(&config).unwrap();
        assert_eq!(choose_action(&arena, Direction::East), Action::Move(Direction::East));
    }

    #[test]
    fn test_fights_nearest_in_reach() {
        let mut config = ArenaConfig::empty(10);
        config.hero.position = crate::components::Position::new(5, 5);
        config.monsters = vec![
            MonsterConfig::new(MonsterKind::Hydra, 9, 9),
            MonsterConfig::new(MonsterKind::Hydra, 5, 6),
        ];
        let arena = Arena::from_config(&config).unwrap();
        assert_eq!(nearest_target(&arena), Some(1));
        assert_eq!(choose_action(&arena, Direction::North), Action::Battle(1));
    }

    #[test]
    fn test_blocked_turn_is_reported() {
        let mut arena = Arena::from_config(&ArenaConfig::empty(10)).unwrap();
        let report = play_turn(&mut arena, Direction::North);
        assert!(matches!(report.result, Err(ArenaError::OutOfMap(_))));
        // No monsters at all: extermination is already won
        assert_eq!(report.status, GameStatus::Victory);
    }

    #[test]
    fn test_ongoing_status() {
        let arena = Arena::from_config(&ArenaConfig::default()).unwrap();
        assert_eq!(status(&arena), GameStatus::Ongoing);
    }
}
