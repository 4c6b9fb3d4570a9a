//! Arena event log.
//!
//! Every successful operation on the arena pushes an event. Callers (a renderer,
//! a log, a test) drain the queue after the turn without the engine knowing
//! who listens.

use crate::components::Position;
use crate::fighter::MonsterId;
use crate::tile::TileType;

/// Who performed an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mover {
    Hero,
    Monster(MonsterId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ArenaEvent {
    /// A fighter stepped to a new tile
    Moved {
        mover: Mover,
        from: Position,
        to: Position,
    },
    /// A blow landed (damage may be zero when fully absorbed)
    AttackHit {
        attacker: Mover,
        target: Mover,
        damage: i32,
    },
    /// The hero slew a monster
    MonsterSlain {
        id: MonsterId,
        experience: u32,
    },
    /// The hero reached a new level
    LevelUp {
        new_level: u32,
    },
    /// The hero dug a hole in grass
    TileDug {
        position: Position,
    },
    /// A tile was swapped for water
    TileFlooded {
        position: Position,
        previous: TileType,
    },
}

/// Simple event queue - events are pushed during a turn, drained by the caller
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<ArenaEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: ArenaEvent) {
        self.events.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = ArenaEvent> + '_ {
        self.events.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
