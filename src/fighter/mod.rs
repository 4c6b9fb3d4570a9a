//! Combat-capable entities: the hero and the monsters.
//!
//! Both share a [`Combatant`] block of stats. The [`Fighter`] trait derives
//! damage, defense and range from it (the hero layers equipment on top), and the
//! [`Movable`] trait is the capability the arena requires before it mutates a
//! position.

mod hero;
mod monster;

pub use hero::Hero;
pub use monster::{Monster, MonsterKind};

use crate::components::{Experience, Life, Position, Stats};
use crate::constants::*;
use serde::{Deserialize, Serialize};

/// Key of a monster inside the arena
pub type MonsterId = u32;

/// How a mover crosses terrain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locomotion {
    Walk,
    Fly,
    Swim,
    /// Never moves
    Rooted,
}

/// Stats shared by every fighter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    pub position: Position,
    pub stats: Stats,
    /// Base range before weapon bonuses
    pub range: f32,
    pub life: Life,
    pub experience: Experience,
    pub sprite: String,
}

impl Combatant {
    pub fn new(name: impl Into<String>, position: Position, stats: Stats) -> Self {
        Self {
            name: name.into(),
            position,
            stats,
            range: FIGHTER_BASE_RANGE,
            life: Life::new(FIGHTER_MAX_LIFE),
            experience: Experience::default(),
            sprite: String::new(),
        }
    }

    pub fn with_range(mut self, range: f32) -> Self {
        self.range = range;
        self
    }

    pub fn with_experience(mut self, experience: u32) -> Self {
        self.experience = Experience::new(experience);
        self
    }

    pub fn with_sprite(mut self, sprite: impl Into<String>) -> Self {
        self.sprite = sprite.into();
        self
    }
}

/// Anything that can deal and receive blows
pub trait Fighter {
    fn combatant(&self) -> &Combatant;
    fn combatant_mut(&mut self) -> &mut Combatant;

    fn name(&self) -> &str {
        &self.combatant().name
    }

    fn damage(&self) -> i32 {
        self.combatant().stats.strength
    }

    fn defense(&self) -> i32 {
        self.combatant().stats.dexterity
    }

    fn range(&self) -> f32 {
        self.combatant().range
    }

    fn life(&self) -> i32 {
        self.combatant().life.current
    }

    fn is_alive(&self) -> bool {
        self.combatant().life.is_alive()
    }

    fn experience(&self) -> u32 {
        self.combatant().experience.current
    }

    fn level(&self) -> u32 {
        crate::systems::level_for_experience(self.experience())
    }
}

/// Capability required by the arena to change a position
pub trait Movable {
    fn position(&self) -> Position;
    fn set_position(&mut self, position: Position);
    fn locomotion(&self) -> Locomotion;
}
