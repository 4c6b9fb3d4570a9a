use super::{Combatant, Fighter, Locomotion, Movable};
use crate::components::{Position, Stats};
use crate::constants::*;
use crate::equipment::{Equipable, Shield, Weapon};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    #[serde(flatten)]
    pub combatant: Combatant,
    pub weapon: Option<Weapon>,
    pub shield: Option<Shield>,
    pub second_hand: Option<Equipable>,
}

impl Hero {
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self::from_combatant(
            Combatant::new(name, position, Stats::new(HERO_STRENGTH, HERO_DEXTERITY))
                .with_sprite(HERO_SPRITE),
        )
    }

    pub fn from_combatant(combatant: Combatant) -> Self {
        Self {
            combatant,
            weapon: None,
            shield: None,
            second_hand: None,
        }
    }

    pub fn with_weapon(mut self, weapon: Weapon) -> Self {
        self.weapon = Some(weapon);
        self
    }

    pub fn with_shield(mut self, shield: Shield) -> Self {
        self.shield = Some(shield);
        self
    }

    pub fn with_second_hand(mut self, equipable: Equipable) -> Self {
        self.second_hand = Some(equipable);
        self
    }

    pub fn can_dig(&self) -> bool {
        self.second_hand.is_some_and(|e| e.can_dig())
    }
}

impl Fighter for Hero {
    fn combatant(&self) -> &Combatant {
        &self.combatant
    }

    fn combatant_mut(&mut self) -> &mut Combatant {
        &mut self.combatant
    }

    fn damage(&self) -> i32 {
        let bonus = self.weapon.as_ref().map_or(0, |w| w.damage);
        self.combatant.stats.strength + bonus
    }

    fn defense(&self) -> i32 {
        let bonus = self.shield.as_ref().map_or(0, |s| s.protection);
        self.combatant.stats.dexterity + bonus
    }

    fn range(&self) -> f32 {
        let bonus = self.weapon.as_ref().map_or(0.0, |w| w.range);
        self.combatant.range + bonus
    }
}

impl Movable for Hero {
    fn position(&self) -> Position {
        self.combatant.position
    }

    fn set_position(&mut self, position: Position) {
        self.combatant.position = position;
    }

    fn locomotion(&self) -> Locomotion {
        Locomotion::Walk
    }
}
