use super::{Combatant, Fighter, Locomotion, Movable};
use crate::components::{Position, Stats};
use crate::constants::*;
use serde::{Deserialize, Serialize};

/// Predefined monster types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonsterKind {
    Lion,
    Bird,
    Crocodile,
    Hydra,
}

impl MonsterKind {
    pub fn name(&self) -> &'static str {
        match self {
            MonsterKind::Lion => "Lion",
            MonsterKind::Bird => "Bird",
            MonsterKind::Crocodile => "Crocodile",
            MonsterKind::Hydra => "Hydra",
        }
    }

    pub fn sprite(&self) -> &'static str {
        match self {
            MonsterKind::Lion => "lion.svg",
            MonsterKind::Bird => "bird.svg",
            MonsterKind::Crocodile => "crocodile.svg",
            MonsterKind::Hydra => "hydra.svg",
        }
    }

    pub fn locomotion(&self) -> Locomotion {
        match self {
            MonsterKind::Lion => Locomotion::Walk,
            MonsterKind::Bird => Locomotion::Fly,
            MonsterKind::Crocodile => Locomotion::Swim,
            MonsterKind::Hydra => Locomotion::Rooted,
        }
    }

    /// Build a monster of this kind standing at `position`
    pub fn spawn(&self, position: Position) -> Monster {
        let (strength, dexterity, range, experience) = match self {
            MonsterKind::Lion => (LION_STRENGTH, LION_DEXTERITY, FIGHTER_BASE_RANGE, LION_EXPERIENCE),
            MonsterKind::Bird => (BIRD_STRENGTH, BIRD_DEXTERITY, FIGHTER_BASE_RANGE, BIRD_EXPERIENCE),
            MonsterKind::Crocodile => (
                CROCODILE_STRENGTH,
                CROCODILE_DEXTERITY,
                FIGHTER_BASE_RANGE,
                CROCODILE_EXPERIENCE,
            ),
            MonsterKind::Hydra => (HYDRA_STRENGTH, HYDRA_DEXTERITY, HYDRA_RANGE, HYDRA_EXPERIENCE),
        };
        let combatant = Combatant::new(self.name(), position, Stats::new(strength, dexterity))
            .with_range(range)
            .with_experience(experience)
            .with_sprite(self.sprite());
        Monster::new(combatant, self.locomotion())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    #[serde(flatten)]
    pub combatant: Combatant,
    pub locomotion: Locomotion,
}

impl Monster {
    pub fn new(combatant: Combatant, locomotion: Locomotion) -> Self {
        Self {
            combatant,
            locomotion,
        }
    }

    pub fn is_movable(&self) -> bool {
        self.locomotion != Locomotion::Rooted
    }
}

impl Fighter for Monster {
    fn combatant(&self) -> &Combatant {
        &self.combatant
    }

    fn combatant_mut(&mut self) -> &mut Combatant {
        &mut self.combatant
    }
}

impl Movable for Monster {
    fn position(&self) -> Position {
        self.combatant.position
    }

    fn set_position(&mut self, position: Position) {
        self.combatant.position = position;
    }

    fn locomotion(&self) -> Locomotion {
        self.locomotion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lion_preset() {
        let lion = MonsterKind::Lion.spawn(Position::new(4, 4));
        assert_eq!(lion.name(), "Lion");
        assert_eq!(lion.damage(), LION_STRENGTH);
        assert_eq!(lion.defense(), LION_DEXTERITY);
        assert_eq!(lion.experience(), LION_EXPERIENCE);
        assert_eq!(lion.position(), Position::new(4, 4));
        assert!(lion.is_movable());
    }

    #[test]
    fn test_hydra_is_rooted() {
        let hydra = MonsterKind::Hydra.spawn(Position::new(0, 0));
        assert_eq!(hydra.locomotion(), Locomotion::Rooted);
        assert!(!hydra.is_movable());
        assert_eq!(hydra.range(), HYDRA_RANGE);
    }
}
