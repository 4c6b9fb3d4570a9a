//! Equipable items: weapons, shields and second-hand tools.

use crate::constants::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub damage: i32,
    /// Added to the wielder's base range
    #[serde(default)]
    pub range: f32,
}

impl Weapon {
    pub fn sword() -> Self {
        Self {
            name: "Sword".to_string(),
            damage: SWORD_DAMAGE,
            range: 0.0,
        }
    }

    pub fn bow() -> Self {
        Self {
            name: "Bow".to_string(),
            damage: BOW_DAMAGE,
            range: BOW_RANGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shield {
    pub name: String,
    pub protection: i32,
}

impl Shield {
    pub fn wooden() -> Self {
        Self {
            name: "Wooden shield".to_string(),
            protection: SHIELD_PROTECTION,
        }
    }
}

/// Tools held in the hero's second hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Equipable {
    Shovel,
}

impl Equipable {
    pub fn name(&self) -> &'static str {
        match self {
            Equipable::Shovel => "Shovel",
        }
    }

    pub fn can_dig(&self) -> bool {
        matches!(self, Equipable::Shovel)
    }
}
