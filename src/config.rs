//! Arena setup, loadable from JSON.

use crate::components::{Position, Stats};
use crate::constants::*;
use crate::equipment::{Equipable, Shield, Weapon};
use crate::error::ConfigError;
use crate::fighter::{Combatant, Hero, Monster, MonsterKind};
use crate::game_mode::GameMode;
use crate::tile::{Tile, TileType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

fn default_size() -> i32 {
    ARENA_DEFAULT_SIZE
}

fn default_seed() -> u64 {
    ARENA_DEFAULT_SEED
}

fn default_true() -> bool {
    true
}

fn default_hero_name() -> String {
    "Heracles".to_string()
}

fn default_strength() -> i32 {
    HERO_STRENGTH
}

fn default_dexterity() -> i32 {
    HERO_DEXTERITY
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroConfig {
    #[serde(default = "default_hero_name")]
    pub name: String,
    pub position: Position,
    #[serde(default = "default_strength")]
    pub strength: i32,
    #[serde(default = "default_dexterity")]
    pub dexterity: i32,
    #[serde(default)]
    pub weapon: Option<Weapon>,
    #[serde(default)]
    pub shield: Option<Shield>,
    #[serde(default)]
    pub second_hand: Option<Equipable>,
}

impl HeroConfig {
    pub fn at(x: i32, y: i32) -> Self {
        Self {
            name: default_hero_name(),
            position: Position::new(x, y),
            strength: HERO_STRENGTH,
            dexterity: HERO_DEXTERITY,
            weapon: None,
            shield: None,
            second_hand: None,
        }
    }

    pub fn build(&self) -> Hero {
        let combatant = Combatant::new(
            self.name.clone(),
            self.position,
            Stats::new(self.strength, self.dexterity),
        )
        .with_sprite(HERO_SPRITE);
        let mut hero = Hero::from_combatant(combatant);
        hero.weapon = self.weapon.clone();
        hero.shield = self.shield.clone();
        hero.second_hand = self.second_hand;
        hero
    }
}

/// A monster from a preset, optionally with tweaked stats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterConfig {
    pub kind: MonsterKind,
    pub position: Position,
    #[serde(default)]
    pub strength: Option<i32>,
    #[serde(default)]
    pub dexterity: Option<i32>,
    #[serde(default)]
    pub experience: Option<u32>,
}

impl MonsterConfig {
    pub fn new(kind: MonsterKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            position: Position::new(x, y),
            strength: None,
            dexterity: None,
            experience: None,
        }
    }

    pub fn build(&self) -> Monster {
        let mut monster = self.kind.spawn(self.position);
        let combatant = &mut monster.combatant;
        if let Some(strength) = self.strength {
            combatant.stats.strength = strength;
        }
        if let Some(dexterity) = self.dexterity {
            combatant.stats.dexterity = dexterity;
        }
        if let Some(experience) = self.experience {
            combatant.experience.current = experience;
        }
        monster
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaConfig {
    #[serde(default = "default_size")]
    pub size: i32,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default)]
    pub mode: GameMode,
    pub hero: HeroConfig,
    /// Monsters get ids in list order, starting at 0
    #[serde(default)]
    pub monsters: Vec<MonsterConfig>,
    /// Cover the arena with grass before applying `tiles`
    #[serde(default = "default_true")]
    pub meadow: bool,
    /// Terrain overrides; on a meadow they replace the grass at their coordinates
    #[serde(default)]
    pub tiles: Vec<Tile>,
}

impl ArenaConfig {
    /// A meadow of the given size with the hero in the top-left corner and no monsters
    pub fn empty(size: i32) -> Self {
        Self {
            size,
            seed: ARENA_DEFAULT_SEED,
            mode: GameMode::Extermination,
            hero: HeroConfig::at(0, 0),
            monsters: Vec::new(),
            meadow: true,
            tiles: Vec::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Resolve the terrain layout into a single tile list
    pub fn layout(&self) -> Vec<Tile> {
        let mut tiles: Vec<Tile> = if self.meadow {
            (0..self.size)
                .flat_map(|y| (0..self.size).map(move |x| Tile::grass(x, y)))
                .collect()
        } else {
            Vec::new()
        };
        let mut index: HashMap<Position, usize> = tiles
            .iter()
            .enumerate()
            .map(|(i, t)| (t.position, i))
            .collect();
        for tile in &self.tiles {
            match index.get(&tile.position) {
                Some(&i) => tiles[i].tile_type = tile.tile_type,
                None => {
                    index.insert(tile.position, tiles.len());
                    tiles.push(tile.clone());
                }
            }
        }
        tiles
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        let mut hero = HeroConfig::at(0, 0);
        hero.weapon = Some(Weapon::sword());
        hero.shield = Some(Shield::wooden());
        hero.second_hand = Some(Equipable::Shovel);

        Self {
            hero,
            monsters: vec![
                MonsterConfig::new(MonsterKind::Lion, 5, 5),
                MonsterConfig::new(MonsterKind::Bird, 7, 2),
                MonsterConfig::new(MonsterKind::Crocodile, 2, 7),
                MonsterConfig::new(MonsterKind::Hydra, 9, 9),
            ],
            tiles: vec![
                Tile::new(2, 6, TileType::Water),
                Tile::new(2, 7, TileType::Water),
                Tile::new(3, 7, TileType::Water),
                Tile::new(6, 2, TileType::Bush),
                Tile::new(6, 3, TileType::Bush),
                Tile::new(4, 0, TileType::Rock),
            ],
            ..Self::empty(ARENA_DEFAULT_SIZE)
        }
    }
}
