use crate::components::Position;
use crate::fighter::Locomotion;
use serde::{Deserialize, Serialize};

/// Sprite names for each terrain
pub mod sprites {
    pub const GRASS: &str = "grass.png";
    pub const HOLE: &str = "hole.png";
    pub const WATER: &str = "water.png";
    pub const BUSH: &str = "bush.png";
    pub const ROCK: &str = "rock.png";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TileType {
    Grass {
        #[serde(default)]
        digged: bool,
    },
    Water,
    Bush,
    Rock,
}

impl TileType {
    pub fn grass() -> Self {
        TileType::Grass { digged: false }
    }

    pub fn sprite(&self) -> &'static str {
        match self {
            TileType::Grass { digged: false } => sprites::GRASS,
            TileType::Grass { digged: true } => sprites::HOLE,
            TileType::Water => sprites::WATER,
            TileType::Bush => sprites::BUSH,
            TileType::Rock => sprites::ROCK,
        }
    }

    pub fn is_crossable(&self, locomotion: Locomotion) -> bool {
        match self {
            TileType::Grass { .. } => true,
            TileType::Water => matches!(locomotion, Locomotion::Fly | Locomotion::Swim),
            TileType::Bush => locomotion == Locomotion::Fly,
            TileType::Rock => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub position: Position,
    #[serde(flatten)]
    pub tile_type: TileType,
}

impl Tile {
    pub fn new(x: i32, y: i32, tile_type: TileType) -> Self {
        Self {
            position: Position::new(x, y),
            tile_type,
        }
    }

    pub fn grass(x: i32, y: i32) -> Self {
        Self::new(x, y, TileType::grass())
    }

    /// The default replacement terrain
    pub fn water(x: i32, y: i32) -> Self {
        Self::new(x, y, TileType::Water)
    }

    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }

    pub fn sprite(&self) -> &'static str {
        self.tile_type.sprite()
    }

    pub fn is_crossable(&self, locomotion: Locomotion) -> bool {
        self.tile_type.is_crossable(locomotion)
    }

    pub fn is_digged(&self) -> bool {
        matches!(self.tile_type, TileType::Grass { digged: true })
    }

    /// Dig a hole in grass. Returns false for any other terrain.
    /// Digging an existing hole leaves it dug.
    pub fn dig(&mut self) -> bool {
        match &mut self.tile_type {
            TileType::Grass { digged } => {
                *digged = true;
                true
            }
            _ => false,
        }
    }
}
