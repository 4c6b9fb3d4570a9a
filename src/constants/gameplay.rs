//! Core gameplay constants (arena, hero stats, XP).

/// Side length of the square arena
pub const ARENA_DEFAULT_SIZE: i32 = 10;
/// Largest arena side accepted from a config
pub const ARENA_MAX_SIZE: i32 = 256;
/// Seed used when no seed is supplied
pub const ARENA_DEFAULT_SEED: u64 = 0x5EED;

/// Life every fighter starts with
pub const FIGHTER_MAX_LIFE: i32 = 100;
/// Base range of a fighter without a ranged weapon
pub const FIGHTER_BASE_RANGE: f32 = 1.0;

/// Hero's starting strength
pub const HERO_STRENGTH: i32 = 20;
/// Hero's starting dexterity
pub const HERO_DEXTERITY: i32 = 6;
/// Hero sprite
pub const HERO_SPRITE: &str = "heracles.svg";

/// Experience needed per level (level = ceil(xp / this))
pub const XP_PER_LEVEL: u32 = 1000;
