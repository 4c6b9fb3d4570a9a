//! Arena error type.

use crate::components::Position;
use crate::fighter::MonsterId;
use thiserror::Error;

/// Every way a turn or setup step can fail. All of them are recoverable:
/// the arena is left untouched (apart from a landed blow, see
/// [`ArenaError::HeroOutOfRange`]) and the caller decides what to do next.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArenaError {
    #[error("Not crossable tile at {0}")]
    NotCrossable(Position),

    #[error("Out of map: {0}")]
    OutOfMap(Position),

    #[error("Not free: {0} is occupied")]
    Occupied(Position),

    #[error("Cannot move: {0} is rooted")]
    Immovable(String),

    #[error("Unknown monster: {0}")]
    UnknownMonster(MonsterId),

    #[error("Monster out of range")]
    MonsterOutOfRange(MonsterId),

    /// The hero's blow already landed; only the retaliation was impossible.
    #[error("Hero out of range")]
    HeroOutOfRange(MonsterId),

    #[error("No shovel equipped")]
    NoShovel,

    #[error("Nothing to dig at {0}")]
    NotDiggable(Position),

    #[error("Unknown direction: '{0}'")]
    UnknownDirection(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ArenaError>;

/// Errors raised while reading an [`ArenaConfig`](crate::config::ArenaConfig) from disk
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}
