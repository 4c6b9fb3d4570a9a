//! A small turn-based grid RPG engine.
//!
//! A hero and a handful of monsters share a square [`Arena`]. Each turn the
//! hero steps in a cardinal direction and the monsters wander at random;
//! fighters within range can battle, and the hero can dig the grass under
//! its feet.

pub mod actions;
pub mod arena;
pub mod components;
pub mod config;
pub mod constants;
pub mod equipment;
pub mod error;
pub mod events;
pub mod fighter;
pub mod game_loop;
pub mod game_mode;
pub mod grid;
pub mod systems;
pub mod tile;

pub use actions::{Action, ActionResult, Direction};
pub use arena::{Arena, BattleOutcome};
pub use config::ArenaConfig;
pub use error::{ArenaError, ConfigError, Result};
pub use events::{ArenaEvent, Mover};
pub use fighter::{Fighter, Hero, Locomotion, Monster, MonsterId, MonsterKind, Movable};
pub use game_loop::{play_turn, GameStatus, TurnReport};
pub use game_mode::GameMode;
