//! Game systems organized by domain.
//!
//! - `ai`: monster wandering
//! - `combat`: range checks and blow resolution
//! - `experience`: XP and leveling
//! - `movement`: destination validation against terrain, bounds and occupants

pub mod ai;
pub mod combat;
pub mod experience;
pub mod movement;

pub use ai::random_direction;
pub use combat::{fight, touchable};
pub use experience::{grant_xp, level_for_experience};
pub use movement::validate_move;
