//! Combat system constants.

/// Smallest possible damage roll before defense is subtracted
pub const COMBAT_MIN_ROLL: i32 = 1;
/// Damage never drops below this after defense
pub const COMBAT_MIN_DAMAGE: i32 = 0;
