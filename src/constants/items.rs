//! Equipment constants (damage, protection, range).

/// Sword damage
pub const SWORD_DAMAGE: i32 = 10;
/// Bow damage (weaker than the sword, but reaches further)
pub const BOW_DAMAGE: i32 = 8;
/// Extra range granted by the bow
pub const BOW_RANGE: f32 = 5.0;

/// Protection of the basic wooden shield
pub const SHIELD_PROTECTION: i32 = 10;
