//! Monster stats.

// LION
/// Lion strength
pub const LION_STRENGTH: i32 = 25;
/// Lion dexterity
pub const LION_DEXTERITY: i32 = 5;
/// Experience granted for slaying a lion
pub const LION_EXPERIENCE: u32 = 500;

// BIRD
/// Bird strength (weak but flies over bushes and water)
pub const BIRD_STRENGTH: i32 = 15;
/// Bird dexterity
pub const BIRD_DEXTERITY: i32 = 10;
/// Experience granted for slaying a bird
pub const BIRD_EXPERIENCE: u32 = 200;

// CROCODILE
/// Crocodile strength
pub const CROCODILE_STRENGTH: i32 = 30;
/// Crocodile dexterity
pub const CROCODILE_DEXTERITY: i32 = 8;
/// Experience granted for slaying a crocodile
pub const CROCODILE_EXPERIENCE: u32 = 700;

// HYDRA
/// Hydra strength (never moves, strikes from a distance)
pub const HYDRA_STRENGTH: i32 = 35;
/// Hydra dexterity
pub const HYDRA_DEXTERITY: i32 = 15;
/// Hydra reach
pub const HYDRA_RANGE: f32 = 2.0;
/// Experience granted for slaying the hydra
pub const HYDRA_EXPERIENCE: u32 = 2500;
