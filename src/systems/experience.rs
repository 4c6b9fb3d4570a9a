//! Experience and leveling system.

use crate::components::Experience;
use crate::constants::*;

/// Level reached with `xp` experience: one level per started thousand, at least 1
pub fn level_for_experience(xp: u32) -> u32 {
    xp.div_ceil(XP_PER_LEVEL).max(1)
}

/// Add XP to an experience component. Returns true if the level went up.
pub fn grant_xp(exp: &mut Experience, amount: u32) -> bool {
    let before = level_for_experience(exp.current);
    exp.current = exp.current.saturating_add(amount);
    level_for_experience(exp.current) > before
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_experience() {
        assert_eq!(level_for_experience(0), 1);
        assert_eq!(level_for_experience(1), 1);
        assert_eq!(level_for_experience(XP_PER_LEVEL), 1);
        assert_eq!(level_for_experience(XP_PER_LEVEL + 1), 2);
        assert_eq!(level_for_experience(5 * XP_PER_LEVEL), 5);
    }

    #[test]
    fn test_grant_xp_no_level_up() {
        let mut exp = Experience::new(0);
        assert!(!grant_xp(&mut exp, 500));
        assert_eq!(exp.current, 500);
    }

    #[test]
    fn test_grant_xp_level_up() {
        let mut exp = Experience::new(XP_PER_LEVEL);
        assert!(grant_xp(&mut exp, 1));
        assert_eq!(exp.current, XP_PER_LEVEL + 1);
    }
}
