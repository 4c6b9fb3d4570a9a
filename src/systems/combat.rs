//! Combat system functions.

use crate::constants::*;
use crate::fighter::{Fighter, Movable};
use rand::Rng;

/// Whether `defender` stands within `attacker`'s range (Euclidean distance)
pub fn touchable<A, D>(attacker: &A, defender: &D) -> bool
where
    A: Fighter + Movable + ?Sized,
    D: Movable + ?Sized,
{
    attacker.position().distance(&defender.position()) <= attacker.range()
}

/// Strike `defender` once. The blow rolls uniformly in `1..=damage`, the
/// defender's defense is subtracted and the result floored at zero.
/// Returns the life actually removed from the defender.
pub fn fight<A, D>(attacker: &A, defender: &mut D, rng: &mut impl Rng) -> i32
where
    A: Fighter + ?Sized,
    D: Fighter + ?Sized,
{
    let max_roll = attacker.damage().max(COMBAT_MIN_ROLL);
    let roll = rng.gen_range(COMBAT_MIN_ROLL..=max_roll);
    let damage = (roll - defender.defense()).max(COMBAT_MIN_DAMAGE);

    let life = &mut defender.combatant_mut().life;
    let before = life.current;
    life.take(damage);
    before - life.current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Position, Stats};
    use crate::equipment::Weapon;
    use crate::fighter::{Combatant, Hero, Locomotion, Monster};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn dummy(x: i32, y: i32, strength: i32, dexterity: i32) -> Monster {
        Monster::new(
            Combatant::new("Dummy", Position::new(x, y), Stats::new(strength, dexterity)),
            Locomotion::Walk,
        )
    }

    #[test]
    fn test_touchable_adjacent() {
        let hero = Hero::new("Heracles", Position::new(2, 2));
        assert!(touchable(&hero, &dummy(2, 3, 1, 0)));
        assert!(touchable(&hero, &dummy(1, 2, 1, 0)));
    }

    #[test]
    fn test_touchable_diagonal_out_of_base_range() {
        // sqrt(2) > 1.0
        let hero = Hero::new("Heracles", Position::new(2, 2));
        assert!(!touchable(&hero, &dummy(3, 3, 1, 0)));
    }

    #[test]
    fn test_touchable_with_bow() {
        let hero = Hero::new("Heracles", Position::new(0, 0)).with_weapon(Weapon::bow());
        assert!(touchable(&hero, &dummy(6, 0, 1, 0)));
        assert!(!touchable(&hero, &dummy(7, 0, 1, 0)));
    }

    #[test]
    fn test_fight_never_exceeds_damage() {
        let mut rng = StdRng::seed_from_u64(7);
        let attacker = dummy(0, 0, 10, 0);
        for _ in 0..50 {
            let mut target = dummy(0, 1, 1, 0);
            let dealt = fight(&attacker, &mut target, &mut rng);
            assert!((1..=10).contains(&dealt));
            assert_eq!(target.life(), FIGHTER_MAX_LIFE - dealt);
        }
    }

    #[test]
    fn test_fight_defense_absorbs_blow() {
        let mut rng = StdRng::seed_from_u64(7);
        let attacker = dummy(0, 0, 5, 0);
        let mut target = dummy(0, 1, 1, 50);
        assert_eq!(fight(&attacker, &mut target, &mut rng), 0);
        assert_eq!(target.life(), FIGHTER_MAX_LIFE);
    }

    #[test]
    fn test_fight_life_floors_at_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        let attacker = dummy(0, 0, 10, 0);
        let mut target = dummy(0, 1, 1, 0);
        target.combatant_mut().life.current = 1;
        assert_eq!(fight(&attacker, &mut target, &mut rng), 1);
        assert_eq!(target.life(), 0);
        assert!(!target.is_alive());
    }
}
