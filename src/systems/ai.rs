//! Monster AI: uniform random wandering.

use crate::actions::Direction;
use rand::Rng;

/// Pick one of the four cardinal directions uniformly
pub fn random_direction(rng: &mut impl Rng) -> Direction {
    Direction::ALL[rng.gen_range(0..Direction::ALL.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_random_direction_covers_all() {
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<Direction> = (0..200).map(|_| random_direction(&mut rng)).collect();
        assert_eq!(seen.len(), 4);
    }
}
