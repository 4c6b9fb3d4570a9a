//! Movement validation.

use crate::actions::Direction;
use crate::components::Position;
use crate::error::{ArenaError, Result};
use crate::fighter::{Locomotion, Movable};
use crate::grid::Grid;

/// Compute where `movable` ends up after one step towards `direction`.
///
/// Checks run in order: terrain crossability, map bounds, then occupancy by any
/// position in `occupied` (which must not include the mover itself).
pub fn validate_move<M, I>(grid: &Grid, movable: &M, direction: Direction, occupied: I) -> Result<Position>
where
    M: Movable + ?Sized,
    I: IntoIterator<Item = Position>,
{
    let locomotion = movable.locomotion();
    let destination = movable.position().offset(direction.delta());

    // Rooted movers cross nothing, open ground included
    if locomotion == Locomotion::Rooted {
        return Err(ArenaError::NotCrossable(destination));
    }

    if let Some(tile) = grid.get(destination.x, destination.y) {
        if !tile.is_crossable(locomotion) {
            return Err(ArenaError::NotCrossable(destination));
        }
    }

    if !grid.contains(destination) {
        return Err(ArenaError::OutOfMap(destination));
    }

    if occupied.into_iter().any(|pos| pos == destination) {
        return Err(ArenaError::Occupied(destination));
    }

    Ok(destination)
}
