use crate::components::Position;
use crate::tile::Tile;

/// Terrain of the arena. Tiles are kept in insertion order; coordinates with no
/// tile are open ground.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    pub size: i32,
    tiles: Vec<Tile>,
}

impl Grid {
    pub fn new(size: i32, tiles: Vec<Tile>) -> Self {
        Self { size, tiles }
    }

    /// Fill the whole square with undug grass
    pub fn meadow(size: i32) -> Self {
        let tiles = (0..size)
            .flat_map(|y| (0..size).map(move |x| Tile::grass(x, y)))
            .collect();
        Self { size, tiles }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.in_bounds(self.size)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.x() == x && t.y() == y)
    }

    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Tile> {
        self.tiles.iter_mut().find(|t| t.x() == x && t.y() == y)
    }

    /// Append a Water tile at the coordinates of `tile`, returning those coordinates
    pub fn add_tile(&mut self, tile: &Tile) -> Position {
        self.tiles.push(Tile::water(tile.x(), tile.y()));
        tile.position
    }

    /// Remove the first tile equal to `tile`
    pub fn remove_tile(&mut self, tile: &Tile) -> Option<Tile> {
        let index = self.tiles.iter().position(|t| t == tile)?;
        Some(self.tiles.remove(index))
    }

    /// Swap the tile at `(x, y)` for Water. Returns the tile that was replaced.
    pub fn replace_tile(&mut self, x: i32, y: i32) -> Option<Tile> {
        let old = self.get(x, y)?.clone();
        self.add_tile(&old);
        self.remove_tile(&old)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::TileType;

    #[test]
    fn test_meadow_covers_square() {
        let grid = Grid::meadow(4);
        assert_eq!(grid.tiles().len(), 16);
        assert!(grid.get(3, 3).is_some());
        assert!(grid.get(4, 0).is_none());
    }

    #[test]
    fn test_get_missing_tile() {
        let grid = Grid::new(10, vec![Tile::grass(1, 1)]);
        assert!(grid.get(2, 2).is_none());
        assert!(grid.contains(Position::new(2, 2)));
    }

    #[test]
    fn test_replace_tile_with_water() {
        let mut grid = Grid::new(10, vec![Tile::grass(0, 0), Tile::grass(1, 0)]);
        let old = grid.replace_tile(1, 0).unwrap();
        assert_eq!(old.tile_type, TileType::grass());

        let at: Vec<&Tile> = grid.tiles().iter().filter(|t| t.x() == 1 && t.y() == 0).collect();
        assert_eq!(at.len(), 1);
        assert_eq!(at[0].tile_type, TileType::Water);
        assert_eq!(grid.get(0, 0).unwrap().tile_type, TileType::grass());
    }

    #[test]
    fn test_replace_missing_tile() {
        let mut grid = Grid::new(10, vec![]);
        assert!(grid.replace_tile(5, 5).is_none());
        assert!(grid.tiles().is_empty());
    }

    #[test]
    fn test_replace_water_stays_single() {
        let mut grid = Grid::new(10, vec![Tile::water(2, 2)]);
        grid.replace_tile(2, 2);
        assert_eq!(grid.tiles().len(), 1);
        assert_eq!(grid.get(2, 2).unwrap().tile_type, TileType::Water);
    }
}
