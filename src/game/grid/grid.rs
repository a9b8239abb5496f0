use crate::game::types::{Tile, WorldSize};

/// Ground tiles indexed `[y][x]`. `None` leaves the cell undrawn.
pub type TileGrid = Vec<Vec<Option<Tile>>>;

/// Build a ground grid with every cell set to `tile`.
pub fn generate_ground(size: WorldSize, tile: Tile) -> TileGrid {
    vec![vec![Some(tile); size.width as usize]; size.height as usize]
}

/// Tile at `(x, y)`, if the cell exists and holds one.
pub fn tile_at(grid: &TileGrid, x: usize, y: usize) -> Option<Tile> {
    grid.get(y).and_then(|row| row.get(x)).copied().flatten()
}
