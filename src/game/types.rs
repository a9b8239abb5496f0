use serde::{Serialize, Deserialize};
use uuid::Uuid;

/// A cell coordinate in the world grid. Signed so callers can express
/// positions that fall off the left or top edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A coordinate into a sprite sheet, in tiles (not pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub x: u32,
    pub y: u32,
}

impl Tile {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Size of one cell in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSize {
    pub width: u32,
    pub height: u32,
}

impl CellSize {
    pub fn square(side: u32) -> Self {
        Self { width: side, height: side }
    }
}

/// World dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldSize {
    pub width: u32,
    pub height: u32,
}

impl WorldSize {
    /// True if `position` names a cell of this world.
    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.height
    }

    /// Size in pixels with square cells of `cell_size`, `None` on overflow.
    pub fn pixel_size(&self, cell_size: u32) -> Option<(u32, u32)> {
        Some((self.width.checked_mul(cell_size)?, self.height.checked_mul(cell_size)?))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemStatus {
    Alive,
    Dead,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Unit,
}

/// Anything placed on the world grid. Items are never removed from the
/// state, only marked dead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameItem {
    pub id: Uuid,
    pub kind: ItemKind,
    pub position: Position,
    pub tile: Tile,
    pub status: ItemStatus,
    /// Counter-clockwise rotation in degrees.
    pub orientation: f32,
}

impl GameItem {
    pub fn new(kind: ItemKind, position: Position, tile: Tile) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            position,
            tile,
            status: ItemStatus::Alive,
            orientation: 0.0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.status == ItemStatus::Alive
    }
}
