use image::{Rgba, RgbaImage, imageops};

use crate::error::GameError;
use crate::game::types::{CellSize, Tile};

/// A sprite sheet cut into equally sized cells.
#[derive(Debug, Clone)]
pub struct Tileset {
    cell_size: CellSize,
    texture: RgbaImage,
}

impl Tileset {
    pub fn new(cell_size: CellSize, texture: RgbaImage) -> Result<Self, GameError> {
        if cell_size.width == 0 || cell_size.height == 0 {
            return Err(GameError::InvalidConfig("tileset cell size must be non-zero".to_string()));
        }
        Ok(Self { cell_size, texture })
    }

    /// Generated sheet with one flat, distinct colour per tile. Stands in for
    /// artwork when no sprite sheet is supplied.
    pub fn placeholder(cell_size: CellSize, columns: u32, rows: u32) -> Result<Self, GameError> {
        let texture = RgbaImage::from_fn(
            cell_size.width.saturating_mul(columns),
            cell_size.height.saturating_mul(rows),
            |px, py| {
                let (tx, ty) = (px / cell_size.width.max(1), py / cell_size.height.max(1));
                let border = px % cell_size.width.max(1) == 0 || py % cell_size.height.max(1) == 0;
                let shade = if border { 0x40 } else { 0xff };
                Rgba([
                    ((tx * 53 + 40) % 256) as u8 & shade,
                    ((ty * 97 + 60) % 256) as u8 & shade,
                    (((tx + ty) * 31 + 90) % 256) as u8 & shade,
                    0xff,
                ])
            },
        );
        Self::new(cell_size, texture)
    }

    pub fn cell_width(&self) -> u32 {
        self.cell_size.width
    }

    pub fn cell_height(&self) -> u32 {
        self.cell_size.height
    }

    /// Whole tile columns available in the texture.
    pub fn columns(&self) -> u32 {
        self.texture.width() / self.cell_size.width
    }

    /// Whole tile rows available in the texture.
    pub fn rows(&self) -> u32 {
        self.texture.height() / self.cell_size.height
    }

    /// Copy of the sub-image for `tile`.
    pub fn tile_image(&self, tile: Tile) -> Result<RgbaImage, GameError> {
        if tile.x >= self.columns() || tile.y >= self.rows() {
            return Err(GameError::TileOutOfTileset {
                tile,
                columns: self.columns(),
                rows: self.rows(),
            });
        }
        Ok(imageops::crop_imm(
            &self.texture,
            tile.x * self.cell_size.width,
            tile.y * self.cell_size.height,
            self.cell_size.width,
            self.cell_size.height,
        )
        .to_image())
    }
}
