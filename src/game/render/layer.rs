use image::{RgbaImage, imageops};

use crate::error::GameError;
use crate::game::render::{Surface, Tileset};
use crate::game::state::GameState;
use crate::game::types::{Position, Tile};

/// One renderable slice of the game state.
pub trait Layer {
    /// Draw this layer onto `surface`.
    fn render(&mut self, state: &GameState, surface: &mut Surface) -> Result<(), GameError>;

    /// Swap the sprite sheet used by this layer.
    fn set_tileset(&mut self, tileset: Tileset);
}

/// Draw `tile` from `tileset` at grid `position`.
///
/// With an angle, the tile is rotated counter-clockwise (degrees) around its
/// centre on an enlarged canvas and shifted back so the centre stays put.
pub fn render_tile(
    surface: &mut Surface,
    tileset: &Tileset,
    position: Position,
    tile: Tile,
    angle: Option<f32>,
) -> Result<(), GameError> {
    let mut x = i64::from(position.x) * i64::from(tileset.cell_width());
    let mut y = i64::from(position.y) * i64::from(tileset.cell_height());
    let texture_tile = tileset.tile_image(tile)?;

    match angle {
        None => imageops::overlay(surface, &texture_tile, x, y),
        Some(degrees) => {
            let rotated = rotate_tile(&texture_tile, degrees);
            x -= (i64::from(rotated.width()) - i64::from(texture_tile.width())).div_euclid(2);
            y -= (i64::from(rotated.height()) - i64::from(texture_tile.height())).div_euclid(2);
            imageops::overlay(surface, &rotated, x, y);
        }
    }
    Ok(())
}

/// Rotate counter-clockwise by `degrees`. The result is the bounding box of
/// the rotated image; uncovered pixels are transparent.
pub fn rotate_tile(image: &RgbaImage, degrees: f32) -> RgbaImage {
    let normalized = degrees.rem_euclid(360.0);
    if normalized == 0.0 {
        return image.clone();
    }
    if normalized == 90.0 {
        return imageops::rotate270(image);
    }
    if normalized == 180.0 {
        return imageops::rotate180(image);
    }
    if normalized == 270.0 {
        return imageops::rotate90(image);
    }

    let (width, height) = image.dimensions();
    let (sin, cos) = normalized.to_radians().sin_cos();
    let new_width = (width as f32 * cos.abs() + height as f32 * sin.abs()).ceil() as u32;
    let new_height = (width as f32 * sin.abs() + height as f32 * cos.abs()).ceil() as u32;

    let (cx, cy) = (width as f32 / 2.0, height as f32 / 2.0);
    let (ncx, ncy) = (new_width as f32 / 2.0, new_height as f32 / 2.0);

    let mut rotated = RgbaImage::new(new_width, new_height);
    for (dx, dy, pixel) in rotated.enumerate_pixels_mut() {
        let x = dx as f32 + 0.5 - ncx;
        let y = dy as f32 + 0.5 - ncy;
        // Inverse mapping in y-down screen space.
        let sx = x * cos - y * sin + cx;
        let sy = x * sin + y * cos + cy;
        if sx >= 0.0 && sy >= 0.0 && sx < width as f32 && sy < height as f32 {
            *pixel = *image.get_pixel(sx as u32, sy as u32);
        }
    }
    rotated
}
