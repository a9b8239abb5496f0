use image::imageops;
use log::debug;

use crate::error::GameError;
use crate::game::grid::{TileGrid, tile_at};
use crate::game::render::{Layer, Surface, Tileset, render_tile};
use crate::game::state::GameState;
use crate::game::types::Position;

/// Static terrain. The whole array is rasterized once into a cached surface,
/// which is then copied every frame until the tileset changes.
pub struct ArrayLayer {
    tileset: Tileset,
    array: TileGrid,
    cache: Option<Surface>,
    /// Times the cache has been rasterized.
    cache_builds: u32,
}

impl ArrayLayer {
    pub fn new(tileset: Tileset, array: TileGrid) -> Self {
        Self {
            tileset,
            array,
            cache: None,
            cache_builds: 0,
        }
    }

    fn rasterize(&self, state: &GameState, width: u32, height: u32) -> Result<Surface, GameError> {
        let mut composite = Surface::new(width, height);
        for y in 0..state.world_height() {
            for x in 0..state.world_width() {
                if let Some(tile) = tile_at(&self.array, x as usize, y as usize) {
                    render_tile(&mut composite, &self.tileset, Position::new(x as i32, y as i32), tile, None)?;
                }
            }
        }
        Ok(composite)
    }
}

impl Layer for ArrayLayer {
    fn render(&mut self, state: &GameState, surface: &mut Surface) -> Result<(), GameError> {
        if self.cache.is_none() {
            let composite = self.rasterize(state, surface.width(), surface.height())?;
            self.cache_builds += 1;
            debug!(
                "[ArrayLayer] Rasterized {}x{} terrain (build #{})",
                state.world_width(),
                state.world_height(),
                self.cache_builds
            );
            self.cache = Some(composite);
        }
        if let Some(cache) = &self.cache {
            imageops::overlay(surface, cache, 0, 0);
        }
        Ok(())
    }

    fn set_tileset(&mut self, tileset: Tileset) {
        self.tileset = tileset;
        self.cache = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    use crate::game::grid::generate_ground;
    use crate::game::types::{CellSize, Tile, WorldSize};

    fn terrain() -> (GameState, ArrayLayer) {
        let size = WorldSize { width: 3, height: 2 };
        let mut ground = generate_ground(size, Tile::new(1, 1));
        ground[0][0] = None;
        let state = GameState::with_parts(size, ground.clone(), vec![]);
        let tileset = Tileset::placeholder(CellSize::square(4), 2, 2).unwrap();
        (state, ArrayLayer::new(tileset, ground))
    }

    #[test]
    fn test_cache_built_once_across_frames() {
        let (state, mut layer) = terrain();
        let mut surface = Surface::new(12, 8);
        for _ in 0..5 {
            layer.render(&state, &mut surface).unwrap();
        }
        assert_eq!(layer.cache_builds, 1);
    }

    #[test]
    fn test_tileset_change_invalidates_once() {
        let (state, mut layer) = terrain();
        let mut surface = Surface::new(12, 8);
        layer.render(&state, &mut surface).unwrap();

        layer.set_tileset(Tileset::placeholder(CellSize::square(4), 2, 2).unwrap());
        assert!(layer.cache.is_none());
        for _ in 0..3 {
            layer.render(&state, &mut surface).unwrap();
        }
        assert_eq!(layer.cache_builds, 2);
    }

    #[test]
    fn test_empty_cells_stay_transparent() {
        let (state, mut layer) = terrain();
        let mut surface = Surface::new(12, 8);
        layer.render(&state, &mut surface).unwrap();
        assert_eq!(*surface.get_pixel(1, 1), Rgba([0, 0, 0, 0]));
        assert_eq!(surface.get_pixel(5, 1)[3], 0xff);
        assert_eq!(surface.get_pixel(1, 5)[3], 0xff);
    }
}
