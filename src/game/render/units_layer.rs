use crate::error::GameError;
use crate::game::render::{Layer, Surface, Tileset, render_tile};
use crate::game::state::GameState;

/// Movable entities, redrawn every frame at their current position and
/// orientation.
pub struct UnitsLayer {
    tileset: Tileset,
}

impl UnitsLayer {
    pub fn new(tileset: Tileset) -> Self {
        Self { tileset }
    }
}

impl Layer for UnitsLayer {
    fn render(&mut self, state: &GameState, surface: &mut Surface) -> Result<(), GameError> {
        for unit in state.units() {
            render_tile(surface, &self.tileset, unit.position, unit.tile, Some(unit.orientation))?;
        }
        Ok(())
    }

    fn set_tileset(&mut self, tileset: Tileset) {
        self.tileset = tileset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    use crate::game::types::{CellSize, GameItem, ItemKind, Position, Tile, WorldSize};

    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

    #[test]
    fn test_units_follow_their_position() {
        let tileset = Tileset::new(CellSize::square(2), RgbaImage::from_pixel(2, 2, BLUE)).unwrap();
        let size = WorldSize { width: 4, height: 4 };
        let unit = GameItem::new(ItemKind::Unit, Position::new(1, 0), Tile::new(0, 0));
        let id = unit.id;
        let mut state = GameState::with_parts(size, vec![], vec![unit]);
        let mut layer = UnitsLayer::new(tileset);

        let mut frame = Surface::new(8, 8);
        layer.render(&state, &mut frame).unwrap();
        assert_eq!(*frame.get_pixel(2, 0), BLUE);

        state.unit_mut(id).unwrap().position = Position::new(3, 3);
        let mut frame = Surface::new(8, 8);
        layer.render(&state, &mut frame).unwrap();
        assert_eq!(*frame.get_pixel(2, 0), Rgba([0, 0, 0, 0]));
        assert_eq!(*frame.get_pixel(7, 7), BLUE);
    }

    #[test]
    fn test_unknown_tile_is_an_error() {
        let tileset = Tileset::placeholder(CellSize::square(2), 1, 1).unwrap();
        let size = WorldSize { width: 2, height: 2 };
        let unit = GameItem::new(ItemKind::Unit, Position::new(0, 0), Tile::new(4, 0));
        let state = GameState::with_parts(size, vec![], vec![unit]);
        let mut frame = Surface::new(4, 4);
        let result = UnitsLayer::new(tileset).render(&state, &mut frame);
        assert!(matches!(result, Err(GameError::TileOutOfTileset { .. })));
    }
}
