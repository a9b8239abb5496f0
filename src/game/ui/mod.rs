//! User interface: owns the frame surface, the layers and the display loop.

pub mod clock;
pub mod display;

pub use clock::*;
pub use display::*;

use image::Rgba;
use log::{debug, info};

use crate::config::game::TileGameConfig;
use crate::error::GameError;
use crate::game::render::{Layer, Surface};
use crate::game::state::GameState;

const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Fixed-rate display loop over a game state and its layers.
pub struct UserInterface<D: Display> {
    display: D,
    surface: Surface,
    clock: FrameClock,
    state: GameState,
    layers: Vec<Box<dyn Layer>>,
    running: bool,
    frames: u64,
}

impl<D: Display> UserInterface<D> {
    /// Layers are drawn in order, first one at the back. The display is
    /// resized to fit the world.
    pub fn new(
        config: &TileGameConfig,
        mut display: D,
        state: GameState,
        layers: Vec<Box<dyn Layer>>,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let world = state.world_size();
        let (width, height) = world.pixel_size(config.cell_size).ok_or_else(|| {
            GameError::InvalidConfig(format!(
                "world of {}x{} cells of {} px does not fit a surface",
                world.width, world.height, config.cell_size
            ))
        })?;

        display.set_caption(&config.caption);
        display.set_mode(config.window_width, config.window_height);

        let mut ui = Self {
            display,
            surface: Surface::from_pixel(config.window_width, config.window_height, BACKGROUND),
            clock: FrameClock::new(config.target_fps),
            state,
            layers,
            running: true,
            frames: 0,
        };
        ui.world_size_changed(width, height);
        Ok(ui)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Resize the output to `width` x `height` pixels.
    pub fn world_size_changed(&mut self, width: u32, height: u32) {
        info!("[UserInterface] World size changed, display is now {}x{}", width, height);
        self.display.set_mode(width, height);
        self.surface = Surface::from_pixel(width, height, BACKGROUND);
    }

    /// Stop the loop at the start of the next iteration.
    pub fn quit_requested(&mut self) {
        debug!("[UserInterface] Quit requested");
        self.running = false;
    }

    /// Draw every layer onto the frame surface.
    pub fn render_frame(&mut self) -> Result<(), GameError> {
        for pixel in self.surface.pixels_mut() {
            *pixel = BACKGROUND;
        }
        for layer in self.layers.iter_mut() {
            layer.render(&self.state, &mut self.surface)?;
        }
        Ok(())
    }

    /// Run until a quit is requested. Returns the number of frames presented.
    pub fn run(&mut self) -> Result<u64, GameError> {
        info!("[UserInterface] Display loop started");
        while self.running {
            for event in self.display.poll_events() {
                match event {
                    DisplayEvent::Quit => self.quit_requested(),
                }
            }
            if !self.running {
                break;
            }

            self.render_frame()?;
            self.display.present(&self.surface)?;
            self.frames += 1;
            self.clock.tick();
        }
        info!("[UserInterface] Display loop stopped after {} frames", self.frames);
        Ok(self.frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::render::{ArrayLayer, Tileset, UnitsLayer};
    use crate::game::types::{CellSize, Tile};

    fn test_config() -> TileGameConfig {
        TileGameConfig {
            world_width: 4,
            world_height: 3,
            unit_position: crate::game::types::Position::new(2, 1),
            ground_tile: Tile::new(0, 0),
            unit_tile: Tile::new(1, 0),
            cell_size: 4,
            target_fps: 1000,
            ..TileGameConfig::default()
        }
    }

    fn build_ui(display: HeadlessDisplay) -> UserInterface<HeadlessDisplay> {
        let config = test_config();
        let state = GameState::new(&config);
        let tileset = Tileset::placeholder(CellSize::square(config.cell_size), 2, 1).unwrap();
        let layers: Vec<Box<dyn Layer>> = vec![
            Box::new(ArrayLayer::new(tileset.clone(), state.ground().clone())),
            Box::new(UnitsLayer::new(tileset)),
        ];
        UserInterface::new(&config, display, state, layers).unwrap()
    }

    #[test]
    fn test_display_sized_to_world() {
        let ui = build_ui(HeadlessDisplay::new(1280, 720));
        assert_eq!(ui.display().mode(), (16, 12));
        assert_eq!(ui.surface.dimensions(), (16, 12));
        assert_eq!(ui.display().caption(), "THE ALEX GAME");
    }

    #[test]
    fn test_loop_stops_on_quit_event() {
        let mut ui = build_ui(HeadlessDisplay::new(1280, 720).with_max_frames(3));
        let frames = ui.run().unwrap();
        assert_eq!(frames, 3);
        assert_eq!(ui.display().frames_presented(), 3);
        assert!(!ui.running);
    }

    #[test]
    fn test_quit_before_run_presents_nothing() {
        let mut ui = build_ui(HeadlessDisplay::new(1280, 720));
        ui.quit_requested();
        assert_eq!(ui.run().unwrap(), 0);
        assert!(ui.display().last_frame().is_none());
    }

    #[test]
    fn test_frame_shows_terrain_and_unit() {
        let mut ui = build_ui(HeadlessDisplay::new(1280, 720).with_max_frames(1));
        ui.run().unwrap();
        let frame = ui.display().last_frame().expect("one frame");
        let tileset = Tileset::placeholder(CellSize::square(4), 2, 1).unwrap();
        let ground = tileset.tile_image(Tile::new(0, 0)).unwrap();
        let unit = tileset.tile_image(Tile::new(1, 0)).unwrap();
        // Interior pixel of cell (0, 0) and of the unit's cell (2, 1).
        assert_eq!(frame.get_pixel(1, 1), ground.get_pixel(1, 1));
        assert_eq!(frame.get_pixel(9, 5), unit.get_pixel(1, 1));
    }

    #[test]
    fn test_world_too_large_for_a_surface() {
        let config = test_config();
        let size = crate::game::types::WorldSize { width: 70_000, height: 1 };
        let state = GameState::with_parts(size, vec![], vec![]);
        let result = UserInterface::new(
            &TileGameConfig { cell_size: 70_000, ..config },
            HeadlessDisplay::new(10, 10),
            state,
            vec![],
        );
        assert!(matches!(result, Err(GameError::InvalidConfig(_))));
    }
}
