//! Headless tile game loop for local testing/demo.
//!
//! Builds the default world, its two layers and a headless display, then
//! runs the user interface for a fixed number of frames.

use std::io::Write;
use std::path::PathBuf;
use std::rc::Rc;

use log::{info, warn};

use crate::config::game::{MAX_SURFACE_SIDE, TileGameConfig};
use crate::error::GameError;
use crate::game::demo::render::print_world;
use crate::game::observer::DestroyedUnitsLog;
use crate::game::render::{ArrayLayer, Layer, Tileset, UnitsLayer};
use crate::game::state::GameState;
use crate::game::types::CellSize;
use crate::game::ui::{HeadlessDisplay, UserInterface};

/// Placeholder sheet size, large enough for the default ground and unit tiles.
const PLACEHOLDER_COLUMNS: u32 = 8;
const PLACEHOLDER_ROWS: u32 = 4;

/// Options for one demo run.
#[derive(Debug, Clone, Default)]
pub struct TileDemoOptions {
    /// Frames to present before quitting.
    pub frames: u64,
    /// Where to save the last frame as PNG.
    pub screenshot: Option<PathBuf>,
    /// Print the world as text once the loop ends.
    pub print_world: bool,
}

/// Build the user interface for `config` on top of `display`.
pub fn build_user_interface(
    config: &TileGameConfig,
    display: HeadlessDisplay,
) -> Result<UserInterface<HeadlessDisplay>, GameError> {
    config.validate()?;
    let state = GameState::new(config);

    let columns = sheet_cells(config.ground_tile.x, config.unit_tile.x, PLACEHOLDER_COLUMNS, config.cell_size)?;
    let rows = sheet_cells(config.ground_tile.y, config.unit_tile.y, PLACEHOLDER_ROWS, config.cell_size)?;
    let tileset = Tileset::placeholder(CellSize::square(config.cell_size), columns, rows)?;

    let layers: Vec<Box<dyn Layer>> = vec![
        Box::new(ArrayLayer::new(tileset.clone(), state.ground().clone())),
        Box::new(UnitsLayer::new(tileset)),
    ];
    UserInterface::new(config, display, state, layers)
}

/// Cells along one axis of the placeholder sheet: enough for both tile
/// indices, padded up to `preferred` while the sheet stays within
/// `MAX_SURFACE_SIDE`.
fn sheet_cells(first: u32, second: u32, preferred: u32, cell_size: u32) -> Result<u32, GameError> {
    let needed = first.max(second).checked_add(1).ok_or_else(|| {
        GameError::InvalidConfig(format!("tile index {} is out of range", first.max(second)))
    })?;
    let room = MAX_SURFACE_SIDE / cell_size.max(1);
    Ok(needed.max(preferred.min(room)))
}

/// Run the demo. Returns the number of frames presented.
pub fn run_tile_demo<W: Write>(
    config: &TileGameConfig,
    options: &TileDemoOptions,
    out: &mut W,
) -> Result<u64, GameError> {
    let display = HeadlessDisplay::new(config.window_width, config.window_height)
        .with_max_frames(options.frames);
    let mut ui = build_user_interface(config, display)?;

    let destroyed = Rc::new(DestroyedUnitsLog::new());
    let observer = ui.state_mut().add_observer(&destroyed);

    let frames = ui.run()?;

    if let Some(path) = &options.screenshot {
        if !ui.display().save_last_frame(path)? {
            warn!("[Demo] No frame presented, nothing saved to {}", path.display());
        }
    }
    if options.print_world {
        print_world(ui.state(), out)?;
    }

    ui.state_mut().remove_observer(observer);
    info!(
        "[Demo] Finished after {} frames, {} unit(s) destroyed",
        frames,
        destroyed.destroyed().len()
    );
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Tile;

    #[test]
    fn test_demo_runs_requested_frames_and_prints_world() {
        let config = TileGameConfig {
            cell_size: 2,
            target_fps: 1000,
            ..TileGameConfig::default()
        };
        let options = TileDemoOptions {
            frames: 2,
            screenshot: None,
            print_world: true,
        };
        let mut out = Vec::new();
        let frames = run_tile_demo(&config, &options, &mut out).unwrap();
        assert_eq!(frames, 2);

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().filter(|l| l.starts_with("██")).count(), 10);
        assert!(text.contains("U0"));
    }

    #[test]
    fn test_oversized_configs_fail_without_panicking() {
        let huge_world = TileGameConfig {
            world_width: 70_000,
            cell_size: 70_000,
            ..TileGameConfig::default()
        };
        let result = build_user_interface(&huge_world, HeadlessDisplay::new(10, 10));
        assert!(matches!(result, Err(GameError::InvalidConfig(_))));

        let far_tile = TileGameConfig {
            ground_tile: Tile::new(u32::MAX, 0),
            ..TileGameConfig::default()
        };
        let result = build_user_interface(&far_tile, HeadlessDisplay::new(10, 10));
        assert!(matches!(result, Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_sheet_cells_bounds() {
        assert_eq!(sheet_cells(5, 1, 8, 64).unwrap(), 8);
        assert_eq!(sheet_cells(11, 1, 8, 64).unwrap(), 12);
        // One 16384 px cell leaves room for a single column.
        assert_eq!(sheet_cells(0, 0, 8, MAX_SURFACE_SIDE).unwrap(), 1);
        assert!(matches!(sheet_cells(u32::MAX, 0, 8, 64), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = TileGameConfig {
            world_width: 0,
            ..TileGameConfig::default()
        };
        let result = build_user_interface(&config, HeadlessDisplay::new(10, 10));
        assert!(matches!(result, Err(GameError::InvalidConfig(_))));
    }
}
