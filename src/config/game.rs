//! Tile game configuration constants.
//!
//! This module defines the world dimensions, the starting layout, tile sizes
//! and the display loop parameters. `TileGameConfig` bundles them so a JSON
//! file can override any subset.

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::game::types::{Position, Tile, WorldSize};

/// Number of columns in the world grid.
pub const WORLD_WIDTH: u32 = 16;

/// Number of rows in the world grid.
pub const WORLD_HEIGHT: u32 = 10;

/// Tile used for every ground cell of a fresh world.
pub const DEFAULT_GROUND_TILE: Tile = Tile { x: 5, y: 1 };

/// Starting position of the single initial unit.
pub const INITIAL_UNIT_POSITION: Position = Position { x: 8, y: 9 };

/// Sprite of the single initial unit.
pub const INITIAL_UNIT_TILE: Tile = Tile { x: 1, y: 0 };

/// Width and height, in pixels, of one grid cell on screen and in the tileset.
pub const CELL_SIZE: u32 = 64;

/// Window size before the world size is known.
pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 720;

/// Target frame rate of the display loop.
pub const TARGET_FPS: u32 = 60;

pub const WINDOW_CAPTION: &str = "THE ALEX GAME";

/// Largest width or height, in pixels, of any surface or tileset.
pub const MAX_SURFACE_SIDE: u32 = 16_384;

/// Runtime configuration of the tile game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileGameConfig {
    pub world_width: u32,
    pub world_height: u32,
    pub ground_tile: Tile,
    pub unit_position: Position,
    pub unit_tile: Tile,
    pub cell_size: u32,
    pub window_width: u32,
    pub window_height: u32,
    pub target_fps: u32,
    pub caption: String,
}

impl Default for TileGameConfig {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            ground_tile: DEFAULT_GROUND_TILE,
            unit_position: INITIAL_UNIT_POSITION,
            unit_tile: INITIAL_UNIT_TILE,
            cell_size: CELL_SIZE,
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            target_fps: TARGET_FPS,
            caption: WINDOW_CAPTION.to_string(),
        }
    }
}

impl TileGameConfig {
    /// Parse a JSON document; missing fields keep their default value.
    pub fn from_json_str(json: &str) -> Result<Self, GameError> {
        let config: TileGameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self, GameError> {
        let json = fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        info!("[Config] Loaded tile game configuration from {}", path.display());
        Ok(config)
    }

    /// Reject values that cannot produce a playable world.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.world_width == 0 || self.world_height == 0 {
            return Err(GameError::InvalidConfig(format!(
                "world size must be non-zero, got {}x{}",
                self.world_width, self.world_height
            )));
        }
        if self.cell_size == 0 {
            return Err(GameError::InvalidConfig("cell size must be non-zero".to_string()));
        }
        if self.target_fps == 0 {
            return Err(GameError::InvalidConfig("target fps must be non-zero".to_string()));
        }
        let world = WorldSize {
            width: self.world_width,
            height: self.world_height,
        };
        match world.pixel_size(self.cell_size) {
            Some((width, height)) if width <= MAX_SURFACE_SIDE && height <= MAX_SURFACE_SIDE => {}
            _ => {
                return Err(GameError::InvalidConfig(format!(
                    "world of {}x{} cells of {} px exceeds {} px per side",
                    self.world_width, self.world_height, self.cell_size, MAX_SURFACE_SIDE
                )));
            }
        }
        if self.window_width > MAX_SURFACE_SIDE || self.window_height > MAX_SURFACE_SIDE {
            return Err(GameError::InvalidConfig(format!(
                "window {}x{} exceeds {} px per side",
                self.window_width, self.window_height, MAX_SURFACE_SIDE
            )));
        }
        for tile in [self.ground_tile, self.unit_tile] {
            if !self.tile_fits_sheet(tile) {
                return Err(GameError::InvalidConfig(format!(
                    "tile ({}, {}) lies beyond a {} px tileset",
                    tile.x, tile.y, MAX_SURFACE_SIDE
                )));
            }
        }
        if !world.contains(self.unit_position) {
            return Err(GameError::InvalidConfig(format!(
                "initial unit position ({}, {}) lies outside the world",
                self.unit_position.x, self.unit_position.y
            )));
        }
        Ok(())
    }

    /// A sheet holding `tile` stays within `MAX_SURFACE_SIDE` on both axes.
    fn tile_fits_sheet(&self, tile: Tile) -> bool {
        let side = |index: u32| {
            index
                .checked_add(1)
                .and_then(|cells| cells.checked_mul(self.cell_size))
                .is_some_and(|pixels| pixels <= MAX_SURFACE_SIDE)
        };
        side(tile.x) && side(tile.y)
    }
}
