//! Error types shared by the guessing game and the tile game.
//!
//! Library code returns these through `Result`; `main` wraps them with `anyhow` context.

use thiserror::Error;
use uuid::Uuid;

use crate::game::types::Tile;
use crate::guess::types::GuessStatus;

/// Errors raised by the number-guessing loop.
#[derive(Error, Debug)]
pub enum GuessError {
    /// The player typed something that is neither a whole number nor the quit token.
    #[error("not a whole number: {0:?}")]
    NotANumber(String),

    /// A status reached `render` that has no message attached to it.
    #[error("unexpected game status {0:?}")]
    UnexpectedStatus(GuessStatus),

    /// Reading the player's input or writing a message failed.
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the tile game.
#[derive(Error, Debug)]
pub enum GameError {
    /// No unit carries this id.
    #[error("unit not found: {0}")]
    UnitNotFound(Uuid),

    /// The unit is already marked dead.
    #[error("unit already dead: {0}")]
    UnitAlreadyDead(Uuid),

    /// The tile coordinate points outside the tileset texture.
    #[error("tile ({}, {}) lies outside a {columns}x{rows} tileset", .tile.x, .tile.y)]
    TileOutOfTileset {
        /// The offending tile.
        tile: Tile,
        /// Tile columns available in the texture.
        columns: u32,
        /// Tile rows available in the texture.
        rows: u32,
    },

    /// Configuration values that cannot describe a playable world.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Malformed configuration file.
    #[error("configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Encoding or decoding an image failed.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Filesystem access failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
