//! Software rendering of the game state.
//!
//! Surfaces are RGBA images. Each `Layer` draws one slice of the state
//! (terrain or units) onto the frame surface, back to front.

pub mod tileset;
pub mod layer;
pub mod array_layer;
pub mod units_layer;

pub use tileset::*;
pub use layer::*;
pub use array_layer::*;
pub use units_layer::*;

/// Frame and layer surfaces.
pub type Surface = image::RgbaImage;
