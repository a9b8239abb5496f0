//! Tile-based game scaffold.
//!
//! `GameState` owns the world and notifies observers; layers in `render`
//! draw it; `ui` runs the fixed-rate display loop.

pub mod types;
pub mod state;
pub mod observer;

pub mod entities;
pub mod grid;
pub mod render;
pub mod ui;
pub mod demo;
