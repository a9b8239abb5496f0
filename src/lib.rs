//! Number-guessing console loop and tile game scaffold, used by the `alex-game` binary.

pub mod config;
pub mod error;
pub mod game;
pub mod guess;
mod tests;
