//! Console number-guessing game.
//!
//! A four-step loop: `init`, `process_input`, `update`, `render`, repeated
//! until the player wins or quits.

pub mod types;
pub mod state;
pub mod game_loop;
