/// Main configuration module.
/// 
/// Re-exports submodules for the guessing game and tile game configuration.
pub mod guess;
pub mod game;
