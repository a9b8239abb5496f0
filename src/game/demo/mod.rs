// Demo module for the tile game. Provides the headless demo loop and a text
// rendering of the world for the terminal.
pub mod game_loop;
pub mod render;
