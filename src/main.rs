//! Main entry point.
//!
//! Parses the command line, initializes logging and runs one of the two
//! programs: the console guessing game or the headless tile game demo.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use alex_game::config::game::TileGameConfig;
use alex_game::game::demo::game_loop::{TileDemoOptions, run_tile_demo};
use alex_game::guess::game_loop::run_game;

#[derive(Parser)]
#[command(author, version, about = "Number guessing game and tile game scaffold", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Guess the magic number between 1 and 10
    Guess,
    /// Run the tile game display loop on a headless display
    Tiles {
        /// JSON file overriding the default world and display settings
        #[arg(long)]
        config: Option<PathBuf>,
        /// Frames to present before quitting
        #[arg(long, default_value_t = 120)]
        frames: u64,
        /// Override the target frame rate
        #[arg(long)]
        fps: Option<u32>,
        /// Save the last frame as a PNG file
        #[arg(long)]
        screenshot: Option<PathBuf>,
        /// Print the world as text when the loop ends
        #[arg(long)]
        ascii: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logger from environment variable (RUST_LOG).
    env_logger::init();

    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Guess => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut out = io::stdout();
            run_game(&mut input, &mut out, &mut rand::rng()).context("guessing game failed")?;
        }
        Cmd::Tiles { config, frames, fps, screenshot, ascii } => {
            let mut tile_config = match &config {
                Some(path) => TileGameConfig::load(path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => TileGameConfig::default(),
            };
            if let Some(fps) = fps {
                tile_config.target_fps = fps;
            }
            let options = TileDemoOptions {
                frames,
                screenshot,
                print_world: ascii,
            };
            run_tile_demo(&tile_config, &options, &mut io::stdout()).context("tile game failed")?;
        }
    }
    Ok(())
}
