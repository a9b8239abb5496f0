//! Interactive loop for the guessing game.
//!
//! Reader and writer are injected so the loop runs the same way on the
//! terminal and in tests.

use std::io::{BufRead, Write};

use log::{debug, info};
use rand::Rng;

use crate::config::guess::{NOT_A_NUMBER_MESSAGE, PROMPT};
use crate::error::GuessError;
use crate::guess::state::{GuessGame, parse_input};
use crate::guess::types::{GuessStatus, PlayerInput};

/// Prompt until the player types a whole number or quits.
/// End of input counts as quitting.
pub fn process_input<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<PlayerInput, GuessError> {
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!("[Guess] End of input, quitting");
            return Ok(PlayerInput::Quit);
        }
        let line = line.trim_end_matches(['\r', '\n']);

        match parse_input(line) {
            Ok(player_input) => return Ok(player_input),
            Err(GuessError::NotANumber(word)) => {
                debug!("[Guess] Rejected input {:?}", word);
                writeln!(out, "{}", NOT_A_NUMBER_MESSAGE)?;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Play one game from start to finish and return how it ended.
pub fn run_game<R: BufRead, W: Write, G: Rng + ?Sized>(
    input: &mut R,
    out: &mut W,
    rng: &mut G,
) -> Result<GuessStatus, GuessError> {
    let game = GuessGame::init(rng);
    play(game, input, out)
}

/// Drive an already initialized game until it reaches a terminal status.
pub fn play<R: BufRead, W: Write>(
    mut game: GuessGame,
    input: &mut R,
    out: &mut W,
) -> Result<GuessStatus, GuessError> {
    let mut guesses = 0u32;
    while !game.is_over() {
        let player_input = process_input(input, out)?;
        if let PlayerInput::Number(_) = player_input {
            guesses += 1;
        }
        game.update(player_input);
        game.render(out)?;
    }
    info!("[Guess] Game over with status {:?} after {} guesses", game.status(), guesses);
    Ok(game.status())
}
