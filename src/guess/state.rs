use std::io::Write;
use std::num::IntErrorKind;

use log::debug;
use rand::Rng;

use crate::config::guess::{MAGIC_NUMBER_MAX, MAGIC_NUMBER_MIN, QUIT_TOKEN};
use crate::error::GuessError;
use crate::guess::types::{GuessStatus, PlayerInput};

/// State of one guessing game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessGame {
    status: GuessStatus,
    magic_number: i64,
}

impl GuessGame {
    /// Start a game with a magic number drawn uniformly from the configured range.
    pub fn init<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let magic_number = rng.random_range(MAGIC_NUMBER_MIN..=MAGIC_NUMBER_MAX);
        debug!("[Guess] New game, magic number drawn in {}..={}", MAGIC_NUMBER_MIN, MAGIC_NUMBER_MAX);
        Self::with_magic_number(magic_number)
    }

    /// Start a game with a known magic number.
    pub fn with_magic_number(magic_number: i64) -> Self {
        Self {
            status: GuessStatus::InProgress,
            magic_number,
        }
    }

    pub fn status(&self) -> GuessStatus {
        self.status
    }

    pub fn magic_number(&self) -> i64 {
        self.magic_number
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Apply one player input to the status.
    pub fn update(&mut self, input: PlayerInput) -> GuessStatus {
        self.status = match input {
            PlayerInput::Quit => GuessStatus::End,
            PlayerInput::Number(n) if n == self.magic_number => GuessStatus::Win,
            PlayerInput::Number(n) if n > self.magic_number => GuessStatus::Lower,
            PlayerInput::Number(_) => GuessStatus::Higher,
        };
        debug!("[Guess] Status is now {:?}", self.status);
        self.status
    }

    /// Write the message matching the current status.
    pub fn render<W: Write>(&self, out: &mut W) -> Result<(), GuessError> {
        let message = match self.status {
            GuessStatus::Win => "This is correct! You win!",
            GuessStatus::End => "Bye!",
            GuessStatus::Lower => "The magic number is lower",
            GuessStatus::Higher => "The magic number is higher",
            GuessStatus::InProgress => return Err(GuessError::UnexpectedStatus(self.status)),
        };
        writeln!(out, "{}", message)?;
        Ok(())
    }
}

/// Interpret one line typed by the player (line terminator already removed).
///
/// Numbers too large for `i64` saturate; they compare the same way against
/// any magic number in range.
pub fn parse_input(line: &str) -> Result<PlayerInput, GuessError> {
    if line == QUIT_TOKEN {
        return Ok(PlayerInput::Quit);
    }
    match line.trim().parse::<i64>() {
        Ok(n) => Ok(PlayerInput::Number(n)),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(PlayerInput::Number(i64::MAX)),
            IntErrorKind::NegOverflow => Ok(PlayerInput::Number(i64::MIN)),
            _ => Err(GuessError::NotANumber(line.to_string())),
        },
    }
}
