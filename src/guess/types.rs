use serde::{Serialize, Deserialize};

/// Status of a guessing game after each update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuessStatus {
    /// No guess processed yet.
    InProgress,
    /// Last guess was below the magic number.
    Higher,
    /// Last guess was above the magic number.
    Lower,
    Win,
    End,
}

impl GuessStatus {
    /// `Win` and `End` stop the loop.
    pub fn is_terminal(self) -> bool {
        matches!(self, GuessStatus::Win | GuessStatus::End)
    }
}

/// One accepted line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    Number(i64),
    Quit,
}
