/// Guessing game configuration constants.
/// 
/// This module defines the magic number range and the console vocabulary.
pub const MAGIC_NUMBER_MIN: i64 = 1;

/// Largest magic number that can be drawn (inclusive).
pub const MAGIC_NUMBER_MAX: i64 = 10;

/// Exact token that ends the game. Matching is case-sensitive.
pub const QUIT_TOKEN: &str = "Quit";

pub const PROMPT: &str = "What is the magic number? (Type 'Quit' to quit.) ";
pub const NOT_A_NUMBER_MESSAGE: &str = "Please type a number without decimals!";
