//! Error types for the memory game.

use thiserror::Error;

use crate::core::CardHandle;
use crate::core::config::{MAX_CARDS, MIN_CARDS};

/// Message shown to the player whenever a board size is rejected.
pub const BOARD_SIZE_HINT: &str = "Please enter a valid, even number of cards between 4 and 100.";

/// A requested board size that cannot be dealt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardSizeError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("{0} is odd; every card needs a partner")]
    Odd(usize),

    #[error("{0} is fewer than the minimum of {min} cards", min = MIN_CARDS)]
    TooFew(usize),

    #[error("{0} is more than the maximum of {max} cards", max = MAX_CARDS)]
    TooMany(usize),
}

/// Errors raised by a game session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid board size: {0}")]
    InvalidBoardSize(#[from] BoardSizeError),

    #[error("{0} is not on the board")]
    UnknownCard(CardHandle),

    /// The revert was cancelled by a restart or has already fired.
    #[error("revert #{0} is no longer pending")]
    StaleRevert(u64),
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}
