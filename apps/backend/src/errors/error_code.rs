//! Error codes for the Dice Odds API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the Dice Odds API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Round validation
    /// A required move or claim field was missing, or the table size is unusable
    InvalidArguments,
    /// Player number outside 1..=players
    InvalidPlayer,
    /// Face value outside 1..=6
    InvalidFaceValue,
    /// Move would reveal more dice than the round holds
    DicePoolExhausted,

    // Request validation
    /// Invalid game ID provided
    InvalidGameId,
    /// General bad request error (e.g. malformed JSON)
    BadRequest,

    // Resource not found
    /// Game not found
    GameNotFound,

    // Capacity
    /// Registry already holds the configured number of games
    TooManyGames,

    // System errors
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    ///
    /// This is the exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidArguments => "INVALID_ARGUMENTS",
            Self::InvalidPlayer => "INVALID_PLAYER",
            Self::InvalidFaceValue => "INVALID_FACE_VALUE",
            Self::DicePoolExhausted => "DICE_POOL_EXHAUSTED",

            Self::InvalidGameId => "INVALID_GAME_ID",
            Self::BadRequest => "BAD_REQUEST",

            Self::GameNotFound => "GAME_NOT_FOUND",

            Self::TooManyGames => "TOO_MANY_GAMES",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
