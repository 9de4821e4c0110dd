//! Error handling for the Dice Odds backend.

pub mod error_code;

pub use error_code::ErrorCode;
