//! Parsers for the colon-separated move and claim arguments.

use dice_odds::{ClaimParams, MoveParams};

/// Parses `PLAYER:DICE:VALUE`.
pub fn parse_move(s: &str) -> Result<MoveParams, String> {
    match parse_fields(s, "PLAYER:DICE:VALUE")?.as_slice() {
        [player, dice, value] => Ok(MoveParams::new(*player, *dice, *value)),
        _ => Err(format!("expected PLAYER:DICE:VALUE, got '{s}'")),
    }
}

/// Parses `DICE:VALUE`.
pub fn parse_claim(s: &str) -> Result<ClaimParams, String> {
    match parse_fields(s, "DICE:VALUE")?.as_slice() {
        [dice, value] => Ok(ClaimParams::new(*dice, *value)),
        _ => Err(format!("expected DICE:VALUE, got '{s}'")),
    }
}

fn parse_fields(s: &str, format: &str) -> Result<Vec<u32>, String> {
    s.split(':')
        .map(|field| {
            field
                .trim()
                .parse::<u32>()
                .map_err(|_| format!("expected {format}, '{field}' is not a non-negative integer"))
        })
        .collect()
}
