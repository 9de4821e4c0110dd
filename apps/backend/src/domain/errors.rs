use thiserror::Error;

/// Validation failures raised by the round tracker.
///
/// Every variant is scoped to the single rejected operation; the tracker
/// state is never modified when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("invalid player {player}: expected 1..={player_count}")]
    InvalidPlayer { player: u32, player_count: u32 },
    #[error("invalid face value {0}: expected 1..=6")]
    InvalidFaceValue(u32),
    #[error("all dice are already used: {revealed} of {pool} revealed, {requested} more requested")]
    DicePoolExhausted {
        requested: u32,
        revealed: u32,
        pool: u32,
    },
}

impl DomainError {
    pub fn invalid_arguments(detail: impl Into<String>) -> Self {
        Self::InvalidArguments(detail.into())
    }
}
