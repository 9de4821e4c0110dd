//! Domain layer: pure round-tracking logic and claim math.

pub mod claim_message;
pub mod errors;
pub mod probability;
pub mod rules;
pub mod snapshot;
pub mod tracker;

#[cfg(test)]
mod tests_props_tracker;
#[cfg(test)]
mod tests_tracker;

// Re-exports for ergonomics
pub use claim_message::{ClaimBand, ClaimOdds};
pub use errors::DomainError;
pub use snapshot::{snapshot, RoundSnapshot};
pub use tracker::{ClaimParams, DiceRoundTracker, MoveParams};
