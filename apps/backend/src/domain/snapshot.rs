//! Public snapshot API for observing round state without exposing internals.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::rules::FACES;
use crate::domain::tracker::DiceRoundTracker;

/// Point-in-time view of a round's revealed dice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub players: u32,
    pub pool_size: u32,
    pub total_revealed: u32,
    pub remaining_hidden: u32,
    /// Revealed count per face value, keyed 1..=6.
    pub face_counts: BTreeMap<u32, u32>,
}

pub fn snapshot(tracker: &DiceRoundTracker) -> RoundSnapshot {
    RoundSnapshot {
        players: tracker.player_count(),
        pool_size: tracker.pool_size(),
        total_revealed: tracker.total_revealed(),
        remaining_hidden: tracker.remaining_hidden(),
        face_counts: FACES.map(|face| (face, tracker.face_count(face))).collect(),
    }
}
