use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::claim_message::ClaimOdds;
use crate::domain::errors::DomainError;
use crate::domain::probability::binomial_survival;
use crate::domain::rules::{face_index, is_valid_face, pool_size, FACE_COUNT, FACE_PROBABILITY};

/// Arguments for a reveal. Fields are optional so that an incomplete request
/// reaches validation and is rejected as `InvalidArguments`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveParams {
    /// 1-based player number.
    pub player: Option<u32>,
    /// Number of dice revealed.
    pub dice: Option<u32>,
    /// Face value shown on the revealed dice.
    pub value: Option<u32>,
}

impl MoveParams {
    pub fn new(player: u32, dice: u32, value: u32) -> Self {
        Self {
            player: Some(player),
            dice: Some(dice),
            value: Some(value),
        }
    }
}

/// Arguments for evaluating or challenging a claim of "at least `dice`
/// dice showing `value`".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimParams {
    pub dice: Option<u32>,
    pub value: Option<u32>,
}

impl ClaimParams {
    pub fn new(dice: u32, value: u32) -> Self {
        Self {
            dice: Some(dice),
            value: Some(value),
        }
    }

    fn require(self) -> Result<(u32, u32), DomainError> {
        match (self.dice, self.value) {
            (Some(dice), Some(value)) => Ok((dice, value)),
            _ => Err(DomainError::invalid_arguments(format!(
                "missing claim fields: {}; required format: claim(dice, value)",
                missing_fields(&[("dice", self.dice), ("value", self.value)])
            ))),
        }
    }
}

fn missing_fields(fields: &[(&str, Option<u32>)]) -> String {
    fields
        .iter()
        .filter(|(_, v)| v.is_none())
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Running tally of the dice revealed during one round.
///
/// Counts only ever grow. Callers serialize access to an instance; there is
/// no internal locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceRoundTracker {
    player_count: u32,
    pool_size: u32,
    face_counts: [u32; FACE_COUNT],
    total_revealed: u32,
}

impl DiceRoundTracker {
    pub fn new(player_count: u32) -> Result<Self, DomainError> {
        if player_count == 0 {
            return Err(DomainError::invalid_arguments(
                "player count must be at least 1",
            ));
        }
        let pool_size = pool_size(player_count).ok_or_else(|| {
            DomainError::invalid_arguments(format!("player count {player_count} is too large"))
        })?;

        Ok(Self {
            player_count,
            pool_size,
            face_counts: [0; FACE_COUNT],
            total_revealed: 0,
        })
    }

    pub fn player_count(&self) -> u32 {
        self.player_count
    }

    /// Dice in play this round (five per player).
    pub fn pool_size(&self) -> u32 {
        self.pool_size
    }

    pub fn total_revealed(&self) -> u32 {
        self.total_revealed
    }

    /// Dice still hidden in players' cups.
    pub fn remaining_hidden(&self) -> u32 {
        self.pool_size - self.total_revealed
    }

    /// Revealed dice showing `face`; zero for values outside 1..=6.
    pub fn face_count(&self, face: u32) -> u32 {
        face_index(face).map_or(0, |i| self.face_counts[i])
    }

    pub fn face_counts(&self) -> &[u32; FACE_COUNT] {
        &self.face_counts
    }

    /// Records a reveal of `dice` dice showing `value` by `player`.
    ///
    /// Only the round-wide total is checked against the pool; individual
    /// players are not held to their own five dice.
    pub fn record_move(&mut self, params: MoveParams) -> Result<(), DomainError> {
        let (player, dice, value) = match (params.player, params.dice, params.value) {
            (Some(player), Some(dice), Some(value)) => (player, dice, value),
            _ => {
                let err = DomainError::invalid_arguments(format!(
                    "missing move fields: {}; required format: move(player, dice, value)",
                    missing_fields(&[
                        ("player", params.player),
                        ("dice", params.dice),
                        ("value", params.value),
                    ])
                ));
                warn!(error = %err, "move rejected");
                return Err(err);
            }
        };

        if let Err(err) = self.validate_move(player, dice, value) {
            warn!(player, dice, value, error = %err, "move rejected");
            return Err(err);
        }

        // validate_move guarantees a valid face
        let slot = (value - 1) as usize;
        self.face_counts[slot] += dice;
        self.total_revealed += dice;

        debug!(
            player,
            dice,
            value,
            total_revealed = self.total_revealed,
            "move recorded"
        );
        Ok(())
    }

    fn validate_move(&self, player: u32, dice: u32, value: u32) -> Result<(), DomainError> {
        if !(1..=self.player_count).contains(&player) {
            return Err(DomainError::InvalidPlayer {
                player,
                player_count: self.player_count,
            });
        }

        let fits = self
            .total_revealed
            .checked_add(dice)
            .is_some_and(|total| total <= self.pool_size);
        if !fits {
            return Err(DomainError::DicePoolExhausted {
                requested: dice,
                revealed: self.total_revealed,
                pool: self.pool_size,
            });
        }

        if !is_valid_face(value) {
            return Err(DomainError::InvalidFaceValue(value));
        }

        Ok(())
    }

    /// Percentage chance that at least `dice` dice in the whole round show
    /// `value`, given what has been revealed so far.
    pub fn claim_probability(&self, params: ClaimParams) -> Result<ClaimOdds, DomainError> {
        let (claimed, value) = params.require()?;
        let deficit = claimed.saturating_sub(self.face_count(value));

        let percent = if deficit == 0 {
            100.0
        } else {
            binomial_survival(self.remaining_hidden(), deficit, FACE_PROBABILITY) * 100.0
        };
        let odds = ClaimOdds::from_percent(percent);

        debug!(
            claimed,
            value,
            deficit,
            remaining_hidden = self.remaining_hidden(),
            probability = odds.probability,
            "claim evaluated"
        );
        Ok(odds)
    }

    /// True when the revealed dice alone already satisfy the claim.
    pub fn is_claim_proven(&self, params: ClaimParams) -> Result<bool, DomainError> {
        let (claimed, value) = params.require()?;
        Ok(claimed <= self.face_count(value))
    }
}
