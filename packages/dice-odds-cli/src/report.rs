//! Replays a round and collects what the command prints.

use dice_odds::{ClaimOdds, ClaimParams, DiceRoundTracker, DomainError, MoveParams};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot start round: {0}")]
    Setup(#[source] DomainError),
    #[error("move {index} rejected: {source}")]
    Move {
        index: usize,
        #[source]
        source: DomainError,
    },
    #[error(transparent)]
    Claim(#[from] DomainError),
}

#[derive(Debug, Serialize)]
pub struct ClaimReport {
    pub dice: u32,
    pub value: u32,
    #[serde(flatten)]
    pub odds: ClaimOdds,
}

#[derive(Debug, Serialize)]
pub struct ChallengeReport {
    pub dice: u32,
    pub value: u32,
    pub proven: bool,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub players: u32,
    pub pool_size: u32,
    pub total_revealed: u32,
    pub remaining_hidden: u32,
    pub claims: Vec<ClaimReport>,
    pub challenges: Vec<ChallengeReport>,
}

impl Report {
    /// One line per claim message, then one per challenge.
    pub fn lines(&self) -> Vec<String> {
        let claims = self.claims.iter().map(|c| c.odds.message.clone());
        let challenges = self.challenges.iter().map(|c| {
            let verdict = if c.proven { "proven" } else { "not proven" };
            format!("Challenge {} x {} -> {verdict}", c.dice, c.value)
        });
        claims.chain(challenges).collect()
    }
}

/// Plays `moves` in order on a fresh round, stopping at the first rejection,
/// then evaluates every claim and challenge against the final tally.
pub fn run(
    players: u32,
    moves: &[MoveParams],
    claims: &[ClaimParams],
    challenges: &[ClaimParams],
) -> Result<Report, CliError> {
    let mut tracker = DiceRoundTracker::new(players).map_err(CliError::Setup)?;

    for (i, mv) in moves.iter().enumerate() {
        tracker.record_move(*mv).map_err(|source| CliError::Move {
            index: i + 1,
            source,
        })?;
    }
    info!(
        moves = moves.len(),
        total_revealed = tracker.total_revealed(),
        "moves replayed"
    );

    let claims = claims
        .iter()
        .map(|params| -> Result<ClaimReport, DomainError> {
            let odds = tracker.claim_probability(*params)?;
            Ok(ClaimReport {
                dice: params.dice.unwrap_or_default(),
                value: params.value.unwrap_or_default(),
                odds,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let challenges = challenges
        .iter()
        .map(|params| -> Result<ChallengeReport, DomainError> {
            let proven = tracker.is_claim_proven(*params)?;
            debug!(?params, proven, "challenge evaluated");
            Ok(ChallengeReport {
                dice: params.dice.unwrap_or_default(),
                value: params.value.unwrap_or_default(),
                proven,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Report {
        players: tracker.player_count(),
        pool_size: tracker.pool_size(),
        total_revealed: tracker.total_revealed(),
        remaining_hidden: tracker.remaining_hidden(),
        claims,
        challenges,
    })
}
