//! In-memory registry of live rounds keyed by game id.
//!
//! Each tracker sits in one `DashMap` entry; operations run while that entry's
//! guard is held, which serializes access to a single round without blocking
//! other games. Guards are never held across an `.await`.

use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};

use dashmap::DashMap;
use tracing::info;

use crate::domain::{snapshot, ClaimOdds, ClaimParams, DiceRoundTracker, MoveParams, RoundSnapshot};
use crate::error::AppError;
use crate::errors::ErrorCode;

#[derive(Debug)]
pub struct GameRegistry {
    games: DashMap<i64, DiceRoundTracker>,
    next_id: AtomicI64,
    /// Reserved slots; never exceeds `max_games`.
    live: AtomicUsize,
    max_games: usize,
}

impl GameRegistry {
    pub fn new(max_games: usize) -> Self {
        Self {
            games: DashMap::new(),
            next_id: AtomicI64::new(1),
            live: AtomicUsize::new(0),
            max_games,
        }
    }

    /// Opens a new round for `player_count` players and returns its id.
    pub fn create(&self, player_count: u32) -> Result<(i64, RoundSnapshot), AppError> {
        let tracker = DiceRoundTracker::new(player_count)?;

        self.live
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |live| {
                (live < self.max_games).then_some(live + 1)
            })
            .map_err(|_| {
                AppError::conflict(
                    ErrorCode::TooManyGames,
                    format!("Registry already holds {} games", self.max_games),
                )
            })?;

        let game_id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let snap = snapshot(&tracker);
        self.games.insert(game_id, tracker);

        info!(game_id, players = player_count, "game created");
        Ok((game_id, snap))
    }

    pub fn exists(&self, game_id: i64) -> bool {
        self.games.contains_key(&game_id)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn snapshot(&self, game_id: i64) -> Result<RoundSnapshot, AppError> {
        self.with_game(game_id, snapshot)
    }

    /// Records a reveal and returns the updated round.
    pub fn record_move(&self, game_id: i64, params: MoveParams) -> Result<RoundSnapshot, AppError> {
        self.with_game_mut(game_id, |tracker| -> Result<RoundSnapshot, AppError> {
            tracker.record_move(params)?;
            Ok(snapshot(tracker))
        })?
    }

    pub fn claim(&self, game_id: i64, params: ClaimParams) -> Result<ClaimOdds, AppError> {
        Ok(self.with_game(game_id, |tracker| tracker.claim_probability(params))??)
    }

    pub fn challenge(&self, game_id: i64, params: ClaimParams) -> Result<bool, AppError> {
        Ok(self.with_game(game_id, |tracker| tracker.is_claim_proven(params))??)
    }

    /// Ends a round. Returns false if no such game was live.
    pub fn remove(&self, game_id: i64) -> bool {
        let removed = self.games.remove(&game_id).is_some();
        if removed {
            self.live.fetch_sub(1, Ordering::AcqRel);
            info!(game_id, "game removed");
        }
        removed
    }

    fn with_game<R>(
        &self,
        game_id: i64,
        f: impl FnOnce(&DiceRoundTracker) -> R,
    ) -> Result<R, AppError> {
        let entry = self.games.get(&game_id).ok_or_else(|| not_found(game_id))?;
        Ok(f(entry.value()))
    }

    fn with_game_mut<R>(
        &self,
        game_id: i64,
        f: impl FnOnce(&mut DiceRoundTracker) -> R,
    ) -> Result<R, AppError> {
        let mut entry = self
            .games
            .get_mut(&game_id)
            .ok_or_else(|| not_found(game_id))?;
        Ok(f(entry.value_mut()))
    }
}

fn not_found(game_id: i64) -> AppError {
    AppError::not_found(ErrorCode::GameNotFound, format!("Game {game_id} not found"))
}
