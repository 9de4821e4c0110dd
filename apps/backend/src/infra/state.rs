use crate::config::GameLimits;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    limits: GameLimits,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            limits: GameLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: GameLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_max_players(mut self, max_players: u32) -> Self {
        self.limits.max_players = max_players;
        self
    }

    pub fn with_max_games(mut self, max_games: usize) -> Self {
        self.limits.max_games = max_games;
        self
    }

    pub fn build(self) -> AppState {
        AppState::new(self.limits)
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
