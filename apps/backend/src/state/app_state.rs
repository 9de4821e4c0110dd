use std::sync::Arc;

use crate::config::GameLimits;
use crate::services::GameRegistry;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Live rounds keyed by game id
    pub registry: Arc<GameRegistry>,
    /// Caps applied to new games
    pub limits: GameLimits,
}

impl AppState {
    /// Create a new AppState with an empty registry sized by `limits`
    pub fn new(limits: GameLimits) -> Self {
        Self {
            registry: Arc::new(GameRegistry::new(limits.max_games)),
            limits,
        }
    }

    pub fn registry(&self) -> &GameRegistry {
        &self.registry
    }
}
