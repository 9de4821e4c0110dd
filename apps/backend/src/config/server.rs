use std::env;
use std::str::FromStr;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;
const DEFAULT_MAX_PLAYERS: u32 = 100;
const DEFAULT_MAX_GAMES: usize = 10_000;

/// Caps applied to games created over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLimits {
    /// Largest table a client may open.
    pub max_players: u32,
    /// Live games the registry holds before refusing new ones.
    pub max_games: usize,
}

impl Default for GameLimits {
    fn default() -> Self {
        Self {
            max_players: DEFAULT_MAX_PLAYERS,
            max_games: DEFAULT_MAX_GAMES,
        }
    }
}

/// Server settings read from `DICE_ODDS_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub limits: GameLimits,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("DICE_ODDS_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_var(&lookup, "DICE_ODDS_PORT", DEFAULT_PORT)?;
        let max_players = parse_var(&lookup, "DICE_ODDS_MAX_PLAYERS", DEFAULT_MAX_PLAYERS)?;
        let max_games = parse_var(&lookup, "DICE_ODDS_MAX_GAMES", DEFAULT_MAX_GAMES)?;

        if max_players == 0 {
            return Err(AppError::config(
                "DICE_ODDS_MAX_PLAYERS must be at least 1",
            ));
        }
        if max_games == 0 {
            return Err(AppError::config("DICE_ODDS_MAX_GAMES must be at least 1"));
        }

        Ok(Self {
            host,
            port,
            limits: GameLimits {
                max_players,
                max_games,
            },
        })
    }
}

fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|_| {
            AppError::config(format!(
                "Environment variable '{name}' has invalid value '{raw}'"
            ))
        }),
    }
}
