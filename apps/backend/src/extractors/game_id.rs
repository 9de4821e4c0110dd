use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::state::app_state::AppState;

/// Game ID extracted from the route path parameter
/// Validates that the game is live in the registry
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct GameId(pub i64);

impl FromRequest for GameId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(extract_game_id(req))
    }
}

fn extract_game_id(req: &HttpRequest) -> Result<GameId, AppError> {
    let game_id_str = req.match_info().get("game_id").ok_or_else(|| {
        AppError::bad_request(ErrorCode::InvalidGameId, "Missing game_id parameter")
    })?;

    let game_id = game_id_str.parse::<i64>().map_err(|_| {
        AppError::bad_request(
            ErrorCode::InvalidGameId,
            format!("Invalid game id: {game_id_str}"),
        )
    })?;

    if game_id <= 0 {
        return Err(AppError::bad_request(
            ErrorCode::InvalidGameId,
            format!("Game id must be positive, got: {game_id}"),
        ));
    }

    let app_state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::internal("AppState not available"))?;

    if !app_state.registry().exists(game_id) {
        return Err(AppError::not_found(
            ErrorCode::GameNotFound,
            format!("Game {game_id} not found"),
        ));
    }

    Ok(GameId(game_id))
}
