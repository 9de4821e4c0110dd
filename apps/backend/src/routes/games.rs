//! Game-related HTTP routes.
//!
//! Every handler resolves the round through the registry; the registry holds
//! the round's entry guard for the duration of the tracker call only.

use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::domain::{ClaimOdds, ClaimParams, MoveParams, RoundSnapshot};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::game_id::GameId;
use crate::extractors::validated_json::ValidatedJson;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct CreateGameRequest {
    players: Option<u32>,
}

/// Round snapshot tagged with the game it belongs to.
#[derive(Debug, Serialize)]
struct GameResponse {
    game_id: i64,
    #[serde(flatten)]
    round: RoundSnapshot,
}

#[derive(Debug, Serialize)]
struct ChallengeResponse {
    proven: bool,
}

/// POST /api/games
///
/// Opens a round for `players` players (1..=DICE_ODDS_MAX_PLAYERS).
async fn create_game(
    body: ValidatedJson<CreateGameRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let players = body.players.ok_or_else(|| {
        AppError::invalid(
            ErrorCode::InvalidArguments,
            "missing game fields: players; required format: {\"players\": n}",
        )
    })?;

    let max_players = app_state.limits.max_players;
    if players > max_players {
        return Err(AppError::invalid(
            ErrorCode::InvalidArguments,
            format!("players must be at most {max_players}, got {players}"),
        ));
    }

    let (game_id, round) = app_state.registry().create(players)?;
    Ok(HttpResponse::Created().json(GameResponse { game_id, round }))
}

/// GET /api/games/{game_id}
async fn get_game(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<web::Json<GameResponse>, AppError> {
    let round = app_state.registry().snapshot(game_id.0)?;
    Ok(web::Json(GameResponse {
        game_id: game_id.0,
        round,
    }))
}

/// DELETE /api/games/{game_id}
///
/// Ends the round and forgets its state.
async fn delete_game(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    if !app_state.registry().remove(game_id.0) {
        return Err(AppError::not_found(
            ErrorCode::GameNotFound,
            format!("Game {} not found", game_id.0),
        ));
    }
    Ok(HttpResponse::NoContent().finish())
}

/// POST /api/games/{game_id}/moves
///
/// Records `dice` revealed dice showing `value` for `player`; returns the
/// updated round.
async fn record_move(
    game_id: GameId,
    body: ValidatedJson<MoveParams>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<GameResponse>, AppError> {
    let round = app_state
        .registry()
        .record_move(game_id.0, body.into_inner())?;
    Ok(web::Json(GameResponse {
        game_id: game_id.0,
        round,
    }))
}

/// POST /api/games/{game_id}/claims
async fn evaluate_claim(
    game_id: GameId,
    body: ValidatedJson<ClaimParams>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<ClaimOdds>, AppError> {
    let odds = app_state.registry().claim(game_id.0, body.into_inner())?;
    Ok(web::Json(odds))
}

/// POST /api/games/{game_id}/challenges
///
/// Whether the revealed dice alone already prove the claim.
async fn challenge_claim(
    game_id: GameId,
    body: ValidatedJson<ClaimParams>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<ChallengeResponse>, AppError> {
    let proven = app_state
        .registry()
        .challenge(game_id.0, body.into_inner())?;
    Ok(web::Json(ChallengeResponse { proven }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(create_game)));
    cfg.service(
        web::resource("/{game_id}")
            .route(web::get().to(get_game))
            .route(web::delete().to(delete_game)),
    );
    cfg.service(web::resource("/{game_id}/moves").route(web::post().to(record_move)));
    cfg.service(web::resource("/{game_id}/claims").route(web::post().to(evaluate_claim)));
    cfg.service(web::resource("/{game_id}/challenges").route(web::post().to(challenge_claim)));
}
