//! Game API: create games, make moves, inspect state

use super::{parse_piece_count, parse_position};
use crate::error::ApiError;
use crate::state::{lock, ServerState};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use focus_core::{GameSetup, GameView, Move, MoveOutcome, PlayerSetup};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Create request
#[derive(Deserialize)]
pub struct CreateRequest {
    pub players: [PlayerSetup; 2],
}

#[derive(Serialize)]
pub struct CreateResponse {
    pub id: String,
    pub game: GameView,
}

/// Start a new game in the opening position
pub async fn create_game(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<CreateRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateResponse>), ApiError> {
    let Json(req) = payload?;
    let setup = GameSetup { players: req.players };
    let session = setup.to_session()?;
    let game = session.view();
    let id = state.insert(session)?;

    tracing::info!(game_id = %id, "Game created");

    Ok((StatusCode::CREATED, Json(CreateResponse { id, game })))
}

/// Current snapshot of a game
pub async fn get_game(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> Result<Json<GameView>, ApiError> {
    let game = state.get(&id)?;
    let session = lock(&game)?;
    Ok(Json(session.view()))
}

/// End a game and drop it from the registry
pub async fn delete_game(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.remove(&id)?;
    tracing::info!(game_id = %id, "Game removed");
    Ok(StatusCode::NO_CONTENT)
}

/// Stack move request. Coordinates and count stay raw JSON so malformed
/// values come back as rule errors.
#[derive(Deserialize)]
pub struct MoveRequest {
    pub player: String,
    pub start: Value,
    pub end: Value,
    pub pieces: Value,
}

/// Reserve placement request
#[derive(Deserialize)]
pub struct ReserveRequest {
    pub player: String,
    pub position: Value,
}

/// Reply to an accepted move
#[derive(Serialize)]
pub struct MoveResponse {
    #[serde(flatten)]
    pub outcome: MoveOutcome,
    pub message: String,
    pub game: GameView,
}

/// Move a stack
pub async fn make_move(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
    payload: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<MoveResponse>, ApiError> {
    let Json(req) = payload?;
    let game = state.get(&id)?;
    let mut session = lock(&game)?;

    // Unknown names are reported before malformed coordinates
    session.seat_of(&req.player)?;
    let start = parse_position(&req.start)?;
    let end = parse_position(&req.end)?;
    let pieces = parse_piece_count(&req.pieces)?;

    let outcome = session.move_piece(&req.player, start, end, pieces)?;
    Ok(Json(MoveResponse {
        message: outcome.message(),
        outcome,
        game: session.view(),
    }))
}

/// Place a piece from the player's reserve
pub async fn place_reserve(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
    payload: Result<Json<ReserveRequest>, JsonRejection>,
) -> Result<Json<MoveResponse>, ApiError> {
    let Json(req) = payload?;
    let game = state.get(&id)?;
    let mut session = lock(&game)?;

    session.seat_of(&req.player)?;
    let target = parse_position(&req.position)?;

    let outcome = session.place_reserve(&req.player, target)?;
    Ok(Json(MoveResponse {
        message: outcome.message(),
        outcome,
        game: session.view(),
    }))
}

/// Moves open to the player whose turn it is
pub async fn legal_moves(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Move>>, ApiError> {
    let game = state.get(&id)?;
    let session = lock(&game)?;
    Ok(Json(session.legal_moves()))
}
