//! Per-player pools

use crate::error::ApiError;
use crate::state::{lock, ServerState};
use axum::{
    extract::{Path, State},
    Json,
};
use focus_core::PlayerView;
use std::sync::Arc;

/// Reserve and capture counts for one player (name is case-insensitive)
pub async fn get_player(
    State(state): State<Arc<ServerState>>,
    Path((id, name)): Path<(String, String)>,
) -> Result<Json<PlayerView>, ApiError> {
    let game = state.get(&id)?;
    let session = lock(&game)?;
    let player = session.player(&name)?;
    Ok(Json(PlayerView::from(player)))
}
