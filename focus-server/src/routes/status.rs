//! Health check with a count of registered games

use crate::error::ApiError;
use crate::state::ServerState;
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub games: usize,
}

pub async fn status_handler(
    State(state): State<Arc<ServerState>>,
) -> Result<Json<StatusResponse>, ApiError> {
    Ok(Json(StatusResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        games: state.game_count()?,
    }))
}
