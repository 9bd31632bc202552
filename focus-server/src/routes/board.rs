//! Board inspection: the stack on a single cell

use super::position_from;
use crate::error::ApiError;
use crate::state::{lock, ServerState};
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use focus_core::{Color, MoveError, Position};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Cell query params, parsed by hand so bad numbers are location errors
#[derive(Deserialize)]
pub struct CellParams {
    pub row: String,
    pub col: String,
}

fn parse_coord(value: &str) -> Result<i64, MoveError> {
    value
        .trim()
        .parse()
        .map_err(|_| MoveError::InvalidLocation(format!("invalid location: {value}")))
}

#[derive(Serialize)]
pub struct StackResponse {
    pub position: Position,
    pub height: usize,
    /// Bottom to top
    pub stack: Vec<Color>,
}

/// Show the pieces stacked at one position
pub async fn get_stack(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
    params: Result<Query<CellParams>, QueryRejection>,
) -> Result<Json<StackResponse>, ApiError> {
    let Query(params) = params?;
    let game = state.get(&id)?;
    let session = lock(&game)?;

    let position = position_from(&[parse_coord(&params.row)?, parse_coord(&params.col)?])?;
    let stack = session.peek(position)?.to_vec();

    Ok(Json(StackResponse {
        position,
        height: stack.len(),
        stack,
    }))
}
