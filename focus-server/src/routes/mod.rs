//! HTTP route handlers

pub mod board;
pub mod game;
pub mod players;
pub mod status;

use focus_core::{MoveError, Position};
use serde_json::Value;

/// Turn a `[row, col]` array from a request body into a position.
/// Anything that is not an array of two small integers is an invalid location.
pub(crate) fn parse_position(coords: &Value) -> Result<Position, MoveError> {
    let invalid = || MoveError::InvalidLocation(format!("invalid location: {coords}"));
    let values: Vec<i64> = coords
        .as_array()
        .ok_or_else(invalid)?
        .iter()
        .map(Value::as_i64)
        .collect::<Option<_>>()
        .ok_or_else(invalid)?;
    position_from(&values)
}

pub(crate) fn position_from(coords: &[i64]) -> Result<Position, MoveError> {
    Position::try_from(coords)
        .map_err(|_| MoveError::InvalidLocation(format!("invalid location: {coords:?}")))
}

/// Claimed piece count; negative, fractional or non-numeric counts are
/// piece errors
pub(crate) fn parse_piece_count(pieces: &Value) -> Result<u32, MoveError> {
    pieces
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| MoveError::PlayerPiece(format!("invalid number of pieces: {pieces}")))
}
