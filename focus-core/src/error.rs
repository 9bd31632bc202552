//! Error types for move validation and game setup

use std::path::PathBuf;

/// A rejected move or query.
///
/// Every variant leaves the game exactly as it was before the call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// Off-board or malformed coordinates, empty start cell, zero-length or
    /// diagonal movement
    #[error("invalid location: {0}")]
    InvalidLocation(String),

    /// Wrong owner, distance/piece-count mismatch, claim above stack height,
    /// empty reserve
    #[error("piece error: {0}")]
    PlayerPiece(String),

    /// Move attempted out of turn, or after the game has ended
    #[error("turn error: {0}")]
    PlayerTurn(String),

    /// Name does not match either player
    #[error("player name error: {0}")]
    PlayerName(String),
}

impl MoveError {
    pub(crate) fn invalid_location(msg: impl Into<String>) -> Self {
        MoveError::InvalidLocation(msg.into())
    }

    pub(crate) fn piece(msg: impl Into<String>) -> Self {
        MoveError::PlayerPiece(msg.into())
    }

    pub(crate) fn turn(msg: impl Into<String>) -> Self {
        MoveError::PlayerTurn(msg.into())
    }

    /// Stable kind name, used by the HTTP API and the CLI
    pub fn kind(&self) -> &'static str {
        match self {
            MoveError::InvalidLocation(_) => "InvalidLocation",
            MoveError::PlayerPiece(_) => "PlayerPieceError",
            MoveError::PlayerTurn(_) => "PlayerTurnError",
            MoveError::PlayerName(_) => "PlayerNameError",
        }
    }

    /// The human-readable message without the kind prefix
    pub fn message(&self) -> &str {
        match self {
            MoveError::InvalidLocation(msg)
            | MoveError::PlayerPiece(msg)
            | MoveError::PlayerTurn(msg)
            | MoveError::PlayerName(msg) => msg,
        }
    }
}

/// Errors raised while building a game from a setup.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("player name must not be empty")]
    EmptyName,

    #[error("players must have different names, got {0:?} twice")]
    DuplicateName(String),

    #[error("players must have different colors, got {0:?} twice")]
    DuplicateColor(char),

    #[error("failed to read setup file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse setup: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::piece("not your piece");
        assert_eq!(err.to_string(), "piece error: not your piece");
        assert_eq!(err.kind(), "PlayerPieceError");
        assert_eq!(err.message(), "not your piece");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(MoveError::invalid_location("x").kind(), "InvalidLocation");
        assert_eq!(MoveError::turn("x").kind(), "PlayerTurnError");
        assert_eq!(MoveError::PlayerName("x".into()).kind(), "PlayerNameError");
    }

    #[test]
    fn test_setup_error_display() {
        let err = SetupError::DuplicateColor('R');
        assert_eq!(err.to_string(), "players must have different colors, got 'R' twice");
    }
}
