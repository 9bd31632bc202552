//! API error type and its HTTP mapping

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use focus_core::{MoveError, SetupError};
use serde_json::json;

/// Anything a handler can fail with
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Rule(#[from] MoveError),

    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Body(#[from] JsonRejection),

    #[error(transparent)]
    Query(#[from] QueryRejection),

    #[error("no game with id {0}")]
    GameNotFound(String),

    #[error("game state lock poisoned")]
    LockPoisoned,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Rule(MoveError::InvalidLocation(_) | MoveError::PlayerPiece(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Rule(MoveError::PlayerTurn(_)) => StatusCode::CONFLICT,
            ApiError::Rule(MoveError::PlayerName(_)) | ApiError::GameNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            ApiError::Setup(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Body(rejection) => rejection.status(),
            ApiError::Query(rejection) => rejection.status(),
            ApiError::LockPoisoned => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::Rule(err) => err.kind(),
            ApiError::Setup(_) => "SetupError",
            ApiError::Body(_) | ApiError::Query(_) => "InvalidRequest",
            ApiError::GameNotFound(_) => "GameNotFound",
            ApiError::LockPoisoned => "Internal",
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Rule(err) => err.message().to_string(),
            ApiError::Body(rejection) => rejection.body_text(),
            ApiError::Query(rejection) => rejection.body_text(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let body = Json(json!({
            "error": self.kind(),
            "message": self.message(),
        }));
        (status, body).into_response()
    }
}
