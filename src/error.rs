//! Error taxonomy surfaced by the game API.
//!
//! Correctness failures (wrong sample set, test done too early, wrong organism)
//! are not errors; they are successful responses with `correct: false`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

use crate::protocol::ErrorOut;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Malformed input shape.
    #[error("{0}")]
    Validation(String),
    /// Case identifier that does not resolve to a case.
    #[error("{0}")]
    NotFound(String),
    #[error("missing or invalid identity")]
    Unauthorized,
}

impl GameError {
    pub fn malformed_tests() -> Self {
        GameError::Validation("malformed test submission".into())
    }

    pub fn unknown_case() -> Self {
        GameError::NotFound("malformatted id".into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            GameError::Validation(_) | GameError::NotFound(_) => StatusCode::BAD_REQUEST,
            GameError::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for GameError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(target: "game", %status, error = %self, "Request rejected");
        (status, Json(ErrorOut { error: self.to_string() })).into_response()
    }
}

impl From<JsonRejection> for GameError {
    fn from(e: JsonRejection) -> Self {
        GameError::Validation(e.body_text())
    }
}
