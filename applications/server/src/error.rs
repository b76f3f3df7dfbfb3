/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

/// Errors surfaced by handlers.
///
/// Every variant renders as `{"detail": "<message>"}`. Store and internal
/// failures all share one status and carry the underlying message.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),

    #[error("{0}")]
    Database(#[from] vibe_core::VibeError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<vibe_storage::StorageError> for ServerError {
    fn from(err: vibe_storage::StorageError) -> Self {
        ServerError::Database(err.into())
    }
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Internal(_)
            | ServerError::Database(_)
            | ServerError::Config(_)
            | ServerError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.to_string();

        match &self {
            ServerError::Database(e) => tracing::error!("Database error: {:?}", e),
            ServerError::Internal(msg) => tracing::error!("Internal error: {}", msg),
            ServerError::Config(msg) => tracing::error!("Config error: {}", msg),
            ServerError::Io(e) => tracing::error!("IO error: {:?}", e),
            ServerError::NotFound(msg) | ServerError::BadRequest(msg) => {
                tracing::debug!("Request rejected ({}): {}", status, msg);
            }
        }

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
