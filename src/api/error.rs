use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use super::response::ErrorBody;
use crate::models::ValidationError;
use crate::store::StoreError;

/// Everything a handler can fail with. Each variant maps to one status code and
/// is rendered as `{"success": false, "message": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed client input, surfaced verbatim.
    #[error("{0}")]
    Validation(String),
    #[error("Todo with id {id} not found (cannot {action})")]
    NotFound { id: String, action: &'static str },
    #[error("Route {method} {path} not found")]
    NoRoute { method: String, path: String },
    #[error(transparent)]
    Storage(#[from] StoreError),
    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn not_found(id: impl ToString, action: &'static str) -> Self {
        Self::NotFound {
            id: id.to_string(),
            action,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } | Self::NoRoute { .. } => StatusCode::NOT_FOUND,
            Self::Storage(_) | Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!("Internal error: {}", message);
        } else {
            tracing::warn!("Request rejected ({}): {}", status, message);
        }

        (status, Json(ErrorBody::new(message))).into_response()
    }
}
