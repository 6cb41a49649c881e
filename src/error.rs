use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::signals::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Secret is required")]
    SecretRequired,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl AppError {
    /// Machine-readable code sent as the `error` field.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::MissingFields => "missing_fields",
            AppError::SecretRequired => "secret_required",
            AppError::InvalidBody(_) => "invalid_body",
            AppError::Storage(_) => "db_error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingFields | AppError::SecretRequired | AppError::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match &self {
            AppError::MissingFields | AppError::SecretRequired => json!({ "error": self.code() }),
            AppError::InvalidBody(details) => {
                tracing::debug!("Rejected request body: {}", details);
                json!({ "error": self.code(), "details": details })
            }
            AppError::Storage(e) => {
                tracing::error!("Storage error: {}", e);
                json!({ "error": self.code(), "details": e.to_string() })
            }
        };

        (self.status(), Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
