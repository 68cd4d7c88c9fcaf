//! API error types with JSON envelopes.
//!
//! | Variant      | Status | Body                              |
//! |--------------|--------|-----------------------------------|
//! | `Validation` | 400    | `{"error": ..., "missing": [...]}` |
//! | `NotFound`   | 404    | `{"error": ...}`                  |
//! | `Store`      | 500    | `{"error": <raw store message>}`  |

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::db::DatabaseError;
use crate::validation::ValidationError;

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing: Option<Vec<&'static str>>,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    NotFound(String),
    /// Any failure reported by the database.
    #[error("{0}")]
    Store(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::Validation(ValidationError::MissingFields(missing)) => ErrorBody {
                error: "Missing required fields".to_string(),
                missing: Some(missing),
            },
            ApiError::Validation(other) => ErrorBody {
                error: other.to_string(),
                missing: None,
            },
            ApiError::NotFound(message) => ErrorBody {
                error: message,
                missing: None,
            },
            ApiError::Store(message) => {
                tracing::error!(error = %message, "Store error");
                ErrorBody {
                    error: message,
                    missing: None,
                }
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            other => ApiError::Store(other.to_string()),
        }
    }
}
