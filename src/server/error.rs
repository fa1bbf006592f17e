//! HTTP error type shared by all handlers.
//!
//! Client errors carry their message through; database and serialisation
//! failures are logged in full and answered with a generic 500 body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

use crate::errors::{MindMapError, ProjectError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error(transparent)]
    MindMap(#[from] MindMapError),

    /// Malformed body or query string, including missing required fields
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// JSON body of every error response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        let code = match self {
            ApiError::Project(err) => err.http_status_code(),
            ApiError::MindMap(err) => err.http_status_code(),
            ApiError::BadRequest(_) => 400,
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn body(&self) -> ErrorResponse {
        let (code, field, message) = match self {
            ApiError::Project(err) => {
                let field = match err {
                    ProjectError::Validation { field, .. } => Some(field.clone()),
                    _ => None,
                };
                (err.error_code(), field, err.to_string())
            }
            ApiError::MindMap(err) => {
                let field = match err {
                    MindMapError::Validation { field, .. } => Some(field.clone()),
                    _ => None,
                };
                (err.error_code(), field, err.to_string())
            }
            ApiError::BadRequest(message) => ("BAD_REQUEST", None, message.clone()),
        };

        ErrorResponse {
            error: message,
            code: code.to_string(),
            field,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = if status.is_server_error() {
            error!(error = %self, "Request failed");
            ErrorResponse {
                error: "An internal error occurred".to_string(),
                code: "INTERNAL_ERROR".to_string(),
                field: None,
            }
        } else {
            self.body()
        };

        (status, Json(body)).into_response()
    }
}
