// src/error.rs
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Client-facing failures. Upstream detail is logged where it happens and
/// never carried into these variants.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("{0}")]
    BadRequest(String),
    #[error("missing {0} credential")]
    Config(&'static str),
    #[error("failed to process query")]
    Upstream,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_string())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Config(var) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Server is missing the {var} credential"),
            ),
            AppError::Upstream => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to process query".to_string(),
            ),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
