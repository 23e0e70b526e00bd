//! Unified error types for the patch notes API
//!
//! This module defines error types for each layer:
//! - `UpstreamError`: Mojang API client errors
//! - `AppError`: Application layer errors (rendered as HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Mojang API client errors
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("Render error: {0}")]
    Render(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // There is no partial feed: every failure is a server error.
        let error = match &self {
            AppError::Upstream(e) => {
                tracing::error!("Upstream error: {}", e);
                "Upstream service error"
            }
            AppError::Render(msg) => {
                tracing::error!("Render error: {}", msg);
                "Internal server error"
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
        });

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
