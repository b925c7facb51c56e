use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::github::GithubError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant ends the request; nothing is retried.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    #[error("GitHub error: {0}")]
    Upstream(#[from] GithubError),
}

impl AppError {
    /// The fixed wire message for each failure kind. Clients match on these.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::MethodNotAllowed => "Method not allowed",
            AppError::ProfileNotFound(_) => "Profile not found",
            AppError::GenerationFailed(_) => "Failed to generate suggestions. Please try again.",
            AppError::Upstream(_) => "Internal server error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::ProfileNotFound(_) => StatusCode::NOT_FOUND,
            AppError::GenerationFailed(_) | AppError::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::GenerationFailed(msg) => tracing::error!("Generation error: {msg}"),
            AppError::Upstream(e) => tracing::error!("GitHub error: {e}"),
            AppError::ProfileNotFound(username) => {
                tracing::info!("Profile not found: {username:?}")
            }
            AppError::MethodNotAllowed => {}
        }

        let body = Json(json!({ "error": self.public_message() }));

        (status, body).into_response()
    }
}
