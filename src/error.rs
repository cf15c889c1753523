use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::io;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to encode health check response: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to proxy request: {0}")]
    Adapter(String),

    #[error("Failed to bind server: {0}")]
    Bind(#[from] io::Error),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Lambda runtime error: {0}")]
    Lambda(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Internal error");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
