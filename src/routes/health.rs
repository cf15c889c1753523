//! Health check endpoint.
//!
//! Liveness probe served on both `/` and `/health`. The payload reports a fixed
//! "healthy" status plus the time the response was built.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::config::HEALTH_STATUS_HEALTHY;
use crate::error::AppError;

/// Body of every health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub time: String,
}

impl HealthStatus {
    /// Snapshot taken at the current wall-clock time.
    pub fn now() -> Self {
        Self {
            status: HEALTH_STATUS_HEALTHY.to_string(),
            time: Utc::now().to_rfc3339_opts(SecondsFormat::Nanos, true),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Health check handler.
///
/// Returns 200 with the JSON payload, or 500 with no body if encoding fails.
pub async fn health() -> Result<Response, AppError> {
    let status = HealthStatus::now();
    let body = status.to_json()?;

    tracing::info!(status = %status.status, time = %status.time, "Health check completed");

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}

/// GET-only guard for methods axum would otherwise route to [`health`].
pub async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, [(header::ALLOW, "GET")])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_always_healthy() {
        assert_eq!(HealthStatus::now().status, "healthy");
    }

    #[test]
    fn test_time_is_rfc3339() {
        let status = HealthStatus::now();
        assert!(chrono::DateTime::parse_from_rfc3339(&status.time).is_ok());
    }

    #[test]
    fn test_json_has_exactly_status_and_time() {
        let json = HealthStatus {
            status: "healthy".to_string(),
            time: "2024-01-01T00:00:00Z".to_string(),
        }
        .to_json()
        .unwrap();
        assert_eq!(json, r#"{"status":"healthy","time":"2024-01-01T00:00:00Z"}"#);
    }

    #[tokio::test]
    async fn test_handler_sets_json_content_type() {
        let response = health().await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[tokio::test]
    async fn test_method_not_allowed_advertises_get() {
        let response = method_not_allowed().await.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers().get(header::ALLOW).unwrap(), "GET");
    }
}
