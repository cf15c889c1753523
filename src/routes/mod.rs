//! HTTP route registry.
//!
//! Exactly two endpoints exist, `GET /` and `GET /health`, both served by the
//! health check responder. Anything else falls through to axum's defaults:
//! 404 for unknown paths, 405 for other methods on a known path. HEAD gets an
//! explicit 405 since axum would otherwise answer it with the GET handler.

pub mod health;

use axum::{middleware, routing::get, Router};

use crate::middleware::request_log_layer;

/// Creates the Axum router with the health routes and request logging.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(health::health).head(health::method_not_allowed))
        .route("/health", get(health::health).head(health::method_not_allowed))
        // Request logging - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_log_layer))
}
