//! Standalone HTTP server startup.

use std::net::SocketAddr;

use axum::Router;
use axum_server::Handle;
use hyper_util::rt::TokioTimer;
use tower_http::timeout::TimeoutLayer;

use crate::config::{HTTP_BIND_ADDR, HTTP_READ_TIMEOUT, HTTP_WRITE_TIMEOUT};
use crate::error::AppError;

use super::shutdown;

/// Start a plain HTTP server on the fixed bind address.
///
/// Blocks until the server shuts down. Requests whose headers take longer than
/// the read timeout are dropped, and handlers that run past the write timeout
/// answer 408.
pub async fn start_server(app: Router) -> Result<(), AppError> {
    let addr: SocketAddr = HTTP_BIND_ADDR
        .parse()
        .map_err(|e| AppError::Server(format!("Invalid bind address {}: {}", HTTP_BIND_ADDR, e)))?;

    let app = app.layer(TimeoutLayer::new(HTTP_WRITE_TIMEOUT));

    let handle = Handle::new();
    shutdown::setup_shutdown_handler(handle.clone());

    tracing::info!(
        %addr,
        port = addr.port(),
        read_timeout_secs = HTTP_READ_TIMEOUT.as_secs(),
        write_timeout_secs = HTTP_WRITE_TIMEOUT.as_secs(),
        "Starting HTTP server"
    );

    let mut server = axum_server::bind(addr).handle(handle);
    server
        .http_builder()
        .http1()
        .timer(TokioTimer::new())
        .header_read_timeout(HTTP_READ_TIMEOUT);

    server.serve(app.into_make_service()).await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}
