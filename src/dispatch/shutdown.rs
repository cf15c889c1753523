//! Graceful shutdown on SIGTERM/SIGINT.

use axum_server::Handle;

use crate::config::SHUTDOWN_GRACE_PERIOD;

/// When either signal is received, the server stops accepting new
/// connections and waits up to [`SHUTDOWN_GRACE_PERIOD`] for existing
/// ones to finish.
pub fn setup_shutdown_handler(handle: Handle) {
    tokio::spawn(async move {
        let ctrl_c = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(mut sigterm) => {
                    sigterm.recv().await;
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to install SIGTERM handler");
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                tracing::info!("Received Ctrl+C, initiating graceful shutdown");
            }
            _ = terminate => {
                tracing::info!("Received SIGTERM, initiating graceful shutdown");
            }
        }

        handle.graceful_shutdown(Some(SHUTDOWN_GRACE_PERIOD));
        tracing::info!(
            grace_secs = SHUTDOWN_GRACE_PERIOD.as_secs(),
            "Graceful shutdown initiated, waiting for connections to close"
        );
    });
}
