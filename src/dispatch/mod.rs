//! Process-level request dispatch.
//!
//! The process serves requests in one of two ways, picked once at startup:
//! - **Managed invocation**: the Lambda runtime delivers events to a callback
//! - **Standalone server**: plain HTTP on a TCP listener with graceful shutdown

pub mod managed;
mod server;
mod shutdown;

use axum::Router;

use crate::config::DispatchMode;
use crate::error::AppError;

pub use managed::handle_event;
pub use server::start_server;

/// Serve `app` in the given mode until the process is told to stop.
pub async fn run(mode: DispatchMode, app: Router) -> Result<(), AppError> {
    match mode {
        DispatchMode::ManagedInvocation => {
            tracing::info!("Running in Lambda mode");
            managed::start_managed(app).await
        }
        DispatchMode::StandaloneServer => {
            tracing::info!("Running in local server mode");
            start_server(app).await
        }
    }
}
