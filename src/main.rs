//! Health check service entry point.
//!
//! Initializes tracing, resolves the dispatch mode from the environment, builds
//! the router once and hands it to the matching runner.

use clap::Parser;

use healthcheck::config::{DispatchMode, LogFormat, DEFAULT_LOG_FORMAT};
use healthcheck::dispatch;
use healthcheck::logging::{init_tracing, resolve_filter};
use healthcheck::routes::create_router;

/// Health check endpoint for local runs and AWS Lambda
#[derive(Parser, Debug)]
#[command(name = "healthcheck", version, about)]
struct Args {
    /// Log level filter (e.g., "healthcheck=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Log format: json or text
    #[arg(long, default_value = DEFAULT_LOG_FORMAT)]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let log_filter = resolve_filter(args.log_level, std::env::var("RUST_LOG").ok());
    init_tracing(&log_filter, args.log_format);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting health check service");

    let mode = DispatchMode::from_env();
    let app = create_router();

    if let Err(e) = dispatch::run(mode, app).await {
        tracing::error!(error = %e, mode = ?mode, "Server failed to start");
        std::process::exit(1);
    }
}
