//! Tracing subscriber setup.
//!
//! Filter priority is CLI > RUST_LOG > [`DEFAULT_LOG_FILTER`]. The format is JSON
//! by default so CloudWatch and local runs produce the same structured records.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, DEFAULT_LOG_FILTER};

/// Pick the effective log filter string.
pub fn resolve_filter(cli: Option<String>, env: Option<String>) -> String {
    cli.or(env)
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Install the global tracing subscriber.
pub fn init_tracing(filter: &str, format: LogFormat) {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(filter));

    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
            .init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
