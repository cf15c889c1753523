//! Runtime constants and startup mode selection.
//!
//! The service has no configuration file. Everything tunable is a constant here,
//! and the only runtime decision (standalone server vs. Lambda invocation) is
//! resolved once from the environment into a [`DispatchMode`].

use std::str::FromStr;
use std::time::Duration;

use const_format::formatcp;

// =============================================================================
// HTTP Server
// =============================================================================

/// Interface the standalone server binds to
pub const HTTP_HOST: &str = "0.0.0.0";

/// Port the standalone server listens on
pub const HTTP_PORT: u16 = 8080;

/// Pre-formatted bind address (compile-time string concatenation)
pub const HTTP_BIND_ADDR: &str = formatcp!("{}:{}", HTTP_HOST, HTTP_PORT);

/// Maximum time to receive a request's headers, in seconds
pub const HTTP_READ_TIMEOUT_SECS: u64 = 15;

/// Maximum time to produce a response, in seconds
pub const HTTP_WRITE_TIMEOUT_SECS: u64 = 15;

pub const HTTP_READ_TIMEOUT: Duration = Duration::from_secs(HTTP_READ_TIMEOUT_SECS);
pub const HTTP_WRITE_TIMEOUT: Duration = Duration::from_secs(HTTP_WRITE_TIMEOUT_SECS);

/// How long in-flight connections may drain after SIGTERM/SIGINT
pub const SHUTDOWN_GRACE_PERIOD: Duration = Duration::from_secs(30);

// =============================================================================
// Health Payload
// =============================================================================

/// The only status this process ever reports while serving
pub const HEALTH_STATUS_HEALTHY: &str = "healthy";

/// Paths answered by the health-check responder
pub const HEALTH_PATHS: [&str; 2] = ["/", "/health"];

// =============================================================================
// Managed Invocation
// =============================================================================

/// Set by the Lambda runtime in every function environment
pub const LAMBDA_ENV_MARKER: &str = "AWS_LAMBDA_FUNCTION_NAME";

/// Upper bound when buffering a proxied response body for the Lambda runtime
pub const LAMBDA_MAX_BODY_BYTES: usize = 6 * 1024 * 1024;

// =============================================================================
// Logging
// =============================================================================

/// Default log filter when neither --log-level nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "healthcheck=debug,tower_http=info";

/// Default log format (json or text)
pub const DEFAULT_LOG_FORMAT: &str = "json";

/// How the process receives requests. Chosen once at startup, never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchMode {
    /// Requests arrive as Lambda invocation events; no listener is opened.
    ManagedInvocation,
    /// The process binds its own TCP listener.
    StandaloneServer,
}

impl DispatchMode {
    /// Resolve the mode from the process environment.
    pub fn from_env() -> Self {
        let marker = std::env::var(LAMBDA_ENV_MARKER).ok();
        Self::from_marker(marker.as_deref())
    }

    /// Any non-empty marker value selects managed invocation.
    pub fn from_marker(marker: Option<&str>) -> Self {
        match marker {
            Some(value) if !value.is_empty() => Self::ManagedInvocation,
            _ => Self::StandaloneServer,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Human-readable lines
    Text,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            other => Err(format!("unknown log format '{}', expected json or text", other)),
        }
    }
}
