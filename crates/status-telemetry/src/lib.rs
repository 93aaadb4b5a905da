//! # Status Telemetry
//!
//! Structured logging for binaries built on the status option codec.
//!
//! Library crates only emit `tracing` events; this crate installs the
//! subscriber that prints them.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use status_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     init_telemetry(&TelemetryConfig::from_env()).expect("Failed to init telemetry");
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `status-options` | Service name in logs |
//! | `STATUS_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `STATUS_CONSOLE_OUTPUT` | `true` | Print logs to stderr |
//! | `STATUS_JSON_LOGS` | `false` | JSON instead of pretty output |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{env_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Initialize logging for the current process.
///
/// Fails if a global subscriber is already installed.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    init_logging(config)?;
    tracing::info!(service = %config.service_name, "Telemetry initialized");
    Ok(())
}
