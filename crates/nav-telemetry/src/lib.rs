//! # Navigation Telemetry
//!
//! Structured logging setup shared by the navigation crates. The crates
//! themselves only emit `tracing` events; a host calls `init_logging` once at
//! startup to see them.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use nav_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     init_logging(&TelemetryConfig::from_env())?;
//!     // Navigation events are now written to stdout
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `NAV_SERVICE_NAME` | `waypoint` | Service name in the startup line |
//! | `NAV_LOG_LEVEL` / `RUST_LOG` | `info` | Log filter |
//! | `NAV_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `NAV_JSON_LOGS` | `false` | JSON instead of plain lines |

mod config;
mod logging;

pub use config::{TelemetryConfig, DEFAULT_SERVICE_NAME};
pub use logging::{env_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),
}
