//! # RV Telemetry
//!
//! Subscriber installation for the restaking vault subsystems.
//!
//! Subsystems only emit `tracing` events with a `subsystem` field; binaries
//! and test harnesses call [`init_logging`] once to decide where those
//! events go.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rv_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_logging(&config)?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `RV_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `RV_JSON_LOGS` | `false` | JSON instead of pretty output |
//! | `RV_CONSOLE_OUTPUT` | `true` | Write events to stdout |
//! | `RV_SERVICE_NAME` | `restaking-vault` | Service name attached to the startup event |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::init_logging;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    Filter(String),

    #[error("Failed to install subscriber: {0}")]
    SubscriberInit(String),
}
