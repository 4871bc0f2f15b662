//! Telemetry configuration from environment variables.

use std::env;

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Service name attached to the startup event
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error) or an `EnvFilter`
    /// directive such as `rv_03_veto_slasher=debug`
    pub log_level: String,

    /// Whether to write events to stdout
    pub console_output: bool,

    /// Whether to format events as JSON
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "restaking-vault".to_string(),
            log_level: "info".to_string(),
            console_output: true,
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            service_name: lookup("RV_SERVICE_NAME").unwrap_or(defaults.service_name),

            log_level: lookup("RV_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_level),

            console_output: lookup("RV_CONSOLE_OUTPUT")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(defaults.console_output),

            json_logs: lookup("RV_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(defaults.json_logs),
        }
    }

    /// Quiet configuration for test harnesses.
    pub fn for_testing() -> Self {
        Self {
            service_name: "rv-tests".to_string(),
            log_level: "warn".to_string(),
            ..Self::default()
        }
    }
}
