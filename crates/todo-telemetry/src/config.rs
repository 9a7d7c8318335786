//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for log output.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name attached to every log line
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error) or a full
    /// `EnvFilter` directive such as `todo_ordering=debug,info`
    pub log_level: String,

    /// Whether to write log lines to the console at all
    pub console_output: bool,

    /// Whether to format log lines as JSON
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "todo".to_string(),
            log_level: "info".to_string(),
            console_output: true,
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `TODO_SERVICE_NAME`: Service name (default: todo)
    /// - `TODO_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `TODO_CONSOLE_OUTPUT`: Enable console output (default: true)
    /// - `TODO_JSON_LOGS`: Enable JSON logs (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// `from_env` delegates here; tests pass a closure over a map so they
    /// never touch process-global state.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            service_name: lookup("TODO_SERVICE_NAME").unwrap_or(defaults.service_name),

            log_level: lookup("TODO_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_level),

            console_output: lookup("TODO_CONSOLE_OUTPUT")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.console_output),

            json_logs: lookup("TODO_JSON_LOGS")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.json_logs),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
