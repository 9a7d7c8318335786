//! # Todo Telemetry
//!
//! Logging setup shared by the todo workspace.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use todo_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_logging(&config).expect("Failed to init logging");
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `TODO_SERVICE_NAME` | `todo` | Service name on the root span |
//! | `TODO_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `TODO_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `TODO_JSON_LOGS` | `false` | JSON formatted logs |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{build_filter, init_logging, service_span};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    #[error("Global subscriber already installed: {0}")]
    AlreadyInitialized(String),
}
