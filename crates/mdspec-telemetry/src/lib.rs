//! Logging for the mdspec tools.
//!
//! Log records go to stderr so that stdout stays free for the merged spec.
//!
//! # Usage
//!
//! ```ignore
//! use mdspec_telemetry::{LogFormat, TelemetryConfig};
//!
//! let config = TelemetryConfig::new()
//!     .with_log_level("debug")
//!     .with_log_format(LogFormat::Json);
//!
//! mdspec_telemetry::init_logging(&config)?;
//! ```

pub mod config;
pub mod logging;

pub use config::{LogFormat, TelemetryConfig};
pub use logging::{events, init_logging};

use thiserror::Error;

/// Telemetry errors.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// Failed to initialize logging.
    #[error("failed to initialize logging: {0}")]
    LoggingInit(String),

    /// Log level filter could not be parsed.
    #[error("invalid log level '{0}'")]
    InvalidLevel(String),
}
