//! Structured logging to stderr.

use crate::{LogFormat, TelemetryConfig, TelemetryError};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize the logging subsystem.
///
/// Sets up tracing-subscriber in the configured format. `RUST_LOG` overrides
/// the configured level when it is set.
pub fn init_logging(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => level_filter(&config.log_level)?,
    };

    match config.log_format {
        LogFormat::Text => init_text_logging(filter),
        LogFormat::Pretty => init_pretty_logging(filter),
        LogFormat::Json => init_json_logging(filter),
    }
}

fn level_filter(level: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(level).map_err(|_| TelemetryError::InvalidLevel(level.to_string()))
}

/// Compact single-line output for terminals.
fn init_text_logging(filter: EnvFilter) -> Result<(), TelemetryError> {
    let text_layer = fmt::layer()
        .compact()
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(text_layer)
        .try_init()
        .map_err(|e: tracing_subscriber::util::TryInitError| {
            TelemetryError::LoggingInit(e.to_string())
        })
}

/// Multi-line output with source locations, for debugging.
fn init_pretty_logging(filter: EnvFilter) -> Result<(), TelemetryError> {
    let pretty_layer = fmt::layer()
        .pretty()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(pretty_layer)
        .try_init()
        .map_err(|e: tracing_subscriber::util::TryInitError| {
            TelemetryError::LoggingInit(e.to_string())
        })
}

/// One JSON object per line, for CI log collectors.
fn init_json_logging(filter: EnvFilter) -> Result<(), TelemetryError> {
    let json_layer = fmt::layer()
        .json()
        .with_target(true)
        .with_current_span(false)
        .with_span_list(false)
        .with_file(false)
        .with_line_number(false)
        .flatten_event(true)
        .with_writer(std::io::stderr)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(json_layer)
        .try_init()
        .map_err(|e: tracing_subscriber::util::TryInitError| {
            TelemetryError::LoggingInit(e.to_string())
        })
}

/// Standard log event names.
pub mod events {
    /// Input spec has been read and validated.
    pub const SPEC_LOADED: &str = "spec_loaded";

    /// An expected Markdown file is absent.
    pub const FRAGMENT_MISSING: &str = "fragment_missing";

    /// Merge walk finished.
    pub const MERGE_COMPLETED: &str = "merge_completed";

    /// Scaffold walk finished.
    pub const SCAFFOLD_COMPLETED: &str = "scaffold_completed";

    /// Merged spec written to a file.
    pub const OUTPUT_WRITTEN: &str = "output_written";
}

/// Helper macros for structured logging with standard fields.
///
/// These wrap the tracing macros to ensure consistent field naming.
#[macro_export]
macro_rules! log_spec_loaded {
    ($($field:tt)*) => {
        tracing::info!(
            event = $crate::logging::events::SPEC_LOADED,
            $($field)*
        )
    };
}

#[macro_export]
macro_rules! log_fragment_missing {
    ($($field:tt)*) => {
        tracing::warn!(
            event = $crate::logging::events::FRAGMENT_MISSING,
            $($field)*
        )
    };
}

#[macro_export]
macro_rules! log_merge_completed {
    ($($field:tt)*) => {
        tracing::info!(
            event = $crate::logging::events::MERGE_COMPLETED,
            $($field)*
        )
    };
}

#[macro_export]
macro_rules! log_scaffold_completed {
    ($($field:tt)*) => {
        tracing::info!(
            event = $crate::logging::events::SCAFFOLD_COMPLETED,
            $($field)*
        )
    };
}

#[macro_export]
macro_rules! log_output_written {
    ($($field:tt)*) => {
        tracing::info!(
            event = $crate::logging::events::OUTPUT_WRITTEN,
            $($field)*
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    // Subscriber initialization is process-global, so only the
    // configuration logic is tested here.

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("text"), Some(LogFormat::Text));
        assert_eq!(LogFormat::parse("json"), Some(LogFormat::Json));
        assert_eq!(LogFormat::parse("JSON"), Some(LogFormat::Json));
        assert_eq!(LogFormat::parse("pretty"), Some(LogFormat::Pretty));
        assert_eq!(LogFormat::parse("PRETTY"), Some(LogFormat::Pretty));
        assert_eq!(LogFormat::parse("invalid"), None);
    }

    #[test]
    fn test_level_filter() {
        assert!(level_filter("info").is_ok());
        assert!(level_filter("warn,mdspec_merge=debug").is_ok());
    }
}
