//! Logging setup for hosts embedding the device client
//!
//! The client itself only emits `tracing` events. Installing a subscriber is
//! the host's call, made once at startup through this module.

use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Output style of the installed subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggingMode {
    /// No subscriber; events are dropped
    Silent,
    /// Compact stderr output at info level
    Development,
    /// Verbose output with source locations
    Debug,
    /// One JSON object per event, for log shippers
    Json,
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),

    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),
}

/// Install a global subscriber for `mode`
///
/// # Environment Variables
///
/// - `ENIGMA2_LOG_LEVEL`: filter directive, e.g. `enigma2_device=debug`
/// - `RUST_LOG`: used when `ENIGMA2_LOG_LEVEL` is unset
///
/// ```rust,ignore
/// enigma2_device::logging::init_logging(LoggingMode::Development)?;
/// ```
pub fn init_logging(mode: LoggingMode) -> Result<(), LoggingError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    match mode {
        LoggingMode::Silent => Ok(()),
        LoggingMode::Development => {
            let filter = create_env_filter("info")?;

            Registry::default()
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_thread_ids(false)
                        .compact(),
                )
                .with(filter)
                .try_init()
                .map_err(|e| LoggingError::TracingInit(e.to_string()))
        }
        LoggingMode::Debug => {
            let filter = create_env_filter("debug")?;

            Registry::default()
                .with(
                    fmt::layer()
                        .pretty()
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(filter)
                .try_init()
                .map_err(|e| LoggingError::TracingInit(e.to_string()))
        }
        LoggingMode::Json => {
            let filter = create_env_filter("info")?;

            Registry::default()
                .with(fmt::layer().json().with_current_span(false))
                .with(filter)
                .try_init()
                .map_err(|e| LoggingError::TracingInit(e.to_string()))
        }
    }
}

/// Pick the mode from `ENIGMA2_LOG_MODE` (silent, development, debug, json)
///
/// Anything else, including an unset variable, means silent.
pub fn init_logging_from_env() -> Result<(), LoggingError> {
    let mode = std::env::var("ENIGMA2_LOG_MODE")
        .ok()
        .and_then(|value| parse_mode(&value))
        .unwrap_or(LoggingMode::Silent);

    init_logging(mode)
}

fn parse_mode(value: &str) -> Option<LoggingMode> {
    match value.trim().to_ascii_lowercase().as_str() {
        "silent" => Some(LoggingMode::Silent),
        "development" | "dev" => Some(LoggingMode::Development),
        "debug" => Some(LoggingMode::Debug),
        "json" => Some(LoggingMode::Json),
        _ => None,
    }
}

fn create_env_filter(default_level: &str) -> Result<EnvFilter, LoggingError> {
    let directive = std::env::var("ENIGMA2_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| default_level.to_string());

    EnvFilter::try_new(&directive).map_err(|e| LoggingError::InvalidFilter(format!("{directive}: {e}")))
}

/// Whether some global subscriber is already installed
pub fn is_initialized() -> bool {
    tracing::dispatcher::has_been_set()
}
