//! Tracing setup for rdesk
//!
//! Small wrapper around `tracing-subscriber` so the suite and tests
//! initialize structured logging the same way. The `RDESK_LOG` environment
//! variable overrides the configured level with a full `EnvFilter`
//! directive string.

use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Environment variable consulted for filter directives
pub const LOG_ENV_VAR: &str = "RDESK_LOG";

static LOGGING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Errors that can occur during logging initialization
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Logging has already been initialized
    #[error("logging has already been initialized")]
    AlreadyInitialized,

    /// Failed to install the subscriber
    #[error("failed to initialize logging: {0}")]
    InitializationFailed(String),
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default maximum level when `RDESK_LOG` is not set
    pub level: Level,
    /// Write to stderr instead of stdout
    pub use_stderr: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_stderr: true,
        }
    }
}

/// Initializes the global tracing subscriber
///
/// # Errors
/// Returns [`LoggingError::AlreadyInitialized`] on repeated calls and
/// [`LoggingError::InitializationFailed`] when another subscriber is
/// already installed globally.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    if LOGGING_INITIALIZED.swap(true, Ordering::SeqCst) {
        return Err(LoggingError::AlreadyInitialized);
    }

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = if config.use_stderr {
        builder.with_writer(std::io::stderr).try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| LoggingError::InitializationFailed(e.to_string()))
}

/// Returns true if [`init_logging`] has completed once
#[must_use]
pub fn is_logging_initialized() -> bool {
    LOGGING_INITIALIZED.load(Ordering::SeqCst)
}
