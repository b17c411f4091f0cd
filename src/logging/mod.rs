//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console output on stderr
//! - Configurable log levels (`RUST_LOG` or the configured level)
//! - JSON file logging with daily or hourly rotation
//!
//! # Example
//!
//! ```no_run
//! use registry_guard::logging::init_logging;
//! use registry_guard::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the outcome of an anonymization sweep
///
/// # Example
///
/// ```no_run
/// use registry_guard::log_sweep_complete;
///
/// log_sweep_complete!("startup", 12, 3);
/// ```
#[macro_export]
macro_rules! log_sweep_complete {
    ($phase:expr, $examined:expr, $fixed:expr) => {
        tracing::info!(
            phase = $phase,
            examined = $examined,
            fixed = $fixed,
            "Anonymization sweep completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use registry_guard::log_error_with_context;
/// use registry_guard::domain::RegistryError;
///
/// let error = RegistryError::Database("disk I/O error".to_string());
/// log_error_with_context!(&error, "Guard aborted");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
