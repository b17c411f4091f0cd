//! Domain error types
//!
//! This module defines the error hierarchy for the registry. Store backends
//! translate their driver errors into [`RegistryError`] so callers never see
//! third-party types.

use thiserror::Error;

/// Main registry error type
///
/// This is the primary error type used throughout the library.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Persistence failures (connection, query, statement)
    #[error("Database error: {0}")]
    Database(String),

    /// Synthetic record generation errors
    #[error("Generation error: {0}")]
    Generation(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl RegistryError {
    /// Whether this error came from the persistence layer
    pub fn is_database(&self) -> bool {
        matches!(self, RegistryError::Database(_))
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for RegistryError {
    fn from(err: std::io::Error) -> Self {
        RegistryError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        RegistryError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for RegistryError {
    fn from(err: toml::de::Error) -> Self {
        RegistryError::Configuration(format!("TOML parse error: {err}"))
    }
}

impl From<rusqlite::Error> for RegistryError {
    fn from(err: rusqlite::Error) -> Self {
        RegistryError::Database(format!("SQLite: {err}"))
    }
}

impl From<tokio_postgres::Error> for RegistryError {
    fn from(err: tokio_postgres::Error) -> Self {
        RegistryError::Database(format!("PostgreSQL: {err}"))
    }
}
