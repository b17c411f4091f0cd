//! Error context extension trait
//!
//! This module provides a context extension trait similar to `anyhow::Context`
//! that works with `Result<T, RegistryError>`. Unlike anyhow, the error kind
//! is kept: a database error with context is still a database error.
//!
//! # Examples
//!
//! ```rust
//! use registry_guard::domain::{RegistryError, Result};
//! use registry_guard::domain::context::ResultExt;
//!
//! fn read_file(path: &str) -> Result<String> {
//!     std::fs::read_to_string(path)
//!         .with_context(|| format!("Failed to read file: {path}"))
//! }
//! ```

use crate::domain::errors::RegistryError;
use crate::domain::result::Result;
use std::fmt::Display;

/// Extension trait for adding context to `Result` types
pub trait ResultExt<T> {
    /// Add context to an error
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static;

    /// Add context to an error using a closure, evaluated only on error
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<RegistryError>,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.map_err(|e| prefix(e.into(), context))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| prefix(e.into(), f()))
    }
}

fn prefix(error: RegistryError, context: impl Display) -> RegistryError {
    match error {
        RegistryError::Configuration(msg) => {
            RegistryError::Configuration(format!("{context}: {msg}"))
        }
        RegistryError::Database(msg) => RegistryError::Database(format!("{context}: {msg}")),
        RegistryError::Generation(msg) => RegistryError::Generation(format!("{context}: {msg}")),
        RegistryError::Validation(msg) => RegistryError::Validation(format!("{context}: {msg}")),
        RegistryError::Serialization(msg) => {
            RegistryError::Serialization(format!("{context}: {msg}"))
        }
        RegistryError::Io(msg) => RegistryError::Io(format!("{context}: {msg}")),
        RegistryError::Other(msg) => RegistryError::Other(format!("{context}: {msg}")),
    }
}
