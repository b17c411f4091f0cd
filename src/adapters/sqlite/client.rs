//! SQLite client implementation
//!
//! This module provides the connection handle for the local SQLite store.

use crate::config::schema::SqliteConfig;
use crate::domain::context::ResultExt;
use crate::domain::{RegistryError, Result};
use rusqlite::Connection;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

/// Schema applied by [`SqliteClient::ensure_schema`]
const MIGRATION_SQL: &str = include_str!("../../../migrations/sqlite/001_initial_schema.sql");

/// SQLite client for the person register
///
/// Holds a single connection behind a mutex. Calls are short and never await
/// while the lock is held.
pub struct SqliteClient {
    conn: Mutex<Connection>,
    path: String,
}

impl SqliteClient {
    /// Open (or create) the database file
    ///
    /// Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn open(config: &SqliteConfig) -> Result<Self> {
        let path = Path::new(&config.path);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create database directory {}", parent.display())
                })?;
            }
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open SQLite database {}", config.path))?;
        conn.busy_timeout(Duration::from_millis(config.busy_timeout_ms))?;

        tracing::debug!(path = %config.path, "SQLite database opened");

        Ok(Self {
            conn: Mutex::new(conn),
            path: config.path.clone(),
        })
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Mutex::new(conn),
            path: ":memory:".to_string(),
        })
    }

    /// Create tables and indexes if they don't exist
    pub fn ensure_schema(&self) -> Result<()> {
        self.with_connection(|conn| conn.execute_batch(MIGRATION_SQL))?;
        tracing::debug!(path = %self.path, "SQLite schema ensured");
        Ok(())
    }

    /// Run a closure with exclusive access to the connection
    ///
    /// # Errors
    ///
    /// Returns the closure's error converted to [`RegistryError::Database`],
    /// or an error if the connection lock is poisoned.
    pub fn with_connection<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> rusqlite::Result<T>,
    {
        let mut conn = self
            .conn
            .lock()
            .map_err(|_| RegistryError::Database("SQLite connection lock poisoned".to_string()))?;
        Ok(f(&mut conn)?)
    }

    /// Database file path
    pub fn path(&self) -> &str {
        &self.path
    }
}
