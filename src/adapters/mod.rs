//! External system integrations for the registry.
//!
//! This module provides adapters for the systems the guard talks to:
//!
//! - [`database`] - Store abstraction layer (trait-based) and backend factory
//! - [`sqlite`] - SQLite implementation (default)
//! - [`postgresql`] - PostgreSQL implementation
//! - [`generator`] - Synthetic person generation backed by `fake`
//!
//! # Design Pattern
//!
//! Adapters isolate external dependencies behind traits so that the guard
//! and commands can be tested against an in-memory SQLite store.
//!
//! ```rust,no_run
//! use registry_guard::adapters::database::create_store;
//! use registry_guard::config::RegistryConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RegistryConfig::default();
//! let (records, state) = create_store(&config).await?;
//! records.ensure_schema().await?;
//! let marker = state.get_meta("last_anonym_check_date").await?;
//! # Ok(())
//! # }
//! ```

pub mod database;
pub mod generator;
pub mod postgresql;
pub mod sqlite;
