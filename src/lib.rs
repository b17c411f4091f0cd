// Registry Guard - GDPR-safe test person register
// Copyright (c) 2025 Registry Guard Contributors
// Licensed under the MIT License

//! # Registry Guard - GDPR-safe test person register
//!
//! Registry Guard keeps a register of synthetic person records for test
//! environments and guarantees that every row flagged as test data is
//! anonymized before anything else touches the store.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Seeding** raw synthetic records with locale-aware fake data
//! - **Anonymizing** test rows with a deterministic, idempotent transform
//! - **Guarding** the store with a startup sweep on every guarded command and
//!   a once-per-day sweep tracked by a daily marker
//! - **Checking** how many test rows are still not anonymized
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (sweeps, guard, daily marker)
//! - [`anonymization`] - Anonymization rules, transform and predicate
//! - [`adapters`] - Store backends (SQLite, PostgreSQL) and the generator
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use registry_guard::adapters::database::create_store;
//! use registry_guard::config::load_config_or_default;
//! use registry_guard::core::guard::Guard;
//! use registry_guard::core::sweep::check_anonymization;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config_or_default("registry-guard.toml")?;
//!     let (records, state) = create_store(&config).await?;
//!     records.ensure_schema().await?;
//!
//!     Guard::new(records.clone(), state).run().await?;
//!
//!     let status = check_anonymization(records.as_ref()).await?;
//!     println!("{status}");
//!     Ok(())
//! }
//! ```
//!
//! ## The Anonymized Predicate
//!
//! A row counts as anonymized only when all four fields hold their canonical
//! anonymized values AND its `is_anonymized` flag is set. A row with correct
//! values but an unset flag is repaired by the next sweep.
//!
//! ## Error Handling
//!
//! Library functions return [`domain::Result`] with [`domain::RegistryError`];
//! CLI commands return `anyhow::Result<i32>` carrying the exit code.
//!
//! ## Logging
//!
//! Structured logging uses the `tracing` crate. Repaired rows are logged
//! with a SHA-256 hash of their original email, never the value itself.

pub mod adapters;
pub mod anonymization;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
