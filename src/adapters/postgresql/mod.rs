//! PostgreSQL store
//!
//! Alternative backend with the same `persons` and `meta` tables, pooled
//! through deadpool.

pub mod adapter;
pub mod client;
pub mod models;

pub use adapter::PostgreSQLAdapter;
pub use client::PostgreSQLClient;
pub use models::PostgreSQLPersonRow;
