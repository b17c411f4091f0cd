//! SQLite store
//!
//! Default backend: a single local database file holding the `persons` and
//! `meta` tables.

pub mod adapter;
pub mod client;
pub mod models;

pub use adapter::SqliteAdapter;
pub use client::SqliteClient;
pub use models::SqlitePersonRow;
