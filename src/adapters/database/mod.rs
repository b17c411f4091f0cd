//! Store abstraction layer
//!
//! Trait-based interface over the person table and metadata table, plus a
//! factory that picks the backend from configuration.

pub mod factory;
pub mod traits;

pub use factory::{create_store, StoreHandles};
pub use traits::{RecordStore, StateStorage};
