//! Domain models and types for the registry.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`RecordId`])
//! - **Domain models** ([`PersonRecord`], [`PersonFields`], [`NewPersonRecord`])
//! - **Error types** ([`RegistryError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible library operations return [`Result<T, RegistryError>`]:
//!
//! ```rust
//! use registry_guard::domain::{RecordId, RegistryError, Result};
//!
//! fn parse(id: &str) -> Result<RecordId> {
//!     id.parse().map_err(RegistryError::Validation)
//! }
//! ```

pub mod context;
pub mod errors;
pub mod ids;
pub mod record;
pub mod result;

// Re-export commonly used types for convenience
pub use context::ResultExt;
pub use errors::RegistryError;
pub use ids::RecordId;
pub use record::{
    now_utc, NewPersonRecord, PersonFields, PersonRecord, PersonRecordBuilder, RecordScope,
};
pub use result::Result;
