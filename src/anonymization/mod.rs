//! Anonymization of test-data records
//!
//! This module holds the pure half of the anonymization guarantee: the
//! canonical anonymized values, the transform that produces them and the
//! predicate that decides whether a row already complies.
//!
//! # Architecture
//!
//! - **Rules**: fixed anonymized name, email domain, national id and address
//! - **Tokenization**: one-way SHA-256 email tokens
//! - **Predicate**: content-plus-flag compliance check
//! - **Transform**: idempotent record rewrite
//! - **Audit**: structured events with hashed original values
//!
//! # Usage
//!
//! ```rust
//! use registry_guard::anonymization::{anonymize, is_anonymized};
//! use registry_guard::domain::{PersonFields, PersonRecord, RecordId};
//! use chrono::Utc;
//!
//! let raw = PersonRecord::builder()
//!     .id(RecordId::new(1).unwrap())
//!     .fields(PersonFields::new("Ada", "ada@example.com", "850101-1234", "Main St 1"))
//!     .test_data(true)
//!     .created_at(Utc::now())
//!     .build()
//!     .unwrap();
//!
//! let anon = anonymize(&raw, Utc::now());
//! assert!(is_anonymized(&anon));
//! assert_eq!(anonymize(&anon, Utc::now()), anon);
//! ```

pub mod audit;
pub mod predicate;
pub mod rules;
pub mod tokenization;
pub mod transform;

// Re-export main functions
pub use audit::AuditEntry;
pub use predicate::{fields_anonymized, is_anonymized};
pub use rules::{PersonField, ANON_ADDRESS, ANON_EMAIL_DOMAIN, ANON_NAME, ANON_NATIONAL_ID};
pub use tokenization::{anonymize_email, sha256_hex};
pub use transform::{anonymize, anonymize_fields};
