//! The anonymized predicate
//!
//! A record counts as anonymized only when its content matches the canonical
//! anonymized values AND its flag is set. Neither the flag nor the content is
//! trusted on its own.

use super::rules::{anon_email_suffix, ANON_ADDRESS, ANON_NAME, ANON_NATIONAL_ID};
use crate::domain::{PersonFields, PersonRecord};

/// Whether the field values alone match the anonymized forms
pub fn fields_anonymized(fields: &PersonFields) -> bool {
    fields.name == ANON_NAME
        && fields.email.ends_with(&anon_email_suffix())
        && fields.national_id == ANON_NATIONAL_ID
        && fields.address == ANON_ADDRESS
}

/// Whether a record satisfies the anonymized contract
///
/// # Examples
///
/// ```
/// use registry_guard::anonymization::{anonymize, is_anonymized};
/// use registry_guard::domain::{PersonFields, PersonRecord, RecordId};
/// use chrono::Utc;
///
/// let raw = PersonRecord::builder()
///     .id(RecordId::new(1).unwrap())
///     .fields(PersonFields::new("Ada", "ada@example.com", "850101-1234", "Main St 1"))
///     .test_data(true)
///     .created_at(Utc::now())
///     .build()
///     .unwrap();
///
/// assert!(!is_anonymized(&raw));
/// assert!(is_anonymized(&anonymize(&raw, Utc::now())));
/// ```
pub fn is_anonymized(record: &PersonRecord) -> bool {
    fields_anonymized(&record.fields) && record.is_anonymized
}
