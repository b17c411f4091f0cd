//! The anonymization transform
//!
//! Maps a record to its anonymized equivalent. The transform is pure: its
//! output depends only on the input record and the supplied timestamp.

use super::predicate::is_anonymized;
use super::rules::{ANON_ADDRESS, ANON_NAME, ANON_NATIONAL_ID, PersonField};
use super::tokenization::anonymize_email;
use crate::domain::{PersonFields, PersonRecord};
use chrono::{DateTime, SubsecRound, Utc};

/// Compute the anonymized replacement for a field set
pub fn anonymize_fields(fields: &PersonFields) -> PersonFields {
    PersonFields {
        name: ANON_NAME.to_string(),
        email: anonymize_email(&fields.email),
        national_id: ANON_NATIONAL_ID.to_string(),
        address: ANON_ADDRESS.to_string(),
    }
}

/// Anonymize a record
///
/// A record that already satisfies the anonymized predicate is returned
/// unchanged, including its `updated_at`. Otherwise all four fields are
/// replaced, the flag is set and `updated_at` becomes `now`.
///
/// `is_test_data` is not inspected; callers decide which rows to pass in.
pub fn anonymize(record: &PersonRecord, now: DateTime<Utc>) -> PersonRecord {
    if is_anonymized(record) {
        return record.clone();
    }

    PersonRecord {
        fields: anonymize_fields(&record.fields),
        is_anonymized: true,
        updated_at: now.trunc_subsecs(0),
        ..record.clone()
    }
}

/// Fields whose values differ between two field sets
pub fn changed_fields(before: &PersonFields, after: &PersonFields) -> Vec<PersonField> {
    PersonField::ALL
        .into_iter()
        .filter(|field| match field {
            PersonField::Name => before.name != after.name,
            PersonField::Email => before.email != after.email,
            PersonField::NationalId => before.national_id != after.national_id,
            PersonField::Address => before.address != after.address,
        })
        .collect()
}
