//! Audit events for anonymization
//!
//! Each repaired row is logged with the fields that changed and a SHA-256
//! hash of the original email. Plaintext personal values are never logged.

use super::tokenization::sha256_hex;
use super::transform::changed_fields;
use crate::domain::PersonRecord;
use serde::Serialize;

/// Tracing target for audit events
pub const AUDIT_TARGET: &str = "registry_guard::audit";

/// Audit entry for a single repaired record
#[derive(Debug, Clone, Serialize)]
pub struct AuditEntry {
    /// Identifier of the repaired record
    pub record_id: i64,

    /// Columns whose values were replaced
    pub changed: Vec<&'static str>,

    /// SHA-256 hash of the original email (never log plaintext PII)
    pub email_hash: String,

    /// Whether the row only had its flag repaired
    pub flag_only: bool,
}

impl AuditEntry {
    /// Build an audit entry from a record before and after anonymization
    pub fn from_change(before: &PersonRecord, after: &PersonRecord) -> Self {
        let changed: Vec<&'static str> = changed_fields(&before.fields, &after.fields)
            .iter()
            .map(|f| f.column())
            .collect();

        Self {
            record_id: before.id.value(),
            flag_only: changed.is_empty(),
            changed,
            email_hash: sha256_hex(&before.fields.email),
        }
    }

    /// Emit the entry as a structured tracing event
    pub fn emit(&self) {
        tracing::debug!(
            target: AUDIT_TARGET,
            record_id = self.record_id,
            changed = ?self.changed,
            email_hash = %self.email_hash,
            flag_only = self.flag_only,
            "Record anonymized"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anonymization::anonymize;
    use crate::domain::{PersonFields, RecordId};
    use chrono::Utc;

    fn raw() -> PersonRecord {
        PersonRecord::builder()
            .id(RecordId::new(11).unwrap())
            .fields(PersonFields::new("Ada", "ada@example.com", "850101-1234", "Main St 1"))
            .test_data(true)
            .created_at(Utc::now())
            .build()
            .unwrap()
    }

    #[test]
    fn test_audit_entry_hashes_email() {
        let before = raw();
        let after = anonymize(&before, Utc::now());
        let entry = AuditEntry::from_change(&before, &after);

        assert_eq!(entry.record_id, 11);
        assert_eq!(entry.email_hash.len(), 64);
        assert_ne!(entry.email_hash, before.fields.email);
        assert_eq!(entry.changed.len(), 4);
        assert!(!entry.flag_only);
    }

    #[test]
    fn test_audit_entry_never_serializes_plaintext() {
        let before = raw();
        let after = anonymize(&before, Utc::now());
        let json = serde_json::to_string(&AuditEntry::from_change(&before, &after)).unwrap();

        assert!(!json.contains("ada@example.com"));
        assert!(!json.contains("Main St 1"));
    }

    #[test]
    fn test_audit_entry_flag_only_repair() {
        let mut drifted = anonymize(&raw(), Utc::now());
        drifted.is_anonymized = false;
        let after = anonymize(&drifted, Utc::now());

        assert!(AuditEntry::from_change(&drifted, &after).flag_only);
    }
}
