//! SQLite row models
//!
//! Timestamps are stored as RFC 3339 text with second precision so that rows
//! sort and compare correctly as strings.

use crate::domain::{PersonFields, PersonRecord, RecordId, RegistryError, Result};
use chrono::{DateTime, SecondsFormat, Utc};

/// Columns selected for a person row, in order
pub const PERSON_COLUMNS: &str =
    "id, name, email, national_id, address, is_test_data, is_anonymized, created_at, updated_at";

/// Raw person row as read from SQLite
#[derive(Debug, Clone)]
pub struct SqlitePersonRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub national_id: String,
    pub address: String,
    pub is_test_data: bool,
    pub is_anonymized: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl SqlitePersonRow {
    /// Read a row selected with [`PERSON_COLUMNS`]
    pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            national_id: row.get(3)?,
            address: row.get(4)?,
            is_test_data: row.get(5)?,
            is_anonymized: row.get(6)?,
            created_at: row.get(7)?,
            updated_at: row.get(8)?,
        })
    }

    /// Convert to the domain record
    ///
    /// # Errors
    ///
    /// Returns an error if the id is not positive or a timestamp is malformed.
    pub fn into_domain(self) -> Result<PersonRecord> {
        let id = RecordId::new(self.id).map_err(RegistryError::Database)?;
        let created_at = parse_timestamp(&self.created_at)?;
        let updated_at = parse_timestamp(&self.updated_at)?;

        PersonRecord::builder()
            .id(id)
            .fields(PersonFields::new(
                self.name,
                self.email,
                self.national_id,
                self.address,
            ))
            .test_data(self.is_test_data)
            .anonymized(self.is_anonymized)
            .created_at(created_at)
            .updated_at(updated_at)
            .build()
            .map_err(RegistryError::Database)
    }
}

/// Format a timestamp for storage
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// Parse a stored timestamp
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| RegistryError::Database(format!("Invalid stored timestamp '{value}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_row() -> SqlitePersonRow {
        SqlitePersonRow {
            id: 7,
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            national_id: "851210-1234".to_string(),
            address: "1 Main St, Springfield".to_string(),
            is_test_data: true,
            is_anonymized: false,
            created_at: "2024-03-01T10:00:00+00:00".to_string(),
            updated_at: "2024-03-02T11:30:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_timestamp_format() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        assert_eq!(format_timestamp(ts), "2024-03-01T10:00:00+00:00");
        assert_eq!(parse_timestamp(&format_timestamp(ts)).unwrap(), ts);
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        let result = parse_timestamp("yesterday");
        assert!(matches!(result, Err(RegistryError::Database(_))));
    }

    #[test]
    fn test_into_domain() {
        let record = sample_row().into_domain().unwrap();
        assert_eq!(record.id.value(), 7);
        assert_eq!(record.fields.email, "ada@example.com");
        assert!(record.is_test_data);
        assert!(!record.is_anonymized);
        assert_eq!(
            record.updated_at,
            Utc.with_ymd_and_hms(2024, 3, 2, 11, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_into_domain_rejects_zero_id() {
        let mut row = sample_row();
        row.id = 0;
        assert!(row.into_domain().is_err());
    }
}
