//! PostgreSQL row models
//!
//! Maps rows of the `persons` table to domain records.

use crate::domain::{PersonFields, PersonRecord, RecordId, RegistryError, Result};
use chrono::{DateTime, Utc};
use tokio_postgres::Row;

/// Columns selected for a person row
pub const PERSON_COLUMNS: &str =
    "id, name, email, national_id, address, is_test_data, is_anonymized, created_at, updated_at";

/// Person row as stored in PostgreSQL
#[derive(Debug, Clone)]
pub struct PostgreSQLPersonRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub national_id: String,
    pub address: String,
    pub is_test_data: bool,
    pub is_anonymized: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PostgreSQLPersonRow {
    /// Read a row selected with [`PERSON_COLUMNS`]
    ///
    /// # Errors
    ///
    /// Returns an error if a column is missing or has an unexpected type.
    pub fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            national_id: row.try_get("national_id")?,
            address: row.try_get("address")?,
            is_test_data: row.try_get("is_test_data")?,
            is_anonymized: row.try_get("is_anonymized")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    /// Convert to the domain record
    ///
    /// Timestamps are truncated to whole seconds.
    pub fn into_domain(self) -> Result<PersonRecord> {
        let id = RecordId::new(self.id).map_err(RegistryError::Database)?;

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
            .created_at(self.created_at)
            .updated_at(self.updated_at)
            .build()
            .map_err(RegistryError::Database)
    }
}
