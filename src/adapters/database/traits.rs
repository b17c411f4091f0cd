//! Store abstraction traits
//!
//! This module defines the traits that store backends must implement. The
//! guard only ever talks to these traits, never to a driver.

use crate::domain::{NewPersonRecord, PersonFields, PersonRecord, RecordId, RecordScope, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Record store trait for the person table
///
/// Every call is atomic on its own; a sweep over many rows is not wrapped in
/// a transaction, which is safe because re-running a sweep is idempotent.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Create the tables if they don't exist yet
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be created.
    async fn ensure_schema(&self) -> Result<()>;

    /// Insert new records
    ///
    /// Rows are created with `is_anonymized = false` and both timestamps set
    /// to the current time.
    ///
    /// # Returns
    ///
    /// The store-assigned identifiers, in input order.
    async fn insert_records(&self, records: Vec<NewPersonRecord>) -> Result<Vec<RecordId>>;

    /// Select records ordered by id
    ///
    /// # Arguments
    ///
    /// * `scope` - Which rows to return
    /// * `limit` - Maximum number of rows, or all when `None`
    async fn select_records(
        &self,
        scope: RecordScope,
        limit: Option<usize>,
    ) -> Result<Vec<PersonRecord>>;

    /// Write anonymized field values to a test-data row and mark it anonymized
    ///
    /// The update is conditional on the row still existing as a test-data
    /// row; rows without the test-data flag are never written.
    ///
    /// # Returns
    ///
    /// `true` if a row was updated, `false` if no matching test-data row
    /// exists (for instance after a concurrent `clear`).
    async fn update_fields(
        &self,
        id: RecordId,
        fields: &PersonFields,
        updated_at: DateTime<Utc>,
    ) -> Result<bool>;

    /// Delete records in a scope
    ///
    /// # Returns
    ///
    /// The number of deleted rows.
    async fn delete_records(&self, scope: RecordScope) -> Result<u64>;

    /// Short name of the backend for log output
    fn backend_name(&self) -> &'static str;
}

/// Key/value metadata storage
///
/// Holds one value per key. Used for the guard's daily marker.
#[async_trait]
pub trait StateStorage: Send + Sync {
    /// Read a metadata value
    ///
    /// # Returns
    ///
    /// `Ok(None)` if the key has never been written.
    async fn get_meta(&self, key: &str) -> Result<Option<String>>;

    /// Create or overwrite a metadata value (last write wins)
    async fn set_meta(&self, key: &str, value: &str) -> Result<()>;
}
