//! SQLite adapter implementing store traits
//!
//! This module provides the implementation of RecordStore and StateStorage
//! for SQLite.

use crate::adapters::database::traits::{RecordStore, StateStorage};
use crate::adapters::sqlite::client::SqliteClient;
use crate::adapters::sqlite::models::{format_timestamp, SqlitePersonRow, PERSON_COLUMNS};
use crate::domain::{
    now_utc, NewPersonRecord, PersonFields, PersonRecord, RecordId, RecordScope, RegistryError,
    Result,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension};
use std::sync::Arc;

/// SQLite implementation of store traits
pub struct SqliteAdapter {
    client: Arc<SqliteClient>,
}

impl SqliteAdapter {
    /// Create a new SQLite adapter
    pub fn new(client: SqliteClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Get a reference to the underlying client
    pub fn client(&self) -> &Arc<SqliteClient> {
        &self.client
    }
}

fn scope_filter(scope: RecordScope) -> &'static str {
    match scope {
        RecordScope::All => "",
        RecordScope::TestData => " WHERE is_test_data = 1",
    }
}

#[async_trait]
impl RecordStore for SqliteAdapter {
    async fn ensure_schema(&self) -> Result<()> {
        self.client.ensure_schema()
    }

    async fn insert_records(&self, records: Vec<NewPersonRecord>) -> Result<Vec<RecordId>> {
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let now = format_timestamp(now_utc());
        let raw_ids = self.client.with_connection(|conn| {
            let tx = conn.transaction()?;
            let mut ids = Vec::with_capacity(records.len());
            {
                let mut stmt = tx.prepare(
                    "INSERT INTO persons
                        (name, email, national_id, address, is_test_data, is_anonymized, created_at, updated_at)
                     VALUES (?1, ?2, ?3, ?4, ?5, 0, ?6, ?6)",
                )?;
                for record in &records {
                    stmt.execute(params![
                        record.fields.name,
                        record.fields.email,
                        record.fields.national_id,
                        record.fields.address,
                        record.is_test_data,
                        now,
                    ])?;
                    ids.push(tx.last_insert_rowid());
                }
            }
            tx.commit()?;
            Ok(ids)
        })?;

        tracing::debug!(count = raw_ids.len(), "Inserted person records");

        raw_ids
            .into_iter()
            .map(|id| RecordId::new(id).map_err(RegistryError::Database))
            .collect()
    }

    async fn select_records(
        &self,
        scope: RecordScope,
        limit: Option<usize>,
    ) -> Result<Vec<PersonRecord>> {
        // SQLite treats a negative LIMIT as unbounded
        let limit = limit.map_or(-1, |n| i64::try_from(n).unwrap_or(i64::MAX));
        let sql = format!(
            "SELECT {PERSON_COLUMNS} FROM persons{} ORDER BY id LIMIT ?1",
            scope_filter(scope)
        );

        let rows = self.client.with_connection(|conn| {
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
                .query_map(params![limit], SqlitePersonRow::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(rows)
        })?;

        rows.into_iter().map(SqlitePersonRow::into_domain).collect()
    }

    async fn update_fields(
        &self,
        id: RecordId,
        fields: &PersonFields,
        updated_at: DateTime<Utc>,
    ) -> Result<bool> {
        let updated_at = format_timestamp(updated_at);
        let changed = self.client.with_connection(|conn| {
            conn.execute(
                "UPDATE persons
                 SET name = ?1, email = ?2, national_id = ?3, address = ?4,
                     is_anonymized = 1, updated_at = ?5
                 WHERE id = ?6 AND is_test_data = 1",
                params![
                    fields.name,
                    fields.email,
                    fields.national_id,
                    fields.address,
                    updated_at,
                    id.value(),
                ],
            )
        })?;

        Ok(changed > 0)
    }

    async fn delete_records(&self, scope: RecordScope) -> Result<u64> {
        let sql = format!("DELETE FROM persons{}", scope_filter(scope));
        let deleted = self.client.with_connection(|conn| conn.execute(&sql, []))?;
        Ok(deleted as u64)
    }

    fn backend_name(&self) -> &'static str {
        "sqlite"
    }
}

#[async_trait]
impl StateStorage for SqliteAdapter {
    async fn get_meta(&self, key: &str) -> Result<Option<String>> {
        self.client.with_connection(|conn| {
            conn.query_row("SELECT value FROM meta WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
        })
    }

    async fn set_meta(&self, key: &str, value: &str) -> Result<()> {
        self.client.with_connection(|conn| {
            conn.execute(
                "INSERT INTO meta (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn store() -> SqliteAdapter {
        let client = SqliteClient::open_in_memory().unwrap();
        client.ensure_schema().unwrap();
        SqliteAdapter::new(client)
    }

    fn fields(n: usize) -> PersonFields {
        PersonFields::new(
            format!("Person {n}"),
            format!("person{n}@example.com"),
            "900101-1234",
            format!("{n} Main St"),
        )
    }

    #[tokio::test]
    async fn test_insert_and_select_in_id_order() {
        let store = store();
        let ids = store
            .insert_records(vec![
                NewPersonRecord::test_data(fields(1)),
                NewPersonRecord::test_data(fields(2)),
                NewPersonRecord::production(fields(3)),
            ])
            .await
            .unwrap();
        assert_eq!(ids.len(), 3);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));

        let all = store.select_records(RecordScope::All, None).await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all.iter().map(|r| r.id).collect::<Vec<_>>(), ids);
        assert!(all.iter().all(|r| !r.is_anonymized));
        assert!(all.iter().all(|r| r.created_at == r.updated_at));

        let test_rows = store
            .select_records(RecordScope::TestData, None)
            .await
            .unwrap();
        assert_eq!(test_rows.len(), 2);
    }

    #[tokio::test]
    async fn test_insert_empty_batch() {
        let store = store();
        let ids = store.insert_records(Vec::new()).await.unwrap();
        assert!(ids.is_empty());
    }

    #[tokio::test]
    async fn test_select_limit() {
        let store = store();
        let batch = (0..5).map(|n| NewPersonRecord::test_data(fields(n))).collect();
        store.insert_records(batch).await.unwrap();

        let limited = store
            .select_records(RecordScope::All, Some(2))
            .await
            .unwrap();
        assert_eq!(limited.len(), 2);
        assert_eq!(limited[0].fields.name, "Person 0");

        let none = store
            .select_records(RecordScope::All, Some(0))
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_update_fields_marks_anonymized() {
        let store = store();
        let ids = store
            .insert_records(vec![NewPersonRecord::test_data(fields(1))])
            .await
            .unwrap();

        let at = Utc.with_ymd_and_hms(2030, 1, 2, 3, 4, 5).unwrap();
        let replacement = PersonFields::new("Anon", "x@anon.test", "000000-0000", "REDACTED");
        let updated = store.update_fields(ids[0], &replacement, at).await.unwrap();
        assert!(updated);

        let rows = store.select_records(RecordScope::All, None).await.unwrap();
        assert_eq!(rows[0].fields, replacement);
        assert!(rows[0].is_anonymized);
        assert_eq!(rows[0].updated_at, at);
    }

    #[tokio::test]
    async fn test_update_fields_skips_production_rows() {
        let store = store();
        let ids = store
            .insert_records(vec![NewPersonRecord::production(fields(1))])
            .await
            .unwrap();

        let replacement = PersonFields::new("Anon", "x@anon.test", "000000-0000", "REDACTED");
        let updated = store
            .update_fields(ids[0], &replacement, now_utc())
            .await
            .unwrap();
        assert!(!updated);

        let rows = store.select_records(RecordScope::All, None).await.unwrap();
        assert_eq!(rows[0].fields, fields(1));
        assert!(!rows[0].is_anonymized);
    }

    #[tokio::test]
    async fn test_update_missing_row() {
        let store = store();
        let replacement = PersonFields::new("Anon", "x@anon.test", "000000-0000", "REDACTED");
        let updated = store
            .update_fields(RecordId::new(99).unwrap(), &replacement, now_utc())
            .await
            .unwrap();
        assert!(!updated);
    }

    #[tokio::test]
    async fn test_delete_test_data_keeps_production_rows() {
        let store = store();
        store
            .insert_records(vec![
                NewPersonRecord::test_data(fields(1)),
                NewPersonRecord::test_data(fields(2)),
                NewPersonRecord::production(fields(3)),
            ])
            .await
            .unwrap();

        let deleted = store.delete_records(RecordScope::TestData).await.unwrap();
        assert_eq!(deleted, 2);

        let remaining = store.select_records(RecordScope::All, None).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert!(!remaining[0].is_test_data);

        assert_eq!(store.delete_records(RecordScope::All).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_meta_upsert() {
        let store = store();
        assert!(store.get_meta("last_anonym_check_date").await.unwrap().is_none());

        store
            .set_meta("last_anonym_check_date", "2030-01-01")
            .await
            .unwrap();
        store
            .set_meta("last_anonym_check_date", "2030-01-02")
            .await
            .unwrap();

        assert_eq!(
            store.get_meta("last_anonym_check_date").await.unwrap(),
            Some("2030-01-02".to_string())
        );

        let count: i64 = store
            .client()
            .with_connection(|conn| conn.query_row("SELECT COUNT(*) FROM meta", [], |r| r.get(0)))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_operations_fail_without_schema() {
        let store = SqliteAdapter::new(SqliteClient::open_in_memory().unwrap());
        let result = store.select_records(RecordScope::All, None).await;
        assert!(matches!(result, Err(RegistryError::Database(_))));
    }
}
