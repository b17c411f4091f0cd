//! PostgreSQL adapter implementing store traits
//!
//! This module provides the implementation of RecordStore and StateStorage
//! for PostgreSQL.

use crate::adapters::database::traits::{RecordStore, StateStorage};
use crate::adapters::postgresql::client::PostgreSQLClient;
use crate::adapters::postgresql::models::{PostgreSQLPersonRow, PERSON_COLUMNS};
use crate::domain::{
    now_utc, NewPersonRecord, PersonFields, PersonRecord, RecordId, RecordScope, RegistryError,
    Result,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// PostgreSQL implementation of store traits
pub struct PostgreSQLAdapter {
    client: Arc<PostgreSQLClient>,
}

impl PostgreSQLAdapter {
    /// Create a new PostgreSQL adapter
    pub fn new(client: PostgreSQLClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Get a reference to the underlying client
    pub fn client(&self) -> &Arc<PostgreSQLClient> {
        &self.client
    }
}

fn scope_filter(scope: RecordScope) -> &'static str {
    match scope {
        RecordScope::All => "",
        RecordScope::TestData => " WHERE is_test_data",
    }
}

#[async_trait]
impl RecordStore for PostgreSQLAdapter {
    async fn ensure_schema(&self) -> Result<()> {
        self.client.ensure_schema().await
    }

    async fn insert_records(&self, records: Vec<NewPersonRecord>) -> Result<Vec<RecordId>> {
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let now = now_utc();
        let mut conn = self.client.get_connection().await?;
        let tx = conn.transaction().await?;
        let stmt = tx
            .prepare(
                "INSERT INTO persons
                    (name, email, national_id, address, is_test_data, is_anonymized, created_at, updated_at)
                 VALUES ($1, $2, $3, $4, $5, FALSE, $6, $6)
                 RETURNING id",
            )
            .await?;

        let mut ids = Vec::with_capacity(records.len());
        for record in &records {
            let row = tx
                .query_one(
                    &stmt,
                    &[
                        &record.fields.name,
                        &record.fields.email,
                        &record.fields.national_id,
                        &record.fields.address,
                        &record.is_test_data,
                        &now,
                    ],
                )
                .await?;
            let id: i64 = row.try_get(0)?;
            ids.push(RecordId::new(id).map_err(RegistryError::Database)?);
        }
        tx.commit().await?;

        tracing::debug!(count = ids.len(), "Inserted person records");
        Ok(ids)
    }

    async fn select_records(
        &self,
        scope: RecordScope,
        limit: Option<usize>,
    ) -> Result<Vec<PersonRecord>> {
        // LIMIT NULL is unbounded
        let limit: Option<i64> = limit.map(|n| i64::try_from(n).unwrap_or(i64::MAX));
        let query = format!(
            "SELECT {PERSON_COLUMNS} FROM persons{} ORDER BY id LIMIT $1",
            scope_filter(scope)
        );

        let rows = self.client.query(&query, &[&limit]).await?;
        rows.iter()
            .map(|row| PostgreSQLPersonRow::from_row(row)?.into_domain())
            .collect()
    }

    async fn update_fields(
        &self,
        id: RecordId,
        fields: &PersonFields,
        updated_at: DateTime<Utc>,
    ) -> Result<bool> {
        let changed = self
            .client
            .execute(
                "UPDATE persons
                 SET name = $1, email = $2, national_id = $3, address = $4,
                     is_anonymized = TRUE, updated_at = $5
                 WHERE id = $6 AND is_test_data",
                &[
                    &fields.name,
                    &fields.email,
                    &fields.national_id,
                    &fields.address,
                    &updated_at,
                    &id.value(),
                ],
            )
            .await?;

        Ok(changed > 0)
    }

    async fn delete_records(&self, scope: RecordScope) -> Result<u64> {
        let statement = format!("DELETE FROM persons{}", scope_filter(scope));
        self.client.execute(&statement, &[]).await
    }

    fn backend_name(&self) -> &'static str {
        "postgresql"
    }
}

#[async_trait]
impl StateStorage for PostgreSQLAdapter {
    async fn get_meta(&self, key: &str) -> Result<Option<String>> {
        let row = self
            .client
            .query_opt("SELECT value FROM meta WHERE key = $1", &[&key])
            .await?;

        match row {
            Some(row) => Ok(Some(row.try_get(0)?)),
            None => Ok(None),
        }
    }

    async fn set_meta(&self, key: &str, value: &str) -> Result<()> {
        self.client
            .execute(
                "INSERT INTO meta (key, value) VALUES ($1, $2)
                 ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value",
                &[&key, &value],
            )
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_filter() {
        assert_eq!(scope_filter(RecordScope::All), "");
        assert_eq!(scope_filter(RecordScope::TestData), " WHERE is_test_data");
    }
}
