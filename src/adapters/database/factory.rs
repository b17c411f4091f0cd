//! Store factory
//!
//! This module creates store backends based on configuration.

use crate::adapters::database::traits::{RecordStore, StateStorage};
use crate::adapters::postgresql::{PostgreSQLAdapter, PostgreSQLClient};
use crate::adapters::sqlite::{SqliteAdapter, SqliteClient};
use crate::config::schema::{DatabaseTarget, RegistryConfig};
use crate::domain::{RegistryError, Result};
use std::sync::Arc;

/// Record store and state storage sharing one underlying connection
pub type StoreHandles = (
    Arc<dyn RecordStore + Send + Sync>,
    Arc<dyn StateStorage + Send + Sync>,
);

/// Create the record store and state storage for the configured backend
///
/// Both handles share the same connection (SQLite) or pool (PostgreSQL).
///
/// # Errors
///
/// Returns an error if the backend cannot be opened.
pub async fn create_store(config: &RegistryConfig) -> Result<StoreHandles> {
    match config.database_target {
        DatabaseTarget::Sqlite => {
            tracing::debug!(path = %config.sqlite.path, "Opening SQLite store");
            let client = SqliteClient::open(&config.sqlite)?;
            Ok(share(Arc::new(SqliteAdapter::new(client))))
        }
        DatabaseTarget::PostgreSQL => {
            let pg_config = config.postgresql.as_ref().ok_or_else(|| {
                RegistryError::Configuration(
                    "postgresql configuration is required when database_target = 'postgresql'"
                        .to_string(),
                )
            })?;

            tracing::debug!("Creating PostgreSQL store");
            let client = PostgreSQLClient::new(pg_config.clone()).await?;
            Ok(share(Arc::new(PostgreSQLAdapter::new(client))))
        }
    }
}

fn share<S>(adapter: Arc<S>) -> StoreHandles
where
    S: RecordStore + StateStorage + Send + Sync + 'static,
{
    (
        adapter.clone() as Arc<dyn RecordStore + Send + Sync>,
        adapter as Arc<dyn StateStorage + Send + Sync>,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_create_sqlite_store() {
        let dir = TempDir::new().unwrap();
        let mut config = RegistryConfig::default();
        config.sqlite.path = dir.path().join("registry.db").to_string_lossy().to_string();

        let (records, state) = create_store(&config).await.unwrap();
        records.ensure_schema().await.unwrap();

        assert_eq!(records.backend_name(), "sqlite");
        assert!(state.get_meta("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_postgresql_store_requires_config() {
        let config = RegistryConfig {
            database_target: DatabaseTarget::PostgreSQL,
            ..Default::default()
        };

        let result = create_store(&config).await;
        assert!(matches!(result, Err(RegistryError::Configuration(_))));
    }
}
