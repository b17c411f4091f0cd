//! PostgreSQL client implementation
//!
//! This module provides the pooled client for interacting with PostgreSQL.

use crate::config::schema::PostgreSQLConfig;
use crate::domain::{RegistryError, Result};
use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod, Runtime};
use native_tls::TlsConnector;
use postgres_native_tls::MakeTlsConnector;
use secrecy::ExposeSecret;
use std::time::Duration;
use tokio_postgres::types::ToSql;
use tokio_postgres::{NoTls, Row};

/// Schema applied by [`PostgreSQLClient::ensure_schema`]
const MIGRATION_SQL: &str = include_str!("../../../migrations/postgresql/001_initial_schema.sql");

/// PostgreSQL client for the person register
///
/// Provides methods for connecting to PostgreSQL, creating the schema and
/// running statements using connection pooling.
pub struct PostgreSQLClient {
    /// Connection pool
    pool: Pool,

    /// Configuration
    config: PostgreSQLConfig,
}

impl PostgreSQLClient {
    /// Create a new PostgreSQL client
    ///
    /// The pool connects lazily; no connection is opened here.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection string or TLS setup is invalid.
    pub async fn new(config: PostgreSQLConfig) -> Result<Self> {
        let pg_config: tokio_postgres::Config =
            config.connection_string.expose_secret().parse().map_err(|e| {
                RegistryError::Configuration(format!("Invalid PostgreSQL connection string: {e}"))
            })?;

        let manager_config = ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        };

        let manager = match config.ssl_mode.as_str() {
            "disable" => Manager::from_config(pg_config, NoTls, manager_config),
            mode => {
                let verify = matches!(mode, "verify-ca" | "verify-full");
                let connector = TlsConnector::builder()
                    .danger_accept_invalid_certs(!verify)
                    .danger_accept_invalid_hostnames(mode != "verify-full")
                    .build()
                    .map_err(|e| {
                        RegistryError::Configuration(format!("Failed to build TLS connector: {e}"))
                    })?;
                Manager::from_config(pg_config, MakeTlsConnector::new(connector), manager_config)
            }
        };

        let timeout = Duration::from_secs(config.connection_timeout_seconds);
        let pool = Pool::builder(manager)
            .max_size(config.max_connections)
            .runtime(Runtime::Tokio1)
            .wait_timeout(Some(timeout))
            .create_timeout(Some(timeout))
            .recycle_timeout(Some(timeout))
            .build()
            .map_err(|e| {
                RegistryError::Database(format!("Failed to create connection pool: {e}"))
            })?;

        tracing::debug!(
            target_db = %Self::redact(&config),
            ssl_mode = %config.ssl_mode,
            max_connections = config.max_connections,
            "PostgreSQL pool created"
        );

        Ok(Self { pool, config })
    }

    /// Create tables and indexes if they don't exist
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be created.
    pub async fn ensure_schema(&self) -> Result<()> {
        let client = self.get_connection().await?;

        client
            .batch_execute(MIGRATION_SQL)
            .await
            .map_err(|e| RegistryError::Database(format!("Failed to execute migration: {e}")))?;

        tracing::debug!("PostgreSQL schema ensured");
        Ok(())
    }

    /// Get a connection from the pool with the statement timeout applied
    ///
    /// # Errors
    ///
    /// Returns an error if a connection cannot be obtained.
    pub async fn get_connection(&self) -> Result<deadpool_postgres::Object> {
        let client = self.pool.get().await.map_err(|e| {
            RegistryError::Database(format!("Failed to get connection from pool: {e}"))
        })?;

        let timeout_query = format!(
            "SET statement_timeout = {}",
            self.config.statement_timeout_seconds * 1000
        );
        client.batch_execute(&timeout_query).await.map_err(|e| {
            RegistryError::Database(format!("Failed to set statement timeout: {e}"))
        })?;

        Ok(client)
    }

    /// Execute a query and return rows
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn query(&self, query: &str, params: &[&(dyn ToSql + Sync)]) -> Result<Vec<Row>> {
        let client = self.get_connection().await?;
        client
            .query(query, params)
            .await
            .map_err(|e| RegistryError::Database(format!("Query failed: {e}")))
    }

    /// Execute a query expecting at most one row
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or returns more than one row.
    pub async fn query_opt(
        &self,
        query: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<Option<Row>> {
        let client = self.get_connection().await?;
        client
            .query_opt(query, params)
            .await
            .map_err(|e| RegistryError::Database(format!("Query failed: {e}")))
    }

    /// Execute a statement and return the number of affected rows
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails.
    pub async fn execute(&self, statement: &str, params: &[&(dyn ToSql + Sync)]) -> Result<u64> {
        let client = self.get_connection().await?;
        client
            .execute(statement, params)
            .await
            .map_err(|e| RegistryError::Database(format!("Statement execution failed: {e}")))
    }

    /// Get the connection string (without credentials)
    pub fn connection_string_safe(&self) -> String {
        Self::redact(&self.config)
    }

    fn redact(config: &PostgreSQLConfig) -> String {
        config
            .connection_string
            .expose_secret()
            .host_part()
            .map(|host| format!("postgresql://***@{host}"))
            .unwrap_or_else(|| "postgresql://***".to_string())
    }
}
