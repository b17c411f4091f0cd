//! State manager for daily marker persistence
//!
//! This module provides the StateManager for loading and saving the guard's
//! daily marker through the metadata storage backend.

use crate::adapters::database::traits::StateStorage;
use crate::core::state::marker::{DailyMarker, DAILY_MARKER_KEY};
use crate::domain::Result;
use std::sync::Arc;

/// State manager for the daily marker
pub struct StateManager {
    /// State storage backend
    storage: Arc<dyn StateStorage + Send + Sync>,
}

impl StateManager {
    /// Create a new StateManager with a state storage backend
    pub fn new_with_storage(storage: Arc<dyn StateStorage + Send + Sync>) -> Self {
        Self { storage }
    }

    /// Load the daily marker
    ///
    /// # Returns
    ///
    /// `Ok(None)` if the guard has never completed a daily sweep. A stored
    /// value that is not an ISO date is treated the same way, so the next
    /// daily sweep overwrites it.
    ///
    /// # Errors
    ///
    /// Returns an error if the metadata read fails.
    pub async fn load_marker(&self) -> Result<Option<DailyMarker>> {
        let Some(value) = self.storage.get_meta(DAILY_MARKER_KEY).await? else {
            return Ok(None);
        };

        match DailyMarker::parse(&value) {
            Ok(marker) => Ok(Some(marker)),
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring malformed daily marker");
                Ok(None)
            }
        }
    }

    /// Save the daily marker, overwriting any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the metadata write fails.
    pub async fn save_marker(&self, marker: &DailyMarker) -> Result<()> {
        tracing::debug!(date = %marker, "Saving daily marker");
        self.storage
            .set_meta(DAILY_MARKER_KEY, &marker.to_string())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sqlite::{SqliteAdapter, SqliteClient};
    use chrono::NaiveDate;

    fn storage() -> Arc<SqliteAdapter> {
        let client = SqliteClient::open_in_memory().unwrap();
        client.ensure_schema().unwrap();
        Arc::new(SqliteAdapter::new(client))
    }

    #[tokio::test]
    async fn test_missing_marker() {
        let manager = StateManager::new_with_storage(storage());
        assert!(manager.load_marker().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let manager = StateManager::new_with_storage(storage());
        let first = DailyMarker::new(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        let second = DailyMarker::new(NaiveDate::from_ymd_opt(2024, 1, 6).unwrap());

        manager.save_marker(&first).await.unwrap();
        manager.save_marker(&second).await.unwrap();

        assert_eq!(manager.load_marker().await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn test_malformed_marker_reads_as_missing() {
        let storage = storage();
        storage
            .set_meta(DAILY_MARKER_KEY, "not-a-date")
            .await
            .unwrap();

        let manager = StateManager::new_with_storage(storage);
        assert!(manager.load_marker().await.unwrap().is_none());
    }
}
