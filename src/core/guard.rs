//! Anonymization guard
//!
//! The guard runs an unconditional startup sweep on every invocation and, at
//! most once per calendar day, a second daily sweep followed by a compliance
//! count. The day is tracked with a [`DailyMarker`] in the metadata table.
//!
//! A failure anywhere before the marker is saved aborts the run with the
//! marker untouched, so the next invocation repeats the daily sweep.

use crate::adapters::database::{RecordStore, StateStorage};
use crate::core::state::{DailyMarker, StateManager};
use crate::core::sweep::{anonymize_pending, check_anonymization, SweepPhase, SweepReport};
use crate::domain::{now_utc, Result};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

/// Result of the daily part of a guard run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyReport {
    /// Rows fixed by the daily sweep
    pub fixed: usize,

    /// Test-data rows counted after the daily sweep
    pub total: usize,

    /// Rows still not anonymized after the daily sweep (expected zero)
    pub non_anonymized: usize,
}

/// Result of a guard run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuardReport {
    /// Identifier of this run, for correlating log lines
    pub run_id: Uuid,

    /// Startup sweep outcome
    pub startup: SweepReport,

    /// Daily sweep outcome, `None` if the daily gate was already passed today
    pub daily: Option<DailyReport>,

    /// Marker in effect after the run
    pub marker: DailyMarker,
}

impl GuardReport {
    /// Human-readable lines for the command output
    ///
    /// Fix counts are only reported when something was fixed.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        if self.startup.fixed > 0 {
            lines.push(format!("[guard] fixed_startup={}", self.startup.fixed));
        }

        if let Some(daily) = &self.daily {
            if daily.fixed > 0 {
                lines.push(format!("[guard] fixed_daily={}", daily.fixed));
            }
            lines.push(format!("[guard] daily_ok total_test_rows={}", daily.total));
        }

        lines
    }
}

/// Enforces the anonymization guarantee on the store
pub struct Guard {
    records: Arc<dyn RecordStore + Send + Sync>,
    state: StateManager,
}

impl Guard {
    /// Create a guard over a record store and its metadata storage
    pub fn new(
        records: Arc<dyn RecordStore + Send + Sync>,
        state: Arc<dyn StateStorage + Send + Sync>,
    ) -> Self {
        Self {
            records,
            state: StateManager::new_with_storage(state),
        }
    }

    /// Run the guard for the current local date
    ///
    /// # Errors
    ///
    /// Returns the first store error. The daily marker is not written then.
    pub async fn run(&self) -> Result<GuardReport> {
        self.run_on(Local::now().date_naive()).await
    }

    /// Run the guard as if the local date were `today`
    ///
    /// # Errors
    ///
    /// Returns the first store error. The daily marker is not written then.
    pub async fn run_on(&self, today: NaiveDate) -> Result<GuardReport> {
        let run_id = Uuid::new_v4();
        tracing::debug!(%run_id, %today, backend = self.records.backend_name(), "Guard started");

        let startup =
            anonymize_pending(self.records.as_ref(), SweepPhase::Startup, now_utc()).await?;
        if startup.fixed > 0 {
            tracing::info!(%run_id, fixed_startup = startup.fixed, "Startup sweep fixed rows");
        }

        if let Some(marker) = self.state.load_marker().await? {
            if marker.covers(today) {
                tracing::debug!(%run_id, marker = %marker, "Daily sweep already done today");
                return Ok(GuardReport {
                    run_id,
                    startup,
                    daily: None,
                    marker,
                });
            }
        }

        let daily_sweep =
            anonymize_pending(self.records.as_ref(), SweepPhase::Daily, now_utc()).await?;
        if daily_sweep.fixed > 0 {
            tracing::info!(%run_id, fixed_daily = daily_sweep.fixed, "Daily sweep fixed rows");
        }

        let status = check_anonymization(self.records.as_ref()).await?;
        if !status.is_compliant() {
            // Rows inserted by another process after the sweep read
            tracing::warn!(
                %run_id,
                non_anonymized = status.non_anonymized,
                "Test-data rows still not anonymized after daily sweep"
            );
        }

        let marker = DailyMarker::new(today);
        self.state.save_marker(&marker).await?;

        tracing::info!(
            %run_id,
            total = status.total,
            non_anonymized = status.non_anonymized,
            marker = %marker,
            "daily_ok"
        );

        Ok(GuardReport {
            run_id,
            startup,
            daily: Some(DailyReport {
                fixed: daily_sweep.fixed,
                total: status.total,
                non_anonymized: status.non_anonymized,
            }),
            marker,
        })
    }
}
