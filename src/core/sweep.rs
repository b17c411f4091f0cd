//! Detect-and-fix sweeps over test-data rows
//!
//! A sweep reads every test-data row, anonymizes the ones that do not satisfy
//! the anonymized predicate and writes them back one at a time. Re-running a
//! sweep is harmless: compliant rows are skipped without a write.

use crate::adapters::database::RecordStore;
use crate::anonymization::{anonymize, is_anonymized, AuditEntry};
use crate::domain::{RecordScope, Result};
use crate::log_sweep_complete;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Why a sweep is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepPhase {
    /// Unconditional sweep at the start of every guarded command
    Startup,
    /// Sweep behind the once-per-day gate
    Daily,
    /// Explicit `anonymize` command
    Manual,
}

impl SweepPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SweepPhase::Startup => "startup",
            SweepPhase::Daily => "daily",
            SweepPhase::Manual => "manual",
        }
    }
}

impl fmt::Display for SweepPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SweepReport {
    /// Test-data rows read
    pub examined: usize,

    /// Rows rewritten to their anonymized form
    pub fixed: usize,
}

/// Anonymization status of the test data
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ComplianceStatus {
    /// Number of test-data rows
    pub total: usize,

    /// Test-data rows that do not satisfy the anonymized predicate
    pub non_anonymized: usize,
}

impl ComplianceStatus {
    /// Whether every test-data row is anonymized
    pub fn is_compliant(&self) -> bool {
        self.non_anonymized == 0
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "total_test_rows={} non_anonymized={}",
            self.total, self.non_anonymized
        )
    }
}

/// Anonymize every test-data row that is not yet anonymized
///
/// Rows are written one at a time; there is no transaction across rows. A
/// row that disappears between the read and the write is not counted.
///
/// # Errors
///
/// Returns the first store error; rows fixed before it stay fixed.
pub async fn anonymize_pending<S>(
    store: &S,
    phase: SweepPhase,
    now: DateTime<Utc>,
) -> Result<SweepReport>
where
    S: RecordStore + ?Sized,
{
    let rows = store.select_records(RecordScope::TestData, None).await?;
    let mut fixed = 0;

    for record in rows.iter().filter(|r| !is_anonymized(r)) {
        let anonymized = anonymize(record, now);
        let written = store
            .update_fields(record.id, &anonymized.fields, anonymized.updated_at)
            .await?;

        if written {
            AuditEntry::from_change(record, &anonymized).emit();
            fixed += 1;
        } else {
            tracing::warn!(
                record_id = %record.id,
                phase = %phase,
                "Test-data row disappeared before it could be anonymized"
            );
        }
    }

    log_sweep_complete!(phase.as_str(), rows.len(), fixed);

    Ok(SweepReport {
        examined: rows.len(),
        fixed,
    })
}

/// Count test-data rows and how many of them are not anonymized
///
/// Read-only.
pub async fn check_anonymization<S>(store: &S) -> Result<ComplianceStatus>
where
    S: RecordStore + ?Sized,
{
    let rows = store.select_records(RecordScope::TestData, None).await?;
    let non_anonymized = rows.iter().filter(|r| !is_anonymized(r)).count();

    Ok(ComplianceStatus {
        total: rows.len(),
        non_anonymized,
    })
}
