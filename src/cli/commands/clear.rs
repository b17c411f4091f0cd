//! Clear command implementation
//!
//! Deletes every test-data row. The guard has already run by the time this
//! executes. Rows without the test-data flag are kept.

use super::CommandContext;
use crate::domain::RecordScope;
use anyhow::Context;
use clap::Args;
use std::io::Write;

/// Arguments for the clear command
#[derive(Args, Debug, Clone, Default)]
pub struct ClearArgs {}

impl ClearArgs {
    /// Execute the clear command
    pub async fn execute(&self, ctx: &CommandContext, out: &mut dyn Write) -> anyhow::Result<i32> {
        let deleted = ctx
            .records
            .delete_records(RecordScope::TestData)
            .await
            .context("Failed to delete test rows")?;

        tracing::info!(deleted, "Cleared test rows");
        writeln!(out, "Deleted test rows: {deleted}")?;
        Ok(0)
    }
}
