//! Check command implementation

use super::CommandContext;
use crate::core::sweep::check_anonymization;
use anyhow::Context;
use clap::Args;
use std::io::Write;

/// Arguments for the check command
#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {}

impl CheckArgs {
    /// Execute the check command
    ///
    /// Read-only; prints `total_test_rows=<n> non_anonymized=<m>`.
    pub async fn execute(&self, ctx: &CommandContext, out: &mut dyn Write) -> anyhow::Result<i32> {
        let status = check_anonymization(ctx.records.as_ref())
            .await
            .context("Failed to read test rows")?;

        tracing::debug!(
            total = status.total,
            non_anonymized = status.non_anonymized,
            "Anonymization status"
        );
        writeln!(out, "{status}")?;
        Ok(0)
    }
}
