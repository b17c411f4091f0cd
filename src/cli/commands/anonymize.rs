//! Anonymize command implementation
//!
//! Runs one detect-and-fix sweep outside the daily gate. The daily marker is
//! neither read nor written.

use super::CommandContext;
use crate::core::sweep::{anonymize_pending, SweepPhase};
use crate::domain::now_utc;
use anyhow::Context;
use clap::Args;
use std::io::Write;

/// Arguments for the anonymize command
#[derive(Args, Debug, Clone, Default)]
pub struct AnonymizeArgs {}

impl AnonymizeArgs {
    /// Execute the anonymize command
    pub async fn execute(&self, ctx: &CommandContext, out: &mut dyn Write) -> anyhow::Result<i32> {
        let report = anonymize_pending(ctx.records.as_ref(), SweepPhase::Manual, now_utc())
            .await
            .context("Anonymization sweep failed")?;

        writeln!(out, "Anonymized rows: {}", report.fixed)?;
        Ok(0)
    }
}
