//! Seed command implementation
//!
//! Inserts raw synthetic test rows. The guard does not run before seeding,
//! so the new rows stay raw until the next guarded command or `anonymize`.

use super::CommandContext;
use crate::adapters::generator::{FakerGenerator, Locale, RecordGenerator};
use anyhow::Context;
use clap::Args;
use std::io::Write;

/// Arguments for the seed command
#[derive(Args, Debug, Clone, Default)]
pub struct SeedArgs {
    /// Number of rows (defaults to generator.default_seed_count)
    #[arg(short = 'n', long = "count")]
    pub count: Option<usize>,
}

impl SeedArgs {
    /// Execute the seed command
    pub async fn execute(&self, ctx: &CommandContext, out: &mut dyn Write) -> anyhow::Result<i32> {
        let count = self
            .count
            .unwrap_or(ctx.config.generator.default_seed_count);

        let locale = Locale::parse(&ctx.config.generator.locale).map_err(anyhow::Error::msg)?;
        let mut generator = FakerGenerator::new(locale)?;
        let batch = generator.generate_batch(count);

        let ids = ctx
            .records
            .insert_records(batch)
            .await
            .context("Failed to insert seed rows")?;

        tracing::info!(count = ids.len(), locale = %locale, "Seeded raw test rows");
        writeln!(out, "Seeded raw rows: {}", ids.len())?;
        Ok(0)
    }
}
