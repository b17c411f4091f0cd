//! CLI command implementations
//!
//! Every command ensures the schema first. `init` and `clear` run the guard
//! before their own work; the other commands do not.

pub mod anonymize;
pub mod check;
pub mod clear;
pub mod guard;
pub mod init;
pub mod list;
pub mod seed;

use crate::adapters::database::{create_store, RecordStore, StateStorage};
use crate::cli::Commands;
use crate::config::RegistryConfig;
use crate::core::guard::{Guard, GuardReport};
use crate::domain::Result;
use anyhow::Context;
use std::io::Write;
use std::sync::Arc;

/// Store handles and configuration shared by all commands
pub struct CommandContext {
    pub config: RegistryConfig,
    pub records: Arc<dyn RecordStore + Send + Sync>,
    pub state: Arc<dyn StateStorage + Send + Sync>,
}

impl CommandContext {
    /// Open the configured store
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be opened.
    pub async fn connect(config: RegistryConfig) -> Result<Self> {
        let (records, state) = create_store(&config).await?;
        Ok(Self {
            config,
            records,
            state,
        })
    }

    /// Build a context from existing store handles
    pub fn from_parts(
        config: RegistryConfig,
        records: Arc<dyn RecordStore + Send + Sync>,
        state: Arc<dyn StateStorage + Send + Sync>,
    ) -> Self {
        Self {
            config,
            records,
            state,
        }
    }

    /// Run the guard and print its summary
    pub(crate) async fn run_guard(&self, out: &mut dyn Write) -> anyhow::Result<GuardReport> {
        let report = Guard::new(self.records.clone(), self.state.clone())
            .run()
            .await
            .context("Anonymization guard failed")?;

        for line in report.summary_lines() {
            writeln!(out, "{line}")?;
        }
        Ok(report)
    }
}

/// Run a command against an open store
///
/// Command output goes to `out`; diagnostics go to the log.
///
/// # Returns
///
/// The process exit code.
pub async fn run_command(
    command: &Commands,
    ctx: &CommandContext,
    out: &mut dyn Write,
) -> anyhow::Result<i32> {
    tracing::debug!(
        command = command.name(),
        backend = ctx.records.backend_name(),
        "Running command"
    );

    ctx.records
        .ensure_schema()
        .await
        .context("Failed to ensure database schema")?;

    if command.runs_guard_first() {
        ctx.run_guard(out).await?;
    }

    match command {
        Commands::Init(args) => args.execute(ctx, out).await,
        Commands::Seed(args) => args.execute(ctx, out).await,
        Commands::Anonymize(args) => args.execute(ctx, out).await,
        Commands::Check(args) => args.execute(ctx, out).await,
        Commands::List(args) => args.execute(ctx, out).await,
        Commands::Clear(args) => args.execute(ctx, out).await,
        Commands::Guard(args) => args.execute(ctx, out).await,
    }
}
