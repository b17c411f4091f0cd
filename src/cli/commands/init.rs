//! Init command implementation
//!
//! The schema is already ensured and the guard has run by the time this
//! command body executes, so it only reports success.

use super::CommandContext;
use clap::Args;
use std::io::Write;

/// Arguments for the init command
#[derive(Args, Debug, Clone, Default)]
pub struct InitArgs {}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self, ctx: &CommandContext, out: &mut dyn Write) -> anyhow::Result<i32> {
        tracing::info!(backend = ctx.records.backend_name(), "Database initialized");
        writeln!(out, "DB initialized.")?;
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::run_command;
    use crate::cli::commands::test_support::{memory_context, output};
    use crate::cli::Commands;
    use crate::core::state::DAILY_MARKER_KEY;

    #[tokio::test]
    async fn test_init_creates_schema_and_runs_guard() {
        let ctx = memory_context();
        let mut buf = Vec::new();

        let code = run_command(&Commands::Init(InitArgs::default()), &ctx, &mut buf)
            .await
            .unwrap();

        assert_eq!(code, 0);
        let text = output(buf);
        assert!(text.contains("[guard] daily_ok total_test_rows=0"));
        assert!(text.ends_with("DB initialized.\n"));
        assert!(ctx.state.get_meta(DAILY_MARKER_KEY).await.unwrap().is_some());
    }
}
