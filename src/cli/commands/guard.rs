//! Guard command implementation
//!
//! Runs the startup and daily guard explicitly, for scheduled enforcement.

use super::CommandContext;
use clap::Args;
use std::io::Write;

/// Arguments for the guard command
#[derive(Args, Debug, Clone, Default)]
pub struct GuardArgs {}

impl GuardArgs {
    /// Execute the guard command
    pub async fn execute(&self, ctx: &CommandContext, out: &mut dyn Write) -> anyhow::Result<i32> {
        let report = ctx.run_guard(out).await?;

        if report.daily.is_none() {
            writeln!(out, "[guard] daily_skipped last_check={}", report.marker)?;
        }
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::run_command;
    use crate::cli::commands::test_support::{memory_context, output};
    use crate::cli::commands::seed::SeedArgs;
    use crate::cli::Commands;

    #[tokio::test]
    async fn test_guard_command_twice() {
        let ctx = memory_context();
        let mut sink = Vec::new();
        run_command(&Commands::Seed(SeedArgs { count: Some(3) }), &ctx, &mut sink)
            .await
            .unwrap();

        let mut first = Vec::new();
        run_command(&Commands::Guard(GuardArgs::default()), &ctx, &mut first)
            .await
            .unwrap();
        assert_eq!(
            output(first),
            "[guard] fixed_startup=3\n[guard] daily_ok total_test_rows=3\n"
        );

        let mut second = Vec::new();
        run_command(&Commands::Guard(GuardArgs::default()), &ctx, &mut second)
            .await
            .unwrap();
        assert!(output(second).starts_with("[guard] daily_skipped last_check="));
    }
}
