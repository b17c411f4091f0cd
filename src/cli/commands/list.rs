//! List command implementation
//!
//! Prints records ordered by id, one JSON object per line.

use super::CommandContext;
use crate::domain::RecordScope;
use anyhow::Context;
use clap::Args;
use std::io::Write;

/// Rows listed when no limit is given
pub const DEFAULT_LIST_LIMIT: usize = 50;

/// Arguments for the list command
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Maximum number of rows to print
    #[arg(long, default_value_t = DEFAULT_LIST_LIMIT)]
    pub limit: usize,
}

impl Default for ListArgs {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

impl ListArgs {
    /// Execute the list command
    pub async fn execute(&self, ctx: &CommandContext, out: &mut dyn Write) -> anyhow::Result<i32> {
        let records = ctx
            .records
            .select_records(RecordScope::All, Some(self.limit))
            .await
            .context("Failed to list records")?;

        for record in &records {
            writeln!(out, "{}", serde_json::to_string(record)?)?;
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
    async fn test_list_prints_json_lines() {
        let ctx = memory_context();
        let mut sink = Vec::new();
        run_command(&Commands::Seed(SeedArgs { count: Some(3) }), &ctx, &mut sink)
            .await
            .unwrap();

        let mut buf = Vec::new();
        run_command(&Commands::List(ListArgs { limit: 2 }), &ctx, &mut buf)
            .await
            .unwrap();

        let text = output(buf);
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["id"], 1);
        assert_eq!(lines[1]["id"], 2);
        assert_eq!(lines[0]["is_test_data"], true);
        assert_eq!(lines[0]["is_anonymized"], false);
        assert!(lines[0]["email"].is_string());
    }

    #[tokio::test]
    async fn test_list_empty_store_prints_nothing() {
        let ctx = memory_context();
        let mut buf = Vec::new();
        run_command(&Commands::List(ListArgs::default()), &ctx, &mut buf)
            .await
            .unwrap();
        assert!(buf.is_empty());
    }
}
