//! End-to-end command scenarios against a file-backed SQLite store

use registry_guard::cli::commands::{run_command, CommandContext};
use registry_guard::cli::{Cli, Commands};
use registry_guard::config::RegistryConfig;
use registry_guard::core::state::DAILY_MARKER_KEY;
use registry_guard::domain::{NewPersonRecord, PersonFields, RecordScope};
use clap::Parser;
use tempfile::TempDir;

struct Harness {
    _dir: TempDir,
    ctx: CommandContext,
}

impl Harness {
    async fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let mut config = RegistryConfig::default();
        config.sqlite.path = dir.path().join("test_users.db").to_string_lossy().to_string();
        config.generator.default_seed_count = 10;

        let ctx = CommandContext::connect(config).await.unwrap();
        Self { _dir: dir, ctx }
    }

    async fn run(&self, args: &[&str]) -> (i32, String) {
        let argv: Vec<&str> = std::iter::once("registry-guard")
            .chain(args.iter().copied())
            .collect();
        let command = Cli::parse_from(argv).command();

        let mut out = Vec::new();
        let code = run_command(&command, &self.ctx, &mut out).await.unwrap();
        (code, String::from_utf8(out).unwrap())
    }
}

#[tokio::test]
async fn test_seed_check_anonymize_check() {
    let h = Harness::new().await;

    assert_eq!(h.run(&["seed", "-n", "5"]).await, (0, "Seeded raw rows: 5\n".to_string()));
    assert_eq!(
        h.run(&["check"]).await.1,
        "total_test_rows=5 non_anonymized=5\n"
    );
    assert_eq!(h.run(&["anonymize"]).await.1, "Anonymized rows: 5\n");
    assert_eq!(
        h.run(&["check"]).await.1,
        "total_test_rows=5 non_anonymized=0\n"
    );
    assert_eq!(h.run(&["anonymize"]).await.1, "Anonymized rows: 0\n");
}

#[tokio::test]
async fn test_seed_then_guard() {
    let h = Harness::new().await;

    h.run(&["seed", "-n", "3"]).await;
    let (code, out) = h.run(&["guard"]).await;
    assert_eq!(code, 0);
    assert!(out.contains("[guard] fixed_startup=3"));
    assert!(out.contains("[guard] daily_ok total_test_rows=3"));

    assert_eq!(
        h.run(&["check"]).await.1,
        "total_test_rows=3 non_anonymized=0\n"
    );
}

#[tokio::test]
async fn test_clear_deletes_test_rows() {
    let h = Harness::new().await;

    h.run(&["seed", "-n", "3"]).await;
    let (code, out) = h.run(&["clear"]).await;
    assert_eq!(code, 0);
    assert!(out.ends_with("Deleted test rows: 3\n"));

    let remaining = h
        .ctx
        .records
        .select_records(RecordScope::All, None)
        .await
        .unwrap();
    assert!(remaining.is_empty());
}

#[tokio::test]
async fn test_clear_keeps_production_rows() {
    let h = Harness::new().await;
    h.run(&["init"]).await;

    h.ctx
        .records
        .insert_records(vec![NewPersonRecord::production(PersonFields::new(
            "Kept Person",
            "kept@example.com",
            "700101-1111",
            "Somewhere 1",
        ))])
        .await
        .unwrap();
    h.run(&["seed", "-n", "2"]).await;

    let (_, out) = h.run(&["clear"]).await;
    assert!(out.ends_with("Deleted test rows: 2\n"));

    let remaining = h
        .ctx
        .records
        .select_records(RecordScope::All, None)
        .await
        .unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].fields.name, "Kept Person");
}

#[tokio::test]
async fn test_init_runs_guard_and_sets_marker() {
    let h = Harness::new().await;

    let (code, out) = h.run(&["init"]).await;
    assert_eq!(code, 0);
    assert!(out.ends_with("DB initialized.\n"));
    assert!(h
        .ctx
        .state
        .get_meta(DAILY_MARKER_KEY)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn test_read_only_commands_skip_guard() {
    let h = Harness::new().await;
    h.run(&["seed", "-n", "2"]).await;

    for args in [&["check"][..], &["list"][..], &[][..]] {
        let (code, out) = h.run(args).await;
        assert_eq!(code, 0);
        assert!(!out.contains("[guard]"));
    }

    assert_eq!(
        h.run(&["check"]).await.1,
        "total_test_rows=2 non_anonymized=2\n"
    );
    assert!(h
        .ctx
        .state
        .get_meta(DAILY_MARKER_KEY)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_default_command_lists_records() {
    let h = Harness::new().await;
    h.run(&["seed"]).await;

    let (_, default_out) = h.run(&[]).await;
    assert_eq!(default_out.lines().count(), 10);

    let (_, limited) = h.run(&["list", "--limit", "4"]).await;
    let ids: Vec<i64> = limited
        .lines()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            value["id"].as_i64().unwrap()
        })
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn test_unknown_command_is_rejected() {
    assert!(Cli::try_parse_from(["registry-guard", "frobnicate"]).is_err());
    let cli = Cli::try_parse_from(["registry-guard", "check"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Check(_))));
}
