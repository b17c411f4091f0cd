//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for the registry using clap.

pub mod commands;

use crate::config::RegistryConfig;
use clap::{Parser, Subcommand};

/// Registry Guard - GDPR-safe test person register
#[derive(Parser, Debug)]
#[command(name = "registry-guard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (optional; defaults apply if missing)
    #[arg(
        short,
        long,
        default_value = "registry-guard.toml",
        env = "REGISTRY_GUARD_CONFIG"
    )]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "REGISTRY_GUARD_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Path to the SQLite database file
    #[arg(long, env = "DATABASE_PATH")]
    pub db: Option<String>,

    /// Generator locale (en, fr_fr, zh_cn, zh_tw, ja_jp)
    #[arg(long, env = "FAKER_LOCALE")]
    pub locale: Option<String>,

    /// Subcommand to execute (defaults to `list`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The command to run, falling back to `list`
    pub fn command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::List(commands::list::ListArgs::default()))
    }

    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut RegistryConfig) {
        if let Some(ref level) = self.log_level {
            config.application.log_level = level.to_lowercase();
        }
        if let Some(ref db) = self.db {
            config.sqlite.path = db.clone();
        }
        if let Some(ref locale) = self.locale {
            config.generator.locale = locale.clone();
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create the database schema
    Init(commands::init::InitArgs),

    /// Insert raw (non-anonymized) synthetic test rows
    Seed(commands::seed::SeedArgs),

    /// Anonymize every non-anonymized test row once
    Anonymize(commands::anonymize::AnonymizeArgs),

    /// Report anonymization counts for test rows
    Check(commands::check::CheckArgs),

    /// List records as JSON lines
    List(commands::list::ListArgs),

    /// Delete all test rows
    Clear(commands::clear::ClearArgs),

    /// Run the startup and daily anonymization guard
    Guard(commands::guard::GuardArgs),
}

impl Commands {
    /// Command name as typed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Init(_) => "init",
            Commands::Seed(_) => "seed",
            Commands::Anonymize(_) => "anonymize",
            Commands::Check(_) => "check",
            Commands::List(_) => "list",
            Commands::Clear(_) => "clear",
            Commands::Guard(_) => "guard",
        }
    }

    /// Whether the guard runs before this command
    ///
    /// Commands that create raw data, only read, or anonymize on their own
    /// skip it. The `guard` command runs the guard as its own body.
    pub fn runs_guard_first(&self) -> bool {
        matches!(self, Commands::Init(_) | Commands::Clear(_))
    }
}
