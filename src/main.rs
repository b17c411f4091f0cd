// Registry Guard - GDPR-safe test person register
// Copyright (c) 2025 Registry Guard Contributors
// Licensed under the MIT License

use clap::Parser;
use registry_guard::cli::commands::{run_command, CommandContext};
use registry_guard::cli::Cli;
use registry_guard::config::load_config_or_default;
use registry_guard::log_error_with_context;
use registry_guard::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = match load_config_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration {}: {e}", cli.config);
            process::exit(2);
        }
    };
    cli.apply_overrides(&mut config);
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        process::exit(2);
    }

    let logging_guard = match init_logging(&config.application.log_level, &config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        config = %cli.config,
        "Registry Guard starting"
    );

    let ctx = match CommandContext::connect(config).await {
        Ok(ctx) => ctx,
        Err(e) => {
            log_error_with_context!(&e, "Failed to open store");
            eprintln!("Error: {e}");
            process::exit(if e.is_database() { 4 } else { 2 });
        }
    };

    let command = cli.command();
    let mut stdout = std::io::stdout().lock();
    let exit_code = match run_command(&command, &ctx, &mut stdout).await {
        Ok(code) => code,
        Err(e) => {
            log_error_with_context!(&e, command.name());
            eprintln!("Error: {e:#}");
            5
        }
    };

    drop(stdout);
    drop(logging_guard);
    process::exit(exit_code);
}
