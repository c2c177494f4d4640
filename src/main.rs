// Enrollment - per-company enrollment file splitter
// Copyright (c) 2025 Enrollment Contributors
// Licensed under the MIT License

use enrollment::cli::parse_args;
use enrollment::config::load_config_or_default;
use enrollment::logging::init_logging;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = match parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(exit) => {
            println!("{}", exit.message.trim_end());
            process::exit(exit.code);
        }
    };

    let config = match load_config_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            println!("{e}");
            process::exit(e.exit_code());
        }
    };

    let log_level = cli
        .log_level
        .as_deref()
        .unwrap_or(&config.application.log_level);
    let guard = match init_logging(log_level, &config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Enrollment splitter"
    );

    let exit_code = match cli.run.execute(&config) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e:#}");
            5
        }
    };

    // Flush file logs before exiting
    drop(guard);
    process::exit(exit_code);
}
