//! rmchars CLI Binary
//!
//! Recursively removes invalid characters from file and directory names.

use clap::Parser;
use rmchars::cli::{Cli, RunContext};
use rmchars::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let mut context = match RunContext::new(cli.path.clone(), cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{}", rmchars::cli::map_error(&e));
            process::exit(1);
        }
    };
    context.apply_overrides(&cli);

    let logging_config = build_logging_config(&cli, &context.config().logging);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!(root = %context.root().display(), "rmchars starting");

    match context.execute(cli.invocation(), cli.summary) {
        Ok(output) => {
            info!("Command completed successfully");
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", rmchars::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from the loaded config and CLI flags.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, base: &LoggingConfig) -> LoggingConfig {
    let mut config = base.clone();

    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }

    config
}
