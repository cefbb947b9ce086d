//! # Area Calculator CLI
//!
//! Computes the area of a circle or triangle from command-line values.
//!
//! ## Usage
//! ```bash
//! area circle 3
//! area triangle 3 4 5
//! area --json triangle 5
//! area json '{"kind": "circle", "radius": 3}'
//! ```
//!
//! ## Environment
//! - `AREA_OUTPUT=text|json` - default output format
//! - `AREA_LOG` / `RUST_LOG` - log filter (logs go to stderr)

mod command;
mod config;
mod error;

use std::env;
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;
use crate::error::CliError;

fn main() -> ExitCode {
    let config = match CliConfig::load().map_err(CliError::from) {
        Ok(config) => config,
        Err(err) => {
            // Logging is not initialized yet
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config);

    let args: Vec<String> = env::args().skip(1).collect();
    match command::run(&args, &config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(code = err.code(), %err, "area calculation failed");
            eprintln!("error: {err}");
            if matches!(err, CliError::Usage(_)) {
                eprintln!("{}", command::USAGE);
            }
            ExitCode::FAILURE
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `AREA_LOG=area_core=debug` - Show rejected measurements
/// - `RUST_LOG=trace` - Show every computed area
/// - Default: WARN, INFO for the CLI itself
fn init_tracing(config: &CliConfig) {
    let filter = match &config.log_filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("warn,area_cli=info")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
