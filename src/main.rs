//! Facpref - faculty course-preference CLI
//!
//! Normalizes preference survey exports for per-faculty review and builds the
//! weighted faculty/course ledger consumed by the scheduler.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use facpref_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let Err(e) = commands::dispatch::run(&cli, start) else {
        return ExitCode::SUCCESS;
    };

    match cli.format {
        OutputFormat::Json => eprintln!("{}", e.to_json()),
        _ if !cli.quiet => eprintln!("error: {}", e),
        _ => {}
    }
    ExitCode::from(e.exit_code() as u8)
}
