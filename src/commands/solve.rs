//! `facpref solve` command - rebuild the assignment weight ledger
//!
//! Prints the ledger path on success. A failed run may leave a partial ledger
//! behind; the non-zero exit status marks it as incomplete.

use facpref_core::engine::{run_all, EngineConfig};
use facpref_core::error::Result;
use facpref_core::format::escape_quotes;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

/// Execute the solve command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let config = ctx.config()?;
    let engine = EngineConfig::from_config(&config, ctx.root());

    let report = run_all(&engine)?;

    match ctx.cli.format {
        OutputFormat::Human => {
            println!("{}", report.ledger_path.display());
            if !ctx.cli.quiet {
                eprintln!(
                    "Solved. {} rows from {} files ({} duplicates skipped)",
                    report.rows_written, report.files, report.duplicates
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Records => {
            println!(
                "L path=\"{}\" files={} rows_read={} rows_written={} duplicates={}",
                escape_quotes(&report.ledger_path.display().to_string()),
                report.files,
                report.rows_read,
                report.rows_written,
                report.duplicates
            );
        }
    }

    Ok(())
}
