//! `facpref prefs` command - normalized preference report
//!
//! Reads the selected preference files, derives faculty names and term fields,
//! and prints records ordered by faculty, newest term first, strongest desire first.

mod format;

use facpref_core::error::Result;
use facpref_core::normalize::normalize;
use facpref_core::source::{self, Selection};
use facpref_core::trace_time;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

/// Execute the prefs command for a faculty name or `ALL`
pub fn execute(ctx: &CommandContext, name: &str) -> Result<()> {
    let config = ctx.config()?;
    let selection = Selection::for_name(name);
    let pattern = selection.pattern(&config.data_dir_in(ctx.root()), &config.domain_fragment());

    let files = source::discover_required(&pattern)?;
    let rows = source::read_all(&files)?;
    let records = normalize(&rows)?;
    trace_time!(ctx.start, "prefs", records = records.len());

    match ctx.cli.format {
        OutputFormat::Human => format::human::output_human(&records),
        OutputFormat::Json => format::json::output_json(&records)?,
        OutputFormat::Records => format::records::output_records(name, &records),
    }

    Ok(())
}
