//! `facpref names` command - faculty found in the data directory

use facpref_core::error::Result;
use facpref_core::format::escape_quotes;
use facpref_core::roster::faculty_names;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

/// Execute the names command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let config = ctx.config()?;
    let names = faculty_names(
        &config.data_dir_in(ctx.root()),
        &config.domain_fragment(),
        &config.domain_label(),
    )?;

    match ctx.cli.format {
        OutputFormat::Human => {
            if names.is_empty() && !ctx.cli.quiet {
                println!("No faculty found");
            }
            for name in &names {
                println!("{}", name);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&names)?);
        }
        OutputFormat::Records => {
            println!("H facpref=1 records=1 mode=names count={}", names.len());
            for name in &names {
                println!("F \"{}\"", escape_quotes(name));
            }
        }
    }

    Ok(())
}
