//! `facpref submit` command - record one preference answer

use facpref_core::error::Result;
use facpref_core::format::escape_quotes;
use facpref_core::submit::{self, Submission};

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

/// Execute the submit command
pub fn execute(ctx: &CommandContext, submission: &Submission) -> Result<()> {
    let config = ctx.config()?;
    let path = submit::submit(&config.data_dir_in(ctx.root()), submission)?;

    match ctx.cli.format {
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("Preference saved to {}", path.display());
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "message": "Preference saved",
                "path": path.display().to_string(),
                "faculty_id": submission.faculty_id,
                "term_code": submission.term_code,
                "class_id": submission.class_id,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "S path=\"{}\" faculty={} term={} class={}",
                escape_quotes(&path.display().to_string()),
                submission.faculty_id,
                submission.term_code,
                submission.class_id
            );
        }
    }

    Ok(())
}
