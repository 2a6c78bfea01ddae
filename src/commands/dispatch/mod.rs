//! Command dispatch logic for facpref

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands::{names, prefs, solve, submit};
use facpref_core::error::{FacprefError, Result};
use tracing::debug;

mod command;

pub use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    debug!(elapsed = ?start.elapsed(), root = %ctx.root().display(), "resolve_root");

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Prefs { name } => {
                let name = name
                    .as_deref()
                    .filter(|n| !n.trim().is_empty())
                    .ok_or(FacprefError::MissingFacultyName)?;
                prefs::execute(ctx, name)
            }
            Commands::Solve => solve::execute(ctx),
            Commands::Submit(args) => submit::execute(ctx, &args.to_submission()),
            Commands::Names => names::execute(ctx),
        }
    }
}
