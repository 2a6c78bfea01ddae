//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::Cli;
use facpref_core::config::FacprefConfig;
use facpref_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    /// Resolve the root directory: `--root`, else the current directory, else "."
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        let root = cli.root.clone().unwrap_or_else(|| {
            std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
        });
        Self { cli, root, start }
    }

    /// `facpref.toml` under the root, with CLI overrides applied
    pub fn config(&self) -> Result<FacprefConfig> {
        let mut config = FacprefConfig::load_or_default(&self.root)?;
        if let Some(data_dir) = &self.cli.data_dir {
            config.data_dir = data_dir.clone();
        }
        if let Some(ledger) = &self.cli.ledger {
            config.ledger_path = ledger.clone();
        }
        Ok(config)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("facpref {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Faculty course-preference reports and assignment weights.");
        println!();
        println!("Run `facpref --help` for usage information.");
        Ok(())
    }
}
