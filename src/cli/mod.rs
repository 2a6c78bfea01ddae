//! CLI argument parsing for facpref
//!
//! Global flags: --root, --data-dir, --ledger, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod args;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::SubmitArgs;
pub use facpref_core::format::OutputFormat;

/// Facpref - faculty course-preference reports and assignment weights
#[derive(Parser, Debug)]
#[command(name = "facpref")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory holding facpref.toml and the data directory
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Directory containing preference CSV files (overrides facpref.toml)
    #[arg(long, global = true, env = "FACPREF_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Ledger output path (overrides facpref.toml)
    #[arg(long, global = true)]
    pub ledger: Option<PathBuf>,

    /// Output format: human, json, or records
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directives (e.g. info, facpref_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a faculty member's preferences, normalized and ordered (ALL for everyone)
    Prefs {
        /// Faculty display name (e.g. "John Doe") or ALL
        name: Option<String>,
    },

    /// Rebuild the assignment weight ledger from every preference file
    Solve,

    /// Record one preference answer
    Submit(SubmitArgs),

    /// List faculty names found in the data directory
    Names,
}
