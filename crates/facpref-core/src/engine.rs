//! Ledger build: every preference file -> weight -> ledger
//!
//! A run always starts from scratch. The previous ledger is deleted before
//! discovery, so a run that finds no files leaves no ledger behind, and
//! duplicate detection only ever sees rows from the current run.
//!
//! A run that fails part way leaves whatever rows were already flushed; such a
//! ledger is incomplete and must not be handed to the scheduler.

use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Serialize;

use crate::config::{FacprefConfig, FlushPolicy};
use crate::error::Result;
use crate::ledger::{LedgerStore, WeightedAssignmentEdge};
use crate::preference::RawPreferenceRow;
use crate::source::{self, Selection};
use crate::trace_time;
use crate::weight;

/// Inputs of a ledger run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Glob selecting the preference files
    pub pattern: String,
    /// Where the ledger is written
    pub ledger_path: PathBuf,
    /// Tenure for rows without one
    pub default_tenure: i64,
    pub flush: FlushPolicy,
}

impl EngineConfig {
    /// Build from the file configuration, resolving paths against `root`
    pub fn from_config(config: &FacprefConfig, root: &Path) -> Self {
        let data_dir = config.data_dir_in(root);
        Self {
            pattern: Selection::Ledger.pattern(&data_dir, &config.domain_fragment()),
            ledger_path: config.ledger_path_in(root),
            default_tenure: config.policy.default_tenure,
            flush: config.ledger.flush,
        }
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub ledger_path: PathBuf,
    pub files: usize,
    pub rows_read: usize,
    pub rows_written: usize,
    pub duplicates: usize,
}

/// Rebuild the ledger from all preference files
#[tracing::instrument(skip(config), fields(pattern = %config.pattern))]
pub fn run_all(config: &EngineConfig) -> Result<RunReport> {
    let start = Instant::now();

    if LedgerStore::remove(&config.ledger_path)? {
        tracing::info!(path = %config.ledger_path.display(), "removed previous ledger");
    }

    let files = source::discover_required(&config.pattern)?;
    let mut store = LedgerStore::open_or_create(&config.ledger_path, config.flush)?;

    let mut report = RunReport {
        ledger_path: config.ledger_path.clone(),
        files: files.len(),
        rows_read: 0,
        rows_written: 0,
        duplicates: 0,
    };

    for path in &files {
        let rows = source::read_rows(path)?;
        report.rows_read += rows.len();

        for row in &rows {
            let edge = weigh(row, config.default_tenure);
            if store.append(edge)? {
                report.rows_written += 1;
            } else {
                report.duplicates += 1;
            }
        }
    }

    // Materializes the header even when every file was empty
    store.flush()?;

    trace_time!(start, "run_all", rows = report.rows_written);
    tracing::info!(
        files = report.files,
        rows_written = report.rows_written,
        duplicates = report.duplicates,
        "ledger rebuilt"
    );
    Ok(report)
}

/// Resolve the weight edge for one row; desire drives `desire`, rating drives `comfort`
pub fn weigh(row: &RawPreferenceRow, default_tenure: i64) -> WeightedAssignmentEdge {
    let tenure = row.tenure.unwrap_or(default_tenure);
    let weight = weight::resolve_weight(tenure, row.desire_rating, row.rating);
    tracing::trace!(
        faculty_id = %row.faculty_id,
        class_id = %row.class_id,
        tenure,
        weight,
        "weighed preference"
    );

    WeightedAssignmentEdge {
        faculty_id: row.faculty_id.clone(),
        term_label: row.term_label.clone(),
        term_code: row.term_code.clone(),
        class_id: row.class_id.clone(),
        class_label: row.class_label.clone(),
        weight,
    }
}
