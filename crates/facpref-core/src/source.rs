//! Preference CSV discovery and reading
//!
//! Survey exports live flat in the data directory as
//! `pref_<faculty id with @ and . as _>_<term code>.csv`.

use std::path::{Path, PathBuf};
use std::time::Instant;

use glob::Pattern;
use serde::Deserialize;

use crate::error::{FacprefError, Result};
use crate::preference::RawPreferenceRow;
use crate::trace_time;

/// Columns every preference file must carry
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "facultyId",
    "termLabel",
    "termCode",
    "classId",
    "classLabel",
    "rating",
    "desireRating",
];

/// Optional column holding years of service
pub const TENURE_COLUMN: &str = "tenure";

/// Name passed to `prefs` to select every file in the data directory
pub const ALL_FACULTY: &str = "ALL";

/// Which preference files to read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Every `*.csv` in the data directory
    All,
    /// Files of one faculty member, by display name
    Faculty(String),
    /// Every `pref_*` file, the input of a ledger run
    Ledger,
}

impl Selection {
    /// `ALL` selects everything, any other name one faculty member
    pub fn for_name(name: &str) -> Self {
        if name == ALL_FACULTY {
            Selection::All
        } else {
            Selection::Faculty(name.to_string())
        }
    }

    /// Glob pattern for this selection under `data_dir`
    pub fn pattern(&self, data_dir: &Path, domain_fragment: &str) -> String {
        let dir = Pattern::escape(&data_dir.to_string_lossy());
        let domain = Pattern::escape(domain_fragment);
        match self {
            Selection::All => format!("{dir}/*.csv"),
            Selection::Faculty(name) => {
                let fragment = Pattern::escape(&name.to_lowercase().replace(' ', "_"));
                format!("{dir}/pref_{fragment}_{domain}_*.csv")
            }
            Selection::Ledger => format!("{dir}/pref_*_{domain}_*.csv"),
        }
    }
}

/// Files matching a glob pattern, sorted by path. An empty result is not an error here.
pub fn discover(pattern: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in glob::glob(pattern)? {
        let path = entry.map_err(|e| {
            FacprefError::io_operation("read", e.path().display(), e.error())
        })?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    tracing::debug!(pattern, files = files.len(), "discovered preference files");
    Ok(files)
}

/// Like [`discover`], but zero matches is `NoSourceFilesFound`
pub fn discover_required(pattern: &str) -> Result<Vec<PathBuf>> {
    let files = discover(pattern)?;
    if files.is_empty() {
        return Err(FacprefError::NoSourceFilesFound {
            pattern: pattern.to_string(),
        });
    }
    Ok(files)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsvRow {
    #[serde(default)]
    timestamp: String,
    faculty_id: String,
    term_label: String,
    term_code: String,
    class_id: String,
    class_label: String,
    rating: String,
    desire_rating: String,
    #[serde(default)]
    tenure: Option<String>,
}

/// Read one preference file, coercing ratings (and tenure, when present) to integers
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn read_rows(path: &Path) -> Result<Vec<RawPreferenceRow>> {
    let start = Instant::now();
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| FacprefError::io_operation("read", path.display(), e))?;
    let headers = reader.headers()?.clone();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(FacprefError::MissingColumn {
                path: path.to_path_buf(),
                column: column.to_string(),
            });
        }
    }
    if !headers.iter().any(|h| h == TENURE_COLUMN) {
        tracing::debug!("no tenure column, default tenure applies");
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());
        let raw: CsvRow = record.deserialize(Some(&headers))?;

        let rating = parse_int(path, line, "rating", &raw.rating)?;
        let desire_rating = parse_int(path, line, "desireRating", &raw.desire_rating)?;
        let tenure = match raw.tenure.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => Some(parse_int(path, line, TENURE_COLUMN, value)?),
        };

        rows.push(RawPreferenceRow {
            timestamp: raw.timestamp,
            faculty_id: raw.faculty_id,
            term_label: raw.term_label,
            term_code: raw.term_code,
            class_id: raw.class_id,
            class_label: raw.class_label,
            rating,
            desire_rating,
            tenure,
        });
    }

    trace_time!(start, "read_rows", rows = rows.len());
    Ok(rows)
}

/// Read and concatenate several files, in order
pub fn read_all(paths: &[PathBuf]) -> Result<Vec<RawPreferenceRow>> {
    let mut rows = Vec::new();
    for path in paths {
        rows.extend(read_rows(path)?);
    }
    Ok(rows)
}

fn parse_int(path: &Path, line: u64, field: &str, value: &str) -> Result<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| FacprefError::NonIntegerRating {
            path: path.to_path_buf(),
            line,
            field: field.to_string(),
            value: value.to_string(),
        })
}
