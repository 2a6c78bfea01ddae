//! Weight ledger store
//!
//! The ledger is a single CSV sheet with the header
//! `facultyId,termLabel,termCode,classId,classLabel,weight` and at most one row
//! per `(facultyId, termLabel, termCode, classId, classLabel)` key.
//!
//! Keys are held in memory so membership checks never re-read the file.
//! Accepted rows reach disk according to the [`FlushPolicy`]: with
//! `EveryAppend` each accepted row is written before `append` returns, with
//! `OnFinish` rows wait for [`LedgerStore::flush`].
//!
//! There is no locking. Two processes writing the same ledger interleave
//! unpredictably; the store assumes a single writer.


use std::collections::HashSet;
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::FlushPolicy;
use crate::error::{FacprefError, Result};

/// Fixed ledger header row
pub const LEDGER_HEADER: [&str; 6] = [
    "facultyId",
    "termLabel",
    "termCode",
    "classId",
    "classLabel",
    "weight",
];

/// Identity of a ledger row
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LedgerKey {
    pub faculty_id: String,
    pub term_label: String,
    pub term_code: String,
    pub class_id: String,
    pub class_label: String,
}

/// A weighted faculty/course candidate edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedAssignmentEdge {
    pub faculty_id: String,
    pub term_label: String,
    pub term_code: String,
    pub class_id: String,
    pub class_label: String,
    pub weight: u8,
}

impl WeightedAssignmentEdge {
    pub fn key(&self) -> LedgerKey {
        LedgerKey {
            faculty_id: self.faculty_id.clone(),
            term_label: self.term_label.clone(),
            term_code: self.term_code.clone(),
            class_id: self.class_id.clone(),
            class_label: self.class_label.clone(),
        }
    }
}

/// In-memory view of a ledger file
#[derive(Debug)]
pub struct LedgerStore {
    path: PathBuf,
    policy: FlushPolicy,
    rows: Vec<WeightedAssignmentEdge>,
    keys: HashSet<LedgerKey>,
    /// Number of leading rows already on disk
    flushed: usize,
    /// Whether the file (with header) exists on disk
    materialized: bool,
}

impl LedgerStore {
    /// Load the ledger at `path`, or start an empty one if the file does not exist.
    ///
    /// Nothing is written until the first flush.
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn open_or_create(path: &Path, policy: FlushPolicy) -> Result<Self> {
        let mut store = LedgerStore {
            path: path.to_path_buf(),
            policy,
            rows: Vec::new(),
            keys: HashSet::new(),
            flushed: 0,
            materialized: false,
        };

        if !path.exists() {
            tracing::debug!("starting empty ledger");
            return Ok(store);
        }

        let bytes = fs::read(path)
            .map_err(|e| FacprefError::io_operation("read ledger", path.display(), e))?;
        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let headers = reader
            .headers()
            .map_err(|e| FacprefError::invalid_ledger(path, e))?;
        if headers.iter().ne(LEDGER_HEADER.iter().copied()) {
            return Err(FacprefError::invalid_ledger(
                path,
                format!("unexpected header {:?}", headers.iter().collect::<Vec<_>>()),
            ));
        }

        for edge in reader.deserialize::<WeightedAssignmentEdge>() {
            let edge = edge.map_err(|e| FacprefError::invalid_ledger(path, e))?;
            if !store.keys.insert(edge.key()) {
                tracing::warn!(faculty_id = %edge.faculty_id, class_id = %edge.class_id, "duplicate key in existing ledger");
            }
            store.rows.push(edge);
        }

        store.flushed = store.rows.len();
        // Appending after an unterminated last line would merge two records,
        // so such a file is rewritten whole on the first flush.
        store.materialized = bytes.ends_with(b"\n");
        if !store.materialized {
            tracing::debug!("ledger lacks trailing newline, will rewrite");
        }
        tracing::debug!(rows = store.rows.len(), "loaded ledger");
        Ok(store)
    }

    /// Whether a row with this key is already present, flushed or not
    pub fn contains(&self, key: &LedgerKey) -> bool {
        self.keys.contains(key)
    }

    /// Add a row unless its key is already present.
    ///
    /// Returns `false` and writes nothing for a duplicate key.
    pub fn append(&mut self, row: WeightedAssignmentEdge) -> Result<bool> {
        let key = row.key();
        if self.contains(&key) {
            return Ok(false);
        }

        self.keys.insert(key);
        self.rows.push(row);

        if self.policy == FlushPolicy::EveryAppend {
            self.flush()?;
        }
        Ok(true)
    }

    /// Write every pending row. Creates the file with its header on first use.
    pub fn flush(&mut self) -> Result<()> {
        if !self.materialized {
            self.write_all()?;
        } else if self.flushed < self.rows.len() {
            self.append_pending()?;
        }
        self.flushed = self.rows.len();
        self.materialized = true;
        Ok(())
    }

    /// Rows not yet written to disk
    pub fn pending(&self) -> usize {
        self.rows.len() - self.flushed
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[WeightedAssignmentEdge] {
        &self.rows
    }

    /// Delete a ledger file if present. Returns whether a file was removed.
    pub fn remove(path: &Path) -> Result<bool> {
        match fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(FacprefError::io_operation("remove ledger", path.display(), e)),
        }
    }

    /// Write header and all rows to a temporary file, then rename over the ledger
    fn write_all(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut tmp: OsString = self.path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        let file = File::create(&tmp)?;
        write_rows(file, Some(&LEDGER_HEADER), &self.rows)?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| FacprefError::io_operation("replace", self.path.display(), e))?;
        Ok(())
    }

    fn append_pending(&self) -> Result<()> {
        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| FacprefError::io_operation("open", self.path.display(), e))?;
        write_rows(file, None, &self.rows[self.flushed..])
    }
}

fn write_rows(
    file: File,
    header: Option<&[&str]>,
    rows: &[WeightedAssignmentEdge],
) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    if let Some(header) = header {
        writer.write_record(header)?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    let file = writer
        .into_inner()
        .map_err(|e| FacprefError::Other(format!("failed to write ledger: {}", e)))?;
    file.sync_data()?;
    Ok(())
}
