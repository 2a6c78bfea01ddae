//! Recording a single submitted preference
//!
//! Each faculty member has one file per term, `pref_<sanitized id>_<termCode>.csv`.
//! Resubmitting the same class for the same term replaces the earlier answer.
//! An existing file keeps its own header; columns a submission does not
//! supply (such as `tenure`) are carried over from the file's last row.

use std::ffi::OsString;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use csv::StringRecord;
use regex::Regex;

use crate::error::{FacprefError, Result};
use crate::{bail_invalid, bail_usage};

/// Highest accepted comfort rating
pub const MAX_RATING: i64 = 4;

/// Header of a newly created preference file
pub const SUBMISSION_HEADER: [&str; 8] = [
    "timestamp",
    "facultyId",
    "termCode",
    "termLabel",
    "classId",
    "classLabel",
    "rating",
    "desireRating",
];

static UNSAFE_CHARS: OnceLock<Regex> = OnceLock::new();
static SEPARATORS: OnceLock<Regex> = OnceLock::new();

fn unsafe_chars() -> &'static Regex {
    UNSAFE_CHARS.get_or_init(|| Regex::new(r"[^a-z0-9@._-]").expect("Invalid unsafe character regex"))
}

fn separators() -> &'static Regex {
    SEPARATORS.get_or_init(|| Regex::new(r"[@.]").expect("Invalid separator regex"))
}

/// A preference as entered by a faculty member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub faculty_id: String,
    pub term_code: String,
    pub term_label: String,
    pub class_id: String,
    pub class_label: String,
    pub rating: i64,
    pub desire_rating: i64,
}

impl Submission {
    /// Reject submissions that would produce an unusable preference file
    pub fn validate(&self) -> Result<()> {
        if [&self.faculty_id, &self.term_code, &self.class_id]
            .iter()
            .any(|v| v.trim().is_empty())
        {
            bail_usage!("Missing required fields (facultyId, termCode, classId)");
        }
        if self.term_code.contains(['/', '\\']) {
            bail_invalid!("term code", &self.term_code);
        }
        if !(0..=MAX_RATING).contains(&self.rating) {
            bail_invalid!(
                "rating",
                format!("{} (must be an integer between 0 and {MAX_RATING})", self.rating)
            );
        }
        Ok(())
    }

    /// File name this submission is stored under
    pub fn file_name(&self) -> String {
        format!(
            "pref_{}_{}.csv",
            sanitize_faculty_id(&self.faculty_id),
            self.term_code.trim()
        )
    }

    /// Value this submission supplies for a file column, if any
    fn field(&self, column: &str, now: DateTime<Utc>) -> Option<String> {
        let value = match column {
            "timestamp" => now.format("%Y-%m-%d %H:%M:%S").to_string(),
            "facultyId" => self.faculty_id.clone(),
            "termCode" => self.term_code.clone(),
            "termLabel" => self.term_label.clone(),
            "classId" => self.class_id.clone(),
            "classLabel" => self.class_label.clone(),
            "rating" => self.rating.to_string(),
            "desireRating" => self.desire_rating.to_string(),
            _ => return None,
        };
        Some(value)
    }

    fn to_record(
        &self,
        headers: &StringRecord,
        carried: Option<&StringRecord>,
        now: DateTime<Utc>,
    ) -> StringRecord {
        headers
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                self.field(column, now)
                    .or_else(|| carried.and_then(|r| r.get(idx)).map(str::to_string))
                    .unwrap_or_default()
            })
            .collect()
    }
}

/// Lower-case the id, replace anything outside `[a-z0-9@._-]`, then turn `@` and `.` into `_`
pub fn sanitize_faculty_id(faculty_id: &str) -> String {
    let lowered = faculty_id.trim().to_lowercase();
    let safe = unsafe_chars().replace_all(&lowered, "_");
    separators().replace_all(&safe, "_").into_owned()
}

/// Store a submission in `data_dir`, stamped with the current time
pub fn submit(data_dir: &Path, submission: &Submission) -> Result<PathBuf> {
    submit_at(data_dir, submission, Utc::now())
}

/// Store a submission with an explicit timestamp
#[tracing::instrument(skip(data_dir, submission), fields(faculty_id = %submission.faculty_id))]
pub fn submit_at(data_dir: &Path, submission: &Submission, now: DateTime<Utc>) -> Result<PathBuf> {
    submission.validate()?;
    fs::create_dir_all(data_dir)?;

    let path = data_dir.join(submission.file_name());
    let (headers, mut records) = if path.exists() {
        read_stored(&path)?
    } else {
        (StringRecord::from(SUBMISSION_HEADER.to_vec()), Vec::new())
    };

    let term_idx = column_index(&path, &headers, "termCode")?;
    let class_idx = column_index(&path, &headers, "classId")?;
    let carried = records.last().cloned();

    let before = records.len();
    records.retain(|r| {
        !(r.get(term_idx) == Some(submission.term_code.as_str())
            && r.get(class_idx) == Some(submission.class_id.as_str()))
    });
    if records.len() < before {
        tracing::debug!(class_id = %submission.class_id, "replacing earlier answer");
    }
    records.push(submission.to_record(&headers, carried.as_ref(), now));

    write_stored(&path, &headers, &records)?;
    Ok(path)
}

fn column_index(path: &Path, headers: &StringRecord, column: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| FacprefError::MissingColumn {
            path: path.to_path_buf(),
            column: column.to_string(),
        })
}

fn read_stored(path: &Path) -> Result<(StringRecord, Vec<StringRecord>)> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| FacprefError::io_operation("read", path.display(), e))?;
    let headers = reader.headers()?.clone();
    let records = reader.records().collect::<std::result::Result<Vec<_>, _>>()?;
    Ok((headers, records))
}

fn write_stored(path: &Path, headers: &StringRecord, records: &[StringRecord]) -> Result<()> {
    let mut tmp: OsString = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    let mut writer = csv::Writer::from_writer(File::create(&tmp)?);
    writer.write_record(headers)?;
    for record in records {
        writer.write_record(record)?;
    }
    writer.flush()?;
    drop(writer);

    fs::rename(&tmp, path).map_err(|e| FacprefError::io_operation("replace", path.display(), e))
}
