//! Preference records
//!
//! A [`RawPreferenceRow`] is one survey answer as read from a CSV export.
//! An [`EnrichedPreferenceRecord`] adds the derived faculty name and term
//! fields used for ordering. Enriched records are never persisted.

pub mod term;

use serde::Serialize;

pub use term::{Season, Term};

/// Columns of a normalized record, in output order
pub const PROJECTED_COLUMNS: [&str; 9] = [
    "timestamp",
    "facultyName",
    "facultyId",
    "termCode",
    "termLabel",
    "classId",
    "classLabel",
    "rating",
    "desireRating",
];

/// One faculty member's rating of one class in one term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPreferenceRow {
    pub timestamp: String,
    pub faculty_id: String,
    pub term_label: String,
    pub term_code: String,
    pub class_id: String,
    pub class_label: String,
    /// Comfort rating
    pub rating: i64,
    pub desire_rating: i64,
    /// Years of service; `None` when the export has no value
    pub tenure: Option<i64>,
}

/// A raw row plus derived fields.
///
/// Serializes to exactly the projected columns; the term breakdown stays internal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedPreferenceRecord {
    pub timestamp: String,
    pub faculty_name: String,
    pub faculty_id: String,
    pub term_code: String,
    pub term_label: String,
    pub class_id: String,
    pub class_label: String,
    pub rating: i64,
    pub desire_rating: i64,
    #[serde(skip)]
    pub term_name: String,
    #[serde(skip)]
    pub term_year: i32,
    #[serde(skip)]
    pub term_order: Option<u8>,
}

impl EnrichedPreferenceRecord {
    /// Projected column values as display strings, in [`PROJECTED_COLUMNS`] order
    pub fn projected_values(&self) -> [String; 9] {
        [
            self.timestamp.clone(),
            self.faculty_name.clone(),
            self.faculty_id.clone(),
            self.term_code.clone(),
            self.term_label.clone(),
            self.class_id.clone(),
            self.class_label.clone(),
            self.rating.to_string(),
            self.desire_rating.to_string(),
        ]
    }
}

/// Display name from a faculty id: `john.doe@dsu.edu` -> `John Doe`
pub fn faculty_name(faculty_id: &str) -> String {
    let local = faculty_id.split('@').next().unwrap_or(faculty_id);
    title_case(&local.replace('.', " "))
}

/// Upper-case the first letter of each whitespace-delimited token, lower-case the rest
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            at_word_start = false;
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}
