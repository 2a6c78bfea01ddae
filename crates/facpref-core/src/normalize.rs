//! Preference normalization
//!
//! Derives faculty names and term fields from raw rows and orders the result by
//! `(facultyId asc, termYear desc, termOrder desc, desireRating desc)`.
//! Seasons without a defined order sort after Spring/Summer/Fall of the same year.
//! The sort is stable, so ties keep their input order.

use std::cmp::Ordering;

use crate::error::Result;
use crate::preference::{faculty_name, EnrichedPreferenceRecord, RawPreferenceRow, Term};

/// Enrich and order a batch of rows. A single malformed term label fails the whole batch.
pub fn normalize(rows: &[RawPreferenceRow]) -> Result<Vec<EnrichedPreferenceRecord>> {
    let mut records = rows.iter().map(enrich).collect::<Result<Vec<_>>>()?;
    records.sort_by(compare);
    tracing::debug!(records = records.len(), "normalized preferences");
    Ok(records)
}

/// Derive the enriched fields for a single row
pub fn enrich(row: &RawPreferenceRow) -> Result<EnrichedPreferenceRecord> {
    let term = Term::parse(&row.term_label)?;
    let term_order = term.order();

    Ok(EnrichedPreferenceRecord {
        timestamp: row.timestamp.clone(),
        faculty_name: faculty_name(&row.faculty_id),
        faculty_id: row.faculty_id.clone(),
        term_code: row.term_code.clone(),
        term_label: row.term_label.clone(),
        class_id: row.class_id.clone(),
        class_label: row.class_label.clone(),
        rating: row.rating,
        desire_rating: row.desire_rating,
        term_name: term.name,
        term_year: term.year,
        term_order,
    })
}

fn compare(a: &EnrichedPreferenceRecord, b: &EnrichedPreferenceRecord) -> Ordering {
    a.faculty_id
        .cmp(&b.faculty_id)
        .then_with(|| b.term_year.cmp(&a.term_year))
        // None < Some, so descending puts unordered seasons last
        .then_with(|| b.term_order.cmp(&a.term_order))
        .then_with(|| b.desire_rating.cmp(&a.desire_rating))
}
