//! Human-readable table for prefs

use facpref_core::format::render_table;
use facpref_core::preference::{EnrichedPreferenceRecord, PROJECTED_COLUMNS};

pub fn output_human(records: &[EnrichedPreferenceRecord]) {
    let rows: Vec<_> = records.iter().map(|r| r.projected_values()).collect();
    print!("{}", render_table(&PROJECTED_COLUMNS, &rows));
}
