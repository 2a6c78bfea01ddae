//! Records output for prefs
//!
//! `H` header line, then one `P` line per record in normalized order.

use facpref_core::format::escape_quotes;
use facpref_core::preference::EnrichedPreferenceRecord;

pub fn output_records(name: &str, records: &[EnrichedPreferenceRecord]) {
    println!(
        "H facpref=1 records=1 mode=prefs name=\"{}\" count={}",
        escape_quotes(name),
        records.len()
    );

    for r in records {
        println!(
            "P {} {} \"{}\" {} \"{}\" rating={} desire={} name=\"{}\" at=\"{}\"",
            r.faculty_id,
            r.term_code,
            escape_quotes(&r.term_label),
            r.class_id,
            escape_quotes(&r.class_label),
            r.rating,
            r.desire_rating,
            escape_quotes(&r.faculty_name),
            escape_quotes(&r.timestamp),
        );
    }
}
