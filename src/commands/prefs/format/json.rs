//! JSON output for prefs

use facpref_core::error::Result;
use facpref_core::preference::EnrichedPreferenceRecord;

pub fn output_json(records: &[EnrichedPreferenceRecord]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(records)?);
    Ok(())
}
