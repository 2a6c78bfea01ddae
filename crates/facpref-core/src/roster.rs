//! Faculty roster derived from preference file names

use std::collections::BTreeSet;
use std::path::Path;

use crate::error::Result;
use crate::source::{self, Selection};

/// Display name encoded in a file stem such as `pref_mary_ann_smith_dsu_edu_202510`.
///
/// The name is everything between the leading `pref` part and the domain label.
/// Without a usable domain label, every part except the first and last is used.
pub fn name_from_stem(stem: &str, domain_label: &str) -> String {
    let parts: Vec<&str> = stem.split('_').collect();

    let name_parts = match parts.iter().position(|p| *p == domain_label) {
        Some(idx) if idx > 1 => &parts[1..idx],
        _ if parts.len() > 2 => &parts[1..parts.len() - 1],
        _ => &parts[..0],
    };

    name_parts
        .iter()
        .map(|part| capitalize(part))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Distinct faculty names for every `*.csv` in `data_dir`, sorted
pub fn faculty_names(data_dir: &Path, domain_fragment: &str, domain_label: &str) -> Result<Vec<String>> {
    let files = source::discover(&Selection::All.pattern(data_dir, domain_fragment))?;

    let names: BTreeSet<String> = files
        .iter()
        .filter_map(|path| path.file_stem())
        .map(|stem| name_from_stem(&stem.to_string_lossy(), domain_label))
        .filter(|name| !name.is_empty())
        .collect();

    Ok(names.into_iter().collect())
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
