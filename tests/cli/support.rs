use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const PREF_HEADER: &str =
    "timestamp,facultyId,termCode,termLabel,classId,classLabel,rating,desireRating";

/// Get a Command for facpref, isolated from the caller's environment
pub fn facpref() -> Command {
    let mut cmd = cargo_bin_cmd!("facpref");
    cmd.env_remove("FACPREF_DATA_DIR")
        .env_remove("FACPREF_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Create a temp root with an empty `data/` directory
pub fn setup_root() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("data")).unwrap();
    dir
}

/// Write a preference file with the standard header and the given data lines
pub fn write_pref(root: &Path, file_name: &str, lines: &[&str]) {
    let mut content = String::from(PREF_HEADER);
    content.push('\n');
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    fs::write(root.join("data").join(file_name), content).unwrap();
}

/// Default ledger location under a root
pub fn ledger_path(root: &Path) -> std::path::PathBuf {
    root.join("data")
        .join("ledger")
        .join("professors_worksheet.csv")
}

/// Byte offset of `needle` in `haystack`, panicking with context when absent
pub fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not found in:\n{haystack}"))
}
