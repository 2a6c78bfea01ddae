use crate::support::{facpref, setup_root, write_pref};
use predicates::prelude::*;

#[test]
fn test_names_empty() {
    let dir = setup_root();

    facpref()
        .current_dir(dir.path())
        .arg("names")
        .assert()
        .success()
        .stdout(predicate::str::contains("No faculty found"));
}

#[test]
fn test_names_lists_distinct_sorted() {
    let dir = setup_root();
    for file in [
        "pref_zed_young_dsu_edu_202510.csv",
        "pref_amy_lee_dsu_edu_202510.csv",
        "pref_amy_lee_dsu_edu_202601.csv",
    ] {
        write_pref(dir.path(), file, &[]);
    }

    facpref()
        .current_dir(dir.path())
        .arg("names")
        .assert()
        .success()
        .stdout("Amy Lee\nZed Young\n");

    let output = facpref()
        .current_dir(dir.path())
        .args(["--format", "json", "names"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json, serde_json::json!(["Amy Lee", "Zed Young"]));
}
