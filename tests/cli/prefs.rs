use crate::support::{facpref, position, setup_root, write_pref};
use predicates::prelude::*;

#[test]
fn test_prefs_without_name_exits_1() {
    let dir = setup_root();

    facpref()
        .current_dir(dir.path())
        .arg("prefs")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No name provided"));
}

#[test]
fn test_prefs_orders_fall_before_spring() {
    let dir = setup_root();
    write_pref(
        dir.path(),
        "pref_john_doe_dsu_edu_202510.csv",
        &[
            "2025-01-01 09:00:00,john.doe@dsu.edu,202510,Spring 2025,SPRING101,Spring Class,3,3",
            "2025-01-01 09:00:00,john.doe@dsu.edu,202590,Fall 2025,FALL101,Fall Class,3,3",
        ],
    );

    let output = facpref()
        .current_dir(dir.path())
        .args(["prefs", "John Doe"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("timestamp"));
    assert!(stdout.contains("John Doe"));
    assert!(position(&stdout, "FALL101") < position(&stdout, "SPRING101"));
}

#[test]
fn test_prefs_selects_only_named_faculty() {
    let dir = setup_root();
    write_pref(
        dir.path(),
        "pref_john_doe_dsu_edu_202510.csv",
        &["t,john.doe@dsu.edu,202510,Fall 2025,JD1,Mine,3,3"],
    );
    write_pref(
        dir.path(),
        "pref_amy_lee_dsu_edu_202510.csv",
        &["t,amy.lee@dsu.edu,202510,Fall 2025,AL1,Theirs,3,3"],
    );

    facpref()
        .current_dir(dir.path())
        .args(["prefs", "john doe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("JD1"))
        .stdout(predicate::str::contains("AL1").not());

    let output = facpref()
        .current_dir(dir.path())
        .args(["prefs", "ALL"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    // facultyId ascending
    assert!(position(&stdout, "AL1") < position(&stdout, "JD1"));
}

#[test]
fn test_prefs_json_projection() {
    let dir = setup_root();
    write_pref(
        dir.path(),
        "pref_a_b_dsu_edu_F25.csv",
        &["2025-03-01 10:00:00,a.b@dsu.edu,F25,Fall 2025,CS101,Intro,4,2"],
    );

    let output = facpref()
        .current_dir(dir.path())
        .args(["--format", "json", "prefs", "ALL"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 1);
    let record = records[0].as_object().unwrap();
    assert_eq!(record.len(), 9);
    assert_eq!(record["facultyName"], "A B");
    assert_eq!(record["desireRating"], 2);
    assert!(record.get("termOrder").is_none());
}

#[test]
fn test_prefs_records_format() {
    let dir = setup_root();
    write_pref(
        dir.path(),
        "pref_a_b_dsu_edu_F25.csv",
        &["t,a.b@dsu.edu,F25,Fall 2025,CS101,Intro,4,2"],
    );

    facpref()
        .current_dir(dir.path())
        .args(["--format", "records", "prefs", "ALL"])
        .assert()
        .success()
        .stdout(predicate::str::contains("H facpref=1 records=1 mode=prefs"))
        .stdout(predicate::str::contains(
            "P a.b@dsu.edu F25 \"Fall 2025\" CS101 \"Intro\" rating=4 desire=2",
        ));
}

#[test]
fn test_prefs_malformed_term_label_fails() {
    let dir = setup_root();
    write_pref(
        dir.path(),
        "pref_a_b_dsu_edu_F25.csv",
        &["t,a.b@dsu.edu,F25,Fall,CS101,Intro,4,2"],
    );

    facpref()
        .current_dir(dir.path())
        .args(["prefs", "ALL"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("malformed term label"));
}

#[test]
fn test_prefs_unknown_faculty_reports_no_files() {
    let dir = setup_root();

    facpref()
        .current_dir(dir.path())
        .args(["prefs", "Nobody Here"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no preference files found"));
}
