use crate::support::{facpref, ledger_path, setup_root, write_pref};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_solve_prints_ledger_path() {
    let dir = setup_root();
    write_pref(
        dir.path(),
        "pref_a_b_dsu_edu_F25.csv",
        &["t,a.b@dsu.edu,F25,Fall 2025,CS101,Intro,4,4"],
    );

    facpref()
        .current_dir(dir.path())
        .arg("solve")
        .assert()
        .success()
        .stdout(predicate::str::contains("professors_worksheet.csv"));

    assert_eq!(
        fs::read_to_string(ledger_path(dir.path())).unwrap(),
        "facultyId,termLabel,termCode,classId,classLabel,weight\n\
         a.b@dsu.edu,Fall 2025,F25,CS101,Intro,4\n"
    );
}

#[test]
fn test_solve_twice_same_row_count() {
    let dir = setup_root();
    write_pref(
        dir.path(),
        "pref_a_b_dsu_edu_F25.csv",
        &[
            "t,a.b@dsu.edu,F25,Fall 2025,CS101,Intro,4,4",
            "t,a.b@dsu.edu,F25,Fall 2025,CS102,Data,1,1",
        ],
    );

    for _ in 0..2 {
        facpref().current_dir(dir.path()).arg("solve").assert().success();
        let content = fs::read_to_string(ledger_path(dir.path())).unwrap();
        assert_eq!(content.lines().count(), 3);
    }
}

#[test]
fn test_solve_without_files_fails_and_leaves_no_ledger() {
    let dir = setup_root();
    let ledger = ledger_path(dir.path());
    fs::create_dir_all(ledger.parent().unwrap()).unwrap();
    fs::write(&ledger, "old").unwrap();

    facpref()
        .current_dir(dir.path())
        .arg("solve")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no preference files found"));

    assert!(!ledger.exists());
}

#[test]
fn test_solve_json_report() {
    let dir = setup_root();
    write_pref(
        dir.path(),
        "pref_a_b_dsu_edu_F25.csv",
        &[
            "t,a.b@dsu.edu,F25,Fall 2025,CS101,Intro,4,4",
            "t,a.b@dsu.edu,F25,Fall 2025,CS101,Intro,1,1",
        ],
    );

    let output = facpref()
        .current_dir(dir.path())
        .args(["--format", "json", "solve"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["files"], 1);
    assert_eq!(json["rows_read"], 2);
    assert_eq!(json["rows_written"], 1);
    assert_eq!(json["duplicates"], 1);
}

#[test]
fn test_solve_honours_config_and_overrides() {
    let dir = setup_root();
    fs::write(
        dir.path().join("facpref.toml"),
        "ledger_path = \"out/weights.csv\"\n\n[policy]\ndefault_tenure = 20\n",
    )
    .unwrap();
    write_pref(
        dir.path(),
        "pref_a_b_dsu_edu_F25.csv",
        &["t,a.b@dsu.edu,F25,Fall 2025,CS101,Intro,1,1"],
    );

    facpref().current_dir(dir.path()).arg("solve").assert().success();
    let content = fs::read_to_string(dir.path().join("out").join("weights.csv")).unwrap();
    assert!(content.ends_with("CS101,Intro,1\n"));

    facpref()
        .current_dir(dir.path())
        .args(["--ledger", "other.csv", "solve"])
        .assert()
        .success();
    assert!(dir.path().join("other.csv").exists());
}

#[test]
fn test_solve_non_integer_rating_fails() {
    let dir = setup_root();
    write_pref(
        dir.path(),
        "pref_a_b_dsu_edu_F25.csv",
        &["t,a.b@dsu.edu,F25,Fall 2025,CS101,Intro,lots,4"],
    );

    facpref()
        .current_dir(dir.path())
        .arg("solve")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("rating is not an integer"));
}

#[test]
fn test_solve_json_error_envelope() {
    let dir = setup_root();

    let output = facpref()
        .current_dir(dir.path())
        .args(["--format", "json", "solve"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "no_source_files_found");
}
