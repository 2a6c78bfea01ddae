use crate::support::{facpref, ledger_path, setup_root};
use predicates::prelude::*;
use std::fs;

fn submit_args<'a>(class_id: &'a str, rating: &'a str) -> Vec<&'a str> {
    vec![
        "submit",
        "--faculty-id",
        "john.doe@dsu.edu",
        "--term-code",
        "202510",
        "--term-label",
        "Fall 2025",
        "--class-id",
        class_id,
        "--class-label",
        "Intro",
        "--rating",
        rating,
        "--desire-rating",
        "4",
    ]
}

#[test]
fn test_submit_writes_preference_file() {
    let dir = setup_root();

    facpref()
        .current_dir(dir.path())
        .args(submit_args("CS101", "4"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Preference saved"));

    let path = dir.path().join("data").join("pref_john_doe_dsu_edu_202510.csv");
    let content = fs::read_to_string(path).unwrap();
    assert!(content.starts_with(
        "timestamp,facultyId,termCode,termLabel,classId,classLabel,rating,desireRating\n"
    ));
    assert!(content.contains("john.doe@dsu.edu,202510,Fall 2025,CS101,Intro,4,4"));
}

#[test]
fn test_submit_rejects_out_of_range_rating() {
    let dir = setup_root();

    facpref()
        .current_dir(dir.path())
        .args(submit_args("CS101", "7"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid rating"));
}

#[test]
fn test_submit_then_solve() {
    let dir = setup_root();

    facpref()
        .current_dir(dir.path())
        .args(submit_args("CS101", "4"))
        .assert()
        .success();
    facpref()
        .current_dir(dir.path())
        .args(submit_args("CS101", "1"))
        .assert()
        .success();
    facpref().current_dir(dir.path()).arg("solve").assert().success();

    // Resubmission replaced the first answer: desire 4, comfort 1 -> no rule matches
    let ledger = fs::read_to_string(ledger_path(dir.path())).unwrap();
    assert_eq!(
        ledger,
        "facultyId,termLabel,termCode,classId,classLabel,weight\n\
         john.doe@dsu.edu,Fall 2025,202510,CS101,Intro,0\n"
    );
}
