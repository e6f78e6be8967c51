//! Integration tests for the batch driver.
//!
//! Drives the command implementations directly against temporary files.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use scoreshape::cli::{cmd_check, cmd_diff, cmd_reshape};
use std::fs;
use std::path::PathBuf;

const VALID_INPUT: &str = r#"<scores><Teamwork><x NoShow="false" division="A" teamNumber="1" judge="J1" courtesy="4" integrity="5"/></Teamwork></scores>"#;

fn write_input(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn reshape_writes_derived_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "teamwork.xml", VALID_INPUT);

    cmd_reshape(&[input], None, false).unwrap();

    let output = dir.path().join("teamwork-reshaped.xml");
    let xml = fs::read_to_string(output).unwrap();
    assert!(xml.contains("<subjectiveCategory name=\"Teamwork\">"));
    assert!(xml.contains("judging_station=\"A\""));
    assert!(xml.contains("<subscore name=\"courtesy\" value=\"4\"/>"));
}

#[test]
fn reshape_honors_out_dir() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("reshaped");
    let input = write_input(&dir, "teamwork.xml", VALID_INPUT);

    cmd_reshape(&[input], Some(out.as_path()), false).unwrap();

    assert!(out.join("teamwork-reshaped.xml").is_file());
}

#[test]
fn one_bad_document_does_not_abort_siblings() {
    let dir = tempfile::tempdir().unwrap();
    let good_a = write_input(&dir, "a.xml", VALID_INPUT);
    let bad = write_input(&dir, "bad.xml", "<scores><Teamwork>");
    let good_b = write_input(&dir, "b.xml", VALID_INPUT);

    let result = cmd_reshape(&[good_a, bad, good_b], None, false);

    // The batch fails overall...
    assert!(result.is_err());
    // ...but both valid documents were still written.
    assert!(dir.path().join("a-reshaped.xml").is_file());
    assert!(dir.path().join("b-reshaped.xml").is_file());
    assert!(!dir.path().join("bad-reshaped.xml").exists());
}

#[test]
fn check_reports_malformed_input() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_input(&dir, "good.xml", VALID_INPUT);
    let bad = write_input(&dir, "bad.xml", "not xml at all <");

    assert!(cmd_check(&[good.clone()], false).is_ok());
    assert!(cmd_check(&[good, bad], false).is_err());
}

#[test]
fn check_accepts_reshaped_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "teamwork.xml", VALID_INPUT);
    cmd_reshape(&[input], None, false).unwrap();

    let reshaped = dir.path().join("teamwork-reshaped.xml");
    assert!(cmd_check(&[reshaped], false).is_ok());
}

#[test]
fn diff_of_identical_documents_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_input(&dir, "a.xml", VALID_INPUT);
    let b = write_input(&dir, "b.xml", VALID_INPUT);

    cmd_diff(&a, &b, false).unwrap();
}

#[test]
fn diff_rejects_structurally_different_documents() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_input(&dir, "a.xml", VALID_INPUT);
    let b = write_input(
        &dir,
        "b.xml",
        r#"<scores><Design><x teamNumber="1" judge="J1"/></Design></scores>"#,
    );

    assert!(cmd_diff(&a, &b, false).is_err());
}

#[test]
fn missing_input_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.xml");

    assert!(cmd_reshape(&[missing], None, false).is_err());
}
