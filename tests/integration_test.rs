//! Integration tests for the top-records CLI.
//!
//! These tests run the actual binary and verify output against expected files.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

/// Get path to test data file
fn test_data_path(filename: &str) -> String {
    format!("tests/data/{}", filename)
}

fn stdout_of(assert: assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

/// Heap order is unspecified, so compare sorted ids
fn normalize(output: &str) -> Vec<String> {
    let mut lines: Vec<String> = output
        .lines()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect();
    lines.sort();
    lines
}

#[test]
fn test_sample_a_from_stdin() {
    let input = fs::read_to_string(test_data_path("a.input")).unwrap();
    let expected = fs::read_to_string(test_data_path("a.expected")).unwrap();

    let mut cmd = Command::cargo_bin("top-records").unwrap();
    let output = stdout_of(cmd.arg("3").write_stdin(input).assert().success());

    assert_eq!(normalize(&output), normalize(&expected));
    assert_eq!(output.lines().count(), 3);
}

#[test]
fn test_sample_b_from_file_flag() {
    let expected = fs::read_to_string(test_data_path("b.expected")).unwrap();

    let mut cmd = Command::cargo_bin("top-records").unwrap();
    let output = stdout_of(
        cmd.args(["2", "-f", test_data_path("b.input").as_str()])
            .assert()
            .success(),
    );

    assert_eq!(normalize(&output), normalize(&expected));
}

#[test]
fn test_long_file_flag() {
    let mut cmd = Command::cargo_bin("top-records").unwrap();
    cmd.args(["1", "--file", test_data_path("a.input").as_str()])
        .assert()
        .success()
        .stdout("000000003\n");
}

#[test]
fn test_output_ends_with_single_newline() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "001 10\n002 5\n003 8\n").unwrap();

    let mut cmd = Command::cargo_bin("top-records").unwrap();
    let output = stdout_of(cmd.arg("3").arg("-f").arg(file.path()).assert().success());

    assert!(output.ends_with('\n'));
    assert!(!output.ends_with("\n\n"));
    assert_eq!(normalize(&output), vec!["001", "002", "003"]);
}

#[test]
fn test_fewer_records_than_requested() {
    let mut cmd = Command::cargo_bin("top-records").unwrap();
    let output = stdout_of(cmd.arg("10").write_stdin("a 1\nb 2\n").assert().success());
    assert_eq!(normalize(&output), vec!["a", "b"]);
}

#[test]
fn test_huge_count_over_short_input() {
    let max = i64::MAX.to_string();
    let mut cmd = Command::cargo_bin("top-records").unwrap();
    let output = stdout_of(
        cmd.args([max.as_str(), "-f", test_data_path("b.input").as_str()])
            .assert()
            .success(),
    );
    assert_eq!(
        normalize(&output),
        vec!["alpha", "beta", "delta", "epsilon", "gamma"]
    );
}

#[test]
fn test_empty_input_succeeds_with_empty_output() {
    let mut cmd = Command::cargo_bin("top-records").unwrap();
    cmd.arg("4").write_stdin("").assert().success().stdout("");
}

#[test]
fn test_missing_file_error() {
    let mut cmd = Command::cargo_bin("top-records").unwrap();
    cmd.args(["3", "-f", "nonexistent.txt"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("nonexistent.txt"));
}

#[test]
fn test_missing_argument_error() {
    let mut cmd = Command::cargo_bin("top-records").unwrap();
    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_non_integer_count_error() {
    let mut cmd = Command::cargo_bin("top-records").unwrap();
    cmd.arg("three")
        .write_stdin("001 1\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_zero_count_error() {
    let mut cmd = Command::cargo_bin("top-records").unwrap();
    cmd.arg("0")
        .write_stdin("001 1\n")
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("positive integer"));
}

#[test]
fn test_negative_count_error() {
    let mut cmd = Command::cargo_bin("top-records").unwrap();
    cmd.arg("-1")
        .write_stdin("001 1\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("positive integer"));
}

#[test]
fn test_malformed_line_aborts_without_partial_output() {
    let mut cmd = Command::cargo_bin("top-records").unwrap();
    cmd.args(["2", "-f", test_data_path("malformed.input").as_str()])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("line 3"));
}

#[test]
fn test_generated_input_matches_full_sort() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.txt");

    Command::cargo_bin("gen-records")
        .unwrap()
        .args(["500", "--seed", "7", "-o"])
        .arg(&path)
        .assert()
        .success();

    let input = fs::read_to_string(&path).unwrap();
    assert_eq!(input.lines().count(), 500);

    let mut cmd = Command::cargo_bin("top-records").unwrap();
    let output = stdout_of(cmd.arg("25").arg("-f").arg(&path).assert().success());

    let value_of: std::collections::HashMap<&str, i64> = input
        .lines()
        .map(|l| {
            let (id, value) = l.split_once(' ').unwrap();
            (id, value.parse().unwrap())
        })
        .collect();
    let mut selected: Vec<i64> = output.lines().map(|id| value_of[id]).collect();
    selected.sort_unstable_by(|a, b| b.cmp(a));

    let mut all: Vec<i64> = value_of.values().copied().collect();
    all.sort_unstable_by(|a, b| b.cmp(a));
    all.truncate(25);

    assert_eq!(selected, all);
}

#[test]
fn test_generator_defaults_to_count_named_file() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("gen-records")
        .unwrap()
        .current_dir(dir.path())
        .arg("12")
        .assert()
        .success();

    let input = fs::read_to_string(dir.path().join("12.txt")).unwrap();
    assert_eq!(input.lines().count(), 12);
    assert!(input.starts_with("000000001 "));
}
