//! Integration tests for the json2csv CLI

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

fn run_json2csv(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_json2csv"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[test]
fn test_cli_help() {
    let dir = tempdir().unwrap();
    let (stdout, _, success) = run_json2csv(dir.path(), &["--help"]);

    assert!(success);
    assert!(stdout.contains("json2csv"));
    assert!(stdout.contains("[INPUT]"));
    assert!(stdout.contains("[OUTPUT]"));
}

#[test]
fn test_cli_version() {
    let dir = tempdir().unwrap();
    let (stdout, _, success) = run_json2csv(dir.path(), &["--version"]);

    assert!(success);
    assert!(stdout.contains("json2csv"));
}

#[test]
fn test_explicit_paths() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("people.json"),
        r#"[{"name":"Ada","age":36},{"age":41,"name":"Alan","extra":true}]"#,
    )
    .unwrap();

    let (stdout, _, success) = run_json2csv(dir.path(), &["people.json", "people.csv"]);

    assert!(success);
    assert!(stdout.contains("CSV file has been saved to people.csv"));
    let csv = fs::read_to_string(dir.path().join("people.csv")).unwrap();
    assert_eq!(csv, "name,age\n\"Ada\",36\n\"Alan\",41");
}

#[test]
fn test_default_paths() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("input.json"), r#"[{"a":1},{"b":2}]"#).unwrap();

    let (_, _, success) = run_json2csv(dir.path(), &[]);

    assert!(success);
    let csv = fs::read_to_string(dir.path().join("output.csv")).unwrap();
    assert_eq!(csv, "a\n1\n\"\"");
}

#[test]
fn test_empty_array_fails_without_output() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("input.json"), "[]").unwrap();

    let (stdout, stderr, success) = run_json2csv(dir.path(), &[]);

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Error processing JSON"));
    assert!(stderr.contains("non-empty sequence of records"));
    assert!(!dir.path().join("output.csv").exists());
}

#[test]
fn test_malformed_json_keeps_existing_output() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("input.json"), "[{\"a\": 1").unwrap();
    fs::write(dir.path().join("output.csv"), "keep me").unwrap();

    let (_, stderr, success) = run_json2csv(dir.path(), &[]);

    assert!(!success);
    assert!(stderr.contains("Error processing JSON"));
    assert!(stderr.contains("invalid JSON"));
    assert_eq!(
        fs::read_to_string(dir.path().join("output.csv")).unwrap(),
        "keep me"
    );
}

#[test]
fn test_missing_input_file() {
    let dir = tempdir().unwrap();

    let (_, stderr, success) = run_json2csv(dir.path(), &["nope.json", "out.csv"]);

    assert!(!success);
    assert!(stderr.contains("Error reading JSON file"));
    assert!(stderr.contains("nope.json"));
    assert!(!dir.path().join("out.csv").exists());
}

#[test]
fn test_debug_logging_goes_to_stderr() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("input.json"), r#"[{"a":1}]"#).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_json2csv"))
        .current_dir(dir.path())
        .env("RUST_LOG", "debug")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stdout.trim(), "CSV file has been saved to output.csv");
    assert!(stderr.contains("parsed 1 records"));
}
