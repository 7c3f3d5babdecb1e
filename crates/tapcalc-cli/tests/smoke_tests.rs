//! Smoke tests for the tapcalc binary

#![allow(deprecated)] // Command::cargo_bin
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Get a command for the tapcalc binary
fn tapcalc() -> Command {
    let mut cmd = Command::cargo_bin("tapcalc").expect("tapcalc binary should exist");
    cmd.env_remove("RUST_LOG")
        .env_remove("TAPCALC_COLOR")
        .env_remove("TAPCALC_PRECISION");
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    tapcalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_help_flag() {
    tapcalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("repl"))
        .stdout(predicate::str::contains("keys"));
}

#[test]
fn test_no_args_fails() {
    tapcalc().assert().failure();
}

// ============================================================================
// run
// ============================================================================

#[test]
fn test_run_addition() {
    tapcalc()
        .args(["run", "5", "+", "3", "="])
        .assert()
        .success()
        .stdout("8\n");
}

#[test]
fn test_run_compact_sequence() {
    tapcalc()
        .args(["run", "0.1+0.2="])
        .assert()
        .success()
        .stdout("0.3\n");
}

#[test]
fn test_run_leading_minus() {
    tapcalc()
        .args(["run", "-", "5", "*", "2", "="])
        .assert()
        .success()
        .stdout("-10\n");
}

#[test]
fn test_run_division_by_zero() {
    tapcalc()
        .args(["--color", "never", "run", "6", "/", "0", "="])
        .assert()
        .success()
        .stdout("0\n")
        .stderr(predicate::str::contains("ERROR Division by zero!"));
}

#[test]
fn test_run_memory_overflow_warning() {
    tapcalc()
        .args(["--color", "never", "run", "99999999999999999", "ms", "mr"])
        .assert()
        .success()
        .stdout("9007199254740991\n")
        .stderr(predicate::str::contains("Memory overflow!"));
}

#[test]
fn test_run_quiet_hides_warnings() {
    tapcalc()
        .args(["-q", "run", "99999999999999999", "ms"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_run_trace() {
    tapcalc()
        .args(["run", "--trace", "1", "+", "2", "="])
        .assert()
        .success()
        .stdout(predicate::str::contains("+   1"))
        .stdout(predicate::str::contains("=   3"));
}

#[test]
fn test_run_json() {
    let output = tapcalc()
        .args(["run", "--format", "json", "2", "*", "4", "="])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["state"]["display"], "8");
    assert_eq!(value["history"][0]["lhs"], "2");
    assert_eq!(value["history"][0]["operator"], "Multiply");
    assert_eq!(value["history"][0]["result"], 8.0);
}

#[test]
fn test_run_unknown_key_fails() {
    tapcalc()
        .args(["run", "5", "%", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid key sequence"));
}

#[test]
fn test_run_precision_flag() {
    tapcalc()
        .args(["--precision", "3", "run", "2", "/", "3", "="])
        .assert()
        .success()
        .stdout("0.667\n");
}

#[test]
fn test_run_precision_env() {
    tapcalc()
        .env("TAPCALC_PRECISION", "1")
        .args(["run", "1/3="])
        .assert()
        .success()
        .stdout("0.3\n");
}

#[test]
fn test_precision_out_of_range_rejected() {
    tapcalc()
        .args(["--precision", "99", "run", "1"])
        .assert()
        .failure();
}

// ============================================================================
// repl
// ============================================================================

#[test]
fn test_repl_reads_lines() {
    tapcalc()
        .arg("repl")
        .write_stdin("5 +\n3 =\nhistory\nquit\n")
        .assert()
        .success()
        .stdout("5\n8\n5 + 3 = 8\n");
}

#[test]
fn test_repl_survives_bad_line() {
    tapcalc()
        .arg("repl")
        .write_stdin("2 *\nnope\n4 =\n")
        .assert()
        .success()
        .stdout("2\n8\n")
        .stderr(predicate::str::contains("unknown key"));
}
