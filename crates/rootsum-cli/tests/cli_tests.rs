//! Runs the built binary and checks its observable contract.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

const EXPECTED: &str = "Original numbers: [1, 4, 9, 16, 25]\n\
                        Square roots: [1.0, 2.0, 3.0, 4.0, 5.0]\n\
                        Filtered square roots (greater than 2): [3.0, 4.0, 5.0]\n\
                        Sum of filtered square roots: 12.0\n";

fn rootsum() -> assert_cmd::Command {
    cargo_bin_cmd!("rootsum")
}

#[test]
fn prints_four_lines_and_exits_zero() {
    rootsum()
        .assert()
        .success()
        .code(0)
        .stdout(EXPECTED);
}

#[test]
fn successful_run_writes_nothing_to_stderr() {
    rootsum()
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn repeated_runs_print_identical_output() {
    let first = rootsum().output().expect("first run");
    let second = rootsum().output().expect("second run");
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), Some(0));
    assert_eq!(second.status.code(), Some(0));
}

#[test]
fn unknown_arguments_are_rejected() {
    rootsum()
        .arg("--numbers")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn log_environment_does_not_leak_into_stdout() {
    rootsum()
        .env("RUST_LOG", "trace")
        .assert()
        .success()
        .stdout(EXPECTED);
}

#[test]
fn version_flag_is_available() {
    rootsum()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rootsum"));
}
