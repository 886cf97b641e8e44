// Integration tests for the portfolio-rank CLI surface.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes and argument validation.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the portfolio-rank binary.
fn portfolio_rank() -> Command {
    Command::cargo_bin("portfolio-rank").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    portfolio_rank()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("portfolio-rank"));
}

#[test]
fn cli_help_flag() {
    portfolio_rank()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Portfolio scoring"));
}

#[test]
fn rank_requires_input() {
    portfolio_rank()
        .arg("rank")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn resolve_requires_reply() {
    portfolio_rank()
        .args(["resolve", "portfolios.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--reply"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    portfolio_rank()
        .args(["-q", "-v", "rank", "-"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn rank_reports_missing_input_file() {
    portfolio_rank()
        .args(["rank", "/definitely/not/here.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("input not found"));
}
