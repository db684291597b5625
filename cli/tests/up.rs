//! # ActionCLI Up Integration Tests
//!
//! File: cli/tests/up.rs
//!
//! ## Overview
//!
//! `actioncli up` runs init then deploy with one shared set of global flags,
//! and stops at the first failing step.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_up_runs_both_steps_with_shared_globals() {
    let dir = sandbox();
    actioncli_in(dir.path())
        .args(["up", "-t", "t1", "--service", "api", "--no-prompt", "a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("template:  t1"))
        .stdout(predicate::str::contains("Deploying service 'api'"))
        .stdout(predicate::str::contains("no-prompt: true"))
        .stdout(predicate::str::contains("no-prompt:   true"))
        .stdout(predicate::str::contains("Up completed"));
}

#[test]
fn test_up_stops_after_failed_init() {
    let dir = sandbox();
    actioncli_in(dir.path())
        .args(["up", "-b", "main", "--service", "api"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Deploying").not())
        .stderr(predicate::str::contains("up: init step failed"));
}

#[test]
fn test_up_reports_deploy_failure() {
    let dir = sandbox();
    actioncli_in(dir.path())
        .args(["up", "--all", "--service", "api"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Initializing"))
        .stdout(predicate::str::contains("Up completed").not())
        .stderr(predicate::str::contains("up: deploy step failed"));
}
