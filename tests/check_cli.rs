// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! End-to-end tests for the cj binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

/// Branch name used to pin the branch-inference environment in tests.
const PLAIN_BRANCH: &str = "feature/no-ticket-here";

fn cj() -> Command {
    let mut cmd = Command::cargo_bin("cj").unwrap();
    // Pin the CI branch variable so host branches never leak required IDs
    // into the tests.
    cmd.env("CI_MERGE_REQUEST_SOURCE_BRANCH_NAME", PLAIN_BRANCH);
    cmd
}

fn git(dir: &Path, args: &[&str]) -> String {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn init_repo() -> TempDir {
    let dir = TempDir::new().unwrap();
    git(dir.path(), &["init"]);
    git(dir.path(), &["config", "user.email", "test@example.com"]);
    git(dir.path(), &["config", "user.name", "Test User"]);
    dir
}

fn commit(dir: &Path, message: &str) -> String {
    git(dir, &["commit", "--allow-empty", "-m", message]);
    git(dir, &["rev-parse", "HEAD"])
}

#[test]
fn test_help() {
    cj().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("commit"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_schema_prints_pattern_and_example() {
    cj().arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("fix|feat|docs"))
        .stdout(predicate::str::contains("Jira-Id: <jiraid>"))
        .stdout(predicate::str::contains(
            "fix(viewer): De-frobulate splines in encabulator",
        ));
}

#[test]
fn test_check_message_valid() {
    cj().args(["check", "--message", "feat(api): Add endpoint"])
        .assert()
        .success();
}

#[test]
fn test_check_message_invalid() {
    cj().args(["check", "--message", "definitely not conventional"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not match"));
}

#[test]
fn test_check_message_requires_branch_trailer() {
    let mut cmd = Command::cargo_bin("cj").unwrap();
    cmd.env(
        "CI_MERGE_REQUEST_SOURCE_BRANCH_NAME",
        "feature/AB-123-add-endpoint",
    );
    cmd.args(["check", "--message", "feat: Add endpoint"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("AB-123"));

    let mut cmd = Command::cargo_bin("cj").unwrap();
    cmd.env(
        "CI_MERGE_REQUEST_SOURCE_BRANCH_NAME",
        "feature/AB-123-add-endpoint",
    );
    cmd.args([
        "check",
        "--message",
        "feat: Add endpoint\n\nJira-Id: AB-123",
    ])
    .assert()
    .success();
}

#[test]
fn test_check_empty_message_flag() {
    cj().args(["check", "--message", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty"));

    cj().args(["check", "--allow-empty-message", "--message", ""])
        .assert()
        .success();
}

#[test]
fn test_check_head_commit() {
    let repo = init_repo();
    commit(repo.path(), "feat: A perfectly fine commit");

    cj().arg("check")
        .current_dir(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1 commit(s) checked"));
}

#[test]
fn test_check_rejects_bad_commit() {
    let repo = init_repo();
    commit(repo.path(), "bad message");

    cj().arg("check")
        .current_dir(repo.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("rejected"));
}

#[test]
fn test_check_range_reports_every_failure() {
    let repo = init_repo();
    let base = commit(repo.path(), "feat: Base commit");
    commit(repo.path(), "first bad message");
    commit(repo.path(), "feat: Good middle commit");
    commit(repo.path(), "second bad message");

    cj().args(["check", &format!("{}..HEAD", base)])
        .current_dir(repo.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("first bad message"))
        .stdout(predicate::str::contains("second bad message"))
        .stdout(predicate::str::contains("2 of 3 commit(s) rejected"));
}

#[test]
fn test_check_merge_commit_accepted() {
    let repo = init_repo();
    commit(repo.path(), "Merge branch 'feature/x' into main");

    cj().arg("check").current_dir(repo.path()).assert().success();
}

#[test]
fn test_check_json_output() {
    let repo = init_repo();
    commit(repo.path(), "bad message");

    cj().args(["check", "--format", "json"])
        .current_dir(repo.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"valid\": false"))
        .stdout(predicate::str::contains("\"failed\": 1"));
}

#[test]
fn test_commit_dry_run_non_interactive() {
    let repo = init_repo();
    commit(repo.path(), "feat: Base commit");

    cj().args([
        "--non-interactive",
        "--dry-run",
        "commit",
        "-t",
        "feat",
        "-s",
        "api",
        "-m",
        "Add endpoint",
        "-j",
        "AB-12",
    ])
    .current_dir(repo.path())
    .assert()
    .success()
    .stdout(predicate::str::contains(
        "feat(api): Add endpoint\n\nJira-Id: AB-12",
    ));
}

#[test]
fn test_init_writes_config() {
    let dir = TempDir::new().unwrap();

    cj().arg("init")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created cj.toml"));

    assert!(dir.path().join("cj.toml").exists());

    // A second init without --force refuses to overwrite.
    cj().arg("init").current_dir(dir.path()).assert().failure();
    cj().args(["init", "--force"])
        .current_dir(dir.path())
        .assert()
        .success();
}
