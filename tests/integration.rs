// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

//! End-to-end tests: the CLI binary, and the git-backed history walk against
//! a throwaway repository.

use std::path::Path;
use std::process::Command as Process;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use semrel::domain::ParsedMessage;
use semrel::services::git::GitService;

// ─── CLI surface ─────────────────────────────────────────────────────────────

#[test]
fn deploy_prints_greeting() {
    let mut cmd = Command::cargo_bin("semrel").unwrap();
    cmd.arg("deploy").assert().success().stdout("Hello world!\n");
}

#[test]
fn deploy_verbose_still_greets_on_stdout() {
    let mut cmd = Command::cargo_bin("semrel").unwrap();
    cmd.args(["--verbose", "deploy"])
        .assert()
        .success()
        .stdout("Hello world!\n");
}

#[test]
fn missing_subcommand_prints_usage() {
    let mut cmd = Command::cargo_bin("semrel").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

// ─── Git-backed history walk ─────────────────────────────────────────────────

fn git(dir: &Path, args: &[&str]) {
    let status = Process::new("git")
        .args([
            "-c",
            "user.name=semrel",
            "-c",
            "user.email=semrel@example.com",
            "-c",
            "commit.gpgsign=false",
        ])
        .args(args)
        .current_dir(dir)
        .status()
        .expect("git binary available");
    assert!(status.success(), "git {args:?} failed");
}

fn empty_commit(dir: &Path, message: &str) {
    git(dir, &["commit", "--allow-empty", "-q", "-m", message]);
}

#[test]
fn reads_history_since_last_release() {
    let tmp = TempDir::new().unwrap();
    git(tmp.path(), &["init", "-q"]);

    // Oldest first; the walk reads them back newest first
    empty_commit(tmp.path(), "release(uv): cut a release");
    empty_commit(tmp.path(), "not a semantic commit");
    empty_commit(tmp.path(), "feat(auth): add login page");

    let service = GitService::discover(tmp.path()).unwrap();
    let messages: Vec<_> = service.read_commit_log().unwrap().collect();

    assert_eq!(messages.len(), 2, "release marker must be excluded");
    match &messages[0] {
        ParsedMessage::Semantic(msg) => {
            assert_eq!(msg.kind.as_str(), "feat");
            assert_eq!(msg.scope.as_deref(), Some("auth"));
            assert_eq!(msg.subject, "add login page");
        }
        other => panic!("expected semantic message, got {other:?}"),
    }
    match &messages[1] {
        ParsedMessage::Legacy(legacy) => {
            assert_eq!(legacy.message.trim_end(), "not a semantic commit");
        }
        other => panic!("expected legacy message, got {other:?}"),
    }
}

#[test]
fn commit_log_yields_raw_records_newest_first() {
    let tmp = TempDir::new().unwrap();
    git(tmp.path(), &["init", "-q"]);

    empty_commit(tmp.path(), "chore: first");
    empty_commit(tmp.path(), "fix: second");

    let service = GitService::discover(tmp.path()).unwrap();
    let records: Vec<_> = service.commit_log().unwrap().collect();

    assert_eq!(records.len(), 2);
    assert!(records[0].message.starts_with("fix: second"));
    assert!(records[1].message.starts_with("chore: first"));
    for record in &records {
        assert_eq!(record.id.len(), 40, "expected full hex object ids");
    }
}

#[test]
fn discover_rejects_plain_directories() {
    let tmp = TempDir::new().unwrap();
    assert!(GitService::discover(tmp.path()).is_err());
}
