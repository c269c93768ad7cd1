use predicates::prelude::*;

use crate::common::{Workspace, csvstats};

#[test]
fn shows_help() {
    csvstats()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("csvstats"));
}

#[test]
fn shows_version() {
    csvstats()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_argument_is_usage_error() {
    csvstats().assert().code(1).stderr(predicate::str::contains("Usage"));
}

#[test]
fn unknown_flag_is_usage_error() {
    let ws = Workspace::new();
    let path = ws.file("a.csv", "x\n1\n");
    csvstats().arg("--bogus").arg(&path).assert().code(1);
}

#[test]
fn missing_file_fails() {
    let ws = Workspace::new();
    let path = ws.path().join("nope.csv");
    csvstats()
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: file not found:"));
}
