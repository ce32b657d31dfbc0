#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

/// Put a fake `npx` first on PATH that records its arguments and exits with `code`
fn fake_npx(dir: &Path, code: i32) -> String {
    let script = dir.join("npx");
    std::fs::write(
        &script,
        format!("#!/bin/sh\necho \"$@\" > \"{}\"\nexit {code}\n", dir.join("args").display()),
    )
    .unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

    let path = std::env::var("PATH").unwrap_or_default();
    format!("{}:{path}", dir.display())
}

#[test]
fn defaults_run_jscodeshift() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = fake_npx(temp_dir.path(), 0);

    Command::cargo_bin("wsgraph-codemod")
        .unwrap()
        .env("PATH", path)
        .args(["--yes", "--transform", "/opt/transform.js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Executing:"));

    let args = std::fs::read_to_string(temp_dir.path().join("args")).unwrap();
    assert_eq!(
        args.trim(),
        "jscodeshift -t=/opt/transform.js --parser=tsx --keySeparator=. --nsSeparator=: ./src"
    );
}

#[test]
fn prompted_answers_reach_the_command() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = fake_npx(temp_dir.path(), 0);

    Command::cargo_bin("wsgraph-codemod")
        .unwrap()
        .env("PATH", path)
        .args(["--transform", "/opt/transform.js"])
        .write_stdin("app\nfalse\n\n::\ntrue\n")
        .assert()
        .success();

    let args = std::fs::read_to_string(temp_dir.path().join("args")).unwrap();
    assert_eq!(
        args.trim(),
        "jscodeshift -t=/opt/transform.js --parser=ts --dry=true --keySeparator=. --nsSeparator=:: app"
    );
}

#[test]
fn non_zero_exit_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = fake_npx(temp_dir.path(), 2);

    Command::cargo_bin("wsgraph-codemod")
        .unwrap()
        .env("PATH", path)
        .args(["--yes", "--transform", "/opt/transform.js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exit code 2"));
}
