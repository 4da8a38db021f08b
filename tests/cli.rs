//! Integration tests for the `cwmark` command-line interface.
//!
//! Covers standard input conversion, file arguments, `--in-place`, `--tree`
//! and argument validation.

use std::fs;

use tempfile::tempdir;

mod prelude;
use prelude::*;

/// Verifies that `--in-place` without a file argument is rejected.
#[test]
fn test_cli_in_place_requires_file() {
    cwmark_cmd().arg("--in-place").assert().failure();
}

/// Verifies that `--in-place` and `--tree` cannot be combined.
#[test]
fn test_cli_in_place_conflicts_with_tree() {
    let dir = tempdir().expect("failed to create temporary directory");
    let file = dir.path().join("message.txt");
    fs::write(&file, "[hr]").expect("failed to write message");
    cwmark_cmd()
        .args(["--in-place", "--tree"])
        .arg(&file)
        .assert()
        .failure();
}

/// Verifies that the `--version` flag prints the crate version and exits.
#[test]
fn test_cli_version_flag() {
    cwmark_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(format!("cwmark {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_converts_stdin() {
    cwmark_cmd()
        .write_stdin("[info][title]Hi[/title][/info]")
        .assert()
        .success()
        .stdout("***\n**Hi**\n***\n");
}

/// A piped message ends in one newline; the output must end in exactly one.
#[test]
fn test_cli_stdin_trailing_newline_is_not_doubled() {
    cwmark_cmd()
        .write_stdin("[title]Hi[/title]\n")
        .assert()
        .success()
        .stdout("**Hi**\n");
    cwmark_cmd()
        .write_stdin("[hr]\n")
        .assert()
        .success()
        .stdout("\n***\n\n");
}

#[test]
fn test_cli_file_trailing_newline_is_not_doubled() {
    let dir = tempdir().expect("failed to create temporary directory");
    let file = dir.path().join("message.txt");
    fs::write(&file, "[title]T[/title]\n").expect("failed to write message");
    cwmark_cmd().arg(&file).assert().success().stdout("**T**\n");
    cwmark_cmd()
        .arg("--tree")
        .arg(&file)
        .assert()
        .success()
        .stdout("#0 plain \"\"\n  #1 surrounded [title]..[/title]\n    #2 plain \"T\"\n");
}

#[test]
fn test_cli_blocked_stdin_prints_blank_line() {
    cwmark_cmd()
        .write_stdin("[dtext:chatroom_member_is]")
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn test_cli_tree_option() {
    cwmark_cmd()
        .arg("--tree")
        .write_stdin("[qt]hi[/qt]")
        .assert()
        .success()
        .stdout("#0 plain \"\"\n  #1 surrounded [qt]..[/qt]\n    #2 plain \"hi\"\n");
}

/// Converts several files and checks the output keeps argument order.
#[rstest]
fn test_cli_multiple_files_keep_order() {
    let dir = tempdir().expect("failed to create temporary directory");
    let mut cmd = cwmark_cmd();
    let mut expected = String::new();
    for i in 0..4 {
        let path = dir.path().join(format!("message{i}.txt"));
        fs::write(&path, format!("[title]T{i}[/title]")).expect("failed to write message");
        expected.push_str(&format!("**T{i}**\n"));
        cmd.arg(&path);
    }
    cmd.assert().success().stdout(expected);
}

#[test]
fn test_cli_in_place_rewrites_file() {
    let dir = tempdir().expect("failed to create temporary directory");
    let file = dir.path().join("message.txt");
    fs::write(&file, "[To:1]Bob[hr]bye").expect("failed to write message");
    cwmark_cmd()
        .arg("--in-place")
        .arg(&file)
        .assert()
        .success()
        .stdout("");
    let out = fs::read_to_string(&file).expect("failed to read message");
    assert_eq!(out, "Dear: Bob\n***\nbye\n");
}

#[test]
fn test_cli_missing_file_reports_path() {
    let dir = tempdir().expect("failed to create temporary directory");
    let missing = dir.path().join("nope.txt");
    cwmark_cmd()
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.txt"));
}
