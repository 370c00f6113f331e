//! End-to-end tests for the `mathlang` binary.

#![allow(clippy::unwrap_used)]

use std::io::Write;
use std::process::{Command, Output};

fn mathlang(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mathlang"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn source_file(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn no_args_prints_usage() {
    let output = mathlang(&[]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage: mathlang <command>"));
}

#[test]
fn unknown_command_fails() {
    let output = mathlang(&["frobnicate"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Unknown command: frobnicate"));
}

#[test]
fn lex_prints_tokens() {
    let file = source_file("x=5;");
    let path = file.path().to_str().unwrap();
    let output = mathlang(&["lex", path]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("(4 tokens)"));
    assert!(out.contains("  Name(\"x\") @ 0..1\n"));
    assert!(out.contains("  Symbol('=') @ 1..2\n"));
    assert!(out.contains("  Number(5.0) @ 2..3\n"));
    assert!(out.contains("  Symbol(';') @ 3..4\n"));
}

#[test]
fn check_reports_error_location() {
    let file = source_file("x = 1;\ny = #;\n");
    let path = file.path().to_str().unwrap();
    let output = mathlang(&["check", path, "--color=never"]);
    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("error: invalid token `#`"));
    assert!(err.contains(&format!("--> {path}:2:5")));
}

#[test]
fn check_counts_tokens() {
    let file = source_file("print \"hi\";\n");
    let output = mathlang(&["check", file.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "OK: 3 tokens\n");
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.ml");
    let output = mathlang(&["check", path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("cannot find file"));
}

#[test]
fn invalid_color_value_fails() {
    let file = source_file(";");
    let output = mathlang(&["lex", file.path().to_str().unwrap(), "--color=rainbow"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("invalid --color value 'rainbow'"));
}
