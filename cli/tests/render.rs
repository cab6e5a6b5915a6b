use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_cli_render_writes_document_to_stdout() {
    let mut cmd = Command::cargo_bin("matex").unwrap();
    cmd.arg("render");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\\documentclass{article}"))
        .stdout(predicate::str::contains("\\begin{displaymath}"))
        .stdout(predicate::str::contains("\\sum^{n}_{k=1} k "))
        .stdout(predicate::str::contains("\\end{document}"));
}

#[test]
fn test_cli_render_writes_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("showcase.tex");

    let mut cmd = Command::cargo_bin("matex").unwrap();
    cmd.arg("render").arg("--output").arg(&output);
    cmd.assert().success().stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("\\int\\!\\!\\! \\int_{G} f(x, y) \\: dx\\, dy"));
    assert!(written.ends_with("\\end{document}\n"));
}

#[test]
fn test_cli_render_is_deterministic() {
    let mut first = Command::cargo_bin("matex").unwrap();
    first.arg("render");
    let mut second = Command::cargo_bin("matex").unwrap();
    second.arg("render");

    let first_output = first.output().unwrap();
    let second_output = second.output().unwrap();
    assert_eq!(first_output.stdout, second_output.stdout);
}

#[test]
fn test_cli_symbols_lists_tokens() {
    let mut cmd = Command::cargo_bin("matex").unwrap();
    cmd.arg("symbols");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("SPACE_NEG_L"))
        .stdout(predicate::str::contains("\\infty"))
        .stdout(predicate::str::contains("\\setminus"));
}
