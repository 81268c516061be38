//! End-to-end tests for the errwrap binary.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const FIXTURE: &str = "package a

import (
\t\"fmt\"
)

var ErrBad = fmt.Errorf(\"bad\")

func f(g func() error) error {
\tif err := g(); err != nil {
\t\treturn ErrBad
\t}
\treturn nil
}
";

fn errwrap() -> Command {
    let mut cmd = Command::cargo_bin("errwrap").unwrap();
    cmd.env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

fn project(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, content) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
    dir
}

fn check(dir: &Path) -> Command {
    let mut cmd = errwrap();
    cmd.current_dir(dir).args(["check", "-j", "1"]);
    cmd
}

#[test]
fn test_findings_exit_with_code_3() {
    let dir = project(&[("a.go", FIXTURE)]);

    let output = check(dir.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(3));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("a.go:11:3: unwrapped error found 'return ErrBad'"));
    assert!(stdout.contains("a.go:3:1: adding \"github.com/pkg/errors\" import"));
    assert!(stdout.contains("1 file(s) checked, 2 finding(s)"));
}

#[test]
fn test_fix_rewrites_and_exits_clean() {
    let dir = project(&[("a.go", FIXTURE)]);

    check(dir.path()).arg("--fix").assert().code(0);

    let fixed = fs::read_to_string(dir.path().join("a.go")).unwrap();
    assert!(fixed.contains("\t\treturn errors.Wrap(ErrBad, err.Error())\n"));
    assert!(fixed.contains("import (\n\t\"fmt\"\n\t\"github.com/pkg/errors\"\n)"));

    check(dir.path()).assert().code(0);
}

#[test]
fn test_json_output() {
    let dir = project(&[("a.go", FIXTURE), ("b.go", "package a\n")]);

    let output = check(dir.path()).args(["--format", "json"]).output().unwrap();
    assert_eq!(output.status.code(), Some(3));

    let reports: Value = serde_json::from_slice(&output.stdout).unwrap();
    let reports = reports.as_array().unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["diagnostics"].as_array().unwrap().len(), 2);
    assert_eq!(reports[0]["diagnostics"][0]["position"]["line"], 11);
    assert!(reports[1]["diagnostics"].as_array().unwrap().is_empty());
}

#[test]
fn test_parse_error_exits_with_code_1() {
    let dir = project(&[("a.go", FIXTURE), ("broken.go", "package a\nfunc {\n")]);

    let output = check(dir.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("broken.go:"));
    assert!(stdout.contains("unwrapped error found"));
}

#[test]
fn test_config_ignore_patterns_and_format() {
    let dir = project(&[
        ("a.go", FIXTURE),
        ("gen/b.pb.go", FIXTURE),
        (
            ".errwrap.toml",
            "[ignore]\npatterns = [\"**/*.pb.go\"]\n\n[output]\ndefault_format = \"json\"\n",
        ),
    ]);

    let output = check(dir.path()).output().unwrap();
    let reports: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(reports.as_array().unwrap().len(), 1);
}

#[test]
fn test_invalid_explicit_config_fails() {
    let dir = project(&[("a.go", FIXTURE), ("bad.toml", "[output]\ndefault_format = \"xml\"\n")]);

    check(dir.path())
        .args(["--config", "bad.toml"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_vendor_and_testdata_are_skipped() {
    let dir = project(&[
        ("vendor/x/a.go", FIXTURE),
        ("testdata/a.go", FIXTURE),
        ("ok.go", "package a\n"),
    ]);

    check(dir.path()).assert().code(0);
}

#[test]
fn test_init_writes_config_once() {
    let dir = TempDir::new().unwrap();

    errwrap().current_dir(dir.path()).arg("init").assert().success();
    assert!(dir.path().join(".errwrap.toml").exists());

    errwrap().current_dir(dir.path()).arg("init").assert().failure();
    errwrap()
        .current_dir(dir.path())
        .args(["init", "--force"])
        .assert()
        .success();
}
