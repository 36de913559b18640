//! `check` and `gen-config` scenarios against the real binary.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::process::{Command, Output};
use tempfile::TempDir;

const STUB: &str = r#"#!/bin/sh
if [ "$2" = "--version" ]; then
  echo "7.16.0"
  exit 0
fi
exit 1
"#;

fn site() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("posts")).unwrap();
    fs::create_dir(tmp.path().join("assets")).unwrap();
    fs::write(tmp.path().join("notes.ipynb"), "{\"cells\": []}").unwrap();

    let stub_path = tmp.path().join("fake-jupyter");
    fs::write(&stub_path, STUB).unwrap();
    let mut perms = fs::metadata(&stub_path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&stub_path, perms).unwrap();

    fs::write(
        tmp.path().join("nbpress.toml"),
        format!("[converter]\nprogram = \"{}\"\n", stub_path.display()),
    )
    .unwrap();
    tmp
}

fn run(tmp: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nbpress"))
        .current_dir(tmp.path())
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn check_reports_everything_ok() {
    let tmp = site();

    let output = run(&tmp, &["check", "notes.ipynb"]);

    assert!(output.status.success());
    let out = String::from_utf8_lossy(&output.stdout).to_string();
    assert!(out.contains("Checking notes.ipynb"), "got: {out}");
    assert!(out.contains("Posts directory: posts (ok)"), "got: {out}");
    assert!(out.contains("Assets directory: assets (ok)"), "got: {out}");
    assert!(out.contains("(available)"), "got: {out}");

    // check moves nothing
    assert_eq!(fs::read_dir(tmp.path().join("posts")).unwrap().count(), 0);
}

#[test]
fn check_flags_missing_destination_and_exits_nonzero() {
    let tmp = site();
    fs::remove_dir(tmp.path().join("assets")).unwrap();

    let output = run(&tmp, &["check", "notes.ipynb"]);

    assert_eq!(output.status.code(), Some(1));
    let out = String::from_utf8_lossy(&output.stdout).to_string();
    assert!(out.contains("Assets directory: assets (missing)"), "got: {out}");
}

#[test]
fn check_missing_source_exits_2() {
    let tmp = site();

    let output = run(&tmp, &["check", "missing.ipynb"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not found"));
}

#[test]
fn check_reports_unavailable_converter() {
    let tmp = site();
    fs::write(
        tmp.path().join("nbpress.toml"),
        "[converter]\nprogram = \"definitely-not-a-real-program\"\n",
    )
    .unwrap();

    let output = run(&tmp, &["check", "notes.ipynb"]);

    assert_eq!(output.status.code(), Some(1));
    let out = String::from_utf8_lossy(&output.stdout).to_string();
    assert!(out.contains("(not available)"), "got: {out}");
}

#[test]
fn gen_config_prints_documented_stock_config() {
    let tmp = site();

    let output = run(&tmp, &["gen-config"]);

    assert!(output.status.success());
    let out = String::from_utf8_lossy(&output.stdout).to_string();
    assert!(out.contains("posts_dir = \"posts\""));
    assert!(out.contains("assets_dir = \"assets\""));
    assert!(out.contains("program = \"jupyter\""));
}

#[test]
fn invalid_config_file_exits_1() {
    let tmp = site();
    fs::write(tmp.path().join("nbpress.toml"), "posts_dir = \"\"").unwrap();

    let output = run(&tmp, &["check", "notes.ipynb"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Config error"));
}
