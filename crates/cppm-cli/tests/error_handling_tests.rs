//! Tests for error handling, exit codes and suggestions.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn cppm(project: &Path) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("cppm");
    cmd.env("HOME", project)
        .env("XDG_CONFIG_HOME", project.join(".config"))
        .arg("-C")
        .arg(project);
    cmd
}

#[test]
fn test_invalid_module_name_is_user_error() {
    let temp = TempDir::new().unwrap();

    cppm(temp.path())
        .args(["create", "module", "../escape"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn test_existing_header_needs_force() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("include")).unwrap();
    fs::write(temp.path().join("include/util.h"), "// keep\n").unwrap();

    cppm(temp.path())
        .args(["create", "header", "util"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));
    assert_eq!(
        fs::read_to_string(temp.path().join("include/util.h")).unwrap(),
        "// keep\n"
    );

    cppm(temp.path())
        .args(["create", "header", "util", "--force"])
        .assert()
        .success();
    assert!(
        fs::read_to_string(temp.path().join("include/util.h"))
            .unwrap()
            .contains("UTIL_H")
    );
}

#[test]
fn test_delete_missing_module_is_not_found() {
    let temp = TempDir::new().unwrap();

    cppm(temp.path())
        .args(["delete", "module", "ghost"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("cppm src --list"));
}

#[test]
fn test_missing_explicit_config_is_configuration_error() {
    let temp = TempDir::new().unwrap();

    cppm(temp.path())
        .args(["-c", "does-not-exist.toml", "src", "--list"])
        .assert()
        .code(4);
}

#[test]
fn test_unknown_config_key() {
    let temp = TempDir::new().unwrap();

    cppm(temp.path())
        .args(["config", "get", "style.nope"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_file_and_list_conflict() {
    cargo::cargo_bin_cmd!("cppm")
        .args(["src", "main.cpp", "--list"])
        .assert()
        .code(2);
}
