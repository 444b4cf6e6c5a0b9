//! Tests for error messages, suggestions and exit codes.

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn hatch(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("hatch");
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".xdg"))
        .env("HOME", dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("HATCH_TEMPLATES_DIR");
    cmd
}

#[test]
fn invalid_service_name_exits_with_two() {
    let temp = TempDir::new().unwrap();
    hatch(temp.path())
        .args(["service", "--type", "generic", "--name", "2fast", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid service name"))
        .stderr(predicate::str::contains("Suggestions:"));

    assert!(!temp.path().join("src").exists());
}

#[test]
fn missing_name_without_prompting_is_a_validation_error() {
    let temp = TempDir::new().unwrap();
    hatch(temp.path())
        .args(["service", "--type", "generic", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Required answer missing: name"));
}

#[test]
fn database_without_driver_or_default_fails() {
    let temp = TempDir::new().unwrap();
    hatch(temp.path())
        .args(["service", "--type", "database", "--name", "users", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("database"));
}

#[test]
fn registry_without_anchor_is_reported_and_left_alone() {
    let temp = TempDir::new().unwrap();
    let registry = temp.path().join("src/services/index.js");
    fs::create_dir_all(registry.parent().unwrap()).unwrap();
    fs::write(&registry, "const services = [];\n").unwrap();

    hatch(temp.path())
        .args(["service", "--type", "generic", "--name", "box", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("hatch:services"));

    assert_eq!(fs::read_to_string(&registry).unwrap(), "const services = [];\n");
}

#[test]
fn unknown_database_is_rejected_by_the_parser() {
    let temp = TempDir::new().unwrap();
    hatch(temp.path())
        .args(["service", "--database", "oracle"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("oracle"));
}

#[test]
fn missing_config_file_exits_with_four() {
    let temp = TempDir::new().unwrap();
    hatch(temp.path())
        .args(["--config", "nope.toml", "templates"])
        .assert()
        .code(4);
}

#[test]
fn missing_templates_dir_exits_with_four() {
    let temp = TempDir::new().unwrap();
    hatch(temp.path())
        .env("HATCH_TEMPLATES_DIR", temp.path().join("missing"))
        .arg("templates")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("HATCH_TEMPLATES_DIR"));
}

#[test]
fn unknown_config_key_exits_with_four() {
    let temp = TempDir::new().unwrap();
    hatch(temp.path())
        .args(["config", "get", "defaults.language"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn invalid_config_value_exits_with_two() {
    let temp = TempDir::new().unwrap();
    hatch(temp.path())
        .args(["config", "set", "defaults.service_type", "queue"])
        .assert()
        .code(2);

    assert!(!temp.path().join(".hatch.toml").exists());
}

#[test]
fn json_errors_are_machine_readable() {
    let temp = TempDir::new().unwrap();
    let assert = hatch(temp.path())
        .args(["-q", "--output-format", "json", "service", "--name", "2fast", "--yes"])
        .assert()
        .code(2);

    let err: serde_json::Value = serde_json::from_slice(&assert.get_output().stderr)
        .expect("stderr should be a JSON document");
    assert_eq!(err["exit_code"], 2);
}
