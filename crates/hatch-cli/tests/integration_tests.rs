//! Integration tests for the hatch binary.

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// `hatch` running in `dir`, isolated from the user's config and env.
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

fn read(dir: &Path, rel: &str) -> String {
    fs::read_to_string(dir.join(rel)).unwrap_or_else(|e| panic!("reading {rel}: {e}"))
}

fn init(dir: &Path) {
    hatch(dir).arg("init").assert().success();
}

#[test]
fn help_lists_subcommands() {
    let temp = TempDir::new().unwrap();
    hatch(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("service"))
        .stdout(predicate::str::contains("templates"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    hatch(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn any_no_color_value_disables_colors() {
    let temp = TempDir::new().unwrap();
    for value in ["1", "yes", "true"] {
        hatch(temp.path())
            .env("NO_COLOR", value)
            .args(["templates", "--format", "list"])
            .assert()
            .success()
            .stdout(predicate::str::contains("generic"))
            .stdout(predicate::str::contains("\u{1b}[").not());
    }
}

#[test]
fn no_color_zero_is_accepted() {
    let temp = TempDir::new().unwrap();
    hatch(temp.path())
        .env("NO_COLOR", "0")
        .arg("templates")
        .assert()
        .success();
}

#[test]
fn init_creates_config_and_marked_registry() {
    let temp = TempDir::new().unwrap();
    init(temp.path());

    assert!(temp.path().join(".hatch.toml").exists());
    assert_eq!(
        read(temp.path(), "src/services/index.js"),
        "export default function () {\n  const app = this;\n  // hatch:services\n}\n"
    );
}

#[test]
fn init_keeps_existing_registry() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("src/services")).unwrap();
    fs::write(temp.path().join("src/services/index.js"), "// mine\n").unwrap();

    init(temp.path());

    assert_eq!(read(temp.path(), "src/services/index.js"), "// mine\n");
}

#[test]
fn generic_service_is_written_and_registered() {
    let temp = TempDir::new().unwrap();
    init(temp.path());

    hatch(temp.path())
        .args(["service", "--type", "generic", "--name", "box", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Service 'box' created"));

    let index = read(temp.path(), "src/services/box/index.js");
    assert!(index.contains("app.use('/boxes'"));
    assert!(temp.path().join("src/services/box/hooks/index.js").exists());
    assert!(!temp.path().join("src/models").exists());

    assert_eq!(
        read(temp.path(), "src/services/index.js"),
        "import box from './box';\nexport default function () {\n  const app = this;\n  app.configure(box);\n  // hatch:services\n}\n"
    );
}

#[test]
fn positional_name_is_used_as_default_and_model_is_created() {
    let temp = TempDir::new().unwrap();
    init(temp.path());

    hatch(temp.path())
        .args([
            "service",
            "person",
            "--type",
            "database",
            "--database",
            "sqlite",
            "--yes",
        ])
        .assert()
        .success();

    assert!(read(temp.path(), "src/services/person/index.js").contains("/people"));
    let model = read(temp.path(), "src/models/person.model.js");
    assert!(model.contains("sequelize.define('people'"));
}

#[test]
fn answers_are_remembered_for_the_next_run() {
    let temp = TempDir::new().unwrap();
    init(temp.path());

    hatch(temp.path())
        .args([
            "service",
            "--type",
            "database",
            "--database",
            "mongodb",
            "--name",
            "users",
            "--yes",
        ])
        .assert()
        .success();

    let saved: toml::Table = toml::from_str(&read(temp.path(), ".hatch.toml")).unwrap();
    assert_eq!(saved["defaults"]["service_type"].as_str(), Some("database"));
    assert_eq!(saved["defaults"]["database"].as_str(), Some("mongodb"));
    assert_eq!(saved["defaults"]["name"].as_str(), Some("users"));
    assert_eq!(saved["layout"]["services_dir"].as_str(), Some("src/services"));

    hatch(temp.path())
        .args(["service", "--name", "orders", "--yes"])
        .assert()
        .success();

    assert!(temp.path().join("src/models/orders.model.js").exists());
    let registry = read(temp.path(), "src/services/index.js");
    assert!(registry.contains("import users from './users';"));
    assert!(registry.contains("import orders from './orders';"));
    assert!(registry.find("app.configure(users);") < registry.find("app.configure(orders);"));
}

#[test]
fn dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();

    hatch(temp.path())
        .args(["service", "--type", "generic", "--name", "box", "--yes", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("index.js"));

    assert!(!temp.path().join("src").exists());
    assert!(!temp.path().join(".hatch.toml").exists());
}

#[test]
fn existing_service_needs_force() {
    let temp = TempDir::new().unwrap();
    init(temp.path());
    let args = ["service", "--type", "generic", "--name", "box", "--yes"];

    hatch(temp.path()).args(args).assert().success();
    hatch(temp.path())
        .args(args)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    hatch(temp.path()).args(args).arg("--force").assert().success();

    let registry = read(temp.path(), "src/services/index.js");
    assert_eq!(registry.matches("import box from './box';").count(), 1);
    assert_eq!(registry.matches("app.configure(box);").count(), 1);
}

#[test]
fn failed_run_keeps_remembered_answers() {
    let temp = TempDir::new().unwrap();
    hatch(temp.path())
        .args(["service", "--type", "database", "--database", "nedb"])
        .args(["--name", "tasks", "--yes"])
        .assert()
        .success();

    hatch(temp.path())
        .args(["service", "--type", "generic", "--name", "tasks", "--yes"])
        .assert()
        .code(2);

    let saved: toml::Table = toml::from_str(&read(temp.path(), ".hatch.toml")).unwrap();
    assert_eq!(saved["defaults"]["service_type"].as_str(), Some("database"));
    assert_eq!(saved["defaults"]["database"].as_str(), Some("nedb"));
}

#[test]
fn missing_registry_is_reported_in_json() {
    let temp = TempDir::new().unwrap();

    let assert = hatch(temp.path())
        .args([
            "--output-format",
            "json",
            "service",
            "--type",
            "generic",
            "--name",
            "box",
            "--yes",
        ])
        .assert()
        .success();

    let report: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["service"], "box");
    assert_eq!(report["template"], "generic");
    assert_eq!(report["registry"], "missing");
    assert!(report["model"].is_null());
    assert!(!temp.path().join("src/services/index.js").exists());
}

#[test]
fn project_dir_flag_targets_another_directory() {
    let temp = TempDir::new().unwrap();
    let app = temp.path().join("app");
    fs::create_dir(&app).unwrap();

    hatch(temp.path())
        .args(["service", "--type", "database", "--database", "nedb"])
        .args(["--name", "tasks", "--yes", "--project-dir", "app"])
        .assert()
        .success();

    assert!(app.join("src/services/tasks/index.js").exists());
    assert!(app.join(".hatch.toml").exists());
}

#[test]
fn templates_as_json() {
    let temp = TempDir::new().unwrap();
    let assert = hatch(temp.path())
        .args(["templates", "--format", "json"])
        .assert()
        .success();

    let list: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let kinds: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["kind"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, ["generic", "memory", "nedb", "mongoose", "sequelize"]);
}

#[test]
fn templates_as_list() {
    let temp = TempDir::new().unwrap();
    hatch(temp.path())
        .args(["templates", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mongoose\n"));
}

#[test]
fn templates_dir_overrides_builtin() {
    let temp = TempDir::new().unwrap();
    let custom = temp.path().join("templates/generic");
    fs::create_dir_all(&custom).unwrap();
    fs::write(custom.join("template.toml"), "[template]\nkind = \"generic\"\n").unwrap();
    fs::write(custom.join("index.js"), "// custom {{NAME}} service\n").unwrap();

    hatch(temp.path())
        .env("HATCH_TEMPLATES_DIR", temp.path().join("templates"))
        .args(["service", "--type", "generic", "--name", "box", "--yes"])
        .assert()
        .success();

    assert_eq!(
        read(temp.path(), "src/services/box/index.js"),
        "// custom box service\n"
    );
}

#[test]
fn config_set_then_get() {
    let temp = TempDir::new().unwrap();

    hatch(temp.path())
        .args(["config", "set", "defaults.database", "mongo"])
        .assert()
        .success();

    hatch(temp.path())
        .args(["config", "get", "defaults.database"])
        .assert()
        .success()
        .stdout("mongodb\n");
}

#[test]
fn layout_from_config_moves_services() {
    let temp = TempDir::new().unwrap();
    hatch(temp.path())
        .args(["config", "set", "layout.services_dir", "app/services"])
        .assert()
        .success();

    hatch(temp.path())
        .args(["service", "--type", "generic", "--name", "box", "--yes"])
        .assert()
        .success();

    assert!(temp.path().join("app/services/box/index.js").exists());
}

#[test]
fn completions_for_bash() {
    let temp = TempDir::new().unwrap();
    hatch(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hatch"));
}
