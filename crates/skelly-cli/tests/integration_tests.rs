use std::fs;
use std::path::Path;

use assert_cmd::{Command, cargo};
use predicates::prelude::*;
use tempfile::TempDir;

/// A `skelly` invocation isolated from the user's config and terminal.
fn skelly(home: &Path) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("skelly");
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help() {
    let temp = TempDir::new().unwrap();
    skelly(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("new"));
}

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    skelly(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_new_layered_express() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("projects");

    skelly(temp.path())
        .args(["new", "shop", "--backend", "express", "--arch", "layered"])
        .args(["--backend-lib", "cors", "--skip-install", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Project 'shop' created"))
        .stdout(predicate::str::contains("Next steps:"));

    let root = out.join("shop");
    for folder in ["api/routes", "services", "repositories", "models"] {
        let folder = format!("server/src/{folder}");
        assert!(root.join(&folder).join(".gitkeep").is_file(), "missing {folder}");
    }
    let package = fs::read_to_string(root.join("server/package.json")).unwrap();
    let package: serde_json::Value = serde_json::from_str(&package).unwrap();
    assert_eq!(package["name"], "shop-server");
    assert_eq!(package["dependencies"]["cors"], "latest");
}

#[test]
fn test_new_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();

    skelly(temp.path())
        .args(["new", "shop", "-b", "django", "-a", "layered", "--dry-run", "--output", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("server/src/api/controllers"));

    assert!(!temp.path().join("shop").exists());
}

#[test]
fn test_new_custom_folders() {
    let temp = TempDir::new().unwrap();

    skelly(temp.path())
        .args(["new", "tool", "-b", "django", "-a", "custom"])
        .args(["--folders", "api,core/models", "--skip-install"])
        .assert()
        .success();

    let root = temp.path().join("tool");
    assert!(root.join("api/.gitkeep").is_file());
    assert!(root.join("core/models/.gitkeep").is_file());
    assert!(root.join("server/requirements.txt").is_file());
}

#[test]
fn test_new_json_report() {
    let temp = TempDir::new().unwrap();

    let assert = skelly(temp.path())
        .args(["--output-format", "json", "new", "shop", "-b", "java", "-a", "hex"])
        .arg("--dry-run")
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["outcome"]["mode"], "preview");
    let folders = report["outcome"]["folders"].as_array().unwrap();
    assert_eq!(folders.len(), 13);
    assert_eq!(folders[0], "server/src/main/java/com/example/shop/inbound/dto");
    assert!(report["issues"].as_array().unwrap().is_empty());
}

#[test]
fn test_new_uses_config_defaults() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("skelly.toml");
    fs::write(
        &config,
        "[defaults]\nbackend = \"django\"\narchitecture = \"hexagonal\"\n",
    )
    .unwrap();

    skelly(temp.path())
        .arg("--config")
        .arg(&config)
        .args(["new", "site", "--skip-install"])
        .assert()
        .success();

    let root = temp.path().join("site");
    assert!(root.join("server/requirements.txt").is_file());
    assert!(root.join("server/src/domain/service/.gitkeep").is_file());
}

#[test]
fn test_local_config_file_is_picked_up() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".skelly.toml"),
        "[defaults]\nbackend = \"express\"\n",
    )
    .unwrap();

    skelly(temp.path())
        .args(["config", "get", "defaults.backend"])
        .assert()
        .success()
        .stdout(predicate::str::contains("express"));
}

#[test]
fn test_environment_overrides_config() {
    let temp = TempDir::new().unwrap();

    skelly(temp.path())
        .env("SKELLY_DEFAULTS__ARCHITECTURE", "hexagonal")
        .args(["config", "get", "defaults.architecture"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hexagonal"));
}

#[test]
fn test_template_override_dir() {
    let temp = TempDir::new().unwrap();
    let templates = temp.path().join("templates/java_spring");
    fs::create_dir_all(&templates).unwrap();
    fs::write(templates.join("pom.xml"), "<project>{{ project_name }}</project>\n").unwrap();

    skelly(temp.path())
        .args(["new", "shop", "-b", "java", "-a", "layered", "--skip-install"])
        .args(["--templates", "templates"])
        .assert()
        .success();

    let pom = fs::read_to_string(temp.path().join("shop/server/pom.xml")).unwrap();
    assert_eq!(pom, "<project>shop</project>\n");
}

#[test]
fn test_list_json() {
    let temp = TempDir::new().unwrap();

    let assert = skelly(temp.path())
        .args(["list", "stacks", "--format", "json"])
        .assert()
        .success();

    let stacks: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let text = stacks.to_string();
    assert!(text.contains("express"));
    assert!(text.contains("react"));
}

#[test]
fn test_list_architectures_table() {
    let temp = TempDir::new().unwrap();

    skelly(temp.path())
        .args(["list", "architectures"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hexagonal"));
}

#[test]
fn test_init_local_then_refuse_overwrite() {
    let temp = TempDir::new().unwrap();

    skelly(temp.path())
        .args(["init", "--local"])
        .assert()
        .success();
    let written = fs::read_to_string(temp.path().join(".skelly.toml")).unwrap();
    assert!(written.contains("[defaults]"));

    skelly(temp.path())
        .args(["init", "--local"])
        .assert()
        .success()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn test_completions() {
    let temp = TempDir::new().unwrap();

    skelly(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skelly"));
}
