//! Integration tests for the mlforge binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mlforge() -> Command {
    Command::cargo_bin("mlforge").unwrap()
}

#[test]
fn help_flag_describes_the_tool() {
    mlforge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("mlforge"))
        .stdout(predicate::str::contains("NAME"));
}

#[test]
fn version_flag_matches_cargo() {
    mlforge()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn scaffold_creates_full_project() {
    let temp = TempDir::new().unwrap();

    mlforge()
        .current_dir(temp.path())
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("demo"))
        .stdout(predicate::str::contains("created successfully"));

    let root = temp.path().join("demo");

    // Spot-check the directory tree, including empty leaves.
    for dir in [
        "data/raw",
        "data/processed",
        "data/interim",
        "data/external",
        "notebooks",
        "src/data",
        "src/features",
        "src/models",
        "src/visualization",
        "src/utils",
        "models",
        "reports/figures",
        "tests",
        "config",
        "docs",
    ] {
        assert!(root.join(dir).is_dir(), "missing directory {dir}");
    }

    // Parameterized packaging descriptor.
    let setup = std::fs::read_to_string(root.join("setup.py")).unwrap();
    assert!(setup.contains("name='demo'"));

    // Static YAML configuration.
    let config = std::fs::read_to_string(root.join("config/config.yaml")).unwrap();
    assert!(config.contains("model:"));
    assert!(config.contains("type: \"random_forest\""));

    // Stub sources and tests.
    assert!(root.join("src/models/train.py").is_file());
    assert!(root.join("tests/test_models.py").is_file());
    assert!(root.join("notebooks/01_exploration.ipynb").is_file());
}

#[test]
fn scaffold_without_name_uses_default() {
    let temp = TempDir::new().unwrap();

    mlforge()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ml_project"));

    assert!(temp.path().join("ml_project/data/raw").is_dir());
    let setup = std::fs::read_to_string(temp.path().join("ml_project/setup.py")).unwrap();
    assert!(setup.contains("name='ml_project'"));
}

#[test]
fn scaffold_twice_is_idempotent() {
    let temp = TempDir::new().unwrap();

    mlforge().current_dir(temp.path()).arg("demo").assert().success();
    let readme_first =
        std::fs::read_to_string(temp.path().join("demo/README.md")).unwrap();

    mlforge().current_dir(temp.path()).arg("demo").assert().success();
    let readme_second =
        std::fs::read_to_string(temp.path().join("demo/README.md")).unwrap();

    assert_eq!(readme_first, readme_second);
}

#[test]
fn quiet_flag_silences_stdout() {
    let temp = TempDir::new().unwrap();

    mlforge()
        .current_dir(temp.path())
        .args(["-q", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp.path().join("demo/README.md").is_file());
}

#[test]
fn verbose_flag_logs_progress_to_stderr() {
    let temp = TempDir::new().unwrap();

    mlforge()
        .current_dir(temp.path())
        .args(["-v", "demo"])
        .assert()
        .success()
        .stderr(predicate::str::contains("INFO"));
}

#[test]
fn quiet_and_verbose_together_is_a_parse_error() {
    mlforge()
        .args(["-q", "-v", "demo"])
        .assert()
        .failure()
        .code(2);
}
