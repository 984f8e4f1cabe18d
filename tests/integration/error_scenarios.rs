use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::common::{DescriptorBuilder, TestProject};

#[test]
fn test_missing_descriptor() {
    let temp = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("osgi").unwrap();
    cmd.args(["setup", "--yes", "--project"])
        .arg(temp.path())
        .arg("--config")
        .arg(temp.path().join("config.toml"))
        .env("NO_COLOR", "1")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Project descriptor not found"))
        .stderr(predicate::str::contains("--project"));
}

#[test]
fn test_malformed_descriptor() {
    let project = TestProject::new().unwrap();
    project.write_descriptor("[project\ngroup_id = ").unwrap();

    let output = project.run_osgi(&["show"]).unwrap();
    output
        .assert_failure()
        .assert_stderr_contains("Invalid project descriptor syntax");
}

#[test]
fn test_malformed_global_config() {
    let project = TestProject::with_descriptor(&DescriptorBuilder::new("com.acme", "shop").build()).unwrap();
    project.write_global_config("[versions\n").unwrap();

    project
        .run_osgi(&["setup", "--no-activator"])
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("Configuration error");
}

#[test]
fn test_conflicting_activator_flags() {
    let mut cmd = Command::cargo_bin("osgi").unwrap();
    cmd.args(["setup", "--activator", "--no-activator"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("osgi").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("setup"))
        .stdout(predicate::str::contains("add-service-component"))
        .stdout(predicate::str::contains("install-felix-dm"))
        .stdout(predicate::str::contains("show"));
}
