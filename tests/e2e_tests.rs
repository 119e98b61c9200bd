//! End-to-end tests for vprops CLI
//!
//! These tests verify:
//! - Dry-run mode leaves files unchanged
//! - CLI produces correct JSON output schema
//! - Exit codes are correct for various scenarios

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const PROPS: &str = "# comment
org.slf4j:slf4j-api = 1.7.15 # bar
com.foo.bar:qux = 1.2
org.slf4j:* = 1.7.12
";

const CORE_REPORT: &str = "project: \":core\"
dependencyUpdates:
  - group: org.slf4j
    name: slf4j-api
    currentVersion: 1.7.15
    latestVersion: 1.7.26
  - group: org.slf4j
    name: none
    latestVersion: 1.7.24
";

fn write_report(root: &Path, project: &str, content: &str) {
    let dir = root
        .join(project)
        .join("build")
        .join("com.markelliot.versions");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("report.yml"), content).unwrap();
}

/// Create a test project with a versions file and one report
fn create_test_project() -> TempDir {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    fs::write(temp_dir.path().join("versions.props"), PROPS).unwrap();
    write_report(temp_dir.path(), "core", CORE_REPORT);
    temp_dir
}

fn vprops() -> Command {
    let mut cmd = Command::cargo_bin("vprops").unwrap();
    cmd.env_remove("VPROPS_LOG");
    cmd
}

fn read_props(dir: &TempDir) -> String {
    fs::read_to_string(dir.path().join("versions.props")).unwrap()
}

#[test]
fn test_updates_versions_file() {
    let temp_dir = create_test_project();

    vprops()
        .arg(temp_dir.path())
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 line(s) updated"));

    assert_eq!(
        read_props(&temp_dir),
        "# comment
org.slf4j:slf4j-api = 1.7.26 # bar
com.foo.bar:qux = 1.2
org.slf4j:* = 1.7.24
"
    );
}

#[test]
fn test_dry_run_leaves_file_unchanged() {
    let temp_dir = create_test_project();

    vprops()
        .arg(temp_dir.path())
        .arg("--dry-run")
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("(dry-run)"));

    assert_eq!(read_props(&temp_dir), PROPS);
}

#[test]
fn test_json_output_schema() {
    let temp_dir = create_test_project();

    let output = vprops()
        .arg(temp_dir.path())
        .args(["--json", "--dry-run"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["dryRun"], true);
    assert_eq!(json["written"], false);
    assert_eq!(json["summary"]["updates"], 2);
    assert_eq!(json["updates"][0]["dependency"], "org.slf4j:slf4j-api");
    assert_eq!(json["updates"][0]["newVersion"], "1.7.26");
    assert_eq!(json["updates"][1]["dependency"], "org.slf4j:*");
}

#[test]
fn test_diff_output() {
    let temp_dir = create_test_project();

    vprops()
        .arg(temp_dir.path())
        .args(["--diff", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-org.slf4j:* = 1.7.12"))
        .stdout(predicate::str::contains("+org.slf4j:* = 1.7.24"));
}

#[test]
fn test_explicit_report_argument() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("versions.props"), PROPS).unwrap();
    let report = temp_dir.path().join("updates.yml");
    fs::write(
        &report,
        "dependencyUpdates:\n  - group: com.foo.bar\n    name: qux\n    latestVersion: \"1.3\"\n",
    )
    .unwrap();

    vprops()
        .arg(temp_dir.path())
        .arg("--report")
        .arg(&report)
        .assert()
        .success();

    assert!(read_props(&temp_dir).contains("com.foo.bar:qux = 1.3"));
}

#[test]
fn test_warnings_exit_code() {
    let temp_dir = create_test_project();
    write_report(
        temp_dir.path(),
        "web",
        "dependencyUpdates:\n  - group: com.google.guava\n    name: guava\n    latestVersion: 31.0-jre\n",
    );

    vprops()
        .arg(temp_dir.path())
        .env("NO_COLOR", "1")
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "no matching pattern for 'com.google.guava:guava'",
        ));

    // Matched lines are still rewritten
    assert!(read_props(&temp_dir).contains("org.slf4j:* = 1.7.24"));
}

#[test]
fn test_conflict_exit_code() {
    let temp_dir = create_test_project();
    write_report(
        temp_dir.path(),
        "web",
        "dependencyUpdates:\n  - group: org.slf4j\n    name: slf4j-api\n    latestVersion: 2.0.0\n",
    );

    vprops().arg(temp_dir.path()).assert().code(2);

    assert!(read_props(&temp_dir).contains("org.slf4j:slf4j-api = 1.7.15 # bar"));
}

#[test]
fn test_malformed_props_fails() {
    let temp_dir = create_test_project();
    fs::write(temp_dir.path().join("versions.props"), "not a valid line\n").unwrap();

    vprops()
        .arg(temp_dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("line 1"));
}

#[test]
fn test_missing_props_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    vprops().arg(temp_dir.path()).assert().code(1);
}

#[test]
fn test_conflicting_options_fail() {
    let temp_dir = create_test_project();

    vprops()
        .arg(temp_dir.path())
        .args(["--json", "--diff"])
        .assert()
        .code(1);
}

#[test]
fn test_up_to_date() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("versions.props"), PROPS).unwrap();

    vprops()
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("All versions are up to date."));
}

#[test]
fn test_markdown_change_log() {
    let temp_dir = create_test_project();
    let changelog = temp_dir.path().join("CHANGES.md");

    vprops()
        .arg(temp_dir.path())
        .arg("--markdown")
        .arg(&changelog)
        .arg("--quiet")
        .assert()
        .success();

    let content = fs::read_to_string(&changelog).unwrap();
    assert!(content.contains("* `org.slf4j:slf4j-api 1.7.15 -> 1.7.26`"));
}
