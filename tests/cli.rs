use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary config directory
fn temp_config_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get the preferences file path in the temp dir
fn preferences_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("preferences.json")
}

const BINARY_NAME: &str = "storefront-admin";
const HOME_OVERRIDE_ENV: &str = "STOREFRONT_ADMIN_HOME";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"));
}

#[test]
/// Start help should list the viewport override.
fn start_help_lists_width_override() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["start", "--help"]);
    cmd.assert()
        .success()
        .stdout(contains("--width-px"))
        .stdout(contains("--no-live-updates"));
}

#[test]
/// Reset command should delete an existing preferences file.
fn reset_preferences_deletes_file() {
    let tmp = temp_config_dir();
    let path = preferences_file_path(&tmp);
    fs::write(&path, r#"{"sidebarCollapsed":"true"}"#).unwrap();
    assert!(path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("reset-preferences")
        .env(HOME_OVERRIDE_ENV, tmp.path())
        .assert()
        .success()
        .stdout(contains("Clearing stored dashboard preferences"));

    assert!(!path.exists());
}

#[test]
/// Reset command should succeed when nothing was ever stored.
fn reset_preferences_without_file_succeeds() {
    let tmp = temp_config_dir();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("reset-preferences")
        .env(HOME_OVERRIDE_ENV, tmp.path())
        .assert()
        .success();

    assert!(!preferences_file_path(&tmp).exists());
}
