use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn troubleshooter(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("macos-troubleshooter").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn test_cli_help() {
    let home = TempDir::new().unwrap();
    troubleshooter(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("A comprehensive system diagnostic and repair tool"))
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--list-commands"));
}

#[test]
fn test_no_flags_shows_help() {
    let home = TempDir::new().unwrap();
    troubleshooter(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version() {
    let home = TempDir::new().unwrap();
    troubleshooter(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("MacOS Troubleshooter v1.0.0"));
}

#[test]
fn test_list_commands() {
    let home = TempDir::new().unwrap();
    troubleshooter(&home)
        .arg("-l")
        .assert()
        .success()
        .stdout(predicate::str::contains("disk_space: Disk space usage"))
        .stdout(predicate::str::contains("clear_dns_cache: Clear DNS cache (requires sudo)"));
}

#[test]
fn test_first_run_creates_config_and_log() {
    let home = TempDir::new().unwrap();
    troubleshooter(&home).arg("--version").assert().success();

    let base = home.path().join(".macos_troubleshooter");
    let config = fs::read_to_string(base.join("config.toml")).unwrap();
    assert!(config.contains("safe_mode = true"));
    assert!(config.contains("auto_clear_logs = 30"));

    let logs: Vec<_> = fs::read_dir(base.join("logs")).unwrap().collect();
    assert_eq!(logs.len(), 1);
}

#[test]
fn test_unknown_command_exits_zero() {
    let home = TempDir::new().unwrap();
    troubleshooter(&home)
        .args(["--custom", "nonexistent_xyz"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Command 'nonexistent_xyz' not found"));
}

#[test]
fn test_elevated_command_denied_in_safe_mode() {
    let home = TempDir::new().unwrap();
    troubleshooter(&home)
        .args(["--custom", "clear_dns_cache"])
        .assert()
        .success()
        .stderr(predicate::str::contains("requires sudo privileges"))
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn test_manual_instruction() {
    let home = TempDir::new().unwrap();
    troubleshooter(&home)
        .args(["-c", "clear_nvram", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Command+Option+P+R"));
}

#[test]
fn test_custom_command_runs_and_logs() {
    let home = TempDir::new().unwrap();
    troubleshooter(&home)
        .args(["--custom", "disk_space", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Disk space usage"))
        .stdout(predicate::str::contains("Command completed in"));

    let logs_dir = home.path().join(".macos_troubleshooter").join("logs");
    let log_path = fs::read_dir(&logs_dir).unwrap().next().unwrap().unwrap().path();
    let log = fs::read_to_string(log_path).unwrap();
    assert!(log.contains("[INFO]: Ran command: disk_space (took"));
    assert!(log.contains("[INFO]: Output: "));
}

#[test]
fn test_custom_output_has_no_blank_trailing_line() {
    let home = TempDir::new().unwrap();
    let assert = troubleshooter(&home)
        .args(["--custom", "disk_space"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("Filesystem"));
    assert!(stdout.ends_with('\n'));
    assert!(!stdout.ends_with("\n\n"));
}

#[test]
fn test_quiet_suppresses_output() {
    let home = TempDir::new().unwrap();
    troubleshooter(&home)
        .args(["--custom", "disk_space", "--quiet", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_broken_config_falls_back_to_safe_mode() {
    let home = TempDir::new().unwrap();
    let base = home.path().join(".macos_troubleshooter");
    fs::create_dir_all(&base).unwrap();
    fs::write(base.join("config.toml"), "safe_mode = [not toml").unwrap();

    troubleshooter(&home)
        .args(["--custom", "clear_dns_cache"])
        .assert()
        .success()
        .stderr(predicate::str::contains("requires sudo privileges"));

    let logs_dir = base.join("logs");
    let log_path = fs::read_dir(&logs_dir).unwrap().next().unwrap().unwrap().path();
    let log = fs::read_to_string(log_path).unwrap();
    assert!(log.contains("[ERROR]: Failed to load config"));
}
