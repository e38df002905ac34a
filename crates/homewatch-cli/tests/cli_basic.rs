//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. Network-bound
//! subcommands (`run`, `send`) are covered by the core integration tests
//! against mock servers; here we exercise the offline surface.

use std::process::Command;

const CREDENTIAL_VARS: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

/// Run a CLI command and return output.
fn run_cli(args: &[&str], envs: &[(&str, &str)]) -> (String, String, i32) {
    let mut command = Command::new("cargo");
    command
        .args(["run", "-p", "homewatch-cli", "--"])
        .args(args);
    for var in CREDENTIAL_VARS {
        command.env_remove(var);
    }
    for (key, value) in envs {
        command.env(key, value);
    }

    let output = command.output().expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_help() {
    let (stdout, _, code) = run_cli(&["--help"], &[]);
    assert_eq!(code, 0, "help failed");
    assert!(stdout.contains("Homework review status notifier"));
    assert!(stdout.contains("run"));
    assert!(stdout.contains("check"));
}

#[test]
fn test_check_fails_without_credentials() {
    let (_, stderr, code) = run_cli(&["check"], &[]);
    assert!(code != 0, "check unexpectedly succeeded without credentials");
    assert!(stderr.contains("error:"));
    assert!(stderr.contains("PRACTICUM_TOKEN"));
}

#[test]
fn test_check_passes_with_credentials() {
    let envs = [
        ("PRACTICUM_TOKEN", "practicum-token"),
        ("TELEGRAM_TOKEN", "telegram-token"),
        ("TELEGRAM_CHAT_ID", "424242"),
    ];
    let (stdout, stderr, code) = run_cli(&["check"], &envs);
    assert_eq!(code, 0, "check failed: {stderr}");
    assert!(stdout.contains("endpoint:"));
    assert!(stdout.contains("credentials: all present"));
}

#[test]
fn test_config_show() {
    let (stdout, _, code) = run_cli(&["config", "show"], &[]);
    assert_eq!(code, 0, "config show failed");
    assert!(stdout.contains("endpoint"));
    assert!(stdout.contains("poll_interval_secs"));
}

#[test]
fn test_config_path() {
    let (stdout, _, code) = run_cli(&["config", "path"], &[]);
    assert_eq!(code, 0, "config path failed");
    assert!(stdout.trim().ends_with("config.toml"));
}

#[test]
fn test_completions_bash() {
    let (stdout, _, code) = run_cli(&["completions", "bash"], &[]);
    assert_eq!(code, 0, "completions failed");
    assert!(!stdout.is_empty());
}
