//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. Only
//! commands that work without the remote store are exercised here; the
//! store client itself is tested against a mock server in habitly-core.

use std::process::Command;

/// Run a CLI command against the dev data directory and return output.
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "habitly-cli", "--"])
        .args(args)
        .env("HABITLY_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_help_lists_subcommands() {
    let (stdout, _, code) = run_cli(&["--help"]);
    assert_eq!(code, 0, "--help failed");
    for subcommand in ["habit", "browse", "stats", "auth", "config"] {
        assert!(stdout.contains(subcommand), "missing '{subcommand}' in help");
    }
}

#[test]
fn test_config_set_then_get() {
    let (_, _, code) = run_cli(&["config", "set", "ui.dark_mode", "true"]);
    assert_eq!(code, 0, "config set failed");

    let (stdout, _, code) = run_cli(&["config", "get", "ui.dark_mode"]);
    assert_eq!(code, 0, "config get failed");
    assert_eq!(stdout.trim(), "true");
}

#[test]
fn test_config_get_unknown_key_fails() {
    let (_, stderr, code) = run_cli(&["config", "get", "api.nope"]);
    assert_ne!(code, 0, "unknown key should fail");
    assert!(stderr.contains("unknown key"));
}

#[test]
fn test_config_list() {
    let (stdout, _, code) = run_cli(&["config", "list"]);
    assert_eq!(code, 0, "config list failed");
    assert!(stdout.contains("base_url"));
}

#[test]
fn test_config_reset() {
    let (stdout, _, code) = run_cli(&["config", "reset"]);
    assert_eq!(code, 0, "config reset failed");
    assert!(stdout.contains("reset"));
}

#[test]
fn test_auth_status_works_without_session() {
    let (_, _, code) = run_cli(&["auth", "status"]);
    assert_eq!(code, 0, "auth status failed");
}

#[test]
fn test_done_rejects_malformed_date() {
    let (_, stderr, code) = run_cli(&["habit", "done", "some-id", "--date", "tomorrow"]);
    assert_ne!(code, 0, "malformed date should fail");
    assert!(stderr.contains("Invalid date"));
}

#[test]
fn test_update_with_no_fields_is_a_noop() {
    let (stdout, _, code) = run_cli(&["habit", "update", "some-id"]);
    assert_eq!(code, 0, "empty update should succeed without the store");
    assert!(stdout.contains("Nothing to update"));
}

#[test]
fn test_unknown_subcommand_fails() {
    let (_, _, code) = run_cli(&["frobnicate"]);
    assert_ne!(code, 0, "unknown subcommand should fail");
}
