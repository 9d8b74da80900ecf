//! Integration tests for the pokedex binary
//!
//! Drives the built executable through flags and piped stdin. None of these
//! reach the real catalog API.

use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Helper to run the binary with given args and stdin, capturing output
fn run_pokedex(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_pokedex"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute pokedex");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for pokedex")
}

/// Base URL with nothing listening behind it
const DEAD_UPSTREAM: &str = "http://127.0.0.1:9/api/v2";

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_pokedex(&["--help"], "");
    assert!(output.status.success(), "Expected --help to exit successfully");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("pokedex"));
    assert!(stdout.contains("--reap-interval"));
    assert!(stdout.contains("--max-age"));
}

#[test]
fn test_zero_reap_interval_is_rejected() {
    let output = run_pokedex(&["--reap-interval", "0"], "");
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("reap interval must be greater than zero"), "stderr: {}", stderr);
}

#[test]
fn test_help_then_exit_session() {
    let output = run_pokedex(&["--base-url", DEAD_UPSTREAM], "help\nexit\n");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Pokedex > "));
    assert!(stdout.contains("Welcome to the Pokedex!"));
    assert!(stdout.contains("Closing the Pokedex... Goodbye!"));
}

#[test]
fn test_failed_command_does_not_end_session() {
    let output = run_pokedex(
        &["--base-url", DEAD_UPSTREAM, "--timeout", "2"],
        "explore somewhere\nteleport\npokedex\n",
    );
    assert!(output.status.success(), "End of input should exit cleanly");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Error: request to"), "stdout: {}", stdout);
    assert!(stdout.contains("Unknown command"));
    assert!(stdout.contains("Your Pokedex is empty"));
}
