//! Integration tests for the play command (CLI)
//!
//! The interactive player needs a TTY and an audio device, so these tests
//! exercise the guard rails around it rather than playback itself.

use crate::helpers::{run_vsp, temp_session, SAMPLE_SESSION};

#[test]
fn play_refuses_without_a_tty() {
    let (_dir, path) = temp_session(SAMPLE_SESSION);
    let (_stdout, stderr, exit_code) = run_vsp(&["play", path.to_str().unwrap()]);

    assert_ne!(exit_code, 0);
    assert!(
        stderr.contains("interactive terminal"),
        "stderr was: {stderr}"
    );
}

#[test]
fn play_fails_on_missing_session_file() {
    let (_stdout, stderr, exit_code) = run_vsp(&["play", "/nonexistent/session.json"]);

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("not found"), "stderr was: {stderr}");
}
