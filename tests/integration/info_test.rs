//! Integration tests for the info command (CLI)

use crate::helpers::{run_vsp, temp_session, SAMPLE_SESSION, SESSION_NO_AUDIO};

#[test]
fn info_prints_session_summary() {
    let (_dir, path) = temp_session(SAMPLE_SESSION);
    let (stdout, _stderr, exit_code) = run_vsp(&["info", path.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("4f2c6f1e-97b3-4a3c-8e0d-1bb1bfa4c2a5"));
    assert!(stdout.contains("4 (2 user / 2 assistant)"));
    assert!(stdout.contains("avg 1.20s"), "stdout was: {stdout}");
}

#[test]
fn info_lists_latency_events_with_two_decimals() {
    let (_dir, path) = temp_session(SAMPLE_SESSION);
    let (stdout, _stderr, _) = run_vsp(&["info", path.to_str().unwrap()]);

    // assistant turns at +2.5s and +11.8s from recording start
    assert!(stdout.contains("Latency events:"));
    assert!(stdout.contains("0:02  +1.20s"), "stdout was: {stdout}");
    assert!(stdout.contains("0:11  +0.85s"), "stdout was: {stdout}");
}

#[test]
fn info_lists_freeze_events() {
    let (_dir, path) = temp_session(SAMPLE_SESSION);
    let (stdout, _stderr, _) = run_vsp(&["info", path.to_str().unwrap()]);

    assert!(stdout.contains("Freeze events:"));
    assert!(stdout.contains("0:04  2.00s frozen"), "stdout was: {stdout}");
}

#[test]
fn info_reports_missing_recording() {
    let (_dir, path) = temp_session(SESSION_NO_AUDIO);
    let (stdout, _stderr, exit_code) = run_vsp(&["info", path.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("none (no recording available)"));
}

#[test]
fn info_resolves_audio_against_media_root() {
    let (_dir, path) = temp_session(SAMPLE_SESSION);
    let (stdout, _stderr, _) = run_vsp(&[
        "info",
        path.to_str().unwrap(),
        "--media-root",
        "/srv/media",
    ]);

    assert!(stdout.contains("/srv/media/recordings/"), "stdout was: {stdout}");
}

#[test]
fn info_fails_on_missing_file() {
    let (_stdout, stderr, exit_code) = run_vsp(&["info", "/nonexistent/session.json"]);

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("not found"), "stderr was: {stderr}");
}
