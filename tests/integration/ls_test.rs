//! Integration tests for the ls command (CLI)

use std::fs;

use tempfile::TempDir;

use crate::helpers::{run_vsp, write_session, SAMPLE_SESSION, SESSION_NO_AUDIO};

#[test]
fn ls_lists_sessions_in_directory() {
    let dir = TempDir::new().unwrap();
    write_session(dir.path(), "a.json", SAMPLE_SESSION);
    write_session(dir.path(), "b.json", SESSION_NO_AUDIO);

    let (stdout, _stderr, exit_code) = run_vsp(&["ls", dir.path().to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("4f2c6f1e"));
    assert!(stdout.contains("9a1b2c3d"));
    assert!(stdout.contains("a.json"));
    assert!(stdout.contains("b.json"));
}

#[test]
fn ls_skips_files_that_are_not_sessions() {
    let dir = TempDir::new().unwrap();
    write_session(dir.path(), "good.json", SAMPLE_SESSION);
    fs::write(dir.path().join("junk.json"), "{\"not\": \"a session\"}").unwrap();
    fs::write(dir.path().join("notes.txt"), "not json at all").unwrap();

    let (stdout, _stderr, exit_code) = run_vsp(&["ls", dir.path().to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("good.json"));
    assert!(!stdout.contains("junk.json"));
    assert!(!stdout.contains("notes.txt"));
}

#[test]
fn ls_reports_empty_directory() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_vsp(&["ls", dir.path().to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("No session files"));
}

#[test]
fn ls_fails_on_missing_directory() {
    let (_stdout, stderr, exit_code) = run_vsp(&["ls", "/nonexistent/sessions"]);

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("Failed to read directory"), "stderr was: {stderr}");
}
