//! Shared fixtures and helpers for CLI integration tests

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// A session with a transcript, metrics, and a (dangling) audio locator.
pub const SAMPLE_SESSION: &str = r#"{
    "id": "4f2c6f1e-97b3-4a3c-8e0d-1bb1bfa4c2a5",
    "created_at": "2025-03-14T09:26:53.589793",
    "transcript": [
        {"role": "user", "content": "hello there", "timestamp": 100.0, "latency": 0.0},
        {"role": "assistant", "content": "hi, how can I help?", "timestamp": 102.5, "latency": 1.2},
        {"role": "user", "content": "what time is it", "timestamp": 110.0, "latency": 0.0},
        {"role": "assistant", "content": "time to get a watch", "timestamp": 111.8, "latency": 0.85}
    ],
    "freeze_events": [
        {"start_time": 104.0, "end_time": 106.0, "duration": 2.0}
    ],
    "latency_metrics": {"average_latency": 1.2},
    "audio_url": "/recordings/4f2c6f1e-97b3-4a3c-8e0d-1bb1bfa4c2a5.wav"
}"#;

/// A session without an audio recording.
pub const SESSION_NO_AUDIO: &str = r#"{
    "id": "9a1b2c3d-0000-4000-8000-123456789abc",
    "created_at": "2025-03-15T11:00:00Z",
    "transcript": [
        {"role": "user", "content": "anyone home?", "timestamp": 50.0, "latency": 0.0}
    ],
    "freeze_events": [],
    "latency_metrics": {}
}"#;

/// Write a session file into `dir` and return its path.
pub fn write_session(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write session fixture");
    path
}

/// Create a temp dir holding one session file.
pub fn temp_session(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_session(dir.path(), "session.json", content);
    (dir, path)
}

/// Run the vsp CLI and capture output.
pub fn run_vsp(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_vsp"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute vsp");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}
