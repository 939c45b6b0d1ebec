//! Session loading errors.

use std::path::PathBuf;

/// Errors that can occur while loading a session record.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read session file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse session JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
