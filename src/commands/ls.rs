//! Ls command handler.
//!
//! Lists session files in a directory as a table. Files that are not
//! parseable session records are skipped quietly.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use humansize::{format_size, DECIMAL};

use vsp::Session;

/// One table row: the session plus where it came from.
struct Entry {
    session: Session,
    path: PathBuf,
    size: u64,
}

/// List the session files found in `dir`, newest first.
pub fn handle_ls(dir: &Path) -> Result<()> {
    let mut entries = collect_sessions(dir)?;

    if entries.is_empty() {
        println!("No session files in {}", dir.display());
        return Ok(());
    }

    entries.sort_by(|a, b| b.session.created_at.cmp(&a.session.created_at));

    println!(
        "{:<10} {:<17} {:>5} {:>8} {:>9}  {}",
        "ID", "RECORDED", "TURNS", "AVG LAT", "SIZE", "FILE"
    );
    for entry in &entries {
        let avg = entry
            .session
            .average_latency()
            .map(|v| format!("{v:.2}s"))
            .unwrap_or_else(|| "-".to_string());
        let name = entry
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!(
            "{:<10} {:<17} {:>5} {:>8} {:>9}  {}",
            short_id(&entry.session.id),
            entry.session.created_at.format("%Y-%m-%d %H:%M"),
            entry.session.transcript.len(),
            avg,
            format_size(entry.size, DECIMAL),
            name,
        );
    }

    Ok(())
}

fn collect_sessions(dir: &Path) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();
    let reader =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    for dir_entry in reader {
        let dir_entry = dir_entry?;
        let path = dir_entry.path();
        if path.extension().map(|e| e != "json").unwrap_or(true) {
            continue;
        }
        match Session::load(&path) {
            Ok(session) => {
                let size = dir_entry.metadata().map(|m| m.len()).unwrap_or(0);
                entries.push(Entry {
                    session,
                    path,
                    size,
                });
            }
            Err(e) => {
                tracing::debug!(path = %path.display(), "skipping non-session file: {e}");
            }
        }
    }

    Ok(entries)
}

/// First ID segment, enough to be recognizable in a table.
fn short_id(id: &str) -> String {
    id.split('-').next().unwrap_or(id).chars().take(8).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_id_takes_first_uuid_segment() {
        assert_eq!(short_id("4f2c6f1e-97b3-4a3c"), "4f2c6f1e");
    }

    #[test]
    fn short_id_truncates_plain_ids() {
        assert_eq!(short_id("averylongsessionid"), "averylon");
        assert_eq!(short_id("abc"), "abc");
    }
}
