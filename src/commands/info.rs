//! Info command handler.
//!
//! Prints a session summary without starting playback: turn counts,
//! latency metrics, latency events, freeze events, and the audio locator.

use std::path::Path;

use anyhow::Result;

use vsp::player::render::format_time;
use vsp::player::recording_start;
use vsp::session::{resolve_audio_source, AudioSource};
use vsp::{Role, Session};

/// Show a session summary.
pub fn handle_info(session_path: &Path, media_root: Option<&Path>) -> Result<()> {
    let session = Session::load(session_path)?;

    println!("Session:  {}", session.id);
    println!(
        "Recorded: {}",
        session.created_at.format("%Y-%m-%d %H:%M UTC")
    );
    println!(
        "Turns:    {} ({} user / {} assistant)",
        session.transcript.len(),
        session.turn_count(Role::User),
        session.turn_count(Role::Assistant),
    );

    if let Some(avg) = session.average_latency() {
        println!("Latency:  avg {:.2}s", avg);
    }

    let audio = match resolve_audio_source(
        session_path,
        media_root,
        session.audio_url.as_deref(),
    ) {
        None => "none (no recording available)".to_string(),
        Some(AudioSource::Remote(url)) => format!("remote: {url}"),
        Some(AudioSource::Local(path)) => {
            let note = if path.is_file() { "" } else { " (missing)" };
            format!("{}{note}", path.display())
        }
    };
    println!("Audio:    {audio}");

    let start = recording_start(&session.transcript);
    let events: Vec<_> = session
        .transcript
        .iter()
        .filter(|t| t.role == Role::Assistant && t.latency > 0.0)
        .collect();
    if !events.is_empty() {
        println!();
        println!("Latency events:");
        for turn in events {
            let offset = (turn.timestamp - start).max(0.0);
            println!("  {:>6}  +{:.2}s", format_time(offset), turn.latency);
        }
    }

    if !session.freeze_events.is_empty() {
        println!();
        println!("Freeze events:");
        for freeze in &session.freeze_events {
            let offset = (freeze.start_time - start).max(0.0);
            println!("  {:>6}  {:.2}s frozen", format_time(offset), freeze.duration);
        }
    }

    Ok(())
}
