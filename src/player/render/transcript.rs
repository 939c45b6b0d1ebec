//! Transcript viewport rendering.
//!
//! Shows the conversation as playback advances: turns whose offset has been
//! reached are bright, upcoming turns are dimmed, and the most recently
//! reached turn carries the playhead cursor. Assistant turns annotate their
//! measured response latency.

use std::io::{self, Write};

use anyhow::Result;
use unicode_width::UnicodeWidthChar;

use crate::player::render::progress::format_time;
use crate::player::timeline::recording_start;
use crate::session::{Role, TranscriptTurn};

/// One renderable transcript row.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptLine {
    /// Offset into the recording in seconds.
    pub time: f64,
    pub role: Role,
    pub content: String,
    /// Measured latency for assistant turns, when present.
    pub latency: Option<f64>,
    /// Whether the playhead has reached this turn.
    pub reached: bool,
}

/// Compute the transcript rows for the current playback position.
///
/// Pure: recomputed each frame from the transcript and the clock, so rows
/// can never go stale. Turn offsets use the same recording-start heuristic
/// as the markers.
pub fn transcript_lines(transcript: &[TranscriptTurn], current_time: f64) -> Vec<TranscriptLine> {
    let start = recording_start(transcript);
    transcript
        .iter()
        .map(|turn| {
            let time = (turn.timestamp - start).max(0.0);
            TranscriptLine {
                time,
                role: turn.role,
                content: turn.content.clone(),
                latency: (turn.role == Role::Assistant && turn.latency > 0.0)
                    .then_some(turn.latency),
                reached: time <= current_time,
            }
        })
        .collect()
}

fn role_tag(role: Role) -> &'static str {
    match role {
        Role::User => " user",
        Role::Assistant => "agent",
        Role::Other => "     ",
    }
}

/// Truncate a string to a display width, appending `…` when cut.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width.saturating_sub(1) {
            out.push('…');
            return out;
        }
        width += w;
        out.push(c);
    }
    out
}

/// Render the transcript viewport into rows `0..height`.
///
/// Auto-follows playback: the window ends at the most recently reached
/// turn and backfills upcoming turns below it.
pub fn render_transcript(
    stdout: &mut io::Stdout,
    width: u16,
    height: usize,
    lines: &[TranscriptLine],
) -> Result<()> {
    const WHITE: &str = "\x1b[97m";
    const GREEN: &str = "\x1b[32m";
    const CYAN: &str = "\x1b[36m";
    const DARK_GREY: &str = "\x1b[90m";
    const YELLOW: &str = "\x1b[33m";
    const RESET: &str = "\x1b[0m";

    if height == 0 {
        return Ok(());
    }

    // Window ends at the last reached line, keeping it visible near the
    // bottom while playback advances.
    let cursor = lines.iter().rposition(|l| l.reached);
    let first = match cursor {
        Some(idx) if idx + 1 > height => idx + 1 - height,
        _ => 0,
    };

    let mut output = String::with_capacity(height * width as usize);
    for row in 0..height {
        output.push_str(&format!("\x1b[{};1H\x1b[2K", row + 1)); // Move + clear line

        let Some(line) = lines.get(first + row) else {
            continue;
        };

        let is_cursor = cursor == Some(first + row);
        let pointer = if is_cursor { "▸" } else { " " };

        let latency_note = line
            .latency
            .map(|l| format!(" (+{:.2}s)", l))
            .unwrap_or_default();

        let prefix_width = 1 + 1 + 5 + 2 + 7; // pointer, pad, tag, pad, [time]
        let content_width =
            (width as usize).saturating_sub(prefix_width + latency_note.len() + 1);
        let content = truncate_to_width(&line.content, content_width);

        let (tag_color, text_color) = if line.reached {
            let tag = match line.role {
                Role::User => CYAN,
                Role::Assistant => GREEN,
                Role::Other => DARK_GREY,
            };
            (tag, WHITE)
        } else {
            (DARK_GREY, DARK_GREY)
        };

        output.push_str(WHITE);
        output.push_str(pointer);
        output.push(' ');
        output.push_str(tag_color);
        output.push_str(role_tag(line.role));
        output.push_str(DARK_GREY);
        output.push_str(&format!(" [{:>5}] ", format_time(line.time)));
        output.push_str(text_color);
        output.push_str(&content);
        if !latency_note.is_empty() {
            output.push_str(YELLOW);
            output.push_str(&latency_note);
        }
        output.push_str(RESET);
    }

    write!(stdout, "{}", output)?;
    Ok(())
}
