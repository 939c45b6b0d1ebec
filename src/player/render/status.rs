//! Status bar rendering for the session player.
//!
//! Displays playback state, latency information, and keyboard shortcuts.

use std::io::{self, Write};

use anyhow::Result;

use crate::player::state::PlayerPhase;
use crate::player::timeline::LatencyMarker;

/// Render a separator line.
pub fn render_separator_line(stdout: &mut io::Stdout, width: u16, row: u16) -> Result<()> {
    // Build line as string to minimize syscalls
    let mut output = String::with_capacity(width as usize + 20);
    output.push_str(&format!("\x1b[{};1H\x1b[90m", row + 1)); // Move + dark gray
    for _ in 0..width {
        output.push('─');
    }
    output.push_str("\x1b[0m"); // Reset
    write!(stdout, "{}", output)?;
    Ok(())
}

/// Pick the next latency marker ahead of the playhead.
///
/// A small grace window keeps the marker we just jumped to from matching
/// itself again.
pub fn upcoming_marker(markers: &[LatencyMarker], current_time: f64) -> Option<&LatencyMarker> {
    markers.iter().find(|m| m.time > current_time + 0.1)
}

/// Render the status/controls bar.
pub fn render_status_bar(
    stdout: &mut io::Stdout,
    width: u16,
    row: u16,
    phase: PlayerPhase,
    current_time: f64,
    markers: &[LatencyMarker],
    average_latency: Option<f64>,
) -> Result<()> {
    const WHITE: &str = "\x1b[97m";
    const DARK_GREY: &str = "\x1b[90m";
    const YELLOW: &str = "\x1b[33m";
    const CYAN: &str = "\x1b[36m";
    const RESET: &str = "\x1b[0m";

    let mut output = String::with_capacity(256);
    let mut visible_len: usize = 0; // Track visible width manually

    output.push_str(&format!("\x1b[{};1H", row + 1));

    output.push_str(WHITE);
    output.push(' ');
    visible_len += 1;

    // State icon (▶ and ⏸ are double-width unicode)
    let icon = match phase {
        PlayerPhase::Playing => "⏸  ",
        PlayerPhase::Ended => "⏮  ",
        _ => "▶  ",
    };
    output.push_str(icon);
    visible_len += 4; // icon (2) + 2 spaces

    if phase == PlayerPhase::Loading {
        output.push_str(DARK_GREY);
        output.push_str("loading ");
        visible_len += 8;
    }

    if !markers.is_empty() {
        output.push_str(YELLOW);
        let marker_str = format!("◆{} ", markers.len());
        visible_len += marker_str.chars().count();
        output.push_str(&marker_str);

        if let Some(next) = upcoming_marker(markers, current_time) {
            let next_str = format!("next +{:.2}s ", next.latency);
            output.push_str(DARK_GREY);
            visible_len += next_str.len();
            output.push_str(&next_str);
        }
    }

    if let Some(avg) = average_latency {
        output.push_str(DARK_GREY);
        let avg_str = format!("avg {:.2}s ", avg);
        visible_len += avg_str.len();
        output.push_str(&avg_str);
    }

    let play_action = if phase == PlayerPhase::Playing {
        ":pause "
    } else {
        ":play "
    };
    output.push_str(DARK_GREY);
    output.push_str("│ ");
    visible_len += 2;
    output.push_str(CYAN);
    output.push_str("space");
    visible_len += 5;
    output.push_str(DARK_GREY);
    output.push_str(play_action);
    visible_len += play_action.len();
    output.push_str(CYAN);
    output.push_str("←→");
    visible_len += 2;
    output.push_str(DARK_GREY);
    output.push_str(":seek ");
    visible_len += 6;
    output.push_str(CYAN);
    output.push('m');
    visible_len += 1;
    output.push_str(DARK_GREY);
    output.push_str(":mrk ");
    visible_len += 5;
    output.push_str(CYAN);
    output.push('q');
    visible_len += 1;
    output.push_str(DARK_GREY);
    output.push_str(":quit");
    visible_len += 5;

    // Pad to full width to overwrite any leftover content
    let padding = (width as usize).saturating_sub(visible_len);
    for _ in 0..padding {
        output.push(' ');
    }

    output.push_str(RESET);
    write!(stdout, "{}", output)?;

    Ok(())
}
