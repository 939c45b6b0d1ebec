//! Progress bar rendering for the session player.
//!
//! Displays playback progress with latency markers and freeze bands.

use std::io::{self, Write};

use anyhow::Result;

use crate::player::timeline::{FreezeBand, LatencyMarker};

/// Columns reserved around the bar for padding and the time display.
pub const BAR_MARGIN: usize = 16;

/// Column the bar starts at (one cell of padding before it).
pub const BAR_START_COL: u16 = 1;

/// Format a time in seconds as `M:SS`.
///
/// Seconds are floored; minutes carry no leading zero.
pub fn format_time(seconds: f64) -> String {
    let total_secs = seconds.max(0.0) as u64;
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{}:{:02}", mins, secs)
}

/// Build the progress bar character array.
///
/// Layering, lowest to highest: track line, freeze bands, latency markers,
/// playhead. While the duration is unknown the bar renders empty at 0%.
///
/// Returns `(bar_chars, filled_count)` where `filled_count` is the number
/// of positions covered by playback so far.
pub fn build_progress_bar_chars(
    bar_width: usize,
    current_time: f64,
    duration: Option<f64>,
    markers: &[LatencyMarker],
    bands: &[FreezeBand],
) -> (Vec<char>, usize) {
    if bar_width == 0 {
        return (Vec::new(), 0);
    }

    let progress = match duration {
        Some(d) if d > 0.0 => (current_time / d).clamp(0.0, 1.0),
        _ => 0.0,
    };
    let filled = (bar_width as f64 * progress) as usize;

    let mut bar: Vec<char> = vec!['─'; bar_width];

    for band in bands {
        let start = (band.start_position * bar_width as f64) as usize;
        let end = ((band.end_position * bar_width as f64).ceil() as usize).min(bar_width);
        for cell in bar.iter_mut().take(end).skip(start) {
            *cell = '░';
        }
    }

    for marker in markers {
        let idx = ((marker.position * bar_width as f64) as usize).min(bar_width - 1);
        bar[idx] = '◆';
    }

    if filled < bar_width {
        bar[filled] = '⏺';
    }

    (bar, filled)
}

/// Render the progress bar row with the `current/total` time display.
pub fn render_progress_bar(
    stdout: &mut io::Stdout,
    width: u16,
    row: u16,
    current_time: f64,
    duration: Option<f64>,
    markers: &[LatencyMarker],
    bands: &[FreezeBand],
) -> Result<()> {
    let bar_width = (width as usize).saturating_sub(BAR_MARGIN);
    let (bar, filled) = build_progress_bar_chars(bar_width, current_time, duration, markers, bands);

    let current_str = format_time(current_time);
    let total_str = duration.map(format_time).unwrap_or_else(|| "-:--".into());
    let time_display = format!(" {}/{}", current_str, total_str);

    const GREEN: &str = "\x1b[32m";
    const YELLOW: &str = "\x1b[33m";
    const RED: &str = "\x1b[31m";
    const WHITE: &str = "\x1b[97m";
    const DARK_GREY: &str = "\x1b[90m";
    const GREY: &str = "\x1b[37m";

    let mut output = String::with_capacity(width as usize * 4);
    output.push_str(&format!("\x1b[{};1H", row + 1)); // Move cursor
    output.push(' ');

    for (i, &c) in bar.iter().enumerate() {
        match c {
            '⏺' => {
                output.push_str(WHITE);
                output.push(c);
            }
            '◆' => {
                output.push_str(YELLOW);
                output.push(c);
            }
            '░' => {
                output.push_str(RED);
                output.push(c);
            }
            _ if i < filled => {
                output.push_str(GREEN);
                output.push('━');
            }
            _ => {
                output.push_str(DARK_GREY);
                output.push(c);
            }
        }
    }

    output.push_str(GREY);
    output.push_str(&time_display);

    // Fill remaining width to overwrite leftovers
    let used_width = 1 + bar.len() + time_display.len();
    let remaining = (width as usize).saturating_sub(used_width);
    for _ in 0..remaining {
        output.push(' ');
    }

    output.push_str("\x1b[0m");
    write!(stdout, "{}", output)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(position: f64) -> LatencyMarker {
        LatencyMarker {
            time: position * 10.0,
            position,
            latency: 1.0,
        }
    }

    #[test]
    fn format_time_uses_minutes_and_padded_seconds() {
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(9.0), "0:09");
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(600.0), "10:00");
        assert_eq!(format_time(3661.0), "61:01");
    }

    #[test]
    fn format_time_floors_fractional_seconds() {
        assert_eq!(format_time(59.9), "0:59");
        assert_eq!(format_time(1.5), "0:01");
    }

    #[test]
    fn format_time_negative_treated_as_zero() {
        assert_eq!(format_time(-5.0), "0:00");
    }

    #[test]
    fn empty_bar_at_zero() {
        let (bar, filled) = build_progress_bar_chars(10, 0.0, Some(10.0), &[], &[]);
        assert_eq!(filled, 0);
        assert_eq!(bar[0], '⏺');
        assert_eq!(bar[1], '─');
    }

    #[test]
    fn full_bar_at_end() {
        let (bar, filled) = build_progress_bar_chars(10, 10.0, Some(10.0), &[], &[]);
        assert_eq!(filled, 10);
        assert!(bar.iter().all(|&c| c == '─'));
    }

    #[test]
    fn half_progress() {
        let (bar, filled) = build_progress_bar_chars(10, 5.0, Some(10.0), &[], &[]);
        assert_eq!(filled, 5);
        assert_eq!(bar[5], '⏺');
    }

    #[test]
    fn unknown_duration_renders_empty_progress() {
        let (_, filled) = build_progress_bar_chars(10, 5.0, None, &[], &[]);
        assert_eq!(filled, 0);

        let (_, filled) = build_progress_bar_chars(10, 5.0, Some(0.0), &[], &[]);
        assert_eq!(filled, 0);
    }

    #[test]
    fn progress_clamped_to_one() {
        let (_, filled) = build_progress_bar_chars(10, 15.0, Some(10.0), &[], &[]);
        assert_eq!(filled, 10);
    }

    #[test]
    fn marker_at_position() {
        let markers = vec![marker(0.5)];
        let (bar, _) = build_progress_bar_chars(10, 9.9, Some(10.0), &markers, &[]);
        assert_eq!(bar[5], '◆');
    }

    #[test]
    fn marker_at_track_end_stays_on_bar() {
        let markers = vec![marker(1.0)];
        let (bar, _) = build_progress_bar_chars(10, 0.1, Some(10.0), &markers, &[]);
        assert_eq!(bar[9], '◆');
    }

    #[test]
    fn playhead_wins_over_marker() {
        let markers = vec![marker(0.5)];
        let (bar, _) = build_progress_bar_chars(10, 5.0, Some(10.0), &markers, &[]);
        assert_eq!(bar[5], '⏺');
    }

    #[test]
    fn freeze_band_shades_cells_under_markers() {
        let bands = vec![FreezeBand {
            start_time: 2.0,
            end_time: 4.0,
            start_position: 0.2,
            end_position: 0.4,
        }];
        let markers = vec![marker(0.3)];
        let (bar, _) = build_progress_bar_chars(10, 9.9, Some(10.0), &markers, &bands);
        assert_eq!(bar[2], '░');
        assert_eq!(bar[3], '◆'); // marker drawn over the band
    }

    #[test]
    fn zero_width_bar_is_empty() {
        let (bar, filled) = build_progress_bar_chars(0, 5.0, Some(10.0), &[marker(0.5)], &[]);
        assert!(bar.is_empty());
        assert_eq!(filled, 0);
    }
}
