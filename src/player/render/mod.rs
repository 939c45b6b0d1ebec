//! Rendering components for the session player.
//!
//! All UI rendering for the player: transcript viewport, progress bar with
//! latency markers and freeze bands, separator, and status bar. Everything
//! is drawn from current state each frame; nothing is patched incrementally.

mod progress;
mod status;
mod transcript;

pub use progress::{
    build_progress_bar_chars, format_time, render_progress_bar, BAR_MARGIN, BAR_START_COL,
};
pub use status::{render_separator_line, render_status_bar, upcoming_marker};
pub use transcript::{render_transcript, transcript_lines, TranscriptLine};
