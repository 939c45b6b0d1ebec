//! The interactive session player.
//!
//! Runs a single-threaded event loop: crossterm input events and a tick
//! timeout drive the playback controller, and every frame is re-rendered
//! from current state. The audio clock lives in the backend; the loop only
//! polls it through [`PlaybackController::tick`].

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute};

use crate::config::Config;
use crate::player::audio::{AudioBackend, RodioBackend};
use crate::player::controller::PlaybackController;
use crate::player::input::{handle_key_event, handle_mouse_event};
use crate::player::render::{
    render_progress_bar, render_separator_line, render_status_bar, render_transcript,
    transcript_lines,
};
use crate::player::state::InputResult;
use crate::player::timeline::{
    compute_freeze_bands, compute_markers, recording_start, LatencyMarker,
};
use crate::session::{resolve_audio_source, AudioSource, Session};

/// Rows of chrome below the transcript viewport (separator + progress + status).
pub const STATUS_LINES: u16 = 3;

/// How a player invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackResult {
    /// Player ran and the user closed it.
    Closed,
    /// Session had no audio recording; the notice was shown instead.
    NoRecording,
}

/// Restores the terminal even if the player loop errors out.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(
            stdout,
            DisableMouseCapture,
            LeaveAlternateScreen,
            cursor::Show
        );
        let _ = disable_raw_mode();
    }
}

/// Play a session's audio recording with the synchronized transcript view.
///
/// Sessions without a recording resolve to the "no recording" notice
/// instead of an error; remote audio locators are reported as unsupported.
#[cfg(not(tarpaulin_include))]
pub fn play_session(
    session: &Session,
    session_path: &Path,
    media_root: Option<&Path>,
    config: &Config,
) -> Result<PlaybackResult> {
    let source = resolve_audio_source(
        session_path,
        media_root.or(config.media_root.as_deref()),
        session.audio_url.as_deref(),
    );

    let audio_path = match source {
        None => {
            print_no_recording(session);
            return Ok(PlaybackResult::NoRecording);
        }
        Some(AudioSource::Remote(url)) => {
            bail!("Remote audio is not supported: {url}\nDownload the recording next to the session file and try again.");
        }
        Some(AudioSource::Local(path)) => path,
    };

    let backend = RodioBackend::open(&audio_path)
        .with_context(|| format!("Failed to open recording: {}", audio_path.display()))?;

    let mut controller = PlaybackController::new();
    controller.load(Some(backend));
    controller.set_on_time_update(|t| tracing::trace!(time = t, "position tick"));

    run_player_loop(&mut controller, session, config)?;
    Ok(PlaybackResult::Closed)
}

/// The terminal display state for sessions without a recording.
fn print_no_recording(session: &Session) {
    println!("Session {}", session.id);
    println!("Recorded {}", session.created_at.format("%Y-%m-%d %H:%M UTC"));
    println!("{} transcript turns", session.transcript.len());
    println!();
    println!("No recording available for this session.");
}

#[cfg(not(tarpaulin_include))]
fn run_player_loop<B: AudioBackend>(
    controller: &mut PlaybackController<B>,
    session: &Session,
    config: &Config,
) -> Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    let _guard = TerminalGuard;
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        cursor::Hide
    )?;

    let (mut term_cols, mut term_rows) = crossterm::terminal::size()?;
    let tick = Duration::from_millis(config.tick_rate_ms.max(10));
    let start = recording_start(&session.transcript);
    let mut last_frame = None;

    loop {
        // Markers depend on the duration, which may arrive after the first
        // ticks; recomputing them per frame keeps them honest.
        let duration = controller.duration().unwrap_or(0.0);
        let markers = compute_markers(&session.transcript, start, duration);

        if event::poll(tick)? {
            let result = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key_event(key, controller, &markers, config.seek_step_secs)
                }
                Event::Mouse(mouse) => {
                    handle_mouse_event(mouse, controller, term_cols, term_rows)
                }
                Event::Resize(cols, rows) => {
                    term_cols = cols;
                    term_rows = rows;
                    last_frame = None;
                    InputResult::Continue
                }
                _ => InputResult::Continue,
            };
            if result == InputResult::Quit {
                break;
            }
        }

        controller.tick();

        // Re-render only when something observable moved.
        let frame = (
            controller.phase(),
            (controller.current_time() * 10.0) as u64,
            controller.duration().map(|d| d as u64),
        );
        if last_frame != Some(frame) {
            last_frame = Some(frame);
            render_frame(&mut stdout, term_cols, term_rows, controller, session, &markers)?;
        }
    }

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn render_frame<B: AudioBackend>(
    stdout: &mut io::Stdout,
    term_cols: u16,
    term_rows: u16,
    controller: &PlaybackController<B>,
    session: &Session,
    markers: &[LatencyMarker],
) -> Result<()> {
    let view_rows = term_rows.saturating_sub(STATUS_LINES) as usize;
    let start = recording_start(&session.transcript);
    let duration = controller.duration();
    let bands = compute_freeze_bands(&session.freeze_events, start, duration.unwrap_or(0.0));

    let lines = transcript_lines(&session.transcript, controller.current_time());
    render_transcript(stdout, term_cols, view_rows, &lines)?;
    render_separator_line(stdout, term_cols, term_rows.saturating_sub(3))?;
    render_progress_bar(
        stdout,
        term_cols,
        term_rows.saturating_sub(2),
        controller.current_time(),
        duration,
        markers,
        &bands,
    )?;
    render_status_bar(
        stdout,
        term_cols,
        term_rows.saturating_sub(1),
        controller.phase(),
        controller.current_time(),
        markers,
        session.average_latency(),
    )?;
    stdout.flush()?;
    Ok(())
}
