//! Keyboard input handling for the session player.
//!
//! All transport controls: play/pause, seeking, marker navigation, quit.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::player::audio::AudioBackend;
use crate::player::controller::PlaybackController;
use crate::player::render::upcoming_marker;
use crate::player::state::InputResult;
use crate::player::timeline::LatencyMarker;

/// Handle a keyboard event.
///
/// Routes every mutation through the controller so the state machine stays
/// the single source of truth.
pub fn handle_key_event<B: AudioBackend>(
    key: KeyEvent,
    controller: &mut PlaybackController<B>,
    markers: &[LatencyMarker],
    seek_step: f64,
) -> InputResult {
    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,

        // === Playback controls ===
        KeyCode::Char(' ') => {
            controller.toggle_playback();
            InputResult::Continue
        }

        // === Marker navigation ===
        KeyCode::Char('m') => {
            if let Some(next) = upcoming_marker(markers, controller.current_time()) {
                controller.seek(next.time);
            }
            InputResult::Continue
        }

        // === Seeking ===
        KeyCode::Left | KeyCode::Char(',') | KeyCode::Char('<') => {
            let step = seek_amount(controller, key.modifiers, seek_step);
            controller.seek(controller.current_time() - step);
            InputResult::Continue
        }
        KeyCode::Right | KeyCode::Char('.') | KeyCode::Char('>') => {
            let step = seek_amount(controller, key.modifiers, seek_step);
            controller.seek(controller.current_time() + step);
            InputResult::Continue
        }
        KeyCode::Home => {
            controller.seek(0.0);
            InputResult::Continue
        }
        KeyCode::End => {
            if let Some(duration) = controller.duration() {
                controller.seek(duration);
            }
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}

/// Seek step in seconds; shift jumps 5% of the track instead.
fn seek_amount<B: AudioBackend>(
    controller: &PlaybackController<B>,
    modifiers: KeyModifiers,
    seek_step: f64,
) -> f64 {
    if modifiers.contains(KeyModifiers::SHIFT) {
        controller.duration().map(|d| d * 0.05).unwrap_or(seek_step)
    } else {
        seek_step
    }
}
