//! Mouse input handling for the session player.
//!
//! Handles mouse events, primarily click-to-seek on the progress bar.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::player::audio::AudioBackend;
use crate::player::controller::PlaybackController;
use crate::player::render::{BAR_MARGIN, BAR_START_COL};
use crate::player::state::InputResult;
use crate::player::timeline::time_from_click_fraction;

/// Translate a click column into a timeline fraction.
///
/// Returns `None` for clicks outside the bar. The geometry must match
/// what the progress renderer draws.
pub fn click_fraction(column: u16, term_cols: u16) -> Option<f64> {
    let bar_width = (term_cols as usize).saturating_sub(BAR_MARGIN);
    if bar_width == 0 {
        return None;
    }
    if column < BAR_START_COL || column >= BAR_START_COL + bar_width as u16 {
        return None;
    }
    Some((column - BAR_START_COL) as f64 / bar_width as f64)
}

/// Handle a mouse event.
///
/// A left click on the progress bar row seeks to the clicked position;
/// everything else is ignored.
pub fn handle_mouse_event<B: AudioBackend>(
    mouse: MouseEvent,
    controller: &mut PlaybackController<B>,
    term_cols: u16,
    term_rows: u16,
) -> InputResult {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        let progress_row = term_rows.saturating_sub(2);

        if mouse.row == progress_row {
            if let (Some(fraction), Some(duration)) =
                (click_fraction(mouse.column, term_cols), controller.duration())
            {
                controller.seek(time_from_click_fraction(fraction, duration));
            }
        }
    }

    InputResult::Continue
}
