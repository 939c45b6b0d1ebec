//! Session player module
//!
//! Plays back a recorded voice-agent session: the audio recording with a
//! transcript view synchronized to it, latency markers on the timeline,
//! and click-to-seek scrubbing.
//!
//! # Architecture
//!
//! - `state`: shared types (PlayerPhase, InputResult)
//! - `audio`: the injected audio capability (trait + rodio backend)
//! - `controller`: play/pause/seek state machine over one audio source
//! - `timeline`: pure wall-clock ↔ playback-position alignment
//! - `input/`: keyboard and mouse handling
//! - `render/`: transcript viewport, progress bar, status bar
//! - `native`: the interactive event loop tying it all together

pub mod audio;
pub mod controller;
pub(crate) mod input;
mod native;
pub mod render;
pub mod state;
pub mod timeline;

pub use audio::{AudioBackend, AudioError, RodioBackend};
pub use controller::PlaybackController;
pub use native::{play_session, PlaybackResult, STATUS_LINES};
pub use state::{InputResult, PlayerPhase};
pub use timeline::{
    compute_freeze_bands, compute_markers, recording_start, time_from_click_fraction, FreezeBand,
    LatencyMarker,
};
