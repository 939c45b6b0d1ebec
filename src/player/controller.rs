//! Playback controller.
//!
//! Single source of truth for play/pause/seek against one audio source.
//! The controller owns an injected [`AudioBackend`] and a small state
//! machine; the host event loop drives it by calling [`PlaybackController::tick`]
//! and routing user input to the mutation methods.

use crate::player::audio::AudioBackend;
use crate::player::state::PlayerPhase;

/// Callback invoked with the playback position on every position change.
pub type TimeObserver = Box<dyn FnMut(f64)>;

/// Owns playback state for one audio source.
pub struct PlaybackController<B: AudioBackend> {
    backend: Option<B>,
    phase: PlayerPhase,
    current_time: f64,
    duration: Option<f64>,
    on_time_update: Option<TimeObserver>,
}

impl<B: AudioBackend> Default for PlaybackController<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: AudioBackend> PlaybackController<B> {
    /// Create a controller with no source bound.
    pub fn new() -> Self {
        Self {
            backend: None,
            phase: PlayerPhase::NoSource,
            current_time: 0.0,
            duration: None,
            on_time_update: None,
        }
    }

    /// Bind a new audio source, superseding any previous one.
    ///
    /// Resets the clock; duration stays unknown until the backend reports
    /// metadata. Passing `None` enters the terminal "no recording" state
    /// where every other operation is a no-op.
    pub fn load(&mut self, backend: Option<B>) {
        self.phase = if backend.is_some() {
            PlayerPhase::Loading
        } else {
            PlayerPhase::NoSource
        };
        self.backend = backend;
        self.current_time = 0.0;
        self.duration = None;
    }

    /// Register an observer for position changes.
    pub fn set_on_time_update<F: FnMut(f64) + 'static>(&mut self, observer: F) {
        self.on_time_update = Some(Box::new(observer));
    }

    pub fn phase(&self) -> PlayerPhase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == PlayerPhase::Playing
    }

    /// Current playback position in seconds.
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Total duration in seconds, once known.
    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    /// Poll the backend and fire the metadata/position/ended callbacks.
    ///
    /// Called from the host event loop once per frame.
    pub fn tick(&mut self) {
        let (reported_duration, position, finished) = match self.backend.as_ref() {
            Some(backend) => (backend.duration(), backend.position(), backend.is_finished()),
            None => return,
        };

        if self.duration.is_none() {
            if let Some(d) = reported_duration {
                self.on_metadata_ready(d);
            }
        }

        if position != self.current_time {
            self.on_position_tick(position);
        }

        if self.phase == PlayerPhase::Playing && finished {
            self.on_ended();
        }
    }

    /// The backend reported its total duration.
    ///
    /// Zero or non-finite durations leave the duration unknown so nothing
    /// downstream divides by a placeholder.
    pub fn on_metadata_ready(&mut self, duration: f64) {
        if !duration.is_finite() || duration <= 0.0 {
            return;
        }
        self.duration = Some(duration);
        if self.phase == PlayerPhase::Loading {
            self.phase = PlayerPhase::Paused;
        }
    }

    /// The backend reported a playback-position change.
    ///
    /// Called at high frequency; updates the clock and forwards the new
    /// position to the observer, nothing else.
    pub fn on_position_tick(&mut self, time: f64) {
        if self.backend.is_none() || !time.is_finite() {
            return;
        }
        self.current_time = match self.duration {
            Some(d) => time.clamp(0.0, d),
            None => time.max(0.0),
        };
        if let Some(observer) = self.on_time_update.as_mut() {
            observer(self.current_time);
        }
    }

    /// The track played to its end. Leaves the clock at end-of-track.
    pub fn on_ended(&mut self) {
        if !self.phase.has_source() {
            return;
        }
        if let Some(d) = self.duration {
            self.current_time = d;
        }
        self.phase = PlayerPhase::Ended;
    }

    /// Toggle between playing and paused.
    ///
    /// Starting playback is optimistic: the phase flips to `Playing` before
    /// the backend is asked to play, and reconciles back to `Paused` if the
    /// play primitive fails. From `Ended` this restarts from the beginning.
    pub fn toggle_playback(&mut self) {
        let Some(backend) = self.backend.as_mut() else {
            return;
        };

        match self.phase {
            PlayerPhase::NoSource | PlayerPhase::Loading => {}
            PlayerPhase::Playing => {
                backend.pause();
                self.phase = PlayerPhase::Paused;
            }
            PlayerPhase::Paused => {
                self.phase = PlayerPhase::Playing;
                if let Err(e) = backend.play() {
                    tracing::warn!("play failed, staying paused: {e}");
                    self.phase = PlayerPhase::Paused;
                }
            }
            PlayerPhase::Ended => {
                // Policy: resuming a finished track restarts it.
                self.current_time = 0.0;
                let restarted = match backend.seek_to(0.0) {
                    Ok(()) => backend.play(),
                    Err(e) => Err(e),
                };
                match restarted {
                    Ok(()) => self.phase = PlayerPhase::Playing,
                    Err(e) => {
                        tracing::warn!("restart failed, staying paused: {e}");
                        self.phase = PlayerPhase::Paused;
                    }
                }
            }
        }
    }

    /// Seek to a target time in seconds.
    ///
    /// Out-of-range targets clamp to the track bounds. A no-op while the
    /// duration is unknown. Seeking out of `Ended` lands in `Paused`.
    pub fn seek(&mut self, time: f64) {
        let Some(duration) = self.duration else {
            return;
        };
        let Some(backend) = self.backend.as_mut() else {
            return;
        };
        if !time.is_finite() {
            return;
        }

        let target = time.clamp(0.0, duration);
        match backend.seek_to(target) {
            Ok(()) => {
                self.current_time = target;
                if self.phase == PlayerPhase::Ended {
                    self.phase = PlayerPhase::Paused;
                }
            }
            Err(e) => tracing::warn!("seek to {target:.2}s failed: {e}"),
        }
    }
}
