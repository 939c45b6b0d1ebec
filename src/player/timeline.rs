//! Timeline alignment between wall-clock transcript time and playback time.
//!
//! Transcript turns carry absolute epoch timestamps while the audio resource
//! exposes a 0-based playback position. Everything in this module is a pure
//! function of its inputs, so the marker set can be recomputed on every
//! frame without any hidden state to go stale.

use crate::session::{FreezeEvent, Role, TranscriptTurn};

/// A latency event positioned on the playback timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct LatencyMarker {
    /// Offset into the recording in seconds.
    pub time: f64,
    /// Normalized position on the timeline, in `[0, 1]`.
    pub position: f64,
    /// The measured response latency in seconds.
    pub latency: f64,
}

/// A freeze span positioned on the playback timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct FreezeBand {
    /// Span start as an offset into the recording, seconds.
    pub start_time: f64,
    /// Span end as an offset into the recording, seconds.
    pub end_time: f64,
    /// Normalized start position, in `[0, 1]`.
    pub start_position: f64,
    /// Normalized end position, in `[0, 1]`.
    pub end_position: f64,
}

/// The wall-clock instant assumed to correspond to playback position 0.
///
/// Heuristic: the first transcript turn is taken to coincide with the start
/// of the recording. The backend does not record an authoritative recording
/// start timestamp; if it ever does, this is the single place to swap it in.
/// Returns 0.0 for an empty transcript.
pub fn recording_start(transcript: &[TranscriptTurn]) -> f64 {
    transcript.first().map(|t| t.timestamp).unwrap_or(0.0)
}

/// Compute the visible latency markers for a transcript and audio duration.
///
/// One marker per assistant turn with `latency > 0` whose offset from
/// `start_time` falls within `[0, duration]`. Turns that cannot produce a
/// valid in-window marker (wrong role, unmeasured latency, out-of-window or
/// non-finite timestamps) are excluded rather than rendered somewhere wrong.
/// An unknown or zero duration yields no markers at all.
///
/// Output order follows transcript order, so equal inputs always produce
/// an identical marker sequence.
pub fn compute_markers(
    transcript: &[TranscriptTurn],
    start_time: f64,
    duration: f64,
) -> Vec<LatencyMarker> {
    if !(duration > 0.0) {
        return Vec::new();
    }

    transcript
        .iter()
        .filter(|t| t.role == Role::Assistant && t.latency > 0.0)
        .filter_map(|t| {
            let time = t.timestamp - start_time;
            if !time.is_finite() || time < 0.0 || time > duration {
                return None;
            }
            Some(LatencyMarker {
                time,
                position: time / duration,
                latency: t.latency,
            })
        })
        .collect()
}

/// Compute the visible freeze bands for a list of freeze events.
///
/// Spans are intersected with the `[0, duration]` window; spans that end up
/// empty (or were malformed to begin with) are dropped. Unlike markers, a
/// span that merely straddles a window edge is clamped, not discarded.
pub fn compute_freeze_bands(
    events: &[FreezeEvent],
    start_time: f64,
    duration: f64,
) -> Vec<FreezeBand> {
    if !(duration > 0.0) {
        return Vec::new();
    }

    events
        .iter()
        .filter_map(|e| {
            let start = e.start_time - start_time;
            let end = e.end_time - start_time;
            if !start.is_finite() || !end.is_finite() {
                return None;
            }
            let start = start.max(0.0);
            let end = end.min(duration);
            if end <= start {
                return None;
            }
            Some(FreezeBand {
                start_time: start,
                end_time: end,
                start_position: start / duration,
                end_position: end / duration,
            })
        })
        .collect()
}

/// Translate a click fraction on the timeline into a seek time.
///
/// Pointer input is approximate, so out-of-range fractions clamp to the
/// nearest boundary instead of failing. An unknown or zero duration maps
/// everything to 0.
pub fn time_from_click_fraction(fraction: f64, duration: f64) -> f64 {
    if !(duration > 0.0) || !fraction.is_finite() {
        return 0.0;
    }
    (fraction * duration).clamp(0.0, duration)
}
