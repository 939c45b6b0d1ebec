//! Audio playback capability.
//!
//! The "true" playback clock lives in the audio device, outside this crate's
//! control. It is modeled as an injected capability so the controller can be
//! driven by a fake in tests with no audio hardware present.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};

/// Errors from the audio playback layer.
#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("Audio file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to open audio output device: {0}")]
    Device(String),

    #[error("Failed to decode audio: {0}")]
    Decode(String),

    #[error("Seek failed: {0}")]
    Seek(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Play/pause/seek/position interface over one audio resource.
///
/// Implementations own the resource for their whole lifetime; positions and
/// durations are seconds from the start of the track.
pub trait AudioBackend {
    /// Start or resume playback. May fail if the underlying resource has
    /// become unavailable; callers reconcile their state on failure.
    fn play(&mut self) -> Result<(), AudioError>;

    /// Pause playback. Pausing is infallible.
    fn pause(&mut self);

    /// Move the playback position. The target is assumed to already be
    /// clamped to the track bounds.
    fn seek_to(&mut self, seconds: f64) -> Result<(), AudioError>;

    /// Current playback position in seconds.
    fn position(&self) -> f64;

    /// Total track duration, if the medium reports one.
    fn duration(&self) -> Option<f64>;

    /// Whether the track has played to its end.
    fn is_finished(&self) -> bool;
}

/// Rodio-based backend: one output stream, one sink, one decoded file.
pub struct RodioBackend {
    // Dropping the stream kills the sink, keep it alive alongside.
    _stream: OutputStream,
    sink: Sink,
    path: PathBuf,
    duration: Option<f64>,
}

#[cfg(not(tarpaulin_include))]
impl RodioBackend {
    /// Open an audio file and prepare a paused sink for it.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, AudioError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(AudioError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| AudioError::Device(e.to_string()))?;
        let sink = Sink::connect_new(stream.mixer());

        let source = decode(path)?;
        let duration = source.total_duration().map(|d| d.as_secs_f64());
        sink.append(source);
        sink.pause();

        tracing::debug!(path = %path.display(), ?duration, "opened audio backend");

        Ok(Self {
            _stream: stream,
            sink,
            path: path.to_path_buf(),
            duration,
        })
    }

    /// Re-queue the source if the sink drained (track played to the end).
    fn ensure_source(&mut self) -> Result<(), AudioError> {
        if self.sink.empty() {
            let source = decode(&self.path)?;
            self.sink.append(source);
            self.sink.pause();
        }
        Ok(())
    }
}

#[cfg(not(tarpaulin_include))]
fn decode(path: &Path) -> Result<Decoder<BufReader<File>>, AudioError> {
    let file = File::open(path)?;
    Decoder::try_from(file).map_err(|e| AudioError::Decode(e.to_string()))
}

#[cfg(not(tarpaulin_include))]
impl AudioBackend for RodioBackend {
    fn play(&mut self) -> Result<(), AudioError> {
        self.ensure_source()?;
        self.sink.play();
        Ok(())
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn seek_to(&mut self, seconds: f64) -> Result<(), AudioError> {
        self.ensure_source()?;
        self.sink
            .try_seek(Duration::from_secs_f64(seconds.max(0.0)))
            .map_err(|e| AudioError::Seek(e.to_string()))
    }

    fn position(&self) -> f64 {
        self.sink.get_pos().as_secs_f64()
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn is_finished(&self) -> bool {
        self.sink.empty()
    }
}
