//! Audio locator resolution.
//!
//! The recording backend stores `audio_url` as an opaque locator: usually a
//! site-root-relative path like `/recordings/<id>.wav`, occasionally a plain
//! filesystem path or a full URL. The player only consumes local files, so
//! the locator is normalized here before anything touches the audio stack.

use std::path::{Path, PathBuf};

/// A resolved audio locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioSource {
    /// Local file, ready to hand to the audio backend.
    Local(PathBuf),
    /// Remote locator the player cannot fetch.
    Remote(String),
}

/// Resolve a session's `audio_url` into a concrete source.
///
/// Resolution rules, in order:
/// - absent locator resolves to `None` (the "no recording" display state)
/// - `http(s)` locators are passed through as [`AudioSource::Remote`]
/// - a leading-slash locator that exists on disk is used as-is; otherwise it
///   is treated as site-root-relative and joined onto the media root
/// - anything else is joined onto the media root
///
/// The media root defaults to the directory containing the session file,
/// which is where the backend drops recordings in a local setup.
pub fn resolve_audio_source(
    session_path: &Path,
    media_root: Option<&Path>,
    audio_url: Option<&str>,
) -> Option<AudioSource> {
    let url = audio_url?.trim();
    if url.is_empty() {
        return None;
    }

    if url.starts_with("http://") || url.starts_with("https://") {
        return Some(AudioSource::Remote(url.to_string()));
    }

    let root = media_root
        .map(Path::to_path_buf)
        .or_else(|| session_path.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));

    let path = if let Some(rest) = url.strip_prefix('/') {
        let absolute = PathBuf::from(url);
        if absolute.is_file() {
            absolute
        } else {
            root.join(rest)
        }
    } else {
        root.join(url)
    };

    Some(AudioSource::Local(path))
}
