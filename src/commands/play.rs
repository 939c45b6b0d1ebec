//! Play command handler.

use std::path::Path;

use anyhow::{bail, Result};

use vsp::player::{play_session, PlaybackResult};
use vsp::{Config, Session};

/// Play a session's recording in the interactive player.
#[cfg(not(tarpaulin_include))]
pub fn handle_play(session_path: &Path, media_root: Option<&Path>) -> Result<()> {
    let session = Session::load(session_path)?;

    if !atty::is(atty::Stream::Stdout) {
        bail!("The player needs an interactive terminal (stdout is not a TTY)");
    }

    let config = Config::load()?;

    match play_session(&session, session_path, media_root, &config)? {
        PlaybackResult::Closed => Ok(()),
        PlaybackResult::NoRecording => Ok(()),
    }
}
