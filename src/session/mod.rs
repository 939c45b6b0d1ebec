//! Session record types and loading.
//!
//! A session is the unit the recording backend produces: a conversational
//! transcript with per-turn latency measurements, freeze events, aggregate
//! latency metrics, and a locator for the audio recording. Sessions are
//! stored as one JSON document per file.

mod error;
mod locator;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub use error::SessionError;
pub use locator::{resolve_audio_source, AudioSource};

/// Speaker attribution for a transcript turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    /// Anything else the recording pipeline may emit (e.g. "system").
    #[serde(other)]
    Other,
}

/// One utterance in the conversation.
///
/// `timestamp` is absolute wall-clock epoch seconds as recorded by the
/// backend. `latency` is the measured delay (seconds) before an assistant
/// turn was produced; zero or negative means "not measured". Turns are
/// immutable once recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptTurn {
    pub role: Role,
    pub content: String,
    pub timestamp: f64,
    #[serde(default)]
    pub latency: f64,
}

/// A wall-clock span during which the agent was unresponsive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreezeEvent {
    pub start_time: f64,
    pub end_time: f64,
    pub duration: f64,
}

/// A recorded voice-agent session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    #[serde(deserialize_with = "de_created_at")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub transcript: Vec<TranscriptTurn>,
    #[serde(default)]
    pub freeze_events: Vec<FreezeEvent>,
    #[serde(default)]
    pub latency_metrics: HashMap<String, f64>,
    #[serde(default)]
    pub audio_url: Option<String>,
}

/// Deserialize `created_at` from either RFC 3339 or the backend's naive
/// UTC form (`datetime.utcnow()` serialized without an offset).
fn de_created_at<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;

    if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| Utc.from_utc_datetime(&naive))
        .map_err(serde::de::Error::custom)
}

impl Session {
    /// Load a session record from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SessionError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SessionError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        let session = Self::parse_str(&content)?;
        tracing::debug!(
            id = %session.id,
            turns = session.transcript.len(),
            "loaded session record"
        );
        Ok(session)
    }

    /// Parse a session record from a JSON string.
    pub fn parse_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Number of transcript turns attributed to the given role.
    pub fn turn_count(&self, role: Role) -> usize {
        self.transcript.iter().filter(|t| t.role == role).count()
    }

    /// Average assistant response latency in seconds.
    ///
    /// Prefers the backend's aggregate metric; falls back to the mean over
    /// measured assistant turns. `None` when nothing was measured.
    pub fn average_latency(&self) -> Option<f64> {
        if let Some(&avg) = self.latency_metrics.get("average_latency") {
            return Some(avg);
        }

        let measured: Vec<f64> = self
            .transcript
            .iter()
            .filter(|t| t.role == Role::Assistant && t.latency > 0.0)
            .map(|t| t.latency)
            .collect();

        if measured.is_empty() {
            None
        } else {
            Some(measured.iter().sum::<f64>() / measured.len() as f64)
        }
    }
}
