//! Types for meeting transcripts.

use serde::{Deserialize, Serialize};

/// Who spoke a transcript segment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Speaker {
    pub display_name: Option<String>,
    /// Email of the calendar invitee this speaker was matched to, if any.
    pub matched_calendar_invitee_email: Option<String>,
}

/// One utterance of the transcript.
///
/// `timestamp` is the offset into the recording as formatted by the provider (e.g. `00:04:12`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Segment {
    pub speaker: Option<Speaker>,
    pub text: Option<String>,
    pub timestamp: Option<String>,
}

/// Response body of the per-recording transcript endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transcript {
    pub transcript: Vec<Segment>,
}
