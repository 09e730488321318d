//! Reduction of raw provider records to the shapes returned to callers.
//!
//! Every projection is total: a missing field becomes `null` (or a documented default) in
//! the output and never an error. Blocks that are optional in the output are modelled as
//! `Option` fields that are skipped entirely when `None`.

use meeting_ai::types::recording::{ActionItem, Invitee, RecordedBy};
use meeting_ai::types::summary::{self, Summary};
use meeting_ai::types::transcription::{self, Segment, Speaker};
use meeting_ai::MeetingRecord;
use serde::Serialize;

/// Speaker name used when the provider did not attribute a segment.
pub const UNKNOWN_SPEAKER: &str = "Unknown";

/// Returned in place of a summary when the recording has none yet.
pub const NO_SUMMARY_MESSAGE: &str = "No summary available for this recording";

/// Which optional sub-resources to include when projecting a meeting.
/// Each flag is independent of the others.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectionOptions {
    pub include_summary: bool,
    pub include_transcript: bool,
    pub include_action_items: bool,
}

/// A transcript line embedded in a listed meeting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptLine {
    pub speaker: String,
    pub text: Option<String>,
    pub timestamp: Option<String>,
}

/// A meeting as returned by `list_meetings`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeetingView {
    pub title: Option<String>,
    pub meeting_title: Option<String>,
    pub recording_id: Option<i64>,
    pub url: Option<String>,
    pub share_url: Option<String>,
    pub created_at: Option<String>,
    pub scheduled_start_time: Option<String>,
    pub scheduled_end_time: Option<String>,
    pub recording_start_time: Option<String>,
    pub recording_end_time: Option<String>,
    pub transcript_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorded_by: Option<RecordedBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_invitees: Option<Vec<Invitee>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<Vec<TranscriptLine>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_items: Option<Vec<ActionItem>>,
}

/// Result of `get_summary`: either the summary or a soft "not available" marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SummaryView {
    Found {
        recording_id: i64,
        template_name: Option<String>,
        markdown_formatted: Option<String>,
    },
    NotFound {
        recording_id: i64,
        error: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeakerView {
    pub display_name: String,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentView {
    pub text: String,
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker: Option<SpeakerView>,
}

/// Result of `get_transcript`. `segment_count` always equals `transcript.len()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptView {
    pub recording_id: i64,
    pub transcript: Vec<SegmentView>,
    pub segment_count: usize,
}

/// `Some(value)` only when `value` carries at least one field. Records deserialize `{}` to
/// their default, which counts as absent.
fn non_default<T: Default + PartialEq>(value: Option<T>) -> Option<T> {
    value.filter(|value| *value != T::default())
}

/// `Some(items)` only when there is at least one item.
fn non_empty<T: Clone>(items: &[T]) -> Option<Vec<T>> {
    (!items.is_empty()).then(|| items.to_vec())
}

pub fn project_meeting(record: &MeetingRecord, options: ProjectionOptions) -> MeetingView {
    let summary =
        non_default(record.default_summary.clone()).filter(|_| options.include_summary);

    let transcript = if options.include_transcript {
        non_empty(record.transcript()).map(|segments| {
            segments
                .into_iter()
                .map(|segment| TranscriptLine {
                    speaker: segment
                        .speaker
                        .and_then(|speaker| speaker.display_name)
                        .unwrap_or_else(|| UNKNOWN_SPEAKER.to_string()),
                    text: segment.text,
                    timestamp: segment.timestamp,
                })
                .collect()
        })
    } else {
        None
    };

    let action_items = if options.include_action_items {
        non_empty(record.action_items())
    } else {
        None
    };

    MeetingView {
        title: record.title.clone(),
        meeting_title: record.meeting_title.clone(),
        recording_id: record.recording_id,
        url: record.url.clone(),
        share_url: record.share_url.clone(),
        created_at: record.created_at.clone(),
        scheduled_start_time: record.scheduled_start_time.clone(),
        scheduled_end_time: record.scheduled_end_time.clone(),
        recording_start_time: record.recording_start_time.clone(),
        recording_end_time: record.recording_end_time.clone(),
        transcript_language: record.transcript_language.clone(),
        recorded_by: non_default(record.recorded_by.clone()),
        calendar_invitees: non_empty(record.calendar_invitees()),
        summary,
        transcript,
        action_items,
    }
}

pub fn project_summary(recording_id: i64, envelope: summary::Envelope) -> SummaryView {
    match non_default(envelope.summary) {
        Some(summary) => SummaryView::Found {
            recording_id,
            template_name: summary.template_name,
            markdown_formatted: summary.markdown_formatted,
        },
        None => SummaryView::NotFound {
            recording_id,
            error: NO_SUMMARY_MESSAGE.to_string(),
        },
    }
}

fn project_segment(segment: Segment) -> SegmentView {
    SegmentView {
        text: segment.text.unwrap_or_default(),
        timestamp: segment.timestamp,
        speaker: non_default::<Speaker>(segment.speaker).map(|speaker| SpeakerView {
            display_name: speaker
                .display_name
                .unwrap_or_else(|| UNKNOWN_SPEAKER.to_string()),
            email: speaker.matched_calendar_invitee_email,
        }),
    }
}

pub fn project_transcript(
    recording_id: i64,
    envelope: transcription::Transcript,
) -> TranscriptView {
    let transcript: Vec<SegmentView> = envelope
        .transcript
        .into_iter()
        .map(project_segment)
        .collect();

    TranscriptView {
        recording_id,
        segment_count: transcript.len(),
        transcript,
    }
}
