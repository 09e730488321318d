//! Types for recorded meetings and the filters used to list them.

use serde::{Deserialize, Serialize};

use super::summary::Summary;
use super::transcription::Segment;

/// The user who recorded a meeting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordedBy {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// A calendar invitee of a recorded meeting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Invitee {
    pub name: Option<String>,
    pub email: Option<String>,
    pub is_external: Option<bool>,
}

impl Invitee {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }
}

/// An action item the provider extracted from the recording.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionItem {
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub recording_timestamp: Option<String>,
}

/// A recorded meeting as returned by the provider's listing endpoint.
///
/// `recording_id` is assigned by the provider and is the only key needed to fetch the
/// summary or transcript of the meeting later on. Sub-resources (`default_summary`,
/// `transcript`, `action_items`) are only populated when they were requested through
/// [`Filters`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeetingRecord {
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
    pub recorded_by: Option<RecordedBy>,
    pub calendar_invitees: Option<Vec<Invitee>>,
    pub default_summary: Option<Summary>,
    pub transcript: Option<Vec<Segment>>,
    pub action_items: Option<Vec<ActionItem>>,
}

impl MeetingRecord {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn meeting_title(&self) -> &str {
        self.meeting_title.as_deref().unwrap_or_default()
    }

    pub fn calendar_invitees(&self) -> &[Invitee] {
        self.calendar_invitees.as_deref().unwrap_or_default()
    }

    pub fn transcript(&self) -> &[Segment] {
        self.transcript.as_deref().unwrap_or_default()
    }

    pub fn action_items(&self) -> &[ActionItem] {
        self.action_items.as_deref().unwrap_or_default()
    }
}

/// One page of meetings plus the opaque cursor for the following page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    pub items: Vec<MeetingRecord>,
    pub next_cursor: Option<String>,
}

/// Which invitee domains a meeting must have to be listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InviteeDomainsType {
    All,
    OnlyInternal,
    OneOrMoreExternal,
}

impl InviteeDomainsType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InviteeDomainsType::All => "all",
            InviteeDomainsType::OnlyInternal => "only_internal",
            InviteeDomainsType::OneOrMoreExternal => "one_or_more_external",
        }
    }
}

/// Server-side filters for listing meetings.
///
/// Unset fields are not sent to the provider at all. The `include_*` flags ask the
/// provider to embed the corresponding sub-resource in each [`MeetingRecord`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    pub cursor: Option<String>,
    pub created_after: Option<String>,
    pub created_before: Option<String>,
    pub include_summary: bool,
    pub include_transcript: bool,
    pub include_action_items: bool,
    pub recorded_by: Option<Vec<String>>,
    pub teams: Option<Vec<String>>,
    pub calendar_invitees_domains_type: Option<InviteeDomainsType>,
    pub invitee_domains: Option<Vec<String>>,
}
