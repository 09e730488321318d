//! Tool-level operations over a meeting provider: list, summary and transcript.
//!
//! These functions own the client-side part of each call (search filtering, limit
//! clamping, projection) and delegate everything else to a [`Provider`].

use crate::error::Error;
use crate::projection::{
    project_meeting, project_summary, project_transcript, MeetingView, ProjectionOptions,
    SummaryView, TranscriptView,
};
use crate::search;
use log::*;
use meeting_ai::traits::recording::Provider;
use meeting_ai::{Filters, MeetingRecord};
use serde::Serialize;

/// Largest number of meetings a single `list` call will return.
pub const MAX_LIMIT: usize = 50;

/// Caller-facing options for [`list`].
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub limit: Option<i64>,
    pub search: Option<String>,
    pub filters: Filters,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeetingList {
    pub meetings: Vec<MeetingView>,
    pub count: usize,
    /// Cursor of the provider page, passed through unchanged even when search
    /// filtering or the limit shrank the page.
    pub next_cursor: Option<String>,
}

/// Clamp a requested limit into `1..=MAX_LIMIT`. `None` means no truncation.
pub fn clamp_limit(limit: Option<i64>) -> Option<usize> {
    limit.map(|limit| limit.clamp(1, MAX_LIMIT as i64) as usize)
}

/// Keep the records matching `search` (when given), then truncate to `limit`.
pub fn filter_and_limit(
    records: Vec<MeetingRecord>,
    search: Option<&str>,
    limit: Option<usize>,
) -> Vec<MeetingRecord> {
    let term = search.filter(|s| !s.is_empty()).map(search::normalize);

    records
        .into_iter()
        .filter(|record| match &term {
            Some(term) => search::matches(record, term),
            None => true,
        })
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}

pub async fn list<P: Provider + ?Sized>(
    provider: &P,
    options: ListOptions,
) -> Result<MeetingList, Error> {
    let limit = clamp_limit(options.limit);
    let projection = ProjectionOptions {
        include_summary: options.filters.include_summary,
        include_transcript: options.filters.include_transcript,
        include_action_items: options.filters.include_action_items,
    };

    let page = provider.list_meetings(&options.filters).await?;
    let fetched = page.items.len();

    let meetings: Vec<MeetingView> =
        filter_and_limit(page.items, options.search.as_deref(), limit)
            .iter()
            .map(|record| project_meeting(record, projection))
            .collect();

    debug!(
        "Listed {} of {} fetched meetings (search: {:?}, limit: {:?})",
        meetings.len(),
        fetched,
        options.search,
        limit
    );

    Ok(MeetingList {
        count: meetings.len(),
        meetings,
        next_cursor: page.next_cursor,
    })
}

pub async fn summary<P: Provider + ?Sized>(
    provider: &P,
    recording_id: i64,
) -> Result<SummaryView, Error> {
    let envelope = provider.get_summary(recording_id).await?;
    if envelope.summary.is_none() {
        info!("Recording {recording_id} has no summary yet");
    }
    Ok(project_summary(recording_id, envelope))
}

pub async fn transcript<P: Provider + ?Sized>(
    provider: &P,
    recording_id: i64,
) -> Result<TranscriptView, Error> {
    let transcript = provider.get_transcript(recording_id).await?;
    Ok(project_transcript(recording_id, transcript))
}
