//! Controller for the meeting tools.
//!
//! Each handler builds a Fathom client from the current configuration, runs one domain
//! operation and returns its JSON value.

use crate::error::Result;
use crate::params::meeting::{ListMeetingsParams, RecordingParams};

use domain::gateway::fathom::FathomClient;
use domain::meeting as MeetingApi;
use log::*;
use serde_json::Value;
use service::AppState;

/// `list_meetings` tool.
pub(crate) async fn list_meetings(
    app_state: &AppState,
    params: ListMeetingsParams,
) -> Result<Value> {
    info!(
        "list_meetings: limit {:?}, search {:?}",
        params.limit, params.search
    );

    let client = FathomClient::new(&app_state.config)?;
    let meetings = MeetingApi::list(&client, params.into()).await?;

    debug!("list_meetings returned {} meetings", meetings.count);
    Ok(serde_json::to_value(meetings)?)
}

/// `get_summary` tool.
pub(crate) async fn get_summary(
    app_state: &AppState,
    params: RecordingParams,
) -> Result<Value> {
    info!("get_summary: recording {}", params.recording_id);

    let client = FathomClient::new(&app_state.config)?;
    let summary = MeetingApi::summary(&client, params.recording_id).await?;

    Ok(serde_json::to_value(summary)?)
}

/// `get_transcript` tool.
pub(crate) async fn get_transcript(
    app_state: &AppState,
    params: RecordingParams,
) -> Result<Value> {
    info!("get_transcript: recording {}", params.recording_id);

    let client = FathomClient::new(&app_state.config)?;
    let transcript = MeetingApi::transcript(&client, params.recording_id).await?;

    debug!(
        "get_transcript returned {} segments",
        transcript.segment_count
    );
    Ok(serde_json::to_value(transcript)?)
}
