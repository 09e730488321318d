//! Tool definitions advertised through `tools/list`.

use schemars::{schema_for, JsonSchema};
use serde_json::Value;

use crate::params::meeting::{ListMeetingsParams, RecordingParams};
use crate::protocol::Tool;

pub const LIST_MEETINGS: &str = "list_meetings";
pub const GET_SUMMARY: &str = "get_summary";
pub const GET_TRANSCRIPT: &str = "get_transcript";

pub const SERVER_NAME: &str = "fathom-video-mcp";

pub const INSTRUCTIONS: &str = "Fathom Video MCP Server provides access to Fathom meeting recordings.

Available tools:
- list_meetings: List meetings with optional filtering by date, recorder, or team
- get_summary: Get the AI-generated summary for a specific meeting
- get_transcript: Get the full transcript with speaker attribution and timestamps

The recording_id from list_meetings is used to fetch summaries and transcripts.";

const LIST_MEETINGS_DESCRIPTION: &str = "List Fathom meetings with optional filtering.

Returns a paginated list of meetings. Use the recording_id from the results to fetch summaries or transcripts with get_summary or get_transcript.

The search and limit arguments are applied to a single page of results. next_cursor always points at the page after the one that was fetched, so a filtered page may hold fewer meetings than limit even when more matches exist further on.";

const GET_SUMMARY_DESCRIPTION: &str = "Get the AI-generated summary for a specific meeting recording.

Returns a markdown-formatted summary of the meeting including key points and discussion topics.";

const GET_TRANSCRIPT_DESCRIPTION: &str = "Get the full transcript for a specific meeting recording.

Returns timestamped transcript segments with speaker attribution. Each segment includes the speaker name, what they said, and when.";

fn input_schema<T: JsonSchema>() -> Value {
    serde_json::to_value(schema_for!(T)).unwrap_or_default()
}

pub fn definitions() -> Vec<Tool> {
    vec![
        Tool {
            name: LIST_MEETINGS,
            description: LIST_MEETINGS_DESCRIPTION,
            input_schema: input_schema::<ListMeetingsParams>(),
        },
        Tool {
            name: GET_SUMMARY,
            description: GET_SUMMARY_DESCRIPTION,
            input_schema: input_schema::<RecordingParams>(),
        },
        Tool {
            name: GET_TRANSCRIPT,
            description: GET_TRANSCRIPT_DESCRIPTION,
            input_schema: input_schema::<RecordingParams>(),
        },
    ]
}
