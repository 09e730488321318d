use domain::meeting::ListOptions;
use domain::{Filters, InviteeDomainsType};
use schemars::JsonSchema;
use serde::Deserialize;

/// Invitee type filter accepted by `list_meetings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub(crate) enum InviteeType {
    All,
    OnlyInternal,
    OneOrMoreExternal,
}

impl From<InviteeType> for InviteeDomainsType {
    fn from(invitee_type: InviteeType) -> Self {
        match invitee_type {
            InviteeType::All => InviteeDomainsType::All,
            InviteeType::OnlyInternal => InviteeDomainsType::OnlyInternal,
            InviteeType::OneOrMoreExternal => InviteeDomainsType::OneOrMoreExternal,
        }
    }
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub(crate) struct ListMeetingsParams {
    /// Maximum number of meetings to return (1-50)
    pub(crate) limit: Option<i64>,
    /// Smart search: matches titles, attendee names, and email domains (e.g., 'Acme' finds acme.com)
    pub(crate) search: Option<String>,
    /// Pagination cursor from previous response
    pub(crate) cursor: Option<String>,
    /// Filter meetings created after this ISO timestamp (e.g., 2025-01-01T00:00:00Z)
    pub(crate) created_after: Option<String>,
    /// Filter meetings created before this ISO timestamp (e.g., 2025-12-31T23:59:59Z)
    pub(crate) created_before: Option<String>,
    /// Include AI-generated summary in the response
    #[serde(default)]
    pub(crate) include_summary: bool,
    /// Include full transcript in the response
    #[serde(default)]
    pub(crate) include_transcript: bool,
    /// Include action items in the response
    #[serde(default)]
    pub(crate) include_action_items: bool,
    /// Filter by email addresses of users who recorded the meetings
    pub(crate) recorded_by: Option<Vec<String>>,
    /// Filter by team names
    pub(crate) teams: Option<Vec<String>>,
    /// Filter by invitee type: 'all', 'only_internal', or 'one_or_more_external'
    pub(crate) calendar_invitees_domains_type: Option<InviteeType>,
    /// Filter by invitee email domains (e.g., ['acme.com', 'example.com'])
    pub(crate) invitee_domains: Option<Vec<String>>,
}

impl From<ListMeetingsParams> for ListOptions {
    fn from(params: ListMeetingsParams) -> Self {
        ListOptions {
            limit: params.limit,
            search: params.search,
            filters: Filters {
                cursor: params.cursor,
                created_after: params.created_after,
                created_before: params.created_before,
                include_summary: params.include_summary,
                include_transcript: params.include_transcript,
                include_action_items: params.include_action_items,
                recorded_by: params.recorded_by,
                teams: params.teams,
                calendar_invitees_domains_type: params
                    .calendar_invitees_domains_type
                    .map(InviteeDomainsType::from),
                invitee_domains: params.invitee_domains,
            },
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub(crate) struct RecordingParams {
    /// The recording ID of the meeting (from list_meetings)
    pub(crate) recording_id: i64,
}
