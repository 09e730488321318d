//! Meeting recording provider trait.

use crate::types::recording::{Filters, Page};
use crate::types::{summary, transcription};
use crate::Error;
use async_trait::async_trait;

/// Read-only access to a meeting-recording service.
///
/// Implementations wrap one provider's HTTP API (Fathom today). Every method performs a
/// single request; nothing is cached between calls.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Fetch one page of meetings matching the server-side filters.
    ///
    /// The returned `next_cursor` is opaque and must be passed back unchanged through
    /// `Filters::cursor` to fetch the following page.
    async fn list_meetings(&self, filters: &Filters) -> std::result::Result<Page, Error>;

    /// Fetch the AI-generated summary of a recording.
    ///
    /// A recording without a summary yet is not an error: the envelope's `summary` is `None`.
    async fn get_summary(&self, recording_id: i64) -> std::result::Result<summary::Envelope, Error>;

    /// Fetch the full transcript of a recording.
    async fn get_transcript(
        &self,
        recording_id: i64,
    ) -> std::result::Result<transcription::Transcript, Error>;

    /// Return unique identifier for this provider (e.g., "fathom").
    ///
    /// Used for logging. Must be lowercase, alphanumeric with underscores only.
    fn provider_id(&self) -> &str;
}
