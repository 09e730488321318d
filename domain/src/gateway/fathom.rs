//! Fathom external API client.
//!
//! Implements [`Provider`] on top of an authenticated client from `meeting-auth`. The API key
//! comes from the [`Config`] parsed at startup; a client is built from it for every tool call
//! and dropped when the call returns.

use crate::error::Error;
use log::*;
use meeting_ai::traits::recording::Provider;
use meeting_ai::types::{summary, transcription};
use meeting_ai::{Error as ProviderError, Filters, Page};
use meeting_auth::api_key::{ApiKeyAuth, ApiKeyProvider};
use meeting_auth::error::{ErrorKind as MeetingAuthErrorKind, HttpErrorKind};
use meeting_auth::http::{AuthenticatedClient, AuthenticatedClientBuilder};
use meeting_auth::providers::{fathom_config, ProviderConfig};
use reqwest::header::RETRY_AFTER;
use secrecy::SecretString;
use serde::de::DeserializeOwned;
use service::config::{Config, MISSING_API_KEY_MESSAGE};

/// Fathom API client bound to one API key.
pub struct FathomClient {
    client: AuthenticatedClient,
    provider: ProviderConfig,
}

impl FathomClient {
    /// Build a client from the current configuration.
    ///
    /// Fails with a configuration error carrying [`MISSING_API_KEY_MESSAGE`] when no API key
    /// is set; no request is made in that case.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let api_key = config.fathom_api_key().ok_or_else(|| {
            warn!("Fathom API key is not configured");
            Error::config(MISSING_API_KEY_MESSAGE)
        })?;

        let auth = ApiKeyAuth::new(ApiKeyProvider::Fathom, SecretString::new(api_key));
        let client = AuthenticatedClientBuilder::new()
            .with_auth(Box::new(auth))
            .with_timeout(config.request_timeout())
            .with_max_retries(config.max_retries)
            .with_user_agent(format!("fathom-video-mcp/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            provider: fathom_config(&config.fathom_base_url()),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, ProviderError> {
        let url = self.provider.endpoint(path);
        debug!("GET {} ({} query parameters)", url, query.len());

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                warn!("Failed to reach Fathom API at {}: {:?}", url, e);
                let err = meeting_auth::Error::from(e);
                match err.error_kind {
                    MeetingAuthErrorKind::Http(HttpErrorKind::Timeout) => {
                        ProviderError::Timeout(err.to_string())
                    }
                    _ => ProviderError::Network(err.to_string()),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.trim().parse::<u64>().ok());
            let body = response.text().await.unwrap_or_default();
            error!("Fathom API returned {} for {}: {}", status, path, body);
            return Err(ProviderError::from_status(status.as_u16(), body, retry_after));
        }

        let body = response.text().await.map_err(|e| {
            warn!("Failed to read Fathom API response body: {:?}", e);
            ProviderError::Network(e.to_string())
        })?;

        serde_json::from_str(&body).map_err(|e| {
            warn!("Failed to parse Fathom API response for {}: {:?}", path, e);
            ProviderError::from(e)
        })
    }
}

/// Query parameters for `GET /meetings`. Unset filters are left out entirely and list
/// filters repeat their key once per value.
pub fn query_pairs(filters: &Filters) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();

    let singles = [
        ("cursor", &filters.cursor),
        ("created_after", &filters.created_after),
        ("created_before", &filters.created_before),
    ];
    for (key, value) in singles {
        if let Some(value) = value {
            pairs.push((key, value.clone()));
        }
    }

    let flags = [
        ("include_summary", filters.include_summary),
        ("include_transcript", filters.include_transcript),
        ("include_action_items", filters.include_action_items),
    ];
    for (key, set) in flags {
        if set {
            pairs.push((key, "true".to_string()));
        }
    }

    let lists = [
        ("recorded_by", &filters.recorded_by),
        ("teams", &filters.teams),
    ];
    for (key, values) in lists {
        for value in values.iter().flatten() {
            pairs.push((key, value.clone()));
        }
    }

    if let Some(domains_type) = filters.calendar_invitees_domains_type {
        pairs.push((
            "calendar_invitees_domains_type",
            domains_type.as_str().to_string(),
        ));
    }
    for domain in filters.invitee_domains.iter().flatten() {
        pairs.push(("calendar_invitees_domains[]", domain.clone()));
    }

    pairs
}

#[async_trait::async_trait]
impl Provider for FathomClient {
    async fn list_meetings(&self, filters: &Filters) -> Result<Page, ProviderError> {
        self.get_json("/meetings", &query_pairs(filters)).await
    }

    async fn get_summary(&self, recording_id: i64) -> Result<summary::Envelope, ProviderError> {
        self.get_json(&format!("/recordings/{recording_id}/summary"), &[])
            .await
    }

    async fn get_transcript(
        &self,
        recording_id: i64,
    ) -> Result<transcription::Transcript, ProviderError> {
        self.get_json(&format!("/recordings/{recording_id}/transcript"), &[])
            .await
    }

    fn provider_id(&self) -> &str {
        self.provider.provider.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DomainErrorKind, InternalErrorKind};
    use meeting_ai::types::recording::InviteeDomainsType;
    use mockito::Matcher;
    use serde_json::json;

    const KEY: &str = "test_key_123";

    fn config(base_url: &str) -> Config {
        let mut config = Config::from_args(["fathom_mcp_rs"])
            .unwrap()
            .set_fathom_api_key(Some(KEY.to_string()))
            .set_fathom_base_url(base_url.to_string());
        config.max_retries = 0;
        config.request_timeout_secs = 5;
        config
    }

    fn client(server: &mockito::Server) -> FathomClient {
        FathomClient::new(&config(&server.url())).unwrap()
    }

    #[test]
    fn test_new_without_api_key_is_config_error() {
        let config = config("http://127.0.0.1:1").set_fathom_api_key(None);

        let err = FathomClient::new(&config).err().unwrap();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::Internal(InternalErrorKind::Config)
        );
        assert!(err.to_string().contains(MISSING_API_KEY_MESSAGE));
    }

    #[test]
    fn test_new_with_blank_api_key_is_config_error() {
        let config = config("http://127.0.0.1:1").set_fathom_api_key(Some("  ".to_string()));

        assert!(FathomClient::new(&config).is_err());
    }

    #[test]
    fn test_query_pairs_omits_unset_filters() {
        assert!(query_pairs(&Filters::default()).is_empty());
    }

    #[test]
    fn test_query_pairs_full() {
        let filters = Filters {
            cursor: Some("abc".to_string()),
            created_after: Some("2025-01-01T00:00:00Z".to_string()),
            created_before: None,
            include_summary: true,
            include_transcript: false,
            include_action_items: true,
            recorded_by: Some(vec!["a@x.com".to_string(), "b@x.com".to_string()]),
            teams: Some(vec!["Sales".to_string()]),
            calendar_invitees_domains_type: Some(InviteeDomainsType::OneOrMoreExternal),
            invitee_domains: Some(vec!["acme.com".to_string()]),
        };

        let pairs = query_pairs(&filters);

        let expected: Vec<(&str, String)> = vec![
            ("cursor", "abc".to_string()),
            ("created_after", "2025-01-01T00:00:00Z".to_string()),
            ("include_summary", "true".to_string()),
            ("include_action_items", "true".to_string()),
            ("recorded_by", "a@x.com".to_string()),
            ("recorded_by", "b@x.com".to_string()),
            ("teams", "Sales".to_string()),
            (
                "calendar_invitees_domains_type",
                "one_or_more_external".to_string(),
            ),
            ("calendar_invitees_domains[]", "acme.com".to_string()),
        ];
        assert_eq!(pairs, expected);
    }

    #[tokio::test]
    async fn test_list_meetings_sends_key_and_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/meetings")
            .match_header("x-api-key", KEY)
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("cursor".into(), "abc".into()),
                Matcher::UrlEncoded("include_summary".into(), "true".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "items": [{ "recording_id": 1, "title": "Kickoff" }],
                    "next_cursor": "def"
                })
                .to_string(),
            )
            .expect(1)
            .create_async()
            .await;

        let filters = Filters {
            cursor: Some("abc".to_string()),
            include_summary: true,
            ..Default::default()
        };
        let page = client(&server).list_meetings(&filters).await.unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].title(), "Kickoff");
        assert_eq!(page.next_cursor.as_deref(), Some("def"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_summary_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/recordings/42/summary")
            .with_status(200)
            .with_body(r###"{"summary":{"template_name":"General","markdown_formatted":"## Hi"}}"###)
            .create_async()
            .await;

        let envelope = client(&server).get_summary(42).await.unwrap();

        let summary = envelope.summary.unwrap();
        assert_eq!(summary.template_name.as_deref(), Some("General"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_summary_null_summary() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/recordings/42/summary")
            .with_status(200)
            .with_body(r#"{"summary":null}"#)
            .create_async()
            .await;

        let envelope = client(&server).get_summary(42).await.unwrap();

        assert!(envelope.summary.is_none());
    }

    #[tokio::test]
    async fn test_get_transcript_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/recordings/7/transcript")
            .with_status(200)
            .with_body(r#"{"transcript":[{"text":"hi","timestamp":"00:00:01"}]}"#)
            .create_async()
            .await;

        let transcript = client(&server).get_transcript(7).await.unwrap();

        assert_eq!(transcript.transcript.len(), 1);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_not_found_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/recordings/404/transcript")
            .with_status(404)
            .with_body("not found")
            .create_async()
            .await;

        let err = client(&server).get_transcript(404).await.unwrap_err();

        assert!(matches!(err, ProviderError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_unauthorized_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/meetings")
            .with_status(401)
            .create_async()
            .await;

        let err = client(&server)
            .list_meetings(&Filters::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::Authentication(_)));
    }

    #[tokio::test]
    async fn test_rate_limited_reads_retry_after() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/meetings")
            .with_status(429)
            .with_header("retry-after", "12")
            .create_async()
            .await;

        let err = client(&server)
            .list_meetings(&Filters::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ProviderError::RateLimited {
                retry_after_seconds: Some(12)
            }
        ));
    }

    #[tokio::test]
    async fn test_server_error_is_not_retried() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/meetings")
            .with_status(500)
            .with_body("boom")
            .expect(1)
            .create_async()
            .await;

        let config = {
            let mut config = config(&server.url());
            config.max_retries = 3;
            config
        };
        let err = FathomClient::new(&config)
            .unwrap()
            .list_meetings(&Filters::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::Provider { status: 500, .. }));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_invalid_json_is_deserialization_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/meetings")
            .with_status(200)
            .with_body("<html>oops</html>")
            .create_async()
            .await;

        let err = client(&server)
            .list_meetings(&Filters::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::Deserialization(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let client = FathomClient::new(&config("http://127.0.0.1:1")).unwrap();

        let err = client.get_summary(1).await.unwrap_err();

        assert!(matches!(err, ProviderError::Network(_)));
    }

    #[tokio::test]
    async fn test_provider_id() {
        let client = FathomClient::new(&config("http://127.0.0.1:1")).unwrap();
        assert_eq!(client.provider_id(), "fathom");
    }
}
