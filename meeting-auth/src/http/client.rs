//! Authenticated HTTP client builder with middleware.

use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest_middleware::ClientBuilder;
use reqwest_retry::RetryTransientMiddleware;
use tracing::debug;

use super::{BackoffPolicy, ConnectFailuresOnly};
use crate::api_key::ProviderAuth;
use crate::error::Error;

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum number of retries.
    pub max_retries: u32,
    /// User agent string.
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_retries: 3,
            user_agent: format!("meeting-auth/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Authenticated HTTP client with middleware.
pub type AuthenticatedClient = reqwest_middleware::ClientWithMiddleware;

/// Builder for creating authenticated HTTP clients with middleware.
///
/// Provides a fluent API for constructing HTTP clients with:
/// - Authentication (API key header sent on every request)
/// - Transport-level retries with exponential backoff
/// - Timeout configuration
pub struct AuthenticatedClientBuilder {
    config: HttpClientConfig,
    auth: Option<Box<dyn ProviderAuth>>,
}

impl AuthenticatedClientBuilder {
    /// Create a new client builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: HttpClientConfig::default(),
            auth: None,
        }
    }

    /// Set the authentication provider.
    pub fn with_auth(mut self, auth: Box<dyn ProviderAuth>) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the maximum number of retries.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.config.max_retries = max_retries;
        self
    }

    /// Set the user agent string.
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.config.user_agent = user_agent;
        self
    }

    /// Build the configured HTTP client.
    ///
    /// # Returns
    ///
    /// An authenticated HTTP client with middleware configured, or an error when the
    /// credential cannot be encoded as a header or the TLS backend fails to initialize.
    pub fn build(self) -> Result<AuthenticatedClient, Error> {
        let mut headers = HeaderMap::new();
        if let Some(auth) = &self.auth {
            let (name, value) = auth.auth_header()?;
            debug!(
                "Attaching {} credentials via `{}` header",
                auth.provider().as_str(),
                name
            );
            headers.insert(name, value);
        }

        // Build the base reqwest client
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(self.config.timeout)
            .user_agent(self.config.user_agent)
            .default_headers(headers)
            .build()?;

        // Retry connection-level failures only; statuses surface to the caller
        let retry_policy = BackoffPolicy::new(self.config.max_retries);
        let client_with_middleware = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy_and_strategy(
                retry_policy,
                ConnectFailuresOnly,
            ))
            .build();

        Ok(client_with_middleware)
    }
}

impl Default for AuthenticatedClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_key::{ApiKeyAuth, ApiKeyProvider};
    use crate::error::{ApiKeyErrorKind, ErrorKind};
    use secrecy::SecretString;

    fn fathom_auth(key: &str) -> Box<dyn ProviderAuth> {
        Box::new(ApiKeyAuth::new(
            ApiKeyProvider::Fathom,
            SecretString::new(key.to_string()),
        ))
    }

    #[test]
    fn test_builder_default() {
        let builder = AuthenticatedClientBuilder::new();
        assert_eq!(builder.config.timeout, Duration::from_secs(30));
        assert_eq!(builder.config.max_retries, 3);
    }

    #[test]
    fn test_builder_with_timeout() {
        let builder = AuthenticatedClientBuilder::new().with_timeout(Duration::from_secs(60));
        assert_eq!(builder.config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_builder_with_max_retries() {
        let builder = AuthenticatedClientBuilder::new().with_max_retries(5);
        assert_eq!(builder.config.max_retries, 5);
    }

    #[tokio::test]
    async fn test_build_client() {
        let builder = AuthenticatedClientBuilder::new().with_auth(fathom_auth("key"));
        let result = builder.build();
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_build_fails_on_empty_key() {
        let result = AuthenticatedClientBuilder::new()
            .with_auth(fathom_auth(""))
            .build();

        let err = result.err().unwrap();
        assert_eq!(err.error_kind, ErrorKind::ApiKey(ApiKeyErrorKind::Missing));
    }

    #[tokio::test]
    async fn test_client_sends_api_key_header() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/ping")
            .match_header("x-api-key", "secret_123")
            .with_status(200)
            .create_async()
            .await;

        let client = AuthenticatedClientBuilder::new()
            .with_auth(fathom_auth("secret_123"))
            .build()
            .unwrap();

        let response = client
            .get(format!("{}/ping", server.url()))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_status_is_not_retried() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/flaky")
            .with_status(503)
            .expect(1)
            .create_async()
            .await;

        let client = AuthenticatedClientBuilder::new()
            .with_auth(fathom_auth("secret_123"))
            .build()
            .unwrap();

        let response = client
            .get(format!("{}/flaky", server.url()))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 503);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_read_timeout_is_not_retried() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let connections = Arc::new(AtomicUsize::new(0));
        let accepted = connections.clone();
        let _server = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                accepted.fetch_add(1, Ordering::SeqCst);
                held.push(socket);
            }
        });

        let client = AuthenticatedClientBuilder::new()
            .with_auth(fathom_auth("secret_123"))
            .with_timeout(Duration::from_millis(300))
            .with_max_retries(3)
            .build()
            .unwrap();

        let err = client
            .get(format!("http://{addr}/silent"))
            .send()
            .await
            .unwrap_err();
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(
            Error::from(err).error_kind,
            ErrorKind::Http(crate::error::HttpErrorKind::Timeout)
        );
        assert_eq!(connections.load(Ordering::SeqCst), 1);
    }
}
