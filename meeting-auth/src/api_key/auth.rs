//! API key authentication trait and implementation.

use reqwest::header::{HeaderName, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use crate::error::{api_key_error, ApiKeyErrorKind, Error};

/// Known API key providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKeyProvider {
    Fathom,
}

impl ApiKeyProvider {
    /// Get the provider identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiKeyProvider::Fathom => "fathom",
        }
    }
}

/// Trait for authenticating HTTP requests with API keys.
///
/// Implementations produce the header that carries the credential, e.g.
/// - Fathom: `X-Api-Key: xxx`
pub trait ProviderAuth: Send + Sync {
    /// Get the provider identifier.
    fn provider(&self) -> ApiKeyProvider;

    /// Build the authentication header. The returned value is marked sensitive so it
    /// never shows up in debug output.
    fn auth_header(&self) -> Result<(HeaderName, HeaderValue), Error>;
}

/// API key authentication implementation.
///
/// The header name is derived from the provider.
///
/// # Examples
///
/// ```rust,ignore
/// // Fathom: X-Api-Key: xxx
/// let key = SecretString::new("api_key_here".to_string());
/// let auth = ApiKeyAuth::new(ApiKeyProvider::Fathom, key);
/// ```
pub struct ApiKeyAuth {
    provider: ApiKeyProvider,
    api_key: SecretString,
    header_name: &'static str,
}

impl ApiKeyAuth {
    /// Create a new API key authenticator.
    ///
    /// # Arguments
    ///
    /// * `provider` - The API provider
    /// * `api_key` - The API key (stored securely)
    pub fn new(provider: ApiKeyProvider, api_key: SecretString) -> Self {
        let header_name = match provider {
            ApiKeyProvider::Fathom => "x-api-key",
        };

        Self {
            provider,
            api_key,
            header_name,
        }
    }
}

impl ProviderAuth for ApiKeyAuth {
    fn provider(&self) -> ApiKeyProvider {
        self.provider
    }

    fn auth_header(&self) -> Result<(HeaderName, HeaderValue), Error> {
        let key = self.api_key.expose_secret();
        if key.trim().is_empty() {
            return Err(api_key_error(
                ApiKeyErrorKind::Missing,
                "API key must not be empty",
            ));
        }

        let mut value = HeaderValue::from_str(key).map_err(|_| {
            api_key_error(
                ApiKeyErrorKind::InvalidFormat,
                "API key contains characters that are not valid in an HTTP header",
            )
        })?;
        value.set_sensitive(true);

        Ok((HeaderName::from_static(self.header_name), value))
    }
}
