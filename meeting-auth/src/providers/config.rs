//! Pre-configured provider settings.

use crate::api_key::ApiKeyProvider;

/// Provider configuration with endpoints and settings.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Provider identifier.
    pub provider: ApiKeyProvider,
    /// Base API URL, never ending in `/`.
    pub base_url: String,
}

impl ProviderConfig {
    /// Join an endpoint path (starting with `/`) onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Get Fathom configuration.
///
/// # Arguments
///
/// * `base_url` - API base URL (`https://api.fathom.ai/external/v1` in production)
pub fn fathom_config(base_url: &str) -> ProviderConfig {
    ProviderConfig {
        provider: ApiKeyProvider::Fathom,
        base_url: base_url.trim_end_matches('/').to_string(),
    }
}
