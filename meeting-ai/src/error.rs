//! Error types for meeting provider operations.

use std::fmt;

/// Universal error type that abstracts provider-specific errors into common variants.
///
/// All provider implementations map their native errors to these variants, preserving
/// context while keeping callers provider-agnostic.
#[derive(Debug)]
pub enum Error {
    /// API key rejected by the provider (HTTP 401/403). The key is invalid, revoked,
    /// or lacks access to the requested recording.
    Authentication(String),

    /// Network connectivity issues, DNS failures, or refused connections that persisted
    /// through the transport's retries.
    Network(String),

    /// Missing or malformed client-side configuration (e.g. an API key that cannot be sent
    /// as a header).
    Configuration(String),

    /// Any other non-success status from the provider. Carries the status code and the
    /// response body verbatim.
    Provider { status: u16, message: String },

    /// Request exceeded the configured timeout after the transport's retries.
    Timeout(String),

    /// Requested resource (meeting, recording) does not exist (HTTP 404).
    NotFound(String),

    /// Provider rate limit exceeded (HTTP 429).
    RateLimited { retry_after_seconds: Option<u64> },

    /// Response body did not match the expected shape.
    Deserialization(String),

    /// Catch-all for errors that don't fit other categories.
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Map a non-success HTTP status and its body onto the matching variant.
    pub fn from_status(status: u16, body: String, retry_after_seconds: Option<u64>) -> Self {
        match status {
            401 | 403 => Error::Authentication(format!("{} {}", status, body)),
            404 => Error::NotFound(body),
            429 => Error::RateLimited {
                retry_after_seconds,
            },
            _ => Error::Provider {
                status,
                message: body,
            },
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Authentication(msg) => write!(f, "Authentication failed: {}", msg),
            Error::Network(msg) => write!(f, "Network error: {}", msg),
            Error::Configuration(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::Provider { status, message } => {
                write!(f, "Provider error: HTTP {}: {}", status, message)
            }
            Error::Timeout(msg) => write!(f, "Timeout: {}", msg),
            Error::NotFound(msg) => write!(f, "Not found: {}", msg),
            Error::RateLimited {
                retry_after_seconds: Some(seconds),
            } => write!(f, "Rate limited: retry after {}s", seconds),
            Error::RateLimited {
                retry_after_seconds: None,
            } => write!(f, "Rate limited"),
            Error::Deserialization(msg) => write!(f, "Deserialization error: {}", msg),
            Error::Other(err) => write!(f, "Other error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Other(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Deserialization(err.to_string())
    }
}
