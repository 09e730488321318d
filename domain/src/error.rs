//! Error types for the `domain` layer.
use meeting_ai::Error as ProviderError;
use meeting_auth::error::{Error as MeetingAuthError, ErrorKind as MeetingAuthErrorKind, HttpErrorKind};
use std::error::Error as StdError;
use std::fmt;

/// Top-level domain error type.
/// Errors in the Domain layer are modeled as a tree structure
/// with `domain::error::Error` as the root type holding a tree of `error_kind`
/// enums that represent the kinds of errors that can occur in the domain layer or
/// in lower layers. The `source` field is used to hold the original error that caused
/// the domain error. The intent is to translate errors between layers while maintaining
/// layer boundaries. Ex. `domain` is dependent on `meeting-ai`, and `mcp` is dependent on `domain`,
/// but `mcp` should not be dependent, directly, on `meeting-ai` errors. Ultimately the various
/// `error_kind`s are used by `mcp` to build the message returned to the agent.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: DomainErrorKind,
}

/// Enum representing the major categories of errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum DomainErrorKind {
    Internal(InternalErrorKind),
    External(ExternalErrorKind),
}

/// Enum representing the various kinds of internal errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum InternalErrorKind {
    Config,
    Other(String),
}

/// Enum representing the various kinds of failures of the remote meeting API.
#[derive(Debug, PartialEq)]
pub enum ExternalErrorKind {
    Network,
    Timeout,
    Authentication,
    NotFound,
    RateLimited,
    Api { status: u16 },
    InvalidResponse,
    Other(String),
}

impl Error {
    /// Configuration error carrying a message meant to be shown to the caller as-is.
    pub fn config(message: &str) -> Self {
        Error {
            source: Some(message.to_string().into()),
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Config),
        }
    }
}

impl fmt::Display for DomainErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DomainErrorKind::Internal(InternalErrorKind::Config) => write!(f, "Configuration error"),
            DomainErrorKind::Internal(InternalErrorKind::Other(msg)) => {
                write!(f, "Internal error: {msg}")
            }
            DomainErrorKind::External(ExternalErrorKind::Network) => {
                write!(f, "Could not reach the Fathom API")
            }
            DomainErrorKind::External(ExternalErrorKind::Timeout) => {
                write!(f, "The Fathom API did not respond in time")
            }
            DomainErrorKind::External(ExternalErrorKind::Authentication) => {
                write!(f, "The Fathom API rejected the API key")
            }
            DomainErrorKind::External(ExternalErrorKind::NotFound) => {
                write!(f, "The Fathom API returned 404 Not Found")
            }
            DomainErrorKind::External(ExternalErrorKind::RateLimited) => {
                write!(f, "The Fathom API rate limit was exceeded")
            }
            DomainErrorKind::External(ExternalErrorKind::Api { status }) => {
                write!(f, "The Fathom API returned HTTP {status}")
            }
            DomainErrorKind::External(ExternalErrorKind::InvalidResponse) => {
                write!(f, "The Fathom API returned an unexpected response")
            }
            DomainErrorKind::External(ExternalErrorKind::Other(msg)) => {
                write!(f, "Fathom API error: {msg}")
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "{}: {}", self.error_kind, source),
            None => write!(f, "{}", self.error_kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

// This is where we translate errors from the provider layer (`meeting-ai`) to the `domain` layer.
impl From<ProviderError> for Error {
    fn from(err: ProviderError) -> Self {
        let error_kind = match &err {
            ProviderError::Authentication(_) => {
                DomainErrorKind::External(ExternalErrorKind::Authentication)
            }
            ProviderError::Network(_) => DomainErrorKind::External(ExternalErrorKind::Network),
            ProviderError::Configuration(_) => DomainErrorKind::Internal(InternalErrorKind::Config),
            ProviderError::Provider { status, .. } => {
                DomainErrorKind::External(ExternalErrorKind::Api { status: *status })
            }
            ProviderError::Timeout(_) => DomainErrorKind::External(ExternalErrorKind::Timeout),
            ProviderError::NotFound(_) => DomainErrorKind::External(ExternalErrorKind::NotFound),
            ProviderError::RateLimited { .. } => {
                DomainErrorKind::External(ExternalErrorKind::RateLimited)
            }
            ProviderError::Deserialization(_) => {
                DomainErrorKind::External(ExternalErrorKind::InvalidResponse)
            }
            ProviderError::Other(_) => {
                DomainErrorKind::External(ExternalErrorKind::Other("provider failure".to_string()))
            }
        };

        Error {
            source: Some(Box::new(err)),
            error_kind,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error {
            source: Some(Box::new(err)),
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Other(
                "Failed to serialize result".to_string(),
            )),
        }
    }
}

impl From<MeetingAuthError> for Error {
    fn from(err: MeetingAuthError) -> Self {
        let error_kind = match &err.error_kind {
            MeetingAuthErrorKind::ApiKey(_) => DomainErrorKind::Internal(InternalErrorKind::Config),
            MeetingAuthErrorKind::Http(HttpErrorKind::BuilderFailed) => DomainErrorKind::Internal(
                InternalErrorKind::Other("Failed to build HTTP client".to_string()),
            ),
            MeetingAuthErrorKind::Http(HttpErrorKind::Timeout) => {
                DomainErrorKind::External(ExternalErrorKind::Timeout)
            }
            MeetingAuthErrorKind::Http(_) => DomainErrorKind::External(ExternalErrorKind::Network),
        };
        Error {
            source: Some(Box::new(err)),
            error_kind,
        }
    }
}
