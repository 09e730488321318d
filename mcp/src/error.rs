use std::error::Error as StdError;

use domain::error::{DomainErrorKind, Error as DomainError, InternalErrorKind};

use crate::protocol::CallToolResult;

pub type Result<T> = core::result::Result<T, Error>;

/// Failure of a tool call, reported back to the agent as an error result.
#[derive(Debug)]
pub struct Error(DomainError);

impl StdError for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> core::result::Result<(), std::fmt::Error> {
        write!(fmt, "{}", self.message())
    }
}

impl Error {
    /// Text shown to the agent. Configuration errors carry remediation guidance, which is
    /// passed through verbatim.
    pub fn message(&self) -> String {
        match (&self.0.error_kind, &self.0.source) {
            (DomainErrorKind::Internal(InternalErrorKind::Config), Some(source)) => {
                source.to_string()
            }
            _ => self.0.to_string(),
        }
    }

    pub fn into_tool_result(self) -> CallToolResult {
        CallToolResult::error(self.message())
    }
}

impl<E> From<E> for Error
where
    E: Into<DomainError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
