//! # meeting-auth
//!
//! Authentication and HTTP plumbing for the meeting-recording providers this server talks to:
//! - API key authentication (Fathom uses a static `X-Api-Key` header)
//! - HTTP client building with retry middleware
//! - Pre-defined provider endpoint configuration
//!
//! ## Architecture
//!
//! `domain` gateways build one authenticated client per outbound call with
//! [`http::AuthenticatedClientBuilder`] and drop it when the call returns.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use meeting_auth::{
//!     api_key::{ApiKeyAuth, ApiKeyProvider},
//!     http::AuthenticatedClientBuilder,
//! };
//!
//! let auth = ApiKeyAuth::new(ApiKeyProvider::Fathom, SecretString::new(key));
//! let client = AuthenticatedClientBuilder::new().with_auth(Box::new(auth)).build()?;
//! ```

pub mod api_key;
pub mod error;
pub mod http;
pub mod providers;

// Re-export commonly used types
pub use error::{Error, ErrorKind};
