//! API key authentication for service providers.
//!
//! Provides the trait and implementation for authenticating requests to services
//! that use a static API key header (Fathom).

mod auth;

pub use auth::{ApiKeyAuth, ApiKeyProvider, ProviderAuth};
