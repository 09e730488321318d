//! Meeting operations exposed by the MCP server.
//!
//! `meeting` holds the three tool-level operations. They are generic over
//! [`meeting_ai::traits::recording::Provider`] so they can run against the Fathom gateway
//! in production and a mock in tests. `search` and `projection` are the pure pieces those
//! operations compose.

pub use meeting_ai::types::recording::InviteeDomainsType;
pub use meeting_ai::Filters;

pub mod error;
pub mod meeting;
pub mod projection;
pub mod search;

pub mod gateway;
