//! Meeting AI abstraction layer for meeting-recording providers.
//!
//! This crate provides the provider-agnostic pieces the rest of the workspace builds on:
//! - Raw record types as returned by a recording provider (meetings, summaries, transcripts)
//! - The [`traits::recording::Provider`] trait for read-only access to those records
//! - A unified [`Error`] that providers map their native failures into
//!
//! Fathom is the only provider implemented today (see `domain::gateway::fathom`).

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::Error;
pub use types::recording::{Filters, MeetingRecord, Page};
