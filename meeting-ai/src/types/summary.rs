//! Types for AI-generated meeting summaries.

use serde::{Deserialize, Serialize};

/// A summary rendered from one of the provider's templates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Summary {
    pub template_name: Option<String>,
    pub markdown_formatted: Option<String>,
}

/// Response body of the per-recording summary endpoint.
///
/// `summary` is absent (or null) while the provider has not produced one yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Envelope {
    pub summary: Option<Summary>,
}
