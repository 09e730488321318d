//! Raw provider record types.
//!
//! Every field is optional on the wire; absent values deserialize to `None` or an empty
//! collection and are read through default-valued accessors.

pub mod recording;
pub mod summary;
pub mod transcription;
