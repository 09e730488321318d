//! Provider traits.

pub mod recording;
