//! Pre-defined provider configurations.

mod config;

pub use config::{fathom_config, ProviderConfig};
