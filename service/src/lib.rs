use config::Config;

pub mod config;
pub mod logging;

// Service-level state containing only infrastructure concerns.
// Cloned into every tool call; holds no per-call or cached data.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(app_config: Config) -> Self {
        Self { config: app_config }
    }
}
