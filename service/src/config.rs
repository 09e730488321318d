use clap::builder::TypedValueParser as _;
use clap::Parser;
use dotenvy::dotenv;
use log::LevelFilter;
use std::ffi::OsString;
use std::time::Duration;

/// Default Fathom API base URL used when `FATHOM_BASE_URL` is not set.
pub const DEFAULT_FATHOM_BASE_URL: &str = "https://api.fathom.ai/external/v1";

/// Message returned to the caller when no API key is configured.
pub const MISSING_API_KEY_MESSAGE: &str =
    "FATHOM_API_KEY environment variable is required. Get your API key from Fathom settings.";

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// The API key to use when calling the Fathom API. Only checked when a tool is called,
    /// so the server can start and list its tools without it.
    #[arg(long, env, hide_env_values = true)]
    fathom_api_key: Option<String>,

    /// The base URL of the Fathom external API.
    /// Override in tests to point at a mock server.
    #[arg(long, env, default_value = DEFAULT_FATHOM_BASE_URL)]
    fathom_base_url: String,

    /// Timeout in seconds for a single request to the Fathom API
    #[arg(long, env, default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Number of times a request is retried after a connection failure or timeout
    #[arg(long, env, default_value_t = 3)]
    pub max_retries: u32,

    /// Set the log level verbosity threshold (level) to control what gets written to stderr
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap()),
        )]
    pub log_level_filter: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        // Load .env file first
        dotenv().ok();
        // Then parse the command line parameters and flags
        Config::parse()
    }

    /// Parse configuration from an explicit argument list (environment fallbacks still apply).
    /// The first item is the binary name.
    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Config::try_parse_from(args)
    }

    /// Returns the Fathom API key, if configured.
    pub fn fathom_api_key(&self) -> Option<String> {
        self.fathom_api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
    }

    pub fn set_fathom_api_key(mut self, fathom_api_key: Option<String>) -> Self {
        self.fathom_api_key = fathom_api_key;
        self
    }

    /// Returns the Fathom API base URL.
    pub fn fathom_base_url(&self) -> &str {
        &self.fathom_base_url
    }

    pub fn set_fathom_base_url(mut self, fathom_base_url: String) -> Self {
        self.fathom_base_url = fathom_base_url;
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
