use crate::config::Config;
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// HTTP stack modules silenced below Trace; they log every connection and retry.
const FILTERED_MODULES: &[&str] = &[
    "reqwest",
    "reqwest_retry",
    "hyper",
    "hyper_util",
    "rustls",
    "h2",
];

pub struct Logger {}

impl Logger {
    /// Initializes the global logger at the configured level.
    ///
    /// Output goes to stderr only: stdout carries the protocol stream.
    pub fn init_logger(config: &Config) {
        let log_config = Self::build_log_config(config.log_level_filter);

        TermLogger::init(
            config.log_level_filter,
            log_config,
            TerminalMode::Stderr,
            ColorChoice::Auto,
        )
        .expect("Failed to start simplelog");
    }

    fn filtered_modules(level: LevelFilter) -> &'static [&'static str] {
        if level == LevelFilter::Trace {
            &[]
        } else {
            FILTERED_MODULES
        }
    }

    fn build_log_config(level: LevelFilter) -> simplelog::Config {
        let mut builder = ConfigBuilder::new();
        builder.set_time_format_rfc3339();

        for module in Self::filtered_modules(level) {
            builder.add_filter_ignore_str(module);
        }

        builder.build()
    }
}
