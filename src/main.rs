use log::*;
use service::{config::Config, logging::Logger, AppState};

#[tokio::main]
async fn main() {
    let config = Config::new();
    Logger::init_logger(&config);

    info!(
        "Starting fathom-video-mcp {} against {}",
        env!("CARGO_PKG_VERSION"),
        config.fathom_base_url()
    );
    if config.fathom_api_key().is_none() {
        warn!("FATHOM_API_KEY is not set; tool calls will fail until it is configured");
    }

    let app_state = AppState::new(config);

    if let Err(e) = mcp::serve_stdio(app_state).await {
        error!("MCP server stopped: {e}");
        std::process::exit(1);
    }
}
