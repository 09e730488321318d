//! MCP server exposing the Fathom meeting tools over stdio.
//!
//! Messages are newline-delimited JSON-RPC 2.0: one request per line on stdin, one response
//! per line on stdout. Logging must never write to stdout.

use log::*;
use service::AppState;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

mod controller;
pub mod error;
mod params;
pub mod protocol;
pub mod router;
pub mod tools;

pub use error::{Error, Result};

/// Serve on the process' stdin and stdout until stdin is closed.
pub async fn serve_stdio(app_state: AppState) -> std::io::Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    serve(app_state, stdin, stdout).await
}

/// Read messages from `reader` and write responses to `writer` until `reader` reaches EOF.
/// Messages are handled one at a time, in order.
pub async fn serve<R, W>(app_state: AppState, reader: R, mut writer: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!("Serving MCP requests over stdio");
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        trace!("<- {line}");

        if let Some(response) = router::handle_line(&app_state, line).await {
            let mut payload = serde_json::to_string(&response).map_err(std::io::Error::other)?;
            trace!("-> {payload}");
            payload.push('\n');
            writer.write_all(payload.as_bytes()).await?;
            writer.flush().await?;
        }
    }

    info!("Input closed, shutting down");
    Ok(())
}
