//! Dispatch of JSON-RPC messages to MCP handlers.

use log::*;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use service::AppState;

use crate::controller::meeting_controller;
use crate::protocol::{
    negotiate_protocol_version, CallToolParams, CallToolResult, InitializeResult,
    JsonRpcRequest, JsonRpcResponse, ServerCapabilities, ServerInfo, ToolsCapability,
    ToolsListResult, INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR,
};
use crate::tools::{self, GET_SUMMARY, GET_TRANSCRIPT, INSTRUCTIONS, LIST_MEETINGS, SERVER_NAME};

/// Handle one line read from the transport. Returns `None` when nothing must be written back.
pub async fn handle_line(app_state: &AppState, line: &str) -> Option<JsonRpcResponse> {
    let value: Value = match serde_json::from_str(line) {
        Ok(value) => value,
        Err(e) => {
            warn!("Discarding unparsable message: {e}");
            return Some(JsonRpcResponse::failure(
                Value::Null,
                PARSE_ERROR,
                format!("Parse error: {e}"),
            ));
        }
    };

    let id = value.get("id").cloned().unwrap_or(Value::Null);
    match serde_json::from_value::<JsonRpcRequest>(value) {
        Ok(request) => handle_request(app_state, request).await,
        Err(e) => Some(JsonRpcResponse::failure(
            id,
            INVALID_REQUEST,
            format!("Invalid request: {e}"),
        )),
    }
}

pub async fn handle_request(
    app_state: &AppState,
    request: JsonRpcRequest,
) -> Option<JsonRpcResponse> {
    let Some(id) = request.id.clone() else {
        debug!("Received notification {}", request.method);
        return None;
    };

    let outcome = match request.method.as_str() {
        "initialize" => Ok(initialize(request.params.as_ref())),
        "ping" => Ok(json!({})),
        "tools/list" => Ok(list_tools()),
        "tools/call" => call_tool(app_state, request.params).await,
        method => {
            warn!("Unknown method {method}");
            Err((METHOD_NOT_FOUND, format!("Method not found: {method}")))
        }
    };

    Some(match outcome {
        Ok(result) => JsonRpcResponse::success(id, result),
        Err((code, message)) => JsonRpcResponse::failure(id, code, message),
    })
}

fn initialize(params: Option<&Value>) -> Value {
    let requested = params
        .and_then(|params| params.get("protocolVersion"))
        .and_then(Value::as_str);
    let protocol_version = negotiate_protocol_version(requested);
    info!("Initializing session with protocol version {protocol_version}");

    to_value(InitializeResult {
        protocol_version: protocol_version.to_string(),
        capabilities: ServerCapabilities {
            tools: ToolsCapability {
                list_changed: false,
            },
        },
        server_info: ServerInfo {
            name: SERVER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        instructions: INSTRUCTIONS.to_string(),
    })
}

fn list_tools() -> Value {
    to_value(ToolsListResult {
        tools: tools::definitions(),
    })
}

fn arguments<T: DeserializeOwned>(tool: &str, arguments: Option<Value>) -> Result<T, (i64, String)> {
    serde_json::from_value(arguments.unwrap_or_else(|| json!({}))).map_err(|e| {
        warn!("Invalid arguments for {tool}: {e}");
        (INVALID_PARAMS, format!("Invalid arguments for tool {tool}: {e}"))
    })
}

async fn call_tool(app_state: &AppState, params: Option<Value>) -> Result<Value, (i64, String)> {
    let params: CallToolParams = serde_json::from_value(params.unwrap_or(Value::Null))
        .map_err(|e| (INVALID_PARAMS, format!("Invalid tools/call params: {e}")))?;

    let outcome = match params.name.as_str() {
        LIST_MEETINGS => {
            meeting_controller::list_meetings(app_state, arguments(LIST_MEETINGS, params.arguments)?)
                .await
        }
        GET_SUMMARY => {
            meeting_controller::get_summary(app_state, arguments(GET_SUMMARY, params.arguments)?)
                .await
        }
        GET_TRANSCRIPT => {
            meeting_controller::get_transcript(
                app_state,
                arguments(GET_TRANSCRIPT, params.arguments)?,
            )
            .await
        }
        name => return Err((INVALID_PARAMS, format!("Unknown tool: {name}"))),
    };

    let result = match outcome {
        Ok(value) => CallToolResult::structured(value),
        Err(e) => {
            warn!("Tool {} failed: {}", params.name, e);
            e.into_tool_result()
        }
    };
    Ok(to_value(result))
}

fn to_value<T: serde::Serialize>(value: T) -> Value {
    serde_json::to_value(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use service::config::{Config, MISSING_API_KEY_MESSAGE};

    fn app_state(base_url: &str, api_key: Option<&str>) -> AppState {
        let mut config = Config::from_args(["fathom_mcp_rs"])
            .unwrap()
            .set_fathom_base_url(base_url.to_string())
            .set_fathom_api_key(api_key.map(str::to_string));
        config.max_retries = 0;
        AppState::new(config)
    }

    async fn call(app_state: &AppState, message: Value) -> Value {
        let response = handle_line(app_state, &message.to_string())
            .await
            .expect("expected a response");
        serde_json::to_value(response).unwrap()
    }

    #[tokio::test]
    async fn test_initialize_echoes_supported_version() {
        let state = app_state("http://127.0.0.1:1", None);

        let response = call(
            &state,
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "initialize",
                "params": { "protocolVersion": "2025-03-26", "capabilities": {} }
            }),
        )
        .await;

        assert_eq!(response["id"], 1);
        let result = &response["result"];
        assert_eq!(result["protocolVersion"], "2025-03-26");
        assert_eq!(result["serverInfo"]["name"], "fathom-video-mcp");
        assert_eq!(result["capabilities"]["tools"]["listChanged"], false);
        assert!(result["instructions"]
            .as_str()
            .unwrap()
            .contains("recording_id"));
    }

    #[tokio::test]
    async fn test_notification_gets_no_response() {
        let state = app_state("http://127.0.0.1:1", None);
        let line = json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }).to_string();

        assert!(handle_line(&state, &line).await.is_none());
    }

    #[tokio::test]
    async fn test_ping() {
        let state = app_state("http://127.0.0.1:1", None);

        let response = call(&state, json!({ "jsonrpc": "2.0", "id": "a", "method": "ping" })).await;

        assert_eq!(response["id"], "a");
        assert_eq!(response["result"], json!({}));
    }

    #[tokio::test]
    async fn test_parse_error() {
        let state = app_state("http://127.0.0.1:1", None);

        let response = handle_line(&state, "{not json").await.unwrap();

        assert_eq!(response.id, Value::Null);
        assert_eq!(response.error.unwrap().code, PARSE_ERROR);
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let state = app_state("http://127.0.0.1:1", None);

        let response = call(
            &state,
            json!({ "jsonrpc": "2.0", "id": 2, "method": "resources/list" }),
        )
        .await;

        assert_eq!(response["error"]["code"], METHOD_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_tools_list() {
        let state = app_state("http://127.0.0.1:1", None);

        let response = call(&state, json!({ "jsonrpc": "2.0", "id": 3, "method": "tools/list" })).await;

        let tools = response["result"]["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 3);
        assert_eq!(tools[0]["name"], "list_meetings");
        assert_eq!(tools[0]["inputSchema"]["type"], "object");
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let state = app_state("http://127.0.0.1:1", None);

        let response = call(
            &state,
            json!({
                "jsonrpc": "2.0",
                "id": 4,
                "method": "tools/call",
                "params": { "name": "delete_meeting", "arguments": {} }
            }),
        )
        .await;

        assert_eq!(response["error"]["code"], INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_invalid_arguments() {
        let state = app_state("http://127.0.0.1:1", Some("key"));

        let response = call(
            &state,
            json!({
                "jsonrpc": "2.0",
                "id": 5,
                "method": "tools/call",
                "params": { "name": "get_summary", "arguments": { "recording_id": "abc" } }
            }),
        )
        .await;

        assert_eq!(response["error"]["code"], INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_missing_api_key_is_tool_error() {
        let state = app_state("http://127.0.0.1:1", None);

        let response = call(
            &state,
            json!({
                "jsonrpc": "2.0",
                "id": 6,
                "method": "tools/call",
                "params": { "name": "get_transcript", "arguments": { "recording_id": 1 } }
            }),
        )
        .await;

        let result = &response["result"];
        assert_eq!(result["isError"], true);
        assert_eq!(result["content"][0]["text"], MISSING_API_KEY_MESSAGE);
    }

    #[tokio::test]
    async fn test_get_summary_round_trip() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/recordings/42/summary")
            .match_header("x-api-key", "key")
            .with_status(200)
            .with_body(r###"{"summary":{"template_name":"General","markdown_formatted":"## Notes"}}"###)
            .create_async()
            .await;
        let state = app_state(&server.url(), Some("key"));

        let response = call(
            &state,
            json!({
                "jsonrpc": "2.0",
                "id": 7,
                "method": "tools/call",
                "params": { "name": "get_summary", "arguments": { "recording_id": 42 } }
            }),
        )
        .await;

        let result = &response["result"];
        assert_eq!(result["isError"], false);
        assert_eq!(
            result["structuredContent"],
            json!({ "recording_id": 42, "template_name": "General", "markdown_formatted": "## Notes" })
        );
        let text: Value =
            serde_json::from_str(result["content"][0]["text"].as_str().unwrap()).unwrap();
        assert_eq!(text, result["structuredContent"]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_meetings_filters_page() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/meetings")
            .with_status(200)
            .with_body(
                json!({
                    "items": [
                        { "recording_id": 1, "title": "Acme Kickoff" },
                        { "recording_id": 2, "title": "Standup" }
                    ],
                    "next_cursor": "next"
                })
                .to_string(),
            )
            .create_async()
            .await;
        let state = app_state(&server.url(), Some("key"));

        let response = call(
            &state,
            json!({
                "jsonrpc": "2.0",
                "id": 8,
                "method": "tools/call",
                "params": { "name": "list_meetings", "arguments": { "search": "acme" } }
            }),
        )
        .await;

        let content = &response["result"]["structuredContent"];
        assert_eq!(content["count"], 1);
        assert_eq!(content["meetings"][0]["recording_id"], 1);
        assert_eq!(content["next_cursor"], "next");
    }

    #[tokio::test]
    async fn test_remote_error_is_tool_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/recordings/9/transcript")
            .with_status(500)
            .with_body("upstream down")
            .create_async()
            .await;
        let state = app_state(&server.url(), Some("key"));

        let response = call(
            &state,
            json!({
                "jsonrpc": "2.0",
                "id": 9,
                "method": "tools/call",
                "params": { "name": "get_transcript", "arguments": { "recording_id": 9 } }
            }),
        )
        .await;

        let result = &response["result"];
        assert_eq!(result["isError"], true);
        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("500"));
        assert!(text.contains("upstream down"));
    }
}
