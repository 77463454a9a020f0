use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};

use sum_mcp_core::ProtocolVersion;
use sum_mcp_rpc::jsonrpc::{
    INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, JSONRPC_VERSION, METHOD_NOT_FOUND,
    PARSE_ERROR,
};
use sum_mcp_rpc::tools::SUM;
use sum_mcp_rpc::{JsonRpcRequest, JsonRpcResponse, ToolCallParams, ToolRegistry};

use crate::app_state::AppState;

/// Handle a JSON-RPC request and answer in the HTTP response body.
pub async fn mcp_request(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let Ok(Json(payload)) = payload else {
        return Json(JsonRpcResponse::error(Value::Null, PARSE_ERROR, "Parse error")).into_response();
    };

    let req: JsonRpcRequest = match serde_json::from_value(payload) {
        Ok(req) => req,
        Err(e) => {
            return Json(JsonRpcResponse::error(
                Value::Null,
                INVALID_REQUEST,
                format!("Invalid request: {e}"),
            ))
            .into_response();
        }
    };

    // Notifications (no id / null id) get no response body.
    if req.id.is_null() {
        tracing::info!("Received MCP notification: {}", req.method);
        return StatusCode::ACCEPTED.into_response();
    }

    if req.jsonrpc != JSONRPC_VERSION {
        return Json(JsonRpcResponse::error(
            req.id,
            INVALID_REQUEST,
            format!("Unsupported jsonrpc version: {}", req.jsonrpc),
        ))
        .into_response();
    }

    let response = match req.method.as_str() {
        "initialize" => handle_initialize(&state, &req),
        "tools/list" => handle_tools_list(&state, &req),
        "tools/call" => handle_tools_call(&state, &req),
        _ => JsonRpcResponse::error(req.id, METHOD_NOT_FOUND, "Method not found"),
    };

    Json(response).into_response()
}

fn handle_initialize(state: &AppState, req: &JsonRpcRequest) -> JsonRpcResponse {
    JsonRpcResponse::success(
        req.id.clone(),
        serde_json::json!({
            "protocolVersion": "2024-11-05",
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": format!("sum-api-v{}", state.version),
                "version": format!("{}.0", state.version)
            }
        }),
    )
}

fn handle_tools_list(state: &AppState, req: &JsonRpcRequest) -> JsonRpcResponse {
    let tools = vec![ToolRegistry::sum_definition(state.version, state.require_c)];
    JsonRpcResponse::success(req.id.clone(), serde_json::json!({ "tools": tools }))
}

fn handle_tools_call(state: &AppState, req: &JsonRpcRequest) -> JsonRpcResponse {
    let Some(params) = req.params.clone() else {
        return JsonRpcResponse::error(req.id.clone(), INVALID_PARAMS, "Missing params");
    };

    let params: ToolCallParams = match serde_json::from_value(params) {
        Ok(p) => p,
        Err(e) => {
            return JsonRpcResponse::error(
                req.id.clone(),
                INVALID_PARAMS,
                format!("Invalid params: {e}"),
            );
        }
    };

    if params.name != SUM {
        return JsonRpcResponse::error(
            req.id.clone(),
            INTERNAL_ERROR,
            format!("Unknown tool: {}", params.name),
        );
    }

    match tool_sum(state, &params.arguments) {
        Ok(value) => JsonRpcResponse::text(
            req.id.clone(),
            serde_json::to_string_pretty(&value).unwrap_or_default(),
        ),
        Err(err) => JsonRpcResponse::error(req.id.clone(), INVALID_PARAMS, err),
    }
}

fn operand(args: &Map<String, Value>, key: &str) -> Result<f64, String> {
    match args.get(key) {
        None | Some(Value::Null) => Err(format!("Missing '{key}' parameter")),
        Some(v) => v.as_f64().ok_or_else(|| format!("'{key}' must be a number")),
    }
}

fn tool_sum(state: &AppState, args: &Map<String, Value>) -> Result<Value, String> {
    let a = operand(args, "a")?;
    let b = operand(args, "b")?;

    match state.version {
        ProtocolVersion::V1_0 => {
            let result = a + b;
            tracing::info!("a + b = {a} + {b} = {result}");
            Ok(serde_json::json!({
                "result": result,
                "operation": "a + b",
                "version": state.version.label(),
                "inputs": { "a": a, "b": b },
            }))
        }
        ProtocolVersion::V1_1 => {
            let c = match operand(args, "c") {
                Ok(c) => c,
                Err(_) if !state.require_c && !args.contains_key("c") => 0.0,
                Err(e) => return Err(e),
            };
            let result = a + b + c;
            tracing::info!("a + b + c = {a} + {b} + {c} = {result}");
            Ok(serde_json::json!({
                "result": result,
                "operation": "a + b + c",
                "version": state.version.label(),
                "inputs": { "a": a, "b": b, "c": c },
            }))
        }
    }
}
