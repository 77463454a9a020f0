use std::time::Duration;

use axum::{http::StatusCode, routing::post, Router};

use sum_mcp_client::{ClientConfig, SumTools};
use sum_mcp_core::{Error, ProtocolVersion, TransportError};
use sum_mcp_server::app_state::AppState;

/// Serve `app` on an ephemeral port and return its `/mcp` base URL.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/mcp")
}

async fn serve_sum(version: ProtocolVersion) -> String {
    serve(sum_mcp_server::router::create_router(AppState::new(version))).await
}

/// A base URL nothing listens on.
async fn unreachable() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/mcp")
}

fn tools(v1_0: String, v1_1: String) -> SumTools {
    SumTools::over_http(ClientConfig::new(v1_0, v1_1)).unwrap()
}

#[tokio::test]
async fn sum_two_against_stub_server() {
    let tools = tools(serve_sum(ProtocolVersion::V1_0).await, unreachable().await);

    let out = tools.sum_two(2.0, 3.0).await;
    assert_eq!(out, "✅ MCP v1.0: 5 (operation: a + b)");

    let out = tools.sum_two(-1.5, 0.25).await;
    assert!(out.contains("-1.25"));
    assert!(out.contains("1.0"));
}

#[tokio::test]
async fn sum_three_against_stub_server() {
    let tools = tools(unreachable().await, serve_sum(ProtocolVersion::V1_1).await);

    let out = tools.sum_three(1.0, 2.0, 3.0).await;
    assert_eq!(out, "✅ MCP v1.1: 6 (operation: a + b + c)");

    let decoded = tools.sum_three_typed(0.5, 0.5, 1.0).await.unwrap();
    assert!((decoded.value - 2.0).abs() < f64::EPSILON);
    assert_eq!(decoded.operation, "a + b + c");
}

#[tokio::test]
async fn http_500_becomes_error_line() {
    let failing = Router::new().route(
        "/mcp/call",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error") }),
    );
    let tools = tools(serve(failing).await, unreachable().await);

    let out = tools.sum_two(1.0, 2.0).await;
    assert_eq!(out, "❌ MCP v1.0 Error: HTTP 500: Internal Server Error");
}

#[tokio::test]
async fn unreachable_server_is_a_connection_error() {
    let tools = tools(unreachable().await, unreachable().await);

    let err = tools.sum_two_typed(1.0, 2.0).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Transport(TransportError::Connection { .. })
    ));
    assert!(err.to_string().starts_with("Connection failed to MCP 1.0: "));

    let out = tools.sum_two(1.0, 2.0).await;
    assert!(out.starts_with("❌ MCP v1.0 Error: Connection failed to MCP 1.0"));
}

#[tokio::test]
async fn non_json_body_is_distinguishable() {
    let garbage = Router::new().route("/mcp/call", post(|| async { "definitely not json" }));
    let tools = tools(serve(garbage).await, unreachable().await);

    let err = tools.sum_two_typed(1.0, 2.0).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Transport(TransportError::InvalidBody { .. })
    ));
}

#[tokio::test]
async fn slow_server_times_out() {
    let slow = Router::new().route(
        "/mcp/call",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            "too late"
        }),
    );
    let config = ClientConfig::new(serve(slow).await, unreachable().await)
        .with_timeout(Duration::from_millis(200));
    let tools = SumTools::over_http(config).unwrap();

    let err = tools.sum_two_typed(1.0, 2.0).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Transport(TransportError::Connection { .. })
    ));
}

#[tokio::test]
async fn status_reports_each_endpoint() {
    let tools = tools(
        serve_sum(ProtocolVersion::V1_0).await,
        serve_sum(ProtocolVersion::V1_1).await,
    );
    assert_eq!(
        tools.check_server_status().await,
        "✅ MCP v1.0: Available\n✅ MCP v1.1: Available"
    );
}

#[tokio::test]
async fn status_keeps_probing_after_a_dead_endpoint() {
    let tools = tools(unreachable().await, serve_sum(ProtocolVersion::V1_1).await);
    assert_eq!(
        tools.check_server_status().await,
        "❌ MCP v1.0: Not available\n✅ MCP v1.1: Available"
    );
}

#[tokio::test]
async fn remote_jsonrpc_error_is_reported() {
    // The 1.0 endpoint points at a strict 1.1 server, which rejects `a + b`.
    let strict = sum_mcp_server::router::create_router(AppState {
        version: ProtocolVersion::V1_1,
        require_c: true,
    });
    let tools = tools(serve(strict).await, unreachable().await);

    let out = tools.sum_two(1.0, 2.0).await;
    assert!(out.starts_with("❌ MCP v1.0 Error: "));
    assert!(out.contains("Missing 'c' parameter"));
}
