use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::app_state::AppState;
use crate::handlers;

/// Create the main application router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        // JSON-RPC; clients append `/call` to the base URL, so serve both.
        .route("/mcp", post(handlers::mcp_request))
        .route("/mcp/call", post(handlers::mcp_request))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
