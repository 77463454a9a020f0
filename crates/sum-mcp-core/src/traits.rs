use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::TransportError;
use crate::types::Endpoint;

/// Sends a single `tools/call` request to an endpoint.
#[async_trait]
pub trait ToolTransport: Send + Sync {
    /// Call `tool` on `endpoint` with the given named arguments and return the
    /// raw JSON-RPC response body. The body is not validated here.
    async fn invoke(
        &self,
        endpoint: &Endpoint,
        tool: &str,
        arguments: Map<String, Value>,
    ) -> Result<Value, TransportError>;
}
