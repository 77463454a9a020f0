//! HTTP transport for `tools/call` requests.
//!
//! One POST per call, bounded by the configured timeout. Idle connections are
//! not kept, so nothing is reused between calls.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{Map, Value};

use sum_mcp_core::{Endpoint, ToolTransport, TransportError};
use sum_mcp_rpc::JsonRpcRequest;

/// [`ToolTransport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a transport whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(0)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ToolTransport for HttpTransport {
    async fn invoke(
        &self,
        endpoint: &Endpoint,
        tool: &str,
        arguments: Map<String, Value>,
    ) -> Result<Value, TransportError> {
        let version = endpoint.version;
        let url = endpoint.call_url();
        let request = JsonRpcRequest::tool_call(tool, arguments);

        tracing::debug!(%url, tool, "calling MCP {version}");

        let connection_failed = |e: reqwest::Error| {
            tracing::warn!(%url, "MCP {version} request failed: {e}");
            TransportError::Connection {
                version,
                message: e.to_string(),
            }
        };

        let resp = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(connection_failed)?;

        let status = resp.status();
        let body = resp.text().await.map_err(connection_failed)?;

        if status != StatusCode::OK {
            tracing::warn!(%url, status = status.as_u16(), "MCP {version} returned non-200");
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| TransportError::InvalidBody {
            version,
            message: e.to_string(),
        })
    }
}
