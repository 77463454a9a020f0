//! The tools exposed to a host agent.
//!
//! Everything below this module works with typed results. The methods here
//! are the display boundary: they never fail and always return a line of
//! text prefixed with ✅ or ❌.

use std::sync::Arc;

use serde_json::{Map, Value};

use sum_mcp_core::{
    classify, Classification, DecodedResult, Endpoint, Error, ProtocolVersion, ServerStatus,
    ToolTransport, UnwrapError,
};
use sum_mcp_rpc::tools::{
    ANALYZE_MATH_REQUEST, CHECK_SERVERS_STATUS, SUM, SUM_THREE_NUMBERS, SUM_TWO_NUMBERS,
};
use sum_mcp_rpc::unwrap_response;

use crate::config::ClientConfig;
use crate::http::HttpTransport;
use crate::prober;

const OK: &str = "✅";
const FAIL: &str = "❌";

/// Call the `sum` tool on `endpoint` and decode the reply.
///
/// Operands are bound to the endpoint's argument names in order.
pub async fn call_sum(
    transport: &dyn ToolTransport,
    endpoint: &Endpoint,
    operands: &[f64],
) -> Result<DecodedResult, Error> {
    let arguments: Map<String, Value> = endpoint
        .version
        .operand_names()
        .iter()
        .zip(operands)
        .map(|(name, value)| ((*name).to_string(), Value::from(*value)))
        .collect();

    let body = transport.invoke(endpoint, SUM, arguments).await?;
    Ok(unwrap_response(endpoint.version, &body)?)
}

/// Client-side tools bound to a configuration and a transport.
#[derive(Clone)]
pub struct SumTools {
    config: ClientConfig,
    transport: Arc<dyn ToolTransport>,
}

impl SumTools {
    pub fn new(config: ClientConfig, transport: Arc<dyn ToolTransport>) -> Self {
        Self { config, transport }
    }

    /// Build tools that talk HTTP with the configured timeout.
    pub fn over_http(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let transport = HttpTransport::new(config.timeout)?;
        Ok(Self::new(config, Arc::new(transport)))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sum `operands` on the endpoint of the given version.
    pub async fn sum(
        &self,
        version: ProtocolVersion,
        operands: &[f64],
    ) -> Result<DecodedResult, Error> {
        call_sum(
            self.transport.as_ref(),
            self.config.endpoint(version),
            operands,
        )
        .await
    }

    pub async fn sum_two_typed(&self, a: f64, b: f64) -> Result<DecodedResult, Error> {
        self.sum(ProtocolVersion::V1_0, &[a, b]).await
    }

    pub async fn sum_three_typed(&self, a: f64, b: f64, c: f64) -> Result<DecodedResult, Error> {
        self.sum(ProtocolVersion::V1_1, &[a, b, c]).await
    }

    /// Probe both endpoints, in configuration order.
    pub async fn probe(&self) -> Vec<ServerStatus> {
        prober::probe_all(&self.config, &self.transport).await
    }

    /// Sum two numbers on the 1.0 server.
    pub async fn sum_two(&self, a: f64, b: f64) -> String {
        format_sum(ProtocolVersion::V1_0, &self.sum_two_typed(a, b).await)
    }

    /// Sum three numbers on the 1.1 server.
    pub async fn sum_three(&self, a: f64, b: f64, c: f64) -> String {
        format_sum(ProtocolVersion::V1_1, &self.sum_three_typed(a, b, c).await)
    }

    /// One availability line per endpoint.
    pub async fn check_server_status(&self) -> String {
        self.probe()
            .await
            .iter()
            .map(format_status)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Report which endpoint fits `request`. Advisory only.
    pub fn classify_math_request(&self, request: &str) -> String {
        format_classification(&classify(request))
    }

    /// Classify `request` and, when an endpoint fits, call it.
    pub async fn solve_math_request(&self, request: &str) -> String {
        let classification = classify(request);
        match classification.route() {
            Some((version, operands)) => {
                tracing::info!("routing {} operands to MCP {version}", operands.len());
                format_sum(version, &self.sum(version, operands).await)
            }
            None => format_classification(&classification),
        }
    }

    /// Dispatch a host tool call by name.
    pub async fn call_tool(&self, name: &str, arguments: &Value) -> String {
        tracing::debug!(tool = name, "tool call");
        match name {
            SUM_TWO_NUMBERS => match numeric_args(name, arguments, &["a", "b"]) {
                Ok(n) => self.sum_two(n[0], n[1]).await,
                Err(msg) => msg,
            },
            SUM_THREE_NUMBERS => match numeric_args(name, arguments, &["a", "b", "c"]) {
                Ok(n) => self.sum_three(n[0], n[1], n[2]).await,
                Err(msg) => msg,
            },
            CHECK_SERVERS_STATUS => self.check_server_status().await,
            ANALYZE_MATH_REQUEST => match arguments.get("request").and_then(Value::as_str) {
                Some(request) => self.classify_math_request(request),
                None => format!("{FAIL} Missing 'request' argument for {name}"),
            },
            _ => format!("{FAIL} Unknown tool: {name}"),
        }
    }
}

fn numeric_args(tool: &str, arguments: &Value, names: &[&str]) -> Result<Vec<f64>, String> {
    names
        .iter()
        .map(|key| {
            arguments
                .get(*key)
                .and_then(Value::as_f64)
                .ok_or_else(|| format!("{FAIL} Missing or non-numeric argument '{key}' for {tool}"))
        })
        .collect()
}

/// Render a sum outcome for display.
pub fn format_sum(version: ProtocolVersion, result: &Result<DecodedResult, Error>) -> String {
    match result {
        Ok(decoded) => format!(
            "{OK} MCP v{version}: {} (operation: {})",
            decoded.value, decoded.operation
        ),
        Err(Error::Unwrap(UnwrapError::UnexpectedFormat { raw, .. })) => {
            format!("{FAIL} Unexpected response format from MCP v{version}: {raw}")
        }
        Err(Error::Unwrap(UnwrapError::Remote { error, .. })) => {
            format!("{FAIL} MCP v{version} Error: {error}")
        }
        Err(Error::Transport(e)) => format!("{FAIL} MCP v{version} Error: {e}"),
    }
}

pub fn format_status(status: &ServerStatus) -> String {
    if status.available {
        format!("{OK} MCP v{}: Available", status.version)
    } else {
        format!("{FAIL} MCP v{}: Not available", status.version)
    }
}

pub fn format_classification(classification: &Classification) -> String {
    let count = classification.count();
    match classification {
        Classification::TwoOperands(numbers) => format!(
            "{OK} Analysis: Found 2 numbers {numbers:?}. Use MCP v{} for 2-parameter sum.",
            ProtocolVersion::V1_0
        ),
        Classification::ThreeOperands(numbers) => format!(
            "{OK} Analysis: Found 3 numbers {numbers:?}. Use MCP v{} for 3-parameter sum.",
            ProtocolVersion::V1_1
        ),
        Classification::Insufficient { .. } => format!(
            "{FAIL} Analysis: Found only {count} number(s) (insufficient operands). Need at least 2 numbers for sum operation."
        ),
        Classification::Unsupported { .. } => format!(
            "{FAIL} Analysis: Found {count} numbers (unsupported operand count). Current MCP servers only support 2 or 3 number sums."
        ),
    }
}
