use std::sync::Arc;

use sum_mcp_core::{ServerStatus, ToolTransport};

use crate::config::ClientConfig;
use crate::tools::call_sum;

/// Check every configured endpoint with a canned `sum` of ones.
///
/// Endpoints are probed one after another and reported in configuration
/// order. Each probe runs on its own task, so a panic in the call path shows
/// up as "unavailable" instead of unwinding into the caller.
pub async fn probe_all(
    config: &ClientConfig,
    transport: &Arc<dyn ToolTransport>,
) -> Vec<ServerStatus> {
    let mut statuses = Vec::with_capacity(2);

    for endpoint in config.endpoints() {
        let version = endpoint.version;
        let endpoint = endpoint.clone();
        let transport = Arc::clone(transport);

        let probe = tokio::spawn(async move {
            let operands = vec![1.0; endpoint.version.operand_count()];
            call_sum(transport.as_ref(), &endpoint, &operands).await
        });

        let available = match probe.await {
            Ok(Ok(_)) => true,
            Ok(Err(e)) => {
                tracing::info!("MCP {version} unavailable: {e}");
                false
            }
            Err(e) => {
                tracing::warn!("MCP {version} probe aborted: {e}");
                false
            }
        };

        statuses.push(ServerStatus { version, available });
    }

    statuses
}
