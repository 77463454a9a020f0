use std::time::Duration;

use sum_mcp_core::{Endpoint, ProtocolVersion};

pub const DEFAULT_V1_0_URL: &str = "http://localhost:4002/mcp";
pub const DEFAULT_V1_1_URL: &str = "http://localhost:4003/mcp";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// The two endpoints and the per-call timeout, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub v1_0: Endpoint,
    pub v1_1: Endpoint,
    pub timeout: Duration,
}

impl ClientConfig {
    #[must_use]
    pub fn new(v1_0_url: impl Into<String>, v1_1_url: impl Into<String>) -> Self {
        Self {
            v1_0: Endpoint::new(v1_0_url, ProtocolVersion::V1_0),
            v1_1: Endpoint::new(v1_1_url, ProtocolVersion::V1_1),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn endpoint(&self, version: ProtocolVersion) -> &Endpoint {
        match version {
            ProtocolVersion::V1_0 => &self.v1_0,
            ProtocolVersion::V1_1 => &self.v1_1,
        }
    }

    /// Both endpoints in probing order.
    #[must_use]
    pub fn endpoints(&self) -> [&Endpoint; 2] {
        [&self.v1_0, &self.v1_1]
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_V1_0_URL, DEFAULT_V1_1_URL)
    }
}
