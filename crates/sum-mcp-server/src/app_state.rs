use sum_mcp_core::ProtocolVersion;

/// Per-server settings shared with every handler.
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    pub version: ProtocolVersion,
    /// On 1.1, reject calls that omit `c` instead of treating it as 0.
    pub require_c: bool,
}

impl AppState {
    #[must_use]
    pub fn new(version: ProtocolVersion) -> Self {
        Self {
            version,
            require_c: false,
        }
    }
}
