use serde::{Deserialize, Serialize};

/// Protocol revision of a remote sum server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProtocolVersion {
    /// Sums two operands (`a`, `b`).
    #[serde(rename = "1.0")]
    V1_0,
    /// Sums three operands (`a`, `b`, `c`).
    #[serde(rename = "1.1")]
    V1_1,
}

impl ProtocolVersion {
    /// Label used in reports and on the wire, e.g. `"1.0"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::V1_0 => "1.0",
            Self::V1_1 => "1.1",
        }
    }

    /// Number of operands the server's `sum` tool takes.
    #[must_use]
    pub fn operand_count(self) -> usize {
        match self {
            Self::V1_0 => 2,
            Self::V1_1 => 3,
        }
    }

    /// Argument names in positional order.
    #[must_use]
    pub fn operand_names(self) -> &'static [&'static str] {
        match self {
            Self::V1_0 => &["a", "b"],
            Self::V1_1 => &["a", "b", "c"],
        }
    }
}

impl std::fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ProtocolVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('v') {
            "1.0" | "1" => Ok(Self::V1_0),
            "1.1" => Ok(Self::V1_1),
            other => Err(format!("unknown protocol version: {other}")),
        }
    }
}

/// A remote sum server: base address plus protocol version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub base_url: String,
    pub version: ProtocolVersion,
}

impl Endpoint {
    #[must_use]
    pub fn new(base_url: impl Into<String>, version: ProtocolVersion) -> Self {
        Self {
            base_url: base_url.into(),
            version,
        }
    }

    /// URL that tool calls are POSTed to.
    #[must_use]
    pub fn call_url(&self) -> String {
        format!("{}/call", self.base_url.trim_end_matches('/'))
    }
}

/// Payload decoded from a successful tool call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodedResult {
    pub value: f64,
    pub operation: String,
}

/// Availability of one endpoint as seen by the status prober.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerStatus {
    pub version: ProtocolVersion,
    pub available: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_url_appends_call() {
        let ep = Endpoint::new("http://localhost:4002/mcp", ProtocolVersion::V1_0);
        assert_eq!(ep.call_url(), "http://localhost:4002/mcp/call");
    }

    #[test]
    fn call_url_ignores_trailing_slash() {
        let ep = Endpoint::new("http://localhost:4003/mcp/", ProtocolVersion::V1_1);
        assert_eq!(ep.call_url(), "http://localhost:4003/mcp/call");
    }

    #[test]
    fn version_labels() {
        assert_eq!(ProtocolVersion::V1_0.to_string(), "1.0");
        assert_eq!(ProtocolVersion::V1_1.to_string(), "1.1");
        assert_eq!(ProtocolVersion::V1_1.operand_count(), 3);
    }

    #[test]
    fn version_parse() {
        assert_eq!("1.0".parse::<ProtocolVersion>(), Ok(ProtocolVersion::V1_0));
        assert_eq!("v1.1".parse::<ProtocolVersion>(), Ok(ProtocolVersion::V1_1));
        assert!("2.0".parse::<ProtocolVersion>().is_err());
    }

    #[test]
    fn version_serializes_as_label() {
        let json = serde_json::to_string(&ProtocolVersion::V1_1).unwrap();
        assert_eq!(json, "\"1.1\"");
    }
}
