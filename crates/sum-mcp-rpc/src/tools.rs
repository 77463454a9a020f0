use serde::{Deserialize, Serialize};
use serde_json::Value;

use sum_mcp_core::ProtocolVersion;

pub const SUM_TWO_NUMBERS: &str = "sum_two_numbers";
pub const SUM_THREE_NUMBERS: &str = "sum_three_numbers";
pub const CHECK_SERVERS_STATUS: &str = "check_mcp_servers_status";
pub const ANALYZE_MATH_REQUEST: &str = "analyze_math_request";

/// Name of the tool each sum server exposes.
pub const SUM: &str = "sum";

/// Definition of an MCP tool exposed to a host agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

fn number_property(description: &str) -> Value {
    serde_json::json!({
        "type": "number",
        "description": description
    })
}

/// Registry of tool definitions.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Tools the client offers to a host agent.
    #[must_use]
    pub fn definitions() -> Vec<ToolDefinition> {
        vec![
            ToolDefinition {
                name: SUM_TWO_NUMBERS.to_string(),
                description: "Sum two numbers using the MCP v1.0 server.".to_string(),
                input_schema: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "a": number_property("First number to sum"),
                        "b": number_property("Second number to sum")
                    },
                    "required": ["a", "b"]
                }),
            },
            ToolDefinition {
                name: SUM_THREE_NUMBERS.to_string(),
                description: "Sum three numbers using the MCP v1.1 server.".to_string(),
                input_schema: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "a": number_property("First number to sum"),
                        "b": number_property("Second number to sum"),
                        "c": number_property("Third number to sum")
                    },
                    "required": ["a", "b", "c"]
                }),
            },
            ToolDefinition {
                name: CHECK_SERVERS_STATUS.to_string(),
                description: "Check whether the MCP v1.0 and v1.1 servers are reachable.".to_string(),
                input_schema: serde_json::json!({
                    "type": "object",
                    "properties": {},
                    "required": []
                }),
            },
            ToolDefinition {
                name: ANALYZE_MATH_REQUEST.to_string(),
                description: "Analyze a math request and report which MCP version fits, based on how many numbers it contains.".to_string(),
                input_schema: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "request": {
                            "type": "string",
                            "description": "The user's mathematical request"
                        }
                    },
                    "required": ["request"]
                }),
            },
        ]
    }

    /// The `sum` tool as served by a server of the given version.
    ///
    /// On 1.1, `c` is optional unless `require_c` is set.
    #[must_use]
    pub fn sum_definition(version: ProtocolVersion, require_c: bool) -> ToolDefinition {
        match version {
            ProtocolVersion::V1_0 => ToolDefinition {
                name: SUM.to_string(),
                description: "Adds two numbers (API v1.0)".to_string(),
                input_schema: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "a": number_property("First number"),
                        "b": number_property("Second number")
                    },
                    "required": ["a", "b"]
                }),
            },
            ProtocolVersion::V1_1 => {
                let mut c = number_property("Third number");
                let required = if require_c {
                    serde_json::json!(["a", "b", "c"])
                } else {
                    c["default"] = serde_json::json!(0);
                    serde_json::json!(["a", "b"])
                };
                ToolDefinition {
                    name: SUM.to_string(),
                    description: "Sums three numbers (API v1.1)".to_string(),
                    input_schema: serde_json::json!({
                        "type": "object",
                        "properties": {
                            "a": number_property("First number"),
                            "b": number_property("Second number"),
                            "c": c
                        },
                        "required": required
                    }),
                }
            }
        }
    }
}
