pub mod jsonrpc;
pub mod tools;
pub mod unwrap;

pub use jsonrpc::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, ToolCallParams};
pub use tools::{ToolDefinition, ToolRegistry};
pub use unwrap::unwrap_response;
