use crate::types::ProtocolVersion;

/// Failure to get a JSON body back from an endpoint.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Connection failed to MCP {version}: {message}")]
    Connection {
        version: ProtocolVersion,
        message: String,
    },

    #[error("Invalid JSON body from MCP {version}: {message}")]
    InvalidBody {
        version: ProtocolVersion,
        message: String,
    },
}

/// A JSON body arrived but did not carry a usable result.
#[derive(Debug, thiserror::Error)]
pub enum UnwrapError {
    #[error("MCP {version} returned an error: {error}")]
    Remote {
        version: ProtocolVersion,
        error: String,
    },

    #[error("Unexpected response format from MCP {version}: {raw}")]
    UnexpectedFormat {
        version: ProtocolVersion,
        raw: String,
    },
}

/// Any failure along the call-and-unwrap pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Unwrap(#[from] UnwrapError),
}
