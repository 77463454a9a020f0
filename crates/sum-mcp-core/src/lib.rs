pub mod classify;
pub mod error;
pub mod traits;
pub mod types;

pub use classify::{classify, Classification};
pub use error::{Error, TransportError, UnwrapError};
pub use traits::ToolTransport;
pub use types::{DecodedResult, Endpoint, ProtocolVersion, ServerStatus};
