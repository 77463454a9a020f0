pub mod config;
pub mod http;
pub mod prober;
pub mod tools;

pub use config::ClientConfig;
pub use http::HttpTransport;
pub use prober::probe_all;
pub use tools::SumTools;
