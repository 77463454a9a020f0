use clap::Parser;
use tracing_subscriber::EnvFilter;

use sum_mcp_core::ProtocolVersion;
use sum_mcp_server::app_state::AppState;

#[derive(Parser)]
#[command(name = "sum-mcp-server", about = "Sum tool server speaking MCP JSON-RPC over HTTP")]
struct Args {
    /// API revision to serve: 1.0 (a + b) or 1.1 (a + b + c)
    #[arg(long, env = "MCP_API_VERSION", default_value = "1.0")]
    api_version: ProtocolVersion,

    #[arg(long, env = "MCP_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Listen port (defaults to 4002 for 1.0, 4003 for 1.1)
    #[arg(long, env = "MCP_PORT")]
    port: Option<u16>,

    /// Require `c` on 1.1 instead of defaulting it to 0
    #[arg(long)]
    no_default_c: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let port = args.port.unwrap_or(match args.api_version {
        ProtocolVersion::V1_0 => 4002,
        ProtocolVersion::V1_1 => 4003,
    });

    let state = AppState {
        version: args.api_version,
        require_c: args.no_default_c,
    };

    let app = sum_mcp_server::router::create_router(state);

    let addr = format!("{}:{port}", args.host);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("MCP sum server v{} listening on {addr}", args.api_version);
    if args.api_version == ProtocolVersion::V1_1 {
        if args.no_default_c {
            tracing::info!("Running without default value for parameter c");
        } else {
            tracing::info!("Running with default value (0) for parameter c");
        }
    }

    axum::serve(listener, app).await?;

    Ok(())
}
