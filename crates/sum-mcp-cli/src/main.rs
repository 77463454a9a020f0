use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sum_mcp_client::config::{DEFAULT_V1_0_URL, DEFAULT_V1_1_URL};
use sum_mcp_client::{ClientConfig, SumTools};
use sum_mcp_rpc::ToolRegistry;

#[derive(Parser)]
#[command(name = "sum-mcp", about = "Call the MCP sum servers (v1.0 and v1.1)")]
struct Cli {
    /// Base URL of the two-operand server
    #[arg(long = "v10-url", env = "SUM_MCP_V10_URL", default_value = DEFAULT_V1_0_URL)]
    v1_0_url: String,

    /// Base URL of the three-operand server
    #[arg(long = "v11-url", env = "SUM_MCP_V11_URL", default_value = DEFAULT_V1_1_URL)]
    v1_1_url: String,

    /// Per-call timeout in seconds
    #[arg(long, env = "SUM_MCP_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sum two numbers on the v1.0 server
    SumTwo {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },

    /// Sum three numbers on the v1.1 server
    SumThree {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
        #[arg(allow_negative_numbers = true)]
        c: f64,
    },

    /// Check whether both servers answer
    Status,

    /// Report which server fits a free-text request
    Classify {
        /// The request, e.g. "add 2 and 3"
        text: String,
    },

    /// Classify a free-text request and call the server it fits
    Ask {
        text: String,
    },

    /// Print the tool definitions as JSON
    Tools,

    /// Call a tool by name with JSON arguments
    Call {
        /// Tool name, e.g. `sum_two_numbers`
        name: String,

        /// Arguments object, e.g. '{"a": 1, "b": 2}'
        #[arg(default_value = "{}")]
        arguments: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = ClientConfig::new(cli.v1_0_url, cli.v1_1_url)
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    tracing::debug!(?config, "client configuration");

    let tools = SumTools::over_http(config)?;

    let output = match cli.command {
        Commands::SumTwo { a, b } => tools.sum_two(a, b).await,
        Commands::SumThree { a, b, c } => tools.sum_three(a, b, c).await,
        Commands::Status => tools.check_server_status().await,
        Commands::Classify { text } => tools.classify_math_request(&text),
        Commands::Ask { text } => tools.solve_math_request(&text).await,
        Commands::Tools => serde_json::to_string_pretty(&ToolRegistry::definitions())?,
        Commands::Call { name, arguments } => {
            let arguments: serde_json::Value = serde_json::from_str(&arguments)?;
            tools.call_tool(&name, &arguments).await
        }
    };

    println!("{output}");

    Ok(())
}
