use crate::server::{ServerConfig, DEFAULT_SERVER_NAME};
use clap::Parser;

/// Serve an in-memory bank over the Model Context Protocol on stdio
#[derive(Parser, Debug)]
#[command(name = "banking-mcp")]
#[command(about = "Serve an in-memory bank over the Model Context Protocol", long_about = None)]
pub struct CliArgs {
    /// Log filter used when RUST_LOG is not set
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        env = "BANKING_MCP_LOG_LEVEL",
        default_value = "info",
        help = "Log level or filter directive (logs go to stderr)"
    )]
    pub log_level: String,

    /// Start with an empty store instead of the sample records
    #[arg(
        long = "no-sample-data",
        env = "BANKING_MCP_NO_SAMPLE_DATA",
        help = "Start with no accounts or transactions"
    )]
    pub no_sample_data: bool,

    /// Name reported to clients during initialization
    #[arg(
        long = "server-name",
        value_name = "NAME",
        default_value = DEFAULT_SERVER_NAME,
        help = "Server name reported to clients"
    )]
    pub server_name: String,
}

impl CliArgs {
    /// Create a ServerConfig from CLI arguments
    pub fn to_server_config(&self) -> ServerConfig {
        ServerConfig::new(self.server_name.clone(), !self.no_sample_data)
    }
}
