//! Banking MCP server
//!
//! Serves an in-memory bank over the Model Context Protocol on stdio.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --no-sample-data
//! cargo run -- --log-level debug --server-name ledger
//! ```
//!
//! Accounts and transactions are readable as resources; the
//! `create-account` and `create-transaction` tools mutate the store. All
//! state lives in memory and is lost on exit. Logs go to stderr.
//!
//! # Exit Codes
//!
//! - 0: The client closed the session
//! - 1: Error (transport failure during start-up or while serving)

use anyhow::Context;
use banking_mcp::cli::{self, CliArgs};
use banking_mcp::logging;
use banking_mcp::server::BankingServer;
use rmcp::ServiceExt;
use std::process;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let args = cli::parse_args();
    logging::init_tracing(&args.log_level);

    if let Err(e) = run(args).await {
        error!("{:#}", e);
        process::exit(1);
    }
}

async fn run(args: CliArgs) -> anyhow::Result<()> {
    let config = args.to_server_config();
    info!(
        server_name = %config.server_name,
        sample_data = config.load_sample_data,
        "starting banking MCP server v{}",
        env!("CARGO_PKG_VERSION")
    );

    let service = BankingServer::new(config)
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start MCP service on stdio")?;

    let reason = service
        .waiting()
        .await
        .context("MCP service terminated abnormally")?;

    info!(?reason, "banking MCP server stopped");
    Ok(())
}
