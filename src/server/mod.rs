// Server module
// MCP protocol surface over the banking service

pub mod config;
mod handler;
pub mod tools;

pub use config::{ServerConfig, DEFAULT_SERVER_NAME};
pub use handler::BankingServer;
