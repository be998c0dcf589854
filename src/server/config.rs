//! Server configuration

use crate::core::RecordStore;

/// Name reported to clients when none is configured
pub const DEFAULT_SERVER_NAME: &str = "banking-mcp";

/// Start-up configuration for the protocol server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Name reported in the `initialize` handshake
    pub server_name: String,

    /// Whether the store starts with the sample accounts and transactions
    pub load_sample_data: bool,
}

impl ServerConfig {
    /// Create a new server configuration
    ///
    /// An empty or blank name falls back to [`DEFAULT_SERVER_NAME`].
    pub fn new(server_name: impl Into<String>, load_sample_data: bool) -> Self {
        let server_name = server_name.into();
        let server_name = if server_name.trim().is_empty() {
            DEFAULT_SERVER_NAME.to_string()
        } else {
            server_name
        };

        ServerConfig {
            server_name,
            load_sample_data,
        }
    }

    /// The record store the server starts with
    pub fn initial_store(&self) -> RecordStore {
        if self.load_sample_data {
            RecordStore::with_sample_data()
        } else {
            RecordStore::new()
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig::new(DEFAULT_SERVER_NAME, true)
    }
}
