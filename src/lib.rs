//! Banking MCP Server Library
//! # Overview
//!
//! This library serves an in-memory bank (accounts and their transactions)
//! over the Model Context Protocol. Clients read records as resources,
//! narrow collections with query-string filters, ask for argument
//! completions, and create records through tools.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Transaction, BankError, etc.)
//! - [`resource`] - Resource addressing:
//!   - [`resource::uri`] - Structural matching of resource addresses
//!   - [`resource::query`] - Query-string parsing and percent-decoding
//!   - [`resource::template`] - Advertised templates and template references
//! - [`core`] - Business logic components:
//!   - [`core::record_store`] - Account and transaction collections
//!   - [`core::filter`] - Filter engine for collection reads
//!   - [`core::completion`] - Completion provider for template arguments
//!   - [`core::service`] - Request paths shared by every handler
//! - [`io`] - JSON payload formatting
//! - [`server`] - MCP handler, tools, and server configuration
//! - [`cli`] - CLI arguments parsing
//! - [`logging`] - Tracing subscriber setup
//!
//! # Resources
//!
//! - `accounts` - All accounts; filters `name`, `type`, `balanceMin`, `status`
//! - `accounts/{id}` - One account
//! - `accounts/{id}/transactions` - Transactions of one account; filters
//!   `recipient`, `sender`, `amountMin`, `amountMax`, `transactionType`,
//!   `dateFrom`, `dateTo`
//!
//! # Tools
//!
//! - **create-account**: Open an account with an optional initial balance
//! - **create-transaction**: Book a signed amount against an account

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod resource;
pub mod server;
pub mod types;

pub use crate::core::{BankingService, RecordStore};
pub use server::{BankingServer, ServerConfig};
pub use types::{
    Account, AccountId, AccountStatus, AccountType, BankError, Transaction, TransactionId,
    TransactionType,
};
