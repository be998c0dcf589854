//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account record and its kind/status enums
//! - `transaction`: Transaction records, kinds, and creation requests
//! - `error`: Error types for the banking server

pub mod account;
pub mod error;
pub mod transaction;

pub use account::{Account, AccountId, AccountRequest, AccountStatus, AccountType};
pub use error::BankError;
pub use transaction::{Transaction, TransactionId, TransactionRequest, TransactionType};
