//! JSON payload formatting
//!
//! This module centralizes the text payloads the server hands back:
//! - Record and collection bodies for resource reads and tool results
//! - The `{"error": "..."}` body used for per-request failures
//! - Names and descriptions of listed resources
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{Account, BankError};
use serde::Serialize;

/// MIME type of every resource body
pub const JSON_MIME_TYPE: &str = "application/json";

/// Body of a per-request failure
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// Pretty-printed JSON text of any payload
///
/// # Errors
///
/// Returns [`BankError::Serialization`] if the value cannot be encoded.
pub fn to_json_text<T: Serialize + ?Sized>(value: &T) -> Result<String, BankError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Pretty-printed `{"error": "..."}` body for a failure
pub fn error_text(error: &BankError) -> Result<String, BankError> {
    let message = error.to_string();
    to_json_text(&ErrorBody { error: &message })
}

/// Listing name of an account resource, e.g. `checking Account, acc-001`
pub fn account_resource_name(account: &Account) -> String {
    format!("{} Account, {}", account.account_type, account.id)
}

/// Listing description of an account resource
///
/// The balance is shown with two decimals.
pub fn account_resource_description(account: &Account) -> String {
    format!(
        "A {} account for {}. Balance: ${:.2}, Status: {}",
        account.account_type, account.name, account.balance, account.status
    )
}

/// Listing name of an account's transactions resource
pub fn transactions_resource_name(account_id: &str) -> String {
    format!("Transactions for {}", account_id)
}

/// Listing description of an account's transactions resource
pub fn transactions_resource_description(account_id: &str, count: usize) -> String {
    format!(
        "The set of transactions for {} with {} transactions",
        account_id, count
    )
}
