//! Error types for the banking server
//!
//! Every variant is a per-request failure: none of them is fatal to the
//! process, and the operation that produced one leaves the record store
//! unchanged.
//!
//! # Error Categories
//!
//! - **Lookup Errors**: unknown account, unmatched resource address
//! - **Query Errors**: filter values that do not parse
//! - **Arithmetic Errors**: balance overflow when booking a transaction
//! - **Serialization Errors**: payload encoding failures

use thiserror::Error;

/// Main error type for the banking server
///
/// The `Display` text is what clients see inside the `{"error": "..."}`
/// payload, so it stays short and stable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    /// The account identifier does not resolve to a stored account
    #[error("Account not found")]
    AccountNotFound {
        /// The identifier that was looked up
        account_id: String,
    },

    /// The resource address matched none of the known shapes
    #[error("Resource not found")]
    ResourceNotFound {
        /// The address that was requested
        uri: String,
    },

    /// A numeric or date filter value could not be parsed
    #[error("Invalid value '{value}' for filter '{key}'")]
    InvalidFilter {
        /// Query parameter name
        key: String,
        /// Raw value supplied
        value: String,
    },

    /// Booking the amount would overflow the account balance
    #[error("Arithmetic overflow in {operation} for account {account_id}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account whose balance was being updated
        account_id: String,
    },

    /// A payload could not be encoded as JSON
    #[error("Serialization error: {message}")]
    Serialization {
        /// Description of the encoding failure
        message: String,
    },
}

impl From<serde_json::Error> for BankError {
    fn from(error: serde_json::Error) -> Self {
        BankError::Serialization {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl BankError {
    /// Create an AccountNotFound error
    pub fn account_not_found(account_id: &str) -> Self {
        BankError::AccountNotFound {
            account_id: account_id.to_string(),
        }
    }

    /// Create a ResourceNotFound error
    pub fn resource_not_found(uri: &str) -> Self {
        BankError::ResourceNotFound {
            uri: uri.to_string(),
        }
    }

    /// Create an InvalidFilter error
    pub fn invalid_filter(key: &str, value: &str) -> Self {
        BankError::InvalidFilter {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account_id: &str) -> Self {
        BankError::ArithmeticOverflow {
            operation: operation.to_string(),
            account_id: account_id.to_string(),
        }
    }
}
