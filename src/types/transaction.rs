//! Transaction-related types for the banking server
//!
//! This module defines transaction kinds, stored transaction records, and the
//! request record used to create a new transaction.

use super::account::AccountId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Transaction identifier (`tx-NNN`)
pub type TransactionId = String;

/// Transaction kinds supported by the server
///
/// The kind is descriptive only: the sign of the amount decides whether the
/// owning account's balance goes up or down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in, normally a positive amount
    Deposit,

    /// Cash taken out, normally a negative amount
    Withdrawal,

    /// Movement between accounts
    Transfer,

    /// Payment to a third party, normally a negative amount
    Payment,
}

impl TransactionType {
    /// Every kind, in the order completions list them
    pub const ALL: [TransactionType; 4] = [
        TransactionType::Deposit,
        TransactionType::Withdrawal,
        TransactionType::Transfer,
        TransactionType::Payment,
    ];

    /// Wire name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "deposit",
            TransactionType::Withdrawal => "withdrawal",
            TransactionType::Transfer => "transfer",
            TransactionType::Payment => "payment",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored transaction record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Owning account
    ///
    /// Checked against the store when the transaction is created. Seeded
    /// history is taken as-is.
    pub account_id: AccountId,

    /// Signed amount applied to the owning account's balance
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,

    /// Transaction kind
    pub transaction_type: TransactionType,

    /// Payee, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,

    /// Payer, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,

    /// Free-text description
    pub description: String,

    /// When the transaction was recorded (UTC)
    pub date: DateTime<Utc>,
}

/// Input record for creating a transaction
///
/// Carries everything the caller supplies; the store adds the identifier and
/// timestamp.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    /// The account the transaction is booked against
    pub account_id: AccountId,

    /// Signed amount (deposits positive, withdrawals and payments negative)
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,

    /// Transaction kind
    pub transaction_type: TransactionType,

    #[serde(default)]
    pub recipient: Option<String>,

    #[serde(default)]
    pub sender: Option<String>,

    pub description: String,
}

impl TransactionRequest {
    /// Turn the request into a stored transaction
    ///
    /// # Arguments
    ///
    /// * `id` - Identifier issued by the record store
    /// * `date` - Timestamp to record
    pub fn into_transaction(self, id: TransactionId, date: DateTime<Utc>) -> Transaction {
        Transaction {
            id,
            account_id: self.account_id,
            amount: self.amount,
            transaction_type: self.transaction_type,
            recipient: self.recipient,
            sender: self.sender,
            description: self.description,
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    #[case::deposit("deposit", TransactionType::Deposit)]
    #[case::withdrawal("withdrawal", TransactionType::Withdrawal)]
    #[case::transfer("transfer", TransactionType::Transfer)]
    #[case::payment("payment", TransactionType::Payment)]
    fn test_transaction_type_round_trip(#[case] input: &str, #[case] expected: TransactionType) {
        let parsed: TransactionType = serde_json::from_value(serde_json::json!(input)).unwrap();
        assert_eq!(parsed, expected);
        assert_eq!(expected.as_str(), input);
    }

    #[test]
    fn test_transaction_type_rejects_unknown() {
        assert!(serde_json::from_value::<TransactionType>(serde_json::json!("refund")).is_err());
    }

    #[test]
    fn test_absent_parties_are_omitted_from_json() {
        let request = TransactionRequest {
            account_id: "acc-003".to_string(),
            amount: Decimal::new(-20000, 2),
            transaction_type: TransactionType::Withdrawal,
            recipient: None,
            sender: None,
            description: "ATM withdrawal".to_string(),
        };
        let date = Utc.with_ymd_and_hms(2023, 5, 12, 17, 30, 0).unwrap();

        let json = serde_json::to_value(request.into_transaction("tx-004".to_string(), date))
            .unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "tx-004",
                "accountId": "acc-003",
                "amount": -200.0,
                "transactionType": "withdrawal",
                "description": "ATM withdrawal",
                "date": "2023-05-12T17:30:00Z"
            })
        );
    }

    #[test]
    fn test_request_deserializes_from_tool_arguments() {
        let request: TransactionRequest = serde_json::from_value(serde_json::json!({
            "accountId": "acc-001",
            "amount": -75.5,
            "transactionType": "payment",
            "recipient": "Grocery Store",
            "description": "Weekly groceries"
        }))
        .unwrap();

        assert_eq!(request.amount, Decimal::new(-755, 1));
        assert_eq!(request.transaction_type, TransactionType::Payment);
        assert_eq!(request.recipient.as_deref(), Some("Grocery Store"));
        assert!(request.sender.is_none());
    }
}
