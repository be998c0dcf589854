//! Account-related types for the banking server
//!
//! This module defines the Account structure and the two closed enums
//! (kind and status) that describe it.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Account identifier (`acc-NNN`)
pub type AccountId = String;

/// Kind of bank account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Checking,
    Savings,
    /// Credit accounts routinely carry a negative balance
    Credit,
}

impl AccountType {
    /// Every kind, in the order completions list them
    pub const ALL: [AccountType; 3] = [
        AccountType::Checking,
        AccountType::Savings,
        AccountType::Credit,
    ];

    /// Wire name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Checking => "checking",
            AccountType::Savings => "savings",
            AccountType::Credit => "credit",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Inactive,
    Closed,
}

impl AccountStatus {
    /// Every status, in the order completions list them
    pub const ALL: [AccountStatus; 3] = [
        AccountStatus::Active,
        AccountStatus::Inactive,
        AccountStatus::Closed,
    ];

    /// Wire name of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Inactive => "inactive",
            AccountStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bank account record
///
/// Serializes with camelCase keys and the balance as a JSON number, which is
/// the shape clients receive from resource reads and tool calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique identifier, immutable once issued
    pub id: AccountId,

    /// Owner name
    pub name: String,

    /// Account kind
    #[serde(rename = "type")]
    pub account_type: AccountType,

    /// Current balance
    ///
    /// No sign constraint is enforced: credit accounts are negative when
    /// money is owed.
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,

    /// Lifecycle status
    pub status: AccountStatus,

    /// Creation timestamp (UTC)
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new active account
    ///
    /// # Arguments
    ///
    /// * `id` - The identifier issued by the record store
    /// * `name` - Owner name
    /// * `account_type` - Account kind
    /// * `balance` - Opening balance
    /// * `created_at` - Creation timestamp
    pub fn new(
        id: AccountId,
        name: impl Into<String>,
        account_type: AccountType,
        balance: Decimal,
        created_at: DateTime<Utc>,
    ) -> Self {
        Account {
            id,
            name: name.into(),
            account_type,
            balance,
            status: AccountStatus::Active,
            created_at,
        }
    }
}

/// Input record for opening an account
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRequest {
    /// Owner name
    pub name: String,

    /// Account kind
    #[serde(rename = "type")]
    pub account_type: AccountType,

    /// Opening balance, zero when omitted
    #[serde(default, with = "rust_decimal::serde::float")]
    pub initial_balance: Decimal,
}
