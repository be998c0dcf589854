//! Sample records loaded into the store at start-up

use crate::types::{Account, AccountStatus, AccountType, Transaction, TransactionType};
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

const SAMPLE_OWNER: &str = "Robert Collins";

fn utc(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .unwrap_or_default()
}

/// The four sample accounts, `acc-001` through `acc-004`
pub fn sample_accounts() -> Vec<Account> {
    let account = |id: &str, kind, balance, status, created_at| Account {
        id: id.to_string(),
        name: SAMPLE_OWNER.to_string(),
        account_type: kind,
        balance,
        status,
        created_at,
    };

    vec![
        account(
            "acc-001",
            AccountType::Checking,
            Decimal::new(250075, 2),
            AccountStatus::Active,
            utc(2023, 1, 15, 0, 0),
        ),
        account(
            "acc-002",
            AccountType::Savings,
            Decimal::new(1575025, 2),
            AccountStatus::Active,
            utc(2022, 11, 20, 0, 0),
        ),
        account(
            "acc-003",
            AccountType::Credit,
            Decimal::new(-45000, 2),
            AccountStatus::Active,
            utc(2023, 2, 5, 0, 0),
        ),
        account(
            "acc-004",
            AccountType::Checking,
            Decimal::new(10050, 2),
            AccountStatus::Inactive,
            utc(2022, 10, 10, 0, 0),
        ),
    ]
}

/// The five sample transactions, `tx-001` through `tx-005`
///
/// Balances in [`sample_accounts`] already include these amounts.
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: "tx-001".to_string(),
            account_id: "acc-001".to_string(),
            amount: Decimal::new(100000, 2),
            transaction_type: TransactionType::Deposit,
            recipient: None,
            sender: None,
            description: "Salary deposit".to_string(),
            date: utc(2023, 5, 1, 10, 30),
        },
        Transaction {
            id: "tx-002".to_string(),
            account_id: "acc-001".to_string(),
            amount: Decimal::new(-15025, 2),
            transaction_type: TransactionType::Payment,
            recipient: Some("Electric Company".to_string()),
            sender: None,
            description: "Monthly electricity bill".to_string(),
            date: utc(2023, 5, 5, 14, 15),
        },
        Transaction {
            id: "tx-003".to_string(),
            account_id: "acc-002".to_string(),
            amount: Decimal::new(50000, 2),
            transaction_type: TransactionType::Transfer,
            recipient: None,
            sender: Some("acc-001".to_string()),
            description: "Transfer to savings".to_string(),
            date: utc(2023, 5, 10, 9, 45),
        },
        Transaction {
            id: "tx-004".to_string(),
            account_id: "acc-003".to_string(),
            amount: Decimal::new(-20000, 2),
            transaction_type: TransactionType::Withdrawal,
            recipient: None,
            sender: None,
            description: "ATM withdrawal".to_string(),
            date: utc(2023, 5, 12, 17, 30),
        },
        Transaction {
            id: "tx-005".to_string(),
            account_id: "acc-001".to_string(),
            amount: Decimal::new(-7550, 2),
            transaction_type: TransactionType::Payment,
            recipient: Some("Grocery Store".to_string()),
            sender: None,
            description: "Weekly groceries".to_string(),
            date: utc(2023, 5, 15, 11, 20),
        },
    ]
}
