//! Record store for accounts and transactions
//!
//! This module provides the RecordStore component that owns both record
//! collections for the lifetime of the server process. Records keep their
//! insertion order, which is the order every listing returns them in.
//!
//! # Identifier Issuing
//!
//! Each record kind has its own monotonically increasing counter. Identifiers
//! are the kind prefix followed by the counter value zero-padded to at least
//! three digits (`acc-005`, `tx-1000`). The counters never go backwards, so an
//! identifier is never issued twice even if records were ever removed.
//!
//! # Side Effects
//!
//! Creating a transaction adds its amount to the owning account's balance.
//! This is the only cross-record mutation in the store.

use super::sample::{sample_accounts, sample_transactions};
use crate::types::{Account, AccountType, BankError, Transaction, TransactionRequest};
use chrono::{SubsecRound, Utc};
use rust_decimal::Decimal;
use tracing::debug;

const ACCOUNT_PREFIX: &str = "acc";
const TRANSACTION_PREFIX: &str = "tx";

/// In-memory owner of all accounts and transactions
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    /// Accounts in insertion order
    accounts: Vec<Account>,

    /// Transactions in insertion order
    transactions: Vec<Transaction>,

    /// Last account sequence number issued
    account_seq: u32,

    /// Last transaction sequence number issued
    transaction_seq: u32,
}

impl RecordStore {
    /// Create an empty record store
    pub fn new() -> Self {
        RecordStore::default()
    }

    /// Create a store holding the sample accounts and transactions
    pub fn with_sample_data() -> Self {
        RecordStore::with_records(sample_accounts(), sample_transactions())
    }

    /// Create a store from existing records
    ///
    /// The records are taken as-is: transaction account references are not
    /// re-validated and balances are not recomputed. Counters start above
    /// both the record count and the highest numeric suffix already in use.
    ///
    /// # Arguments
    ///
    /// * `accounts` - Accounts in the order they should be listed
    /// * `transactions` - Transactions in the order they should be listed
    pub fn with_records(accounts: Vec<Account>, transactions: Vec<Transaction>) -> Self {
        let account_seq = initial_seq(accounts.iter().map(|a| a.id.as_str()), ACCOUNT_PREFIX);
        let transaction_seq = initial_seq(
            transactions.iter().map(|t| t.id.as_str()),
            TRANSACTION_PREFIX,
        );

        RecordStore {
            accounts,
            transactions,
            account_seq,
            transaction_seq,
        }
    }

    /// All accounts in insertion order
    pub fn list_accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Look up an account by identifier
    ///
    /// # Returns
    ///
    /// * `Ok(&Account)` - If the account exists
    /// * `Err(BankError::AccountNotFound)` - If the identifier is unknown
    pub fn get_account(&self, id: &str) -> Result<&Account, BankError> {
        self.accounts
            .iter()
            .find(|account| account.id == id)
            .ok_or_else(|| BankError::account_not_found(id))
    }

    /// Transactions of one account in insertion order
    ///
    /// Does not check that the account exists; an unknown identifier simply
    /// has no transactions.
    pub fn list_transactions(&self, account_id: &str) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|tx| tx.account_id == account_id)
            .collect()
    }

    /// Every transaction in insertion order
    pub fn all_transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Number of transactions booked against an account
    pub fn transaction_count(&self, account_id: &str) -> usize {
        self.transactions
            .iter()
            .filter(|tx| tx.account_id == account_id)
            .count()
    }

    /// Open a new account
    ///
    /// The account starts active, with the given opening balance and the
    /// current time (millisecond precision) as its creation timestamp.
    ///
    /// # Arguments
    ///
    /// * `name` - Owner name
    /// * `account_type` - Account kind
    /// * `initial_balance` - Opening balance
    ///
    /// # Returns
    ///
    /// A copy of the stored account
    pub fn create_account(
        &mut self,
        name: impl Into<String>,
        account_type: AccountType,
        initial_balance: Decimal,
    ) -> Account {
        self.account_seq += 1;
        let id = format_id(ACCOUNT_PREFIX, self.account_seq);
        let account = Account::new(
            id,
            name,
            account_type,
            initial_balance,
            Utc::now().trunc_subsecs(3),
        );

        debug!(account_id = %account.id, account_type = %account.account_type, "account created");
        self.accounts.push(account.clone());
        account
    }

    /// Book a transaction against an existing account
    ///
    /// The account's balance is increased by the (signed) amount and the
    /// transaction is appended. Either both happen or neither does.
    ///
    /// # Arguments
    ///
    /// * `request` - What the caller supplied for the new transaction
    ///
    /// # Returns
    ///
    /// * `Ok(Transaction)` - A copy of the stored transaction
    /// * `Err(BankError)` - If the account is unknown or the balance would overflow
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No account has the requested identifier
    /// - Adding the amount to the balance would overflow
    pub fn create_transaction(
        &mut self,
        request: TransactionRequest,
    ) -> Result<Transaction, BankError> {
        let account = self
            .accounts
            .iter_mut()
            .find(|account| account.id == request.account_id)
            .ok_or_else(|| BankError::account_not_found(&request.account_id))?;

        let new_balance = account
            .balance
            .checked_add(request.amount)
            .ok_or_else(|| {
                BankError::arithmetic_overflow("create-transaction", &request.account_id)
            })?;

        // Nothing below can fail, so the store stays consistent
        account.balance = new_balance;
        self.transaction_seq += 1;
        let id = format_id(TRANSACTION_PREFIX, self.transaction_seq);
        let transaction = request.into_transaction(id, Utc::now().trunc_subsecs(3));

        debug!(
            tx_id = %transaction.id,
            account_id = %transaction.account_id,
            amount = %transaction.amount,
            "transaction booked"
        );
        self.transactions.push(transaction.clone());
        Ok(transaction)
    }
}

fn format_id(prefix: &str, seq: u32) -> String {
    format!("{}-{:03}", prefix, seq)
}

/// Highest sequence already represented by a set of identifiers
fn initial_seq<'a>(ids: impl Iterator<Item = &'a str>, prefix: &str) -> u32 {
    let mut count: u32 = 0;
    let mut highest: u32 = 0;
    for id in ids {
        count = count.saturating_add(1);
        let suffix = id
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix('-'))
            .and_then(|digits| digits.parse::<u32>().ok());
        if let Some(seq) = suffix {
            highest = highest.max(seq);
        }
    }
    count.max(highest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AccountStatus, TransactionType};
    use rstest::rstest;

    fn payment(account_id: &str, amount: Decimal) -> TransactionRequest {
        TransactionRequest {
            account_id: account_id.to_string(),
            amount,
            transaction_type: TransactionType::Payment,
            recipient: Some("Grocery Store".to_string()),
            sender: None,
            description: "Weekly groceries".to_string(),
        }
    }

    #[test]
    fn test_sample_data_in_insertion_order() {
        let store = RecordStore::with_sample_data();

        let ids: Vec<&str> = store.list_accounts().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["acc-001", "acc-002", "acc-003", "acc-004"]);
        assert_eq!(store.all_transactions().len(), 5);
    }

    #[rstest]
    #[case::first("acc-001")]
    #[case::last("acc-004")]
    fn test_get_account_found(#[case] id: &str) {
        let store = RecordStore::with_sample_data();
        assert_eq!(store.get_account(id).unwrap().id, id);
    }

    #[rstest]
    #[case::unknown("acc-999")]
    #[case::empty("")]
    #[case::transaction_id("tx-001")]
    fn test_get_account_not_found(#[case] id: &str) {
        let store = RecordStore::with_sample_data();
        assert!(matches!(
            store.get_account(id).unwrap_err(),
            BankError::AccountNotFound { .. }
        ));
    }

    #[test]
    fn test_list_transactions_filters_by_account() {
        let store = RecordStore::with_sample_data();

        let ids: Vec<&str> = store
            .list_transactions("acc-001")
            .iter()
            .map(|tx| tx.id.as_str())
            .collect();
        assert_eq!(ids, vec!["tx-001", "tx-002", "tx-005"]);
        assert!(store.list_transactions("acc-004").is_empty());
        assert_eq!(store.transaction_count("acc-001"), 3);
    }

    #[test]
    fn test_create_account() {
        let mut store = RecordStore::with_sample_data();

        let account = store.create_account("Jane", AccountType::Checking, Decimal::new(50, 0));

        assert_eq!(account.id, "acc-005");
        assert_eq!(account.status, AccountStatus::Active);
        assert_eq!(account.balance, Decimal::new(50, 0));
        assert_eq!(store.get_account("acc-005").unwrap(), &account);
        assert_eq!(store.list_accounts().last().unwrap().id, "acc-005");
    }

    #[test]
    fn test_account_ids_are_sequential_from_empty() {
        let mut store = RecordStore::new();

        let first = store.create_account("A", AccountType::Savings, Decimal::ZERO);
        let second = store.create_account("B", AccountType::Credit, Decimal::ZERO);

        assert_eq!(first.id, "acc-001");
        assert_eq!(second.id, "acc-002");
    }

    #[test]
    fn test_id_padding_grows_past_three_digits() {
        assert_eq!(format_id("acc", 7), "acc-007");
        assert_eq!(format_id("tx", 1000), "tx-1000");
    }

    #[test]
    fn test_counters_start_above_highest_existing_suffix() {
        let mut accounts = sample_accounts();
        accounts.truncate(1);
        accounts[0].id = "acc-041".to_string();
        let mut store = RecordStore::with_records(accounts, Vec::new());

        let account = store.create_account("Jane", AccountType::Checking, Decimal::ZERO);

        assert_eq!(account.id, "acc-042");
    }

    #[test]
    fn test_create_transaction_updates_balance() {
        let mut store = RecordStore::with_sample_data();
        let before = store.get_account("acc-001").unwrap().balance;

        let tx = store
            .create_transaction(payment("acc-001", Decimal::new(-7550, 2)))
            .unwrap();

        assert_eq!(tx.id, "tx-006");
        assert_eq!(tx.account_id, "acc-001");
        assert_eq!(
            store.get_account("acc-001").unwrap().balance,
            before - Decimal::new(7550, 2)
        );
        assert_eq!(store.all_transactions().len(), 6);
        assert_eq!(store.all_transactions().last().unwrap(), &tx);
    }

    #[test]
    fn test_create_transaction_unknown_account_leaves_state() {
        let mut store = RecordStore::with_sample_data();
        let accounts_before = store.list_accounts().to_vec();

        let result = store.create_transaction(payment("acc-999", Decimal::new(-100, 0)));

        assert_eq!(result.unwrap_err(), BankError::account_not_found("acc-999"));
        assert_eq!(store.list_accounts(), accounts_before.as_slice());
        assert_eq!(store.all_transactions().len(), 5);

        // A failed attempt does not consume an identifier
        let tx = store
            .create_transaction(payment("acc-002", Decimal::new(10, 0)))
            .unwrap();
        assert_eq!(tx.id, "tx-006");
    }

    #[test]
    fn test_create_transaction_overflow_leaves_state() {
        let mut store = RecordStore::new();
        let account = store.create_account("Max", AccountType::Savings, Decimal::MAX);

        let result = store.create_transaction(payment(&account.id, Decimal::ONE));

        assert!(matches!(
            result.unwrap_err(),
            BankError::ArithmeticOverflow { .. }
        ));
        assert_eq!(store.get_account(&account.id).unwrap().balance, Decimal::MAX);
        assert!(store.all_transactions().is_empty());
    }

    #[test]
    fn test_credit_balance_may_go_negative() {
        let mut store = RecordStore::with_sample_data();

        store
            .create_transaction(payment("acc-003", Decimal::new(-1000, 0)))
            .unwrap();

        assert_eq!(
            store.get_account("acc-003").unwrap().balance,
            Decimal::new(-145000, 2)
        );
    }
}
