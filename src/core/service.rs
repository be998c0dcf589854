//! Banking service
//!
//! This module provides the BankingService that every protocol handler goes
//! through. It owns the handle to the record store and wires the request
//! paths together:
//!
//! - Resource reads: address matcher → filter engine → JSON body
//! - Resource listing: one entry per readable view of the store
//! - Creations: straight to the record store
//! - Completions: completion provider over the current store contents
//!
//! Failures on the read path become `{"error": "..."}` bodies rather than
//! `Err` values, so a bad address or unknown account never fails the
//! request itself.

use super::completion::{self, Completion, CompletionReference};
use super::filter::{apply_filters, AccountFilter, TransactionFilter};
use super::record_store::RecordStore;
use crate::io::json_format::{
    self, account_resource_description, account_resource_name, transactions_resource_description,
    transactions_resource_name,
};
use crate::resource::uri::{account_uri, accounts_uri, transactions_uri};
use crate::resource::{match_uri, ResourceRoute};
use crate::types::{Account, AccountRequest, BankError, Transaction, TransactionRequest};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Data behind a matched resource address
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResourceBody {
    Accounts(Vec<Account>),
    Account(Account),
    Transactions(Vec<Transaction>),
}

/// One entry of the resource listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
    pub uri: String,
    pub name: String,
    pub description: String,
}

/// Resolve a resource address against the store
///
/// The account detail route ignores any query parameters. The transactions
/// route checks the account before looking at its filters.
///
/// # Errors
///
/// Returns an error if:
/// - The address matches no known shape (`ResourceNotFound`)
/// - The addressed account does not exist (`AccountNotFound`)
/// - A numeric or date filter value does not parse (`InvalidFilter`)
pub fn resolve_resource(store: &RecordStore, uri: &str) -> Result<ResourceBody, BankError> {
    let resolved = match_uri(uri).ok_or_else(|| BankError::resource_not_found(uri))?;

    match resolved.route {
        ResourceRoute::Accounts => {
            let filter = AccountFilter::from_query(&resolved.query)?;
            Ok(ResourceBody::Accounts(apply_filters(
                store.list_accounts(),
                &filter,
            )))
        }
        ResourceRoute::Account { id } => Ok(ResourceBody::Account(store.get_account(&id)?.clone())),
        ResourceRoute::Transactions { account_id } => {
            store.get_account(&account_id)?;
            let filter = TransactionFilter::from_query(&resolved.query)?;
            Ok(ResourceBody::Transactions(apply_filters(
                store.list_transactions(&account_id),
                &filter,
            )))
        }
    }
}

/// Every readable view of the store, in listing order
///
/// The full collection comes first, then one entry per account, then one
/// entry per account that has at least one transaction.
pub fn resource_entries(store: &RecordStore) -> Vec<ResourceEntry> {
    let accounts = store.list_accounts();
    let mut entries = Vec::with_capacity(1 + accounts.len() * 2);

    entries.push(ResourceEntry {
        uri: accounts_uri(),
        name: "All Accounts".to_string(),
        description: "List of all bank accounts".to_string(),
    });

    entries.extend(accounts.iter().map(|account| ResourceEntry {
        uri: account_uri(&account.id),
        name: account_resource_name(account),
        description: account_resource_description(account),
    }));

    entries.extend(accounts.iter().filter_map(|account| {
        let count = store.transaction_count(&account.id);
        (count > 0).then(|| ResourceEntry {
            uri: transactions_uri(&account.id),
            name: transactions_resource_name(&account.id),
            description: transactions_resource_description(&account.id, count),
        })
    }));

    entries
}

/// Shared entry point for every protocol handler
///
/// Cloning is cheap and every clone works on the same store.
#[derive(Debug, Clone)]
pub struct BankingService {
    store: Arc<RwLock<RecordStore>>,
}

impl BankingService {
    /// Create a service that takes ownership of a record store
    pub fn new(store: RecordStore) -> Self {
        BankingService {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Read a resource and render it as JSON text
    ///
    /// Lookup and filter failures are rendered as an error body.
    ///
    /// # Errors
    ///
    /// Returns [`BankError::Serialization`] only if the body cannot be encoded.
    pub async fn read_resource(&self, uri: &str) -> Result<String, BankError> {
        let store = self.store.read().await;
        debug!(uri, "reading resource");

        match resolve_resource(&store, uri) {
            Ok(body) => json_format::to_json_text(&body),
            Err(err) => {
                warn!(uri, error = %err, "resource read failed");
                json_format::error_text(&err)
            }
        }
    }

    /// List every readable resource
    pub async fn list_resources(&self) -> Vec<ResourceEntry> {
        let store = self.store.read().await;
        resource_entries(&store)
    }

    /// Open a new account
    pub async fn create_account(&self, request: AccountRequest) -> Account {
        let mut store = self.store.write().await;
        let account = store.create_account(
            request.name,
            request.account_type,
            request.initial_balance,
        );
        info!(account_id = %account.id, "created account");
        account
    }

    /// Book a transaction against an existing account
    ///
    /// # Errors
    ///
    /// Returns an error if the account does not exist or its balance would
    /// overflow; the store is left unchanged in both cases.
    pub async fn create_transaction(
        &self,
        request: TransactionRequest,
    ) -> Result<Transaction, BankError> {
        let mut store = self.store.write().await;
        let transaction = store.create_transaction(request)?;
        info!(
            tx_id = %transaction.id,
            account_id = %transaction.account_id,
            "created transaction"
        );
        Ok(transaction)
    }

    /// Suggest values for a partially typed template argument
    pub async fn complete(
        &self,
        argument: &str,
        partial: &str,
        reference: &CompletionReference,
    ) -> Completion {
        let store = self.store.read().await;
        completion::complete(&store, argument, partial, reference)
    }
}
