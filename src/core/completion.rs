//! Completion provider for template arguments
//!
//! Suggests values for a partially typed template argument. Which values are
//! offered depends on the argument name and on the template the client is
//! filling in:
//!
//! | argument | template | values |
//! |---|---|---|
//! | `id` | account detail or transactions, filtered or not | account ids |
//! | `transactionType` | transactions with filters | transaction kinds |
//! | `type` | accounts with filters | account kinds |
//! | `status` | accounts with filters | account statuses |
//!
//! Account ids match the partial value as a literal prefix. Enum values match
//! the lower-cased partial value. Every other pairing yields nothing.
//! The value lists are always exhaustive, so `has_more` is never set.

use super::record_store::RecordStore;
use crate::resource::{TemplateKind, TemplateRef};
use crate::types::{AccountStatus, AccountType, TransactionType};

/// What a completion request refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionReference {
    /// A resource template, by its URI template
    Resource { uri: String },

    /// A prompt, by name; this server has no prompt arguments to complete
    Prompt { name: String },
}

/// Suggested values for one argument
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completion {
    pub values: Vec<String>,
    pub has_more: bool,
}

impl Completion {
    /// No suggestions
    pub fn empty() -> Self {
        Completion::default()
    }

    fn exhaustive(values: Vec<String>) -> Self {
        Completion {
            values,
            has_more: false,
        }
    }
}

/// Suggest values for a partially typed argument
///
/// # Arguments
///
/// * `store` - Source of known account ids
/// * `argument` - Name of the argument being completed
/// * `partial` - What the client has typed so far
/// * `reference` - The template (or prompt) the argument belongs to
pub fn complete(
    store: &RecordStore,
    argument: &str,
    partial: &str,
    reference: &CompletionReference,
) -> Completion {
    let CompletionReference::Resource { uri } = reference else {
        return Completion::empty();
    };
    let Some(template) = TemplateRef::parse(uri) else {
        return Completion::empty();
    };

    let values = match (argument, template.kind, template.with_filters) {
        ("id", TemplateKind::AccountDetail | TemplateKind::Transactions, _) => {
            matching_account_ids(store, partial)
        }
        ("transactionType", TemplateKind::Transactions, true) => matching_values(
            TransactionType::ALL.iter().map(TransactionType::as_str),
            partial,
        ),
        ("type", TemplateKind::AccountList, true) => {
            matching_values(AccountType::ALL.iter().map(AccountType::as_str), partial)
        }
        ("status", TemplateKind::AccountList, true) => {
            matching_values(AccountStatus::ALL.iter().map(AccountStatus::as_str), partial)
        }
        _ => return Completion::empty(),
    };

    Completion::exhaustive(values)
}

/// Account ids starting with `partial`, in store order
fn matching_account_ids(store: &RecordStore, partial: &str) -> Vec<String> {
    store
        .list_accounts()
        .iter()
        .filter(|account| account.id.starts_with(partial))
        .map(|account| account.id.clone())
        .collect()
}

/// Enum wire names starting with the lower-cased `partial`
fn matching_values<'a>(candidates: impl Iterator<Item = &'a str>, partial: &str) -> Vec<String> {
    let prefix = partial.to_lowercase();
    candidates
        .filter(|value| value.starts_with(&prefix))
        .map(str::to_string)
        .collect()
}
