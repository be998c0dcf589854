//! Filter engine for collection reads
//!
//! Filters are built from the query parameters of a resource address and
//! narrow a collection without touching the store. Every supplied constraint
//! must hold (logical AND); absent constraints impose nothing.
//!
//! # Account Filters
//!
//! - `name`: case-insensitive substring of the owner name
//! - `type`: exact account kind
//! - `balanceMin`: balance ≥ value
//! - `status`: exact account status
//!
//! # Transaction Filters
//!
//! - `recipient` / `sender`: case-insensitive substring; records without the
//!   party never match
//! - `amountMin` / `amountMax`: inclusive amount bounds
//! - `transactionType`: exact transaction kind
//! - `dateFrom` / `dateTo`: inclusive date bounds, RFC 3339 or `YYYY-MM-DD`
//!
//! # Malformed Values
//!
//! Numeric and date values that do not parse reject the whole read with
//! [`BankError::InvalidFilter`]. A well-formed number beyond the range of
//! `Decimal` still acts as a bound: it lies above or below every amount. Empty values count as absent. An enum value
//! that names no kind or status is kept and simply matches nothing.

use super::traits::RecordFilter;
use crate::resource::QueryParams;
use crate::types::{Account, BankError, Transaction};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Query keys understood by [`AccountFilter`]
pub const ACCOUNT_FILTER_KEYS: [&str; 4] = ["name", "type", "balanceMin", "status"];

/// Query keys understood by [`TransactionFilter`]
pub const TRANSACTION_FILTER_KEYS: [&str; 7] = [
    "recipient",
    "sender",
    "amountMin",
    "amountMax",
    "transactionType",
    "dateFrom",
    "dateTo",
];

/// Narrow a collection to the records a filter accepts
///
/// The result is a new sequence that keeps the relative order of the
/// matching records; the source is never modified.
///
/// # Arguments
///
/// * `records` - The records to narrow, in listing order
/// * `filter` - Constraints every returned record satisfies
pub fn apply_filters<'a, T, F>(records: impl IntoIterator<Item = &'a T>, filter: &F) -> Vec<T>
where
    T: Clone + 'a,
    F: RecordFilter<T>,
{
    let records = records.into_iter();
    if filter.is_unconstrained() {
        return records.cloned().collect();
    }
    records
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}

/// Constraints on accounts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountFilter {
    /// Lower-cased owner name fragment
    pub name: Option<String>,
    pub account_type: Option<String>,
    pub balance_min: Option<Bound>,
    pub status: Option<String>,
}

impl AccountFilter {
    /// Build a filter from query parameters
    ///
    /// Keys that are not account filters are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`BankError::InvalidFilter`] if `balanceMin` is not a number.
    pub fn from_query(query: &QueryParams) -> Result<Self, BankError> {
        Ok(AccountFilter {
            name: text_param(query, "name").map(|name| name.to_lowercase()),
            account_type: text_param(query, "type"),
            balance_min: bound_param(query, "balanceMin")?,
            status: text_param(query, "status"),
        })
    }
}

impl RecordFilter<Account> for AccountFilter {
    fn matches(&self, account: &Account) -> bool {
        self.name
            .as_deref()
            .map_or(true, |name| contains_ignore_case(&account.name, name))
            && self
                .account_type
                .as_deref()
                .map_or(true, |kind| account.account_type.as_str() == kind)
            && self
                .balance_min
                .map_or(true, |min| min.at_most(account.balance))
            && self
                .status
                .as_deref()
                .map_or(true, |status| account.status.as_str() == status)
    }

    fn is_unconstrained(&self) -> bool {
        *self == AccountFilter::default()
    }
}

/// Constraints on transactions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    /// Lower-cased recipient fragment
    pub recipient: Option<String>,
    /// Lower-cased sender fragment
    pub sender: Option<String>,
    pub amount_min: Option<Bound>,
    pub amount_max: Option<Bound>,
    pub transaction_type: Option<String>,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
}

impl TransactionFilter {
    /// Build a filter from query parameters
    ///
    /// Keys that are not transaction filters are ignored. A plain date in
    /// `dateFrom` means the start of that day, and in `dateTo` the end of it.
    ///
    /// # Errors
    ///
    /// Returns [`BankError::InvalidFilter`] if an amount bound is not a number
    /// or a date bound is neither RFC 3339 nor `YYYY-MM-DD`.
    pub fn from_query(query: &QueryParams) -> Result<Self, BankError> {
        Ok(TransactionFilter {
            recipient: text_param(query, "recipient").map(|r| r.to_lowercase()),
            sender: text_param(query, "sender").map(|s| s.to_lowercase()),
            amount_min: bound_param(query, "amountMin")?,
            amount_max: bound_param(query, "amountMax")?,
            transaction_type: text_param(query, "transactionType"),
            date_from: date_param(query, "dateFrom", DayEdge::Start)?,
            date_to: date_param(query, "dateTo", DayEdge::End)?,
        })
    }
}

impl RecordFilter<Transaction> for TransactionFilter {
    fn matches(&self, tx: &Transaction) -> bool {
        party_matches(self.recipient.as_deref(), tx.recipient.as_deref())
            && party_matches(self.sender.as_deref(), tx.sender.as_deref())
            && self.amount_min.map_or(true, |min| min.at_most(tx.amount))
            && self.amount_max.map_or(true, |max| max.at_least(tx.amount))
            && self
                .transaction_type
                .as_deref()
                .map_or(true, |kind| tx.transaction_type.as_str() == kind)
            && self.date_from.map_or(true, |from| tx.date >= from)
            && self.date_to.map_or(true, |to| tx.date <= to)
    }

    fn is_unconstrained(&self) -> bool {
        *self == TransactionFilter::default()
    }
}

/// A missing party never matches a present constraint
fn party_matches(wanted: Option<&str>, actual: Option<&str>) -> bool {
    match (wanted, actual) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some(wanted), Some(actual)) => contains_ignore_case(actual, wanted),
    }
}

/// `needle` must already be lower-cased
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn text_param(query: &QueryParams, key: &str) -> Option<String> {
    query
        .first(key)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Numeric bound taken from a query value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// A bound within the range of `Decimal`
    Value(Decimal),
    /// A finite number larger than any `Decimal`
    AboveRange,
    /// A finite number smaller than any `Decimal`
    BelowRange,
}

impl Bound {
    /// True when `amount` is not below this bound
    fn at_most(self, amount: Decimal) -> bool {
        match self {
            Bound::Value(bound) => bound <= amount,
            Bound::AboveRange => false,
            Bound::BelowRange => true,
        }
    }

    /// True when `amount` is not above this bound
    fn at_least(self, amount: Decimal) -> bool {
        match self {
            Bound::Value(bound) => bound >= amount,
            Bound::AboveRange => true,
            Bound::BelowRange => false,
        }
    }
}

fn bound_param(query: &QueryParams, key: &str) -> Result<Option<Bound>, BankError> {
    let Some(raw) = text_param(query, key) else {
        return Ok(None);
    };
    parse_bound(raw.trim())
        .map(Some)
        .ok_or_else(|| BankError::invalid_filter(key, &raw))
}

fn parse_bound(value: &str) -> Option<Bound> {
    if let Ok(decimal) = Decimal::from_str(value).or_else(|_| Decimal::from_scientific(value)) {
        return Some(Bound::Value(decimal));
    }

    // Well-formed but outside the decimal range, or too precise to parse exactly
    let float = f64::from_str(value).ok().filter(|float| float.is_finite())?;
    Some(match Decimal::from_f64(float) {
        Some(decimal) => Bound::Value(decimal),
        None if float > 0.0 => Bound::AboveRange,
        None => Bound::BelowRange,
    })
}

/// Which end of a day a plain date stands for
#[derive(Debug, Clone, Copy)]
enum DayEdge {
    Start,
    End,
}

fn date_param(
    query: &QueryParams,
    key: &str,
    edge: DayEdge,
) -> Result<Option<DateTime<Utc>>, BankError> {
    let Some(raw) = text_param(query, key) else {
        return Ok(None);
    };
    parse_date_bound(raw.trim(), edge)
        .map(Some)
        .ok_or_else(|| BankError::invalid_filter(key, &raw))
}

fn parse_date_bound(value: &str, edge: DayEdge) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.with_timezone(&Utc));
    }

    let day = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    let moment = match edge {
        DayEdge::Start => day.and_hms_opt(0, 0, 0)?,
        DayEdge::End => day.and_hms_nano_opt(23, 59, 59, 999_999_999)?,
    };
    Some(moment.and_utc())
}
