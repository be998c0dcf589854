//! Core business logic module
//!
//! This module contains the components behind every protocol request:
//! - `traits` - Predicate abstraction shared by the record filters
//! - `record_store` - Account and transaction collections and their mutations
//! - `filter` - Filter engine for collection reads
//! - `completion` - Completion provider for template arguments
//! - `service` - Request paths wiring the components together
//! - `sample` - Sample records loaded at start-up

pub mod completion;
pub mod filter;
pub mod record_store;
pub mod sample;
pub mod service;
pub mod traits;

pub use completion::{Completion, CompletionReference};
pub use filter::{apply_filters, AccountFilter, Bound, TransactionFilter};
pub use record_store::RecordStore;
pub use service::{BankingService, ResourceBody, ResourceEntry};
pub use traits::RecordFilter;
