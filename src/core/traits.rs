//! Core traits for record filtering
//!
//! Account and transaction filters share one predicate interface so the
//! filter engine can narrow either collection with the same code.

/// Predicate over one kind of record
///
/// Implementations hold a set of optional constraints and combine them with
/// logical AND: a record matches when every constraint that is present
/// accepts it.
pub trait RecordFilter<T> {
    /// Check a single record against every present constraint
    fn matches(&self, record: &T) -> bool;

    /// True when no constraint is present, so every record matches
    fn is_unconstrained(&self) -> bool;
}
