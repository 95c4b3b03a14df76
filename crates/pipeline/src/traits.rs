//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that lets both query engines
//! (directory listing and review list) compose small, independent filters.

/// Core trait for filtering records.
///
/// `R` is the record type (`Professional`, `Review`), `Q` the query state the
/// filter reads its predicate from.
///
/// ## Design Note
/// - `Send + Sync` allows one pipeline to be shared between callers
/// - Filters take ownership of the Vec and return the kept records, in order
/// - Filters are infallible: an over-narrow query yields an empty Vec
pub trait Filter<R, Q>: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of records.
    ///
    /// Implementations must keep the relative order of the records they keep,
    /// and must pass everything through when their part of the query is unset.
    fn apply(&self, records: Vec<R>, query: &Q) -> Vec<R>;
}
