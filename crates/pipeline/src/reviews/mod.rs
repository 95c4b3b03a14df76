//! Review Aggregation Engine.
//!
//! - `summary`: overall average and per-star breakdown of the full set
//! - `query`: search, rating filter and sort for the displayed list
//! - `mutation`: mark-helpful and submit, both returning new collections
//!
//! The summary is always computed from the unfiltered collection. Narrowing
//! or reordering the displayed list never changes it.

pub mod summary;
pub mod query;
pub mod mutation;

pub use mutation::{mark_helpful, submit_review};
pub use query::{query, ReviewEngine, ReviewQuery, ReviewSortKey};
pub use summary::{summarize, RatingBreakdown, ReviewSummary};
