//! Query engines for the professional directory.
//!
//! This crate provides:
//! - Filter trait and FilterPipeline for composing filters over any record type
//! - The Directory Query Engine (search, type, facets, price, sort)
//! - The Review Aggregation Engine (summary, search, rating filter, sort,
//!   mark-helpful, submit)
//! - Homepage category sections
//!
//! ## Architecture
//! Both engines are pure functions of (full dataset, query state):
//! 1. Filters narrow a copy of the full collection, in a fixed order
//! 2. A stable sort orders what is left
//! 3. The caller gets a fresh Vec; the input is never touched
//!
//! Nothing here can fail. An over-narrow query is an empty Vec, and an empty
//! review set is an all-zero summary.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{DirectoryEngine, DirectoryQuery, SortKey};
//!
//! let engine = DirectoryEngine::new();
//! let query = DirectoryQuery::new()
//!     .with_search("anxiety")
//!     .with_price_range(500, 5000)
//!     .with_sort(SortKey::PriceAsc);
//!
//! let listing = engine.query(index.professionals(), &query);
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod query;
pub mod sort;
pub mod directory;
pub mod categories;
pub mod reviews;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use query::{DirectoryQuery, PriceRange, SortKey};
pub use directory::DirectoryEngine;
pub use reviews::{
    mark_helpful, submit_review, summarize, RatingBreakdown, ReviewEngine, ReviewQuery,
    ReviewSortKey, ReviewSummary,
};
