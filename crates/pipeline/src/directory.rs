//! Directory Query Engine.
//!
//! `query(all, state)` is the whole contract: filter the full directory by
//! the query state, then sort. The input slice is only read; the result is a
//! fresh Vec, so callers can share one directory between any number of
//! concurrent queries without locking.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{FacetFilter, PriceRangeFilter, ProfessionalTypeFilter, SearchFilter};
use crate::query::DirectoryQuery;
use crate::sort::sort_professionals;
use data_loader::{Facet, Professional};
use tracing::debug;

impl FilterPipeline<Professional, DirectoryQuery> {
    /// The listing page's filters in their fixed order:
    /// search, type, specialty, language, availability, session type, price.
    pub fn directory() -> Self {
        FilterPipeline::new()
            .add_filter(SearchFilter)
            .add_filter(ProfessionalTypeFilter)
            .add_filter(FacetFilter::new(Facet::Specialty))
            .add_filter(FacetFilter::new(Facet::Language))
            .add_filter(FacetFilter::new(Facet::Availability))
            .add_filter(FacetFilter::new(Facet::SessionType))
            .add_filter(PriceRangeFilter)
    }
}

/// Reusable engine holding the directory filter pipeline.
pub struct DirectoryEngine {
    pipeline: FilterPipeline<Professional, DirectoryQuery>,
}

impl DirectoryEngine {
    pub fn new() -> Self {
        Self {
            pipeline: FilterPipeline::directory(),
        }
    }

    /// Filter then sort a copy of `all`.
    pub fn query(&self, all: &[Professional], query: &DirectoryQuery) -> Vec<Professional> {
        let mut result = self.pipeline.apply(all.to_vec(), query);
        sort_professionals(&mut result, query.sort_key);
        debug!(
            "Directory query kept {} of {} (sort: {})",
            result.len(),
            all.len(),
            query.sort_key
        );
        result
    }
}

impl Default for DirectoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot directory query with a fresh engine
pub fn query(all: &[Professional], state: &DirectoryQuery) -> Vec<Professional> {
    DirectoryEngine::new().query(all, state)
}
