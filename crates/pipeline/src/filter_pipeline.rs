//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the FilterPipeline struct that chains filters
//! together using the builder pattern.

use crate::traits::Filter;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(SearchFilter)
///     .add_filter(ProfessionalTypeFilter)
///     .add_filter(PriceRangeFilter);
///
/// let kept = pipeline.apply(professionals, &query);
/// ```
pub struct FilterPipeline<R, Q> {
    filters: Vec<Box<dyn Filter<R, Q>>>,
}

impl<R, Q> FilterPipeline<R, Q> {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter<R, Q> + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters, in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence to the records.
    ///
    /// ## Algorithm
    /// 1. Start with the input records
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return final filtered set
    pub fn apply(&self, records: Vec<R>, query: &Q) -> Vec<R> {
        let mut current = records;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, query);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl<R, Q> Default for FilterPipeline<R, Q> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct KeepEven;

    impl Filter<u32, ()> for KeepEven {
        fn name(&self) -> &str {
            "KeepEven"
        }

        fn apply(&self, records: Vec<u32>, _query: &()) -> Vec<u32> {
            records.into_iter().filter(|n| n % 2 == 0).collect()
        }
    }

    struct AtMost(u32);

    impl Filter<u32, ()> for AtMost {
        fn name(&self) -> &str {
            "AtMost"
        }

        fn apply(&self, records: Vec<u32>, _query: &()) -> Vec<u32> {
            records.into_iter().filter(|&n| n <= self.0).collect()
        }
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline: FilterPipeline<u32, ()> = FilterPipeline::new();
        assert_eq!(pipeline.apply(vec![3, 1, 2], &()), vec![3, 1, 2]);
    }

    #[test]
    fn test_filters_run_in_order() {
        let pipeline = FilterPipeline::new()
            .add_filter(KeepEven)
            .add_filter(AtMost(6));

        assert_eq!(pipeline.filter_names(), vec!["KeepEven", "AtMost"]);
        assert_eq!(pipeline.apply(vec![8, 2, 5, 6, 4], &()), vec![2, 6, 4]);
    }
}
