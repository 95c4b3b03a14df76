//! Filter on session price.

use crate::query::DirectoryQuery;
use crate::traits::Filter;
use data_loader::Professional;

/// Keeps professionals with `min <= price <= max`.
///
/// A reversed range (`min > max`) keeps nothing; it is not treated as an
/// error.
pub struct PriceRangeFilter;

impl Filter<Professional, DirectoryQuery> for PriceRangeFilter {
    fn name(&self) -> &str {
        "PriceRangeFilter"
    }

    fn apply(&self, professionals: Vec<Professional>, query: &DirectoryQuery) -> Vec<Professional> {
        let range = query.price_range;
        professionals
            .into_iter()
            .filter(|pro| range.contains(pro.price))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::fixtures::sample_professionals;

    #[test]
    fn test_price_range_is_inclusive() {
        let query = DirectoryQuery::new().with_price_range(1100, 1300);
        let result = PriceRangeFilter.apply(sample_professionals().unwrap(), &query);

        let prices: Vec<u32> = result.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![1200, 1100, 1300]);
    }

    #[test]
    fn test_reversed_range_is_empty() {
        let query = DirectoryQuery::new().with_price_range(5000, 500);
        let result = PriceRangeFilter.apply(sample_professionals().unwrap(), &query);
        assert!(result.is_empty());
    }

    #[test]
    fn test_unbounded_keeps_everything() {
        let result = PriceRangeFilter.apply(sample_professionals().unwrap(), &DirectoryQuery::new());
        assert_eq!(result.len(), 5);
    }
}
