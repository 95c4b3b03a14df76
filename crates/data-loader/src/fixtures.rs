//! Sample directory shipped with the binaries.
//!
//! Five professionals and a handful of reviews, embedded at compile time so
//! the mock data source and the tests work without a data directory.

use crate::error::Result;
use crate::parser;
use crate::types::{Professional, Review};

pub const PROFESSIONALS_JSON: &str = include_str!("../data/professionals.json");
pub const REVIEWS_JSON: &str = include_str!("../data/reviews.json");

/// The five sample professionals, in listing order
pub fn sample_professionals() -> Result<Vec<Professional>> {
    parser::parse_professionals_str(PROFESSIONALS_JSON, "professionals.json")
}

/// Sample reviews for the sample professionals
pub fn sample_reviews() -> Result<Vec<Review>> {
    parser::parse_reviews_str(REVIEWS_JSON, "reviews.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_professionals() {
        let pros = sample_professionals().unwrap();
        let prices: Vec<u32> = pros.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![1200, 1350, 1100, 1300, 450]);
        assert_eq!(pros[0].id, "dr-sarah-johnson");
        assert_eq!(pros[0].review_count, 124);
    }

    #[test]
    fn test_sample_reviews_parse() {
        let reviews = sample_reviews().unwrap();
        assert!(!reviews.is_empty());
        assert!(reviews.iter().all(|r| r.has_valid_rating()));
    }
}
