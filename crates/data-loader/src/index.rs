//! DirectoryIndex: the in-memory store every query runs against.
//!
//! Holds professionals in source order (the "recommended" order), an id
//! lookup table, and reviews grouped per professional. Loading validates the
//! directory invariants once so the engines downstream never have to.

use crate::error::{DataLoadError, Result};
use crate::fixtures;
use crate::parser;
use crate::types::*;
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::info;

/// Main data structure holding the full directory.
#[derive(Debug, Clone, Default)]
pub struct DirectoryIndex {
    /// Professionals in the order the source produced them
    pub(crate) professionals: Vec<Professional>,
    /// Position of each professional in `professionals`
    pub(crate) by_id: HashMap<ProfessionalId, usize>,
    /// Reviews received by each professional, in source order
    pub(crate) reviews: HashMap<ProfessionalId, Vec<Review>>,
    /// Ids seen more than once while inserting
    pub(crate) duplicate_ids: Vec<ProfessionalId>,
}

impl DirectoryIndex {
    /// Creates a new, empty DirectoryIndex
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `professionals.json` and `reviews.json` from a directory.
    ///
    /// Steps:
    /// 1. Parse both files in parallel
    /// 2. Insert professionals, then reviews
    /// 3. Validate data integrity
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        info!("Loading directory data from {:?}", data_dir);

        let professionals_path = data_dir.join("professionals.json");
        let reviews_path = data_dir.join("reviews.json");

        let (professionals, reviews) = rayon::join(
            || parser::parse_professionals(&professionals_path),
            || parser::parse_reviews(&reviews_path),
        );

        Self::from_records(professionals?, reviews?)
    }

    /// Build the index from the embedded sample data
    pub fn from_fixtures() -> Result<Self> {
        Self::from_records(fixtures::sample_professionals()?, fixtures::sample_reviews()?)
    }

    /// Build and validate an index from already-parsed records
    pub fn from_records(professionals: Vec<Professional>, reviews: Vec<Review>) -> Result<Self> {
        let mut index = DirectoryIndex::new();
        for professional in professionals {
            index.insert_professional(professional);
        }
        for review in reviews {
            index.insert_review(review);
        }

        index.validate()?;

        let (professionals, reviews) = index.counts();
        info!("Loaded {} professionals, {} reviews", professionals, reviews);
        Ok(index)
    }

    /// All professionals, in source order
    pub fn professionals(&self) -> &[Professional] {
        &self.professionals
    }

    /// Get a professional by id
    pub fn get_professional(&self, id: &str) -> Option<&Professional> {
        self.by_id.get(id).map(|&pos| &self.professionals[pos])
    }

    /// Get all reviews for a professional
    ///
    /// Returns an empty slice if the professional has no reviews
    pub fn get_reviews(&self, professional_id: &str) -> &[Review] {
        self.reviews
            .get(professional_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Insert a professional at the end of the directory
    pub fn insert_professional(&mut self, professional: Professional) {
        let pos = self.professionals.len();
        if self.by_id.insert(professional.id.clone(), pos).is_some() {
            self.duplicate_ids.push(professional.id.clone());
        }
        self.professionals.push(professional);
    }

    /// Insert a review under its professional
    pub fn insert_review(&mut self, review: Review) {
        self.reviews
            .entry(review.professional_id.clone())
            .or_default()
            .push(review);
    }

    /// (professionals, reviews) counts for logging and validation
    pub fn counts(&self) -> (usize, usize) {
        let total_reviews = self.reviews.values().map(|v| v.len()).sum();
        (self.professionals.len(), total_reviews)
    }

    /// Validate data integrity
    ///
    /// Check that:
    /// - Professional ids are unique
    /// - Professional ratings are within 0.0 - 5.0 and prices are positive
    /// - Review ids are unique and every review points at a known professional
    /// - Review ratings are within 1 - 5
    pub fn validate(&self) -> Result<()> {
        if let Some(id) = self.duplicate_ids.first() {
            return Err(DataLoadError::DuplicateId {
                entity: "Professional".to_string(),
                id: id.clone(),
            });
        }

        if let Some(pro) = self
            .professionals
            .par_iter()
            .find_any(|p| !(0.0..=5.0).contains(&p.rating))
        {
            return Err(DataLoadError::InvalidValue {
                field: format!("rating of {}", pro.id),
                value: pro.rating.to_string(),
            });
        }

        if let Some(pro) = self.professionals.iter().find(|p| p.price == 0) {
            return Err(DataLoadError::InvalidValue {
                field: format!("price of {}", pro.id),
                value: pro.price.to_string(),
            });
        }

        let mut review_ids = HashSet::new();
        for (professional_id, reviews) in &self.reviews {
            if !self.by_id.contains_key(professional_id) {
                return Err(DataLoadError::MissingReference {
                    entity: "Professional".to_string(),
                    id: professional_id.clone(),
                });
            }
            for review in reviews {
                if !review.has_valid_rating() {
                    return Err(DataLoadError::InvalidValue {
                        field: format!("rating of {}", review.id),
                        value: review.rating.to_string(),
                    });
                }
                if !review_ids.insert(review.id.as_str()) {
                    return Err(DataLoadError::DuplicateId {
                        entity: "Review".to_string(),
                        id: review.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn professional(id: &str, price: u32) -> Professional {
        Professional {
            id: id.to_string(),
            name: format!("Name {id}"),
            title: "Psychiatrist".to_string(),
            specialty: "Anxiety".to_string(),
            rating: 4.5,
            review_count: 10,
            price,
            image_src: None,
            bio: None,
            education: None,
            specialties: None,
            languages: None,
            session_types: None,
            location: None,
            availability: None,
        }
    }

    fn review(id: &str, professional_id: &str, rating: u8) -> Review {
        Review {
            id: id.to_string(),
            professional_id: professional_id.to_string(),
            author_name: "Client".to_string(),
            author_avatar: None,
            rating,
            date: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
            content: "Helpful".to_string(),
            helpful_count: 0,
            verified: true,
        }
    }

    #[test]
    fn test_empty_index() {
        let index = DirectoryIndex::new();
        assert_eq!(index.counts(), (0, 0));
        assert!(index.get_professional("nobody").is_none());
        assert!(index.get_reviews("nobody").is_empty());
        assert!(index.validate().is_ok());
    }

    #[test]
    fn test_preserves_source_order() {
        let index = DirectoryIndex::from_records(
            vec![professional("b", 100), professional("a", 200)],
            vec![],
        )
        .unwrap();

        let ids: Vec<&str> = index.professionals().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(index.get_professional("a").unwrap().price, 200);
    }

    #[test]
    fn test_duplicate_professional_rejected() {
        let result = DirectoryIndex::from_records(
            vec![professional("a", 100), professional("a", 200)],
            vec![],
        );
        assert!(matches!(result, Err(DataLoadError::DuplicateId { .. })));
    }

    #[test]
    fn test_review_for_unknown_professional_rejected() {
        let result = DirectoryIndex::from_records(
            vec![professional("a", 100)],
            vec![review("r1", "ghost", 5)],
        );
        assert!(matches!(result, Err(DataLoadError::MissingReference { .. })));
    }

    #[test]
    fn test_invalid_review_rating_rejected() {
        let result = DirectoryIndex::from_records(
            vec![professional("a", 100)],
            vec![review("r1", "a", 6)],
        );
        assert!(matches!(result, Err(DataLoadError::InvalidValue { .. })));
    }

    #[test]
    fn test_zero_price_rejected() {
        let result = DirectoryIndex::from_records(vec![professional("a", 0)], vec![]);
        assert!(matches!(result, Err(DataLoadError::InvalidValue { .. })));
    }

    #[test]
    fn test_reviews_grouped_by_professional() {
        let index = DirectoryIndex::from_records(
            vec![professional("a", 100), professional("b", 100)],
            vec![review("r1", "a", 5), review("r2", "b", 4), review("r3", "a", 3)],
        )
        .unwrap();

        assert_eq!(index.get_reviews("a").len(), 2);
        assert_eq!(index.get_reviews("a")[1].id, "r3");
        assert_eq!(index.counts(), (2, 3));
    }

    #[test]
    fn test_load_from_missing_dir() {
        let result = DirectoryIndex::load_from_dir(Path::new("/no/such/data/dir"));
        assert!(matches!(result, Err(DataLoadError::FileNotFound { .. })));
    }
}
