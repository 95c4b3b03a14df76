//! The data-access contract consumed by the listing and profile pages.

use crate::error::Result;
use data_loader::{Professional, Review};
use pipeline::{summarize, DirectoryQuery, ReviewSummary};
use std::future::Future;

/// Everything the review widget needs for one professional.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfessionalReviews {
    /// Computed from all of `reviews`
    pub summary: ReviewSummary,
    pub reviews: Vec<Review>,
}

impl ProfessionalReviews {
    pub fn new(reviews: Vec<Review>) -> Self {
        Self {
            summary: summarize(&reviews),
            reviews,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

/// Asynchronous access to directory data.
///
/// Implementations may be slow or fail; the query engines only ever see
/// what a fetch resolved to.
pub trait ProfessionalSource: Send + Sync {
    /// Name of this source (for logging/debugging)
    fn name(&self) -> &str;

    /// All professionals, optionally narrowed and sorted by `filters`
    fn fetch_professionals(
        &self,
        filters: Option<&DirectoryQuery>,
    ) -> impl Future<Output = Result<Vec<Professional>>> + Send;

    /// One professional, or `SourceError::NotFound`
    fn fetch_professional_by_id(&self, id: &str)
    -> impl Future<Output = Result<Professional>> + Send;

    /// Reviews for one professional plus their summary
    fn fetch_reviews_for_professional(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<ProfessionalReviews>> + Send;
}
