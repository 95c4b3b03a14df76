//! # Review Board
//!
//! State behind the review widget on a professional's page:
//! - the full review collection (source of the summary)
//! - the search box, star filter and sort dropdown
//! - the derived list currently shown
//!
//! Every change rebuilds the shown list from the full collection through the
//! Review Aggregation Engine. The summary is recomputed only when the
//! collection itself changes (a new review, a helpful vote).

use chrono::{DateTime, Utc};
use data_loader::{ProfessionalId, Review, MAX_STARS, MIN_STARS};
use pipeline::{mark_helpful, submit_review, summarize, ReviewEngine, ReviewQuery, ReviewSortKey, ReviewSummary};
use sources::ProfessionalReviews;
use tracing::{debug, info};

use crate::error::ReviewError;

/// Author name used for reviews written in this session
pub const DEFAULT_AUTHOR: &str = "You";

/// What the review form collects.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub rating: u8,
    pub content: String,
    pub author_name: Option<String>,
}

impl NewReview {
    pub fn new(rating: u8, content: impl Into<String>) -> Self {
        Self {
            rating,
            content: content.into(),
            author_name: None,
        }
    }

    /// Check what the form would check before enabling "Submit"
    pub fn validate(&self) -> Result<(), ReviewError> {
        if !(MIN_STARS..=MAX_STARS).contains(&self.rating) {
            return Err(ReviewError::InvalidRating(self.rating));
        }
        if self.content.trim().is_empty() {
            return Err(ReviewError::EmptyContent);
        }
        Ok(())
    }
}

/// Review widget state for one professional.
pub struct ReviewBoard {
    professional_id: ProfessionalId,
    reviews: Vec<Review>,
    summary: ReviewSummary,
    query: ReviewQuery,
    view: Vec<Review>,
    engine: ReviewEngine,
}

impl ReviewBoard {
    pub fn new(professional_id: impl Into<ProfessionalId>, reviews: Vec<Review>) -> Self {
        let mut board = Self {
            professional_id: professional_id.into(),
            summary: summarize(&reviews),
            reviews,
            query: ReviewQuery::default(),
            view: Vec::new(),
            engine: ReviewEngine::new(),
        };
        board.refresh();
        board
    }

    /// Build from a fetch result, keeping the summary the source computed
    pub fn from_fetched(professional_id: impl Into<ProfessionalId>, fetched: ProfessionalReviews) -> Self {
        let mut board = Self::new(professional_id, fetched.reviews);
        board.summary = fetched.summary;
        board
    }

    pub fn professional_id(&self) -> &str {
        &self.professional_id
    }

    /// Summary of every review, regardless of what is shown
    pub fn summary(&self) -> &ReviewSummary {
        &self.summary
    }

    /// Full collection, newest submission first
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Reviews currently shown
    pub fn view(&self) -> &[Review] {
        &self.view
    }

    pub fn query(&self) -> &ReviewQuery {
        &self.query
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.query.search_term = term.into();
        self.refresh();
    }

    pub fn set_rating_filter(&mut self, rating: Option<u8>) {
        if self.query.rating_filter == rating {
            return;
        }
        self.query.rating_filter = rating;
        self.refresh();
    }

    pub fn set_sort(&mut self, sort_key: ReviewSortKey) {
        if self.query.sort_key == sort_key {
            return;
        }
        self.query.sort_key = sort_key;
        self.refresh();
    }

    /// Add a helpful vote; unknown ids change nothing
    pub fn mark_helpful(&mut self, review_id: &str) {
        self.replace_reviews(mark_helpful(&self.reviews, review_id));
    }

    /// Validate, stamp and prepend a new review. Returns the stored review.
    pub fn submit(&mut self, new_review: NewReview) -> Result<&Review, ReviewError> {
        self.submit_at(new_review, Utc::now())
    }

    /// `submit` with an explicit timestamp
    pub fn submit_at(&mut self, new_review: NewReview, now: DateTime<Utc>) -> Result<&Review, ReviewError> {
        new_review.validate()?;

        let review = Review {
            id: self.next_review_id(now),
            professional_id: self.professional_id.clone(),
            author_name: new_review
                .author_name
                .unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            author_avatar: None,
            rating: new_review.rating,
            date: now,
            content: new_review.content.trim().to_string(),
            helpful_count: 0,
            verified: true,
        };
        info!("Submitting review {} for {}", review.id, self.professional_id);

        self.replace_reviews(submit_review(&self.reviews, review));
        Ok(&self.reviews[0])
    }

    /// `review-<millis>`, suffixed if that id is already taken
    fn next_review_id(&self, now: DateTime<Utc>) -> String {
        let base = format!("review-{}", now.timestamp_millis());
        let taken = |id: &str| self.reviews.iter().any(|r| r.id == id);

        if !taken(&base) {
            return base;
        }
        let mut n = 2;
        loop {
            let id = format!("{}-{}", base, n);
            if !taken(&id) {
                return id;
            }
            n += 1;
        }
    }

    fn replace_reviews(&mut self, reviews: Vec<Review>) {
        self.reviews = reviews;
        self.summary = summarize(&self.reviews);
        self.refresh();
    }

    fn refresh(&mut self) {
        self.view = self.engine.query(&self.reviews, &self.query);
        debug!(
            "Review board for {} shows {} of {}",
            self.professional_id,
            self.view.len(),
            self.reviews.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use data_loader::fixtures::sample_reviews;

    fn sarah_board() -> ReviewBoard {
        let reviews = sample_reviews()
            .unwrap()
            .into_iter()
            .filter(|r| r.professional_id == "dr-sarah-johnson")
            .collect();
        ReviewBoard::new("dr-sarah-johnson", reviews)
    }

    fn view_ids(board: &ReviewBoard) -> Vec<&str> {
        board.view().iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_default_view_is_recent_first() {
        let board = sarah_board();
        assert_eq!(view_ids(&board), vec!["review-1", "review-2", "review-3"]);
        assert_eq!(board.summary().total_reviews, 3);
    }

    #[test]
    fn test_search_and_rating_combine() {
        let mut board = sarah_board();
        board.set_rating_filter(Some(5));
        assert_eq!(view_ids(&board), vec!["review-1", "review-2"]);

        board.set_search("mood");
        assert_eq!(view_ids(&board), vec!["review-2"]);

        board.set_rating_filter(None);
        board.set_search("");
        assert_eq!(board.view().len(), 3);
    }

    #[test]
    fn test_filtering_leaves_summary_alone() {
        let mut board = sarah_board();
        let before = *board.summary();

        board.set_rating_filter(Some(4));
        board.set_search("rushed");
        board.set_sort(ReviewSortKey::Lowest);

        assert_eq!(*board.summary(), before);
    }

    #[test]
    fn test_mark_helpful_updates_view() {
        let mut board = sarah_board();
        board.set_sort(ReviewSortKey::Helpful);

        for _ in 0..8 {
            board.mark_helpful("review-3");
        }
        assert_eq!(view_ids(&board)[0], "review-3");
        assert_eq!(board.view()[0].helpful_count, 13);

        board.mark_helpful("review-missing");
        assert_eq!(board.reviews().len(), 3);
    }

    #[test]
    fn test_submit_review() {
        let mut board = sarah_board();
        let now = Utc.with_ymd_and_hms(2025, 4, 1, 9, 0, 0).unwrap();

        let stored = board
            .submit_at(NewReview::new(3, "  Good listener.  "), now)
            .unwrap()
            .clone();

        assert_eq!(stored.id, format!("review-{}", now.timestamp_millis()));
        assert_eq!(stored.author_name, DEFAULT_AUTHOR);
        assert_eq!(stored.content, "Good listener.");
        assert_eq!(board.reviews()[0].id, stored.id);
        assert_eq!(board.summary().total_reviews, 4);
        assert_eq!(board.summary().rating_breakdown.count(3), 1);
        assert_eq!(view_ids(&board)[0], stored.id);

        let again = board.submit_at(NewReview::new(5, "Second"), now).unwrap();
        assert_eq!(again.id, format!("review-{}-2", now.timestamp_millis()));
    }

    #[test]
    fn test_submit_rejects_bad_input() {
        let mut board = sarah_board();

        assert_eq!(
            board.submit(NewReview::new(0, "Fine")).unwrap_err(),
            ReviewError::InvalidRating(0)
        );
        assert_eq!(
            board.submit(NewReview::new(4, "   ")).unwrap_err(),
            ReviewError::EmptyContent
        );
        assert_eq!(board.reviews().len(), 3);
    }
}
