//! Search, rating filter and sort for the displayed review list.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::contains_lowercase;
use crate::traits::Filter;
use anyhow::{anyhow, Error};
use data_loader::Review;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Sort orders offered by the review widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReviewSortKey {
    /// Newest first
    #[default]
    Recent,
    Oldest,
    Highest,
    Lowest,
    /// Most helpful votes first
    Helpful,
}

impl ReviewSortKey {
    pub const ALL: [ReviewSortKey; 5] = [
        ReviewSortKey::Recent,
        ReviewSortKey::Oldest,
        ReviewSortKey::Highest,
        ReviewSortKey::Lowest,
        ReviewSortKey::Helpful,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReviewSortKey::Recent => "recent",
            ReviewSortKey::Oldest => "oldest",
            ReviewSortKey::Highest => "highest",
            ReviewSortKey::Lowest => "lowest",
            ReviewSortKey::Helpful => "helpful",
        }
    }

    /// Stable in-place sort
    pub fn sort(self, reviews: &mut [Review]) {
        match self {
            ReviewSortKey::Recent => reviews.sort_by(|a, b| b.date.cmp(&a.date)),
            ReviewSortKey::Oldest => reviews.sort_by(|a, b| a.date.cmp(&b.date)),
            ReviewSortKey::Highest => reviews.sort_by(|a, b| b.rating.cmp(&a.rating)),
            ReviewSortKey::Lowest => reviews.sort_by(|a, b| a.rating.cmp(&b.rating)),
            ReviewSortKey::Helpful => {
                reviews.sort_by(|a, b| b.helpful_count.cmp(&a.helpful_count))
            }
        }
    }
}

impl fmt::Display for ReviewSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReviewSortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ReviewSortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == wanted)
            .ok_or_else(|| {
                anyhow!(
                    "unknown review sort '{}' (expected one of: recent, oldest, highest, lowest, helpful)",
                    s
                )
            })
    }
}

/// What the review widget's search box, star filter and dropdown hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReviewQuery {
    pub search_term: String,
    /// Exact star value to show, or every rating when None
    pub rating_filter: Option<u8>,
    pub sort_key: ReviewSortKey,
}

impl ReviewQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_rating(mut self, rating: Option<u8>) -> Self {
        self.rating_filter = rating;
        self
    }

    pub fn with_sort(mut self, sort_key: ReviewSortKey) -> Self {
        self.sort_key = sort_key;
        self
    }
}

/// Keeps reviews whose content or author name contains the search term.
pub struct ReviewSearchFilter;

impl Filter<Review, ReviewQuery> for ReviewSearchFilter {
    fn name(&self) -> &str {
        "ReviewSearchFilter"
    }

    fn apply(&self, reviews: Vec<Review>, query: &ReviewQuery) -> Vec<Review> {
        let term = query.search_term.trim();
        if term.is_empty() {
            return reviews;
        }
        let term = term.to_lowercase();

        reviews
            .into_iter()
            .filter(|r| contains_lowercase(&r.content, &term) || contains_lowercase(&r.author_name, &term))
            .collect()
    }
}

/// Keeps reviews with exactly the selected star value.
pub struct RatingFilter;

impl Filter<Review, ReviewQuery> for RatingFilter {
    fn name(&self) -> &str {
        "RatingFilter"
    }

    fn apply(&self, reviews: Vec<Review>, query: &ReviewQuery) -> Vec<Review> {
        match query.rating_filter {
            Some(stars) => reviews.into_iter().filter(|r| r.rating == stars).collect(),
            None => reviews,
        }
    }
}

impl FilterPipeline<Review, ReviewQuery> {
    /// Search then rating filter
    pub fn reviews() -> Self {
        FilterPipeline::new()
            .add_filter(ReviewSearchFilter)
            .add_filter(RatingFilter)
    }
}

/// Reusable engine holding the review filter pipeline.
pub struct ReviewEngine {
    pipeline: FilterPipeline<Review, ReviewQuery>,
}

impl ReviewEngine {
    pub fn new() -> Self {
        Self {
            pipeline: FilterPipeline::reviews(),
        }
    }

    /// Filter then sort a copy of `all`
    pub fn query(&self, all: &[Review], query: &ReviewQuery) -> Vec<Review> {
        let mut result = self.pipeline.apply(all.to_vec(), query);
        query.sort_key.sort(&mut result);
        debug!(
            "Review query kept {} of {} (sort: {})",
            result.len(),
            all.len(),
            query.sort_key
        );
        result
    }
}

impl Default for ReviewEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot review query
pub fn query(
    all: &[Review],
    search_term: &str,
    rating_filter: Option<u8>,
    sort_key: ReviewSortKey,
) -> Vec<Review> {
    let state = ReviewQuery {
        search_term: search_term.to_string(),
        rating_filter,
        sort_key,
    };
    ReviewEngine::new().query(all, &state)
}
