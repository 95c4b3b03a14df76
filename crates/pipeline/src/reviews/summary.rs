//! Summary statistics over a review collection.

use data_loader::{Review, MAX_STARS, MIN_STARS};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Review count per star value, 1 through 5.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingBreakdown {
    /// `counts[star - 1]`
    counts: [u32; 5],
}

impl RatingBreakdown {
    /// Build from (star, count) pairs; stars outside 1-5 are ignored
    pub fn from_counts<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (u8, u32)>,
    {
        let mut breakdown = Self::default();
        for (star, count) in pairs {
            if let Some(slot) = Self::slot(star) {
                breakdown.counts[slot] += count;
            }
        }
        breakdown
    }

    fn slot(star: u8) -> Option<usize> {
        (MIN_STARS..=MAX_STARS)
            .contains(&star)
            .then(|| usize::from(star - MIN_STARS))
    }

    pub fn count(&self, star: u8) -> u32 {
        Self::slot(star).map(|s| self.counts[s]).unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    fn merge(mut self, other: Self) -> Self {
        for (a, b) in self.counts.iter_mut().zip(other.counts) {
            *a += b;
        }
        self
    }
}

/// Rounded share of `count` in `total`, 0 when there is nothing to share
pub fn percentage(count: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(count) / f64::from(total) * 100.0).round() as u32
}

/// Aggregate view of every review a professional has received.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    /// Arithmetic mean of all ratings, 0.0 when there are none
    pub overall_rating: f32,
    pub total_reviews: u32,
    pub rating_breakdown: RatingBreakdown,
}

impl ReviewSummary {
    /// Summary of an empty collection
    pub fn empty() -> Self {
        Self {
            overall_rating: 0.0,
            total_reviews: 0,
            rating_breakdown: RatingBreakdown::default(),
        }
    }

    /// Summary supplied as bare counts by a data source
    pub fn from_breakdown(overall_rating: f32, breakdown: RatingBreakdown) -> Self {
        Self {
            overall_rating,
            total_reviews: breakdown.total(),
            rating_breakdown: breakdown,
        }
    }

    /// Percentage of reviews with exactly `star` stars
    pub fn percentage(&self, star: u8) -> u32 {
        percentage(self.rating_breakdown.count(star), self.total_reviews)
    }

    /// (star, percentage) from 5 stars down to 1, as the widget lists them
    pub fn percentages(&self) -> Vec<(u8, u32)> {
        (MIN_STARS..=MAX_STARS)
            .rev()
            .map(|star| (star, self.percentage(star)))
            .collect()
    }

    /// Overall rating with one decimal, e.g. "4.7"
    pub fn display_rating(&self) -> String {
        format!("{:.1}", self.overall_rating)
    }

    /// Number of stars to light up
    pub fn rounded_stars(&self) -> u8 {
        self.overall_rating.round().clamp(0.0, f32::from(MAX_STARS)) as u8
    }
}

impl Default for ReviewSummary {
    fn default() -> Self {
        Self::empty()
    }
}

/// Compute the summary of the full review collection.
///
/// ## Algorithm
/// 1. Count reviews per star value and sum ratings in parallel
/// 2. Mean = sum / count, or 0.0 for an empty collection
pub fn summarize(all: &[Review]) -> ReviewSummary {
    if all.is_empty() {
        return ReviewSummary::empty();
    }

    let (breakdown, rating_sum) = all
        .par_iter()
        .fold(
            || (RatingBreakdown::default(), 0u64),
            |(breakdown, sum), review| {
                let one = RatingBreakdown::from_counts([(review.rating, 1)]);
                (breakdown.merge(one), sum + u64::from(review.rating))
            },
        )
        .reduce(
            || (RatingBreakdown::default(), 0u64),
            |(a, sum_a), (b, sum_b)| (a.merge(b), sum_a + sum_b),
        );

    let total_reviews = all.len() as u32;
    ReviewSummary {
        overall_rating: (rating_sum as f64 / f64::from(total_reviews)) as f32,
        total_reviews,
        rating_breakdown: breakdown,
    }
}
