//! Changes to a review collection.
//!
//! Both operations return a new Vec and leave their input untouched, so the
//! caller decides when the new collection replaces the old one.

use data_loader::Review;

/// Add one helpful vote to the review with `review_id`.
///
/// An unknown id returns an element-wise copy of the input.
pub fn mark_helpful(reviews: &[Review], review_id: &str) -> Vec<Review> {
    reviews
        .iter()
        .map(|review| {
            let mut review = review.clone();
            if review.id == review_id {
                review.helpful_count += 1;
            }
            review
        })
        .collect()
}

/// Put a new review at the front of the collection.
///
/// The caller assigns the id and timestamp and has already checked the
/// rating range and content.
pub fn submit_review(reviews: &[Review], new_review: Review) -> Vec<Review> {
    let mut updated = Vec::with_capacity(reviews.len() + 1);
    updated.push(new_review);
    updated.extend_from_slice(reviews);
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::fixtures::sample_reviews;

    #[test]
    fn test_mark_helpful_increments_once() {
        let reviews = sample_reviews().unwrap();
        let updated = mark_helpful(&reviews, "review-2");

        assert_eq!(updated[1].helpful_count, reviews[1].helpful_count + 1);
        assert_eq!(updated[0], reviews[0]);
        assert_eq!(updated.len(), reviews.len());
    }

    #[test]
    fn test_mark_helpful_unknown_id_is_noop() {
        let reviews = sample_reviews().unwrap();
        assert_eq!(mark_helpful(&reviews, "review-404"), reviews);
    }

    #[test]
    fn test_submit_prepends() {
        let reviews = sample_reviews().unwrap();
        let mut new_review = reviews[0].clone();
        new_review.id = "review-new".to_string();

        let updated = submit_review(&reviews, new_review);
        assert_eq!(updated.len(), reviews.len() + 1);
        assert_eq!(updated[0].id, "review-new");
        assert_eq!(&updated[1..], &reviews[..]);
    }
}
