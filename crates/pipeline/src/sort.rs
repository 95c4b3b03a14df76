//! Ordering for the directory listing.
//!
//! Every sort here is stable: records that compare equal keep their
//! relative input order, and `Recommended` leaves the input untouched.

use crate::query::SortKey;
use data_loader::Professional;

/// Sort professionals in place by `key`.
pub fn sort_professionals(professionals: &mut [Professional], key: SortKey) {
    match key {
        SortKey::Recommended => {}
        SortKey::PriceAsc => professionals.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => professionals.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::RatingDesc => professionals.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::ReviewsDesc => {
            professionals.sort_by(|a, b| b.review_count.cmp(&a.review_count))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::fixtures::sample_professionals;

    fn sorted_ids(key: SortKey) -> Vec<String> {
        let mut pros = sample_professionals().unwrap();
        sort_professionals(&mut pros, key);
        pros.into_iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_price_orders() {
        let mut pros = sample_professionals().unwrap();
        sort_professionals(&mut pros, SortKey::PriceAsc);
        let prices: Vec<u32> = pros.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![450, 1100, 1200, 1300, 1350]);

        sort_professionals(&mut pros, SortKey::PriceDesc);
        let prices: Vec<u32> = pros.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![1350, 1300, 1200, 1100, 450]);
    }

    #[test]
    fn test_rating_ties_keep_input_order() {
        // Four records share 4.9; Michael (4.8) goes last
        assert_eq!(
            sorted_ids(SortKey::RatingDesc),
            vec![
                "dr-sarah-johnson",
                "dr-emily-rodriguez",
                "dr-jessica-williams",
                "emma-thompson",
                "dr-michael-chen",
            ]
        );
    }

    #[test]
    fn test_reviews_desc() {
        assert_eq!(
            sorted_ids(SortKey::ReviewsDesc),
            vec![
                "dr-emily-rodriguez",
                "dr-jessica-williams",
                "dr-sarah-johnson",
                "dr-michael-chen",
                "emma-thompson",
            ]
        );
    }

    #[test]
    fn test_recommended_is_identity() {
        let original: Vec<String> = sample_professionals().unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(sorted_ids(SortKey::Recommended), original);
    }
}
