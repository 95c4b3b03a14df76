//! # Profile Page
//!
//! Loads what a professional's page shows: the record itself and the review
//! board. Both fetches run concurrently. A missing professional is a "not
//! found" page (`None`); a failed review fetch shows an empty board.

use std::time::Instant;

use data_loader::Professional;
use sources::{ProfessionalReviews, ProfessionalSource, SourceError};
use tracing::{info, warn};

use crate::review_board::ReviewBoard;

/// Everything a professional's page renders.
pub struct ProfilePage {
    pub professional: Professional,
    pub reviews: ReviewBoard,
}

/// Load one professional's page, or `None` when there is nothing to show.
pub async fn load_profile<S: ProfessionalSource>(source: &S, id: &str) -> Option<ProfilePage> {
    let start = Instant::now();

    let (professional, reviews) = tokio::join!(
        source.fetch_professional_by_id(id),
        source.fetch_reviews_for_professional(id)
    );

    let professional = match professional {
        Ok(professional) => professional,
        Err(SourceError::NotFound { .. }) => {
            info!("Professional {} not found", id);
            return None;
        }
        Err(e) => {
            warn!("Error fetching professional {}: {}", id, e);
            return None;
        }
    };

    let reviews = reviews.unwrap_or_else(|e| {
        warn!("Error fetching reviews for {}: {}", id, e);
        ProfessionalReviews::empty()
    });

    info!(
        "Loaded profile {} with {} reviews in {:.2?}",
        id,
        reviews.reviews.len(),
        start.elapsed()
    );

    Some(ProfilePage {
        reviews: ReviewBoard::from_fetched(professional.id.clone(), reviews),
        professional,
    })
}
