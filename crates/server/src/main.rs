//! Simple test harness for the directory sessions.
//!
//! This binary walks through what the listing and profile pages do: load the
//! directory through the mock source, apply a few control changes, then open
//! a profile and interact with its reviews.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use data_loader::Facet;
use pipeline::{ReviewSortKey, SortKey};
use server::{load_profile, DirectorySession, NewReview};
use sources::MockProfessionalSource;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,server=debug,sources=debug,pipeline=debug")),
        )
        .init();

    info!("Starting Savayas session harness");

    let source = MockProfessionalSource::from_fixtures()
        .context("Failed to load sample directory")?
        .with_latency(Duration::from_millis(200));

    let mut listing = DirectorySession::new(source.clone());
    info!("Listing status before load: {:?}", listing.status());
    listing.load().await;
    info!("Listing status after load: {:?}", listing.status());

    listing.set_search("anxiety");
    listing.toggle_facet(Facet::SessionType, "Phone Call");
    listing.set_sort(SortKey::PriceAsc);
    for (i, pro) in listing.view().iter().enumerate() {
        info!("{}. {} ({}) - {} - {:.1}", i + 1, pro.name, pro.title, pro.price, pro.rating);
    }

    listing.set_price_range(5000, 500);
    info!("Reversed price range gives: {:?}", listing.status());
    listing.clear_filters();

    let sections = listing.sections(3);
    info!(
        "Homepage: {} featured, {} relationship, {} listeners",
        sections.featured.len(),
        sections.relationship.len(),
        sections.listeners.len()
    );

    let id = "dr-sarah-johnson";
    let Some(mut page) = load_profile(&source, id).await else {
        info!("Profile {} not found", id);
        return Ok(());
    };

    let summary = page.reviews.summary();
    info!(
        "{}: {} from {} reviews",
        page.professional.name,
        summary.display_rating(),
        summary.total_reviews
    );
    for (star, pct) in summary.percentages() {
        info!("   {} stars: {}%", star, pct);
    }

    page.reviews.mark_helpful("review-3");
    page.reviews
        .submit(NewReview::new(4, "Thoughtful and well prepared."))
        .context("Failed to submit review")?;
    page.reviews.set_sort(ReviewSortKey::Helpful);
    for review in page.reviews.view() {
        info!("[{}] {} ({} helpful): {}", review.rating, review.author_name, review.helpful_count, review.content);
    }

    Ok(())
}
