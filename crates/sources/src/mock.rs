//! Mock data source with simulated network latency.
//!
//! Answers from an in-memory `DirectoryIndex` after sleeping for a
//! configurable delay. A configured failure makes every fetch return
//! `SourceError::Unavailable`, which is how callers' degradation paths are
//! exercised without a network.

use crate::error::{Result, SourceError};
use crate::types::{ProfessionalReviews, ProfessionalSource};
use data_loader::{DirectoryIndex, Professional};
use pipeline::{DirectoryEngine, DirectoryQuery};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

/// Latency of the mock API the pages were built against
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

/// In-memory stand-in for the directory API.
#[derive(Clone)]
pub struct MockProfessionalSource {
    /// Shared reference to the directory (read-only, so no Mutex needed)
    data_index: Arc<DirectoryIndex>,

    /// Delay before every answer
    latency: Duration,

    /// When set, every fetch fails with this message
    failure: Option<String>,

    /// Used when the caller passes filters, like a server-side query
    engine: Arc<DirectoryEngine>,
}

impl MockProfessionalSource {
    /// Create a mock source over a loaded directory
    pub fn new(data_index: Arc<DirectoryIndex>) -> Self {
        Self {
            data_index,
            latency: DEFAULT_LATENCY,
            failure: None,
            engine: Arc::new(DirectoryEngine::new()),
        }
    }

    /// Mock source over the embedded sample directory
    pub fn from_fixtures() -> Result<Self> {
        let index = DirectoryIndex::from_fixtures()?;
        Ok(Self::new(Arc::new(index)))
    }

    /// Configure the simulated latency (default: 500ms)
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Make every fetch fail as if the service were down
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn data_index(&self) -> &Arc<DirectoryIndex> {
        &self.data_index
    }

    /// Sleep for the configured latency, then report the configured failure
    async fn respond(&self) -> Result<()> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        match &self.failure {
            Some(message) => Err(SourceError::Unavailable(message.clone())),
            None => Ok(()),
        }
    }
}

impl ProfessionalSource for MockProfessionalSource {
    fn name(&self) -> &str {
        "MockProfessionalSource"
    }

    #[instrument(skip(self, filters), fields(filtered = filters.is_some()))]
    async fn fetch_professionals(
        &self,
        filters: Option<&DirectoryQuery>,
    ) -> Result<Vec<Professional>> {
        self.respond().await?;

        let all = self.data_index.professionals();
        let professionals = match filters {
            Some(query) => self.engine.query(all, query),
            None => all.to_vec(),
        };
        debug!("Fetched {} professionals", professionals.len());
        Ok(professionals)
    }

    #[instrument(skip(self))]
    async fn fetch_professional_by_id(&self, id: &str) -> Result<Professional> {
        self.respond().await?;

        self.data_index
            .get_professional(id)
            .cloned()
            .ok_or_else(|| SourceError::NotFound {
                entity: "Professional".to_string(),
                id: id.to_string(),
            })
    }

    #[instrument(skip(self))]
    async fn fetch_reviews_for_professional(&self, id: &str) -> Result<ProfessionalReviews> {
        self.respond().await?;

        if self.data_index.get_professional(id).is_none() {
            return Err(SourceError::NotFound {
                entity: "Professional".to_string(),
                id: id.to_string(),
            });
        }
        let reviews = self.data_index.get_reviews(id).to_vec();
        debug!("Fetched {} reviews for {}", reviews.len(), id);
        Ok(ProfessionalReviews::new(reviews))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipeline::SortKey;
    use std::time::Instant;

    fn instant_source() -> MockProfessionalSource {
        MockProfessionalSource::from_fixtures()
            .unwrap()
            .with_latency(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_fetch_all_professionals() {
        let source = instant_source();
        let pros = source.fetch_professionals(None).await.unwrap();
        assert_eq!(pros.len(), 5);
        assert_eq!(pros[0].id, "dr-sarah-johnson");
    }

    #[tokio::test]
    async fn test_fetch_with_filters() {
        let source = instant_source();
        let query = DirectoryQuery::new()
            .with_types(["psychiatrist"])
            .with_sort(SortKey::PriceDesc);

        let pros = source.fetch_professionals(Some(&query)).await.unwrap();
        let ids: Vec<&str> = pros.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["dr-michael-chen", "dr-sarah-johnson"]);
    }

    #[tokio::test]
    async fn test_fetch_by_id() {
        let source = instant_source();

        let pro = source.fetch_professional_by_id("dr-emily-rodriguez").await.unwrap();
        assert_eq!(pro.title, "Clinical Psychologist");

        let missing = source.fetch_professional_by_id("dr-nobody").await;
        assert!(matches!(missing, Err(SourceError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_fetch_reviews_with_summary() {
        let source = instant_source();
        let result = source
            .fetch_reviews_for_professional("dr-sarah-johnson")
            .await
            .unwrap();

        assert_eq!(result.reviews.len(), 3);
        assert_eq!(result.summary.total_reviews, 3);
        assert_eq!(result.summary.rating_breakdown.count(5), 2);
    }

    #[tokio::test]
    async fn test_failure_mode() {
        let source = instant_source().with_failure("connection refused");

        assert!(matches!(
            source.fetch_professionals(None).await,
            Err(SourceError::Unavailable(_))
        ));
        assert!(source.fetch_professional_by_id("dr-sarah-johnson").await.is_err());
    }

    #[tokio::test]
    async fn test_latency_is_applied() {
        let source = instant_source().with_latency(Duration::from_millis(20));

        let start = Instant::now();
        source.fetch_professionals(None).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
