//! # Sources Crate
//!
//! This crate implements the data-access side of the directory: the
//! asynchronous fetches the listing and profile pages depend on.
//!
//! ## Components
//!
//! ### ProfessionalSource
//! The contract: fetch the directory (optionally filtered), fetch one
//! professional by id, fetch a professional's reviews with their summary.
//! Every fetch may be delayed or fail.
//!
//! ### MockProfessionalSource
//! Answers from an in-memory `DirectoryIndex` after a configurable delay,
//! and can be told to fail so callers' fallback paths can be tested.
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{MockProfessionalSource, ProfessionalSource};
//! use std::time::Duration;
//!
//! let source = MockProfessionalSource::from_fixtures()?
//!     .with_latency(Duration::from_millis(200));
//!
//! let professionals = source.fetch_professionals(None).await?;
//! let reviews = source.fetch_reviews_for_professional("dr-sarah-johnson").await?;
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod mock;

// Re-export commonly used types
pub use error::{Result, SourceError};
pub use mock::{MockProfessionalSource, DEFAULT_LATENCY};
pub use types::{ProfessionalReviews, ProfessionalSource};

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::DirectoryIndex;
    use std::sync::Arc;

    #[test]
    fn test_mock_source_creation() {
        let source = MockProfessionalSource::new(Arc::new(DirectoryIndex::new()));
        assert_eq!(source.name(), "MockProfessionalSource");
        assert_eq!(source.latency(), DEFAULT_LATENCY);
    }

    #[test]
    fn test_empty_reviews() {
        let empty = ProfessionalReviews::empty();
        assert!(empty.reviews.is_empty());
        assert_eq!(empty.summary.total_reviews, 0);
        assert_eq!(empty.summary.overall_rating, 0.0);
    }
}
