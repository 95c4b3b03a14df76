//! Core domain types for the professional directory.
//!
//! This module defines the records every other crate works with:
//! - `Professional`: one listing in the directory
//! - `Review`: one client review of a professional
//! - `Facet`: the tag sets a listing can be filtered on
//!
//! Records are immutable once produced by a data source. Query engines take
//! them by reference and hand back new collections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================
// Ids are opaque strings such as "dr-sarah-johnson" or "review-1"

/// Unique identifier for a professional (a URL slug in the fixtures)
pub type ProfessionalId = String;

/// Unique identifier for a review
pub type ReviewId = String;

/// Lowest and highest star value a review can carry
pub const MIN_STARS: u8 = 1;
pub const MAX_STARS: u8 = 5;

// =============================================================================
// Professional
// =============================================================================

/// A mental-health professional listed in the directory.
///
/// Field names follow the camelCase JSON produced by the data source.
/// `reviews` is accepted as an alias of `reviewCount` because the listing
/// API uses the shorter name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Professional {
    pub id: ProfessionalId,
    pub name: String,
    /// Professional type, e.g. "Psychiatrist" or "Certified Listener"
    pub title: String,
    /// Free-text headline specialty, e.g. "Anxiety & Depression"
    pub specialty: String,
    /// Average rating from 0.0 to 5.0
    pub rating: f32,
    #[serde(alias = "reviews")]
    pub review_count: u32,
    /// Session price as a plain number
    pub price: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialties: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_types: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<Vec<String>>,
}

/// Tag sets on a `Professional` that the filter panel exposes as checkboxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Facet {
    Specialty,
    Language,
    Availability,
    SessionType,
}

impl Facet {
    pub const ALL: [Facet; 4] = [
        Facet::Specialty,
        Facet::Language,
        Facet::Availability,
        Facet::SessionType,
    ];

    /// Name used in logs and CLI output
    pub fn label(self) -> &'static str {
        match self {
            Facet::Specialty => "specialty",
            Facet::Language => "language",
            Facet::Availability => "availability",
            Facet::SessionType => "session type",
        }
    }
}

impl Professional {
    /// Tags for one facet.
    ///
    /// An absent set reads as empty, so a record without languages never
    /// matches a language filter.
    pub fn tags(&self, facet: Facet) -> &[String] {
        let tags = match facet {
            Facet::Specialty => &self.specialties,
            Facet::Language => &self.languages,
            Facet::Availability => &self.availability,
            Facet::SessionType => &self.session_types,
        };
        tags.as_deref().unwrap_or(&[])
    }
}

// =============================================================================
// Review
// =============================================================================

/// A client review of one professional.
///
/// `helpfulCount` is the only field that changes after creation, and it
/// only changes by producing a new record (see `pipeline::reviews`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub professional_id: ProfessionalId,
    pub author_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_avatar: Option<String>,
    /// Star rating from 1 to 5
    pub rating: u8,
    pub date: DateTime<Utc>,
    pub content: String,
    #[serde(alias = "helpful")]
    pub helpful_count: u32,
    pub verified: bool,
}

impl Review {
    /// Whether the star value is in the 1-5 range
    pub fn has_valid_rating(&self) -> bool {
        (MIN_STARS..=MAX_STARS).contains(&self.rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_professional_accepts_listing_field_names() {
        let json = r#"{
            "id": "p-1",
            "name": "Asha Rao",
            "title": "Counsellor",
            "specialty": "Stress",
            "rating": 4.5,
            "reviews": 10,
            "price": 800,
            "languages": ["English", "Tamil"]
        }"#;

        let pro: Professional = serde_json::from_str(json).unwrap();
        assert_eq!(pro.review_count, 10);
        assert_eq!(pro.tags(Facet::Language).len(), 2);
        assert!(pro.tags(Facet::Specialty).is_empty());
        assert!(pro.location.is_none());
    }

    #[test]
    fn test_review_accepts_helpful_alias() {
        let json = r#"{
            "id": "review-9",
            "professionalId": "p-1",
            "authorName": "Dev",
            "rating": 4,
            "date": "2025-03-15T10:30:00Z",
            "content": "Kind and clear.",
            "helpful": 3,
            "verified": false
        }"#;

        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.helpful_count, 3);
        assert!(review.author_avatar.is_none());
        assert!(review.has_valid_rating());
    }

    #[test]
    fn test_rating_range() {
        let json = r#"{
            "id": "r", "professionalId": "p", "authorName": "a", "rating": 0,
            "date": "2025-01-01T00:00:00Z", "content": "x", "helpfulCount": 0, "verified": true
        }"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert!(!review.has_valid_rating());
    }
}
