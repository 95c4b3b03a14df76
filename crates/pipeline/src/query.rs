//! Query state for the directory listing.
//!
//! A `DirectoryQuery` is rebuilt on every interaction (keystroke, checkbox,
//! slider, sort dropdown) and handed to the engine together with the full
//! directory. It carries no data of its own and is never persisted.

use anyhow::{anyhow, Error};
use data_loader::Facet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Inclusive price bounds.
///
/// `min > max` is allowed and simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

impl PriceRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// No bound on either side
    pub fn unbounded() -> Self {
        Self {
            min: 0,
            max: u32::MAX,
        }
    }

    pub fn contains(&self, price: u32) -> bool {
        self.min <= price && price <= self.max
    }

    pub fn is_unbounded(&self) -> bool {
        *self == Self::unbounded()
    }
}

/// The filter panel's slider starts at [500, 5000]
impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 500,
            max: 5000,
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unbounded() {
            write!(f, "any price")
        } else {
            write!(f, "{} - {}", self.min, self.max)
        }
    }
}

/// Sort orders offered by the listing page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Source order, no comparator
    #[default]
    Recommended,
    PriceAsc,
    PriceDesc,
    RatingDesc,
    ReviewsDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Recommended,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::RatingDesc,
        SortKey::ReviewsDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Recommended => "recommended",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::RatingDesc => "rating-desc",
            SortKey::ReviewsDesc => "reviews-desc",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the canonical names and the dropdown values used by the web UI
impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "recommended" => Ok(SortKey::Recommended),
            "price-asc" | "price-low" => Ok(SortKey::PriceAsc),
            "price-desc" | "price-high" => Ok(SortKey::PriceDesc),
            "rating-desc" | "rating" => Ok(SortKey::RatingDesc),
            "reviews-desc" | "reviews" => Ok(SortKey::ReviewsDesc),
            other => Err(anyhow!(
                "unknown sort key '{}' (expected one of: recommended, price-asc, price-desc, rating-desc, reviews-desc)",
                other
            )),
        }
    }
}

/// Everything the listing page knows about what the user asked for.
///
/// `DirectoryQuery::default()` is "no query applied": empty search, no
/// facets, no price bound, recommended order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DirectoryQuery {
    pub search_term: String,
    /// Matched as substrings of `title`
    pub type_filter: Vec<String>,
    pub specialty_filter: Vec<String>,
    pub language_filter: Vec<String>,
    pub availability_filter: Vec<String>,
    pub session_type_filter: Vec<String>,
    pub price_range: PriceRange,
    pub sort_key: SortKey,
}

impl Default for DirectoryQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            type_filter: Vec::new(),
            specialty_filter: Vec::new(),
            language_filter: Vec::new(),
            availability_filter: Vec::new(),
            session_type_filter: Vec::new(),
            price_range: PriceRange::unbounded(),
            sort_key: SortKey::Recommended,
        }
    }
}

impl DirectoryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.type_filter = types.into_iter().map(Into::into).collect();
        self
    }

    /// Set the tags for one facet (specialty, language, availability, session type)
    pub fn with_facet<I, S>(mut self, facet: Facet, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        *self.facet_filter_mut(facet) = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_price_range(mut self, min: u32, max: u32) -> Self {
        self.price_range = PriceRange::new(min, max);
        self
    }

    pub fn with_sort(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    /// Selected tags for a facet
    pub fn facet_filter(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Specialty => &self.specialty_filter,
            Facet::Language => &self.language_filter,
            Facet::Availability => &self.availability_filter,
            Facet::SessionType => &self.session_type_filter,
        }
    }

    pub fn facet_filter_mut(&mut self, facet: Facet) -> &mut Vec<String> {
        match facet {
            Facet::Specialty => &mut self.specialty_filter,
            Facet::Language => &mut self.language_filter,
            Facet::Availability => &mut self.availability_filter,
            Facet::SessionType => &mut self.session_type_filter,
        }
    }

    /// Trimmed search term, or None when search is inactive
    pub fn active_search(&self) -> Option<&str> {
        let term = self.search_term.trim();
        (!term.is_empty()).then_some(term)
    }

    /// True when no predicate narrows the directory (sort may still apply)
    pub fn is_unfiltered(&self) -> bool {
        self.active_search().is_none()
            && self.type_filter.is_empty()
            && Facet::ALL.iter().all(|&f| self.facet_filter(f).is_empty())
            && self.price_range.is_unbounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_aliases() {
        assert_eq!("price-low".parse::<SortKey>().unwrap(), SortKey::PriceAsc);
        assert_eq!("price-high".parse::<SortKey>().unwrap(), SortKey::PriceDesc);
        assert_eq!("rating".parse::<SortKey>().unwrap(), SortKey::RatingDesc);
        assert_eq!("reviews".parse::<SortKey>().unwrap(), SortKey::ReviewsDesc);
        assert!("cheapest".parse::<SortKey>().is_err());

        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_default_query_is_unfiltered() {
        let query = DirectoryQuery::default();
        assert!(query.is_unfiltered());
        assert_eq!(query.sort_key, SortKey::Recommended);

        assert!(DirectoryQuery::new().with_search("   ").is_unfiltered());
        assert!(!DirectoryQuery::new().with_search("grief").is_unfiltered());
        assert!(!DirectoryQuery::new()
            .with_facet(Facet::Language, ["hindi"])
            .is_unfiltered());
    }

    #[test]
    fn test_price_range() {
        assert_eq!(PriceRange::default(), PriceRange::new(500, 5000));
        assert!(PriceRange::new(500, 500).contains(500));
        assert!(!PriceRange::new(5000, 500).contains(1000));
        assert!(PriceRange::unbounded().contains(0));
    }
}
