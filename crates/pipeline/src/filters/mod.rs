//! Filter implementations for the directory listing.
//!
//! Each filter reads one part of the `DirectoryQuery` and passes everything
//! through when that part is unset. `FilterPipeline::directory()` chains them
//! in the listing page's fixed order: search, type, facets, price.

pub mod search;
pub mod professional_type;
pub mod facet;
pub mod price_range;

// Re-export for convenience
pub use search::SearchFilter;
pub use professional_type::ProfessionalTypeFilter;
pub use facet::FacetFilter;
pub use price_range::PriceRangeFilter;

/// Case-insensitive substring test; `needle` must already be lowercase
pub(crate) fn contains_lowercase(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Lowercase every tag once per query instead of once per record
pub(crate) fn lowercase_all(tags: &[String]) -> Vec<String> {
    tags.iter().map(|t| t.to_lowercase()).collect()
}
