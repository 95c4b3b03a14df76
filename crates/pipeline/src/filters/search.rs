//! Free-text search over the listing.
//!
//! Matches the trimmed, lowercased term as a substring of the name, the
//! title, the headline specialty, or any specialty tag.

use super::contains_lowercase;
use crate::query::DirectoryQuery;
use crate::traits::Filter;
use data_loader::{Facet, Professional};

/// Keeps professionals whose text fields mention the search term.
///
/// ## Algorithm
/// 1. Skip entirely when the trimmed term is empty
/// 2. Lowercase the term once
/// 3. Keep records where name, title, specialty or a specialty tag contains it
pub struct SearchFilter;

impl SearchFilter {
    pub fn matches(professional: &Professional, term: &str) -> bool {
        contains_lowercase(&professional.name, term)
            || contains_lowercase(&professional.title, term)
            || contains_lowercase(&professional.specialty, term)
            || professional
                .tags(Facet::Specialty)
                .iter()
                .any(|tag| contains_lowercase(tag, term))
    }
}

impl Filter<Professional, DirectoryQuery> for SearchFilter {
    fn name(&self) -> &str {
        "SearchFilter"
    }

    fn apply(&self, professionals: Vec<Professional>, query: &DirectoryQuery) -> Vec<Professional> {
        let Some(term) = query.active_search() else {
            return professionals;
        };
        let term = term.to_lowercase();

        professionals
            .into_iter()
            .filter(|pro| Self::matches(pro, &term))
            .collect()
    }
}
