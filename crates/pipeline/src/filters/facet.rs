//! Tag-set facet filters (specialty, language, availability, session type).
//!
//! One struct covers all four facets: the record side is
//! `Professional::tags(facet)` and the query side is
//! `DirectoryQuery::facet_filter(facet)`.

use super::lowercase_all;
use crate::query::DirectoryQuery;
use crate::traits::Filter;
use data_loader::{Facet, Professional};

/// Keeps professionals sharing at least one tag with the selected tags.
///
/// ## Algorithm
/// 1. Skip when nothing is selected for this facet
/// 2. Lowercase the selected tags once
/// 3. Keep records with a case-insensitive intersection
///
/// Records without the tag set never match an active facet.
pub struct FacetFilter {
    facet: Facet,
    name: String,
}

impl FacetFilter {
    pub fn new(facet: Facet) -> Self {
        Self {
            facet,
            name: format!("FacetFilter({})", facet.label()),
        }
    }

    pub fn facet(&self) -> Facet {
        self.facet
    }
}

impl Filter<Professional, DirectoryQuery> for FacetFilter {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, professionals: Vec<Professional>, query: &DirectoryQuery) -> Vec<Professional> {
        let selected = query.facet_filter(self.facet);
        if selected.is_empty() {
            return professionals;
        }
        let selected = lowercase_all(selected);

        professionals
            .into_iter()
            .filter(|pro| {
                pro.tags(self.facet)
                    .iter()
                    .any(|tag| selected.contains(&tag.to_lowercase()))
            })
            .collect()
    }
}
