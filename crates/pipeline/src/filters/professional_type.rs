//! Filter on professional type.
//!
//! Types are not an enum: a selected type tag matches any title that
//! contains it. "therapist" therefore also matches "Relationship Therapist".

use super::{contains_lowercase, lowercase_all};
use crate::query::DirectoryQuery;
use crate::traits::Filter;
use data_loader::Professional;

/// Keeps professionals whose title contains any selected type tag.
pub struct ProfessionalTypeFilter;

impl Filter<Professional, DirectoryQuery> for ProfessionalTypeFilter {
    fn name(&self) -> &str {
        "ProfessionalTypeFilter"
    }

    fn apply(&self, professionals: Vec<Professional>, query: &DirectoryQuery) -> Vec<Professional> {
        if query.type_filter.is_empty() {
            return professionals;
        }
        let types = lowercase_all(&query.type_filter);

        professionals
            .into_iter()
            .filter(|pro| types.iter().any(|t| contains_lowercase(&pro.title, t)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::fixtures::sample_professionals;

    #[test]
    fn test_type_filter_substring_match() {
        let query = DirectoryQuery::new().with_types(["psychologist", "Listener"]);
        let result = ProfessionalTypeFilter.apply(sample_professionals().unwrap(), &query);

        let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["dr-emily-rodriguez", "emma-thompson"]);
    }

    #[test]
    fn test_therapist_matches_relationship_therapist() {
        let query = DirectoryQuery::new().with_types(["therapist"]);
        let result = ProfessionalTypeFilter.apply(sample_professionals().unwrap(), &query);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Relationship Therapist");
    }

    #[test]
    fn test_no_types_keeps_everything() {
        let result =
            ProfessionalTypeFilter.apply(sample_professionals().unwrap(), &DirectoryQuery::new());
        assert_eq!(result.len(), 5);
    }
}
