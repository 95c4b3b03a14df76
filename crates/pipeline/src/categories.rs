//! Homepage category sections.
//!
//! The homepage shows three short rows drawn from the directory: featured
//! professionals, relationship experts, and certified listeners. Each keeps
//! directory order and is cut to `limit` entries.

use data_loader::{Facet, Professional};

/// First `limit` professionals in directory order
pub fn featured(all: &[Professional], limit: usize) -> Vec<Professional> {
    all.iter().take(limit).cloned().collect()
}

/// Relationship specialists: title mentions "Relationship" or the
/// "Relationships" specialty tag is present
pub fn relationship(all: &[Professional], limit: usize) -> Vec<Professional> {
    section(all, limit, |pro| {
        pro.title.contains("Relationship")
            || pro.tags(Facet::Specialty).iter().any(|t| t == "Relationships")
    })
}

/// Certified listeners (peer support rather than clinical care)
pub fn listeners(all: &[Professional], limit: usize) -> Vec<Professional> {
    section(all, limit, |pro| pro.title.contains("Listener"))
}

fn section<F>(all: &[Professional], limit: usize, keep: F) -> Vec<Professional>
where
    F: Fn(&Professional) -> bool,
{
    all.iter().filter(|pro| keep(pro)).take(limit).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::fixtures::sample_professionals;

    #[test]
    fn test_featured_takes_directory_head() {
        let all = sample_professionals().unwrap();
        let ids: Vec<String> = featured(&all, 3).into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["dr-sarah-johnson", "dr-michael-chen", "dr-emily-rodriguez"]);
        assert_eq!(featured(&all, 10).len(), 5);
    }

    #[test]
    fn test_relationship_section() {
        let all = sample_professionals().unwrap();
        let section = relationship(&all, 3);
        assert_eq!(section.len(), 1);
        assert_eq!(section[0].id, "dr-jessica-williams");
    }

    #[test]
    fn test_listeners_section() {
        let all = sample_professionals().unwrap();
        let section = listeners(&all, 3);
        assert_eq!(section.len(), 1);
        assert_eq!(section[0].id, "emma-thompson");
        assert!(listeners(&all, 0).is_empty());
    }
}
