//! # Directory Session
//!
//! State behind the listing page. The session owns what the page's controls
//! hold (search box, type and facet checkboxes, price slider, sort
//! dropdown) and the directory fetched once from a `ProfessionalSource`.
//! Every control change rebuilds the visible listing by running the
//! Directory Query Engine over the full directory.
//!
//! ## Lifecycle
//! 1. `new` starts in `ListingStatus::Loading`
//! 2. `load` fetches the directory; a failed fetch is logged and treated as
//!    an empty directory
//! 3. Control changes call `refresh`, which never touches the directory

use std::sync::Arc;
use std::time::Instant;

use data_loader::{Facet, Professional};
use pipeline::{categories, DirectoryEngine, DirectoryQuery, SortKey};
use sources::ProfessionalSource;
use tracing::{debug, info, warn};

/// What the listing area should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingStatus {
    /// Directory not fetched yet
    Loading,
    /// Fetched, but nothing matches the current query
    Empty,
    /// This many professionals match
    Results(usize),
}

/// The three homepage rows.
#[derive(Debug, Clone, PartialEq)]
pub struct HomepageSections {
    pub featured: Vec<Professional>,
    pub relationship: Vec<Professional>,
    pub listeners: Vec<Professional>,
}

/// Listing page state over one data source.
pub struct DirectorySession<S: ProfessionalSource> {
    source: S,
    /// Full directory as fetched; shared, never mutated
    professionals: Arc<Vec<Professional>>,
    loaded: bool,
    query: DirectoryQuery,
    view: Vec<Professional>,
    engine: DirectoryEngine,
}

impl<S: ProfessionalSource> DirectorySession<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            professionals: Arc::new(Vec::new()),
            loaded: false,
            query: DirectoryQuery::default(),
            view: Vec::new(),
            engine: DirectoryEngine::new(),
        }
    }

    /// Fetch the full directory from the source.
    ///
    /// Fetch errors are logged and degrade to an empty directory.
    pub async fn load(&mut self) {
        let start = Instant::now();
        let professionals = match self.source.fetch_professionals(None).await {
            Ok(professionals) => professionals,
            Err(e) => {
                warn!("Error fetching professionals from {}: {}", self.source.name(), e);
                Vec::new()
            }
        };
        info!(
            "Loaded {} professionals from {} in {:.2?}",
            professionals.len(),
            self.source.name(),
            start.elapsed()
        );

        self.professionals = Arc::new(professionals);
        self.loaded = true;
        self.refresh();
    }

    pub fn status(&self) -> ListingStatus {
        match (self.loaded, self.view.len()) {
            (false, _) => ListingStatus::Loading,
            (true, 0) => ListingStatus::Empty,
            (true, n) => ListingStatus::Results(n),
        }
    }

    /// Professionals currently shown
    pub fn view(&self) -> &[Professional] {
        &self.view
    }

    /// Full directory, shared with anyone who wants to run their own queries
    pub fn professionals(&self) -> Arc<Vec<Professional>> {
        Arc::clone(&self.professionals)
    }

    pub fn query(&self) -> &DirectoryQuery {
        &self.query
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.query.search_term = term.into();
        self.refresh();
    }

    /// Check or uncheck a professional type
    pub fn toggle_type(&mut self, tag: &str) {
        toggle(&mut self.query.type_filter, tag);
        self.refresh();
    }

    /// Check or uncheck a tag under one facet
    pub fn toggle_facet(&mut self, facet: Facet, tag: &str) {
        toggle(self.query.facet_filter_mut(facet), tag);
        self.refresh();
    }

    pub fn set_price_range(&mut self, min: u32, max: u32) {
        self.query.price_range = pipeline::PriceRange::new(min, max);
        self.refresh();
    }

    pub fn set_sort(&mut self, sort_key: SortKey) {
        if self.query.sort_key == sort_key {
            return;
        }
        self.query.sort_key = sort_key;
        self.refresh();
    }

    /// Replace the whole query, as the filter panel's "Apply" does
    pub fn set_query(&mut self, query: DirectoryQuery) {
        if self.query == query {
            return;
        }
        self.query = query;
        self.refresh();
    }

    /// Back to "no query applied"
    pub fn clear_filters(&mut self) {
        self.set_query(DirectoryQuery::default());
    }

    /// Homepage rows drawn from the full directory
    pub fn sections(&self, limit: usize) -> HomepageSections {
        HomepageSections {
            featured: categories::featured(&self.professionals, limit),
            relationship: categories::relationship(&self.professionals, limit),
            listeners: categories::listeners(&self.professionals, limit),
        }
    }

    fn refresh(&mut self) {
        self.view = self.engine.query(&self.professionals, &self.query);
        debug!(
            "Listing shows {} of {} professionals",
            self.view.len(),
            self.professionals.len()
        );
    }
}

/// Add `tag` if absent (ignoring case), remove it otherwise
fn toggle(tags: &mut Vec<String>, tag: &str) {
    let before = tags.len();
    tags.retain(|t| !t.eq_ignore_ascii_case(tag));
    if tags.len() == before {
        tags.push(tag.to_string());
    }
}
