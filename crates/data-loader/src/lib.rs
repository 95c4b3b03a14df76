//! # Data Loader Crate
//!
//! This crate handles loading and indexing the professional directory.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Professional, Review, Facet)
//! - **parser**: Parse JSON data files into Rust structs
//! - **fixtures**: The embedded sample directory
//! - **index**: DirectoryIndex with id lookups and per-professional reviews
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::DirectoryIndex;
//! use std::path::Path;
//!
//! // Load a data directory, or fall back to the embedded sample
//! let index = DirectoryIndex::load_from_dir(Path::new("data"))?;
//! let index = DirectoryIndex::from_fixtures()?;
//!
//! let pro = index.get_professional("dr-sarah-johnson").unwrap();
//! let reviews = index.get_reviews(&pro.id);
//! println!("{} has {} reviews", pro.name, reviews.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod fixtures;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use index::DirectoryIndex;
pub use types::{
    // Type aliases
    ProfessionalId,
    ReviewId,
    // Core types
    Professional,
    Review,
    Facet,
    // Constants
    MAX_STARS,
    MIN_STARS,
};
