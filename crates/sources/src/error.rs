//! Errors a data source can report.
//!
//! Callers are expected to degrade rather than propagate: a failed list
//! fetch becomes an empty listing, a missing professional becomes a
//! "not found" page.

use data_loader::DataLoadError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    /// The requested record does not exist
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// The backing service could not answer
    #[error("Data source unavailable: {0}")]
    Unavailable(String),

    /// The backing data could not be loaded
    #[error("Failed to load directory data: {0}")]
    Load(#[from] DataLoadError),
}

pub type Result<T> = std::result::Result<T, SourceError>;
