//! Errors raised at the session boundary.
//!
//! The engines underneath cannot fail; what can go wrong here is user input
//! that the review form should have rejected.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReviewError {
    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    #[error("Review content cannot be empty")]
    EmptyContent,
}
