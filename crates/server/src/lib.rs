//! Server crate for the Savayas directory.
//!
//! The engines in `pipeline` are pure; this crate is the thin stateful shell
//! around them. It holds what the pages' controls hold, fetches data through
//! a `ProfessionalSource`, and re-runs the engines on every change.

pub mod error;
pub mod directory_session;
pub mod review_board;
pub mod profile;

pub use directory_session::{DirectorySession, HomepageSections, ListingStatus};
pub use error::ReviewError;
pub use profile::{load_profile, ProfilePage};
pub use review_board::{NewReview, ReviewBoard};
