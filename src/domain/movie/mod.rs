pub mod entity;
pub mod invariants;

pub use entity::{Genre, Movie, MovieCandidate, MovieDraft, WatchStatus};
pub use invariants::{validate_draft, validate_release_year, validate_title};
