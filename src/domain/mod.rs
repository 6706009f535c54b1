// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod movie;
pub mod statistics;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Movie Domain
pub use movie::{
    validate_draft, validate_release_year, validate_title, Genre, Movie, MovieCandidate,
    MovieDraft, WatchStatus,
};

// Statistics Domain (Derived Data)
pub use statistics::{CategoryCount, FavoriteYearOutlier, LibraryStats};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Unknown watch status: {0}")]
    UnknownStatus(String),

    #[error("Unknown genre: {0}")]
    UnknownGenre(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
