// src/lib.rs
// MovieLog - Local-first personal movie tracker
//
// Architecture:
// - Domain-centric: entities, value enums and invariant validators in domain/
// - Layered: dumb SQL repositories below, policy-owning services above
// - Explicit: No implicit behavior, no magic
// - Local-first: one SQLite file under the user's data directory
//
// UI collaborators call the services and render what comes back; reads never
// fail to them (they degrade to empty values with a diagnostic) and mutations
// report a single success/failure signal.

pub mod db;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_draft,
    validate_release_year,
    validate_title,
    // Statistics (derived data)
    CategoryCount,
    FavoriteYearOutlier,
    // Movie
    Genre,
    LibraryStats,
    Movie,
    MovieCandidate,
    MovieDraft,
    WatchStatus,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use domain::{DomainError, DomainResult};
pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{
    create_connection_pool, create_pool_at, get_database_path, initialize_database,
    ConnectionPool,
};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    MovieRepository, SqliteMovieRepository, SqliteStatisticsRepository, StatisticsRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{ImportReport, MovieService, ReadOutcome, StatisticsService, TransferService};
