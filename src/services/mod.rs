// src/services/mod.rs
//
// Services Module - Orchestration Layer
//
// Services own the caller-facing contract: storage failures are logged and
// converted here (reads degrade to a fallback value, mutations become
// success/failure signals). Nothing below this layer swallows errors.

pub mod movie_service;
pub mod read_outcome;
pub mod statistics_service;
pub mod transfer_service;


// Re-export all services and their types
pub use movie_service::MovieService;

pub use read_outcome::ReadOutcome;

pub use statistics_service::StatisticsService;

pub use transfer_service::{ImportReport, TransferService};
