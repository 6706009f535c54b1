// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO cross-repository calls
// - Explicit SQL only, always parameterized

pub mod movie_repository;
pub mod statistics_repository;

pub use movie_repository::{MovieRepository, SqliteMovieRepository};
pub use statistics_repository::{SqliteStatisticsRepository, StatisticsRepository};

#[cfg(test)]
pub use movie_repository::MockMovieRepository;
#[cfg(test)]
pub use statistics_repository::MockStatisticsRepository;
