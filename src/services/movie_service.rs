// src/services/movie_service.rs
use std::sync::Arc;

use crate::domain::movie::{Movie, MovieDraft, WatchStatus};
use crate::error::AppResult;
use crate::repositories::MovieRepository;
use crate::services::read_outcome::ReadOutcome;

/// CRUD, search and filter over the movie collection.
///
/// Domain validation (title non-empty, year range) is the producing
/// collaborator's job via `domain::movie::invariants`; this service persists
/// what it is given. Missing-id updates and deletes affect zero rows and are
/// still reported as success.
pub struct MovieService {
    movie_repo: Arc<dyn MovieRepository>,
}

impl MovieService {
    pub fn new(movie_repo: Arc<dyn MovieRepository>) -> Self {
        Self { movie_repo }
    }

    /// Insert a new record. Some(assigned id) on success, None on storage
    /// failure
    pub fn add(&self, draft: &MovieDraft) -> Option<i64> {
        match self.movie_repo.insert(draft) {
            Ok(id) => Some(id),
            Err(e) => {
                log::error!("add movie failed: {}", e);
                None
            }
        }
    }

    pub fn get_by_id(&self, id: i64) -> ReadOutcome<Option<Movie>> {
        ReadOutcome::from_result("get movie by id", self.movie_repo.get_by_id(id), None)
    }

    /// Every record, newest first
    pub fn list_all(&self) -> ReadOutcome<Vec<Movie>> {
        ReadOutcome::from_result("list movies", self.movie_repo.list_all(), Vec::new())
    }

    pub fn list_by_status(&self, status: WatchStatus) -> ReadOutcome<Vec<Movie>> {
        ReadOutcome::from_result(
            "list movies by status",
            self.movie_repo.list_by_status(status),
            Vec::new(),
        )
    }

    /// Case-insensitive substring match on title or category.
    ///
    /// Combining search with year/status filtering stays the caller's job:
    /// run `search` first, then narrow the returned sequence in memory.
    pub fn search(&self, query: &str) -> ReadOutcome<Vec<Movie>> {
        ReadOutcome::from_result("search movies", self.movie_repo.search(query), Vec::new())
    }

    pub fn filter(&self, year: Option<i32>, status: Option<WatchStatus>) -> ReadOutcome<Vec<Movie>> {
        ReadOutcome::from_result(
            "filter movies",
            self.movie_repo.filter(year, status),
            Vec::new(),
        )
    }

    /// Replace all mutable fields of the record identified by `movie.id`
    pub fn update(&self, movie: &Movie) -> bool {
        report_mutation("update movie", self.movie_repo.update(movie))
    }

    pub fn update_status(&self, id: i64, status: WatchStatus) -> bool {
        report_mutation("update movie status", self.movie_repo.update_status(id, status))
    }

    pub fn delete(&self, id: i64) -> bool {
        report_mutation("delete movie", self.movie_repo.delete(id))
    }

    /// Clears the whole collection; irreversible
    pub fn delete_all(&self) -> bool {
        match self.movie_repo.delete_all() {
            Ok(()) => true,
            Err(e) => {
                log::error!("delete all movies failed: {}", e);
                false
            }
        }
    }
}

/// Convert a mutation result into the success/failure signal callers get.
/// Zero rows affected (missing id) still counts as success
fn report_mutation(operation: &str, result: AppResult<usize>) -> bool {
    match result {
        Ok(_) => true,
        Err(e) => {
            log::error!("{} failed: {}", operation, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::repositories::MockMovieRepository;

    fn storage_failure() -> AppError {
        AppError::Other("storage offline".to_string())
    }

    #[test]
    fn test_add_returns_assigned_id() {
        let mut repo = MockMovieRepository::new();
        repo.expect_insert().returning(|_| Ok(7));

        let service = MovieService::new(Arc::new(repo));
        assert_eq!(service.add(&MovieDraft::new("Rush", "Action", 2013)), Some(7));
    }

    #[test]
    fn test_add_signals_failure_as_none() {
        let mut repo = MockMovieRepository::new();
        repo.expect_insert().returning(|_| Err(storage_failure()));

        let service = MovieService::new(Arc::new(repo));
        assert_eq!(service.add(&MovieDraft::new("Rush", "Action", 2013)), None);
    }

    #[test]
    fn test_reads_degrade_to_empty_with_diagnostic() {
        let mut repo = MockMovieRepository::new();
        repo.expect_list_all().returning(|| Err(storage_failure()));
        repo.expect_search().returning(|_| Err(storage_failure()));

        let service = MovieService::new(Arc::new(repo));

        let all = service.list_all();
        assert!(all.value().is_empty());
        assert!(all.is_degraded());

        let found = service.search("us");
        assert!(found.value().is_empty());
        assert!(found.diagnostic().unwrap().contains("storage offline"));
    }

    #[test]
    fn test_missing_id_read_is_clean_none() {
        let mut repo = MockMovieRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let service = MovieService::new(Arc::new(repo));
        let outcome = service.get_by_id(404);
        assert!(!outcome.is_degraded());
        assert!(outcome.value().is_none());
    }

    #[test]
    fn test_mutations_on_missing_id_still_report_success() {
        let mut repo = MockMovieRepository::new();
        repo.expect_update_status().returning(|_, _| Ok(0));
        repo.expect_delete().returning(|_| Ok(0));

        let service = MovieService::new(Arc::new(repo));
        assert!(service.update_status(404, WatchStatus::Watched));
        assert!(service.delete(404));
    }

    #[test]
    fn test_mutation_failure_reports_false() {
        let mut repo = MockMovieRepository::new();
        repo.expect_update_status().returning(|_, _| Err(storage_failure()));
        repo.expect_delete_all().returning(|| Err(storage_failure()));

        let service = MovieService::new(Arc::new(repo));
        assert!(!service.update_status(1, WatchStatus::Watched));
        assert!(!service.delete_all());
    }
}
