// src/services/statistics_service.rs
use std::sync::Arc;

use crate::domain::statistics::{CategoryCount, FavoriteYearOutlier, LibraryStats};
use crate::repositories::StatisticsRepository;
use crate::services::read_outcome::ReadOutcome;

/// Reporting over the current collection snapshot. Aggregates never fail to
/// the caller; a storage error degrades to empty/zeroed values.
pub struct StatisticsService {
    statistics_repo: Arc<dyn StatisticsRepository>,
}

impl StatisticsService {
    pub fn new(statistics_repo: Arc<dyn StatisticsRepository>) -> Self {
        Self { statistics_repo }
    }

    /// Records per category, count descending
    pub fn count_by_category(&self) -> ReadOutcome<Vec<CategoryCount>> {
        ReadOutcome::from_result(
            "count movies by category",
            self.statistics_repo.count_by_category(),
            Vec::new(),
        )
    }

    /// Dashboard totals; degrades to all zeroes
    pub fn library_stats(&self) -> ReadOutcome<LibraryStats> {
        ReadOutcome::from_result(
            "compute library stats",
            self.statistics_repo.library_stats(),
            LibraryStats::default(),
        )
    }

    /// Release years whose favorite count exceeds 130% of the per-year mean
    pub fn abnormally_high_favorite_years(&self) -> ReadOutcome<Vec<FavoriteYearOutlier>> {
        ReadOutcome::from_result(
            "find abnormal favorite years",
            self.statistics_repo.abnormally_high_favorite_years(),
            Vec::new(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::repositories::MockStatisticsRepository;

    #[test]
    fn test_stats_pass_through_when_storage_is_healthy() {
        let mut repo = MockStatisticsRepository::new();
        repo.expect_library_stats().returning(|| {
            Ok(LibraryStats { total: 4, watched: 1, to_watch: 1, favorite: 2 })
        });

        let service = StatisticsService::new(Arc::new(repo));
        let outcome = service.library_stats();
        assert!(!outcome.is_degraded());
        assert_eq!(outcome.value().total, 4);
    }

    #[test]
    fn test_stats_degrade_to_zeroes() {
        let mut repo = MockStatisticsRepository::new();
        repo.expect_library_stats()
            .returning(|| Err(AppError::Other("storage offline".to_string())));
        repo.expect_count_by_category()
            .returning(|| Err(AppError::Other("storage offline".to_string())));
        repo.expect_abnormally_high_favorite_years()
            .returning(|| Err(AppError::Other("storage offline".to_string())));

        let service = StatisticsService::new(Arc::new(repo));

        let totals = service.library_stats();
        assert!(totals.is_degraded());
        assert_eq!(*totals.value(), LibraryStats::default());

        assert!(service.count_by_category().value().is_empty());
        assert!(service.abnormally_high_favorite_years().value().is_empty());
    }
}
