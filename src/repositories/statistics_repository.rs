// src/repositories/statistics_repository.rs
//
// Aggregate reporting queries. Every call recomputes from the current
// snapshot; nothing here is maintained incrementally.

use std::sync::Arc;

use rusqlite::{params, Row};

use crate::db::ConnectionPool;
use crate::domain::movie::WatchStatus;
use crate::domain::statistics::{CategoryCount, FavoriteYearOutlier, LibraryStats};
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
pub trait StatisticsRepository: Send + Sync {
    /// Records per category, count descending; empty categories absent
    fn count_by_category(&self) -> AppResult<Vec<CategoryCount>>;
    /// Total record count plus one count per watch status
    fn library_stats(&self) -> AppResult<LibraryStats>;
    /// Release years whose favorite count exceeds 130% of the mean
    /// count-per-year among years with at least one favorite
    fn abnormally_high_favorite_years(&self) -> AppResult<Vec<FavoriteYearOutlier>>;
}

pub struct SqliteStatisticsRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteStatisticsRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_category_count(row: &Row) -> Result<CategoryCount, rusqlite::Error> {
        Ok(CategoryCount {
            category: row.get(0)?,
            count: row.get(1)?,
        })
    }

    fn row_to_outlier(row: &Row) -> Result<FavoriteYearOutlier, rusqlite::Error> {
        Ok(FavoriteYearOutlier {
            release_year: row.get(0)?,
            favorite_count: row.get(1)?,
        })
    }

    fn count_with_status(conn: &rusqlite::Connection, status: WatchStatus) -> AppResult<i64> {
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM movies WHERE status = ?1",
            params![status.as_str()],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}

impl StatisticsRepository for SqliteStatisticsRepository {
    fn count_by_category(&self) -> AppResult<Vec<CategoryCount>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT category, COUNT(*) AS total_movies
             FROM movies
             GROUP BY category
             ORDER BY total_movies DESC",
        )?;
        let rows = stmt.query_map([], Self::row_to_category_count)?;

        let mut counts = Vec::new();
        for count in rows {
            counts.push(count?);
        }
        Ok(counts)
    }

    fn library_stats(&self) -> AppResult<LibraryStats> {
        let conn = self.pool.get()?;

        let total: i64 = conn.query_row("SELECT COUNT(*) FROM movies", [], |row| row.get(0))?;
        let watched = Self::count_with_status(&conn, WatchStatus::Watched)?;
        let to_watch = Self::count_with_status(&conn, WatchStatus::ToWatch)?;
        let favorite = Self::count_with_status(&conn, WatchStatus::Favorite)?;

        Ok(LibraryStats {
            total,
            watched,
            to_watch,
            favorite,
        })
    }

    fn abnormally_high_favorite_years(&self) -> AppResult<Vec<FavoriteYearOutlier>> {
        let conn = self.pool.get()?;

        // Threshold is mean count-per-year (over years with >= 1 favorite)
        // times 1.3; a single year group can never exceed it
        let mut stmt = conn.prepare(
            "SELECT release_year, COUNT(*) AS favorite_count
             FROM movies
             WHERE status = ?1
             GROUP BY release_year
             HAVING favorite_count > (
                 SELECT AVG(count_per_year) * 1.3
                 FROM (
                     SELECT COUNT(*) AS count_per_year
                     FROM movies
                     WHERE status = ?1
                     GROUP BY release_year
                 )
             )
             ORDER BY favorite_count DESC",
        )?;
        let rows = stmt.query_map(params![WatchStatus::Favorite.as_str()], Self::row_to_outlier)?;

        let mut outliers = Vec::new();
        for outlier in rows {
            outliers.push(outlier?);
        }
        Ok(outliers)
    }
}
