// src/repositories/movie_repository.rs
//
// Movie persistence
//
// All statements are parameterized; the filter query is assembled with a
// clause/parameter accumulator so user-controlled values never reach the
// statement text.

use std::str::FromStr;
use std::sync::Arc;

use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Row};

use crate::db::ConnectionPool;
use crate::domain::movie::{Movie, MovieDraft, WatchStatus};
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait MovieRepository: Send + Sync {
    /// Insert a new record and return the store-assigned id
    fn insert(&self, draft: &MovieDraft) -> AppResult<i64>;
    fn get_by_id(&self, id: i64) -> AppResult<Option<Movie>>;
    /// Every record, newest first (id descending)
    fn list_all(&self) -> AppResult<Vec<Movie>>;
    fn list_by_status(&self, status: WatchStatus) -> AppResult<Vec<Movie>>;
    /// Full-row update of all mutable fields; returns rows affected
    fn update(&self, movie: &Movie) -> AppResult<usize>;
    fn update_status(&self, id: i64, status: WatchStatus) -> AppResult<usize>;
    fn delete(&self, id: i64) -> AppResult<usize>;
    fn delete_all(&self) -> AppResult<()>;
    fn exists(&self, id: i64) -> AppResult<bool>;
    /// Case-insensitive substring match on title or category,
    /// release year descending; the empty query matches everything
    fn search(&self, query: &str) -> AppResult<Vec<Movie>>;
    /// Exact-equality criteria, ANDed when supplied; none supplied
    /// returns everything, release year descending
    fn filter(&self, year: Option<i32>, status: Option<WatchStatus>) -> AppResult<Vec<Movie>>;
}

const MOVIE_COLUMNS: &str = "id, title, category, release_year, status, poster_uri";

pub struct SqliteMovieRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteMovieRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Map database row to Movie - returns rusqlite::Error for query_map compatibility
    fn row_to_movie(row: &Row) -> Result<Movie, rusqlite::Error> {
        let status_str: String = row.get("status")?;
        let status = WatchStatus::from_str(&status_str)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        Ok(Movie {
            id: row.get("id")?,
            title: row.get("title")?,
            category: row.get("category")?,
            release_year: row.get("release_year")?,
            status,
            poster_uri: row.get("poster_uri")?,
        })
    }

    fn collect_movies(
        rows: impl Iterator<Item = Result<Movie, rusqlite::Error>>,
    ) -> AppResult<Vec<Movie>> {
        let mut movies = Vec::new();
        for movie in rows {
            movies.push(movie?);
        }
        Ok(movies)
    }
}

impl MovieRepository for SqliteMovieRepository {
    fn insert(&self, draft: &MovieDraft) -> AppResult<i64> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT INTO movies (title, category, release_year, status, poster_uri)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                draft.title,
                draft.category,
                draft.release_year,
                draft.status.as_str(),
                draft.poster_uri,
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn get_by_id(&self, id: i64) -> AppResult<Option<Movie>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM movies WHERE id = ?1",
            MOVIE_COLUMNS
        ))?;

        match stmt.query_row(params![id], Self::row_to_movie) {
            Ok(movie) => Ok(Some(movie)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn list_all(&self) -> AppResult<Vec<Movie>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM movies ORDER BY id DESC",
            MOVIE_COLUMNS
        ))?;
        let rows = stmt.query_map([], Self::row_to_movie)?;

        Self::collect_movies(rows)
    }

    fn list_by_status(&self, status: WatchStatus) -> AppResult<Vec<Movie>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM movies WHERE status = ?1 ORDER BY release_year DESC",
            MOVIE_COLUMNS
        ))?;
        let rows = stmt.query_map(params![status.as_str()], Self::row_to_movie)?;

        Self::collect_movies(rows)
    }

    fn update(&self, movie: &Movie) -> AppResult<usize> {
        let conn = self.pool.get()?;

        let affected = conn.execute(
            "UPDATE movies
             SET title = ?1, category = ?2, release_year = ?3, status = ?4, poster_uri = ?5
             WHERE id = ?6",
            params![
                movie.title,
                movie.category,
                movie.release_year,
                movie.status.as_str(),
                movie.poster_uri,
                movie.id,
            ],
        )?;

        Ok(affected)
    }

    fn update_status(&self, id: i64, status: WatchStatus) -> AppResult<usize> {
        let conn = self.pool.get()?;

        let affected = conn.execute(
            "UPDATE movies SET status = ?1 WHERE id = ?2",
            params![status.as_str(), id],
        )?;

        Ok(affected)
    }

    fn delete(&self, id: i64) -> AppResult<usize> {
        let conn = self.pool.get()?;

        let affected = conn.execute("DELETE FROM movies WHERE id = ?1", params![id])?;

        Ok(affected)
    }

    fn delete_all(&self) -> AppResult<()> {
        let conn = self.pool.get()?;

        conn.execute("DELETE FROM movies", [])?;

        Ok(())
    }

    fn exists(&self, id: i64) -> AppResult<bool> {
        let conn = self.pool.get()?;

        let exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM movies WHERE id = ?1)",
            params![id],
            |row| row.get(0),
        )?;

        Ok(exists)
    }

    fn search(&self, query: &str) -> AppResult<Vec<Movie>> {
        let conn = self.pool.get()?;

        let pattern = format!("%{}%", query);
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM movies
             WHERE title LIKE ?1 OR category LIKE ?1
             ORDER BY release_year DESC",
            MOVIE_COLUMNS
        ))?;
        let rows = stmt.query_map(params![pattern], Self::row_to_movie)?;

        Self::collect_movies(rows)
    }

    fn filter(&self, year: Option<i32>, status: Option<WatchStatus>) -> AppResult<Vec<Movie>> {
        let conn = self.pool.get()?;

        // Clause/parameter accumulator: placeholders only, values stay bound
        let mut clauses: Vec<&str> = Vec::new();
        let mut bindings: Vec<Value> = Vec::new();

        if let Some(year) = year {
            clauses.push("release_year = ?");
            bindings.push(Value::from(i64::from(year)));
        }
        if let Some(status) = status {
            clauses.push("status = ?");
            bindings.push(Value::from(status.as_str().to_string()));
        }

        let mut sql = format!("SELECT {} FROM movies", MOVIE_COLUMNS);
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY release_year DESC");

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(bindings), Self::row_to_movie)?;

        Self::collect_movies(rows)
    }
}
