// src/db/connection.rs
//
// Database connection management
//
// PRINCIPLES:
// - Explicit connection pooling
// - No hidden connection creation
// - Clear error propagation
// - Thread-safe access

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Type alias for connection pool
pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Type alias for a pooled connection
pub type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Get the database file path
///
/// Database is stored in the application data directory.
/// Path structure: {APP_DATA}/movielog/movielog.db
pub fn get_database_path() -> AppResult<PathBuf> {
    let app_data_dir = dirs::data_dir()
        .ok_or_else(|| AppError::Other("Could not determine app data directory".to_string()))?;

    let movielog_dir = app_data_dir.join("movielog");

    // Ensure directory exists
    std::fs::create_dir_all(&movielog_dir).map_err(AppError::Io)?;

    Ok(movielog_dir.join("movielog.db"))
}

/// Create a connection pool at the default data-directory location
///
/// Pool configuration:
/// - Max 15 connections (reasonable for desktop app)
/// - SQLite in WAL mode for better concurrency
/// - Foreign keys enabled
/// - Busy timeout set to avoid immediate errors
pub fn create_connection_pool() -> AppResult<ConnectionPool> {
    let db_path = get_database_path()?;
    create_pool_at(&db_path)
}

/// Create a connection pool over an explicit database file
///
/// Tests and embedders use this to point the store at a location of their
/// choosing; `create_connection_pool` is this over the default path.
pub fn create_pool_at(db_path: &Path) -> AppResult<ConnectionPool> {
    let manager = SqliteConnectionManager::file(db_path).with_init(|conn| {
        // Enable foreign key support (not default in SQLite)
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA busy_timeout = 5000;",
        )?;
        Ok(())
    });

    let pool = Pool::builder()
        .max_size(15)
        .build(manager)
        .map_err(|e| AppError::Other(format!("Failed to create connection pool: {}", e)))?;

    Ok(pool)
}

/// Get a connection from the pool
///
/// This is a convenience wrapper that provides better error messages.
pub fn get_connection(pool: &ConnectionPool) -> AppResult<PooledConn> {
    pool.get()
        .map_err(|e| AppError::Other(format!("Failed to get database connection: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_over_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_pool_at(&dir.path().join("test.db")).unwrap();
        let conn = get_connection(&pool).unwrap();

        let result: i32 = conn.query_row("SELECT 1 + 1", [], |row| row.get(0)).unwrap();
        assert_eq!(result, 2);

        // Verify foreign keys are enabled
        let fk_enabled: i32 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(fk_enabled, 1);
    }

    #[test]
    fn test_pooled_connections_share_one_database() {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_pool_at(&dir.path().join("shared.db")).unwrap();

        {
            let conn = get_connection(&pool).unwrap();
            conn.execute_batch("CREATE TABLE t (v INTEGER); INSERT INTO t VALUES (42);")
                .unwrap();
        }

        let conn = get_connection(&pool).unwrap();
        let v: i64 = conn.query_row("SELECT v FROM t", [], |row| row.get(0)).unwrap();
        assert_eq!(v, 42);
    }
}
