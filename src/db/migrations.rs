// src/db/migrations.rs
//
// Database schema initialization and migrations
//
// PRINCIPLES:
// - Explicit schema versions
// - No automatic migrations
// - Clear error messages
// - Idempotent operations

use crate::error::{AppError, AppResult};
use rusqlite::Connection;

/// Current schema version
/// Increment this when adding migrations
const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Initialize the database schema
///
/// This function:
/// 1. Checks current schema version
/// 2. Applies necessary migrations
/// 3. Updates version tracking
///
/// Safe to call multiple times (idempotent).
pub fn initialize_database(conn: &Connection) -> AppResult<()> {
    let current_version = get_schema_version(conn)?;

    if current_version == 0 {
        // Fresh database - apply initial schema
        apply_initial_schema(conn)?;
        set_schema_version(conn, 1)?;
    } else if current_version < CURRENT_SCHEMA_VERSION {
        // Future: apply incremental migrations here
        // For now, we only have version 1
        return Err(AppError::Other(format!(
            "Schema version {} is outdated. Expected {}. Manual migration required.",
            current_version, CURRENT_SCHEMA_VERSION
        )));
    } else if current_version > CURRENT_SCHEMA_VERSION {
        return Err(AppError::Other(format!(
            "Schema version {} is newer than supported {}. Update the application.",
            current_version, CURRENT_SCHEMA_VERSION
        )));
    }

    Ok(())
}

/// Get current schema version
/// Returns 0 if schema_version table doesn't exist (fresh database)
fn get_schema_version(conn: &Connection) -> AppResult<i32> {
    // Check if schema_version table exists
    let table_exists: bool = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
            [],
            |row| row.get(0),
        )
        .map_err(AppError::Database)?;

    if !table_exists {
        return Ok(0);
    }

    // Get the highest version number
    let version: Option<i32> = conn
        .query_row("SELECT MAX(version) FROM schema_version", [], |row| {
            row.get(0)
        })
        .map_err(AppError::Database)?;

    Ok(version.unwrap_or(0))
}

/// Set schema version
fn set_schema_version(conn: &Connection, version: i32) -> AppResult<()> {
    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version, applied_at) VALUES (?1, datetime('now'))",
        [version],
    )
    .map_err(AppError::Database)?;

    Ok(())
}

/// Apply initial schema (version 1)
///
/// This includes all tables defined in schema.sql
fn apply_initial_schema(conn: &Connection) -> AppResult<()> {
    // Read schema from embedded file
    let schema = include_str!("../../schema.sql");

    // Execute as batch
    conn.execute_batch(schema)
        .map_err(|e| AppError::Other(format!("Failed to apply initial schema: {}", e)))?;

    Ok(())
}

/// Verify database integrity
///
/// Runs SQLite's integrity check. Should be called periodically.
pub fn verify_database_integrity(conn: &Connection) -> AppResult<()> {
    let result: String = conn
        .query_row("PRAGMA integrity_check", [], |row| row.get(0))
        .map_err(AppError::Database)?;

    if result != "ok" {
        return Err(AppError::Other(format!(
            "Database integrity check failed: {}",
            result
        )));
    }

    Ok(())
}

/// Get database statistics
///
/// Returns useful info for debugging and monitoring
pub fn get_database_stats(conn: &Connection) -> AppResult<DatabaseStats> {
    let page_count: i64 = conn
        .query_row("PRAGMA page_count", [], |row| row.get(0))
        .map_err(AppError::Database)?;

    let page_size: i64 = conn
        .query_row("PRAGMA page_size", [], |row| row.get(0))
        .map_err(AppError::Database)?;

    let size_bytes = page_count * page_size;

    let movie_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM movies", [], |row| row.get(0))
        .unwrap_or(0);

    Ok(DatabaseStats {
        size_bytes,
        page_count,
        page_size,
        movie_count,
    })
}

/// Database statistics for monitoring
#[derive(Debug, Clone)]
pub struct DatabaseStats {
    pub size_bytes: i64,
    pub page_count: i64,
    pub page_size: i64,
    pub movie_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool_at, get_connection};

    #[test]
    fn test_initialize_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_pool_at(&dir.path().join("init.db")).unwrap();
        let conn = get_connection(&pool).unwrap();

        initialize_database(&conn).unwrap();

        conn.execute(
            "INSERT INTO movies (title, category, release_year) VALUES ('Rush', 'Action', 2013)",
            [],
        )
        .unwrap();

        // Second initialization must not lose data
        initialize_database(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM movies", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_SCHEMA_VERSION);
    }

    #[test]
    fn test_newer_schema_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_pool_at(&dir.path().join("newer.db")).unwrap();
        let conn = get_connection(&pool).unwrap();

        initialize_database(&conn).unwrap();
        conn.execute(
            "INSERT INTO schema_version (version, applied_at) VALUES (99, datetime('now'))",
            [],
        )
        .unwrap();

        assert!(initialize_database(&conn).is_err());
    }

    #[test]
    fn test_database_stats_after_init() {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_pool_at(&dir.path().join("stats.db")).unwrap();
        let conn = get_connection(&pool).unwrap();

        initialize_database(&conn).unwrap();
        verify_database_integrity(&conn).unwrap();

        let stats = get_database_stats(&conn).unwrap();
        assert_eq!(stats.movie_count, 0);
        assert!(stats.page_size > 0);
    }
}
