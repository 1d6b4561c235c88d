// src/db/migrations.rs
//
// Database schema initialization and migrations
//
// PRINCIPLES:
// - Explicit schema versions
// - No automatic migrations
// - Clear error messages
// - Idempotent operations

use rusqlite::Connection;
use crate::error::{AppError, AppResult};

/// Current schema version
/// Increment this when adding migrations
const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Initialize the database schema
///
/// This function:
/// 1. Checks current schema version
/// 2. Applies the initial schema on a fresh database
/// 3. Rejects versions it does not know how to handle
///
/// Safe to call multiple times (idempotent).
pub fn initialize_database(conn: &Connection) -> AppResult<()> {
    let current_version = get_schema_version(conn)?;

    if current_version == 0 {
        apply_initial_schema(conn)?;
        set_schema_version(conn, CURRENT_SCHEMA_VERSION)?;
        log::info!("Initialized database schema version {}", CURRENT_SCHEMA_VERSION);
    } else if current_version < CURRENT_SCHEMA_VERSION {
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
    let table_exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
        [],
        |row| row.get(0),
    )?;

    if !table_exists {
        return Ok(0);
    }

    let version: Option<i32> =
        conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))?;

    Ok(version.unwrap_or(0))
}

fn set_schema_version(conn: &Connection, version: i32) -> AppResult<()> {
    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version, applied_at) VALUES (?1, datetime('now'))",
        [version],
    )?;

    Ok(())
}

/// Apply initial schema (version 1) from the embedded schema.sql
fn apply_initial_schema(conn: &Connection) -> AppResult<()> {
    let schema = include_str!("../../schema.sql");

    conn.execute_batch(schema)
        .map_err(|e| AppError::Other(format!("Failed to apply initial schema: {}", e)))?;

    Ok(())
}

/// Verify database integrity
///
/// Runs SQLite's integrity check.
pub fn verify_database_integrity(conn: &Connection) -> AppResult<()> {
    let result: String = conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;

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
    let page_count: i64 = conn.query_row("PRAGMA page_count", [], |row| row.get(0))?;
    let page_size: i64 = conn.query_row("PRAGMA page_size", [], |row| row.get(0))?;

    let user_count: i64 = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
    let workout_count: i64 =
        conn.query_row("SELECT COUNT(*) FROM workouts", [], |row| row.get(0))?;

    Ok(DatabaseStats {
        size_bytes: page_count * page_size,
        page_count,
        page_size,
        user_count,
        workout_count,
    })
}

/// Database statistics
#[derive(Debug)]
pub struct DatabaseStats {
    pub size_bytes: i64,
    pub page_count: i64,
    pub page_size: i64,
    pub user_count: i64,
    pub workout_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::create_test_connection;

    #[test]
    fn test_initialize_fresh_database() {
        let conn = create_test_connection().unwrap();

        assert_eq!(get_schema_version(&conn).unwrap(), 0);

        initialize_database(&conn).unwrap();

        assert_eq!(get_schema_version(&conn).unwrap(), 1);

        let table_count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name IN ('users', 'workouts')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(table_count, 2);
    }

    #[test]
    fn test_initialize_idempotent() {
        let conn = create_test_connection().unwrap();

        initialize_database(&conn).unwrap();
        initialize_database(&conn).unwrap();

        assert_eq!(get_schema_version(&conn).unwrap(), 1);
    }

    #[test]
    fn test_newer_schema_rejected() {
        let conn = create_test_connection().unwrap();
        initialize_database(&conn).unwrap();
        set_schema_version(&conn, CURRENT_SCHEMA_VERSION + 1).unwrap();

        assert!(initialize_database(&conn).is_err());
    }

    #[test]
    fn test_database_stats() {
        let conn = create_test_connection().unwrap();
        initialize_database(&conn).unwrap();

        let stats = get_database_stats(&conn).unwrap();

        assert!(stats.size_bytes > 0);
        assert_eq!(stats.user_count, 0);
        assert_eq!(stats.workout_count, 0);
    }

    #[test]
    fn test_integrity_check() {
        let conn = create_test_connection().unwrap();
        initialize_database(&conn).unwrap();

        verify_database_integrity(&conn).unwrap();
    }
}
