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
use rusqlite::Connection;
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};

/// Type alias for connection pool
pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Type alias for a pooled connection
pub type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Resolve the database file path
///
/// An explicit path from the config wins. Otherwise the database lives in
/// the application data directory: {APP_DATA}/workoutlog/workoutlog.db
pub fn get_database_path(config: &AppConfig) -> AppResult<PathBuf> {
    let path = match &config.database_path {
        Some(path) => path.clone(),
        None => {
            let app_data_dir = dirs::data_dir().ok_or_else(|| {
                AppError::Other("Could not determine app data directory".to_string())
            })?;
            app_data_dir.join("workoutlog").join("workoutlog.db")
        }
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    Ok(path)
}

/// Create a connection pool
///
/// Pool configuration:
/// - Max size from config
/// - SQLite in WAL mode for better concurrency
/// - Foreign keys enabled
/// - Busy timeout from config, so concurrent writers wait instead of failing
pub fn create_connection_pool(config: &AppConfig) -> AppResult<ConnectionPool> {
    let db_path = get_database_path(config)?;
    let busy_timeout_ms = config.busy_timeout_ms;

    log::debug!("Opening database at {}", db_path.display());

    let manager = SqliteConnectionManager::file(&db_path).with_init(move |conn| {
        conn.execute_batch(&format!(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA busy_timeout = {};",
            busy_timeout_ms
        ))?;
        Ok(())
    });

    let pool = Pool::builder()
        .max_size(config.pool_max_size)
        .build(manager)
        .map_err(|e| AppError::Pool(format!("Failed to create connection pool: {}", e)))?;

    Ok(pool)
}

/// Get a connection from the pool
///
/// This is a convenience wrapper that provides better error messages.
pub fn get_connection(pool: &ConnectionPool) -> AppResult<PooledConn> {
    pool.get()
        .map_err(|e| AppError::Pool(format!("Failed to get database connection: {}", e)))
}

/// Create a standalone in-memory connection (for testing)
pub fn create_test_connection() -> AppResult<Connection> {
    let conn = Connection::open_in_memory().map_err(AppError::Database)?;

    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(AppError::Database)?;

    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &tempfile::TempDir) -> AppConfig {
        AppConfig {
            database_path: Some(dir.path().join("nested").join("test.db")),
            pool_max_size: 2,
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_database_path_creation() {
        let dir = tempfile::tempdir().unwrap();
        let path = get_database_path(&config_in(&dir)).unwrap();
        assert!(path.ends_with("nested/test.db"));
        assert!(path.parent().unwrap().exists());
    }

    #[test]
    fn test_connection_pool_creation() {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_connection_pool(&config_in(&dir)).unwrap();
        let conn = get_connection(&pool).unwrap();

        let fk_enabled: i32 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(fk_enabled, 1);
    }

    #[test]
    fn test_test_connection() {
        let conn = create_test_connection().unwrap();

        let result: i32 = conn
            .query_row("SELECT 1 + 1", [], |row| row.get(0))
            .unwrap();
        assert_eq!(result, 2);
    }
}
