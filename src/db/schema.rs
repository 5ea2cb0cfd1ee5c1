//! Database schema definitions

use rusqlite::Connection;
use tracing::info;

use crate::error::ServiceError;

/// Current schema version for migrations
pub const SCHEMA_VERSION: i32 = 1;

/// Initialize the database schema
pub fn init_schema(conn: &Connection) -> Result<(), ServiceError> {
    let current_version = get_schema_version(conn)?;

    if current_version == 0 {
        info!("Creating new database schema v{}", SCHEMA_VERSION);
        create_tables(conn)?;
        set_schema_version(conn, SCHEMA_VERSION)?;
    } else if current_version < SCHEMA_VERSION {
        info!(
            "Migrating schema from v{} to v{}",
            current_version, SCHEMA_VERSION
        );
        migrate_schema(conn, current_version)?;
    }

    Ok(())
}

/// Get current schema version (0 if not initialized)
fn get_schema_version(conn: &Connection) -> Result<i32, ServiceError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (version INTEGER NOT NULL)",
        [],
    )
    .map_err(|e| ServiceError::Database(format!("Failed to create schema_version table: {}", e)))?;

    let version: i32 = conn
        .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
            row.get(0)
        })
        .unwrap_or(0);

    Ok(version)
}

/// Set schema version
fn set_schema_version(conn: &Connection, version: i32) -> Result<(), ServiceError> {
    conn.execute("DELETE FROM schema_version", [])
        .map_err(|e| ServiceError::Database(format!("Failed to clear schema_version: {}", e)))?;
    conn.execute("INSERT INTO schema_version (version) VALUES (?)", [version])
        .map_err(|e| ServiceError::Database(format!("Failed to set schema_version: {}", e)))?;
    Ok(())
}

/// Migrate schema from older version
fn migrate_schema(conn: &Connection, from_version: i32) -> Result<(), ServiceError> {
    // Add migration steps here as schema evolves
    match from_version {
        _ => {}
    }

    set_schema_version(conn, SCHEMA_VERSION)
}

/// Create all tables
fn create_tables(conn: &Connection) -> Result<(), ServiceError> {
    conn.execute_batch(CHALLENGES_SCHEMA)
        .map_err(|e| ServiceError::Database(format!("Failed to create challenge tables: {}", e)))?;

    Ok(())
}

/// Categories and challenges schema
const CHALLENGES_SCHEMA: &str = r#"
-- Named groupings of challenges, written once by the seed loader
CREATE TABLE IF NOT EXISTS challenge_categories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
);

-- A challenge belongs to exactly one category
CREATE TABLE IF NOT EXISTS challenges (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    category_id INTEGER NOT NULL,
    FOREIGN KEY (category_id) REFERENCES challenge_categories(id)
);

CREATE INDEX IF NOT EXISTS idx_challenges_category ON challenges(category_id);
"#;
