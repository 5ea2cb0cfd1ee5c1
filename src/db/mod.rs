//! SQLite store for categories and challenges
//!
//! ## Tables
//!
//! - `challenge_categories` - named groupings, created once by the seed loader
//! - `challenges` - tasks referencing exactly one category
//!
//! The store is write-once (seeding) and read-many (random selection);
//! handlers never mutate it.

pub mod rows;
pub mod schema;

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;
use tracing::{debug, info};

use crate::error::ServiceError;

/// SQLite database holding categories and challenges
pub struct ChallengeDb {
    conn: Mutex<Connection>,
}

impl ChallengeDb {
    /// Open or create the database at the given path
    pub fn open(db_path: &Path) -> Result<Self, ServiceError> {
        info!("Opening SQLite database at {:?}", db_path);

        let conn = Connection::open(db_path)
            .map_err(|e| ServiceError::Database(format!("Failed to open SQLite: {}", e)))?;

        Self::from_connection(conn)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self, ServiceError> {
        debug!("Opening in-memory SQLite database");

        let conn = Connection::open_in_memory()
            .map_err(|e| ServiceError::Database(format!("Failed to open in-memory SQLite: {}", e)))?;

        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, ServiceError> {
        // WAL for concurrent reads; foreign keys enforce the
        // challenge-requires-category invariant
        conn.execute_batch(
            "PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL; PRAGMA foreign_keys=ON;",
        )
        .map_err(|e| ServiceError::Database(format!("Failed to set PRAGMA: {}", e)))?;

        let db = Self {
            conn: Mutex::new(conn),
        };

        db.init_schema()?;

        Ok(db)
    }

    /// Initialize database schema
    fn init_schema(&self) -> Result<(), ServiceError> {
        self.with_conn(|conn| schema::init_schema(conn))
    }

    /// Run a read operation against the connection
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&Connection) -> Result<T, ServiceError>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|e| ServiceError::Database(format!("Lock poisoned: {}", e)))?;
        f(&conn)
    }

    /// Run a write operation with exclusive access (transactions)
    pub fn with_conn_mut<F, T>(&self, f: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&mut Connection) -> Result<T, ServiceError>,
    {
        let mut conn = self
            .conn
            .lock()
            .map_err(|e| ServiceError::Database(format!("Lock poisoned: {}", e)))?;
        f(&mut conn)
    }
}

// Re-exports
pub use rows::{CategoryRow, ChallengeRow};
