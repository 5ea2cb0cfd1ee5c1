//! Category and challenge row operations

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

/// Category row from database
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRow {
    pub id: i64,
    pub name: String,
}

/// Challenge row from database
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category_id: i64,
}

impl ChallengeRow {
    fn from_row(row: &Row) -> Result<Self, rusqlite::Error> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            description: row.get("description")?,
            category_id: row.get("category_id")?,
        })
    }
}

/// Insert a category, returning its assigned id
pub fn insert_category(conn: &Connection, name: &str) -> Result<i64, ServiceError> {
    conn.execute(
        "INSERT INTO challenge_categories (name) VALUES (?)",
        params![name],
    )
    .map_err(|e| ServiceError::Database(format!("Insert category failed: {}", e)))?;

    Ok(conn.last_insert_rowid())
}

/// Insert a challenge under an existing category, returning its assigned id
pub fn insert_challenge(
    conn: &Connection,
    name: &str,
    description: &str,
    category_id: i64,
) -> Result<i64, ServiceError> {
    conn.execute(
        "INSERT INTO challenges (name, description, category_id) VALUES (?, ?, ?)",
        params![name, description, category_id],
    )
    .map_err(|e| ServiceError::Database(format!("Insert challenge failed: {}", e)))?;

    Ok(conn.last_insert_rowid())
}

/// Number of categories in the store
pub fn category_count(conn: &Connection) -> Result<u64, ServiceError> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM challenge_categories", [], |row| {
            row.get(0)
        })
        .map_err(|e| ServiceError::Database(format!("Query failed: {}", e)))?;

    Ok(count as u64)
}

/// Number of challenges in the store
pub fn challenge_count(conn: &Connection) -> Result<u64, ServiceError> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM challenges", [], |row| row.get(0))
        .map_err(|e| ServiceError::Database(format!("Query failed: {}", e)))?;

    Ok(count as u64)
}

/// Pick one uniformly-random challenge with its owning category.
///
/// Returns `None` when the store holds no challenges. Selection is by
/// randomized ordering of the full row set; each call is an independent draw.
pub fn pick_random(
    conn: &Connection,
) -> Result<Option<(CategoryRow, ChallengeRow)>, ServiceError> {
    let mut stmt = conn
        .prepare(
            "SELECT ch.id, ch.name, ch.description, ch.category_id,
                    cat.name AS category_name
             FROM challenges ch
             JOIN challenge_categories cat ON cat.id = ch.category_id
             ORDER BY RANDOM()
             LIMIT 1",
        )
        .map_err(|e| ServiceError::Database(format!("Prepare failed: {}", e)))?;

    let mut rows = stmt
        .query([])
        .map_err(|e| ServiceError::Database(format!("Query failed: {}", e)))?;

    if let Some(row) = rows
        .next()
        .map_err(|e| ServiceError::Database(format!("Row fetch failed: {}", e)))?
    {
        let challenge = ChallengeRow::from_row(row)
            .map_err(|e| ServiceError::Database(format!("Row parse failed: {}", e)))?;
        let category = CategoryRow {
            id: challenge.category_id,
            name: row
                .get("category_name")
                .map_err(|e| ServiceError::Database(format!("Row parse failed: {}", e)))?,
        };

        Ok(Some((category, challenge)))
    } else {
        Ok(None)
    }
}
