//! Seed loader - one-time bootstrap of the challenge store
//!
//! Parses a line-oriented UTF-8 text source:
//!
//! - `Категория: <name>` opens a category block
//! - `- <name>: <description>` adds a challenge to the open block
//! - everything else is ignored
//!
//! Loading runs once per process, before the server accepts requests, and
//! only writes when the store holds zero categories.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{info, warn};

use crate::db::{rows, ChallengeDb};
use crate::error::ServiceError;

/// Line marker opening a category block
pub const CATEGORY_MARKER: &str = "Категория:";

/// Fallback seed filename looked up in the working directory
pub const DEFAULT_SEED_FILE: &str = "challenges.txt";

/// A parsed category block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedCategory {
    pub name: String,
    pub challenges: Vec<SeedChallenge>,
}

/// A parsed challenge line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedChallenge {
    pub name: String,
    pub description: String,
}

/// Outcome of a seeding attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Source parsed and persisted
    Loaded {
        categories: usize,
        challenges: usize,
    },
    /// Store already held data; nothing read, nothing written
    AlreadyPopulated,
    /// The run-once latch was already set in this process
    AlreadyRan,
}

/// Parse seed text into category blocks.
///
/// Single forward pass; block and line order are preserved. A `-` line with
/// no `:` separator, or one appearing before any category header, yields
/// nothing.
pub fn parse_source(text: &str) -> Vec<SeedCategory> {
    let mut categories: Vec<SeedCategory> = Vec::new();

    for line in text.lines() {
        let line = line.trim();

        if let Some(rest) = line.strip_prefix(CATEGORY_MARKER) {
            categories.push(SeedCategory {
                name: rest.trim().to_string(),
                challenges: Vec::new(),
            });
        } else if let Some(rest) = line.strip_prefix('-') {
            if let Some(current) = categories.last_mut() {
                if let Some((name, description)) = rest.split_once(':') {
                    current.challenges.push(SeedChallenge {
                        name: name.trim().to_string(),
                        description: description.trim().to_string(),
                    });
                }
            }
        }
    }

    categories
}

/// Resolve the seed source location.
///
/// Reads the configured path if it exists; otherwise falls back to
/// [`DEFAULT_SEED_FILE`] in `working_dir`. Fails with `SourceUnavailable`
/// when neither is present. The fallback is a leniency for local use and is
/// part of the contract.
pub fn resolve_source(
    configured: Option<&Path>,
    working_dir: &Path,
) -> Result<PathBuf, ServiceError> {
    if let Some(path) = configured {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
    }

    let fallback = working_dir.join(DEFAULT_SEED_FILE);
    if fallback.exists() {
        return Ok(fallback);
    }

    Err(ServiceError::SourceUnavailable(match configured {
        Some(path) => format!("{} (no {} fallback either)", path.display(), DEFAULT_SEED_FILE),
        None => format!("no seed file configured and no {} present", DEFAULT_SEED_FILE),
    }))
}

/// One-shot seed loader owned by the startup path.
///
/// The latch prevents re-entry within a process; idempotence across restarts
/// is the store emptiness check.
pub struct SeedLoader {
    source: Option<PathBuf>,
    ran: AtomicBool,
}

impl SeedLoader {
    pub fn new(source: Option<PathBuf>) -> Self {
        Self {
            source,
            ran: AtomicBool::new(false),
        }
    }

    /// Seed the store if it is empty. Safe to call more than once; only the
    /// first call in a process does any work.
    pub fn run_once(&self, db: &ChallengeDb) -> Result<SeedOutcome, ServiceError> {
        if self.ran.swap(true, Ordering::SeqCst) {
            return Ok(SeedOutcome::AlreadyRan);
        }

        self.load_if_empty(db)
    }

    fn load_if_empty(&self, db: &ChallengeDb) -> Result<SeedOutcome, ServiceError> {
        let existing = db.with_conn(|conn| rows::category_count(conn))?;
        if existing > 0 {
            info!("Store already holds {} categories, skipping seed", existing);
            return Ok(SeedOutcome::AlreadyPopulated);
        }

        let source = resolve_source(
            self.source.as_deref(),
            &std::env::current_dir().map_err(ServiceError::Io)?,
        )?;

        let text = std::fs::read_to_string(&source).map_err(|e| {
            ServiceError::SourceUnavailable(format!("{}: {}", source.display(), e))
        })?;

        let categories = parse_source(&text);
        let challenge_total: usize = categories.iter().map(|c| c.challenges.len()).sum();

        persist(db, &categories)?;

        info!(
            "Loaded {} categories ({} challenges) from {}",
            categories.len(),
            challenge_total,
            source.display()
        );

        Ok(SeedOutcome::Loaded {
            categories: categories.len(),
            challenges: challenge_total,
        })
    }
}

/// Persist parsed categories as a single transaction.
///
/// All rows commit together; any failure rolls the whole batch back and
/// surfaces as `SeedPersistence`.
fn persist(db: &ChallengeDb, categories: &[SeedCategory]) -> Result<(), ServiceError> {
    db.with_conn_mut(|conn| {
        let tx = conn
            .transaction()
            .map_err(|e| ServiceError::SeedPersistence(format!("Begin failed: {}", e)))?;

        for category in categories {
            let category_id = rows::insert_category(&tx, &category.name)
                .map_err(|e| ServiceError::SeedPersistence(e.to_string()))?;

            for challenge in &category.challenges {
                rows::insert_challenge(&tx, &challenge.name, &challenge.description, category_id)
                    .map_err(|e| ServiceError::SeedPersistence(e.to_string()))?;
            }
        }

        tx.commit()
            .map_err(|e| ServiceError::SeedPersistence(format!("Commit failed: {}", e)))
    })
}

/// Run seeding at startup, tolerating a missing source.
///
/// A missing seed file leaves the service running with an empty store (the
/// challenge endpoint reports no data until an operator provides one); a
/// persistence failure is fatal and propagates.
pub fn seed_at_startup(loader: &SeedLoader, db: &ChallengeDb) -> Result<(), ServiceError> {
    match loader.run_once(db) {
        Ok(_) => Ok(()),
        Err(ServiceError::SourceUnavailable(reason)) => {
            warn!("Seed source unavailable, continuing without data: {}", reason);
            Ok(())
        }
        Err(e) => Err(e),
    }
}
