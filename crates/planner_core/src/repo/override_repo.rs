//! Learned-override repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Record and remove user-confirmed name -> category overrides.
//! - Load the full override table for the in-memory classifier mirror.
//!
//! # Invariants
//! - `learn` with the already-stored category is an idempotent no-op.
//! - Override names are non-empty normalized ingredient names.

use crate::db::DbError;
use log::info;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Override name was empty after trimming.
    InvalidName,
    /// Override category was empty after trimming.
    InvalidCategory,
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidName => write!(f, "override name must not be empty"),
            Self::InvalidCategory => write!(f, "override category must not be empty"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidName | Self::InvalidCategory => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Result of a [`OverrideRepository::learn`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LearnOutcome {
    /// A new or changed override was stored; callers may surface a
    /// "learned" notice.
    Learned,
    /// The override already existed with the same category; nothing written.
    Unchanged,
}

/// Learning-store contract for user-confirmed category overrides.
pub trait OverrideRepository {
    fn learn(&self, name: &str, category: &str) -> RepoResult<LearnOutcome>;
    /// Removes the override; returns `false` (and emits nothing) if absent.
    fn forget(&self, name: &str) -> RepoResult<bool>;
    fn get(&self, name: &str) -> RepoResult<Option<String>>;
    fn load_all(&self) -> RepoResult<BTreeMap<String, String>>;
}

/// SQLite-backed learning store.
pub struct SqliteOverrideRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteOverrideRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl OverrideRepository for SqliteOverrideRepository<'_> {
    fn learn(&self, name: &str, category: &str) -> RepoResult<LearnOutcome> {
        let name = name.trim();
        let category = category.trim();
        if name.is_empty() {
            return Err(RepoError::InvalidName);
        }
        if category.is_empty() {
            return Err(RepoError::InvalidCategory);
        }

        if self.get(name)?.as_deref() == Some(category) {
            return Ok(LearnOutcome::Unchanged);
        }

        // Single upsert statement keeps the table transition atomic.
        self.conn.execute(
            "INSERT INTO overrides (name, category) VALUES (?1, ?2)
             ON CONFLICT(name) DO UPDATE SET
                category = excluded.category,
                learned_at = (strftime('%s', 'now') * 1000);",
            params![name, category],
        )?;

        info!("event=override_learned module=repo status=ok name={name} category={category}");
        Ok(LearnOutcome::Learned)
    }

    fn forget(&self, name: &str) -> RepoResult<bool> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(false);
        }

        let removed = self
            .conn
            .execute("DELETE FROM overrides WHERE name = ?1;", [name])?;
        if removed > 0 {
            info!("event=override_forgotten module=repo status=ok name={name}");
        }
        Ok(removed > 0)
    }

    fn get(&self, name: &str) -> RepoResult<Option<String>> {
        let category = self
            .conn
            .query_row(
                "SELECT category FROM overrides WHERE name = ?1;",
                [name.trim()],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(category)
    }

    fn load_all(&self) -> RepoResult<BTreeMap<String, String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, category FROM overrides ORDER BY name;")?;
        let mut rows = stmt.query([])?;
        let mut overrides = BTreeMap::new();
        while let Some(row) = rows.next()? {
            overrides.insert(row.get::<_, String>(0)?, row.get::<_, String>(1)?);
        }
        Ok(overrides)
    }
}
