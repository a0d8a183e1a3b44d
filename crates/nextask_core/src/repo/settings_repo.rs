//! Settings repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the `get`/`set` key-value API backing the onboarding flag.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `set` is an upsert; re-writing a key replaces its value.
//! - Keys and values are plain UTF-8 strings with stable meaning.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Key of the one-time onboarding flag. Its value is `"true"` once the user
/// has completed or skipped the slides.
pub const HAS_ONBOARDED_KEY: &str = "hasOnboarded";

/// Stored value marking onboarding as done.
pub const HAS_ONBOARDED_VALUE: &str = "true";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for settings persistence.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
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

/// Key-value store contract consumed by the onboarding flow.
pub trait SettingsRepository {
    /// Reads one setting; `None` when the key was never written.
    fn get(&self, key: &str) -> RepoResult<Option<String>>;
    /// Writes one setting, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> RepoResult<()>;
}

/// SQLite-backed settings repository.
pub struct SqliteSettingsRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSettingsRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SettingsRepository for SqliteSettingsRepository<'_> {
    fn get(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO settings (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }
}
