//! Snapshot persistence boundary.
//!
//! # Responsibility
//! - Define the key-value contract stores snapshot their collections into.
//! - Provide the SQLite-backed implementation and an in-memory test double.
//!
//! # Invariants
//! - `save` replaces the full value under `key`; there are no partial writes.
//! - Implementations never interpret the stored payload.

use crate::db::{open_db, open_db_in_memory, DbError, DbResult};
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Error produced by snapshot load/save operations.
#[derive(Debug)]
pub enum SnapshotError {
    Db(DbError),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for SnapshotError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for SnapshotError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable key-value store a `TaskStore` snapshots into.
///
/// The interface mirrors a browser-local-storage shape: opaque string
/// values under string keys, last write wins.
pub trait SnapshotStore {
    /// Returns the value under `key`, or `None` when the key is absent.
    fn load(&self, key: &str) -> SnapshotResult<Option<String>>;
    /// Writes `value` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: &str) -> SnapshotResult<()>;
    /// Removes `key` if present.
    fn remove(&mut self, key: &str) -> SnapshotResult<()>;
}

/// SQLite-backed snapshot store over the `kv` table.
pub struct SqliteSnapshotStore {
    conn: Connection,
}

impl SqliteSnapshotStore {
    /// Opens (and bootstraps) a snapshot database file.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        Ok(Self { conn: open_db(path)? })
    }

    /// Opens an in-memory snapshot database. Contents vanish on drop.
    pub fn open_in_memory() -> DbResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
        })
    }
}

impl SnapshotStore for SqliteSnapshotStore {
    fn load(&self, key: &str) -> SnapshotResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1;", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn save(&mut self, key: &str, value: &str) -> SnapshotResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> SnapshotResult<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1;", [key])?;
        Ok(())
    }
}

/// In-memory snapshot store for tests and demo wiring.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    entries: HashMap<String, String>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds a key, bypassing `save`. Test convenience.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.into(), value.into());
        store
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self, key: &str) -> SnapshotResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> SnapshotResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> SnapshotResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{MemorySnapshotStore, SnapshotStore, SqliteSnapshotStore};

    #[test]
    fn memory_store_roundtrips_and_removes() {
        let mut store = MemorySnapshotStore::new();
        assert_eq!(store.load("k").unwrap(), None);

        store.save("k", "v1").unwrap();
        assert_eq!(store.load("k").unwrap().as_deref(), Some("v1"));

        store.save("k", "v2").unwrap();
        assert_eq!(store.load("k").unwrap().as_deref(), Some("v2"));

        store.remove("k").unwrap();
        assert_eq!(store.load("k").unwrap(), None);
    }

    #[test]
    fn sqlite_store_upserts_under_fixed_key() {
        let mut store = SqliteSnapshotStore::open_in_memory().unwrap();

        store.save("tasks.v1", "[]").unwrap();
        store.save("tasks.v1", "[{\"id\":1}]").unwrap();
        assert_eq!(
            store.load("tasks.v1").unwrap().as_deref(),
            Some("[{\"id\":1}]")
        );

        store.remove("tasks.v1").unwrap();
        assert_eq!(store.load("tasks.v1").unwrap(), None);
        store.remove("tasks.v1").unwrap();
    }
}
