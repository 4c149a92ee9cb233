//! SQLite key-value store

use std::path::Path;
use std::time::Duration;

use rusqlite::{Connection, OptionalExtension, params};

use super::{KeyValueStore, check_quota};
use crate::error::Result;

pub const SCHEMA_VERSION: u32 = 1;

/// SQLite database wrapper holding the editor's key-value entries
pub struct Database {
    conn: Connection,
    schema_version: u32,
    max_value_bytes: u64,
}

impl Database {
    /// Open database at the given path
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        Self::configure(conn)
    }

    /// Open a throwaway in-memory database
    pub fn open_in_memory() -> Result<Self> {
        Self::configure(Connection::open_in_memory()?)
    }

    /// Cap the size of a single stored value. 0 disables the cap.
    #[must_use]
    pub const fn with_quota(mut self, max_value_bytes: u64) -> Self {
        self.max_value_bytes = max_value_bytes;
        self
    }

    /// Get a reference to the connection
    pub const fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Current schema version after migrations.
    pub const fn schema_version(&self) -> u32 {
        self.schema_version
    }

    fn configure(conn: Connection) -> Result<Self> {
        Self::configure_pragmas(&conn)?;
        conn.busy_timeout(Duration::from_secs(5))?;
        let schema_version = Self::migrate(&conn)?;
        Ok(Self {
            conn,
            schema_version,
            max_value_bytes: 0,
        })
    }

    fn configure_pragmas(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA temp_store = MEMORY;",
        )?;
        Ok(())
    }

    fn migrate(conn: &Connection) -> Result<u32> {
        let current: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if current < 1 {
            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS kv_store (
                     key TEXT PRIMARY KEY,
                     value TEXT NOT NULL,
                     updated_at TEXT NOT NULL
                 );
                 PRAGMA user_version = 1;",
            )?;
        }
        Ok(SCHEMA_VERSION.max(current))
    }
}

impl KeyValueStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        check_quota(value, self.max_value_bytes)?;
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE
                 SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, chrono::Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1", [key])?;
        Ok(())
    }
}
