//! Storage layer for skillmap
//!
//! The editor only needs an opaque string key-value store (the role browser
//! local storage plays for a web front-end). SQLite backs it on disk; an
//! in-memory store serves tests and ephemeral sessions.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::Database;

use crate::error::Result;

/// Opaque string key-value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Reject values over `limit` bytes. A limit of 0 disables the check.
pub(crate) fn check_quota(value: &str, limit: u64) -> Result<()> {
    if limit > 0 && value.len() as u64 > limit {
        return Err(crate::error::SkillmapError::QuotaExceeded {
            needed: value.len(),
            limit,
        });
    }
    Ok(())
}
