//! In-memory key-value store

use std::cell::RefCell;
use std::collections::HashMap;

use super::{KeyValueStore, check_quota};
use crate::error::Result;

/// Process-local store. Optionally enforces a per-value byte quota so write
/// failures can be exercised without a real storage backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    max_value_bytes: u64,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_quota(max_value_bytes: u64) -> Self {
        Self {
            entries: RefCell::default(),
            max_value_bytes,
        }
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        check_quota(value, self.max_value_bytes)?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
