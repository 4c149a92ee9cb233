//! Session persistence
//!
//! Mirrors the live document into a single key-value entry after every edit
//! and restores it on startup. A stored snapshot is untrusted: it is parsed
//! and re-validated, and anything that fails is deleted rather than reported.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Result, SkillmapError};
use crate::model::{Skillmap, selection};
use crate::schema;
use crate::storage::KeyValueStore;

/// Key holding the `{data, fileName}` snapshot.
pub const SNAPSHOT_KEY: &str = "skillmap-editor-data";
/// Key holding the selected module index.
pub const SELECTION_KEY: &str = "skillmap-editor-selection";
/// Filename used when a snapshot carries none.
pub const DEFAULT_FILENAME: &str = "skillmap.json";

#[derive(Serialize)]
struct SnapshotRef<'a> {
    data: &'a Skillmap,
    #[serde(rename = "fileName")]
    file_name: &'a str,
}

/// A document restored from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restored {
    pub document: Skillmap,
    pub file_name: String,
}

pub struct SnapshotStore<S> {
    store: S,
}

impl<S: KeyValueStore> SnapshotStore<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Write the snapshot, returning the store's result.
    pub fn save(&self, document: &Skillmap, file_name: &str) -> Result<()> {
        let payload = serde_json::to_string(&SnapshotRef {
            data: document,
            file_name,
        })
        .map_err(|err| SkillmapError::Serialization(format!("serialize snapshot: {err}")))?;
        self.store.set(SNAPSHOT_KEY, &payload)
    }

    /// Write the snapshot; a failure is logged and otherwise ignored.
    pub fn save_best_effort(&self, document: &Skillmap, file_name: &str) {
        if let Err(err) = self.save(document, file_name) {
            warn!(error = %err, "failed to persist skillmap snapshot");
        }
    }

    /// Restore the snapshot. Corrupt or stale entries are deleted and yield `None`.
    pub fn load(&self) -> Option<Restored> {
        let raw = match self.store.get(SNAPSHOT_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!(error = %err, "failed to read skillmap snapshot");
                return None;
            }
        };

        match parse_snapshot(&raw) {
            Ok(restored) => {
                debug!(file_name = %restored.file_name, "restored skillmap snapshot");
                Some(restored)
            }
            Err(reason) => {
                warn!(%reason, "discarding corrupt skillmap snapshot");
                self.discard();
                None
            }
        }
    }

    /// Delete the snapshot and the stored selection.
    pub fn clear(&self) -> Result<()> {
        self.store.remove(SNAPSHOT_KEY)?;
        self.store.remove(SELECTION_KEY)
    }

    pub fn save_selection(&self, index: usize) {
        if let Err(err) = self.store.set(SELECTION_KEY, &index.to_string()) {
            warn!(error = %err, "failed to persist module selection");
        }
    }

    /// Stored selection re-resolved against `module_count`. Garbage resolves to 0.
    pub fn load_selection(&self, module_count: usize) -> usize {
        let stored = self
            .store
            .get(SELECTION_KEY)
            .ok()
            .flatten()
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .unwrap_or(0);
        selection::clamp(stored, module_count)
    }

    fn discard(&self) {
        if let Err(err) = self.clear() {
            warn!(error = %err, "failed to delete corrupt skillmap snapshot");
        }
    }
}

fn parse_snapshot(raw: &str) -> std::result::Result<Restored, String> {
    let value: Value = serde_json::from_str(raw).map_err(|err| format!("parse: {err}"))?;
    let data = value.get("data").unwrap_or(&Value::Null);
    let document = schema::validate(data).map_err(|err| format!("data.{err}"))?;
    let file_name = value
        .get("fileName")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_FILENAME)
        .to_string();
    Ok(Restored {
        document,
        file_name,
    })
}
