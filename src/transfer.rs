//! Import and export of skillmap files

use std::path::Path;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::error::{Result, SkillmapError};
use crate::model::Skillmap;
use crate::persistence::DEFAULT_FILENAME;
use crate::schema::{self, ValidationError};

pub const JSON_CONTENT_TYPE: &str = "application/json";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";
// "_" + "YYYY-MM-DD_HH-MM-SS"
const TIMESTAMP_SUFFIX_LEN: usize = 20;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("unsupported file {0}: please upload a JSON file")]
    UnsupportedFile(String),
}

/// How the session filename is derived from the uploaded one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilenamePolicy {
    /// Reuse the uploaded name.
    #[default]
    Preserve,
    /// Append `_YYYY-MM-DD_HH-MM-SS` before the extension so a later
    /// download does not overwrite the original.
    Timestamped,
}

impl std::str::FromStr for FilenamePolicy {
    type Err = SkillmapError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "preserve" => Ok(Self::Preserve),
            "timestamped" | "timestamp" => Ok(Self::Timestamped),
            _ => Err(SkillmapError::Config(format!(
                "invalid filename policy {value} (expected preserve|timestamped)"
            ))),
        }
    }
}

impl FilenamePolicy {
    #[must_use]
    pub fn apply(self, original: &str) -> String {
        match self {
            Self::Preserve => original.to_string(),
            Self::Timestamped => timestamped_filename(original, Local::now().naive_local()),
        }
    }
}

/// A validated upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Imported {
    pub document: Skillmap,
    pub display_filename: String,
}

/// Bytes ready to be written out under `filename`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub content_type: &'static str,
}

/// Only `.json` files are accepted (case-insensitive).
pub fn check_extension(filename: &str) -> std::result::Result<(), ImportError> {
    let is_json = Path::new(filename)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        Ok(())
    } else {
        Err(ImportError::UnsupportedFile(filename.to_string()))
    }
}

/// Parse and validate uploaded text.
pub fn import_file(
    raw_text: &str,
    original_filename: &str,
    policy: FilenamePolicy,
) -> std::result::Result<Imported, ImportError> {
    check_extension(original_filename)?;
    let value: serde_json::Value = serde_json::from_str(raw_text)?;
    let document = schema::validate(&value)?;
    let display_filename = policy.apply(original_filename);
    info!(
        file = original_filename,
        modules = document.modules.len(),
        "imported skillmap"
    );
    Ok(Imported {
        document,
        display_filename,
    })
}

/// Serialize the document as 2-space indented JSON.
pub fn export_file(document: &Skillmap, filename: &str) -> Result<ExportPayload> {
    let json = serde_json::to_string_pretty(document)
        .map_err(|err| SkillmapError::Serialization(format!("serialize skillmap: {err}")))?;
    let filename = if filename.trim().is_empty() {
        DEFAULT_FILENAME.to_string()
    } else {
        filename.to_string()
    };
    Ok(ExportPayload {
        bytes: json.into_bytes(),
        filename,
        content_type: JSON_CONTENT_TYPE,
    })
}

/// Insert a timestamp before the extension, replacing one already present.
#[must_use]
pub fn timestamped_filename(original: &str, at: NaiveDateTime) -> String {
    let (stem, extension) = match original.rfind('.') {
        Some(dot) if dot > 0 => original.split_at(dot),
        _ => (original, ""),
    };
    let stem = strip_timestamp(stem);
    format!("{stem}_{}{extension}", at.format(TIMESTAMP_FORMAT))
}

fn strip_timestamp(stem: &str) -> &str {
    if stem.len() <= TIMESTAMP_SUFFIX_LEN
        || !stem.is_char_boundary(stem.len() - TIMESTAMP_SUFFIX_LEN)
    {
        return stem;
    }
    let (head, suffix) = stem.split_at(stem.len() - TIMESTAMP_SUFFIX_LEN);
    let is_stamp = suffix
        .strip_prefix('_')
        .is_some_and(|stamp| NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).is_ok());
    if is_stamp { head } else { stem }
}
