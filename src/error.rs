//! Error types for skillmap

use thiserror::Error;

use crate::model::EditError;
use crate::schema::ValidationError;
use crate::transfer::ImportError;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, SkillmapError>;

#[derive(Debug, Error)]
pub enum SkillmapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("storage quota exceeded: value is {needed} bytes, limit is {limit} bytes")]
    QuotaExceeded { needed: usize, limit: u64 },

    #[error("{0}")]
    Import(#[from] ImportError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Edit(#[from] EditError),

    #[error("no skillmap loaded (run `skillmap open <FILE>` first)")]
    NoDocument,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("missing configuration: {0}")]
    MissingConfig(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("approval required: {0}")]
    ApprovalRequired(String),
}

impl SkillmapError {
    /// Stable machine-readable code used in robot output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "io_error",
            Self::Storage(_) => "storage_error",
            Self::QuotaExceeded { .. } => "quota_exceeded",
            Self::Import(ImportError::Parse(_)) => "parse_error",
            Self::Import(ImportError::Validation(_)) | Self::Validation(_) => "validation_error",
            Self::Import(ImportError::UnsupportedFile(_)) => "unsupported_file",
            Self::Edit(EditError::LastModule) => "last_module",
            Self::Edit(EditError::IndexOutOfRange { .. }) => "index_out_of_range",
            Self::Edit(EditError::InvalidPermutation { .. }) => "invalid_permutation",
            Self::Edit(EditError::EmptyTitle) => "empty_title",
            Self::NoDocument => "no_document",
            Self::Config(_) => "config_error",
            Self::MissingConfig(_) => "missing_config",
            Self::Serialization(_) => "serialization_error",
            Self::ApprovalRequired(_) => "approval_required",
        }
    }
}
