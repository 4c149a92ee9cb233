use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SkillmapError};
use crate::transfer::FilenamePolicy;

/// Common browser local-storage quota.
pub const DEFAULT_MAX_VALUE_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    pub fn load(explicit_path: Option<&Path>, root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("SKILLMAP_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(root)? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&dir.join("skillmap/config.toml"))
    }

    fn load_project(root: &Path) -> Result<Option<ConfigPatch>> {
        Self::load_patch(&root.join("config.toml"))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path).map_err(|err| {
            SkillmapError::Config(format!("read config {}: {err}", path.display()))
        })?;
        let patch = toml::from_str(&raw).map_err(|err| {
            SkillmapError::Config(format!("parse config {}: {err}", path.display()))
        })?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.storage {
            self.storage.merge(patch);
        }
        if let Some(patch) = patch.export {
            self.export.merge(patch);
        }
        if let Some(patch) = patch.editor {
            self.editor.merge(patch);
        }
        if let Some(patch) = patch.output {
            self.output.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if env_bool("SKILLMAP_ROBOT").unwrap_or(false) {
            self.output.format = "json".to_string();
        }

        if let Some(value) = env_string("SKILLMAP_STORAGE_DB_FILE") {
            self.storage.db_file = value;
        }
        if let Some(value) = env_u64("SKILLMAP_STORAGE_MAX_VALUE_BYTES")? {
            self.storage.max_value_bytes = value;
        }

        if let Some(value) = env_string("SKILLMAP_EXPORT_FILENAME_POLICY") {
            self.export.filename_policy = value.parse()?;
        }

        if let Some(value) = env_bool("SKILLMAP_EDITOR_CONFIRM_DESTRUCTIVE") {
            self.editor.confirm_destructive = value;
        }

        if let Some(value) = env_string("SKILLMAP_OUTPUT_FORMAT") {
            self.output.format = value;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_db_file")]
    pub db_file: String,
    #[serde(default = "default_max_value_bytes")]
    pub max_value_bytes: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_file: default_db_file(),
            max_value_bytes: DEFAULT_MAX_VALUE_BYTES,
        }
    }
}

impl StorageConfig {
    fn merge(&mut self, patch: StoragePatch) {
        if let Some(value) = patch.db_file {
            self.db_file = value;
        }
        if let Some(value) = patch.max_value_bytes {
            self.max_value_bytes = value;
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default)]
    pub filename_policy: FilenamePolicy,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            filename_policy: FilenamePolicy::Preserve,
        }
    }
}

impl ExportConfig {
    fn merge(&mut self, patch: ExportPatch) {
        if let Some(value) = patch.filename_policy {
            self.filename_policy = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default = "default_true")]
    pub confirm_destructive: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            confirm_destructive: true,
        }
    }
}

impl EditorConfig {
    fn merge(&mut self, patch: EditorPatch) {
        if let Some(value) = patch.confirm_destructive {
            self.confirm_destructive = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_output_format(),
        }
    }
}

impl OutputConfig {
    fn merge(&mut self, patch: OutputPatch) {
        if let Some(value) = patch.format {
            self.format = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub storage: Option<StoragePatch>,
    pub export: Option<ExportPatch>,
    pub editor: Option<EditorPatch>,
    pub output: Option<OutputPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct StoragePatch {
    pub db_file: Option<String>,
    pub max_value_bytes: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
struct ExportPatch {
    pub filename_policy: Option<FilenamePolicy>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
struct EditorPatch {
    pub confirm_destructive: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct OutputPatch {
    pub format: Option<String>,
}

fn default_db_file() -> String {
    "skillmap.db".to_string()
}

const fn default_max_value_bytes() -> u64 {
    DEFAULT_MAX_VALUE_BYTES
}

const fn default_true() -> bool {
    true
}

fn default_output_format() -> String {
    "human".to_string()
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}

fn env_u64(key: &str) -> Result<Option<u64>> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<u64>()
            .map(Some)
            .map_err(|err| SkillmapError::Config(format!("invalid {key} value {value}: {err}"))),
        Err(_) => Ok(None),
    }
}
