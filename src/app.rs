use std::path::{Path, PathBuf};

use crate::cli::output::OutputFormat;
use crate::config::Config;
use crate::editor::Editor;
use crate::error::{Result, SkillmapError};
use crate::storage::Database;

/// Name of the per-project data directory searched for upward from the cwd.
pub const PROJECT_DIR: &str = ".skillmap";

pub struct AppContext {
    pub root: PathBuf,
    pub config: Config,
    pub robot: bool,
    pub output_format: OutputFormat,
    pub assume_yes: bool,
}

impl AppContext {
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        let root = Self::find_root()?;
        let config = Config::load(cli.config.as_deref(), &root)?;
        let output_format = match cli.output_format() {
            Some(format) => format,
            None => config.output.format.parse()?,
        };
        let robot = cli.robot || output_format == OutputFormat::Json;

        Ok(Self {
            root,
            config,
            robot,
            output_format,
            assume_yes: cli.yes,
        })
    }

    pub fn db_path(&self) -> PathBuf {
        self.root.join(&self.config.storage.db_file)
    }

    /// Open the session backed by the on-disk store.
    pub fn open_editor(&self) -> Result<Editor<Database>> {
        let db = Database::open(self.db_path())?.with_quota(self.config.storage.max_value_bytes);
        Ok(Editor::restore(db, self.config.export.filename_policy))
    }

    fn find_root() -> Result<PathBuf> {
        if let Ok(root) = std::env::var("SKILLMAP_ROOT") {
            return Ok(PathBuf::from(root));
        }
        let cwd = std::env::current_dir()?;
        if let Some(found) = find_upwards(&cwd, PROJECT_DIR) {
            return Ok(found);
        }

        let data_dir = dirs::data_dir()
            .ok_or_else(|| SkillmapError::MissingConfig("data directory not found".to_string()))?;
        Ok(data_dir.join("skillmap"))
    }
}

fn find_upwards(start: &Path, name: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_dir())
}
