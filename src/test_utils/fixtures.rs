use std::path::PathBuf;

use tempfile::TempDir;

use crate::model::{Module, Objective, Skillmap};

/// The one-module document used throughout the tests.
pub const SAMPLE_JSON: &str = r#"{"title":"T","description":"D","modules":[{"title":"M1","objectives":[{"goal":"G","skills":["S1"]}]}]}"#;

/// [`SAMPLE_JSON`] as a value.
#[must_use]
pub fn sample_skillmap() -> Skillmap {
    Skillmap {
        title: "T".to_string(),
        description: "D".to_string(),
        modules: vec![Module {
            title: "M1".to_string(),
            objectives: vec![Objective {
                goal: "G".to_string(),
                skills: vec!["S1".to_string()],
            }],
        }],
    }
}

/// A document whose modules carry the given titles and no objectives.
#[must_use]
pub fn modules_titled(titles: &[&str]) -> Skillmap {
    Skillmap {
        title: "Course".to_string(),
        description: String::new(),
        modules: titles
            .iter()
            .map(|title| Module {
                title: (*title).to_string(),
                objectives: Vec::new(),
            })
            .collect(),
    }
}

/// Isolated data root with helpers for writing input files.
pub struct DocumentFixture {
    pub temp_dir: TempDir,
    pub root: PathBuf,
}

impl Default for DocumentFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentFixture {
    #[must_use]
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self { temp_dir, root }
    }

    /// Write `content` under the fixture root and return its path.
    #[must_use]
    pub fn write_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Write [`SAMPLE_JSON`] as `name`.
    #[must_use]
    pub fn sample_file(&self, name: &str) -> PathBuf {
        self.write_file(name, SAMPLE_JSON)
    }
}
