//! Skillmap document types
//!
//! Field order matches the file format; serde emits fields in declaration
//! order, which keeps exported files stable.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MODULE_TITLE: &str = "New Module";
pub const DEFAULT_OBJECTIVE_GOAL: &str = "New objective";
pub const DEFAULT_SKILL: &str = "New skill";

/// Root curriculum document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Skillmap {
    pub title: String,
    pub description: String,
    pub modules: Vec<Module>,
}

/// A course module: a title and its ordered objectives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub title: String,
    pub objectives: Vec<Objective>,
}

/// A goal plus the skills that realize it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    pub goal: String,
    pub skills: Vec<String>,
}

impl Default for Module {
    fn default() -> Self {
        Self {
            title: DEFAULT_MODULE_TITLE.to_string(),
            objectives: Vec::new(),
        }
    }
}

impl Default for Objective {
    fn default() -> Self {
        Self {
            goal: DEFAULT_OBJECTIVE_GOAL.to_string(),
            skills: Vec::new(),
        }
    }
}

impl Skillmap {
    #[must_use]
    pub fn module(&self, index: usize) -> Option<&Module> {
        self.modules.get(index)
    }

    /// Total number of skills across every module and objective.
    #[must_use]
    pub fn skill_count(&self) -> usize {
        self.modules
            .iter()
            .flat_map(|module| &module.objectives)
            .map(|objective| objective.skills.len())
            .sum()
    }
}

impl Module {
    #[must_use]
    pub fn objective(&self, index: usize) -> Option<&Objective> {
        self.objectives.get(index)
    }
}
