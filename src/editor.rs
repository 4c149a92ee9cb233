//! Editor session
//!
//! Owns the single live document, its filename and the selected module.
//! Front-ends dispatch [`Edit`]s; the session applies the matching pure
//! operation, re-resolves the selection and mirrors the result to the
//! snapshot store.

use tracing::{debug, info};

use crate::error::{Result, SkillmapError};
use crate::model::{EditError, Level, Module, Objective, Skillmap, ops, selection};
use crate::persistence::SnapshotStore;
use crate::storage::KeyValueStore;
use crate::transfer::{self, ExportPayload, FilenamePolicy};

/// Answers a yes/no question before a destructive edit.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Accepts every confirmation.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> Result<bool> {
        Ok(true)
    }
}

/// Declines every confirmation.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeNo;

impl Confirm for AssumeNo {
    fn confirm(&mut self, _prompt: &str) -> Result<bool> {
        Ok(false)
    }
}

/// One user action against the live document.
///
/// `module: None` targets the selected module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    SetMetadata {
        title: String,
        description: String,
    },
    SelectModule {
        index: usize,
    },
    /// Append a module and select it. A given title is trimmed like a rename.
    AddModule {
        title: Option<String>,
    },
    RemoveModule {
        index: usize,
    },
    ReorderModules {
        order: Vec<usize>,
    },
    MoveModule {
        from: usize,
        to: usize,
    },
    RenameModule {
        index: usize,
        title: String,
    },
    UpdateModule {
        index: usize,
        module: Module,
    },
    AddObjective {
        module: Option<usize>,
    },
    RemoveObjective {
        module: Option<usize>,
        objective: usize,
    },
    SetGoal {
        module: Option<usize>,
        objective: usize,
        goal: String,
    },
    UpdateObjective {
        module: Option<usize>,
        objective: usize,
        value: Objective,
    },
    AddSkill {
        module: Option<usize>,
        objective: usize,
        value: Option<String>,
    },
    RemoveSkill {
        module: Option<usize>,
        objective: usize,
        skill: usize,
    },
    UpdateSkill {
        module: Option<usize>,
        objective: usize,
        skill: usize,
        value: String,
    },
}

impl Edit {
    const fn is_destructive(&self) -> bool {
        matches!(self, Self::RemoveModule { .. } | Self::RemoveObjective { .. })
    }

    fn prompt(&self) -> &'static str {
        match self {
            Self::RemoveModule { .. } => "Are you sure you want to remove this module?",
            Self::RemoveObjective { .. } => "Are you sure you want to remove this objective?",
            _ => "Are you sure?",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Applied,
    Declined,
}

pub struct Editor<S: KeyValueStore> {
    snapshots: SnapshotStore<S>,
    document: Option<Skillmap>,
    file_name: String,
    selected: usize,
    policy: FilenamePolicy,
}

impl<S: KeyValueStore> Editor<S> {
    /// Start a session, restoring the previous one from `store` when it is intact.
    pub fn restore(store: S, policy: FilenamePolicy) -> Self {
        let snapshots = SnapshotStore::new(store);
        let (document, file_name, selected) = match snapshots.load() {
            Some(restored) => {
                let selected = snapshots.load_selection(restored.document.modules.len());
                (Some(restored.document), restored.file_name, selected)
            }
            None => (None, String::new(), 0),
        };
        Self {
            snapshots,
            document,
            file_name,
            selected,
            policy,
        }
    }

    pub const fn document(&self) -> Option<&Skillmap> {
        self.document.as_ref()
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub const fn selected_module(&self) -> usize {
        self.selected
    }

    pub const fn snapshots(&self) -> &SnapshotStore<S> {
        &self.snapshots
    }

    /// Replace the session with an uploaded file. On failure nothing changes.
    pub fn load_file(&mut self, raw_text: &str, filename: &str) -> Result<&Skillmap> {
        let imported = transfer::import_file(raw_text, filename, self.policy)?;
        self.file_name = imported.display_filename;
        self.selected = 0;
        let document = self.commit(imported.document);
        Ok(document)
    }

    /// Apply one edit. Destructive edits ask `confirm` first.
    pub fn apply(&mut self, edit: Edit, confirm: &mut dyn Confirm) -> Result<EditOutcome> {
        let current = self.document.as_ref().ok_or(SkillmapError::NoDocument)?;
        debug!(?edit, "applying edit");

        // Evaluate first so refused edits fail before the user is asked anything.
        let (next, selected) = self.evaluate(current, &edit)?;
        if edit.is_destructive() && !confirm.confirm(edit.prompt())? {
            debug!("edit declined");
            return Ok(EditOutcome::Declined);
        }

        self.selected = selected;
        self.commit(next);
        Ok(EditOutcome::Applied)
    }

    /// Serialize the live document for download.
    pub fn export(&self) -> Result<ExportPayload> {
        let document = self.document.as_ref().ok_or(SkillmapError::NoDocument)?;
        let payload = transfer::export_file(document, &self.file_name)?;
        info!(file = %payload.filename, bytes = payload.bytes.len(), "exported skillmap");
        Ok(payload)
    }

    /// Drop the document and its snapshot. Returns `false` when declined.
    pub fn clear(&mut self, confirm: &mut dyn Confirm) -> Result<bool> {
        if !confirm.confirm("Are you sure you want to clear the current skillmap?")? {
            return Ok(false);
        }
        self.snapshots.clear()?;
        self.document = None;
        self.file_name.clear();
        self.selected = 0;
        info!("cleared skillmap session");
        Ok(true)
    }

    fn commit(&mut self, document: Skillmap) -> &Skillmap {
        self.snapshots.save_best_effort(&document, &self.file_name);
        self.snapshots.save_selection(self.selected);
        self.document.insert(document)
    }

    fn evaluate(&self, doc: &Skillmap, edit: &Edit) -> Result<(Skillmap, usize)> {
        let selected = self.selected;
        let result = match edit {
            Edit::SetMetadata { title, description } => {
                (ops::set_metadata(doc, title.as_str(), description.as_str()), selected)
            }
            Edit::SelectModule { index } => {
                check_module(doc, *index)?;
                (doc.clone(), *index)
            }
            Edit::AddModule { title } => {
                let index = doc.modules.len();
                let added = ops::add_module(doc);
                let next = match title {
                    Some(title) => ops::rename_module(&added, index, title)?,
                    None => added,
                };
                (next, index)
            }
            Edit::RemoveModule { index } => {
                let next = ops::remove_module(doc, *index)?;
                let selected = selection::after_removal(*index, next.modules.len());
                (next, selected)
            }
            Edit::ReorderModules { order } => (
                ops::reorder_modules(doc, order)?,
                selection::after_reorder(selected, order),
            ),
            Edit::MoveModule { from, to } => (
                ops::move_module(doc, *from, *to)?,
                selection::after_move(selected, *from, *to),
            ),
            Edit::RenameModule { index, title } => {
                (ops::rename_module(doc, *index, title)?, selected)
            }
            Edit::UpdateModule { index, module } => {
                (ops::update_module(doc, *index, module.clone())?, selected)
            }
            Edit::AddObjective { module } => {
                (self.edit_module(doc, *module, |m| Ok(ops::add_objective(m)))?, selected)
            }
            Edit::RemoveObjective { module, objective } => (
                self.edit_module(doc, *module, |m| ops::remove_objective(m, *objective))?,
                selected,
            ),
            Edit::SetGoal {
                module,
                objective,
                goal,
            } => (
                self.edit_objective(doc, *module, *objective, |o| {
                    Ok(ops::set_goal(o, goal.as_str()))
                })?,
                selected,
            ),
            Edit::UpdateObjective {
                module,
                objective,
                value,
            } => (
                self.edit_module(doc, *module, |m| {
                    ops::update_objective(m, *objective, value.clone())
                })?,
                selected,
            ),
            Edit::AddSkill {
                module,
                objective,
                value,
            } => (
                self.edit_objective(doc, *module, *objective, |o| {
                    let added = ops::add_skill(o);
                    match value {
                        Some(value) => {
                            ops::update_skill(&added, added.skills.len() - 1, value.as_str())
                        }
                        None => Ok(added),
                    }
                })?,
                selected,
            ),
            Edit::RemoveSkill {
                module,
                objective,
                skill,
            } => (
                self.edit_objective(doc, *module, *objective, |o| ops::remove_skill(o, *skill))?,
                selected,
            ),
            Edit::UpdateSkill {
                module,
                objective,
                skill,
                value,
            } => (
                self.edit_objective(doc, *module, *objective, |o| {
                    ops::update_skill(o, *skill, value.as_str())
                })?,
                selected,
            ),
        };
        Ok(result)
    }

    fn edit_module(
        &self,
        doc: &Skillmap,
        module: Option<usize>,
        edit: impl FnOnce(&Module) -> std::result::Result<Module, EditError>,
    ) -> Result<Skillmap> {
        let index = module.unwrap_or(self.selected);
        let current = check_module(doc, index)?;
        Ok(ops::update_module(doc, index, edit(current)?)?)
    }

    fn edit_objective(
        &self,
        doc: &Skillmap,
        module: Option<usize>,
        objective: usize,
        edit: impl FnOnce(&Objective) -> std::result::Result<Objective, EditError>,
    ) -> Result<Skillmap> {
        self.edit_module(doc, module, |m| {
            let current = m.objective(objective).ok_or(EditError::IndexOutOfRange {
                level: Level::Objective,
                index: objective,
                len: m.objectives.len(),
            })?;
            ops::update_objective(m, objective, edit(current)?)
        })
    }
}

fn check_module(doc: &Skillmap, index: usize) -> std::result::Result<&Module, EditError> {
    doc.module(index).ok_or(EditError::IndexOutOfRange {
        level: Level::Module,
        index,
        len: doc.modules.len(),
    })
}
