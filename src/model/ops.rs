//! Pure edit operations
//!
//! Each operation borrows the current value and returns a new one. Indices
//! are positional; callers must re-resolve any index they hold after a
//! structural edit (see [`super::selection`]).

use super::document::{DEFAULT_SKILL, Module, Objective, Skillmap};
use super::{EditError, Level};

type EditResult<T> = std::result::Result<T, EditError>;

// =============================================================================
// SKILLMAP
// =============================================================================

#[must_use]
pub fn set_metadata(
    doc: &Skillmap,
    title: impl Into<String>,
    description: impl Into<String>,
) -> Skillmap {
    Skillmap {
        title: title.into(),
        description: description.into(),
        modules: doc.modules.clone(),
    }
}

/// Append a default module. The new module sits at `doc.modules.len()`.
#[must_use]
pub fn add_module(doc: &Skillmap) -> Skillmap {
    with_modules(doc, appended(&doc.modules, Module::default()))
}

/// Remove the module at `index`. The last remaining module can never be removed.
pub fn remove_module(doc: &Skillmap, index: usize) -> EditResult<Skillmap> {
    if doc.modules.len() == 1 {
        return Err(EditError::LastModule);
    }
    Ok(with_modules(doc, remove_at(&doc.modules, index, Level::Module)?))
}

/// Rebuild the module list in the order `new_order` names.
///
/// `new_order` must be a permutation of `0..doc.modules.len()`.
pub fn reorder_modules(doc: &Skillmap, new_order: &[usize]) -> EditResult<Skillmap> {
    let len = doc.modules.len();
    if !is_permutation(new_order, len) {
        return Err(EditError::InvalidPermutation {
            order: new_order.to_vec(),
            len,
        });
    }
    let modules = new_order.iter().map(|&i| doc.modules[i].clone()).collect();
    Ok(with_modules(doc, modules))
}

/// Drag-and-drop move: take the module out of `from` and insert it at `to`
/// in the shortened list, so it ends up at index `to`.
pub fn move_module(doc: &Skillmap, from: usize, to: usize) -> EditResult<Skillmap> {
    Ok(with_modules(
        doc,
        move_item(&doc.modules, from, to, Level::Module)?,
    ))
}

pub fn update_module(doc: &Skillmap, index: usize, module: Module) -> EditResult<Skillmap> {
    Ok(with_modules(
        doc,
        replace_at(&doc.modules, index, module, Level::Module)?,
    ))
}

/// Set a module title. Surrounding whitespace is dropped and a blank title is refused.
pub fn rename_module(doc: &Skillmap, index: usize, title: &str) -> EditResult<Skillmap> {
    let title = title.trim();
    if title.is_empty() {
        return Err(EditError::EmptyTitle);
    }
    let current = doc.modules.get(index).ok_or(EditError::IndexOutOfRange {
        level: Level::Module,
        index,
        len: doc.modules.len(),
    })?;
    let renamed = Module {
        title: title.to_string(),
        objectives: current.objectives.clone(),
    };
    update_module(doc, index, renamed)
}

// =============================================================================
// MODULE
// =============================================================================

#[must_use]
pub fn add_objective(module: &Module) -> Module {
    with_objectives(module, appended(&module.objectives, Objective::default()))
}

pub fn remove_objective(module: &Module, index: usize) -> EditResult<Module> {
    Ok(with_objectives(
        module,
        remove_at(&module.objectives, index, Level::Objective)?,
    ))
}

pub fn update_objective(module: &Module, index: usize, objective: Objective) -> EditResult<Module> {
    Ok(with_objectives(
        module,
        replace_at(&module.objectives, index, objective, Level::Objective)?,
    ))
}

// =============================================================================
// OBJECTIVE
// =============================================================================

#[must_use]
pub fn set_goal(objective: &Objective, goal: impl Into<String>) -> Objective {
    Objective {
        goal: goal.into(),
        skills: objective.skills.clone(),
    }
}

#[must_use]
pub fn add_skill(objective: &Objective) -> Objective {
    with_skills(
        objective,
        appended(&objective.skills, DEFAULT_SKILL.to_string()),
    )
}

pub fn remove_skill(objective: &Objective, index: usize) -> EditResult<Objective> {
    Ok(with_skills(
        objective,
        remove_at(&objective.skills, index, Level::Skill)?,
    ))
}

pub fn update_skill(
    objective: &Objective,
    index: usize,
    value: impl Into<String>,
) -> EditResult<Objective> {
    Ok(with_skills(
        objective,
        replace_at(&objective.skills, index, value.into(), Level::Skill)?,
    ))
}

// =============================================================================
// POSITIONAL HELPERS
// =============================================================================

fn with_modules(doc: &Skillmap, modules: Vec<Module>) -> Skillmap {
    Skillmap {
        title: doc.title.clone(),
        description: doc.description.clone(),
        modules,
    }
}

fn with_objectives(module: &Module, objectives: Vec<Objective>) -> Module {
    Module {
        title: module.title.clone(),
        objectives,
    }
}

fn with_skills(objective: &Objective, skills: Vec<String>) -> Objective {
    Objective {
        goal: objective.goal.clone(),
        skills,
    }
}

const fn check_index(level: Level, index: usize, len: usize) -> EditResult<()> {
    if index < len {
        Ok(())
    } else {
        Err(EditError::IndexOutOfRange { level, index, len })
    }
}

fn appended<T: Clone>(items: &[T], item: T) -> Vec<T> {
    let mut out = Vec::with_capacity(items.len() + 1);
    out.extend_from_slice(items);
    out.push(item);
    out
}

fn replace_at<T: Clone>(items: &[T], index: usize, item: T, level: Level) -> EditResult<Vec<T>> {
    check_index(level, index, items.len())?;
    let mut out = items.to_vec();
    out[index] = item;
    Ok(out)
}

fn remove_at<T: Clone>(items: &[T], index: usize, level: Level) -> EditResult<Vec<T>> {
    check_index(level, index, items.len())?;
    let mut out = items.to_vec();
    out.remove(index);
    Ok(out)
}

fn move_item<T: Clone>(items: &[T], from: usize, to: usize, level: Level) -> EditResult<Vec<T>> {
    check_index(level, from, items.len())?;
    check_index(level, to, items.len())?;
    let mut out = items.to_vec();
    if from != to {
        let item = out.remove(from);
        out.insert(to, item);
    }
    Ok(out)
}

fn is_permutation(order: &[usize], len: usize) -> bool {
    if order.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    for &index in order {
        if index >= len || seen[index] {
            return false;
        }
        seen[index] = true;
    }
    true
}
