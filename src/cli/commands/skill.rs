//! skillmap skill - Skills of one objective

use clap::{Args, Subcommand};

use crate::app::AppContext;
use crate::cli::commands::emit_outcome;
use crate::cli::confirm::ConsoleConfirm;
use crate::editor::Edit;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct SkillArgs {
    /// Module index (default: the selected module)
    #[arg(long, global = true)]
    pub module: Option<usize>,

    #[command(subcommand)]
    pub command: SkillCommand,
}

#[derive(Subcommand, Debug)]
pub enum SkillCommand {
    /// Append a skill to an objective
    Add {
        /// Objective index
        objective: usize,
        /// Skill text (default: "New skill")
        value: Option<String>,
    },

    /// Remove a skill
    Remove {
        /// Objective index
        objective: usize,
        /// Skill index
        index: usize,
    },

    /// Replace a skill's text
    Set {
        /// Objective index
        objective: usize,
        /// Skill index
        index: usize,
        /// New skill text
        value: String,
    },
}

pub fn run(ctx: &AppContext, args: &SkillArgs) -> Result<()> {
    let mut editor = ctx.open_editor()?;
    let module = args.module;

    let edit = match &args.command {
        SkillCommand::Add { objective, value } => Edit::AddSkill {
            module,
            objective: *objective,
            value: value.clone(),
        },
        SkillCommand::Remove { objective, index } => Edit::RemoveSkill {
            module,
            objective: *objective,
            skill: *index,
        },
        SkillCommand::Set {
            objective,
            index,
            value,
        } => Edit::UpdateSkill {
            module,
            objective: *objective,
            skill: *index,
            value: value.clone(),
        },
    };

    let outcome = editor.apply(edit, &mut ConsoleConfirm::from_context(ctx))?;
    emit_outcome(ctx, &editor, outcome)
}
