//! skillmap objective - Objectives of one module

use clap::{Args, Subcommand};

use crate::app::AppContext;
use crate::cli::commands::emit_outcome;
use crate::cli::confirm::ConsoleConfirm;
use crate::editor::{Edit, EditOutcome};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ObjectiveArgs {
    /// Module index (default: the selected module)
    #[arg(long, global = true)]
    pub module: Option<usize>,

    #[command(subcommand)]
    pub command: ObjectiveCommand,
}

#[derive(Subcommand, Debug)]
pub enum ObjectiveCommand {
    /// Append an objective
    Add {
        /// Goal for the new objective
        #[arg(long)]
        goal: Option<String>,
    },

    /// Remove an objective (asks for confirmation)
    Remove {
        /// Objective index
        index: usize,
    },

    /// Replace an objective's goal
    Goal {
        /// Objective index
        index: usize,
        /// New goal text
        text: String,
    },
}

pub fn run(ctx: &AppContext, args: &ObjectiveArgs) -> Result<()> {
    let mut editor = ctx.open_editor()?;
    let mut confirm = ConsoleConfirm::from_context(ctx);
    let module = args.module;

    let outcome = match &args.command {
        ObjectiveCommand::Add { goal } => {
            editor.apply(Edit::AddObjective { module }, &mut confirm)?;
            if let Some(goal) = goal {
                let target = module.unwrap_or_else(|| editor.selected_module());
                let objective = editor
                    .document()
                    .and_then(|doc| doc.module(target))
                    .map_or(0, |m| m.objectives.len().saturating_sub(1));
                editor.apply(
                    Edit::SetGoal {
                        module,
                        objective,
                        goal: goal.clone(),
                    },
                    &mut confirm,
                )?;
            }
            EditOutcome::Applied
        }
        ObjectiveCommand::Remove { index } => editor.apply(
            Edit::RemoveObjective {
                module,
                objective: *index,
            },
            &mut confirm,
        )?,
        ObjectiveCommand::Goal { index, text } => editor.apply(
            Edit::SetGoal {
                module,
                objective: *index,
                goal: text.clone(),
            },
            &mut confirm,
        )?,
    };

    emit_outcome(ctx, &editor, outcome)
}
